//! Core data model: the text buffer and the cursor that edits it

pub mod buffer;
pub mod cursor;
