//! In-memory note storage.

mod notes;

pub use notes::NoteStore;
