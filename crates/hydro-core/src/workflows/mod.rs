//! High-level procedures that tie the core models and the engine together.

pub mod profile;
