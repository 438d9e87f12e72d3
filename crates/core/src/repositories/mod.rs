//! Repository management modules.
//!
//! Services that operate on persisted collections. There is a single
//! collection, notes.

pub mod notes;
