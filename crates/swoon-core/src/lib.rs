//! Core types for Swoon: scripts, characters, dialogues, and affinity.
//!
//! This crate defines the data model that play sessions walk. It is
//! independent of any front-end — you can construct a [`Script`] with the
//! builders or deserialize one from JSON.

/// Affinity score tracking.
pub mod affinity;
/// Cast members and their builders.
pub mod character;
/// The bundled demo script.
pub mod demo;
/// Dialogue prompts and response options.
pub mod dialogue;
/// Error types used throughout the crate.
pub mod error;
/// The script document and its validation.
pub mod script;

/// Re-export the affinity score type.
pub use affinity::Affinity;
/// Re-export the cast member type.
pub use character::Character;
/// Re-export the bundled demo script.
pub use demo::demo;
/// Re-export dialogue types.
pub use dialogue::{Dialogue, DialogueOption};
/// Re-export error types.
pub use error::{ScriptError, ScriptResult};
/// Re-export the script document type.
pub use script::Script;
