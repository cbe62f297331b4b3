//! Error types for script loading and validation.

use thiserror::Error;

/// Alias for `Result<T, ScriptError>`.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors raised while loading or validating a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script has no characters to play through.
    #[error("script has an empty cast")]
    EmptyCast,

    /// Two cast members share a display name.
    #[error("duplicate character: \"{0}\"")]
    DuplicateCharacter(String),

    /// A character has no dialogues to walk.
    #[error("character \"{0}\" has no dialogues")]
    NoDialogues(String),

    /// A dialogue offers the player nothing to choose.
    #[error("dialogue {index} of \"{character}\" has no options")]
    NoOptions {
        /// The owning character's name.
        character: String,
        /// Zero-based position of the dialogue in the character's list.
        index: usize,
    },

    /// The script file could not be read.
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    /// The script is not a valid JSON script document.
    #[error("failed to parse script: {0}")]
    Json(#[from] serde_json::Error),
}
