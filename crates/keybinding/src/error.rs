use thiserror::Error;

/// Validation errors for key mapping descriptors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A mode name outside the four applicability values.
    #[error("invalid mode '{value}': expected one of all, normal, visual, insert")]
    InvalidMode {
        /// The rejected input.
        value: String,
    },
}
