// Typed errors with thiserror. Surface meaningful messages to JS.
// See README: Rust Rules (Engine)

use thiserror::Error;

/// Navigation engine error types.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Section table is empty")]
    EmptySectionTable,

    #[error("Section index {index} out of range (table has {count} sections)")]
    SectionOutOfRange { index: u32, count: usize },

    #[error("Viewport height must be positive and finite, got {height}")]
    InvalidViewport { height: f32 },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        NavError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NavError::SectionOutOfRange { index: 9, count: 3 };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('3'));
    }
}
