//! Graphics error types.

use thiserror::Error;

/// Errors that can occur in the graphics layer.
#[derive(Debug, Error)]
pub enum GraphicsError {
    /// Image data could not be decoded.
    #[error("image decode failed: {0}")]
    ImageDecode(#[from] image::ImageError),
    /// A frame ended with an open primitive or unbalanced matrix stack.
    #[error("unbalanced backend state: {0}")]
    UnbalancedState(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphicsError::UnbalancedState("1 matrix left pushed".to_string());
        assert_eq!(
            err.to_string(),
            "unbalanced backend state: 1 matrix left pushed"
        );
    }
}
