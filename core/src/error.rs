//! Core error types.

use std::path::PathBuf;

/// Errors raised while building or mutating a skeleton.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkeletonError {
    /// A blend mode code or name that the renderer does not know.
    #[error("unknown blend mode: {0}")]
    UnknownBlendMode(String),
    /// A slot references a bone index past the end of the bone list.
    #[error("slot '{slot}' references bone {bone}, but the skeleton has {bone_count} bones")]
    BoneOutOfRange {
        slot: String,
        bone: usize,
        bone_count: usize,
    },
    /// A slot index past the end of the slot list.
    #[error("slot index {index} out of range (slot count: {slot_count})")]
    SlotOutOfRange { index: usize, slot_count: usize },
    /// A draw order that is not a permutation of the slot indices.
    #[error("invalid draw order: {0}")]
    InvalidDrawOrder(String),
    /// An atlas page index past the end of the page list.
    #[error("atlas page {index} out of range (page count: {page_count})")]
    PageOutOfRange { index: usize, page_count: usize },
    /// Attachment geometry with inconsistent array lengths.
    #[error("malformed attachment '{name}': {reason}")]
    MalformedAttachment { name: String, reason: String },
}

/// Errors raised by a [`TextureLoader`](crate::atlas::TextureLoader).
#[derive(Debug, thiserror::Error)]
pub enum TextureLoadError {
    /// The page image could not be read.
    #[error("failed to read texture {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The page image could not be decoded.
    #[error("failed to decode texture {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SkeletonError::UnknownBlendMode("7".to_string());
        assert_eq!(err.to_string(), "unknown blend mode: 7");

        let err = SkeletonError::BoneOutOfRange {
            slot: "head".to_string(),
            bone: 4,
            bone_count: 2,
        };
        assert_eq!(
            err.to_string(),
            "slot 'head' references bone 4, but the skeleton has 2 bones"
        );
    }
}
