//! Abstract slot blend modes.
//!
//! These are the modes an authoring tool assigns to slots. The renderer maps
//! them to a concrete backend blend function together with the atlas page's
//! premultiplied-alpha flag.

use std::fmt;
use std::str::FromStr;

use crate::error::SkeletonError;

/// Blend mode assigned to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum BlendMode {
    #[default]
    Normal = 0,
    Additive = 1,
    Multiply = 2,
    Screen = 3,
}

impl BlendMode {
    pub const ALL: [BlendMode; 4] = [
        BlendMode::Normal,
        BlendMode::Additive,
        BlendMode::Multiply,
        BlendMode::Screen,
    ];

    /// Convert from the numeric code used by skeleton data files.
    pub fn from_u32(value: u32) -> Result<Self, SkeletonError> {
        match value {
            0 => Ok(BlendMode::Normal),
            1 => Ok(BlendMode::Additive),
            2 => Ok(BlendMode::Multiply),
            3 => Ok(BlendMode::Screen),
            other => Err(SkeletonError::UnknownBlendMode(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Additive => "additive",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
        }
    }
}

impl TryFrom<u32> for BlendMode {
    type Error = SkeletonError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u32(value)
    }
}

impl FromStr for BlendMode {
    type Err = SkeletonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlendMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SkeletonError::UnknownBlendMode(s.to_string()))
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
