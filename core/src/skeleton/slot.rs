use crate::blend::BlendMode;
use crate::color::Color;

use super::attachment::Attachment;

/// A named attachment point in draw order, bound to one bone.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub name: String,
    /// Index of the bone in the owning skeleton.
    pub bone: usize,
    pub color: Color,
    pub blend_mode: BlendMode,
    /// Currently active attachment, if any.
    pub attachment: Option<Attachment>,
}

impl Slot {
    pub fn new(name: impl Into<String>, bone: usize) -> Self {
        Self {
            name: name.into(),
            bone,
            color: Color::WHITE,
            blend_mode: BlendMode::Normal,
            attachment: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment: impl Into<Attachment>) -> Self {
        self.attachment = Some(attachment.into());
        self
    }
}
