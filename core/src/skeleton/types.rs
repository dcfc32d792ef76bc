use crate::color::Color;
use crate::error::SkeletonError;

use super::attachment::Attachment;
use super::bone::Bone;
use super::slot::Slot;

/// Skeleton state for one frame: bones, slots, draw order, tint and scale.
///
/// The animation runtime owns and mutates this once per frame (world
/// transforms, attachments, draw order); renderers only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    bones: Vec<Bone>,
    slots: Vec<Slot>,
    draw_order: Vec<usize>,
    pub color: Color,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Skeleton {
    /// Create a skeleton whose draw order is the slot order.
    pub fn new(bones: Vec<Bone>, slots: Vec<Slot>) -> Result<Self, SkeletonError> {
        for slot in &slots {
            if slot.bone >= bones.len() {
                return Err(SkeletonError::BoneOutOfRange {
                    slot: slot.name.clone(),
                    bone: slot.bone,
                    bone_count: bones.len(),
                });
            }
        }
        let draw_order = (0..slots.len()).collect();
        Ok(Self {
            bones,
            slots,
            draw_order,
            color: Color::WHITE,
            scale_x: 1.0,
            scale_y: 1.0,
        })
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bone(&self, index: usize) -> Option<&Bone> {
        self.bones.get(index)
    }

    pub fn bone_mut(&mut self, index: usize) -> Option<&mut Bone> {
        self.bones.get_mut(index)
    }

    pub fn find_bone(&self, name: &str) -> Option<usize> {
        self.bones.iter().position(|bone| bone.name == name)
    }

    /// Slots in setup order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    pub fn find_slot(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name == name)
    }

    /// Bone a slot is attached to.
    pub fn slot_bone(&self, slot: &Slot) -> Option<&Bone> {
        self.bones.get(slot.bone)
    }

    /// Slots in back-to-front paint order.
    pub fn draw_order(&self) -> impl ExactSizeIterator<Item = &Slot> + '_ {
        self.draw_order.iter().map(|&index| &self.slots[index])
    }

    pub fn draw_order_indices(&self) -> &[usize] {
        &self.draw_order
    }

    /// Replace the draw order. `order` must be a permutation of the slot indices.
    pub fn set_draw_order(&mut self, order: Vec<usize>) -> Result<(), SkeletonError> {
        if order.len() != self.slots.len() {
            return Err(SkeletonError::InvalidDrawOrder(format!(
                "{} entries for {} slots",
                order.len(),
                self.slots.len()
            )));
        }
        let mut seen = vec![false; self.slots.len()];
        for &index in &order {
            match seen.get_mut(index) {
                Some(flag) if !*flag => *flag = true,
                Some(_) => {
                    return Err(SkeletonError::InvalidDrawOrder(format!(
                        "slot {index} appears more than once"
                    )));
                }
                None => {
                    return Err(SkeletonError::InvalidDrawOrder(format!(
                        "slot {index} does not exist"
                    )));
                }
            }
        }
        self.draw_order = order;
        Ok(())
    }

    /// Set or clear the active attachment of a slot.
    pub fn set_attachment(
        &mut self,
        slot: usize,
        attachment: Option<Attachment>,
    ) -> Result<(), SkeletonError> {
        let slot_count = self.slots.len();
        let slot = self
            .slots
            .get_mut(slot)
            .ok_or(SkeletonError::SlotOutOfRange {
                index: slot,
                slot_count,
            })?;
        slot.attachment = attachment;
        Ok(())
    }
}
