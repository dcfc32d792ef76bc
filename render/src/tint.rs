use marionette_core::Color;

/// Vertex tint for a slot.
///
/// With premultiplied alpha the RGB channels are scaled by the combined
/// alpha. Without it they are left unscaled. Values are not clamped.
pub fn slot_tint(skeleton: Color, slot: Color, premultiplied_alpha: bool) -> Color {
    let tint = skeleton.modulate(slot);
    if !premultiplied_alpha {
        return tint;
    }
    Color::new(tint.r * tint.a, tint.g * tint.a, tint.b * tint.a, tint.a)
}
