use marionette_core::BlendMode;
use marionette_graphics::BlendFunction;

/// Blend function a slot's blend mode is drawn with.
///
/// | mode     | premultiplied | function     |
/// |----------|---------------|--------------|
/// | Normal   | yes           | `Additive`   |
/// | Normal   | no            | `Alpha`      |
/// | Additive | either        | `Additive`   |
/// | Multiply | either        | `Multiplied` |
/// | Screen   | either        | `Additive`   |
pub fn resolve_blend(mode: BlendMode, premultiplied_alpha: bool) -> BlendFunction {
    match mode {
        BlendMode::Normal if premultiplied_alpha => BlendFunction::Additive,
        BlendMode::Normal => BlendFunction::Alpha,
        BlendMode::Additive => BlendFunction::Additive,
        BlendMode::Multiply => BlendFunction::Multiplied,
        BlendMode::Screen => BlendFunction::Additive,
    }
}
