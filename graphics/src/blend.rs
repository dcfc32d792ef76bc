//! Concrete blend functions and the blend state they configure.
//!
//! [`BlendFunction`] is what an immediate-mode backend is switched to between
//! draws. Each function corresponds to a fixed [`BlendState`] that a GPU
//! pipeline can be built from.

/// Blend factor for blending operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendFactor {
    /// 0.0
    #[default]
    Zero,
    /// 1.0
    One,
    /// Source color
    Src,
    /// 1 - source color
    OneMinusSrc,
    /// Source alpha
    SrcAlpha,
    /// 1 - source alpha
    OneMinusSrcAlpha,
    /// Destination color
    Dst,
    /// 1 - destination color
    OneMinusDst,
    /// Destination alpha
    DstAlpha,
    /// 1 - destination alpha
    OneMinusDstAlpha,
}

/// Blend operation for combining colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendOperation {
    /// source + destination
    #[default]
    Add,
    /// source - destination
    Subtract,
    /// destination - source
    ReverseSubtract,
}

/// Blend component configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendComponent {
    /// Source factor.
    pub src_factor: BlendFactor,
    /// Destination factor.
    pub dst_factor: BlendFactor,
    /// Blend operation.
    pub operation: BlendOperation,
}

impl Default for BlendComponent {
    fn default() -> Self {
        Self {
            src_factor: BlendFactor::One,
            dst_factor: BlendFactor::Zero,
            operation: BlendOperation::Add,
        }
    }
}

impl BlendComponent {
    const fn add(src_factor: BlendFactor, dst_factor: BlendFactor) -> Self {
        Self {
            src_factor,
            dst_factor,
            operation: BlendOperation::Add,
        }
    }

    /// Standard alpha blending (src over dst).
    pub const fn over() -> Self {
        Self::add(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha)
    }

    /// Source weighted by its alpha, added to the destination.
    pub const fn additive() -> Self {
        Self::add(BlendFactor::SrcAlpha, BlendFactor::One)
    }

    /// Destination color scaled by the source.
    pub const fn multiplied() -> Self {
        Self::add(BlendFactor::Dst, BlendFactor::OneMinusSrcAlpha)
    }
}

/// Blend state for color blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlendState {
    /// Color blend component.
    pub color: BlendComponent,
    /// Alpha blend component.
    pub alpha: BlendComponent,
}

impl BlendState {
    const fn uniform(component: BlendComponent) -> Self {
        Self {
            color: component,
            alpha: component,
        }
    }
}

/// Blend function an immediate-mode backend can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendFunction {
    /// Straight alpha blending. Backend default.
    #[default]
    Alpha,
    /// Additive blending.
    Additive,
    /// Multiplicative blending.
    Multiplied,
}

impl BlendFunction {
    /// Blend state realizing this function.
    pub const fn state(self) -> BlendState {
        match self {
            BlendFunction::Alpha => BlendState::uniform(BlendComponent::over()),
            BlendFunction::Additive => BlendState::uniform(BlendComponent::additive()),
            BlendFunction::Multiplied => BlendState::uniform(BlendComponent::multiplied()),
        }
    }
}

impl From<BlendFunction> for BlendState {
    fn from(function: BlendFunction) -> Self {
        function.state()
    }
}
