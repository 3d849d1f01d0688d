/// Linear coefficients on the solver's two normalized cost terms.
///
/// Both terms live in `[0, 1]`, so the weights trade color fidelity
/// directly against travel distance. They conventionally sum to 1 but the
/// solver does not require it.
#[derive(Debug, Clone, Copy)]
pub struct CostWeights {
    pub color: f32,
    pub position: f32,
}

impl CostWeights {
    /// Mostly color-driven with a mild pull toward nearby cells.
    pub const BALANCED: Self = Self {
        color: 0.9,
        position: 0.1,
    };

    /// Pure color matching — a pixel crosses the whole grid for a like color.
    pub const CHROMATIC: Self = Self {
        color: 1.0,
        position: 0.0,
    };

    /// Movement-averse — color and distance pull equally hard.
    pub const VISCOUS: Self = Self {
        color: 0.5,
        position: 0.5,
    };
}

impl Default for CostWeights {
    fn default() -> Self {
        Self::BALANCED
    }
}
