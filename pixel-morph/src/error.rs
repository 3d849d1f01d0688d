use crate::grid::GridSize;

/// Errors produced while preparing or solving a morph.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// The input image could not be read or decoded.
    #[error("failed to load image")]
    Image(#[from] image::ImageError),

    /// A grid with zero pixels has nothing to match.
    #[error("grid has no pixels")]
    EmptyGrid,

    /// The assignment is only defined for grids of identical dimensions.
    #[error("grid size mismatch: source {source}, target {target}")]
    GridMismatch { source: GridSize, target: GridSize },
}
