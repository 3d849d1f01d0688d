use crate::error::MorphError;
use crate::grid::{GridSize, PixelGrid};
use crate::oklch::Oklch;
use crate::solver;
use crate::weights::CostWeights;

/// Frozen morph artifact. Produced by the solver once per run, consumed
/// read-only by the interpolator for every frame, then discarded.
pub struct MorphPlan {
    pub size: GridSize,
    pub points: Vec<MorphPoint>,
}

/// One marker's full flight: where it starts, where it lands, and the
/// colors at both ends.
pub struct MorphPoint {
    pub src_x: u16,
    pub src_y: u16,
    pub dst_x: u16,
    pub dst_y: u16,
    pub src_color: ColorPair,
    pub dst_color: ColorPair,
}

/// An RGB color with its Oklch form precomputed, so per-frame rendering
/// never re-derives color spaces.
#[derive(Debug, Clone, Copy)]
pub struct ColorPair {
    pub rgb: [u8; 3],
    pub oklch: Oklch,
}

impl ColorPair {
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self {
            rgb,
            oklch: Oklch::from_rgb(rgb),
        }
    }
}

impl MorphPlan {
    /// Runs the assignment solver and decodes its output into per-point
    /// flights.
    pub fn build(
        source: &PixelGrid,
        target: &PixelGrid,
        weights: &CostWeights,
    ) -> Result<Self, MorphError> {
        let assignment = solver::assign(source, target, weights)?;
        let size = source.size();

        let points = assignment
            .iter()
            .enumerate()
            .map(|(i, &j)| {
                let src = source.point(i);
                let (dst_x, dst_y) = size.coords_of(j);

                MorphPoint {
                    src_x: src.x,
                    src_y: src.y,
                    dst_x,
                    dst_y,
                    src_color: ColorPair::from_rgb(src.color),
                    dst_color: ColorPair::from_rgb(target.color(j)),
                }
            })
            .collect();

        Ok(Self { size, points })
    }
}
