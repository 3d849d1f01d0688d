use log::debug;

use crate::error::MorphError;
use crate::grid::{PixelGrid, Point};
use crate::weights::CostWeights;

/// Computes the minimum-cost bijection from source pixels to target pixels.
///
/// Entry `i` of the result is the target index assigned to source index `i`;
/// the result is always a permutation of `0..n` and achieves the globally
/// minimal total cost. Tie-breaking among equal-cost optima is unspecified.
pub fn assign(
    source: &PixelGrid,
    target: &PixelGrid,
    weights: &CostWeights,
) -> Result<Vec<usize>, MorphError> {
    if source.size() != target.size() {
        return Err(MorphError::GridMismatch {
            source: source.size(),
            target: target.size(),
        });
    }

    if source.size().is_empty() {
        return Err(MorphError::EmptyGrid);
    }

    let cost = cost_matrix(source, target, weights);
    let permutation = hungarian(&cost);

    debug!(
        "assigned {} pixels, total cost {:.4}",
        permutation.len(),
        permutation
            .iter()
            .enumerate()
            .map(|(i, &j)| cost[i][j])
            .sum::<f32>()
    );

    Ok(permutation)
}

/// Dense all-pairs cost table. Both terms are normalized onto `[0, 1]`
/// before the weights combine them: color by the diagonal of the RGB cube,
/// position by the diagonal of the grid.
fn cost_matrix(source: &PixelGrid, target: &PixelGrid, weights: &CostWeights) -> Vec<Vec<f32>> {
    let size = source.size();
    let n = size.len();

    let color_norm = (3.0f32 * 255.0 * 255.0).sqrt();
    let pos_norm = size.diagonal();

    let mut cost = vec![vec![0.0f32; n]; n];

    for (i, row) in cost.iter_mut().enumerate() {
        let a = source.point(i);

        for (j, entry) in row.iter_mut().enumerate() {
            let b = target.point(j);

            *entry = weights.color * color_distance(a.color, b.color) / color_norm
                + weights.position * grid_distance(&a, &b) / pos_norm;
        }
    }

    cost
}

fn color_distance(a: [u8; 3], b: [u8; 3]) -> f32 {
    let dr = a[0] as f32 - b[0] as f32;
    let dg = a[1] as f32 - b[1] as f32;
    let db = a[2] as f32 - b[2] as f32;

    (dr * dr + dg * dg + db * db).sqrt()
}

fn grid_distance(a: &Point, b: &Point) -> f32 {
    let dx = a.x as f32 - b.x as f32;
    let dy = a.y as f32 - b.y as f32;

    (dx * dx + dy * dy).sqrt()
}

/// Kuhn-Munkres with row/column potentials, O(n³). Square matrices only.
fn hungarian(cost: &[Vec<f32>]) -> Vec<usize> {
    let n = cost.len();

    // 1-based internally; index 0 is the virtual unmatched column.
    let mut u = vec![0.0f32; n + 1];
    let mut v = vec![0.0f32; n + 1];
    let mut matched = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        matched[0] = i;
        let mut j0 = 0usize;
        let mut min_v = vec![f32::INFINITY; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = matched[j0];
            let mut delta = f32::INFINITY;
            let mut j1 = 0usize;

            for j in 1..=n {
                if used[j] {
                    continue;
                }

                let reduced = cost[i0 - 1][j - 1] - u[i0] - v[j];

                if reduced < min_v[j] {
                    min_v[j] = reduced;
                    way[j] = j0;
                }

                if min_v[j] < delta {
                    delta = min_v[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    u[matched[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_v[j] -= delta;
                }
            }

            j0 = j1;

            if matched[j0] == 0 {
                break;
            }
        }

        // Walk the augmenting path back, flipping matches along the way.
        loop {
            let prev = way[j0];
            matched[j0] = matched[prev];
            j0 = prev;

            if j0 == 0 {
                break;
            }
        }
    }

    let mut permutation = vec![0usize; n];

    for j in 1..=n {
        permutation[matched[j] - 1] = j - 1;
    }

    permutation
}
