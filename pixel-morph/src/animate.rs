use std::io;
use std::thread;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::easing;
use crate::grid::GridSize;
use crate::interpolate;
use crate::plan::MorphPlan;
use crate::weights::CostWeights;

/// Everything tunable about one morph run.
pub struct MorphConfig {
    pub grid: GridSize,
    pub weights: CostWeights,
    pub frames: u32,
    pub frame_interval: Duration,
    pub easing: fn(f32) -> f32,

    /// 0.0 keeps every marker at its source color for the whole flight;
    /// 1.0 crossfades it fully to its matched target color.
    pub color_shift: f32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::new(48, 48),
            weights: CostWeights::BALANCED,
            frames: 110,
            frame_interval: Duration::from_millis(30),
            easing: easing::smooth_step,
            color_shift: 0.0,
        }
    }
}

/// Plays the whole flight on `backend`, ending exactly on the target
/// arrangement. Only cell deltas between consecutive frames are flushed.
pub fn play<B: Backend>(backend: &mut B, plan: &MorphPlan, config: &MorphConfig) -> io::Result<()> {
    let area = Rect::new(0, 0, plan.size.width, plan.size.height);
    let mut last_flushed = Buffer::empty(area);

    for frame in 0..=config.frames {
        let raw_t = if config.frames == 0 {
            1.0
        } else {
            frame as f32 / config.frames as f32
        };
        let t = (config.easing)(raw_t);

        let next = interpolate::render(plan, t, config.color_shift);
        let updates = last_flushed.diff(&next);
        backend.draw(updates.into_iter())?;
        backend.flush()?;
        last_flushed = next;

        if frame < config.frames {
            thread::sleep(config.frame_interval);
        }
    }

    Ok(())
}
