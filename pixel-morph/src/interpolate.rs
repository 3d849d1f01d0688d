use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::plan::{MorphPlan, MorphPoint};

const MARKER: &str = "█";

/// Renders one frame of the flight. `t` must be in `[0.0, 1.0]` and is
/// already eased by the caller.
///
/// Later points overwrite earlier ones when two markers cross the same
/// cell mid-flight.
pub fn render(plan: &MorphPlan, t: f32, color_shift: f32) -> Buffer {
    let area = Rect::new(0, 0, plan.size.width, plan.size.height);
    let mut buf = Buffer::empty(area);

    for point in &plan.points {
        let x = lerp_pos(point.src_x, point.dst_x, t);
        let y = lerp_pos(point.src_y, point.dst_y, t);

        if x >= plan.size.width || y >= plan.size.height {
            continue;
        }

        let cell = &mut buf[(x, y)];
        cell.set_symbol(MARKER);
        cell.set_style(Style::new().fg(marker_color(point, t, color_shift)));
    }

    buf
}

/// Markers keep their source color; a positive shift crossfades them
/// toward the matched target color as they travel.
fn marker_color(point: &MorphPoint, t: f32, color_shift: f32) -> Color {
    if color_shift <= 0.0 {
        let [r, g, b] = point.src_color.rgb;
        return Color::Rgb(r, g, b);
    }

    let lch = point.src_color.oklch.lerp(point.dst_color.oklch, t * color_shift);
    let [r, g, b] = lch.to_rgb();

    Color::Rgb(r, g, b)
}

fn lerp_pos(src: u16, dst: u16, t: f32) -> u16 {
    let s = src as f32;
    let d = dst as f32;

    (s + (d - s) * t).round() as u16
}
