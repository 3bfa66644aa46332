//! SVG visualization of a computed board plan.
//!
//! Draws the viewport, every seat slot, and an orientation glyph per seat
//! (an "F" — unambiguous under rotation), with a caption describing the
//! plan. Debugging and documentation aid only; the planner never needs it.
//!
//! # Example
//!
//! ```
//! use tableplan::{plan_board, svg::render_board_svg};
//!
//! let plan = plan_board(false, 4, 400.0, 800.0, 8.0);
//! let svg = render_board_svg(&plan, 400.0, 800.0, 8.0);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::plan::{BoardPlan, CircularPlan, Direction};
use crate::rotation::Rotation;
use crate::upright::UprightPlan;

/// Maximum pixel extent of the rendered panel on either axis.
const MAX_PANEL: f64 = 400.0;
/// Margin around the panel.
const MARGIN: f64 = 24.0;
/// Height of the caption line above the panel.
const CAPTION_H: f64 = 20.0;

/// One seat slot ready to draw, in unscaled viewport coordinates.
struct Slot {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    rotation: Rotation,
    /// Logical seat index shown next to the glyph.
    seat: usize,
}

/// Render a complete SVG document for a plan computed from the given
/// viewport and padding.
///
/// The viewport and padding are the same values passed to the planner; the
/// plan itself only carries main-axis sizes.
pub fn render_board_svg(plan: &BoardPlan, max_width: f32, max_height: f32, padding: f32) -> String {
    let (slots, content_w, content_h, caption) = match plan {
        BoardPlan::Circular(board) => circular_slots(board, max_width, max_height, padding),
        BoardPlan::Upright(grid) => upright_slots(grid, max_width, padding),
        BoardPlan::Fallback => (
            Vec::new(),
            max_width.max(1.0) as f64,
            max_height.max(1.0) as f64,
            String::from("fallback · free wrap"),
        ),
    };
    render_document(
        &slots,
        content_w,
        content_h,
        max_width as f64,
        max_height as f64,
        &caption,
    )
}

fn circular_slots(
    board: &CircularPlan,
    max_width: f32,
    max_height: f32,
    padding: f32,
) -> (Vec<Slot>, f64, f64, String) {
    // Cross-axis extent comes from the viewport; main-axis from the plan.
    let cross = match board.direction {
        Direction::Vertical => max_width,
        Direction::Horizontal => max_height,
    } as f64;
    let main: f64 = board.main_extent() as f64;
    let pad = padding as f64;

    let mut slots = Vec::new();
    let mut offset = 0.0f64;
    let mut slot_index = 0usize;
    for (row, &size) in board.topology.iter().zip(&board.row_sizes) {
        let thickness = size as f64;
        let seats = row.seat_count();
        let seat_cross = cross / seats as f64;
        for (i, &rotation) in row.rotations().iter().enumerate() {
            // Horizontal boards are the vertical-first layout turned a
            // quarter: the row stack runs along x and every seat picks up
            // an extra quarter turn.
            let (x, y, w, h, rotation) = match board.direction {
                Direction::Vertical => (
                    seat_cross * i as f64 + pad,
                    offset + pad,
                    seat_cross - 2.0 * pad,
                    thickness - 2.0 * pad,
                    rotation,
                ),
                Direction::Horizontal => (
                    offset + pad,
                    seat_cross * i as f64 + pad,
                    thickness - 2.0 * pad,
                    seat_cross - 2.0 * pad,
                    rotation.compose(Rotation::Quarter),
                ),
            };
            slots.push(Slot {
                x,
                y,
                w,
                h,
                rotation,
                seat: board.order.slot_order[slot_index],
            });
            slot_index += 1;
        }
        offset += thickness;
    }

    let (content_w, content_h) = match board.direction {
        Direction::Vertical => (cross, main),
        Direction::Horizontal => (main, cross),
    };
    let caption = format!(
        "circular · {:?} · {} seats{}",
        board.direction,
        board.seat_count(),
        if board.overflowed { " · overflow" } else { "" }
    );
    (slots, content_w, content_h, caption)
}

fn upright_slots(
    grid: &UprightPlan,
    max_width: f32,
    padding: f32,
) -> (Vec<Slot>, f64, f64, String) {
    let pad = padding as f64;
    let cell_w = max_width as f64 / grid.items_per_row as f64;
    let cell_h = grid.row_height as f64;

    let mut slots = Vec::new();
    for seat in 0..grid.item_count {
        let col = seat % grid.items_per_row;
        let row = seat / grid.items_per_row;
        slots.push(Slot {
            x: cell_w * col as f64 + pad,
            y: cell_h * row as f64 + pad,
            w: cell_w - 2.0 * pad,
            h: cell_h - 2.0 * pad,
            rotation: Rotation::None,
            seat,
        });
    }
    let caption = format!(
        "upright · {}x{} · {} seats{}",
        grid.row_count,
        grid.items_per_row,
        grid.item_count,
        if grid.overflowed { " · overflow" } else { "" }
    );
    (slots, max_width as f64, grid.total_height() as f64, caption)
}

fn render_document(
    slots: &[Slot],
    content_w: f64,
    content_h: f64,
    viewport_w: f64,
    viewport_h: f64,
    caption: &str,
) -> String {
    // Content may exceed the viewport when overflowing; scale whichever
    // bounding box is larger down to the panel.
    let bound_w = content_w.max(viewport_w).max(1.0);
    let bound_h = content_h.max(viewport_h).max(1.0);
    let scale = (MAX_PANEL / bound_w).min(MAX_PANEL / bound_h);

    let total_w = bound_w * scale + 2.0 * MARGIN;
    let total_h = bound_h * scale + 2.0 * MARGIN + CAPTION_H;
    let ox = MARGIN;
    let oy = MARGIN + CAPTION_H;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');
    svg.push_str(
        r#"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", monospace; }
  .caption { font-size: 13px; font-weight: bold; fill: #333; }
  .seat-label { font-size: 10px; fill: #666; }
  .glyph { font-size: 18px; fill: #2c6faa; }
  .viewport { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 5,3; }
  .slot { fill: #e8f0f8; stroke: #2c6faa; stroke-width: 1; }
</style>
"#,
    );

    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{}" class="caption">{caption}</text>"#,
        ox,
        MARGIN - 6.0 + CAPTION_H,
    ));
    svg.push('\n');

    // Viewport outline.
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="viewport"/>"#,
        ox,
        oy,
        viewport_w * scale,
        viewport_h * scale
    ));
    svg.push('\n');

    for slot in slots {
        let (x, y) = (ox + slot.x * scale, oy + slot.y * scale);
        let (w, h) = (slot.w.max(0.0) * scale, slot.h.max(0.0) * scale);
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="slot" rx="3"/>"#,
        ));
        svg.push('\n');
        let (cx, cy) = (x + w / 2.0, y + h / 2.0);
        svg.push_str(&format!(
            r#"<text x="{cx:.1}" y="{:.1}" class="glyph" text-anchor="middle" transform="rotate({} {cx:.1} {cy:.1})">F</text>"#,
            cy + 6.0,
            slot.rotation.degrees(),
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="seat-label">{}</text>"#,
            x + 4.0,
            y + 12.0,
            slot.seat + 1,
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}
