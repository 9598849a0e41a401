use crate::util::{rounded_u8, size_to_vec2};
use egui::{CornerRadius, StrokeKind, Vec2, pos2};

/// On-screen size of the result: scaled to `available_width` when fitting,
/// otherwise one image pixel per point.
pub fn display_size(image_size: [usize; 2], available_width: f32, fit_to_width: bool) -> Vec2 {
    let base = size_to_vec2(image_size);
    if !fit_to_width || base.x <= 0.0 || available_width <= 0.0 {
        return base;
    }
    base * (available_width / base.x)
}

pub fn toggle_switch(ui: &mut egui::Ui, on: &mut bool) -> egui::Response {
    let height = ui.spacing().interact_size.y;
    let (rect, mut response) =
        ui.allocate_exact_size(egui::vec2(height * 1.8, height), egui::Sense::click());
    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let visuals = ui.style().interact_selectable(&response, *on);
    let radius = rect.height() / 2.0;
    ui.painter().rect(
        rect,
        CornerRadius::same(rounded_u8(radius)),
        visuals.bg_fill,
        visuals.bg_stroke,
        StrokeKind::Middle,
    );
    let knob_radius = radius - 2.0;
    let t = ui.ctx().animate_bool(response.id, *on);
    let knob_x = egui::lerp(
        (rect.left() + radius)..=(rect.right() - radius),
        t,
    );
    ui.painter().circle_filled(
        pos2(knob_x, rect.center().y),
        knob_radius,
        visuals.fg_stroke.color,
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_scales_to_available_width() {
        let size = display_size([200, 100], 500.0, true);
        assert!((size.x - 500.0).abs() <= f32::EPSILON);
        assert!((size.y - 250.0).abs() <= f32::EPSILON);
    }

    #[test]
    fn natural_size_when_not_fitting() {
        let size = display_size([200, 100], 500.0, false);
        assert_eq!(size, egui::vec2(200.0, 100.0));
    }

    #[test]
    fn empty_image_is_not_scaled() {
        assert_eq!(display_size([0, 0], 500.0, true), Vec2::ZERO);
    }
}
