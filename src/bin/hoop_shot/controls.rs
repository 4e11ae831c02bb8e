use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use hoop_trajectory::core::config::{ANGLE_RATE_SLIDER, SCALE_SLIDER, SliderSpec};
use hoop_trajectory::core::frame::SLIDER_WIDTH;

use crate::constants::{
    ANGLE_RATE_SLIDER_ROW, SCALE_SLIDER_ROW, SLIDER_PANEL_HEIGHT, SLIDER_PANEL_INSET,
};
use crate::state::AppRuntime;

fn slider_range(spec: SliderSpec) -> std::ops::Range<f32> {
    spec.min as f32..spec.max as f32
}

fn slider_panel_rect(canvas_width: f64, font_size: f64, row: f32) -> Rect {
    Rect::new(
        canvas_width as f32 - SLIDER_PANEL_INSET,
        font_size as f32 * row,
        SLIDER_WIDTH as f32,
        SLIDER_PANEL_HEIGHT,
    )
}

/// Draws the two slider widgets and writes their raw values back into `state`.
pub(crate) fn draw_slider_panel(state: &mut AppRuntime) {
    let (width, font) = (state.scene.canvas_width, state.scene.font_size);
    let scale = slider_panel_rect(width, font, SCALE_SLIDER_ROW);
    let angle_rate = slider_panel_rect(width, font, ANGLE_RATE_SLIDER_ROW);

    widgets::Window::new(hash!(), scale.point(), scale.size())
        .titlebar(false)
        .movable(false)
        .ui(&mut *root_ui(), |ui| {
            ui.slider(hash!(), "", slider_range(SCALE_SLIDER), &mut state.scale);
        });

    widgets::Window::new(hash!(), angle_rate.point(), angle_rate.size())
        .titlebar(false)
        .movable(false)
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "",
                slider_range(ANGLE_RATE_SLIDER),
                &mut state.angle_rate,
            );
        });
}
