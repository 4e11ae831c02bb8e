use macroquad::prelude::*;

use hoop_trajectory::core::canvas::paint;
use hoop_trajectory::core::frame::render_frame;

use crate::constants::{BACKGROUND, MSAA_SAMPLES, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::controls::draw_slider_panel;
use crate::render::ScreenCanvas;
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Hoop Shot".to_string(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let mut state = AppRuntime::new();
    let hoop = state.scene.hoop();
    log::info!(
        "court ready: {}x{} canvas, hoop at ({}, {})",
        state.scene.canvas_width,
        state.scene.canvas_height,
        hoop.x,
        hoop.y
    );

    loop {
        clear_background(BACKGROUND);

        draw_slider_panel(&mut state);
        let (pointer_x, _) = mouse_position();
        let input = state.frame_input(pointer_x);
        log::trace!("angle rate {:.2}", input.angle_rate);

        let frame = render_frame(&input, &state.scene);
        state.note_aim(frame.readouts.aim_error);
        paint(&frame, &mut ScreenCanvas);

        next_frame().await;
    }
}
