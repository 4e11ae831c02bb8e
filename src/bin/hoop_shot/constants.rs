use macroquad::prelude::Color;

pub const WINDOW_WIDTH: i32 = 640;
pub const WINDOW_HEIGHT: i32 = 640;
pub const MSAA_SAMPLES: i32 = 4;

pub const BACKGROUND: Color = Color::new(1.0, 1.0, 1.0, 1.0);

// Slider widgets sit under their labels on the right-hand side.
pub const SLIDER_PANEL_INSET: f32 = 200.0;
pub const SLIDER_PANEL_HEIGHT: f32 = 30.0;
pub const SCALE_SLIDER_ROW: f32 = 2.0;
pub const ANGLE_RATE_SLIDER_ROW: f32 = 5.0;
