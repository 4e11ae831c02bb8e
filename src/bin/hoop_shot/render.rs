use macroquad::prelude::*;

use hoop_trajectory::core::ballistics::Point2D;
use hoop_trajectory::core::canvas::Canvas;
use hoop_trajectory::core::scene::{RectShape, Rgba};

/// Text in macroquad's built-in font; `y` is the baseline.
pub(crate) fn draw_ui_text(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn to_color(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

fn to_screen(point: Point2D) -> Vec2 {
    vec2(point.x as f32, point.y as f32)
}

/// Paints frames straight onto the macroquad window.
pub(crate) struct ScreenCanvas;

impl Canvas for ScreenCanvas {
    fn fill_rect(&mut self, rect: RectShape, color: Rgba) {
        draw_rectangle(
            rect.origin.x as f32,
            rect.origin.y as f32,
            rect.width as f32,
            rect.height as f32,
            to_color(color),
        );
    }

    fn fill_circle(&mut self, center: Point2D, diameter: f64, color: Rgba) {
        let c = to_screen(center);
        draw_circle(c.x, c.y, diameter as f32 / 2.0, to_color(color));
    }

    fn stroke_path(&mut self, points: &[Point2D], thickness: f64, color: Rgba) {
        let color = to_color(color);
        for pair in points.windows(2) {
            let a = to_screen(pair[0]);
            let b = to_screen(pair[1]);
            draw_line(a.x, a.y, b.x, b.y, thickness as f32, color);
        }
    }

    fn text(&mut self, text: &str, baseline_left: Point2D, size: f64, color: Rgba) {
        let at = to_screen(baseline_left);
        draw_ui_text(text, at.x, at.y, size.round() as u16, to_color(color));
    }
}
