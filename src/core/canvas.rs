use crate::core::ballistics::Point2D;
use crate::core::frame::{DrawCommand, Frame};
use crate::core::scene::{RectShape, Rgba};

/// Drawing surface a [`Frame`] is painted onto.
pub trait Canvas {
    fn fill_rect(&mut self, rect: RectShape, color: Rgba);

    fn fill_circle(&mut self, center: Point2D, diameter: f64, color: Rgba);

    fn stroke_path(&mut self, points: &[Point2D], thickness: f64, color: Rgba);

    fn text(&mut self, text: &str, baseline_left: Point2D, size: f64, color: Rgba);

    /// Interactive front ends draw their own slider widgets.
    fn slider(&mut self, _origin: Point2D, _width: f64, _fraction: f64) {}
}

pub fn paint<C: Canvas + ?Sized>(frame: &Frame, canvas: &mut C) {
    for command in &frame.commands {
        match command {
            DrawCommand::FillRect { rect, color } => canvas.fill_rect(*rect, *color),
            DrawCommand::FillCircle {
                center,
                diameter,
                color,
            } => canvas.fill_circle(*center, *diameter, *color),
            DrawCommand::Path {
                points,
                thickness,
                color,
            } => {
                if points.len() >= 2 {
                    canvas.stroke_path(points, *thickness, *color);
                }
            }
            DrawCommand::Text {
                text,
                baseline_left,
                size,
                color,
            } => canvas.text(text, *baseline_left, *size, *color),
            DrawCommand::Slider {
                origin,
                width,
                fraction,
            } => canvas.slider(*origin, *width, *fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{FrameInput, SceneConfig};
    use crate::core::frame::render_frame;

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<String>,
        path_lengths: Vec<usize>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, _rect: RectShape, _color: Rgba) {
            self.calls.push("rect".to_string());
        }

        fn fill_circle(&mut self, _center: Point2D, _diameter: f64, _color: Rgba) {
            self.calls.push("circle".to_string());
        }

        fn stroke_path(&mut self, points: &[Point2D], _thickness: f64, _color: Rgba) {
            self.calls.push("path".to_string());
            self.path_lengths.push(points.len());
        }

        fn text(&mut self, text: &str, _baseline_left: Point2D, _size: f64, _color: Rgba) {
            self.calls.push(format!("text:{text}"));
        }
    }

    #[test]
    fn paints_every_visible_command_in_order() {
        let frame = render_frame(&FrameInput::new(220.0, 100.0, 0.5), &SceneConfig::default());
        let mut canvas = RecordingCanvas::default();
        paint(&frame, &mut canvas);

        assert_eq!(canvas.calls.len(), 12);
        assert_eq!(canvas.calls[..3], ["rect", "rect", "rect"]);
        assert_eq!(canvas.calls[5], "text:Launch Angle = 80.00 deg");
        assert_eq!(canvas.calls[11], "path");
        assert_eq!(canvas.path_lengths, vec![201]);
    }

    #[test]
    fn single_point_path_is_skipped() {
        let frame = Frame {
            commands: vec![DrawCommand::Path {
                points: vec![Point2D::ORIGIN],
                thickness: 1.0,
                color: Rgba::gray(5),
            }],
            readouts: render_frame(&FrameInput::default(), &SceneConfig::default()).readouts,
        };
        let mut canvas = RecordingCanvas::default();
        paint(&frame, &mut canvas);
        assert!(canvas.calls.is_empty());
    }
}
