use crate::core::ballistics::{
    Point2D, checked_velocity, compute_velocity, solve_launch, trajectory_points,
};
use crate::core::config::{ANGLE_RATE_SLIDER, FrameInput, SCALE_SLIDER, SceneConfig, SliderSpec};
use crate::core::error::AimError;
use crate::core::scene::{
    BALL_COLOR, HoopLayout, ROBOT_COLOR, RectShape, Rgba, TEXT_COLOR, TRAJECTORY_COLOR,
};

pub const TRAJECTORY_THICKNESS: f64 = 1.0;
pub const SLIDER_WIDTH: f64 = 100.0;
const READOUT_X: f64 = 10.0;
const SIDE_PANEL_INSET: f64 = 200.0;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: RectShape,
        color: Rgba,
    },
    FillCircle {
        center: Point2D,
        diameter: f64,
        color: Rgba,
    },
    Path {
        points: Vec<Point2D>,
        thickness: f64,
        color: Rgba,
    },
    Text {
        text: String,
        baseline_left: Point2D,
        size: f64,
        color: Rgba,
    },
    /// Placeholder for a slider widget owned by the UI layer.
    Slider {
        origin: Point2D,
        width: f64,
        fraction: f64,
    },
}

/// Numbers shown in the text overlay, in physical units unless noted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readouts {
    pub shooter: Point2D,
    pub theta_deg: f64,
    /// Launch speed in pixel space, the one the drawn parabola uses.
    pub velocity_px: f64,
    pub velocity: f64,
    pub distance: f64,
    pub hoop_height: f64,
    pub scale: f64,
    pub angle_rate: f64,
    pub trajectory_points: usize,
    pub straight_shot: bool,
    /// Set when `velocity` came out of a degenerate range equation.
    pub aim_error: Option<AimError>,
}

impl Readouts {
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Launch Angle = {} deg", format_readout(self.theta_deg, 2)),
            format!("Launch Velocity = {} m/s", format_readout(self.velocity, 2)),
            format!("Distance to Hoop = {} m", format_readout(self.distance, 2)),
            format!("Height of the Hoop = {} m", format_readout(self.hoop_height, 2)),
        ]
    }

    pub fn scale_label(&self) -> String {
        format!("SCALE: {}", format_readout(self.scale, 0))
    }

    pub fn angle_rate_label(&self) -> String {
        format!("ANGLE RATE: {}", format_readout(self.angle_rate, 2))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub readouts: Readouts,
}

/// Formats like `1,234.57`: fixed decimals with thousands separators.
pub fn format_readout(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

fn slider_fraction(spec: SliderSpec, value: f64) -> f64 {
    ((value - spec.min) / (spec.max - spec.min)).clamp(0.0, 1.0)
}

/// Computes one complete frame from the current pointer and slider values.
pub fn render_frame(input: &FrameInput, scene: &SceneConfig) -> Frame {
    let hoop = scene.hoop();
    let shooter = Point2D::new(scene.clamp_shooter_x(input.pointer_x), scene.shooter_y());

    let launch = solve_launch(shooter, hoop, input.angle_rate);
    let scaled_shooter = shooter / input.scale;
    let scaled_hoop = hoop / input.scale;
    let velocity = compute_velocity(launch.theta_deg, scaled_shooter, scaled_hoop);
    let aim_error = checked_velocity(launch.theta_deg, scaled_shooter, scaled_hoop).err();

    let trajectory = trajectory_points(launch.theta_deg, launch.velocity, shooter, hoop);
    let straight_shot = trajectory.is_line();
    let path = trajectory.into_canvas_points();

    let readouts = Readouts {
        shooter,
        theta_deg: launch.theta_deg,
        velocity_px: launch.velocity,
        velocity,
        distance: (hoop.x - shooter.x) / input.scale,
        hoop_height: (scene.canvas_height - hoop.y) / input.scale,
        scale: input.scale,
        angle_rate: input.angle_rate,
        trajectory_points: path.len(),
        straight_shot,
        aim_error,
    };

    let mut commands: Vec<DrawCommand> = HoopLayout::for_scene(scene)
        .parts()
        .into_iter()
        .map(|(rect, color)| DrawCommand::FillRect { rect, color })
        .collect();

    commands.push(DrawCommand::FillCircle {
        center: hoop,
        diameter: scene.ball_size,
        color: BALL_COLOR,
    });
    commands.push(DrawCommand::FillCircle {
        center: shooter,
        diameter: scene.robot_size,
        color: ROBOT_COLOR,
    });

    let font = scene.font_size;
    let side_x = scene.canvas_width - SIDE_PANEL_INSET;
    let label = |text: String, x: f64, y: f64| DrawCommand::Text {
        text,
        baseline_left: Point2D::new(x, y),
        size: font,
        color: TEXT_COLOR,
    };
    for (row, line) in readouts.lines().into_iter().enumerate() {
        commands.push(label(line, READOUT_X, font * (row as f64 + 1.0)));
    }
    commands.push(label(readouts.scale_label(), side_x, font));
    commands.push(label(readouts.angle_rate_label(), side_x, font * 4.0));

    commands.push(DrawCommand::Path {
        points: path,
        thickness: TRAJECTORY_THICKNESS,
        color: TRAJECTORY_COLOR,
    });

    commands.push(DrawCommand::Slider {
        origin: Point2D::new(side_x, font * 2.0),
        width: SLIDER_WIDTH,
        fraction: slider_fraction(SCALE_SLIDER, input.scale),
    });
    commands.push(DrawCommand::Slider {
        origin: Point2D::new(side_x, font * 5.0),
        width: SLIDER_WIDTH,
        fraction: slider_fraction(ANGLE_RATE_SLIDER, input.angle_rate),
    });

    Frame { commands, readouts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::compute_angle;
    use approx::assert_abs_diff_eq;

    fn path_of(frame: &Frame) -> &[Point2D] {
        frame
            .commands
            .iter()
            .find_map(|command| match command {
                DrawCommand::Path { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .expect("every frame draws a trajectory")
    }

    fn texts_of(frame: &Frame) -> Vec<&str> {
        frame
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn formats_readouts_with_grouping() {
        assert_eq!(format_readout(80.0, 2), "80.00");
        assert_eq!(format_readout(1234.567, 2), "1,234.57");
        assert_eq!(format_readout(1_000_000.0, 0), "1,000,000");
        assert_eq!(format_readout(-4321.5, 1), "-4,321.5");
        assert_eq!(format_readout(-0.001, 2), "0.00");
        assert_eq!(format_readout(100.0, 0), "100");
        assert_eq!(format_readout(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn end_to_end_shot_from_the_left() {
        // Shooter y is normally derived from the canvas; move the floor so it lands on 600.
        let scene = SceneConfig {
            canvas_height: 645.0,
            basket_height: 310.0,
            ..SceneConfig::default()
        };
        assert_eq!(scene.hoop(), Point2D::new(420.0, 335.0));
        assert_abs_diff_eq!(scene.shooter_y(), 600.0);

        let frame = render_frame(&FrameInput::new(220.0, 100.0, 0.5), &scene);
        let readouts = frame.readouts;
        let shooter = Point2D::new(220.0, 600.0);
        let hoop = Point2D::new(420.0, 335.0);

        assert_eq!(readouts.shooter, shooter);
        assert_abs_diff_eq!(readouts.theta_deg, 80.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            readouts.velocity_px,
            compute_velocity(80.0, shooter, hoop),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(readouts.velocity_px, 86.47, epsilon = 0.01);
        assert_abs_diff_eq!(
            readouts.velocity,
            compute_velocity(80.0, shooter / 100.0, hoop / 100.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(readouts.distance, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(readouts.hoop_height, 3.1, epsilon = 1e-12);

        assert!(!readouts.straight_shot);
        assert_eq!(readouts.trajectory_points, 201);
        let path = path_of(&frame);
        assert_eq!(path.len(), 201);
        assert_eq!(path[0], shooter);
        assert_abs_diff_eq!(path[200].x, 420.0);
        // The parabola is solved through the hoop, so it ends on the rim.
        assert_abs_diff_eq!(path[200].y, 335.0, epsilon = 1e-6);
    }

    #[test]
    fn pointer_past_the_hoop_is_clamped() {
        let scene = SceneConfig::default();
        let frame = render_frame(&FrameInput::new(630.0, 100.0, 0.5), &scene);
        assert_abs_diff_eq!(frame.readouts.shooter.x, 415.0);
        assert_abs_diff_eq!(
            frame.readouts.theta_deg,
            compute_angle(415.0, 420.0, 0.5),
            epsilon = 1e-12
        );
        // Five pixels out even the flattest rate stays above the line threshold.
        assert!(frame.readouts.straight_shot);
        assert_eq!(frame.readouts.trajectory_points, 2);
    }

    #[test]
    fn pointer_far_off_the_canvas_is_pulled_back() {
        let scene = SceneConfig::default();
        for pointer_x in [-1.0e13, f64::NEG_INFINITY, f64::NAN] {
            let frame = render_frame(&FrameInput::from_sliders(pointer_x, 100.0, 0.5), &scene);
            assert_abs_diff_eq!(frame.readouts.shooter.x, 0.0);
            assert_abs_diff_eq!(frame.readouts.theta_deg, 69.0, epsilon = 1e-12);
            assert_eq!(frame.readouts.trajectory_points, 421);
            assert_eq!(path_of(&frame).len(), 421);
        }
    }

    #[test]
    fn close_steep_shot_draws_a_line() {
        let scene = SceneConfig::default();
        // rate 0.25 at 50 px gives 88.75 degrees.
        let frame = render_frame(&FrameInput::new(370.0, 100.0, 0.25), &scene);
        assert!(frame.readouts.straight_shot);
        assert_eq!(
            path_of(&frame),
            &[Point2D::new(370.0, 595.0), Point2D::new(420.0, 335.0)]
        );
    }

    #[test]
    fn draw_order_is_hoop_ball_robot_text_path_sliders() {
        let frame = render_frame(&FrameInput::default(), &SceneConfig::default());
        let kinds: Vec<&str> = frame
            .commands
            .iter()
            .map(|command| match command {
                DrawCommand::FillRect { .. } => "rect",
                DrawCommand::FillCircle { .. } => "circle",
                DrawCommand::Path { .. } => "path",
                DrawCommand::Text { .. } => "text",
                DrawCommand::Slider { .. } => "slider",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "rect", "rect", "rect", "circle", "circle", "text", "text", "text", "text",
                "text", "text", "path", "slider", "slider",
            ]
        );
    }

    #[test]
    fn overlay_text_reports_physical_units() {
        let frame = render_frame(&FrameInput::new(220.0, 100.0, 0.5), &SceneConfig::default());
        let texts = texts_of(&frame);
        assert_eq!(texts[0], "Launch Angle = 80.00 deg");
        assert!(texts[1].starts_with("Launch Velocity = "));
        assert!(texts[1].ends_with(" m/s"));
        assert_eq!(texts[2], "Distance to Hoop = 2.00 m");
        assert_eq!(texts[3], "Height of the Hoop = 3.05 m");
        assert_eq!(texts[4], "SCALE: 100");
        assert_eq!(texts[5], "ANGLE RATE: 0.50");
    }

    #[test]
    fn sliders_show_their_position() {
        let frame = render_frame(&FrameInput::new(0.0, 1000.0, 0.25), &SceneConfig::default());
        let fractions: Vec<f64> = frame
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Slider { fraction, .. } => Some(*fraction),
                _ => None,
            })
            .collect();
        assert_eq!(fractions, vec![1.0, 0.0]);
    }

    #[test]
    fn frames_are_idempotent() {
        let scene = SceneConfig::default();
        let input = FrameInput::new(123.0, 250.0, 1.1);
        assert_eq!(render_frame(&input, &scene), render_frame(&input, &scene));
    }

    #[test]
    fn healthy_shot_has_no_aim_error() {
        let frame = render_frame(&FrameInput::new(220.0, 100.0, 0.5), &SceneConfig::default());
        assert_eq!(frame.readouts.aim_error, None);
    }
}
