use crate::core::ballistics::Point2D;

pub const EARTH_GRAVITY: f64 = 9.8;

/// Angles above this are drawn as a straight line instead of a parabola.
pub const NEAR_VERTICAL_DEG: f64 = 86.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderSpec {
    /// Clamps `value` into range and rounds it to the nearest step counted from `min`.
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }
}

pub const SCALE_SLIDER: SliderSpec = SliderSpec {
    min: 10.0,
    max: 1000.0,
    step: 10.0,
    default: 100.0,
};

pub const ANGLE_RATE_SLIDER: SliderSpec = SliderSpec {
    min: 0.25,
    max: 1.5,
    step: 0.01,
    default: 0.5,
};

/// Fixed layout of the court, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub font_size: f64,
    pub max_dist: f64,
    pub robot_size: f64,
    pub ball_size: f64,
    pub basket_height: f64,
    pub hoop_offset_x: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_width: 640.0,
            canvas_height: 640.0,
            font_size: 20.0,
            max_dist: 5.0,
            robot_size: 90.0,
            ball_size: 24.0,
            basket_height: 305.0,
            hoop_offset_x: 100.0,
        }
    }
}

impl SceneConfig {
    pub fn hoop(&self) -> Point2D {
        Point2D::new(
            self.canvas_width / 2.0 + self.hoop_offset_x,
            self.canvas_height - self.basket_height,
        )
    }

    pub fn shooter_y(&self) -> f64 {
        self.canvas_height - self.robot_size / 2.0
    }

    /// Keeps the robot on the canvas and at least `max_dist` pixels left of the hoop.
    pub fn clamp_shooter_x(&self, pointer_x: f64) -> f64 {
        let on_canvas = if pointer_x.is_nan() {
            0.0
        } else {
            pointer_x.clamp(0.0, self.canvas_width)
        };
        on_canvas.min(self.hoop().x - self.max_dist)
    }
}

/// Everything a single frame reads from the UI. Built fresh every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub pointer_x: f64,
    pub scale: f64,
    pub angle_rate: f64,
}

impl FrameInput {
    pub fn new(pointer_x: f64, scale: f64, angle_rate: f64) -> Self {
        Self {
            pointer_x,
            scale,
            angle_rate,
        }
    }

    /// Same as `new`, but runs both slider values through their specs first.
    pub fn from_sliders(pointer_x: f64, scale: f64, angle_rate: f64) -> Self {
        Self::new(
            pointer_x,
            SCALE_SLIDER.snap(scale),
            ANGLE_RATE_SLIDER.snap(angle_rate),
        )
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self::new(0.0, SCALE_SLIDER.default, ANGLE_RATE_SLIDER.default)
    }
}
