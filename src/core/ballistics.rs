use std::ops::Div;

use crate::core::config::{EARTH_GRAVITY, NEAR_VERTICAL_DEG};
use crate::core::error::AimError;

/// Upper bound on parabola samples, far wider than any canvas.
pub const MAX_PARABOLA_SAMPLES: usize = 1 << 16;

/// A position on the canvas. `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Point2D) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

impl Div<f64> for Point2D {
    type Output = Point2D;

    fn div(self, rhs: f64) -> Point2D {
        Point2D::new(self.x / rhs, self.y / rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    pub theta_deg: f64,
    pub velocity: f64,
}

/// Linear distance-to-angle mapping. The result is not clamped.
pub fn compute_angle(shooter_x: f64, hoop_x: f64, rate: f64) -> f64 {
    let distance = (hoop_x - shooter_x) / 10.0;
    -rate * distance + 90.0
}

fn range_denominator(theta_deg: f64, start: Point2D, end: Point2D) -> f64 {
    let angle = theta_deg.to_radians();
    let cos2 = angle.cos() * angle.cos();
    let dx = end.x - start.x;
    // Canvas y points down, the physics y points up.
    let dy = -(end.y - start.y);
    let denom = (dx * angle.tan() - dy) * (2.0 * cos2);
    if denom < 0.0 { -denom } else { denom }
}

/// Launch speed that puts the ball through `end` when fired from `start` at `theta_deg`.
///
/// A zero denominator is not guarded: the division yields `inf` (or `NaN`
/// when `dx` is zero too) and that value is returned as is. Use
/// [`checked_velocity`] to have those cases reported instead.
pub fn compute_velocity(theta_deg: f64, start: Point2D, end: Point2D) -> f64 {
    let dx = end.x - start.x;
    let denom = range_denominator(theta_deg, start, end);
    ((EARTH_GRAVITY * dx * dx) / denom).sqrt()
}

/// [`compute_velocity`] with the degenerate outcomes turned into errors.
pub fn checked_velocity(theta_deg: f64, start: Point2D, end: Point2D) -> Result<f64, AimError> {
    if range_denominator(theta_deg, start, end) == 0.0 {
        return Err(AimError::ZeroDenominator { theta_deg });
    }
    let value = compute_velocity(theta_deg, start, end);
    if !value.is_finite() {
        return Err(AimError::NonFinite { theta_deg, value });
    }
    Ok(value)
}

pub fn solve_launch(shooter: Point2D, hoop: Point2D, rate: f64) -> LaunchParameters {
    let theta_deg = compute_angle(shooter.x, hoop.x, rate);
    LaunchParameters {
        theta_deg,
        velocity: compute_velocity(theta_deg, shooter, hoop),
    }
}

/// Parabola samples relative to the shooter: the origin anchor first, then
/// one point per whole pixel of horizontal travel up to `dx`.
///
/// Single pass only; the iterator is consumed by whoever draws it.
#[derive(Debug)]
pub struct ParabolaSamples {
    tan: f64,
    cos2: f64,
    v2: f64,
    dx: f64,
    next_x: f64,
    anchor_pending: bool,
}

impl ParabolaSamples {
    fn new(theta_deg: f64, velocity: f64, dx: f64) -> Self {
        let angle = theta_deg.to_radians();
        Self {
            tan: angle.tan(),
            cos2: angle.cos() * angle.cos(),
            v2: velocity * velocity,
            dx,
            next_x: 1.0,
            anchor_pending: true,
        }
    }

    fn height_at(&self, x: f64) -> f64 {
        -(x * self.tan - (EARTH_GRAVITY * (x * x)) / (2.0 * self.v2 * self.cos2))
    }

    fn remaining_steps(&self) -> usize {
        if !self.dx.is_finite() || self.next_x > self.dx {
            return 0;
        }
        let steps = self.dx.floor() - self.next_x + 1.0;
        let budget = MAX_PARABOLA_SAMPLES as f64 - (self.next_x - 1.0);
        steps.min(budget) as usize
    }
}

impl Iterator for ParabolaSamples {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        if self.anchor_pending {
            self.anchor_pending = false;
            return Some(Point2D::ORIGIN);
        }
        if self.remaining_steps() == 0 {
            return None;
        }
        let x = self.next_x;
        self.next_x += 1.0;
        Some(Point2D::new(x, self.height_at(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining_steps() + usize::from(self.anchor_pending);
        (n, Some(n))
    }
}

#[derive(Debug)]
pub enum Trajectory {
    /// Near-vertical shots, drawn straight from shooter to hoop.
    Line { start: Point2D, end: Point2D },
    /// Samples are relative to `anchor`.
    Curve {
        anchor: Point2D,
        samples: ParabolaSamples,
    },
}

impl Trajectory {
    pub fn is_line(&self) -> bool {
        matches!(self, Trajectory::Line { .. })
    }

    /// Drains the trajectory into absolute canvas coordinates.
    pub fn into_canvas_points(self) -> Vec<Point2D> {
        match self {
            Trajectory::Line { start, end } => vec![start, end],
            Trajectory::Curve { anchor, samples } => {
                samples.map(|local| anchor.offset(local)).collect()
            }
        }
    }
}

pub fn trajectory_points(
    theta_deg: f64,
    velocity: f64,
    start: Point2D,
    end: Point2D,
) -> Trajectory {
    if theta_deg > NEAR_VERTICAL_DEG {
        return Trajectory::Line { start, end };
    }
    Trajectory::Curve {
        anchor: start,
        samples: ParabolaSamples::new(theta_deg, velocity, end.x - start.x),
    }
}
