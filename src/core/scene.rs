use crate::core::ballistics::Point2D;
use crate::core::config::SceneConfig;

const BASKET_DIAMETER: f64 = 46.0;
const BASKET_THICK: f64 = 5.0;
const BACKBOARD_HEIGHT: f64 = 122.0;
const BACKBOARD_THICK: f64 = 10.0;
const DIST_TO_BASKET: f64 = 13.0;
const POST_THICK: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }
}

pub const RIM_COLOR: Rgba = Rgba::rgb(230, 150, 0);
pub const BACKBOARD_COLOR: Rgba = Rgba::gray(200);
pub const POST_COLOR: Rgba = Rgba::gray(0);
pub const BALL_COLOR: Rgba = Rgba::rgb(255, 0, 0);
pub const ROBOT_COLOR: Rgba = Rgba::rgb(0, 0, 255);
pub const TEXT_COLOR: Rgba = Rgba::gray(150);
pub const TRAJECTORY_COLOR: Rgba = Rgba::gray(5);

/// Axis-aligned rectangle, `origin` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectShape {
    pub origin: Point2D,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoopLayout {
    pub rim: RectShape,
    pub backboard: RectShape,
    pub post: RectShape,
}

impl HoopLayout {
    /// Rim hangs left of `target`, backboard and post stand behind it.
    pub fn around(target: Point2D, basket_height: f64) -> Self {
        let rim_x = target.x - BASKET_DIAMETER / 2.0;
        let rim_y = target.y;
        let backboard_x = rim_x + (BASKET_DIAMETER + DIST_TO_BASKET);
        let backboard_y = rim_y - (BACKBOARD_HEIGHT - DIST_TO_BASKET - 2.0);
        let post_x = backboard_x + BACKBOARD_THICK + 2.0;
        let post_y = backboard_y + BACKBOARD_HEIGHT / 2.0;

        Self {
            rim: RectShape {
                origin: Point2D::new(rim_x, rim_y),
                width: BASKET_DIAMETER,
                height: BASKET_THICK,
            },
            backboard: RectShape {
                origin: Point2D::new(backboard_x, backboard_y),
                width: BACKBOARD_THICK,
                height: BACKBOARD_HEIGHT,
            },
            post: RectShape {
                origin: Point2D::new(post_x, post_y),
                width: POST_THICK,
                height: BACKBOARD_HEIGHT / 2.0 + basket_height,
            },
        }
    }

    pub fn for_scene(scene: &SceneConfig) -> Self {
        Self::around(scene.hoop(), scene.basket_height)
    }

    pub fn parts(&self) -> [(RectShape, Rgba); 3] {
        [
            (self.rim, RIM_COLOR),
            (self.backboard, BACKBOARD_COLOR),
            (self.post, POST_COLOR),
        ]
    }
}
