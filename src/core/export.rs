use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::core::ballistics::Point2D;
use crate::core::canvas::{Canvas, paint};
use crate::core::config::SceneConfig;
use crate::core::error::ExportError;
use crate::core::frame::Frame;
use crate::core::scene::{RectShape, Rgba};

const SLIDER_TRACK_COLOR: Rgba = Rgba::gray(190);
const SLIDER_KNOB_COLOR: Rgba = Rgba::rgb(0, 117, 255);
const SLIDER_KNOB_DIAMETER: f64 = 14.0;
/// Baseline distance below the top of a `VPos::Top` text box, in ems.
/// plotters' SVG backend offsets top-anchored text by the same amount.
const TEXT_ASCENT_EM: f64 = 0.76;

/// `hoop_shot_20260314_093015.svg` style name for a snapshot taken at `at`.
pub fn snapshot_file_name(at: DateTime<Local>) -> String {
    format!("hoop_shot_{}.svg", at.format("%Y%m%d_%H%M%S"))
}

pub fn default_snapshot_path() -> PathBuf {
    PathBuf::from(snapshot_file_name(Local::now()))
}

fn drawing_error<E>(err: DrawingAreaErrorKind<E>) -> ExportError
where
    E: std::error::Error + Send + Sync,
{
    ExportError::Drawing(err.to_string())
}

fn to_rgba(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, f64::from(color.a) / 255.0)
}

fn px(point: Point2D) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

fn text_top_left(baseline_left: Point2D, size: f64) -> (i32, i32) {
    px(Point2D::new(
        baseline_left.x,
        baseline_left.y - TEXT_ASCENT_EM * size,
    ))
}

struct PlottersCanvas<'a, DB: DrawingBackend> {
    area: &'a DrawingArea<DB, Shift>,
    error: Option<ExportError>,
}

impl<DB: DrawingBackend> PlottersCanvas<'_, DB> {
    fn record(&mut self, result: Result<(), DrawingAreaErrorKind<DB::ErrorType>>) {
        if self.error.is_none() {
            self.error = result.err().map(drawing_error);
        }
    }
}

impl<DB: DrawingBackend> Canvas for PlottersCanvas<'_, DB> {
    fn fill_rect(&mut self, rect: RectShape, color: Rgba) {
        let top_left = px(rect.origin);
        let bottom_right = px(Point2D::new(
            rect.origin.x + rect.width,
            rect.origin.y + rect.height,
        ));
        let result = self
            .area
            .draw(&Rectangle::new([top_left, bottom_right], to_rgba(color).filled()));
        self.record(result);
    }

    fn fill_circle(&mut self, center: Point2D, diameter: f64, color: Rgba) {
        let result = self.area.draw(&Circle::new(
            px(center),
            diameter / 2.0,
            to_rgba(color).filled(),
        ));
        self.record(result);
    }

    fn stroke_path(&mut self, points: &[Point2D], thickness: f64, color: Rgba) {
        let pixels: Vec<(i32, i32)> = points.iter().copied().map(px).collect();
        let style = to_rgba(color).stroke_width(thickness.round().max(1.0) as u32);
        let result = self.area.draw(&PathElement::new(pixels, style));
        self.record(result);
    }

    fn text(&mut self, text: &str, baseline_left: Point2D, size: f64, color: Rgba) {
        let style = ("sans-serif", size)
            .into_font()
            .color(&to_rgba(color))
            .pos(Pos::new(HPos::Left, VPos::Top));
        let top_left = text_top_left(baseline_left, size);
        let result = self
            .area
            .draw(&Text::new(text.to_string(), top_left, style));
        self.record(result);
    }

    fn slider(&mut self, origin: Point2D, width: f64, fraction: f64) {
        let track_y = origin.y + SLIDER_KNOB_DIAMETER / 2.0;
        let knob = Point2D::new(origin.x + width * fraction, track_y);
        self.stroke_path(
            &[
                Point2D::new(origin.x, track_y),
                Point2D::new(origin.x + width, track_y),
            ],
            4.0,
            SLIDER_TRACK_COLOR,
        );
        self.fill_circle(knob, SLIDER_KNOB_DIAMETER, SLIDER_KNOB_COLOR);
    }
}

fn draw_on<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frame: &Frame,
) -> Result<(), ExportError> {
    area.fill(&WHITE).map_err(drawing_error)?;
    let mut canvas = PlottersCanvas { area, error: None };
    paint(frame, &mut canvas);
    if let Some(err) = canvas.error {
        return Err(err);
    }
    area.present().map_err(drawing_error)
}

/// Writes `frame` to `path`. The extension picks the backend: `.svg` is
/// vector output, `.png`/`.bmp`/`.jpg` go through the bitmap encoder.
pub fn write_snapshot(
    frame: &Frame,
    scene: &SceneConfig,
    path: &Path,
) -> Result<(), ExportError> {
    let size = (
        scene.canvas_width.round().max(1.0) as u32,
        scene.canvas_height.round().max(1.0) as u32,
    );
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "svg" => {
            let area = SVGBackend::new(path, size).into_drawing_area();
            draw_on(&area, frame)
        }
        "png" | "bmp" | "jpg" | "jpeg" => {
            let area = BitMapBackend::new(path, size).into_drawing_area();
            draw_on(&area, frame)
        }
        _ => Err(ExportError::UnsupportedExtension(extension)),
    }
}
