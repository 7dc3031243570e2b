//! 2D drawing surfaces the chart renderer paints on

pub mod bitmap;
pub mod raster;
#[cfg(test)]
pub mod recording;

pub use bitmap::PlottersSurface;
#[cfg(test)]
pub use recording::{DrawOp, RecordingSurface};

use crate::models::WavePoint;
use crate::utils::{Rgba, SurfaceError};

/// Vertical linear gradient between two colour stops
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub start_y: f64,
    pub end_y: f64,
    pub start: Rgba,
    pub end: Rgba,
}

impl LinearGradient {
    pub fn vertical(start_y: f64, end_y: f64, start: Rgba, end: Rgba) -> Self {
        LinearGradient {
            start_y,
            end_y,
            start,
            end,
        }
    }

    /// Colour at row `y`; rows outside the stops take the nearest stop
    pub fn color_at(&self, y: f64) -> Rgba {
        let span = self.end_y - self.start_y;
        if span.abs() < f64::EPSILON {
            return if y < self.start_y { self.start } else { self.end };
        }
        self.start.lerp(self.end, (y - self.start_y) / span)
    }
}

/// On/off lengths of a dashed line, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub on: f64,
    pub off: f64,
}

impl DashPattern {
    pub const fn new(on: f64, off: f64) -> Self {
        DashPattern { on, off }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f64,
    pub dash: Option<DashPattern>,
    /// Round caps and joins instead of butt caps and miter joins
    pub rounded: bool,
}

impl StrokeStyle {
    pub fn solid(color: Rgba, width: f64) -> Self {
        StrokeStyle {
            color,
            width,
            dash: None,
            rounded: false,
        }
    }

    pub fn dashed(color: Rgba, width: f64, dash: DashPattern) -> Self {
        StrokeStyle {
            color,
            width,
            dash: Some(dash),
            rounded: false,
        }
    }

    pub fn rounded(mut self) -> Self {
        self.rounded = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub family: String,
    pub size: f64,
    pub color: Rgba,
}

/// Drawing operations a chart needs from its host
pub trait Surface {
    /// Size in pixels as `(width, height)`
    fn size(&self) -> (u32, u32);

    /// Wipe everything drawn so far
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Fill the closed polygon `outline` with `paint`
    fn fill_area(&mut self, outline: &[WavePoint], paint: &LinearGradient) -> Result<(), SurfaceError>;

    /// Stroke the open polyline `path`
    fn stroke_path(&mut self, path: &[WavePoint], stroke: &StrokeStyle) -> Result<(), SurfaceError>;

    /// Draw `text` centred horizontally on `anchor`, with its top edge at `anchor.y`
    fn draw_text(&mut self, text: &str, anchor: WavePoint, style: &LabelStyle) -> Result<(), SurfaceError>;
}
