use chrono::Month;
use lazy_static::lazy_static;
use std::f64::consts::TAU;
use tracing::debug;

use crate::models::{WavePoint, WaveSeries, WaveShape};
use crate::surface::{DashPattern, LabelStyle, LinearGradient, StrokeStyle, Surface};
use crate::utils::{parse_hex, RenderError, Rgb, Rgba};

/// Samples per wave line
pub const WAVE_POINTS: usize = 40;

/// Sine layers as `(share of max amplitude, cycles across the width)`
const WAVE_LAYERS: [(f64, f64); 3] = [(0.6, 1.1), (0.3, 2.7), (0.2, 5.3)];

const LINE_WIDTH: f64 = 2.0;
const FILL_TOP_ALPHA: f64 = 0.8;
const SEPARATOR_COLOR: &str = "#00000020";
const LABEL_COLOR: &str = "#666";
const LABEL_FONT: &str = "sans-serif";
const LABEL_SIZE: f64 = 14.0;
const AXIS_MONTHS: u8 = 6;

lazy_static! {
    /// `Jan` through `Jun`
    static ref MONTH_LABELS: Vec<String> = (1..=AXIS_MONTHS)
        .filter_map(|m| Month::try_from(m).ok())
        .map(|m| m.name()[..3].to_string())
        .collect();
}

/// Vertical bands of a chart canvas, all proportional to its height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveGeometry {
    pub width: f64,
    pub height: f64,
}

impl WaveGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        WaveGeometry {
            width: width as f64,
            height: height as f64,
        }
    }

    pub fn baseline(&self) -> f64 {
        self.height * 0.6
    }

    pub fn max_amplitude(&self) -> f64 {
        self.height * 0.22
    }

    pub fn min_amplitude(&self) -> f64 {
        self.height * 0.06
    }

    /// Highest allowed line position
    pub fn wave_top(&self) -> f64 {
        self.height * 0.4
    }

    /// Lowest allowed line position
    pub fn wave_bottom(&self) -> f64 {
        self.height * 0.75
    }

    /// Bottom edge of the filled area and of the separators
    pub fn fill_floor(&self) -> f64 {
        self.height * 0.8
    }

    pub fn separator_top(&self) -> f64 {
        self.height * 0.3
    }

    pub fn label_top(&self) -> f64 {
        self.height * 0.85
    }

    fn clamp(&self, y: f64) -> f64 {
        y.min(self.wave_bottom()).max(self.wave_top())
    }
}

/// Layered-sine wave across the canvas. Deterministic for a given size.
pub fn generate_wave_series(width: u32, height: u32) -> WaveSeries {
    let geo = WaveGeometry::new(width, height);
    let amplitude = geo.max_amplitude();
    let offset = 0.5 * geo.min_amplitude() * 0.5;

    let points = (0..WAVE_POINTS)
        .map(|i| {
            let t = i as f64 / (WAVE_POINTS - 1) as f64;
            let layered: f64 = WAVE_LAYERS
                .iter()
                .map(|&(share, cycles)| amplitude * share * (t * TAU * cycles).sin())
                .sum();
            WavePoint::new(t * geo.width, geo.clamp(geo.baseline() + layered + offset))
        })
        .collect();

    WaveSeries::new(points)
}

/// Map a value history into the wave band: the largest value sits at the top of
/// the band, the smallest at the bottom, a flat history on the baseline.
pub fn normalize_trend(history: &[f64], width: u32, height: u32) -> WaveSeries {
    let geo = WaveGeometry::new(width, height);
    let values: Vec<f64> = history.iter().copied().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return WaveSeries::new(Vec::new());
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let band = geo.wave_bottom() - geo.wave_top();

    let y_of = |v: f64| {
        if span <= f64::EPSILON {
            geo.baseline()
        } else {
            geo.clamp(geo.wave_bottom() - (v - min) / span * band)
        }
    };

    if values.len() == 1 {
        let y = y_of(values[0]);
        return WaveSeries::new(vec![WavePoint::new(0.0, y), WavePoint::new(geo.width, y)]);
    }

    let last = (values.len() - 1) as f64;
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &v)| WavePoint::new(i as f64 / last * geo.width, y_of(v)))
        .collect();
    WaveSeries::new(points)
}

/// The decorative finance-card chart: gradient area, trend line, dashed month
/// separators and month labels.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveChart {
    shape: WaveShape,
    labels: Vec<String>,
    draw_labels: bool,
}

impl Default for WaveChart {
    fn default() -> Self {
        WaveChart {
            shape: WaveShape::Decorative,
            labels: MONTH_LABELS.clone(),
            draw_labels: true,
        }
    }
}

impl WaveChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: WaveShape) -> Self {
        self.shape = shape;
        self
    }

    /// Toggle label text; separators are kept either way
    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The line for a canvas of the given size
    pub fn series_for(&self, width: u32, height: u32, history: &[f64]) -> WaveSeries {
        match self.shape {
            WaveShape::Decorative => generate_wave_series(width, height),
            WaveShape::Trend => {
                let series = normalize_trend(history, width, height);
                if series.is_empty() {
                    debug!("empty history, using decorative wave");
                    generate_wave_series(width, height)
                } else {
                    series
                }
            }
        }
    }

    /// Redraw the chart in `color`. Without a surface the draw is skipped.
    pub fn draw<S: Surface>(&self, surface: Option<&mut S>, color: Rgb, history: &[f64]) -> Result<(), RenderError> {
        let Some(surface) = surface else {
            debug!("no drawing surface mounted, skipping draw");
            return Ok(());
        };

        let (width, height) = surface.size();
        if width == 0 || height == 0 {
            return Err(RenderError::EmptySurface { width, height });
        }

        let geo = WaveGeometry::new(width, height);
        let series = self.series_for(width, height, history);
        debug!(
            "drawing {}x{} wave chart in {} ({} points)",
            width,
            height,
            color.to_css(),
            series.len()
        );

        surface.clear()?;

        let gradient = LinearGradient::vertical(
            0.0,
            geo.fill_floor(),
            color.with_alpha(FILL_TOP_ALPHA),
            Rgba::new(255, 255, 255, 0.0),
        );
        surface.fill_area(&series.area_outline(geo.width, geo.fill_floor()), &gradient)?;
        surface.stroke_path(series.points(), &StrokeStyle::solid(color.with_alpha(1.0), LINE_WIDTH).rounded())?;

        let columns = self.labels.len().max(1);
        let step = geo.width / columns as f64;

        let separator = StrokeStyle::dashed(
            parse_hex(SEPARATOR_COLOR).unwrap_or(Rgba::new(0, 0, 0, 0.125)),
            1.0,
            DashPattern::new(4.0, 4.0),
        );
        for m in 1..columns {
            let x = m as f64 * step;
            surface.stroke_path(
                &[WavePoint::new(x, geo.separator_top()), WavePoint::new(x, geo.fill_floor())],
                &separator,
            )?;
        }

        if self.draw_labels {
            let style = LabelStyle {
                family: LABEL_FONT.to_string(),
                size: LABEL_SIZE,
                color: parse_hex(LABEL_COLOR).unwrap_or(Rgba::new(0x66, 0x66, 0x66, 1.0)),
            };
            for (i, label) in self.labels.iter().enumerate() {
                let anchor = WavePoint::new((i as f64 + 0.5) * step, geo.label_top());
                surface.draw_text(label, anchor, &style)?;
            }
        }

        Ok(())
    }
}
