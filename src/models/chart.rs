//! Wave chart geometry models

use std::str::FromStr;

/// A point in surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavePoint {
    pub x: f64,
    pub y: f64,
}

impl WavePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        WavePoint { x, y }
    }
}

/// The line of one chart draw. Built per draw and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveSeries {
    points: Vec<WavePoint>,
}

impl WaveSeries {
    pub fn new(points: Vec<WavePoint>) -> Self {
        WaveSeries { points }
    }

    pub fn points(&self) -> &[WavePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closed outline of the area between the line and the horizontal `floor`
    pub fn area_outline(&self, width: f64, floor: f64) -> Vec<WavePoint> {
        let mut outline = Vec::with_capacity(self.points.len() + 2);
        outline.extend_from_slice(&self.points);
        outline.push(WavePoint::new(width, floor));
        outline.push(WavePoint::new(0.0, floor));
        outline
    }
}

/// How the wave line is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveShape {
    /// Layered sine hills, independent of the card's history
    #[default]
    Decorative,
    /// The card's history normalised into the chart band
    Trend,
}

impl FromStr for WaveShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decorative" | "wave" => Ok(WaveShape::Decorative),
            "trend" | "series" => Ok(WaveShape::Trend),
            other => Err(format!("unknown shape '{}', expected decorative or trend", other)),
        }
    }
}
