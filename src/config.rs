//! Runtime settings, read from the environment (and `.env`)

use std::path::PathBuf;
use std::str::FromStr;

use crate::models::WaveShape;
use crate::utils::ConfigError;

/// Canvas size of the dashboard's card chart
pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_HEIGHT: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(format!("unknown format '{}', expected png or svg", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub shape: WaveShape,
    pub draw_labels: bool,
    /// JSON file with the cards to render instead of the built-in dashboard
    pub cards_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            output_dir: PathBuf::from("charts"),
            format: OutputFormat::Png,
            shape: WaveShape::Decorative,
            draw_labels: true,
            cards_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let width = parse_var(&lookup, "CHART_WIDTH", defaults.width)?;
        let height = parse_var(&lookup, "CHART_HEIGHT", defaults.height)?;
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroSize { width, height });
        }

        let draw_labels = match lookup("CHART_LABELS") {
            None => defaults.draw_labels,
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::Invalid {
                key: "CHART_LABELS",
                value: value.clone(),
                reason: "expected true or false".to_string(),
            })?,
        };

        Ok(Config {
            width,
            height,
            output_dir: lookup("CHART_OUTPUT_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            format: parse_var(&lookup, "CHART_FORMAT", defaults.format)?,
            shape: parse_var(&lookup, "CHART_SHAPE", defaults.shape)?,
            draw_labels,
            cards_path: lookup("CHART_CARDS")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: ToString,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
