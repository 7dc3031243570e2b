//! Finance card models

use crate::utils::{format_change, format_currency, parse_rgb, slugify, Rgb};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Growth category of a card's metric. Unknown strings read as `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Growth {
    Success,
    #[default]
    Normal,
    Danger,
}

impl Growth {
    /// CSS colour the dashboard assigns to this category
    pub fn css_color(self) -> &'static str {
        match self {
            Growth::Success => "rgb(28, 156, 78)",
            Growth::Danger => "rgb(251, 55, 72)",
            Growth::Normal => "rgb(51, 92, 255)",
        }
    }
}

impl From<&str> for Growth {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "success" => Growth::Success,
            "danger" => Growth::Danger,
            _ => Growth::Normal,
        }
    }
}

impl From<String> for Growth {
    fn from(value: String) -> Self {
        Growth::from(value.as_str())
    }
}

impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Growth::Success => "success",
            Growth::Normal => "normal",
            Growth::Danger => "danger",
        };
        f.write_str(name)
    }
}

/// One balance card of the overview page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceCard {
    pub title: String,
    pub balance: f64,
    /// Percent change shown in the badge
    pub change: f64,
    #[serde(default)]
    pub growth: Growth,
    #[serde(default, alias = "chartData")]
    pub chart_data: Vec<f64>,
    /// CSS colour overriding the growth colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl FinanceCard {
    pub fn new(title: &str, balance: f64, change: f64, growth: Growth) -> Self {
        FinanceCard {
            title: title.to_string(),
            balance,
            change,
            growth,
            chart_data: Vec::new(),
            color: None,
        }
    }

    pub fn with_history(mut self, history: &[f64]) -> Self {
        self.chart_data = history.to_vec();
        self
    }

    pub fn trend_css(&self) -> &str {
        self.color.as_deref().unwrap_or(self.growth.css_color())
    }

    pub fn trend_color(&self) -> Rgb {
        parse_rgb(self.trend_css())
    }

    pub fn balance_text(&self) -> String {
        format_currency(self.balance)
    }

    pub fn badge(&self) -> String {
        format_change(self.change)
    }

    /// Whether the badge uses the positive (green) style
    pub fn is_gain(&self) -> bool {
        self.change >= 0.0
    }

    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}
