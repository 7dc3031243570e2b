//! Data models for the chart renderer and the cards that host it

pub mod card;
pub mod chart;

pub use card::{FinanceCard, Growth};
pub use chart::{WavePoint, WaveSeries, WaveShape};
