//! Keeps a card's chart in sync with the card's redraw triggers

use tracing::debug;

use crate::models::{FinanceCard, Growth};
use crate::services::chart_service::WaveChart;
use crate::surface::Surface;
use crate::utils::{RenderError, Rgb};

/// A finance card's chart bound to the surface it paints on.
///
/// The chart is redrawn when the surface is mounted and whenever the balance or
/// the trend colour changes. Other edits never redraw.
pub struct ChartWidget<S: Surface> {
    card: FinanceCard,
    chart: WaveChart,
    surface: Option<S>,
    redraws: usize,
}

impl<S: Surface> ChartWidget<S> {
    pub fn new(card: FinanceCard, chart: WaveChart) -> Self {
        ChartWidget {
            card,
            chart,
            surface: None,
            redraws: 0,
        }
    }

    pub fn card(&self) -> &FinanceCard {
        &self.card
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Completed draws so far
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    /// Attach a surface and paint it
    pub fn mount(&mut self, surface: S) -> Result<(), RenderError> {
        self.surface = Some(surface);
        self.redraw()
    }

    pub fn unmount(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn set_title(&mut self, title: &str) {
        self.card.title = title.to_string();
    }

    pub fn set_balance(&mut self, balance: f64) -> Result<(), RenderError> {
        if self.card.balance == balance {
            return Ok(());
        }
        self.card.balance = balance;
        self.redraw()
    }

    pub fn set_growth(&mut self, growth: Growth) -> Result<(), RenderError> {
        let before = self.card.trend_color();
        self.card.growth = growth;
        self.redraw_if_recolored(before)
    }

    /// Override the growth colour with a CSS `rgb(...)` string
    pub fn set_color(&mut self, color: Option<&str>) -> Result<(), RenderError> {
        let before = self.card.trend_color();
        self.card.color = color.map(str::to_string);
        self.redraw_if_recolored(before)
    }

    fn redraw_if_recolored(&mut self, before: Rgb) -> Result<(), RenderError> {
        if self.card.trend_color() == before {
            return Ok(());
        }
        self.redraw()
    }

    pub fn redraw(&mut self) -> Result<(), RenderError> {
        let Some(surface) = self.surface.as_mut() else {
            debug!("'{}' is not mounted, skipping redraw", self.card.title);
            return Ok(());
        };
        self.chart
            .draw(Some(surface), self.card.trend_color(), &self.card.chart_data)?;
        self.redraws += 1;
        debug!("redrew '{}' ({} total)", self.card.title, self.redraws);
        Ok(())
    }
}
