use plotters::prelude::{BitMapBackend, DrawingBackend, SVGBackend};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::{Config, OutputFormat};
use crate::models::{FinanceCard, Growth};
use crate::services::chart_service::WaveChart;
use crate::services::redraw_service::ChartWidget;
use crate::surface::{PlottersSurface, Surface};
use crate::utils::{CardError, RenderError, SurfaceError};

/// The four balance cards of the overview page
pub fn dashboard_cards() -> Vec<FinanceCard> {
    vec![
        FinanceCard::new("Client Balance", 12480.0, 5.2, Growth::Success)
            .with_history(&[12000.0, 12150.0, 12280.0, 12400.0, 12470.0, 12520.0]),
        FinanceCard::new("Ad Account Balance", 8670.0, -2.3, Growth::Danger)
            .with_history(&[15000.0, 8950.0, 8900.0, 8850.0, 8700.0, 8600.0]),
        FinanceCard::new("Vendor Balance", 15200.0, 3.8, Growth::Success)
            .with_history(&[15000.0, 15060.0, 15120.0, 15180.0, 15220.0, 15250.0]),
        FinanceCard::new("Pending Deposite", 20340.0, 0.8, Growth::Normal)
            .with_history(&[20000.0, 15030.0, 20060.0, 20090.0, 20340.0, 20400.0]),
    ]
}

/// Read a JSON array of cards
pub fn load_cards(path: &Path) -> Result<Vec<FinanceCard>, CardError> {
    let content = fs::read_to_string(path).map_err(|source| CardError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CardError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Cards from `CHART_CARDS` when set, the built-in dashboard otherwise
pub fn configured_cards(config: &Config) -> Result<Vec<FinanceCard>, CardError> {
    match &config.cards_path {
        Some(path) => {
            let cards = load_cards(path)?;
            info!("Loaded {} card(s) from {}", cards.len(), path.display());
            Ok(cards)
        }
        None => Ok(dashboard_cards()),
    }
}

/// Find a card by slug or case-insensitive title
pub fn find_card(cards: &[FinanceCard], key: &str) -> Result<FinanceCard, CardError> {
    cards
        .iter()
        .find(|c| c.slug() == key || c.title.eq_ignore_ascii_case(key))
        .cloned()
        .ok_or_else(|| CardError::NotFound(key.to_string()))
}

pub fn chart_for(config: &Config) -> WaveChart {
    WaveChart::new()
        .with_shape(config.shape)
        .with_labels(config.draw_labels)
}

pub fn output_path(config: &Config, card: &FinanceCard) -> PathBuf {
    config
        .output_dir
        .join(format!("{}.{}", card.slug(), config.format.extension()))
}

fn ensure_output_dir(dir: &Path) -> Result<(), RenderError> {
    fs::create_dir_all(dir).map_err(|source| RenderError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Changes applied to a card after its first draw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub balance: Option<f64>,
    pub growth: Option<Growth>,
    pub color: Option<String>,
}

impl CardUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.balance.is_none() && self.growth.is_none() && self.color.is_none()
    }
}

/// Mount `surface` for `card`, apply `update` through the widget setters and
/// hand the surface back with the number of draws it received.
fn paint<S: Surface>(surface: S, card: &FinanceCard, update: &CardUpdate, chart: WaveChart) -> Result<(S, usize), RenderError> {
    let mut widget = ChartWidget::new(card.clone(), chart);
    widget.mount(surface)?;

    if let Some(title) = &update.title {
        widget.set_title(title);
    }
    if let Some(balance) = update.balance {
        widget.set_balance(balance)?;
    }
    if let Some(growth) = update.growth {
        widget.set_growth(growth)?;
    }
    if let Some(color) = &update.color {
        widget.set_color(Some(color))?;
    }

    let redraws = widget.redraws();
    let surface = widget
        .unmount()
        .ok_or_else(|| RenderError::Task(format!("surface of '{}' was detached", widget.card().title)))?;
    Ok((surface, redraws))
}

/// Paint into an in-memory RGB buffer and write `path` only once `draw` succeeds,
/// so a failed render never leaves a partial image behind.
fn render_png<F>(path: &Path, size: (u32, u32), draw: F) -> Result<usize, RenderError>
where
    F: FnOnce(PlottersSurface<BitMapBackend<'_>>) -> Result<usize, RenderError>,
{
    let mut buf = vec![0u8; size.0 as usize * size.1 as usize * 3];
    let redraws = draw(PlottersSurface::new(BitMapBackend::with_buffer(&mut buf, size)))?;

    let mut file = BitMapBackend::new(path, size);
    file.blit_bitmap((0, 0), size, &buf)
        .map_err(|e| SurfaceError::backend("blit", e))?;
    file.present().map_err(|e| SurfaceError::backend("present", e))?;
    Ok(redraws)
}

/// Render one card to `<output_dir>/<slug>.<ext>`
pub fn render_card(card: &FinanceCard, config: &Config) -> Result<PathBuf, RenderError> {
    render_updated_card(card, &CardUpdate::default(), config).map(|(path, _)| path)
}

/// Draw `card`, apply `update` (repainting only on trigger changes) and write the
/// final image. Returns the written path and the number of draws.
pub fn render_updated_card(card: &FinanceCard, update: &CardUpdate, config: &Config) -> Result<(PathBuf, usize), RenderError> {
    ensure_output_dir(&config.output_dir)?;
    let path = output_path(config, card);
    let size = (config.width, config.height);
    debug!("Rendering '{}' to {}", card.title, path.display());

    let redraws = match config.format {
        OutputFormat::Png => render_png(&path, size, |surface| {
            let (surface, redraws) = paint(surface, card, update, chart_for(config))?;
            surface.present()?;
            Ok(redraws)
        })?,
        OutputFormat::Svg => {
            let mut svg = String::new();
            let redraws = {
                let backend = SVGBackend::with_string(&mut svg, size);
                let (surface, redraws) = paint(PlottersSurface::new(backend), card, update, chart_for(config))?;
                surface.present()?;
                redraws
            };
            fs::write(&path, svg).map_err(|source| RenderError::Io {
                path: path.clone(),
                source,
            })?;
            redraws
        }
    };

    if !update.is_empty() && redraws == 1 {
        warn!("Update for '{}' changed no redraw trigger", card.title);
    }

    info!("🎨 Rendered '{}' to {} ({} draw(s))", card.title, path.display(), redraws);
    Ok((path, redraws))
}

/// Render every card on its own blocking task and collect the written paths
pub async fn render_all(cards: Vec<FinanceCard>, config: &Config) -> Result<Vec<PathBuf>, RenderError> {
    let handles: Vec<_> = cards
        .into_iter()
        .map(|card| {
            let config = config.clone();
            tokio::task::spawn_blocking(move || render_card(&card, &config))
        })
        .collect();

    let mut paths = Vec::with_capacity(handles.len());
    for handle in handles {
        let path = handle.await.map_err(|e| RenderError::Task(e.to_string()))??;
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WavePoint;
    use crate::surface::{LabelStyle, LinearGradient, StrokeStyle};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static SCRATCH: AtomicUsize = AtomicUsize::new(0);

    fn scratch_dir() -> PathBuf {
        let n = SCRATCH.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("wavecard-test-{}-{}", std::process::id(), n))
    }

    fn test_config(format: OutputFormat) -> Config {
        Config {
            output_dir: scratch_dir(),
            format,
            draw_labels: false,
            ..Config::default()
        }
    }

    #[test]
    fn test_dashboard_cards() {
        let cards = dashboard_cards();
        assert_eq!(cards.len(), 4);
        let growths: Vec<Growth> = cards.iter().map(|c| c.growth).collect();
        assert_eq!(growths, vec![Growth::Success, Growth::Danger, Growth::Success, Growth::Normal]);
        assert!(cards.iter().all(|c| c.chart_data.len() == 6));
    }

    #[test]
    fn test_find_card() {
        let cards = dashboard_cards();
        assert_eq!(find_card(&cards, "vendor-balance").unwrap().balance, 15200.0);
        assert_eq!(find_card(&cards, "client balance").unwrap().balance, 12480.0);
        assert!(matches!(find_card(&cards, "admins"), Err(CardError::NotFound(_))));
    }

    #[test]
    fn test_load_cards() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cards.json");
        fs::write(&path, r#"[{"title": "Client Balance", "balance": 10, "change": 1.5, "growth": "success"}]"#).unwrap();

        let cards = load_cards(&path).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].growth, Growth::Success);

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_cards(&path), Err(CardError::Parse { .. })));
        assert!(matches!(load_cards(&dir.join("missing.json")), Err(CardError::Read { .. })));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_output_path_uses_slug() {
        let config = Config {
            output_dir: PathBuf::from("out"),
            format: OutputFormat::Svg,
            ..Config::default()
        };
        let card = FinanceCard::new("Pending Deposite", 1.0, 0.0, Growth::Normal);
        assert_eq!(output_path(&config, &card), PathBuf::from("out/pending-deposite.svg"));
    }

    #[test]
    fn test_render_svg_card() {
        let config = test_config(OutputFormat::Svg);
        let card = &dashboard_cards()[1];
        let path = render_card(card, &config).unwrap();
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        let _ = fs::remove_dir_all(&config.output_dir);
    }

    #[test]
    fn test_render_png_card() {
        let config = test_config(OutputFormat::Png);
        let card = &dashboard_cards()[0];
        let path = render_card(card, &config).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        let _ = fs::remove_dir_all(&config.output_dir);
    }

    #[test]
    fn test_update_counts_redraws() {
        let config = test_config(OutputFormat::Png);
        let card = &dashboard_cards()[0];

        let update = CardUpdate {
            title: Some("Renamed".to_string()),
            balance: Some(card.balance),
            growth: Some(Growth::Success),
            color: None,
        };
        let (_, redraws) = render_updated_card(card, &update, &config).unwrap();
        assert_eq!(redraws, 1);

        let update = CardUpdate {
            balance: Some(13000.0),
            growth: Some(Growth::Danger),
            ..CardUpdate::default()
        };
        let (_, redraws) = render_updated_card(card, &update, &config).unwrap();
        assert_eq!(redraws, 3);
        let _ = fs::remove_dir_all(&config.output_dir);
    }

    /// Plotters surface whose text drawing always fails, like a host without fonts
    struct NoFonts<S>(S);

    impl<S: Surface> Surface for NoFonts<S> {
        fn size(&self) -> (u32, u32) {
            self.0.size()
        }

        fn clear(&mut self) -> Result<(), SurfaceError> {
            self.0.clear()
        }

        fn fill_area(&mut self, outline: &[WavePoint], paint: &LinearGradient) -> Result<(), SurfaceError> {
            self.0.fill_area(outline, paint)
        }

        fn stroke_path(&mut self, path: &[WavePoint], stroke: &StrokeStyle) -> Result<(), SurfaceError> {
            self.0.stroke_path(path, stroke)
        }

        fn draw_text(&mut self, _text: &str, _anchor: WavePoint, _style: &LabelStyle) -> Result<(), SurfaceError> {
            Err(SurfaceError::backend("draw_text", "font not found"))
        }
    }

    #[test]
    fn test_failed_png_render_writes_nothing() {
        let config = Config {
            draw_labels: true,
            ..test_config(OutputFormat::Png)
        };
        let card = &dashboard_cards()[0];
        fs::create_dir_all(&config.output_dir).unwrap();
        let path = output_path(&config, card);

        let result = render_png(&path, (config.width, config.height), |surface| {
            let (_, redraws) = paint(NoFonts(surface), card, &CardUpdate::default(), chart_for(&config))?;
            Ok(redraws)
        });
        assert!(matches!(result, Err(RenderError::Surface(_))));
        assert!(!path.exists());
        let _ = fs::remove_dir_all(&config.output_dir);
    }

    #[tokio::test]
    async fn test_render_all_writes_every_card() {
        let config = test_config(OutputFormat::Svg);
        let paths = render_all(dashboard_cards(), &config).await.unwrap();
        assert_eq!(paths.len(), 4);
        assert!(paths.iter().all(|p| p.exists()));
        assert!(paths[3].ends_with("pending-deposite.svg"));
        let _ = fs::remove_dir_all(&config.output_dir);
    }
}
