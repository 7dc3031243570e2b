use tracing::info;

use crate::config::Config;
use crate::services::card_service;

pub async fn execute(config: &Config, args: &[&str]) -> Result<(), String> {
    let all_cards = card_service::configured_cards(config).map_err(|e| e.to_string())?;

    let cards = if args.is_empty() {
        all_cards
    } else {
        args.iter()
            .map(|key| card_service::find_card(&all_cards, key))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("❌ {}", e))?
    };

    if cards.is_empty() {
        return Err("❌ No cards to render.".to_string());
    }

    info!(
        "Rendering {} card(s) at {}x{} into {}",
        cards.len(),
        config.width,
        config.height,
        config.output_dir.display()
    );

    let paths = card_service::render_all(cards, config)
        .await
        .map_err(|e| format!("❌ Failed to render charts: {}", e))?;

    for path in &paths {
        println!("{}", path.display());
    }
    Ok(())
}
