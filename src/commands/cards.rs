use crate::config::Config;
use crate::services::card_service;
use crate::utils::Table;

pub fn execute(config: &Config, args: &[&str]) -> Result<(), String> {
    if !args.is_empty() {
        return Err("❌ Usage: `wavecard cards`".to_string());
    }

    let cards = card_service::configured_cards(config).map_err(|e| e.to_string())?;

    let mut table = Table::new(vec!["Card", "Slug", "Balance", "Change", "Direction", "Growth", "Trend colour"]);
    for card in &cards {
        table.add_row(vec![
            card.title.clone(),
            card.slug(),
            card.balance_text(),
            card.badge(),
            if card.is_gain() { "up" } else { "down" }.to_string(),
            card.growth.to_string(),
            card.trend_color().to_css(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
