use crate::config::Config;
use crate::models::Growth;
use crate::services::card_service::{self, CardUpdate};

const USAGE: &str = "❌ Usage: `wavecard update <card> [title=<text>] [balance=<amount>] [growth=<success|normal|danger>] [color=<rgb(r, g, b)>]`";

pub fn execute(config: &Config, args: &[&str]) -> Result<(), String> {
    let Some((key, assignments)) = args.split_first() else {
        return Err(USAGE.to_string());
    };

    let cards = card_service::configured_cards(config).map_err(|e| e.to_string())?;
    let card = card_service::find_card(&cards, key).map_err(|e| format!("❌ {}", e))?;
    let update = parse_update(assignments)?;

    let (path, redraws) = card_service::render_updated_card(&card, &update, config)
        .map_err(|e| format!("❌ Failed to render '{}': {}", card.title, e))?;

    println!("{} ({} draw(s))", path.display(), redraws);
    Ok(())
}

/// Parse `key=value` pairs into a card update
pub fn parse_update(assignments: &[&str]) -> Result<CardUpdate, String> {
    let mut update = CardUpdate::default();
    for assignment in assignments {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| format!("❌ Expected key=value, got '{}'", assignment))?;
        match key.trim().to_lowercase().as_str() {
            "balance" => {
                let balance = value
                    .trim()
                    .replace(['$', ','], "")
                    .parse::<f64>()
                    .map_err(|_| format!("❌ Invalid balance '{}'", value))?;
                update.balance = Some(balance);
            }
            "title" => update.title = Some(value.trim().to_string()),
            "growth" => update.growth = Some(Growth::from(value)),
            "color" | "colour" => update.color = Some(value.to_string()),
            other => return Err(format!("❌ Unknown field '{}'. {}", other, USAGE)),
        }
    }
    Ok(update)
}
