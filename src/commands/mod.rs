pub mod cards;
pub mod help;
pub mod render;
pub mod update;

use tracing::error;

use crate::config::Config;

pub async fn handle_args(config: &Config, args: &[String]) -> Result<(), String> {
    let parts: Vec<&str> = args.iter().map(String::as_str).collect();
    let (command, rest) = match parts.split_first() {
        Some((command, rest)) => (*command, rest),
        None => ("render", &[][..]),
    };

    let result = match command {
        "render" | "draw" => render::execute(config, rest).await,
        "update" | "set" => update::execute(config, rest),
        "cards" | "list" | "ls" => cards::execute(config, rest),
        "help" | "--help" | "-h" => help::execute(),
        other => Err(format!("Unknown command '{}'. Run `wavecard help` for usage.", other)),
    };

    if let Err(e) = &result {
        error!("Command {} failed: {}", command, e);
    }
    result
}
