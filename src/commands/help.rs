pub fn execute() -> Result<(), String> {
    println!(
        "wavecard - finance card wave charts\n\
         \n\
         Commands:\n\
         \x20 render [card...]              Render every card (or the named ones)\n\
         \x20 update <card> [key=value...]  Render a card after applying title=, balance=, growth=, color=\n\
         \x20 cards                         List the cards with balance, change and trend colour\n\
         \x20 help                          Show this message\n\
         \n\
         Cards are named by slug (client-balance) or title (\"Client Balance\").\n\
         \n\
         Environment (also read from .env):\n\
         \x20 CHART_WIDTH, CHART_HEIGHT     Canvas size in pixels (300x80)\n\
         \x20 CHART_OUTPUT_DIR              Output directory (charts)\n\
         \x20 CHART_FORMAT                  png or svg (png)\n\
         \x20 CHART_SHAPE                   decorative or trend (decorative)\n\
         \x20 CHART_LABELS                  Draw month labels, needs system fonts (true)\n\
         \x20 CHART_CARDS                   JSON file of cards to use instead of the dashboard\n\
         \x20 RUST_LOG                      Log filter (wavecard=info)"
    );
    Ok(())
}
