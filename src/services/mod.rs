pub mod card_service;
pub mod chart_service;
pub mod redraw_service;
