pub mod app;
pub mod nav_chrome;
pub mod phone_radar;
pub mod score_bars;
pub mod slide_deck;
pub mod slide_view;
