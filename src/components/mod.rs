pub mod app;
pub mod game_over_overlay;
pub mod hud_overlay;
pub mod menu_overlay;
pub mod shop_screen;
pub mod victory_overlay;

pub use app::App;
