//! Screens and HUD for a browser side-scrolling runner: menu, in-run HUD,
//! upgrade shop, game over and victory, rendered with yew.

pub mod audio;
pub mod components;
pub mod hud;
pub mod i18n;
pub mod model;
pub mod rng;
pub mod screen;
pub mod settings;
pub mod shop;
pub mod state;
pub mod store;
pub mod util;
