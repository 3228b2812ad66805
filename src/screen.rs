//! Maps the store's status to the one screen that is shown for it.

use crate::model::GameStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Shop,
    GameOver,
    Victory,
    /// In-run heads-up display.
    Hud,
}

/// Pure projection of status to view; transitions happen in the store.
pub fn select_screen(status: GameStatus) -> Screen {
    match status {
        GameStatus::Menu => Screen::Menu,
        GameStatus::Shop => Screen::Shop,
        GameStatus::GameOver => Screen::GameOver,
        GameStatus::Victory => Screen::Victory,
        GameStatus::Playing => Screen::Hud,
    }
}
