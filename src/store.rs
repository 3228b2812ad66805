//! Write surface the screens are allowed to use on the run store.
//!
//! Screens read the state through the reducer handle and mutate it only
//! through [`StoreActions`], which keeps the engine-facing actions out of
//! their reach.

use yew::UseReducerHandle;

use crate::audio::AudioSystem;
use crate::model::{RunnerAction, RunnerState};
use crate::shop::ShopItemId;

pub trait StoreActions {
    fn start_game(&self);
    fn restart_game(&self);
    fn close_shop(&self);
    fn buy_item(&self, id: ShopItemId, cost: u64);
}

impl StoreActions for UseReducerHandle<RunnerState> {
    fn start_game(&self) {
        self.dispatch(RunnerAction::StartGame);
    }

    fn restart_game(&self) {
        self.dispatch(RunnerAction::RestartGame);
    }

    fn close_shop(&self) {
        self.dispatch(RunnerAction::CloseShop);
    }

    fn buy_item(&self, id: ShopItemId, cost: u64) {
        self.dispatch(RunnerAction::BuyItem { id, cost });
    }
}

/// Menu button: unlock audio on this gesture, then start the run.
pub fn start_with_audio(audio: &dyn AudioSystem, store: &dyn StoreActions) {
    audio.init();
    store.start_game();
}

/// Game-over and victory button.
pub fn restart_with_audio(audio: &dyn AudioSystem, store: &dyn StoreActions) {
    audio.init();
    store.restart_game();
}
