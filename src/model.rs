//! Core data models for the runner.
//! Holds the run state the screens project from and the reducer that applies
//! UI and engine actions to it.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::shop::{OwnedUpgrades, ShopItemId};
use crate::util::clog;

/// Speed the engine reports at level 1; the HUD shows speed relative to it.
pub const RUN_SPEED_BASE: f64 = 22.5;
/// Levels per run; finishing the last one wins the game.
pub const MAX_LEVEL: u32 = 3;
pub const STARTING_LIVES: u32 = 3;
/// Letters collected across a level, in display order.
pub const TARGET_WORD: [char; 4] = ['D', 'I', 'N', 'O'];
/// Neon colour per target letter, indexed like `TARGET_WORD`.
pub const DINO_COLORS: [&str; 4] = ["#2979ff", "#ff1744", "#ffc400", "#00e676"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Menu,
    Playing,
    Shop,
    GameOver,
    Victory,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunnerState {
    pub status: GameStatus,
    /// Points earned this run; doubles as the shop currency.
    pub score: u64,
    pub lives: u32,
    pub max_lives: u32,
    /// Indices into `TARGET_WORD` collected on the current level.
    pub collected_letters: Vec<usize>,
    /// Current level, 1-based.
    pub level: u32,
    pub gems_collected: u32,
    pub distance: f64,
    pub speed: f64,
    pub is_immortality_active: bool,
    pub has_double_jump: bool,
    pub has_immortality: bool,
}

impl Default for RunnerState {
    fn default() -> Self {
        Self {
            status: GameStatus::Menu,
            score: 0,
            lives: STARTING_LIVES,
            max_lives: STARTING_LIVES,
            collected_letters: Vec::new(),
            level: 1,
            gems_collected: 0,
            distance: 0.0,
            speed: RUN_SPEED_BASE,
            is_immortality_active: false,
            has_double_jump: false,
            has_immortality: false,
        }
    }
}

impl RunnerState {
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// True for one-time upgrades already bought.
    pub fn owns(&self, id: ShopItemId) -> bool {
        OwnedUpgrades::from(self).excludes(id)
    }

    fn apply_purchase(&mut self, id: ShopItemId, cost: u64) -> bool {
        if self.status != GameStatus::Shop || self.score < cost || self.owns(id) {
            return false;
        }
        self.score -= cost;
        match id {
            ShopItemId::DoubleJump => self.has_double_jump = true,
            ShopItemId::Immortal => self.has_immortality = true,
            ShopItemId::MaxLife => {
                self.max_lives = self.max_lives.saturating_add(1);
                self.lives = (self.lives + 1).min(self.max_lives);
            }
            ShopItemId::Heal => self.lives = (self.lives + 1).min(self.max_lives),
        }
        true
    }

    fn complete_word(&mut self) {
        self.collected_letters.clear();
        if self.level >= MAX_LEVEL {
            self.status = GameStatus::Victory;
        } else {
            self.level += 1;
            self.status = GameStatus::Shop;
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug, PartialEq)]
pub enum RunnerAction {
    StartGame,
    RestartGame,
    CloseShop,
    BuyItem { id: ShopItemId, cost: u64 },
    // Reports from the game loop.
    Advance { distance: f64, speed: f64 },
    CollectGem { value: u64 },
    CollectLetter { index: usize },
    TakeHit,
    SetImmortalityActive(bool),
}

impl Reducible for RunnerState {
    type Action = RunnerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use RunnerAction::*;
        let mut new = (*self).clone();
        match action {
            StartGame => {
                if new.status != GameStatus::Menu {
                    clog(&format!("start ignored in {:?}", new.status));
                    return self;
                }
                new.status = GameStatus::Playing;
            }
            RestartGame => {
                new = RunnerState { status: GameStatus::Playing, ..RunnerState::default() };
            }
            CloseShop => {
                if new.status != GameStatus::Shop {
                    return self;
                }
                new.status = GameStatus::Playing;
            }
            BuyItem { id, cost } => {
                if !new.apply_purchase(id, cost) {
                    clog(&format!("purchase of {:?} rejected (score {}, cost {})", id, new.score, cost));
                    return self;
                }
                clog(&format!("bought {:?} for {}", id, cost));
            }
            Advance { distance, speed } => {
                if !new.is_playing() { return self; }
                new.distance = new.distance.max(distance);
                new.speed = speed;
            }
            CollectGem { value } => {
                if !new.is_playing() { return self; }
                new.score = new.score.saturating_add(value);
                new.gems_collected = new.gems_collected.saturating_add(1);
            }
            CollectLetter { index } => {
                if !new.is_playing() || index >= TARGET_WORD.len() || new.collected_letters.contains(&index) {
                    return self;
                }
                new.collected_letters.push(index);
                if new.collected_letters.len() == TARGET_WORD.len() {
                    new.complete_word();
                }
            }
            TakeHit => {
                if !new.is_playing() || new.is_immortality_active { return self; }
                new.lives = new.lives.saturating_sub(1);
                if new.lives == 0 {
                    new.status = GameStatus::GameOver;
                }
            }
            SetImmortalityActive(active) => {
                if active && !new.has_immortality { return self; }
                new.is_immortality_active = active;
            }
        }
        if new.status != self.status {
            clog(&format!("status: {:?} -> {:?}", self.status, new.status));
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: RunnerState, action: RunnerAction) -> RunnerState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn playing() -> RunnerState {
        RunnerState { status: GameStatus::Playing, ..RunnerState::default() }
    }

    fn in_shop(score: u64) -> RunnerState {
        RunnerState { status: GameStatus::Shop, score, ..RunnerState::default() }
    }

    #[test]
    fn start_only_leaves_menu() {
        let s = reduce(RunnerState::default(), RunnerAction::StartGame);
        assert_eq!(s.status, GameStatus::Playing);
        let over = RunnerState { status: GameStatus::GameOver, ..RunnerState::default() };
        assert_eq!(reduce(over, RunnerAction::StartGame).status, GameStatus::GameOver);
    }

    #[test]
    fn restart_resets_run_and_plays() {
        let mut s = in_shop(5000);
        s.has_double_jump = true;
        s.level = 3;
        s.distance = 812.4;
        let s = reduce(s, RunnerAction::RestartGame);
        assert_eq!(s, playing());
    }

    #[test]
    fn buying_deducts_and_sets_flags() {
        let s = reduce(in_shop(4500), RunnerAction::BuyItem { id: ShopItemId::Immortal, cost: 3000 });
        assert_eq!(s.score, 1500);
        assert!(s.has_immortality);
        let s = reduce(s, RunnerAction::BuyItem { id: ShopItemId::DoubleJump, cost: 1000 });
        assert_eq!(s.score, 500);
        assert!(s.has_double_jump);
    }

    #[test]
    fn unaffordable_or_owned_purchase_is_ignored() {
        let s = reduce(in_shop(900), RunnerAction::BuyItem { id: ShopItemId::Heal, cost: 1000 });
        assert_eq!(s, in_shop(900));

        let mut owned = in_shop(2000);
        owned.has_double_jump = true;
        let s = reduce(owned.clone(), RunnerAction::BuyItem { id: ShopItemId::DoubleJump, cost: 1000 });
        assert_eq!(s, owned);
    }

    #[test]
    fn purchases_outside_the_shop_are_ignored() {
        let mut s = playing();
        s.score = 10_000;
        let after = reduce(s.clone(), RunnerAction::BuyItem { id: ShopItemId::MaxLife, cost: 1500 });
        assert_eq!(after, s);
    }

    #[test]
    fn max_life_adds_a_heart_and_heals() {
        let mut s = in_shop(1500);
        s.lives = 1;
        let s = reduce(s, RunnerAction::BuyItem { id: ShopItemId::MaxLife, cost: 1500 });
        assert_eq!(s.max_lives, STARTING_LIVES + 1);
        assert_eq!(s.lives, 2);
    }

    #[test]
    fn heal_is_capped_at_max_lives() {
        let s = reduce(in_shop(1000), RunnerAction::BuyItem { id: ShopItemId::Heal, cost: 1000 });
        assert_eq!(s.lives, STARTING_LIVES);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn close_shop_resumes_play() {
        assert_eq!(reduce(in_shop(0), RunnerAction::CloseShop).status, GameStatus::Playing);
        assert_eq!(reduce(RunnerState::default(), RunnerAction::CloseShop).status, GameStatus::Menu);
    }

    #[test]
    fn completing_word_opens_shop_then_wins_on_last_level() {
        let mut s = playing();
        for i in 0..TARGET_WORD.len() {
            s = reduce(s, RunnerAction::CollectLetter { index: i });
        }
        assert_eq!(s.status, GameStatus::Shop);
        assert_eq!(s.level, 2);
        assert!(s.collected_letters.is_empty());

        let mut last = playing();
        last.level = MAX_LEVEL;
        for i in (0..TARGET_WORD.len()).rev() {
            last = reduce(last, RunnerAction::CollectLetter { index: i });
        }
        assert_eq!(last.status, GameStatus::Victory);
    }

    #[test]
    fn duplicate_and_out_of_range_letters_are_ignored() {
        let s = reduce(playing(), RunnerAction::CollectLetter { index: 1 });
        let s = reduce(s, RunnerAction::CollectLetter { index: 1 });
        let s = reduce(s, RunnerAction::CollectLetter { index: 9 });
        assert_eq!(s.collected_letters, vec![1]);
    }

    #[test]
    fn hits_end_the_run_unless_immortal() {
        let mut s = playing();
        s.has_immortality = true;
        let s = reduce(s, RunnerAction::SetImmortalityActive(true));
        let s = reduce(s, RunnerAction::TakeHit);
        assert_eq!(s.lives, STARTING_LIVES);

        let mut s = reduce(s, RunnerAction::SetImmortalityActive(false));
        for _ in 0..STARTING_LIVES {
            s = reduce(s, RunnerAction::TakeHit);
        }
        assert_eq!(s.lives, 0);
        assert_eq!(s.status, GameStatus::GameOver);
    }

    #[test]
    fn immortality_needs_the_upgrade() {
        let s = reduce(playing(), RunnerAction::SetImmortalityActive(true));
        assert!(!s.is_immortality_active);
    }

    #[test]
    fn gems_and_distance_only_count_while_playing() {
        let s = reduce(playing(), RunnerAction::CollectGem { value: 250 });
        let s = reduce(s, RunnerAction::Advance { distance: 40.7, speed: 30.0 });
        let s = reduce(s, RunnerAction::Advance { distance: 12.0, speed: 31.0 });
        assert_eq!(s.score, 250);
        assert_eq!(s.gems_collected, 1);
        assert_eq!(s.distance, 40.7);
        assert_eq!(s.speed, 31.0);

        let menu = reduce(RunnerState::default(), RunnerAction::CollectGem { value: 250 });
        assert_eq!(menu.score, 0);
    }
}
