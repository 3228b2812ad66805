//! Read-only projections of the run state for the in-run HUD and the
//! end-of-run summaries.

use crate::model::{DINO_COLORS, MAX_LEVEL, RUN_SPEED_BASE, RunnerState, TARGET_WORD};
use crate::util::{format_distance, format_score};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterTile {
    pub letter: char,
    pub collected: bool,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HudView {
    /// One entry per heart slot; `true` when filled.
    pub hearts: Vec<bool>,
    pub score: String,
    pub level: u32,
    pub max_level: u32,
    pub letters: Vec<LetterTile>,
    pub immortality_active: bool,
    pub speed_percent: u32,
}

impl HudView {
    pub fn from_state(rs: &RunnerState) -> Self {
        Self {
            hearts: (0..rs.max_lives).map(|i| i < rs.lives).collect(),
            score: format_score(rs.score),
            level: rs.level,
            max_level: MAX_LEVEL,
            letters: letter_tiles(&rs.collected_letters),
            immortality_active: rs.is_immortality_active,
            speed_percent: speed_percent(rs.speed),
        }
    }
}

pub fn letter_tiles(collected: &[usize]) -> Vec<LetterTile> {
    TARGET_WORD
        .iter()
        .enumerate()
        .map(|(idx, &letter)| LetterTile {
            letter,
            collected: collected.contains(&idx),
            color: DINO_COLORS[idx],
        })
        .collect()
}

/// Current speed as a rounded percentage of the base run speed.
pub fn speed_percent(speed: f64) -> u32 {
    ((speed / RUN_SPEED_BASE) * 100.0).round().max(0.0) as u32
}

/// Figures shown on the game-over and victory screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub level: u32,
    pub max_level: u32,
    pub gems: u32,
    pub distance: String,
    pub score: String,
}

impl RunSummary {
    pub fn from_state(rs: &RunnerState) -> Self {
        Self {
            level: rs.level,
            max_level: MAX_LEVEL,
            gems: rs.gems_collected,
            distance: format_distance(rs.distance),
            score: format_score(rs.score),
        }
    }
}
