//! Localized UI text. Persian is the primary locale and lays out right-to-left.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    Fa,
    En,
}

impl Locale {
    /// Value for the `dir` attribute of screen roots.
    pub fn dir(self) -> &'static str {
        match self {
            Locale::Fa => "rtl",
            Locale::En => "ltr",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::Fa => Locale::En,
            Locale::En => Locale::Fa,
        }
    }
}

/// A string available in every supported locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Text {
    pub fa: &'static str,
    pub en: &'static str,
}

impl Text {
    pub const fn new(fa: &'static str, en: &'static str) -> Self {
        Self { fa, en }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Fa => self.fa,
            Locale::En => self.en,
        }
    }
}

pub struct Strings {
    pub title: Text,
    pub start: Text,
    pub controls_hint: Text,
    pub language: Text,
    pub shop_title: Text,
    pub balance: Text,
    pub currency: Text,
    pub continue_mission: Text,
    pub game_over: Text,
    pub level: Text,
    pub gems_collected: Text,
    pub distance_travelled: Text,
    pub light_years: Text,
    pub final_score: Text,
    pub try_again: Text,
    pub mission_complete: Text,
    pub victory_subtitle: Text,
    pub gems: Text,
    pub distance: Text,
    pub play_again: Text,
    pub immortality_active: Text,
    pub speed: Text,
}

pub static STRINGS: Strings = Strings {
    title: Text::new("دونده نئونی داینو", "Neon Dino Runner"),
    start: Text::new("شروع عملیات", "Start Mission"),
    controls_hint: Text::new(
        "[ برای حرکت از جهت‌ها یا لمس صفحه استفاده کنید ]",
        "[ Use the arrow keys or touch the screen to move ]",
    ),
    language: Text::new("English", "فارسی"),
    shop_title: Text::new("فروشگاه سایبری", "Cyber Shop"),
    balance: Text::new("اعتبار موجود:", "Available credit:"),
    currency: Text::new("الماس", "gems"),
    continue_mission: Text::new("ادامه ماموریت", "Continue Mission"),
    game_over: Text::new("پایان بازی", "Game Over"),
    level: Text::new("مرحله", "Level"),
    gems_collected: Text::new("الماس‌های جمع شده", "Gems Collected"),
    distance_travelled: Text::new("مسافت طی شده", "Distance Travelled"),
    light_years: Text::new("سال نوری", "LY"),
    final_score: Text::new("امتیاز نهایی", "Final Score"),
    try_again: Text::new("تلاش مجدد", "Try Again"),
    mission_complete: Text::new("ماموریت تکمیل شد", "Mission Complete"),
    victory_subtitle: Text::new("پاسخ کائنات کشف شد!", "The answer to the universe has been found!"),
    gems: Text::new("الماس‌ها", "Gems"),
    distance: Text::new("مسافت", "Distance"),
    play_again: Text::new("شروع دوباره", "Play Again"),
    immortality_active: Text::new("نامیرایی فعال", "Immortality Active"),
    speed: Text::new("سرعت", "Speed"),
};
