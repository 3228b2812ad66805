//! Upgrade catalog and the per-visit offer drawn from it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::i18n::Text;
use crate::model::RunnerState;

/// Maximum number of items offered on one shop visit.
pub const OFFER_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopItemId {
    DoubleJump,
    MaxLife,
    Heal,
    Immortal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShopItem {
    pub id: ShopItemId,
    pub name: Text,
    pub description: Text,
    pub cost: u64,
    /// Opaque icon name; the view maps it to a glyph.
    pub icon: &'static str,
    /// Once bought, never offered again.
    pub one_time: bool,
}

pub static SHOP_ITEMS: [ShopItem; 4] = [
    ShopItem {
        id: ShopItemId::DoubleJump,
        name: Text::new("پرش دوگانه", "Double Jump"),
        description: Text::new(
            "قابلیت پرش مجدد در هوا. ضروری برای موانع بلند.",
            "Jump again in mid-air. Essential for tall obstacles.",
        ),
        cost: 1000,
        icon: "arrow-up-circle",
        one_time: true,
    },
    ShopItem {
        id: ShopItemId::MaxLife,
        name: Text::new("افزایش جان", "Max Life Up"),
        description: Text::new(
            "یک خانه به جان اضافه می‌کند و شما را درمان می‌کند.",
            "Adds a heart slot and heals you.",
        ),
        cost: 1500,
        icon: "activity",
        one_time: false,
    },
    ShopItem {
        id: ShopItemId::Heal,
        name: Text::new("بسته تعمیر", "Repair Kit"),
        description: Text::new("یک واحد سلامتی را بازمی‌گرداند.", "Restores one heart."),
        cost: 1000,
        icon: "plus-circle",
        one_time: false,
    },
    ShopItem {
        id: ShopItemId::Immortal,
        name: Text::new("نامیرایی", "Immortality"),
        description: Text::new(
            "با زدن Space برای ۵ ثانیه ضدضربه شوید.",
            "Press Space to become invulnerable for 5 seconds.",
        ),
        cost: 3000,
        icon: "shield",
        one_time: true,
    },
];

/// One-time upgrades the player already holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OwnedUpgrades {
    pub has_double_jump: bool,
    pub has_immortality: bool,
}

impl From<&RunnerState> for OwnedUpgrades {
    fn from(rs: &RunnerState) -> Self {
        Self {
            has_double_jump: rs.has_double_jump,
            has_immortality: rs.has_immortality,
        }
    }
}

impl OwnedUpgrades {
    pub fn excludes(&self, id: ShopItemId) -> bool {
        match id {
            ShopItemId::DoubleJump => self.has_double_jump,
            ShopItemId::Immortal => self.has_immortality,
            _ => false,
        }
    }
}

/// Catalog entries still purchasable, in catalog order.
pub fn eligible_items(catalog: &[ShopItem], owned: OwnedUpgrades) -> Vec<ShopItem> {
    catalog.iter().filter(|item| !owned.excludes(item.id)).copied().collect()
}

/// Draws the items offered on one shop visit: the eligible entries, uniformly
/// shuffled, truncated to `OFFER_SIZE`.
pub fn select_offered_pool<R: Rng + ?Sized>(
    catalog: &[ShopItem],
    owned: OwnedUpgrades,
    rng: &mut R,
) -> Vec<ShopItem> {
    use rand::seq::SliceRandom;
    let mut pool = eligible_items(catalog, owned);
    pool.shuffle(rng);
    pool.truncate(OFFER_SIZE);
    pool
}

/// Whether the buy button for an item of `cost` is enabled.
pub fn can_afford(balance: u64, cost: u64) -> bool {
    balance >= cost
}
