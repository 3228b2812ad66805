// Offer held for the lifetime of one shop visit.
use rand::Rng;

use crate::model::GameStatus;
use crate::shop::{OwnedUpgrades, ShopItem, select_offered_pool};

#[derive(Debug, Clone, Default)]
pub struct ShopSession {
    pool: Vec<ShopItem>,
    open: bool,
    visits: u32,
}

impl ShopSession {
    /// Feed the status of every render. The offer is drawn once when the shop
    /// opens and stays fixed until it closes, so cards never reshuffle while
    /// the player is buying.
    pub fn observe<R: Rng + ?Sized>(
        &mut self,
        status: GameStatus,
        catalog: &[ShopItem],
        owned: OwnedUpgrades,
        rng: &mut R,
    ) -> &[ShopItem] {
        match (status == GameStatus::Shop, self.open) {
            (true, false) => {
                self.pool = select_offered_pool(catalog, owned, rng);
                self.open = true;
                self.visits += 1;
            }
            (false, true) => {
                self.pool.clear();
                self.open = false;
            }
            _ => {}
        }
        &self.pool
    }

    pub fn pool(&self) -> &[ShopItem] {
        &self.pool
    }

    /// Number of times an offer has been drawn.
    pub fn visits(&self) -> u32 {
        self.visits
    }
}
