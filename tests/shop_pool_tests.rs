//! Offer invariants over all ownership combinations and seeds.

use dino_runner::rng::GameRng;
use dino_runner::shop::{
    OFFER_SIZE, OwnedUpgrades, SHOP_ITEMS, ShopItemId, eligible_items, select_offered_pool,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn owned(d: bool, i: bool) -> OwnedUpgrades {
    OwnedUpgrades { has_double_jump: d, has_immortality: i }
}

proptest! {
    #[test]
    fn owned_one_time_items_are_never_offered(d: bool, i: bool, seed: u64) {
        let pool = select_offered_pool(&SHOP_ITEMS, owned(d, i), &mut GameRng::new(seed));
        prop_assert!(!(d && pool.iter().any(|it| it.id == ShopItemId::DoubleJump)));
        prop_assert!(!(i && pool.iter().any(|it| it.id == ShopItemId::Immortal)));
    }

    #[test]
    fn offer_size_is_capped_by_eligibility(d: bool, i: bool, seed: u64) {
        let eligible = eligible_items(&SHOP_ITEMS, owned(d, i));
        let pool = select_offered_pool(&SHOP_ITEMS, owned(d, i), &mut GameRng::new(seed));
        prop_assert_eq!(pool.len(), OFFER_SIZE.min(eligible.len()));
    }

    #[test]
    fn offer_has_no_duplicates_and_only_eligible_items(d: bool, i: bool, seed: u64) {
        let eligible: HashSet<_> = eligible_items(&SHOP_ITEMS, owned(d, i)).iter().map(|it| it.id).collect();
        let pool = select_offered_pool(&SHOP_ITEMS, owned(d, i), &mut GameRng::new(seed));
        let ids: HashSet<_> = pool.iter().map(|it| it.id).collect();
        prop_assert_eq!(ids.len(), pool.len());
        prop_assert!(ids.is_subset(&eligible));
    }
}

#[test]
fn repeated_draws_reorder_but_stay_eligible() {
    let mut rng = GameRng::new(2024);
    let owned = owned(true, false);
    let mut orders = HashSet::new();
    for _ in 0..64 {
        let pool = select_offered_pool(&SHOP_ITEMS, owned, &mut rng);
        let mut sorted: Vec<_> = pool.iter().map(|it| it.id as u8).collect();
        sorted.sort();
        assert_eq!(
            sorted,
            vec![ShopItemId::MaxLife as u8, ShopItemId::Heal as u8, ShopItemId::Immortal as u8]
        );
        orders.insert(pool.iter().map(|it| it.id as u8).collect::<Vec<_>>());
    }
    assert!(orders.len() > 1, "64 draws should not all share one order");
}

#[test]
fn every_catalog_item_shows_up_when_nothing_is_owned() {
    let mut rng = GameRng::new(8);
    let mut seen = HashSet::new();
    for _ in 0..64 {
        for item in select_offered_pool(&SHOP_ITEMS, OwnedUpgrades::default(), &mut rng) {
            seen.insert(item.id);
        }
    }
    assert_eq!(seen.len(), SHOP_ITEMS.len());
}
