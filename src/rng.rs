//! Seedable randomness for the shop offer.
//!
//! The browser build seeds from `Math.random`; tests pass a fixed seed so
//! offers are reproducible.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Seed from the page's entropy. Only meaningful in the browser.
    #[must_use]
    pub fn from_browser() -> Self {
        let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
        Self::new((hi << 32) ^ lo ^ js_sys::Date::now() as u64)
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
