//! Cosmetic progress for the loading screen. It is not tied to the real
//! asset fetch; the screen goes away when the model settles.

use crate::constants::{LOADING_STEP_MIN, LOADING_STEP_SPAN, LOADING_TICK_MS};
use crate::regions::DID_YOU_KNOW_FACTS;
use rand::prelude::*;
use std::time::Duration;

pub const LOADING_TICK: Duration = Duration::from_millis(LOADING_TICK_MS);

pub struct LoadingProgress {
    percent: f32,
    rng: StdRng,
}

impl LoadingProgress {
    pub fn new(seed: u64) -> Self {
        Self {
            percent: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn percent(&self) -> f32 {
        self.percent
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// One timer tick. Returns the new percentage.
    pub fn advance(&mut self) -> f32 {
        if !self.is_complete() {
            let step = LOADING_STEP_MIN + self.rng.gen::<f32>() * LOADING_STEP_SPAN;
            self.percent = (self.percent + step).min(100.0);
        }
        self.percent
    }

    pub fn pick_fact(&mut self) -> &'static str {
        DID_YOU_KNOW_FACTS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(DID_YOU_KNOW_FACTS[0])
    }
}
