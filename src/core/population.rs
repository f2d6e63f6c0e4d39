// Stochastic, input-driven painter population.
//
// Each keystroke may spawn a painter (while below the cap) and may wake
// painters that were created inactive, so visible trails ramp up with the
// input rate rather than on a fixed schedule. Painters are never removed.

use crate::core::constants::*;
use crate::core::painter::LightPainter;
use rand::prelude::*;

pub struct Population {
    pub painters: Vec<LightPainter>,
    pub created: usize,
    rng: StdRng,
}

impl Population {
    pub fn new(seed: u64) -> Self {
        Self {
            painters: Vec::with_capacity(MAX_PAINTERS),
            created: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// React to one keystroke: maybe spawn (immediately activated), then
    /// give every still-inactive painter an independent chance to wake.
    pub fn on_input(&mut self) {
        if self.painters.len() < MAX_PAINTERS && self.rng.gen_bool(SPAWN_PROBABILITY) {
            let delay_ms = self.created as f32 * SPAWN_DELAY_STEP_MS;
            let mut painter = LightPainter::new(delay_ms, &mut self.rng);
            painter.activate();
            self.painters.push(painter);
            self.created += 1;
        }
        for painter in &mut self.painters {
            if !painter.active && self.rng.gen_bool(ACTIVATE_PROBABILITY) {
                painter.activate();
            }
        }
    }

    pub fn update(&mut self, time: f32, level: f32) {
        for painter in &mut self.painters {
            painter.update(time, level);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.painters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.painters.is_empty()
    }
}
