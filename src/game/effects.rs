//! Eat pulse animation

use std::time::Duration;

use crate::config::{
    EAT_AMPLITUDE_BONUS_MAX, EAT_AMPLITUDE_PER_QUEUED, EAT_BASE_AMPLITUDE, EAT_CHAIN_REWIND,
    EAT_GLOW_MAX, EAT_OVERSHOOT, EAT_PULSE, EAT_QUEUE_MAX,
};

/// Parameters handed to the renderer each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectParams {
    pub head_scale: f32,
    pub glow_alpha: f32,
    pub burst_power: f32,
}

impl EffectParams {
    pub const IDLE: EffectParams = EffectParams {
        head_scale: 1.0,
        glow_alpha: 0.0,
        burst_power: 0.0,
    };
}

impl Default for EffectParams {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Back-out easing: overshoots past 1 and settles.
pub fn ease_out_back(x: f32, overshoot: f32) -> f32 {
    let t = x - 1.0;
    t * t * ((overshoot + 1.0) * t + overshoot) + 1.0
}

/// Head pulse shown after eating. Re-triggers while active are queued and
/// replayed as softer pulses.
#[derive(Debug, Clone, Default)]
pub struct EatEffect {
    active: bool,
    elapsed: Duration,
    queued: u8,
}

impl EatEffect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn queued(&self) -> u8 {
        self.queued
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn trigger(&mut self) {
        if self.active && self.elapsed < EAT_PULSE {
            self.queued = (self.queued + 1).min(EAT_QUEUE_MAX);
        } else {
            self.active = true;
            self.elapsed = Duration::ZERO;
            self.queued = 0;
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= EAT_PULSE {
            if self.queued > 0 {
                self.queued -= 1;
                self.elapsed = EAT_CHAIN_REWIND;
            } else {
                self.reset();
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn params(&self) -> EffectParams {
        if !self.active {
            return EffectParams::IDLE;
        }
        let p = (self.elapsed.as_secs_f32() / EAT_PULSE.as_secs_f32()).min(1.0);
        let amplitude = EAT_BASE_AMPLITUDE
            + (EAT_AMPLITUDE_PER_QUEUED * self.queued as f32).min(EAT_AMPLITUDE_BONUS_MAX);
        EffectParams {
            head_scale: 1.0 + amplitude * (1.0 - ease_out_back(p, EAT_OVERSHOOT)),
            glow_alpha: (EAT_GLOW_MAX * (1.0 - p)).max(0.0),
            burst_power: (1.0 - p).max(0.0),
        }
    }
}
