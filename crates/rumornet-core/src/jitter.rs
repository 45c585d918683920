// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: Jitter Source
// ─────────────────────────────────────────────────────────────────────
//! Randomness behind confidence jitter and the fallback label.
//!
//! The classifier never touches ambient randomness; it asks a
//! `JitterSource`. Production uses `ThreadJitter`, reproducible runs use
//! `SeededJitter`, tests use `FixedJitter`, and foreign callers plug in
//! their own generator through `ExternalJitter`.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trait for randomness backends.
pub trait JitterSource: Send + Sync {
    /// Uniform draw from the closed interval [0, span].
    fn uniform(&self, span: f64) -> f64;

    /// Fair coin used by the fallback branch. `true` selects REAL.
    fn coin_flip(&self) -> bool;
}

fn draw<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    rng.gen_range(0.0..=span)
}

/// OS-seeded thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadJitter;

impl JitterSource for ThreadJitter {
    fn uniform(&self, span: f64) -> f64 {
        draw(&mut rand::thread_rng(), span)
    }

    fn coin_flip(&self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }
}

/// Deterministic generator seeded from a `u64`.
///
/// Thread-safe: the generator is guarded by a `parking_lot::Mutex`.
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn uniform(&self, span: f64) -> f64 {
        draw(&mut *self.rng.lock(), span)
    }

    fn coin_flip(&self) -> bool {
        self.rng.lock().gen_bool(0.5)
    }
}

/// Constant source: always `fraction * span` and the same coin.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter {
    fraction: f64,
    coin: bool,
}

impl FixedJitter {
    /// `fraction` is clamped to [0, 1].
    pub fn new(fraction: f64, coin: bool) -> Self {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            log::warn!("FixedJitter: non-finite fraction, using 0.0");
            0.0
        };
        Self { fraction, coin }
    }

    /// No jitter; fallback resolves to REAL.
    pub fn zero() -> Self {
        Self::new(0.0, true)
    }

    /// Maximum jitter; fallback resolves to FAKE.
    pub fn max() -> Self {
        Self::new(1.0, false)
    }
}

impl JitterSource for FixedJitter {
    fn uniform(&self, span: f64) -> f64 {
        if !span.is_finite() || span <= 0.0 {
            return 0.0;
        }
        self.fraction * span
    }

    fn coin_flip(&self) -> bool {
        self.coin
    }
}

/// External source that calls a unit-interval draw function.
///
/// Used by the PyO3 FFI layer to delegate randomness to Python. The
/// function should return values in [0, 1]; anything else is clamped.
/// The coin is `draw < 0.5`.
type UnitDrawFn = Box<dyn Fn() -> f64 + Send + Sync>;

pub struct ExternalJitter {
    draw_fn: UnitDrawFn,
}

impl ExternalJitter {
    pub fn new(draw_fn: impl Fn() -> f64 + Send + Sync + 'static) -> Self {
        Self {
            draw_fn: Box::new(draw_fn),
        }
    }

    fn unit(&self) -> f64 {
        rumornet_types::clamp_score((self.draw_fn)(), 0.0, 1.0)
    }
}

impl JitterSource for ExternalJitter {
    fn uniform(&self, span: f64) -> f64 {
        if !span.is_finite() || span <= 0.0 {
            return 0.0;
        }
        self.unit() * span
    }

    fn coin_flip(&self) -> bool {
        self.unit() < 0.5
    }
}
