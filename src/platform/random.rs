/// Source of uniform samples in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform sample in `[min, max)`
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Fair coin flip
    fn coin(&mut self) -> bool {
        self.next_f64() > 0.5
    }

    /// True with the given probability
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Uniform index into a collection of `len` items (`len` must be non-zero)
    fn index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

/// `Math.random()` from the host page
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Deterministic linear congruential generator
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        // High bits of an LCG are the well-mixed ones
        (self.seed >> 8) as f64 / (1u32 << 24) as f64
    }
}
