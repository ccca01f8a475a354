use core::sync::atomic::{AtomicU64, Ordering};

/// `f64` with an indivisible add, stored as its bit pattern.
#[derive(Debug, Default)]
pub struct AtomicF64(AtomicU64);

impl AtomicF64 {
    pub fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    pub fn load(&self, order: Ordering) -> f64 {
        f64::from_bits(self.0.load(order))
    }

    /// Adds `value`, returning the previous value. Retries the
    /// compare-exchange until no other writer intervened.
    pub fn fetch_add(&self, value: f64, order: Ordering) -> f64 {
        let prev = self.0.fetch_update(order, Ordering::Relaxed, |bits| {
            Some((f64::from_bits(bits) + value).to_bits())
        });
        match prev {
            Ok(bits) | Err(bits) => f64::from_bits(bits),
        }
    }

    pub fn into_inner(self) -> f64 {
        f64::from_bits(self.0.into_inner())
    }
}
