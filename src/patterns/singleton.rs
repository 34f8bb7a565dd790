//! Singleton, redesigned: one explicitly constructed instance.
//!
//! The classic rendition hides a lazily created global behind a
//! `get_instance` accessor. Here the single instance is an ordinary owned
//! value: whoever needs "the" dragon ball collection constructs it once
//! and passes it by reference. Init is construction, teardown is drop,
//! and there is no hidden mutable global to reason about.

/// How many dragon balls exist.
pub const TOTAL_BALLS: u32 = 7;

/// The shared dragon ball collection.
///
/// # Example
///
/// ```rust
/// use patternbook::patterns::singleton::{DragonBalls, TOTAL_BALLS};
///
/// let mut balls = DragonBalls::new();
/// for _ in 0..TOTAL_BALLS {
///     balls.collect();
/// }
/// assert!(balls.summon().contains("Shenlong"));
/// assert_eq!(balls.collected(), 0); // summoning scatters them again
/// ```
#[derive(Debug, Default)]
pub struct DragonBalls {
    collected: u32,
}

impl DragonBalls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up one ball, unless all of them are already held.
    pub fn collect(&mut self) -> String {
        if self.collected < TOTAL_BALLS {
            self.collected += 1;
            format!("Collected a dragon ball. Balls held: {}", self.collected)
        } else {
            "All the dragon balls have already been collected".into()
        }
    }

    /// Summon the dragon if the set is complete; scattering the balls
    /// resets the count to zero.
    pub fn summon(&mut self) -> String {
        if self.collected == TOTAL_BALLS {
            self.collected = 0;
            "Shenlong has been summoned, make your wish".into()
        } else {
            format!(
                "Still missing {} ball(s) to summon Shenlong",
                TOTAL_BALLS - self.collected
            )
        }
    }

    pub fn collected(&self) -> u32 {
        self.collected
    }
}
