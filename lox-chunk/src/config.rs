//! # Growth Configuration
//!
//! Every buffer in a chunk grows by the same amortized policy:
//! `new_capacity = max(min_capacity, old_capacity * growth_factor)`.

use std::fmt;
use thiserror::Error;

/// Buffer growth policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    /// Capacity allocated by the first growth event
    pub min_capacity: usize,
    /// Multiplier applied to the old capacity on every later growth event
    pub growth_factor: usize,
}

impl Config {
    /// Default policy: start at 8 slots, then double
    pub const DEFAULT: Self = Self {
        min_capacity: 8,
        growth_factor: 2,
    };

    /// Largest accepted `min_capacity`, one full constant pool
    pub const MAX_MIN_CAPACITY: usize = 1 << 24;

    /// Largest accepted `growth_factor`
    pub const MAX_GROWTH_FACTOR: usize = 16;

    /// Create a new configuration with validation
    pub const fn new(min_capacity: usize, growth_factor: usize) -> Result<Self, ConfigError> {
        let config = Self {
            min_capacity,
            growth_factor,
        };

        if min_capacity == 0 {
            return Err(ConfigError::ZeroMinCapacity);
        }
        if min_capacity > Self::MAX_MIN_CAPACITY {
            return Err(ConfigError::MinCapacityTooLarge(min_capacity));
        }
        if growth_factor < 2 {
            return Err(ConfigError::GrowthFactorTooSmall(growth_factor));
        }
        if growth_factor > Self::MAX_GROWTH_FACTOR {
            return Err(ConfigError::GrowthFactorTooLarge(growth_factor));
        }

        Ok(config)
    }

    /// Capacity to grow to from `old_capacity`
    #[inline]
    pub const fn next_capacity(&self, old_capacity: usize) -> usize {
        let grown = old_capacity.saturating_mul(self.growth_factor);
        if grown < self.min_capacity {
            self.min_capacity
        } else {
            grown
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.min_capacity, self.growth_factor).map(|_| ())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ min_capacity: {}, growth: x{} }}",
            self.min_capacity, self.growth_factor,
        )
    }
}

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("min_capacity must be at least 1")]
    ZeroMinCapacity,

    #[error("min_capacity must be at most {max}, got {0}", max = Config::MAX_MIN_CAPACITY)]
    MinCapacityTooLarge(usize),

    #[error("growth_factor must be at least 2, got {0}")]
    GrowthFactorTooSmall(usize),

    #[error("growth_factor must be at most {max}, got {0}", max = Config::MAX_GROWTH_FACTOR)]
    GrowthFactorTooLarge(usize),
}
