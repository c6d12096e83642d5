//! Periodically reversing wind.

use core::time::Duration;

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec3;

/// Reversal period used by [`Wind::new`].
pub const DEFAULT_REVERSAL_PERIOD: Duration = Duration::from_millis(1200);

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// A wind source that flips direction every period.
///
/// The reversal clock keeps running while the wind is disabled, and
/// disabling keeps the current force so re-enabling resumes it.
#[derive(Clone, Debug)]
pub struct Wind<F: Float> {
    force: Vec3<F>,
    enabled: bool,
    elapsed: Duration,
    period: Duration,
    reversals: u64,
}

impl<F: Float> Wind<F> {
    /// Enabled wind with the default 1200 ms reversal period.
    pub fn new(force: Vec3<F>) -> Self {
        Wind {
            force,
            enabled: true,
            elapsed: Duration::ZERO,
            period: DEFAULT_REVERSAL_PERIOD,
            reversals: 0,
        }
    }

    pub fn with_period(force: Vec3<F>, period: Duration) -> Result<Self, ClothError> {
        if period.is_zero() {
            return Err(ClothError::InvalidWindPeriod);
        }
        Ok(Wind { period, ..Self::new(force) })
    }

    /// Advance the reversal clock by `elapsed` and return this tick's wind.
    ///
    /// Every whole period of accumulated time reverses the force once; the
    /// remainder carries into the next call, so the number of reversals
    /// depends only on total elapsed time, not on how it was split into ticks.
    pub fn generate(&mut self, elapsed: Duration) -> Vec3<F> {
        self.elapsed += elapsed;
        let period = self.period.as_nanos();
        let total = self.elapsed.as_nanos();
        let whole = total / period;
        if whole > 0 {
            let rest = total % period;
            self.elapsed = Duration::new((rest / NANOS_PER_SEC) as u64, (rest % NANOS_PER_SEC) as u32);
            if whole % 2 == 1 {
                self.force = -self.force;
            }
            self.reversals += whole as u64;
            log::trace!("wind reversed {} times ({} total)", whole, self.reversals);
        }

        if self.enabled {
            self.force
        } else {
            Vec3::zero()
        }
    }

    pub fn toggle(&mut self) {
        self.set_enabled(!self.enabled);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("wind {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool { self.enabled }
    /// Current force, whether or not the wind is enabled.
    pub fn force(&self) -> Vec3<F> { self.force }
    pub fn period(&self) -> Duration { self.period }
    /// Total reversals since construction.
    pub fn reversals(&self) -> u64 { self.reversals }
}
