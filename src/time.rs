//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Milliseconds elapsed since `earlier`.
    #[inline]
    fn millis_since(&self, earlier: Self) -> u64 {
        self.duration_since(earlier).as_millis()
    }
}

/// Millisecond duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }
}

/// A 32-bit millisecond counter instant, as produced by a SysTick handler.
///
/// Differences use wrapping arithmetic, so intervals stay correct across the
/// ~49.7 day counter rollover as long as they are shorter than that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl TimeInstant for Millis {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}
