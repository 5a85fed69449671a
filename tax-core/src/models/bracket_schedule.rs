use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Errors reported by [`BracketSchedule::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketScheduleError {
    #[error("bracket schedule has no brackets")]
    Empty,

    /// Thresholds must be strictly increasing.
    #[error("threshold {current} at position {index} does not exceed the previous threshold {previous}")]
    ThresholdNotIncreasing {
        index: usize,
        previous: u32,
        current: u32,
    },

    #[error("marginal rate at position {index} must be between 0 and 1, got {rate}")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// One step of a progressive schedule: income above `threshold` is taxed at
/// `rate` until the next bracket's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bracket {
    pub threshold: u32,
    pub rate: Decimal,
}

impl Bracket {
    pub const fn new(
        threshold: u32,
        rate: Decimal,
    ) -> Self {
        Self { threshold, rate }
    }
}

/// An ordered list of brackets. The last bracket has no upper bound.
///
/// The first threshold does not have to be zero: income below it is simply
/// untaxed (Delaware, Mississippi, Missouri and Ohio start above zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BracketSchedule<'a> {
    brackets: &'a [Bracket],
}

impl<'a> BracketSchedule<'a> {
    pub const fn new(brackets: &'a [Bracket]) -> Self {
        Self { brackets }
    }

    pub fn brackets(&self) -> &'a [Bracket] {
        self.brackets
    }

    /// Checks the structural invariants of the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`BracketScheduleError`] if:
    /// - the schedule is empty
    /// - a threshold is not strictly greater than the one before it
    /// - a rate is outside `[0, 1]`
    pub fn validate(&self) -> Result<(), BracketScheduleError> {
        if self.brackets.is_empty() {
            return Err(BracketScheduleError::Empty);
        }

        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(BracketScheduleError::RateOutOfRange {
                    index,
                    rate: bracket.rate,
                });
            }
        }

        for (index, pair) in self.brackets.windows(2).enumerate() {
            if pair[1].threshold <= pair[0].threshold {
                return Err(BracketScheduleError::ThresholdNotIncreasing {
                    index: index + 1,
                    previous: pair[0].threshold,
                    current: pair[1].threshold,
                });
            }
        }

        Ok(())
    }
}
