use chrono::NaiveDate;

use super::{Cents, Schedule, ScheduleError};

/// A recurring or one-time money event: a description, a signed amount and
/// the schedule it fires on. Gains carry positive amounts, dumps negative.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub description: String,
    pub amount: Cents,
    pub schedule: Schedule,
    pub active_from: Option<NaiveDate>,
    pub active_until: Option<NaiveDate>,
}

impl Transfer {
    /// Incoming money. `amount` is the positive magnitude in cents.
    pub fn gain(
        description: impl Into<String>,
        amount: Cents,
        schedule: Schedule,
    ) -> Result<Self, ScheduleError> {
        Self::new(description, amount, schedule)
    }

    /// Outgoing money. `amount` is the positive magnitude in cents.
    pub fn dump(
        description: impl Into<String>,
        amount: Cents,
        schedule: Schedule,
    ) -> Result<Self, ScheduleError> {
        Self::new(description, -amount, schedule)
    }

    fn new(
        description: impl Into<String>,
        amount: Cents,
        schedule: Schedule,
    ) -> Result<Self, ScheduleError> {
        schedule.validate()?;
        Ok(Self {
            description: description.into(),
            amount,
            schedule,
            active_from: None,
            active_until: None,
        })
    }

    /// Limit the transfer to fire no earlier than the given date.
    pub fn with_active_from(mut self, date: NaiveDate) -> Self {
        self.active_from = Some(date);
        self
    }

    /// Limit the transfer to fire no later than the given date.
    pub fn with_active_until(mut self, date: NaiveDate) -> Self {
        self.active_until = Some(date);
        self
    }

    /// The dates this transfer fires on within `[start, end]`, after the
    /// active period is applied. Phase stays anchored to the window start;
    /// the active limits only drop dates outside them.
    pub fn occurrences(&self, start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = self.schedule.occurrences(start, end, today);
        if let Some(from) = self.active_from {
            dates.retain(|d| *d >= from);
        }
        if let Some(until) = self.active_until {
            dates.retain(|d| *d <= until);
        }
        dates
    }

    /// The amount normalized to a per-day basis, disregarding sign.
    pub fn daily_average(&self) -> f64 {
        self.amount.unsigned_abs() as f64 / self.schedule.period_days() as f64
    }
}
