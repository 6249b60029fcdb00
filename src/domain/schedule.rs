use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Recurrence rule for a money transfer.
///
/// Each variant carries only the parameters its periodicity needs. Optional
/// parameters default to the corresponding component of the anchor date at
/// expansion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Fires every day.
    Daily,
    /// Fires once a week, on the given weekday (default: the anchor's weekday).
    Weekly { weekday: Option<Weekday> },
    /// Fires once every two weeks, on the given weekday.
    EveryTwoWeeks { weekday: Option<Weekday> },
    /// Fires once a month on the given day-of-month (default: the anchor's
    /// day). Days past the end of a month clamp to its last day.
    Monthly { day: Option<u32> },
    /// Fires once a year on the given month/day (default: the anchor's).
    /// Feb 29 clamps to Feb 28 in non-leap years.
    Yearly { month: Option<u32>, day: Option<u32> },
    /// Fires at most once, on a date resolved against the reference date.
    Once(OneTime),
}

/// A single fixed firing date, either literal or relative to the simulation's
/// reference date ("today").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneTime {
    On(NaiveDate),
    Today,
    Tomorrow,
    InDays(u32),
    /// The given weekday of the reference date's ISO week (Monday-based).
    ThisWeek(Weekday),
    /// The given weekday of the week after the reference date's.
    NextWeek(Weekday),
}

impl Schedule {
    /// Check the variant's parameters. Called by the `Transfer` constructors
    /// so that a malformed schedule is rejected before any simulation runs.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        match *self {
            Schedule::Monthly { day: Some(day) } if !(1..=31).contains(&day) => {
                Err(ScheduleError::InvalidDayOfMonth(day))
            }
            Schedule::Yearly { month, day } => {
                if let Some(month) = month {
                    if !(1..=12).contains(&month) {
                        return Err(ScheduleError::InvalidMonth(month));
                    }
                    if let Some(day) = day {
                        // Feb admits 29; the leap-year clamp happens at
                        // expansion time.
                        if day < 1 || day > max_days_in_month(month) {
                            return Err(ScheduleError::InvalidDayForMonth { month, day });
                        }
                    }
                } else if let Some(day) = day {
                    if !(1..=31).contains(&day) {
                        return Err(ScheduleError::InvalidDayOfMonth(day));
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Expand the schedule into its concrete firing dates within
    /// `[anchor, end]` inclusive, ascending and deduplicated. `today` is the
    /// reference date used only by `Once` variants.
    ///
    /// A finite window always yields a finite sequence; `anchor > end` yields
    /// no dates.
    pub fn occurrences(&self, anchor: NaiveDate, end: NaiveDate, today: NaiveDate) -> Vec<NaiveDate> {
        if anchor > end {
            return Vec::new();
        }
        match *self {
            Schedule::Daily => anchor
                .iter_days()
                .take_while(|d| *d <= end)
                .collect(),
            Schedule::Weekly { weekday } => {
                weekly_occurrences(anchor, end, weekday.unwrap_or_else(|| anchor.weekday()), 7)
            }
            Schedule::EveryTwoWeeks { weekday } => {
                weekly_occurrences(anchor, end, weekday.unwrap_or_else(|| anchor.weekday()), 14)
            }
            Schedule::Monthly { day } => {
                monthly_occurrences(anchor, end, day.unwrap_or_else(|| anchor.day()))
            }
            Schedule::Yearly { month, day } => yearly_occurrences(
                anchor,
                end,
                month.unwrap_or_else(|| anchor.month()),
                day.unwrap_or_else(|| anchor.day()),
            ),
            Schedule::Once(one_time) => {
                let date = one_time.resolve(today);
                if date >= anchor && date <= end {
                    vec![date]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Nominal period length in days, used to normalize amounts for summary
    /// statistics (month counts as 30 days, year as 365).
    pub fn period_days(&self) -> u32 {
        match self {
            Schedule::Daily | Schedule::Once(_) => 1,
            Schedule::Weekly { .. } => 7,
            Schedule::EveryTwoWeeks { .. } => 14,
            Schedule::Monthly { .. } => 30,
            Schedule::Yearly { .. } => 365,
        }
    }
}

impl OneTime {
    /// Resolve to the concrete firing date, relative to `today` for the
    /// relative variants.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match *self {
            OneTime::On(date) => date,
            OneTime::Today => today,
            OneTime::Tomorrow => today + Duration::days(1),
            OneTime::InDays(n) => today + Duration::days(n as i64),
            OneTime::ThisWeek(weekday) => monday_of_week(today) + days(weekday),
            OneTime::NextWeek(weekday) => monday_of_week(today) + Duration::days(7) + days(weekday),
        }
    }
}

fn days(weekday: Weekday) -> Duration {
    Duration::days(weekday.num_days_from_monday() as i64)
}

fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - days(date.weekday())
}

fn weekly_occurrences(anchor: NaiveDate, end: NaiveDate, weekday: Weekday, step: i64) -> Vec<NaiveDate> {
    let offset =
        (weekday.num_days_from_monday() + 7 - anchor.weekday().num_days_from_monday()) % 7;
    let mut date = anchor + Duration::days(offset as i64);
    let mut result = Vec::new();
    while date <= end {
        result.push(date);
        date += Duration::days(step);
    }
    result
}

fn monthly_occurrences(anchor: NaiveDate, end: NaiveDate, day: u32) -> Vec<NaiveDate> {
    let mut year = anchor.year();
    let mut month = anchor.month();
    let mut result = Vec::new();
    while first_of_month(year, month) <= end {
        let date = clamped_ymd(year, month, day);
        if date >= anchor && date <= end {
            result.push(date);
        }
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    result
}

fn yearly_occurrences(anchor: NaiveDate, end: NaiveDate, month: u32, day: u32) -> Vec<NaiveDate> {
    let mut result = Vec::new();
    for year in anchor.year()..=end.year() {
        let date = clamped_ymd(year, month, day);
        if date >= anchor && date <= end {
            result.push(date);
        }
    }
    result
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // month is kept in 1..=12 by the callers
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// Build a date, clamping the day to the month's actual length
/// (day 31 in February becomes Feb 28, or Feb 29 in a leap year).
pub(crate) fn clamped_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day.min(days_in_month(year, month))).unwrap()
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    (first_of_month(next_year, next_month) - Duration::days(1)).day()
}

/// Longest a month can be in any year; Feb admits its leap-year length.
fn max_days_in_month(month: u32) -> u32 {
    const DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    DAYS[(month - 1) as usize]
}

/// Add whole calendar months, clamping to the end of the target month
/// (Jan 31 + 3 months = Apr 30).
pub(crate) fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.month0() + months;
    let year = date.year() + (total / 12) as i32;
    let month = total % 12 + 1;
    clamped_ymd(year, month, date.day())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    InvalidDayOfMonth(u32),
    InvalidMonth(u32),
    InvalidDayForMonth { month: u32, day: u32 },
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidDayOfMonth(day) => {
                write!(f, "day-of-month must be in the range [1..31], got {}", day)
            }
            ScheduleError::InvalidMonth(month) => {
                write!(f, "month must be in the range [1..12], got {}", month)
            }
            ScheduleError::InvalidDayForMonth { month, day } => {
                write!(f, "day {} does not exist in month {}", day, month)
            }
        }
    }
}

impl std::error::Error for ScheduleError {}
