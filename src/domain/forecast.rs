use chrono::NaiveDate;
use serde::Serialize;

use super::schedule::add_months;
use super::{Cents, MoneySheet};

pub const PERIOD_BEGIN: &str = "PERIOD-BEGIN";
pub const PERIOD_END: &str = "PERIOD-END";

/// One concrete dated firing of a transfer, annotated with the running
/// balance after its amount is applied. Derived by the simulator, never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Cents,
    pub balance: Cents,
}

impl Occurrence {
    /// True for the two synthetic markers bracketing the horizon.
    pub fn is_boundary(&self) -> bool {
        self.description == PERIOD_BEGIN || self.description == PERIOD_END
    }
}

/// The simulator's output: the horizon and its time-ordered,
/// balance-annotated event stream, boundary markers included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forecast {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub initial_balance: Cents,
    pub entries: Vec<Occurrence>,
}

impl Forecast {
    /// The balance carried by the period-end marker.
    pub fn final_balance(&self) -> Cents {
        self.entries
            .last()
            .map(|o| o.balance)
            .unwrap_or(self.initial_balance)
    }
}

/// Expands every transfer of a money sheet over a horizon and folds the
/// running balance through the merged event stream.
///
/// Pure: the only inputs are the sheet, the horizon parameters and the
/// reference date given at construction, so identical inputs always produce
/// identical output.
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    today: NaiveDate,
}

impl Simulator {
    /// `today` is the reference date one-time schedules resolve against.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Run the forecast from `start` over `horizon_months` calendar months.
    /// A zero-month horizon is valid and yields just the boundary markers
    /// (plus any transfer firing on the start date itself).
    pub fn run(&self, sheet: &MoneySheet, start: NaiveDate, horizon_months: u32) -> Forecast {
        let end = add_months(start, horizon_months);
        let transfers = sheet.portfolio.flatten();

        // Events are collected transfer by transfer in declaration order,
        // each transfer's dates already ascending; the stable sort by date
        // then keeps declaration order as the same-date tie-break.
        let mut events: Vec<(NaiveDate, &str, Cents)> = Vec::new();
        for transfer in &transfers {
            for date in transfer.occurrences(start, end, self.today) {
                events.push((date, transfer.description.as_str(), transfer.amount));
            }
        }
        events.sort_by_key(|(date, _, _)| *date);

        let mut entries = Vec::with_capacity(events.len() + 2);
        entries.push(Occurrence {
            date: start,
            description: PERIOD_BEGIN.to_string(),
            amount: 0,
            balance: sheet.initial_balance,
        });
        let mut balance = sheet.initial_balance;
        for (date, description, amount) in events {
            balance += amount;
            entries.push(Occurrence {
                date,
                description: description.to_string(),
                amount,
                balance,
            });
        }
        entries.push(Occurrence {
            date: end,
            description: PERIOD_END.to_string(),
            amount: 0,
            balance,
        });

        Forecast {
            start,
            end,
            initial_balance: sheet.initial_balance,
            entries,
        }
    }
}
