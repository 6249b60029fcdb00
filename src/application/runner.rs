use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::domain::{Forecast, MoneySheet, Simulator};
use crate::io::sheet_file;

use super::AppError;

/// Executes one forecast run end to end: resolve the reference date, load
/// the sheet file, hand everything to the simulator.
///
/// This is the only place the wall clock is read; tests construct the runner
/// from a fixed date instead.
pub struct ForecastRunner {
    today: NaiveDate,
}

impl ForecastRunner {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn from_system_clock() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn load_sheet(&self, path: impl AsRef<Path>) -> Result<MoneySheet, AppError> {
        sheet_file::load_sheet(path)
    }

    /// Load the sheet and simulate `horizon_months` from `start_date`
    /// (defaulting to the reference date).
    pub fn run(
        &self,
        path: impl AsRef<Path>,
        start_date: Option<NaiveDate>,
        horizon_months: u32,
    ) -> Result<Forecast, AppError> {
        let sheet = self.load_sheet(path)?;
        let start = start_date.unwrap_or(self.today);
        Ok(Simulator::new(self.today).run(&sheet, start, horizon_months))
    }
}
