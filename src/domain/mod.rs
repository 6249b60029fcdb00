mod forecast;
mod money;
mod portfolio;
mod schedule;
mod sheet;
mod transfer;

pub use forecast::*;
pub use money::*;
pub use portfolio::*;
pub use schedule::{OneTime, Schedule, ScheduleError};
pub use sheet::*;
pub use transfer::*;
