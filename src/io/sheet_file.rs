//! The JSON sheet file: the on-disk description of a money sheet.
//!
//! The file model is deserialized with serde and then converted into
//! validated domain values; a conversion failure always names the transfer
//! it belongs to. Weekdays in the file are numbered 0 (Sunday) through
//! 6 (Saturday).

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;

use crate::application::AppError;
use crate::domain::{
    parse_cents, Group, MoneySheet, Node, OneTime, Portfolio, Schedule, Transfer,
};

#[derive(Debug, Deserialize)]
pub struct SheetFile {
    pub initial_balance: String,
    #[serde(default)]
    pub portfolio: Vec<NodeFile>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeFile {
    Group {
        name: String,
        #[serde(default)]
        entries: Vec<NodeFile>,
    },
    Gain(TransferFile),
    Dump(TransferFile),
}

#[derive(Debug, Deserialize)]
pub struct TransferFile {
    pub description: String,
    pub amount: String,
    pub schedule: ScheduleFile,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub until: Option<String>,
}

/// Accepts both the bare-string spellings ("daily", "yearly") and the
/// parameterized map spellings ({"monthly": {"day": 28}}).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ScheduleFile {
    Named(NamedScheduleFile),
    Parametric(ParametricScheduleFile),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedScheduleFile {
    Daily,
    Weekly,
    EveryTwoWeeks,
    Monthly,
    Yearly,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParametricScheduleFile {
    Weekly { weekday: Option<u32> },
    EveryTwoWeeks { weekday: Option<u32> },
    Monthly { day: Option<u32> },
    Yearly { month: Option<u32>, day: Option<u32> },
    Once(OnceFile),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnceFile {
    Today,
    Tomorrow,
    On(String),
    InDays(u32),
    ThisWeek(u32),
    NextWeek(u32),
}

/// Read and validate a sheet file from disk.
pub fn load_sheet(path: impl AsRef<Path>) -> Result<MoneySheet, AppError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| AppError::SheetIo {
        path: path.display().to_string(),
        source,
    })?;
    let file: SheetFile =
        serde_json::from_str(&text).map_err(|source| AppError::SheetParse {
            path: path.display().to_string(),
            source,
        })?;
    file.into_money_sheet()
}

impl SheetFile {
    pub fn into_money_sheet(self) -> Result<MoneySheet, AppError> {
        let initial_balance =
            parse_cents(&self.initial_balance).map_err(|e| AppError::InvalidAmount {
                description: "initial_balance".to_string(),
                amount: self.initial_balance.clone(),
                reason: e.to_string(),
            })?;
        let entries = self
            .portfolio
            .into_iter()
            .map(NodeFile::into_node)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MoneySheet::new(initial_balance, Portfolio::new(entries)))
    }
}

impl NodeFile {
    fn into_node(self) -> Result<Node, AppError> {
        match self {
            NodeFile::Group { name, entries } => {
                let children = entries
                    .into_iter()
                    .map(NodeFile::into_node)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Node::Group(Group::new(name, children)))
            }
            NodeFile::Gain(file) => file.into_transfer(true).map(Node::Transfer),
            NodeFile::Dump(file) => file.into_transfer(false).map(Node::Transfer),
        }
    }
}

impl TransferFile {
    fn into_transfer(self, is_gain: bool) -> Result<Transfer, AppError> {
        let amount = parse_cents(&self.amount).map_err(|e| AppError::InvalidAmount {
            description: self.description.clone(),
            amount: self.amount.clone(),
            reason: e.to_string(),
        })?;
        if amount <= 0 {
            return Err(AppError::InvalidAmount {
                description: self.description.clone(),
                amount: self.amount.clone(),
                reason: "amount must be positive; the gain/dump kind supplies the sign"
                    .to_string(),
            });
        }

        let schedule = self.schedule.into_schedule(&self.description)?;
        let mut transfer = if is_gain {
            Transfer::gain(self.description.as_str(), amount, schedule)
        } else {
            Transfer::dump(self.description.as_str(), amount, schedule)
        }
        .map_err(|source| AppError::InvalidSchedule {
            description: self.description.clone(),
            source,
        })?;

        if let Some(from) = &self.from {
            transfer = transfer.with_active_from(parse_file_date(from, &self.description)?);
        }
        if let Some(until) = &self.until {
            transfer = transfer.with_active_until(parse_file_date(until, &self.description)?);
        }
        Ok(transfer)
    }
}

impl ScheduleFile {
    fn into_schedule(self, description: &str) -> Result<Schedule, AppError> {
        match self {
            ScheduleFile::Named(named) => Ok(match named {
                NamedScheduleFile::Daily => Schedule::Daily,
                NamedScheduleFile::Weekly => Schedule::Weekly { weekday: None },
                NamedScheduleFile::EveryTwoWeeks => Schedule::EveryTwoWeeks { weekday: None },
                NamedScheduleFile::Monthly => Schedule::Monthly { day: None },
                NamedScheduleFile::Yearly => Schedule::Yearly { month: None, day: None },
            }),
            ScheduleFile::Parametric(parametric) => match parametric {
                ParametricScheduleFile::Weekly { weekday } => Ok(Schedule::Weekly {
                    weekday: convert_weekday(weekday, description)?,
                }),
                ParametricScheduleFile::EveryTwoWeeks { weekday } => {
                    Ok(Schedule::EveryTwoWeeks {
                        weekday: convert_weekday(weekday, description)?,
                    })
                }
                ParametricScheduleFile::Monthly { day } => Ok(Schedule::Monthly { day }),
                ParametricScheduleFile::Yearly { month, day } => {
                    Ok(Schedule::Yearly { month, day })
                }
                ParametricScheduleFile::Once(once) => {
                    Ok(Schedule::Once(once.into_one_time(description)?))
                }
            },
        }
    }
}

impl OnceFile {
    fn into_one_time(self, description: &str) -> Result<OneTime, AppError> {
        Ok(match self {
            OnceFile::Today => OneTime::Today,
            OnceFile::Tomorrow => OneTime::Tomorrow,
            OnceFile::On(date) => OneTime::On(parse_file_date(&date, description)?),
            OnceFile::InDays(n) => OneTime::InDays(n),
            OnceFile::ThisWeek(weekday) => {
                OneTime::ThisWeek(weekday_from_index(weekday).ok_or_else(|| {
                    AppError::InvalidWeekday {
                        description: description.to_string(),
                        weekday,
                    }
                })?)
            }
            OnceFile::NextWeek(weekday) => {
                OneTime::NextWeek(weekday_from_index(weekday).ok_or_else(|| {
                    AppError::InvalidWeekday {
                        description: description.to_string(),
                        weekday,
                    }
                })?)
            }
        })
    }
}

fn convert_weekday(
    weekday: Option<u32>,
    description: &str,
) -> Result<Option<Weekday>, AppError> {
    weekday
        .map(|index| {
            weekday_from_index(index).ok_or_else(|| AppError::InvalidWeekday {
                description: description.to_string(),
                weekday: index,
            })
        })
        .transpose()
}

fn weekday_from_index(index: u32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

fn parse_file_date(date: &str, description: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| AppError::InvalidDate {
        description: description.to_string(),
        date: date.to_string(),
    })
}
