// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::{NaiveDate, Weekday};
use moneysheet::domain::{Group, MoneySheet, Node, Portfolio, Schedule, Transfer};

/// Helper to parse a date string into a NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Test fixture: the documented example sheet.
/// Initial balance 300.00 with the full portfolio of gains and dumps,
/// grouped the way a real sheet file would group them.
pub fn sample_sheet() -> MoneySheet {
    MoneySheet::new(
        30000,
        Portfolio::new(vec![
            Node::Group(Group::new(
                "Fixed Gains",
                vec![
                    Node::Transfer(
                        Transfer::gain("Salary", 60000, Schedule::Monthly { day: Some(28) })
                            .unwrap(),
                    ),
                    Node::Transfer(
                        Transfer::gain("Scholarship", 5000, Schedule::Monthly { day: Some(9) })
                            .unwrap(),
                    ),
                ],
            )),
            Node::Group(Group::new(
                "Variable Gains",
                vec![Node::Transfer(
                    Transfer::gain(
                        "SecondJob",
                        12000,
                        Schedule::Weekly {
                            weekday: Some(Weekday::Mon),
                        },
                    )
                    .unwrap(),
                )],
            )),
            Node::Group(Group::new(
                "Fixed Dumps",
                vec![
                    Node::Transfer(
                        Transfer::dump("Rental", 80000, Schedule::Monthly { day: Some(1) })
                            .unwrap(),
                    ),
                    Node::Transfer(
                        Transfer::dump("University", 30000, Schedule::Monthly { day: Some(20) })
                            .unwrap(),
                    ),
                ],
            )),
            Node::Group(Group::new(
                "Variable Dumps",
                vec![
                    Node::Transfer(
                        Transfer::dump("Telephone", 3000, Schedule::Monthly { day: Some(10) })
                            .unwrap(),
                    ),
                    Node::Transfer(
                        Transfer::dump(
                            "Food",
                            5000,
                            Schedule::Weekly {
                                weekday: Some(Weekday::Sat),
                            },
                        )
                        .unwrap(),
                    ),
                ],
            )),
        ]),
    )
}

/// The same sheet in its on-disk JSON form, for loader tests.
pub fn sample_sheet_json() -> &'static str {
    r#"{
  "initial_balance": "300.00",
  "portfolio": [
    { "type": "group", "name": "Fixed Gains", "entries": [
      { "type": "gain", "description": "Salary", "amount": "600.00",
        "schedule": { "monthly": { "day": 28 } } },
      { "type": "gain", "description": "Scholarship", "amount": "50.00",
        "schedule": { "monthly": { "day": 9 } } }
    ] },
    { "type": "group", "name": "Variable Gains", "entries": [
      { "type": "gain", "description": "SecondJob", "amount": "120.00",
        "schedule": { "weekly": { "weekday": 1 } } }
    ] },
    { "type": "group", "name": "Fixed Dumps", "entries": [
      { "type": "dump", "description": "Rental", "amount": "800.00",
        "schedule": { "monthly": { "day": 1 } } },
      { "type": "dump", "description": "University", "amount": "300.00",
        "schedule": { "monthly": { "day": 20 } } }
    ] },
    { "type": "group", "name": "Variable Dumps", "entries": [
      { "type": "dump", "description": "Telephone", "amount": "30.00",
        "schedule": { "monthly": { "day": 10 } } },
      { "type": "dump", "description": "Food", "amount": "50.00",
        "schedule": { "weekly": { "weekday": 6 } } }
    ] }
  ]
}"#
}
