use anyhow::Result;
use std::io::Write;

use crate::domain::Forecast;

/// Write a forecast as CSV rows, boundary markers included.
/// Returns the number of data rows written.
pub fn write_forecast_csv<W: Write>(forecast: &Forecast, writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["date", "description", "amount_cents", "balance_cents"])?;

    let mut count = 0;
    for entry in &forecast.entries {
        csv_writer.write_record(&[
            entry.date.to_string(),
            entry.description.clone(),
            entry.amount.to_string(),
            entry.balance.to_string(),
        ])?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Write a forecast as pretty-printed JSON.
pub fn write_forecast_json<W: Write>(forecast: &Forecast, mut writer: W) -> Result<()> {
    let json = serde_json::to_string_pretty(forecast)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::domain::{MoneySheet, Node, Portfolio, Schedule, Simulator, Transfer};

    use super::*;

    fn sample_forecast() -> Forecast {
        let sheet = MoneySheet::new(
            30000,
            Portfolio::new(vec![Node::Transfer(
                Transfer::gain("Salary", 60000, Schedule::Monthly { day: Some(28) }).unwrap(),
            )]),
        );
        let today = NaiveDate::from_ymd_opt(2019, 6, 23).unwrap();
        Simulator::new(today).run(&sheet, today, 1)
    }

    #[test]
    fn test_csv_has_header_and_all_rows() {
        let forecast = sample_forecast();
        let mut buffer = Vec::new();
        let count = write_forecast_csv(&forecast, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,description,amount_cents,balance_cents");
        assert_eq!(count, forecast.entries.len());
        assert_eq!(lines.len(), count + 1);
        assert_eq!(lines[1], "2019-06-23,PERIOD-BEGIN,0,30000");
        assert_eq!(lines[2], "2019-06-28,Salary,60000,90000");
    }

    #[test]
    fn test_json_round_trips_the_entries() {
        let forecast = sample_forecast();
        let mut buffer = Vec::new();
        write_forecast_json(&forecast, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["initial_balance"], 30000);
        assert_eq!(value["entries"].as_array().unwrap().len(), forecast.entries.len());
        assert_eq!(value["entries"][1]["description"], "Salary");
    }
}
