use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use howlong::elapsed::{elapsed_since, parse_event_time, Breakdown};
use howlong::error::Result;
use howlong::output::format_ago;

use crate::ElapsedArgs;

#[derive(Serialize)]
struct ElapsedRecord {
    timestamp: String,
    elapsed: String,
    breakdown: Breakdown,
}

#[derive(Tabled)]
struct ElapsedRow {
    #[tabled(rename = "TIMESTAMP")]
    timestamp: String,
    #[tabled(rename = "ELAPSED")]
    elapsed: String,
}

pub fn run(args: ElapsedArgs) -> Result<()> {
    // --at pins the clock so output is reproducible in scripts and tests
    let now: DateTime<Utc> = match &args.at {
        Some(at) => parse_event_time(at)?,
        None => Utc::now(),
    };

    if args.json {
        let records = args
            .timestamps
            .iter()
            .map(|ts| -> Result<ElapsedRecord> {
                let parsed = parse_event_time(ts)?;
                let breakdown = Breakdown::from_duration(now.signed_duration_since(parsed));
                Ok(ElapsedRecord {
                    timestamp: ts.clone(),
                    elapsed: format_ago(&breakdown),
                    breakdown,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if let [timestamp] = args.timestamps.as_slice() {
        println!("{}", elapsed_since(timestamp, now)?);
        return Ok(());
    }

    let rows = args
        .timestamps
        .iter()
        .map(|ts| -> Result<ElapsedRow> {
            Ok(ElapsedRow {
                timestamp: ts.clone(),
                elapsed: elapsed_since(ts, now)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{}", Table::new(rows).with(Style::sharp()));
    Ok(())
}
