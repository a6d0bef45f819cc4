//! Output formatting module

use serde::Serialize;

use crate::commands::StepRecord;
use motorpool_domain::service::{generate_fleet_report, VehicleSummary};
use motorpool_types::{OutputFormat, Result};

#[derive(Serialize)]
struct RunOutput<'a> {
    steps: &'a [StepRecord],
    fleet: &'a [VehicleSummary],
}

pub fn output_report(output_format: OutputFormat, summaries: &[VehicleSummary]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(summaries)?;
        println!("{}", content);
    } else {
        print!("{}", generate_fleet_report(summaries));
    }
    Ok(())
}

pub fn output_run(
    output_format: OutputFormat,
    records: &[StepRecord],
    summaries: &[VehicleSummary],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&RunOutput {
            steps: records,
            fleet: summaries,
        })?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nScenario Steps");
    println!("==============");
    for record in records {
        match (&record.outcome, &record.error) {
            (Some(outcome), _) => println!(
                "{:>3}. {:<12} {:<14} ok    {}",
                record.step, record.vehicle, record.action, outcome
            ),
            (None, Some(error)) => println!(
                "{:>3}. {:<12} {:<14} FAIL  {}",
                record.step, record.vehicle, record.action, error
            ),
            (None, None) => {}
        }
    }

    let failed = records.iter().filter(|r| r.error.is_some()).count();
    println!("\n{} steps, {} failed\n", records.len(), failed);

    print!("{}", generate_fleet_report(summaries));
    Ok(())
}
