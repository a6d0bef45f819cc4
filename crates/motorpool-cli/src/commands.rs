//! Command handlers

use serde::Serialize;
use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::{output_report, output_run};
use motorpool_domain::service::{summarize_fleet, Outcome};
use motorpool_infra::Scenario;
use motorpool_types::{Error, OutputFormat, Result};

/// Result of one scenario step
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    /// 1-based position in the script
    pub step: usize,
    pub vehicle: String,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Show { scenario } => cmd_show(&scenario, output_format),
        Commands::Run {
            scenario,
            fail_fast,
        } => cmd_run(&scenario, output_format, fail_fast || config.fail_fast),
        Commands::Check { scenario } => cmd_check(&scenario),
        Commands::Config {
            show,
            set_output,
            set_fail_fast,
        } => cmd_config(config, show, set_output, set_fail_fast),
    }
}

fn cmd_show(path: &Path, output_format: OutputFormat) -> Result<()> {
    let scenario = Scenario::load_from_file(path)?;
    output_report(output_format, &summarize_fleet(&scenario.fleet))
}

fn cmd_run(path: &Path, output_format: OutputFormat, fail_fast: bool) -> Result<()> {
    let mut scenario = Scenario::load_from_file(path)?;
    let records = run_steps(&mut scenario, fail_fast)?;
    output_run(output_format, &records, &summarize_fleet(&scenario.fleet))
}

fn cmd_check(path: &Path) -> Result<()> {
    let scenario = Scenario::load_from_file(path)?;
    println!(
        "{}: {} vehicles, {} steps OK",
        path.display(),
        scenario.fleet.len(),
        scenario.steps.len()
    );
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_fail_fast: Option<bool>,
) -> Result<()> {
    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
        println!("Output format set to: {}", format);
    }

    if let Some(fail_fast) = set_fail_fast {
        config.fail_fast = fail_fast;
        changed = true;
        println!("Fail fast set to: {}", fail_fast);
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

/// Apply every step in order. Failed steps are recorded and skipped unless
/// `fail_fast` is set, in which case the first failure is returned.
pub fn run_steps(scenario: &mut Scenario, fail_fast: bool) -> Result<Vec<StepRecord>> {
    let mut records = Vec::with_capacity(scenario.steps.len());

    for (index, step) in scenario.steps.iter().enumerate() {
        let number = index + 1;
        let action = step.operation.name();
        match scenario.fleet.apply(&step.vehicle, &step.operation) {
            Ok(outcome) => {
                tracing::debug!(step = number, vehicle = %step.vehicle, action, %outcome, "step applied");
                records.push(StepRecord {
                    step: number,
                    vehicle: step.vehicle.clone(),
                    action,
                    outcome: Some(outcome),
                    error: None,
                });
            }
            Err(e) => {
                tracing::warn!(step = number, vehicle = %step.vehicle, action, error = %e, "step failed");
                if fail_fast {
                    return Err(Error::Step {
                        step: number,
                        source: e,
                    });
                }
                records.push(StepRecord {
                    step: number,
                    vehicle: step.vehicle.clone(),
                    action,
                    outcome: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use motorpool_types::VehicleError;

    const SCENARIO: &str = r#"
[[vehicles]]
name = "hauler"
kind = "truck"
brand = "KAMAZ"
max_speed = 90
color = "orange"
max_load = 1000

[[steps]]
vehicle = "hauler"
action = "load"
weight = 1000

[[steps]]
vehicle = "hauler"
action = "load"
weight = 1

[[steps]]
vehicle = "hauler"
action = "unload"
weight = 400
"#;

    #[test]
    fn test_run_steps_records_failures_and_continues() {
        let mut scenario = Scenario::load_from_str(SCENARIO).unwrap();
        let records = run_steps(&mut scenario, false).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0].outcome.is_some());
        assert!(records[1].error.as_deref().unwrap().starts_with("overloaded"));
        assert!(records[2].outcome.is_some());

        let bed = scenario.fleet.get("hauler").and_then(|v| v.cargo_bed()).unwrap();
        assert_eq!(bed.free_capacity(), 400.0);
    }

    #[test]
    fn test_run_steps_fail_fast() {
        let mut scenario = Scenario::load_from_str(SCENARIO).unwrap();
        let err = run_steps(&mut scenario, true).unwrap_err();
        assert!(matches!(
            err,
            Error::Step {
                step: 2,
                source: VehicleError::Overloaded { .. }
            }
        ));

        let bed = scenario.fleet.get("hauler").and_then(|v| v.cargo_bed()).unwrap();
        assert_eq!(bed.free_capacity(), 0.0);
    }
}
