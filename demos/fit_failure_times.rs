//! Fit a Weibull distribution to a pump's maintenance history
//!
//! Run with `RUST_LOG=debug` to see the regression details.

use reliability_stats::prelude::*;
use reliability_stats::reliability_weibull::standard_curves;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Weibull Analysis Examples ===\n");

    // Example 1: manually entered failure times
    println!("1. Manual entry");
    let observations = parse_time_entries("100, 200, 300, 400, 500")?;
    let report = analyze(&observations)?;
    println!("{report}");

    // Example 2: time between events from a maintenance log
    println!("2. Maintenance log (run hours)");
    let events = [
        MaintenanceEvent::corrective(0.0),
        MaintenanceEvent::corrective(820.0),
        MaintenanceEvent::preventive(1500.0),
        MaintenanceEvent::corrective(2710.0),
        MaintenanceEvent::corrective(3390.0),
        MaintenanceEvent::corrective(4580.0),
        MaintenanceEvent::preventive(5200.0),
        MaintenanceEvent::corrective(6050.0),
    ];
    let observations = observations_from_events(&events)?;
    let estimator = WeibullEstimator::with_config(EstimatorConfig::default())?;
    let report = estimator.analyze(&observations)?;
    println!("{report}");

    // Example 3: curves for plotting
    println!("3. Curves");
    let config = CurveConfig::default().with_steps(10);
    for curve in standard_curves(&report.parameters, &config)? {
        println!("  {}", curve.kind());
        for point in curve.points() {
            println!("    t = {:>9.2}  value = {:.6}", point.time, point.value);
        }
    }

    // Example 4: too little data
    println!("\n4. Error handling");
    match fit(&[Observation::failure(120.0)]) {
        Ok(params) => println!("  Unexpected fit: {params}"),
        Err(err) => println!("  {err}"),
    }

    Ok(())
}
