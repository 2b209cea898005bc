use lagrange_exploration::{build_report, InterpolationRequest, Settings};
use log::{error, info};
use std::error::Error;
use std::fs;

// Usage: lagrange_exploration [request.json] [settings.json]
// Without a request file the parabola through (0, 1), (1, 3), (2, 7) is used.
fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);

    let request = match args.next() {
        Some(path) => InterpolationRequest::from_json(&fs::read_to_string(path)?)?,
        None => InterpolationRequest::new(vec![[0.0, 1.0], [1.0, 3.0], [2.0, 7.0]]),
    };
    let settings = match args.next() {
        Some(path) => Settings::from_json(&fs::read_to_string(path)?)?,
        None => Settings::default(),
    };

    let report = build_report(&request, &settings)?;
    info!(
        "interpolated {} points: {}",
        report.original_points.len(),
        report.formula
    );

    println!("{}", report.to_json()?);
    Ok(())
}
