//! LogSynth - Command Entry Point
//!
//! Wires the default four-field registry, builds a baseline dataset,
//! injects anomalies at the configured fraction/seed, and reports a row
//! preview plus summary statistics. All knobs come from `constants.rs`
//! defaults with `LOGSYNTH_*` environment overrides.

use rand::rngs::StdRng;
use rand::SeedableRng;

use logsynth_core::constants::{self, APP_NAME, APP_VERSION, LABEL_COLUMN, PREVIEW_ROWS};
use logsynth_core::{build_dataset, inject, Dataset, GeneratorRegistry, InjectConfig, RuleSet, SynthResult, Value};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("generation failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> SynthResult<()> {
    let run_id = uuid::Uuid::new_v4();
    log::info!("Starting {} v{} (run {})", APP_NAME, APP_VERSION, run_id);

    let registry = GeneratorRegistry::with_defaults();
    let mut rng = StdRng::from_entropy();
    let baseline = build_dataset(&registry, constants::get_row_count(), &mut rng)?;
    log::info!(
        "baseline dataset built: {} rows x {} columns",
        baseline.row_count(),
        baseline.columns().len()
    );

    let config = InjectConfig {
        fraction: constants::get_fraction(),
        seed: Some(constants::get_seed()),
        corrupt_range: constants::get_corrupt_range(),
    };
    let labeled = inject(&baseline, &registry.field_names(), &config, &RuleSet::with_defaults())?;

    print_preview(&labeled, PREVIEW_ROWS);

    let anomalies = (0..labeled.row_count())
        .filter(|&i| labeled.get(i, LABEL_COLUMN) == Some(&Value::Int(1)))
        .count();
    let rate = if labeled.row_count() > 0 {
        anomalies as f64 / labeled.row_count() as f64
    } else {
        0.0
    };
    log::info!("anomaly rate: {:.3} ({} of {} rows)", rate, anomalies, labeled.row_count());

    println!(
        "{}",
        serde_json::json!({
            "run_id": run_id.to_string(),
            "rows": labeled.row_count(),
            "anomalies": anomalies,
            "anomaly_rate": rate,
            "fraction": config.fraction,
            "seed": config.seed,
        })
    );

    Ok(())
}

/// Print the first `limit` rows as a tab-separated preview
fn print_preview(data: &Dataset, limit: usize) {
    println!("{}", data.columns().join("\t"));
    for i in 0..limit.min(data.row_count()) {
        if let Some(row) = data.row(i) {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            println!("{}", cells.join("\t"));
        }
    }
}
