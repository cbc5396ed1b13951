//! Bézier Curve Simulator.
//!
//! Berechnet Höhenwerte entlang einer Bézier-Kurve durch die Datenpunkte.
//! Aufruf: bezier-curve-simulator [punkte.json] [--smooth] [--step <sekunden>]

use bezier_curve_simulator::core::profile;
use bezier_curve_simulator::{CurveModel, CurveOptions};
use std::path::PathBuf;

/// Standard-Schrittweite der Ausgabe in Sekunden.
const DEFAULT_STEP: f64 = 10.0;

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!(
        "Bézier Curve Simulator v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run() {
        log::error!("Abbruch: {:#}", e);
        std::process::exit(1);
    }
}

/// Kommandozeilen-Argumente
#[derive(Debug)]
struct Args {
    points_path: Option<PathBuf>,
    smooth: bool,
    step: f64,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self {
            points_path: None,
            smooth: false,
            step: DEFAULT_STEP,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--smooth" => parsed.smooth = true,
                "--step" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--step erwartet einen Wert"))?;
                    parsed.step = value.parse()?;
                    anyhow::ensure!(
                        parsed.step > 0.0 && parsed.step.is_finite(),
                        "--step muss positiv sein, war {}",
                        parsed.step
                    );
                }
                other if other.starts_with("--") => anyhow::bail!("Unbekannte Option: {}", other),
                path => parsed.points_path = Some(PathBuf::from(path)),
            }
        }
        Ok(parsed)
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;

    // Optionen aus TOML laden (oder Standardwerte)
    let options = CurveOptions::load_from_file(&CurveOptions::config_path());

    let points = match &args.points_path {
        Some(path) => profile::load_points(path)?,
        None => profile::launch_profile(),
    };

    let mut model = CurveModel::with_chart(points, &options)?;
    if args.smooth {
        model.smooth_curve();
    }

    let Some((start, end)) = model.x_range() else {
        anyhow::bail!("Keine Datenpunkte vorhanden");
    };

    let solver = options.solver();
    println!("{:>10}  {:>16}", "time", "height");
    let steps = ((end - start) / args.step).floor() as usize;
    for i in 0..=steps {
        let time = start + i as f64 * args.step;
        println!("{:>10.2}  {:>16.2}", time, model.height_at_time_with(time, solver));
    }
    if start + steps as f64 * args.step < end {
        println!("{:>10.2}  {:>16.2}", end, model.height_at_time_with(end, solver));
    }

    Ok(())
}
