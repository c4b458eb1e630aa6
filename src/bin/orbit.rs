use anyhow::{Context, bail};
use clap::Parser;
use neo_config::load_observations;
use neo_core::constants::KM_TO_SCENE;
use neo_core::format::{format_distance, format_velocity};
use neo_core::vector::norm;
use neo_export::{orbit, writer_for_path};
use neo_orbits::playback::MAX_OFFSET_HOURS;
use neo_orbits::{
    AsteroidObservation, DEFAULT_ORBIT_SEGMENTS, compute_orbit_points, estimate_orbit,
    MAX_TRACK_SAMPLES, position_at_time, sample_track,
};
use neo_sentinel::scenario::select_observation;
use std::path::PathBuf;
use tracing::{info, warn};

/// Estimate a synthetic orbit for a catalogued near-Earth object.
#[derive(Parser, Debug)]
#[command(author, version, about = "Synthetic orbit estimator for near-Earth objects")]
struct Cli {
    /// Observation catalog (YAML list, TOML file, or directory of TOML files)
    #[arg(long, default_value = "data/observations.yaml")]
    catalog: PathBuf,

    /// Object id or name (defaults to the first potentially hazardous entry);
    /// with explicit observation flags it only seeds the orientation
    #[arg(long)]
    id: Option<String>,

    /// Miss distance in km; skips the catalog
    #[arg(long)]
    miss_distance_km: Option<f64>,

    /// Relative velocity in km/s; skips the catalog
    #[arg(long)]
    relative_velocity_km_s: Option<f64>,

    /// Mark an explicit observation as potentially hazardous
    #[arg(long, default_value_t = false)]
    hazardous: bool,

    /// Time offset (hours) at which to report the object's position
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    at_hours: f64,

    /// Write the sampled orbit path as CSV (use '-' for stdout)
    #[arg(long)]
    path_csv: Option<PathBuf>,

    /// Number of segments for the orbit path
    #[arg(long, default_value_t = DEFAULT_ORBIT_SEGMENTS)]
    segments: usize,

    /// Write a time-stamped position track as CSV (use '-' for stdout)
    #[arg(long)]
    track_csv: Option<PathBuf>,

    /// Half-width of the track window in hours
    #[arg(long, default_value_t = MAX_OFFSET_HOURS)]
    track_hours: f64,

    /// Track sampling step in hours
    #[arg(long, default_value_t = 1.0)]
    track_step: f64,
}

fn main() -> anyhow::Result<()> {
    neo_sentinel::init_logging();
    let cli = Cli::parse();
    if cli.track_csv.is_some() {
        check_track_window(cli.track_hours, cli.track_step)?;
    }

    let observation = if cli.miss_distance_km.is_some() || cli.relative_velocity_km_s.is_some() {
        AsteroidObservation {
            miss_distance_km: cli.miss_distance_km,
            relative_velocity_km_s: cli.relative_velocity_km_s,
            is_potentially_hazardous: cli.hazardous,
            ..AsteroidObservation::new(cli.id.clone().unwrap_or_default())
        }
    } else {
        let catalog = load_observations(&cli.catalog)
            .with_context(|| format!("loading {}", cli.catalog.display()))?;
        select_observation(&catalog, cli.id.as_deref())?
    };
    let elements = estimate_orbit(&observation);
    info!(id = %observation.id, ?elements, "estimated orbit");

    if cli.at_hours.abs() > MAX_OFFSET_HOURS {
        warn!(
            hours = cli.at_hours,
            "offset lies outside the ±{MAX_OFFSET_HOURS} h playback window"
        );
    }

    let position = position_at_time(&elements, cli.at_hours);
    let to_stdout = |p: &Option<PathBuf>| p.as_deref().is_some_and(|p| p.as_os_str() == "-");
    if !to_stdout(&cli.path_csv) && !to_stdout(&cli.track_csv) {
        println!("Object: {} ({})", observation.label(), observation.id);
        println!(
            "Miss distance: {}  Relative velocity: {}",
            format_distance(observation.effective_miss_distance_km()),
            format_velocity(observation.effective_relative_velocity_km_s())
        );
        println!(
            "Risk: {}  Potentially hazardous: {}",
            observation.risk_category.unwrap_or_default(),
            observation.is_potentially_hazardous
        );
        println!(
            "Elements: a={:.4} e={:.4} i={:.2}° Ω={:.2}° ω={:.2}° T={:.1} h",
            elements.semi_major_axis,
            elements.eccentricity,
            elements.inclination_deg,
            elements.ascending_node_deg,
            elements.arg_periapsis_deg,
            elements.period_hours
        );
        println!(
            "Periapsis: {:.4} scene units ({} from Earth centre)",
            elements.periapsis_distance(),
            format_distance(elements.periapsis_distance() / KM_TO_SCENE)
        );
        println!(
            "Position at {:+.2} h: [{:.4}, {:.4}, {:.4}] (r = {:.4})",
            cli.at_hours,
            position[0],
            position[1],
            position[2],
            norm(&position)
        );
    }

    if let Some(path) = &cli.path_csv {
        let points = compute_orbit_points(&elements, cli.segments);
        let mut writer = writer_for_path(path)?;
        orbit::write_path(writer.as_mut(), &points)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), points = points.len(), "wrote orbit path");
    }

    if let Some(path) = &cli.track_csv {
        let window = cli.track_hours.abs();
        let samples: Vec<(f64, [f64; 3])> =
            sample_track(&elements, -window, window, cli.track_step)
                .into_iter()
                .map(|s| (s.hours, s.position))
                .collect();
        let mut writer = writer_for_path(path)?;
        orbit::write_track(writer.as_mut(), &samples)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), samples = samples.len(), "wrote position track");
    }

    Ok(())
}

fn check_track_window(hours: f64, step: f64) -> anyhow::Result<()> {
    if !(step.is_finite() && step > 0.0) {
        bail!("track step must be a positive number of hours, got {step}");
    }
    if !hours.is_finite() {
        bail!("track window must be finite, got {hours}");
    }
    let samples = 2.0 * hours.abs() / step + 1.0;
    if samples > MAX_TRACK_SAMPLES as f64 {
        bail!(
            "track step {step} h over ±{} h needs {samples:.0} samples (limit {MAX_TRACK_SAMPLES})",
            hours.abs()
        );
    }
    Ok(())
}
