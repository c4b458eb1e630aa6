use clap::Parser;
use csv::ReaderBuilder;
use neo_core::constants::SCENE_SCALE;
use neo_orbits::RiskCategory;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the XY projection of an orbit path CSV (index,x,y,z)"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/orbit.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 900)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
    /// Risk category used to colour the orbit (high, moderate, low, minimal)
    #[arg(long, default_value = "minimal")]
    risk: String,
    /// Skip the caption and axis labels (no system fonts needed)
    #[arg(long, default_value_t = false)]
    no_labels: bool,
}

const EARTH_COLOR: RGBColor = RGBColor(37, 99, 235);
const PERIAPSIS_COLOR: RGBColor = RGBColor(15, 23, 42);

fn main() -> anyhow::Result<()> {
    neo_sentinel::init_logging();
    let cli = Cli::parse();
    let points = read_points(&cli.input)?;
    debug!(input = %cli.input, points = points.len(), "read orbit path");
    if points.len() < 2 {
        return Err(anyhow::anyhow!("Orbit path needs at least two points"));
    }

    // Earth always fits, whatever the orbit size.
    let extent = points
        .iter()
        .map(|(x, y)| x.abs().max(y.abs()))
        .fold(SCENE_SCALE, f64::max)
        * 1.1;

    let periapsis = points
        .iter()
        .copied()
        .min_by(|a, b| a.0.hypot(a.1).total_cmp(&b.0.hypot(b.1)))
        .ok_or_else(|| anyhow::anyhow!("Orbit path is empty"))?;

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if !cli.no_labels {
        let font_family = select_font_family();
        builder
            .caption(
                "Orbit path (XY projection)",
                FontDesc::new(font_family, 24.0, FontStyle::Bold),
            )
            .x_label_area_size(50)
            .y_label_area_size(60);
    }
    let mut chart = builder.build_cartesian_2d(-extent..extent, -extent..extent)?;

    if !cli.no_labels {
        chart
            .configure_mesh()
            .x_desc("x (scene units)")
            .y_desc("y (scene units)")
            .label_style(FontDesc::new(select_font_family(), 16.0, FontStyle::Normal))
            .draw()?;
    }

    let earth: Vec<(f64, f64)> = (0..=72)
        .map(|i| {
            let t = i as f64 / 72.0 * std::f64::consts::TAU;
            (SCENE_SCALE * t.cos(), SCENE_SCALE * t.sin())
        })
        .collect();
    chart.draw_series(std::iter::once(Polygon::new(earth, EARTH_COLOR.mix(0.6).filled())))?;

    let (r, g, b) = RiskCategory::from_label(&cli.risk).rgb();
    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        ShapeStyle::from(&RGBColor(r, g, b)).stroke_width(2),
    ))?;

    chart.draw_series(std::iter::once(Circle::new(
        periapsis,
        6,
        PERIAPSIS_COLOR.filled(),
    )))?;

    root.present()?;
    info!(path = %cli.output.display(), points = points.len(), "wrote orbit plot");
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_points(path: &str) -> anyhow::Result<Vec<(f64, f64)>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let x_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("x"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'x' column"))?;
    let y_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("y"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'y' column"))?;

    let mut points = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let x: f64 = r.get(x_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let y: f64 = r.get(y_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        if x.is_finite() && y.is_finite() {
            points.push((x, y));
        }
    }
    Ok(points)
}
