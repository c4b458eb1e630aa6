//! Text and JSON renderings of an impact estimate.

use std::fmt::Write as _;
use std::io::{self, Write};

use neo_core::format::format_length_km;
use neo_export::impact::{Outputs, Report, SiteRecord, write_report};
use neo_impact::ImpactResult;

use crate::scenario::ImpactScenario;

/// Write the JSON report of `result` for `scenario`.
pub fn write_json(
    writer: &mut dyn Write,
    scenario: &ImpactScenario,
    result: &ImpactResult,
    generated_utc: &str,
) -> io::Result<()> {
    let report = Report {
        scenario: &scenario.name,
        description: scenario.description.as_deref(),
        site: scenario.site.as_ref().map(|site| SiteRecord {
            name: &site.name,
            latitude_deg: site.latitude_deg,
            longitude_deg: site.longitude_deg,
            scene_position: site.scene_position(),
        }),
        inputs: &scenario.params,
        outputs: Outputs {
            result,
            comparison: result.comparison_text(),
        },
        generated_utc,
    };
    write_report(writer, &report)
}

/// Human-readable summary, one figure per line.
pub fn summary(scenario: &ImpactScenario, result: &ImpactResult) -> String {
    let params = &scenario.params;
    let mut out = String::new();
    let _ = writeln!(out, "Scenario: {}", scenario.name);
    if let Some(description) = &scenario.description {
        let _ = writeln!(out, "  {description}");
    }
    if let Some(site) = &scenario.site {
        let _ = writeln!(
            out,
            "Ground zero: {} ({:.2}°, {:.2}°)",
            site.name, site.latitude_deg, site.longitude_deg
        );
    }
    let _ = writeln!(
        out,
        "Impactor: {} wide at {:.1} km/s, {:.0} kg/m³, {:.0}° entry",
        format_length_km(params.diameter_km),
        params.velocity_km_s,
        params.density_kg_m3,
        params.angle_degs
    );
    let _ = writeln!(out, "Energy: {}", result.tnt_equivalent);
    let _ = writeln!(out, "Crater diameter: {}", format_length_km(result.crater_diameter_km));
    let _ = writeln!(out, "Fireball radius: {:.2} km", result.fireball_radius_km);
    let _ = writeln!(out, "Earthquake magnitude: {:.1}", result.earthquake_magnitude);
    let _ = writeln!(out, "Ejecta height: {:.1} km", result.ejecta_height_km);
    let _ = writeln!(out, "{}", result.comparison_text());
    out
}
