//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod orbit {
    use std::io::{self, Write};

    pub const PATH_HEADER: &str = "index,x,y,z";
    pub const TRACK_HEADER: &str = "hours,x,y,z";

    /// Write a sampled orbit path, one point per row.
    pub fn write_path(writer: &mut dyn Write, points: &[[f64; 3]]) -> io::Result<()> {
        writeln!(writer, "{}", PATH_HEADER)?;
        for (index, p) in points.iter().enumerate() {
            writeln!(writer, "{},{:.6},{:.6},{:.6}", index, p[0], p[1], p[2])?;
        }
        writer.flush()
    }

    /// Write time-stamped positions, one `(hours, point)` pair per row.
    pub fn write_track(writer: &mut dyn Write, samples: &[(f64, [f64; 3])]) -> io::Result<()> {
        writeln!(writer, "{}", TRACK_HEADER)?;
        for (hours, p) in samples {
            writeln!(writer, "{:.3},{:.6},{:.6},{:.6}", hours, p[0], p[1], p[2])?;
        }
        writer.flush()
    }
}

pub mod impact {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};

    /// Ground zero of a reported impact.
    #[derive(Debug, Clone, Serialize)]
    pub struct SiteRecord<'a> {
        pub name: &'a str,
        pub latitude_deg: f64,
        pub longitude_deg: f64,
        pub scene_position: [f64; 3],
    }

    /// Estimated consequences plus the narrative for their comparison tier.
    ///
    /// `result` is flattened, so its fields sit beside `comparison`.
    #[derive(Debug, Serialize)]
    pub struct Outputs<'a, R> {
        #[serde(flatten)]
        pub result: &'a R,
        pub comparison: &'a str,
    }

    /// JSON envelope of a single impact estimate.
    #[derive(Debug, Serialize)]
    pub struct Report<'a, I, R> {
        pub scenario: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub site: Option<SiteRecord<'a>>,
        pub inputs: &'a I,
        pub outputs: Outputs<'a, R>,
        pub generated_utc: &'a str,
    }

    /// Write the report as pretty-printed JSON followed by a newline.
    pub fn write_report<I: Serialize, R: Serialize>(
        writer: &mut dyn Write,
        report: &Report<'_, I, R>,
    ) -> io::Result<()> {
        to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
        writer.flush()
    }
}
