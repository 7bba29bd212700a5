//! Output formatting and logging utilities

use color_eyre::eyre::{Result, WrapErr};
use fciqmc_basis::{KPoint, PlaneWave};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::SystemTime as StdSystemTime;
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let total_seconds = StdSystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Setup output logging to file or stdout
pub fn setup_output(output_path: Option<&str>) {
    match output_path {
        Some(path) => {
            if let Ok(log) = File::create(path) {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(SecondPrecisionTimer)
                    .with_ansi(false);
                Registry::default().with(file_layer).init();
                info!("Output will be written to: {}", path);
            } else {
                eprintln!("Could not create output file: {}", path);
            }
        }
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(true);
            Registry::default().with(stdout_layer).init();
            info!("Output will be printed to stdout");
        }
    }
}

/// Format a value with six significant digits and trailing zeros removed,
/// as C's `%g` conversion does.
fn format_significant(value: f64) -> String {
    const PRECISION: i32 = 6;
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    // exponent after rounding to PRECISION digits
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Print the mesh, one k-point per line with its kinetic energy
pub fn print_mesh<W: Write>(writer: &mut W, plane_wave: &PlaneWave) -> Result<()> {
    writeln!(
        writer,
        "k-point Mesh with Cutoff : {} Number of Orbitals : {}",
        format_significant(plane_wave.cutoff()),
        plane_wave.len()
    )?;
    for k in plane_wave {
        writeln!(
            writer,
            "k-point Indices {}  Kinetic : {:>10.6}",
            k,
            k.kinetic()
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct MeshPoint {
    #[serde(flatten)]
    k: KPoint,
    kinetic: f64,
}

#[derive(Serialize)]
struct MeshDump {
    cutoff: f64,
    points: Vec<MeshPoint>,
}

fn mesh_dump(plane_wave: &PlaneWave) -> MeshDump {
    MeshDump {
        cutoff: plane_wave.cutoff(),
        points: plane_wave
            .iter()
            .map(|&k| MeshPoint {
                k,
                kinetic: k.kinetic(),
            })
            .collect(),
    }
}

/// Write the mesh as pretty-printed JSON
pub fn dump_mesh(path: &str, plane_wave: &PlaneWave) -> Result<()> {
    let file = File::create(path).wrap_err_with(|| format!("Unable to create {}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &mesh_dump(plane_wave))
        .wrap_err("Failed to serialize mesh")?;
    writer.flush()?;
    info!("Mesh written to: {}", path);
    Ok(())
}
