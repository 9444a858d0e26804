use anyhow::Context;
use clap::Parser as ClapParser;
use layir::Cell;
use sg13::gring::{GuardRingParams, Well};
use sg13::{Sg13Layer, TechParams};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    gring(args)?;
    Ok(())
}

/// Arguments to [`gring`].
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = "Generate an SG13 guard ring cell")]
pub struct Args {
    /// The path to a TOML technology parameter file.
    ///
    /// If unspecified, the built-in SG13G2 rules are used.
    #[arg(long)]
    tech: Option<PathBuf>,
    /// The outer width (y extent) of the ring in micrometers.
    ///
    /// Defaults to the technology's default guard ring width.
    #[arg(short, allow_negative_numbers = true)]
    w: Option<f64>,
    /// The outer length (x extent) of the ring in micrometers.
    ///
    /// Defaults to the technology's default guard ring length.
    #[arg(short, allow_negative_numbers = true)]
    l: Option<f64>,
    /// The well type: `sub` or `nwell`.
    #[arg(long, default_value = "sub")]
    well: String,
    /// The path where the generated cell should be saved as JSON.
    ///
    /// The file and its parent directories will be created if necessary.
    /// If the file already exists, it will be overwritten.
    ///
    /// If unspecified, the output will be written to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

/// Generates the guard ring described by `args`.
fn generate(args: &Args) -> anyhow::Result<Cell<Sg13Layer>> {
    let tech = match args.tech {
        Some(ref path) => TechParams::from_file(path)
            .with_context(|| format!("Failed to load technology parameters from {:?}.", path))?,
        None => TechParams::sg13g2(),
    };
    let well: Well = args
        .well
        .parse()
        .with_context(|| "Failed to parse well type.")?;
    let defaults = GuardRingParams::defaults(&tech);
    let params = GuardRingParams {
        w: args.w.unwrap_or(defaults.w),
        l: args.l.unwrap_or(defaults.l),
        well,
    };
    tracing::info!(
        w = params.w,
        l = params.l,
        %well,
        tech = %tech.tech_name,
        "generating guard ring"
    );
    params
        .draw(&tech)
        .with_context(|| "Failed to generate guard ring.")
}

/// Generates a guard ring and writes it as JSON.
pub fn gring(args: Args) -> anyhow::Result<()> {
    let cell = generate(&args)?;
    let json = serde_json::to_string_pretty(&cell).with_context(|| "Failed to serialize cell.")?;

    if let Some(path) = args.out {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}.", parent))?;
        }
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write cell to {:?}.", path))?;
        eprintln!("output: {:?}", &path);
    } else {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{json}").with_context(|| "Failed to write cell to stdout.")?;
    }

    eprintln!("cell: {}", cell.name());
    for (layer, summary) in cell.layer_summary() {
        let (gds_layer, gds_datatype) = layer.gds();
        eprintln!(
            "  {:<8} {:>3}/{:<2} {:>4} shapes {:>10.4} um^2",
            layer.name(),
            gds_layer,
            gds_datatype,
            summary.count,
            summary.area
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("gring").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn dimensions_default_to_tech() {
        let cell = generate(&args(&[])).unwrap();
        let summary = cell.layer_summary();
        assert_eq!(cell.name().as_str(), "gring_G2");
        assert!(summary.contains_key(&Sg13Layer::PSd));
        assert!(!summary.contains_key(&Sg13Layer::NWell));
    }

    #[test]
    fn nwell_flag_selects_variant() {
        let cell = generate(&args(&["-w", "2", "-l", "3", "--well", "nwell"])).unwrap();
        assert_eq!(cell.shapes_on(&Sg13Layer::NWell).count(), 1);
        assert_eq!(cell.shapes_on(&Sg13Layer::PSd).count(), 0);
    }

    #[test]
    fn bad_inputs_are_reported() {
        assert!(generate(&args(&["--well", "pwell"])).is_err());
        assert!(generate(&args(&["-w", "-1"])).is_err());
        assert!(generate(&args(&["-w", "0.4", "-l", "3"])).is_err());
        assert!(generate(&args(&["--tech", "/nonexistent/sg13g2.toml"])).is_err());
    }

    #[test]
    fn writes_json_to_file() {
        let dir = std::env::temp_dir().join(format!("gring-test-{}", std::process::id()));
        let path = dir.join("nested/gring.json");
        let path_str = path.to_str().unwrap();
        gring(args(&["-w", "2", "-l", "3", "-o", path_str])).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["name"], "gring_G2");
        assert_eq!(value["shapes"].as_array().unwrap().len(), 3 + 22);
        std::fs::remove_dir_all(dir).unwrap();
    }
}
