//! Command-line lookup against a dataset directory.
//!
//! Prints the zone name on stdout, or an empty line when the coordinate
//! resolves to no zone. Exits 0 on success, 1 when the dataset cannot be
//! loaded, 2 on invalid coordinates.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tzf::TimezoneFinder;

#[derive(Parser)]
#[command(name = "tzf", version, about = "Offline IANA timezone lookup")]
struct Cli {
    /// Dataset directory.
    #[arg(short, long)]
    data: PathBuf,

    /// Which lookup to run.
    #[arg(short, long, value_enum, default_value = "at")]
    mode: Mode,

    /// Read the dataset into memory instead of memory-mapping it.
    #[arg(long)]
    in_memory: bool,

    /// Longitude, in degrees.
    #[arg(allow_negative_numbers = true)]
    lng: f64,

    /// Latitude, in degrees.
    #[arg(allow_negative_numbers = true)]
    lat: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Full lookup.
    At,
    /// Full lookup, ocean zones filtered out.
    Land,
    /// Shortcut-only lookup, no polygon tests.
    Unique,
    /// Deprecated alias of `at`.
    Certain,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let finder = if cli.in_memory {
        TimezoneFinder::in_memory(&cli.data)
    } else {
        TimezoneFinder::new(&cli.data)
    };
    let finder = match finder {
        Ok(finder) => finder,
        Err(err) => {
            eprintln!("tzf: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.mode {
        Mode::At => finder.timezone_at(cli.lng, cli.lat),
        Mode::Land => finder.timezone_at_land(cli.lng, cli.lat),
        Mode::Unique => finder.unique_timezone_at(cli.lng, cli.lat),
        #[allow(deprecated)]
        Mode::Certain => finder.certain_timezone_at(cli.lng, cli.lat),
    };
    match result {
        Ok(name) => {
            println!("{}", name.unwrap_or_default());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("tzf: {err}");
            ExitCode::from(2)
        }
    }
}
