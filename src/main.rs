use clap::Parser;
use srvlookup::load_index;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_JSON: &str = "server-informations.json";

/// Lookup server info by hostname.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to server-informations.json (default: next to the executable)
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Hostname to look up (e.g., SPINAL-TAP.lan); if omitted, prints all hostnames
    #[arg(long, value_name = "NAME")]
    host: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let path = match args.json.map(Ok).unwrap_or_else(default_json) {
        Ok(path) => path,
        Err(message) => {
            eprintln!("input error: {}", message);
            return ExitCode::from(2);
        }
    };

    let index = match load_index(&path) {
        Ok(index) => index,
        Err(message) => {
            eprintln!("input error: {}", message);
            return ExitCode::from(2);
        }
    };

    let Some(host) = args.host else {
        for name in index.hostnames() {
            println!("{}", name);
        }
        return ExitCode::from(0);
    };

    match index.lookup(&host) {
        Some(record) => {
            println!("{}", record);
            ExitCode::from(0)
        }
        None => {
            eprintln!("Hostname not found: {}", host);
            ExitCode::from(1)
        }
    }
}

/// The default input file sits next to the executable itself.
fn default_json() -> std::io::Result<PathBuf> {
    Ok(std::env::current_exe()?.with_file_name(DEFAULT_JSON))
}
