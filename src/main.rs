use std::process::exit;

use anyhow::Result;
use human_panic::setup_panic;
use log::{LevelFilter, error};

use static_inject::cli::{get_log_file, get_matches, get_path_overrides, get_verbosity, is_dry_run};
use static_inject::config::{StdEnvProvider, resolve_settings};
use static_inject::logging::init_logger;
use static_inject::workflow::{BuildOptions, run_build};

fn run() -> Result<()> {
    let matches = get_matches();

    init_logger(get_verbosity(&matches), get_log_file(&matches).as_deref())?;

    let settings = resolve_settings(&get_path_overrides(&matches), &StdEnvProvider)?;
    let options = BuildOptions {
        dry_run: is_dry_run(&matches),
    };

    run_build(&settings, &options)?;
    Ok(())
}

fn main() {
    setup_panic!();

    if let Err(err) = run() {
        // Nothing reaches the console if the logger itself failed to start
        if log::max_level() == LevelFilter::Off {
            eprintln!("Error: {err:#}");
        } else {
            error!("Error: {err:#}");
        }
        exit(1);
    }
}
