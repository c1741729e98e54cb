use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version, value_parser,
};

use crate::config::PathOverrides;
use crate::constants::{
    CONFIG_HELP, DESTINATION_HELP, DRY_RUN_HELP, LOG_FILE_HELP, ROOT_HELP, SOURCE_HELP,
    VERBOSE_HELP,
};
use crate::logging::LogLevel;

/// Defines the command-line interface
///
/// Defines the following arguments:
/// - `root`: Project root for relative paths
/// - `source` / `destination`: Directory overrides
/// - `config`: Path to an optional YAML configuration file
/// - `dry`: Report without writing
/// - `verbose`: Increase verbosity level
/// - `log_file`: Additional log file
pub fn build_command() -> Command {
    let arg_root = Arg::new("root")
        .short('r')
        .long("root")
        .help(ROOT_HELP)
        .value_parser(value_parser!(PathBuf));

    let arg_source = Arg::new("source")
        .short('s')
        .long("source")
        .help(SOURCE_HELP)
        .value_parser(value_parser!(PathBuf));

    let arg_destination = Arg::new("destination")
        .short('d')
        .long("destination")
        .help(DESTINATION_HELP)
        .value_parser(value_parser!(PathBuf));

    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .value_parser(value_parser!(PathBuf));

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry-run")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_root)
        .arg(arg_source)
        .arg(arg_destination)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(log_file)
        .arg(arg_verbose)
}

/// Parses the process arguments, exiting with usage help on error
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

pub fn get_log_file(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("log_file").cloned()
}

pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry")
}

/// Collects the directory overrides given on the command line
pub fn get_path_overrides(matches: &ArgMatches) -> PathOverrides {
    PathOverrides {
        root: matches.get_one::<PathBuf>("root").cloned(),
        source: matches.get_one::<PathBuf>("source").cloned(),
        destination: matches.get_one::<PathBuf>("destination").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
    }
}
