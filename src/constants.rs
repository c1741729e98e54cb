/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Placeholder replaced with the project URL
pub const URL_TOKEN: &str = "__SUPABASE_URL__";

/// Placeholder replaced with the anonymous API key
pub const KEY_TOKEN: &str = "__SUPABASE_ANON_KEY__";

/// Environment variable holding the project URL
pub const URL_ENV_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";

/// Environment variable holding the anonymous API key
pub const KEY_ENV_VAR: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";

/// Source directory, relative to the project root
pub const DEFAULT_SOURCE_DIR: &str = "public";

/// Destination directory, relative to the project root
pub const DEFAULT_DESTINATION_DIR: &str = "dist";

/// Optional configuration file, relative to the project root
pub const DEFAULT_CONFIG_FILE: &str = "static_inject.yaml";

/// Number of leading URL characters shown in the summary
pub const URL_VISIBLE_CHARS: usize = 30;

/// Number of trailing key characters shown in the summary
pub const KEY_VISIBLE_CHARS: usize = 8;

/// Shown in place of a configuration value that is empty
pub const NOT_SET: &str = "(not set)";

/// Help text for the root command-line option
pub const ROOT_HELP: &str = "Project root that relative paths are resolved against";

/// Help text for the source command-line option
pub const SOURCE_HELP: &str = "Directory to copy from";

/// Help text for the destination command-line option
pub const DESTINATION_HELP: &str = "Directory to write the processed copy to";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read directory overrides from a specific YAML file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Report what would be written without touching the destination";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log lines to this file";
