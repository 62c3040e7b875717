pub const APP_NAME: &str = "fpmfile";

/// Manifest file read when no path is given.
pub const DEFAULT_MANIFEST: &str = "packages.yml";

/// Packaging tool invoked when no override is given.
pub const DEFAULT_TOOL: &str = "fpm";

/// Environment variable overriding the tool command.
pub const TOOL_ENV: &str = "FPMFILE_TOOL";

/// CI variable holding the monotonically increasing run number.
pub const RUN_NUMBER_ENV: &str = "GITHUB_RUN_NUMBER";
