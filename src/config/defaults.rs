//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default dataset path override (empty = use the embedded dataset)
pub const DEFAULT_DIRECTORY_PATH: &str = "";

/// Whether IP geolocation results are cached by default
pub const DEFAULT_IP_CACHE: bool = true;

/// Default device geolocation timeout in seconds
pub const DEFAULT_DEVICE_TIMEOUT_SECS: u64 = crate::constants::resolve::DEVICE_TIMEOUT_SECS;

/// Default map URL provider
pub const DEFAULT_URL_PROVIDER: &str = "google";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "justicaa-discovery";
