//! Configuration constants used as defaults.

/// Log file read when no `--file` is given.
pub const DEFAULT_LOG_PATH: &str = "/var/log/fail2ban.log";

/// Base URL of the ipstack geolocation service.
///
/// Lookups are issued as `{endpoint}/{ip}?access_key={key}`.
pub const DEFAULT_ENDPOINT: &str = "http://api.ipstack.com";

/// Where the rendered map image is written.
pub const DEFAULT_MAP_PATH: &str = "fail2ban_map.png";

/// Pattern identifying a fail2ban ban event. Capture group 1 is the address.
pub const BAN_PATTERN: &str = r"Ban ([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})";

/// Emit a progress line every this many scanned log lines.
pub const LINE_PROGRESS_INTERVAL: usize = 10_000;

/// Emit a progress line every this many geolocation lookups.
pub const LOOKUP_PROGRESS_INTERVAL: usize = 25;

/// Degrees of padding added around the plotted coordinates on every side.
pub const ZOOM_SCALE: f64 = 5.0;

/// Title drawn on the rendered map.
pub const MAP_TITLE: &str = "Fail2Ban Banned IP Addresses";

/// Rendered map size in pixels (width, height).
pub const MAP_DIMENSIONS: (u32, u32) = (1600, 1200);

// Response field names
pub const FIELD_LATITUDE: &str = "latitude";
pub const FIELD_LONGITUDE: &str = "longitude";
