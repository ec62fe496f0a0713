pub const DEFAULT_PROTOCOL: &str = "http";
pub const DEFAULT_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "8000";
pub const DEFAULT_API: &str = "departures";

pub const DEFAULT_CATEGORY: &str = "Adventurous";
/// Exclusive lower bound, `YYYY-MM-DD`.
pub const DEFAULT_START_DATE: &str = "2018-06-01";
pub const DEFAULT_FILENAME: &str = "filtered_departures.csv";

pub const CSV_HEADER: [&str; 4] = ["Name", "Start Date", "Finish Date", "Category"];
