/// Federal Reserve "Large Commercial Banks" release, current edition.
pub const DEFAULT_SOURCE_URL: &str = "https://www.federalreserve.gov/releases/lbr/current/";

/// User-Agent sent with every source request
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; BankRankScraper/1.0)";

/// Fetch defaults
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 5_000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Maximum number of ranked banks kept in one snapshot
pub const MAX_RANKED_BANKS: usize = 40;

/// Relative asset move (vs. the previous snapshot) that counts as material
pub const MATERIAL_ASSET_CHANGE_RATIO: f64 = 0.05;

/// File names used by the JSON snapshot store
pub const LATEST_SNAPSHOT_FILE: &str = "latest.json";
pub const SNAPSHOT_FILE_PREFIX: &str = "banks_";
pub const CHANGES_FILE_PREFIX: &str = "changes_";
