/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "birthday_herald=info";

/// First line of every announcement
pub const ANNOUNCEMENT_HEADER: &str = "🎂 Дни рождения сегодня:";

/// Default Grist server
pub const DEFAULT_GRIST_BASE_URL: &str = "https://docs.getgrist.com";

/// Grist document holding the roster
pub const DEFAULT_GRIST_DOC_ID: &str = "4w9eBjjxRqUh";

/// Grist table holding the roster
pub const DEFAULT_GRIST_TABLE_ID: &str = "Folks";

/// Roster column with the person's name
pub const DEFAULT_NAME_COLUMN: &str = "Name";

/// Roster column with the date of birth
pub const DEFAULT_BIRTH_COLUMN: &str = "DoB";

/// VK wall.post endpoint
pub const DEFAULT_VK_API_URL: &str = "https://api.vk.com/method/wall.post";

/// Community wall the announcement goes to (negative = group)
pub const DEFAULT_VK_OWNER_ID: i64 = -227823182;

/// VK API version sent with every call
pub const DEFAULT_VK_API_VERSION: &str = "5.131";

/// Per-request HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
