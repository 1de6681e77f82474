//! Store-wide constants: schema version, storage key names, seed data ids.

/// Schema version written to the version key. A mismatch on startup re-runs
/// the defaulting pass in `LocalStore::initialize`.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Namespace prefix shared by every storage key.
pub const KEY_PREFIX: &str = "minha-conta-";

pub const KEY_TRANSACTIONS: &str = "minha-conta-transactions";
pub const KEY_GOALS: &str = "minha-conta-goals";
pub const KEY_USERS: &str = "minha-conta-users";
pub const KEY_BUDGETS: &str = "minha-conta-budgets";
pub const KEY_CATEGORIES: &str = "minha-conta-categories";
pub const KEY_CURRENT_USER: &str = "minha-conta-current-user";
pub const KEY_VERSION: &str = "minha-conta-version";

/// Every key the store owns, in snapshot order. `clear_all` removes exactly
/// these.
pub const ALL_KEYS: [&str; 7] = [
    KEY_TRANSACTIONS,
    KEY_GOALS,
    KEY_USERS,
    KEY_BUDGETS,
    KEY_CATEGORIES,
    KEY_CURRENT_USER,
    KEY_VERSION,
];

/// Id of the user created on first run.
pub const DEFAULT_USER_ID: &str = "user-1";

/// Display name of the user created on first run.
pub const DEFAULT_USER_NAME: &str = "Usuário Principal";

/// Avatar glyph of the user created on first run.
pub const DEFAULT_USER_AVATAR: &str = "👤";

/// Fallback goal category label.
pub const DEFAULT_GOAL_CATEGORY: &str = "Geral";

/// Number of calendar months covered by the monthly trend report.
pub const TREND_MONTHS: u32 = 6;

/// Random suffix length of generated ids.
pub const ID_SUFFIX_LEN: usize = 9;
