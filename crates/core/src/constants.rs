//! Shared constants for the flavors service.

/// Connection string used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/flavors_db";

/// Listening port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Listening address used when `HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Maximum stored length of a flavor name (`VARCHAR(255)`).
pub const MAX_NAME_LEN: usize = 255;

/// The service shares one database connection across all requests.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 1;

/// Rows inserted by the startup seed, in insertion order: `(name, is_favorite)`.
pub const SEED_FLAVORS: [(&str, bool); 4] = [
    ("Vanilla", true),
    ("Chocolate", true),
    ("Strawberry", false),
    ("Mint Chocolate Chip", true),
];
