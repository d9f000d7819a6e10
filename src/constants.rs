/// Application constants

// Application identity defaults
pub const DEFAULT_APP_NAME: &str = "Payment Gateway";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "development";

// Session configuration
pub const DEFAULT_SESSION_LIFETIME_SECS: u64 = 3600; // 1 hour

// Timestamps are presented in the operator's market timezone
pub const DEFAULT_TIMEZONE: &str = "Asia/Dhaka";

// Mobile wallet providers (payments.payment_method column)
pub const METHOD_BKASH: &str = "bkash";
pub const METHOD_NAGAD: &str = "nagad";
pub const METHOD_ROCKET: &str = "rocket";
pub const METHOD_UPAY: &str = "upay";

// Payment lifecycle states (payments.status column)
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_FAILED: &str = "failed";

// Database pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
