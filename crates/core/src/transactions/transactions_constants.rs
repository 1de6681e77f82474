//! String values for transaction enums as they appear on the wire.

pub const TRANSACTION_TYPE_INCOME: &str = "income";
pub const TRANSACTION_TYPE_EXPENSE: &str = "expense";

pub const FREQUENCY_DAILY: &str = "daily";
pub const FREQUENCY_WEEKLY: &str = "weekly";
pub const FREQUENCY_MONTHLY: &str = "monthly";
pub const FREQUENCY_YEARLY: &str = "yearly";
