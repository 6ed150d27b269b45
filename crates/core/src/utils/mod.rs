pub mod format;
pub mod time_utils;

pub use format::format_currency;
pub use time_utils::{format_display_date, parse_timestamp};
