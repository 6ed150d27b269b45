/// Storage format for calendar days.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for dates in the grids and refresh notes.
pub const DISPLAY_DATE_FORMAT: &str = "%m-%d-%Y";

/// Delimiter used when several fund names or codes apply to one order.
pub const FUND_LIST_SEPARATOR: &str = " || ";

/// Transaction sub-types counted as expenditure.
pub const EXPENDITURE_SUB_TYPES: &[&str] = &["EXPENDITURE"];

/// Transaction sub-types counted as encumbrance.
pub const ENCUMBRANCE_SUB_TYPES: &[&str] = &["ENCUMBRANCE", "DISENCUMBRANCE"];

/// Payment status of an invoice line that has been paid.
pub const INVOICE_PAID_STATUS: &str = "PAID";
