use rust_decimal::Decimal;

/// Display name the backend gives the placeholder user on no-split expenses.
pub const NO_SPLIT_PLACEHOLDER: &str = "No Split User";

pub const MAX_NAME_LENGTH: usize = 255;

/// Shares may drift by a cent from rounding on the backend.
pub const SHARE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest amount or share accepted from the backend (10^15).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2764472320, 232830, 0, false, 0);

pub const DISPLAY_DECIMALS: u32 = 2;

// Diagnostic event names
pub const RECORD_SKIPPED: &str = "record_skipped";
pub const SPLIT_MODE_FALLBACK: &str = "split_mode_fallback";
pub const SHARE_MISMATCH: &str = "share_mismatch";
pub const REFRESH_SUPERSEDED: &str = "refresh_superseded";
