mod cursor;
mod scanner;
mod unit;

pub use cursor::ScanCursor;
pub use scanner::{RateScan, parse_rate_line, scan_rate};
pub use unit::{KBPS_DIVISOR, RateUnit};
