use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateUnit {
    Kbps,
    Mbps,
    Gbps,
}

/// Divisor Steam's `Kbps` figures are scaled by.
///
/// This is not `8 * 1024`. The value is kept as is until the intended scaling
/// is confirmed against real client output.
pub const KBPS_DIVISOR: f64 = 8196.0;

impl RateUnit {
    /// Converts a rate in this unit to MiB/s.
    pub fn to_mib_per_sec(self, value: f64) -> f64 {
        match self {
            Self::Mbps => value / 8.0,
            Self::Kbps => value / KBPS_DIVISOR,
            Self::Gbps => value * 128.0,
        }
    }
}

impl FromStr for RateUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("mbps") {
            Ok(Self::Mbps)
        } else if s.eq_ignore_ascii_case("kbps") {
            Ok(Self::Kbps)
        } else if s.eq_ignore_ascii_case("gbps") {
            Ok(Self::Gbps)
        } else {
            Err(format!("Unsupported rate unit: {s}"))
        }
    }
}
