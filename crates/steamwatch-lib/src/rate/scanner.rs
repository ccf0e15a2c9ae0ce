use super::cursor::ScanCursor;
use super::unit::RateUnit;
use crate::error::SteamWatchError;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;
use std::sync::LazyLock;

static RATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Current download rate:\s*([\d.]+)\s*(Mbps|Kbps|Gbps)")
        .expect("Invalid download rate pattern")
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateScan {
    /// Most recent announced rate in MiB/s, if any line in the scanned region
    /// announced one.
    pub rate: Option<f64>,
    /// Position to resume from on the next scan.
    pub cursor: ScanCursor,
}

/// Extracts a rate in MiB/s from a single log line.
pub fn parse_rate_line(line: &str) -> Option<f64> {
    let captures = RATE_RE.captures(line)?;
    let value = captures[1].parse::<f64>().ok()?;
    let unit = captures[2].parse::<RateUnit>().ok()?;
    Some(unit.to_mib_per_sec(value))
}

/// Scans `log_path` from `from` to the end of the file for the latest
/// `Current download rate:` announcement.
///
/// Failing to open the log is an error. Undecodable bytes and unparseable
/// numbers inside the file are not.
pub fn scan_rate(log_path: &Path, from: ScanCursor) -> Result<RateScan, SteamWatchError> {
    let mut file = File::open(log_path).map_err(|source| SteamWatchError::LogOpen {
        path: log_path.to_path_buf(),
        source,
    })?;
    let read_error = |source: std::io::Error| SteamWatchError::LogRead {
        path: log_path.to_path_buf(),
        source,
    };

    file.seek(SeekFrom::Start(from.offset())).map_err(read_error)?;
    let mut reader = BufReader::new(file);

    let mut rate = None;
    let mut consumed = 0u64;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(read_error)?;
        if n == 0 {
            break;
        }
        consumed += n as u64;

        let line = String::from_utf8_lossy(&buf);
        if let Some(sample) = parse_rate_line(&line) {
            tracing::trace!(line = line.trim_end(), sample, "Matched download rate");
            rate = Some(sample);
        }
    }

    let cursor = from.advance(consumed);
    tracing::debug!(
        path = %log_path.display(),
        %from,
        %cursor,
        ?rate,
        "Scanned content log"
    );
    Ok(RateScan { rate, cursor })
}
