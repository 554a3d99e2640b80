// file: src/apps/calib.rs
// version: 1.0.0
// guid: 5f0b2c9e-8d34-47a1-b6e3-0a9d7c41e825

//! Calibration run arguments

use crate::error::{LauncherError, Result};
use crate::shell::ScriptInvocation;
use chrono::NaiveDateTime;

/// Timestamp layout the calibration script expects (`YYYYmmddHHMM`)
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

/// A validated request for one calibration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibRequest {
    pub timestamp: String,
    pub station: String,
    pub debug: bool,
    pub clear: bool,
}

impl CalibRequest {
    /// Validate `timestamp` and `station` against the known station list
    pub fn new(timestamp: &str, station: &str, valid_stations: &[String]) -> Result<Self> {
        parse_timestamp(timestamp)?;
        let station = validate_station(station, valid_stations)?;

        Ok(Self {
            timestamp: timestamp.to_string(),
            station,
            debug: false,
            clear: false,
        })
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Build the interpreter invocation for this request
    pub fn to_invocation(&self, interpreter: &str, script: &str) -> ScriptInvocation {
        let mut invocation = ScriptInvocation::new(interpreter, script)
            .arg(self.timestamp.as_str())
            .arg(self.station.as_str());
        if self.debug {
            invocation = invocation.arg("-d");
        }
        if self.clear {
            invocation = invocation.arg("-c");
        }
        invocation
    }
}

/// Parse a `YYYYmmddHHMM` timestamp
pub fn parse_timestamp(timestamp: &str) -> Result<NaiveDateTime> {
    if timestamp.len() != 12 || !timestamp.chars().all(|c| c.is_ascii_digit()) {
        return Err(LauncherError::validation(format!(
            "Timestamp must be 12 digits (YYYYmmddHHMM): {}",
            timestamp
        )));
    }

    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|e| {
        LauncherError::validation(format!("Invalid timestamp {}: {}", timestamp, e))
    })
}

/// Normalize a station code to lowercase and check it is known
pub fn validate_station(station: &str, valid_stations: &[String]) -> Result<String> {
    let station = station.trim().to_lowercase();
    if valid_stations.iter().any(|s| s.eq_ignore_ascii_case(&station)) {
        Ok(station)
    } else {
        Err(LauncherError::validation(format!(
            "Invalid station {} (expected one of: {})",
            station,
            valid_stations.join(", ")
        )))
    }
}
