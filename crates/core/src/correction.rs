//! Time correction requests
//!
//! Employees and managers edit clock times as they read them on the wall in
//! company time. Before the edit goes to the backend it is converted into
//! UTC instants and checked for obvious mistakes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shiftclock_common::time::{local_wall_clock_to_utc, CompanyTimezone};
use shiftclock_common::utc_instant;
use shiftclock_domain::{Result, ShiftClockError};
use tracing::debug;

/// A correction as typed into the form, in company wall-clock time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionDraft {
    /// Session being corrected
    pub session_id: u64,
    /// e.g. `2025-01-15T09:00` or `01/15/2025, 09:00:00 AM`
    pub clock_in: String,
    /// Optional clock-out in the same forms; blank means none
    #[serde(default)]
    pub clock_out: Option<String>,
    /// Why the correction is requested
    pub reason: String,
}

/// Correction payload sent to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRequest {
    /// Session being corrected
    pub session_id: u64,
    /// Requested clock-in as a UTC instant
    #[serde(with = "utc_instant")]
    pub requested_clock_in: DateTime<Utc>,
    /// Requested clock-out as a UTC instant
    #[serde(default, with = "utc_instant::option")]
    pub requested_clock_out: Option<DateTime<Utc>>,
    /// Trimmed reason text
    pub reason: String,
}

impl CorrectionDraft {
    /// Convert the draft into a backend request.
    ///
    /// # Errors
    /// - [`ShiftClockError::Time`] if a wall-clock value cannot be parsed
    /// - [`ShiftClockError::InvalidInput`] if the reason is blank or the
    ///   clock-out precedes the clock-in
    pub fn to_request(&self, timezone: &CompanyTimezone) -> Result<CorrectionRequest> {
        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(ShiftClockError::InvalidInput(
                "correction reason must not be empty".to_string(),
            ));
        }

        let requested_clock_in = local_wall_clock_to_utc(&self.clock_in, timezone)?;
        let requested_clock_out = self
            .clock_out
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(|value| local_wall_clock_to_utc(value, timezone))
            .transpose()?;

        if let Some(out) = requested_clock_out {
            if out < requested_clock_in {
                return Err(ShiftClockError::InvalidInput(format!(
                    "clock-out {} is before clock-in {}",
                    self.clock_out.as_deref().unwrap_or_default(),
                    self.clock_in
                )));
            }
        }

        debug!(session_id = self.session_id, timezone = %timezone, "correction request built");
        Ok(CorrectionRequest {
            session_id: self.session_id,
            requested_clock_in,
            requested_clock_out,
            reason: reason.to_string(),
        })
    }
}
