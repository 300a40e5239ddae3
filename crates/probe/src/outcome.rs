//! Probe outcome types.

use platscan_steam_api::Error as ApiError;

/// A successfully resolved lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Display name. May be empty if the store sent none.
    pub label: String,
    pub supported: bool,
}

impl ProbeResult {
    pub fn new(label: impl Into<String>, supported: bool) -> Self {
        Self {
            label: label.into(),
            supported,
        }
    }
}

/// Why a lookup produced no usable result.
///
/// Failures are never propagated; they only feed diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeFailure {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("store returned status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no entry for app in response")]
    MissingEntry,

    #[error("store reported no success")]
    Unsuccessful,

    #[error("probe task panicked")]
    Panicked,
}

impl From<ApiError> for ProbeFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http(e) => Self::Transport(e.to_string()),
            ApiError::Api { status, .. } => Self::Status(status),
            ApiError::Json(e) => Self::Malformed(e.to_string()),
            ApiError::MissingEntry(_) => Self::MissingEntry,
            ApiError::Unsuccessful(_) => Self::Unsuccessful,
            ApiError::MissingData(_) | ApiError::MissingResponse => {
                Self::Malformed(err.to_string())
            }
        }
    }
}

/// What a single probe reports back to the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Resolved(ProbeResult),
    Failed(ProbeFailure),
}

impl ProbeOutcome {
    /// Shorthand for a resolved outcome.
    pub fn resolved(label: impl Into<String>, supported: bool) -> Self {
        Self::Resolved(ProbeResult::new(label, supported))
    }

    /// The `(label, supported)` view used for partitioning.
    ///
    /// Failures read as an empty label that is not supported.
    pub fn classification(&self) -> (&str, bool) {
        match self {
            Self::Resolved(r) => (r.label.as_str(), r.supported),
            Self::Failed(_) => ("", false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platscan_steam_api::AppId;

    #[test]
    fn failed_classifies_as_empty_unsupported() {
        let outcome = ProbeOutcome::Failed(ProbeFailure::MissingEntry);
        assert_eq!(outcome.classification(), ("", false));
    }

    #[test]
    fn resolved_classification() {
        let outcome = ProbeOutcome::resolved("Portal", true);
        assert_eq!(outcome.classification(), ("Portal", true));
    }

    #[test]
    fn api_errors_map_to_failures() {
        assert_eq!(
            ProbeFailure::from(ApiError::Unsuccessful(AppId(1))),
            ProbeFailure::Unsuccessful
        );
        assert_eq!(
            ProbeFailure::from(ApiError::MissingEntry(AppId(1))),
            ProbeFailure::MissingEntry
        );
        assert_eq!(
            ProbeFailure::from(ApiError::Api {
                status: 429,
                body: String::new(),
            }),
            ProbeFailure::Status(429)
        );
        assert!(matches!(
            ProbeFailure::from(ApiError::MissingData(AppId(1))),
            ProbeFailure::Malformed(_)
        ));
    }
}
