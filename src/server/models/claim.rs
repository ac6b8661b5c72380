use serde::{Deserialize, Serialize};

/// Client-facing claim status vocabulary.
///
/// `Active`, `Expired`, and `Completed` are presentation tabs derived on the
/// client (time-based expiry and the like); the orchestration backend has no
/// filter for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Claimed,
    Stalled,
    Cancelled,
    Active,
    Expired,
    Completed,
}

/// Status values the orchestration backend accepts as a `status` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrchestrationStatus {
    Pending,
    Claimed,
    Stalled,
    Cancelled,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Claimed => "claimed",
            ClaimStatus::Stalled => "stalled",
            ClaimStatus::Cancelled => "cancelled",
            ClaimStatus::Active => "active",
            ClaimStatus::Expired => "expired",
            ClaimStatus::Completed => "completed",
        }
    }

    /// Maps this status to the backend filter vocabulary.
    ///
    /// Backend-native statuses pass through unchanged. Presentation tabs
    /// degrade to `None` ("no filter"): the backend has no matching filter
    /// and would return nothing for them.
    pub fn backend_filter(self) -> Option<OrchestrationStatus> {
        match self {
            ClaimStatus::Pending => Some(OrchestrationStatus::Pending),
            ClaimStatus::Claimed => Some(OrchestrationStatus::Claimed),
            ClaimStatus::Stalled => Some(OrchestrationStatus::Stalled),
            ClaimStatus::Cancelled => Some(OrchestrationStatus::Cancelled),
            ClaimStatus::Active => None,
            ClaimStatus::Expired => None,
            ClaimStatus::Completed => None,
        }
    }
}

impl OrchestrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrchestrationStatus::Pending => "pending",
            OrchestrationStatus::Claimed => "claimed",
            OrchestrationStatus::Stalled => "stalled",
            OrchestrationStatus::Cancelled => "cancelled",
        }
    }
}

/// Normalizes an optional client status filter down to what the backend
/// understands. Absent input stays absent.
pub fn normalize_status_filter(status: Option<ClaimStatus>) -> Option<OrchestrationStatus> {
    status.and_then(ClaimStatus::backend_filter)
}

/// Query parameters for the orchestration endpoint.
///
/// Anything building a query against that endpoint goes through this type, so
/// a UI-only status token never reaches the wire: it is normalized away and
/// the `status` parameter is omitted entirely.
#[derive(Debug, Default, Clone)]
pub struct OrchestrationQuery {
    pub status: Option<ClaimStatus>,
    pub limit: Option<u32>,
}

impl OrchestrationQuery {
    /// Renders the wire query string, without a leading `?`. Empty when no
    /// parameter survives normalization.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(status) = normalize_status_filter(self.status) {
            parts.push(format!("status={}", status.as_str()));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }
        parts.join("&")
    }
}
