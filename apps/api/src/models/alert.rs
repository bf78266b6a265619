use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Filter criteria captured with an alert. Blank values are stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
}

impl AlertFilters {
    pub fn new(search_term: &str, location: &str, job_type: &str) -> Self {
        Self {
            search_term: non_blank(search_term),
            location: non_blank(location),
            job_type: non_blank(job_type),
        }
    }

    /// Drops blank values that may have arrived over the wire.
    pub fn normalized(self) -> Self {
        Self::new(
            self.search_term.as_deref().unwrap_or(""),
            self.location.as_deref().unwrap_or(""),
            self.job_type.as_deref().unwrap_or(""),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_none() && self.location.is_none() && self.job_type.is_none()
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A stored request to be notified about future matching jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAlertSubscription {
    /// Creation timestamp in milliseconds, unique within the store.
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub filters: AlertFilters,
    #[serde(rename = "created", alias = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Incoming subscription before an id is assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJobAlert {
    pub email: String,
    #[serde(default)]
    pub filters: AlertFilters,
}

impl NewJobAlert {
    /// Rejects malformed email addresses; no subscription is created for them.
    pub fn validate(&self) -> Result<(), AppError> {
        if is_valid_email(&self.email) {
            Ok(())
        } else {
            Err(AppError::Validation(
                "Please enter a valid email address.".to_string(),
            ))
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
