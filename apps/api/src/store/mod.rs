//! Persistence for saved jobs, job alerts and the latest skills assessment.
//!
//! Data lives as JSON blobs under fixed keys in a [`KeyValueStore`]. Backends are
//! injected into [`JobStore`], which owns the serialization and the fail-open reads.

pub mod job_store;
pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::errors::AppError;

pub use job_store::JobStore;
pub use memory::InMemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

pub const SAVED_JOBS_KEY: &str = "savedJobs";
pub const JOB_ALERTS_KEY: &str = "jobAlertSubscriptions";
pub const SKILL_ASSESSMENT_KEY: &str = "skillAssessmentResults";

/// Durable string-to-string map.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}
