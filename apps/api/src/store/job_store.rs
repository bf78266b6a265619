use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::alert::{JobAlertSubscription, NewJobAlert};
use crate::models::assessment::AssessmentResult;
use crate::store::{KeyValueStore, JOB_ALERTS_KEY, SAVED_JOBS_KEY, SKILL_ASSESSMENT_KEY};

/// Saved jobs, alert subscriptions and assessment results on top of an injected [`KeyValueStore`].
///
/// Reads never fail on bad data: a missing or unparseable blob reads as empty.
/// Every read-modify-write runs under one writer lock.
#[derive(Clone)]
pub struct JobStore {
    kv: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl JobStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, AppError> {
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("Discarding unreadable '{key}' data, treating as empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    async fn store<T: serde::Serialize>(&self, key: &str, items: &[T]) -> Result<(), AppError> {
        let raw = serde_json::to_string(items)?;
        self.kv.set(key, &raw).await
    }

    // ────────────────────────────────────────────────────────────────────────
    // Saved jobs
    // ────────────────────────────────────────────────────────────────────────

    /// Saved job ids in the order they were saved, without duplicates.
    pub async fn list(&self) -> Result<Vec<u32>, AppError> {
        let mut ids: Vec<u32> = self.load(SAVED_JOBS_KEY).await?;
        let mut seen = std::collections::HashSet::new();
        ids.retain(|id| seen.insert(*id));
        Ok(ids)
    }

    pub async fn is_saved(&self, id: u32) -> Result<bool, AppError> {
        Ok(self.list().await?.contains(&id))
    }

    /// Adds `id` to the saved set. Saving twice is a no-op.
    pub async fn save(&self, id: u32) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut ids = self.list().await?;
        if !ids.contains(&id) {
            ids.push(id);
            self.store(SAVED_JOBS_KEY, &ids).await?;
            info!("Saved job {id}");
        }
        Ok(())
    }

    /// Removes `id` from the saved set. Unsaving an absent id is a no-op.
    pub async fn unsave(&self, id: u32) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut ids = self.list().await?;
        let before = ids.len();
        ids.retain(|saved| *saved != id);
        self.store(SAVED_JOBS_KEY, &ids).await?;
        if ids.len() != before {
            info!("Unsaved job {id}");
        }
        Ok(())
    }

    /// Flips the saved state of `id` and returns the new state.
    pub async fn toggle(&self, id: u32) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut ids = self.list().await?;
        let now_saved = if let Some(pos) = ids.iter().position(|saved| *saved == id) {
            ids.remove(pos);
            false
        } else {
            ids.push(id);
            true
        };
        self.store(SAVED_JOBS_KEY, &ids).await?;
        info!("Toggled job {id}, saved = {now_saved}");
        Ok(now_saved)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Job alerts
    // ────────────────────────────────────────────────────────────────────────

    pub async fn list_subscriptions(&self) -> Result<Vec<JobAlertSubscription>, AppError> {
        self.load(JOB_ALERTS_KEY).await
    }

    /// Validates and appends a subscription, stamping it with `Utc::now()`.
    pub async fn add_subscription(
        &self,
        alert: NewJobAlert,
    ) -> Result<JobAlertSubscription, AppError> {
        self.add_subscription_at(alert, Utc::now()).await
    }

    /// Same as [`add_subscription`](Self::add_subscription) with an explicit clock.
    pub async fn add_subscription_at(
        &self,
        alert: NewJobAlert,
        now: DateTime<Utc>,
    ) -> Result<JobAlertSubscription, AppError> {
        alert.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut subscriptions = self.list_subscriptions().await?;

        let newest = subscriptions.iter().map(|s| s.id).max();
        let id = match newest {
            Some(newest) if newest >= now.timestamp_millis() => newest + 1,
            _ => now.timestamp_millis(),
        };

        let subscription = JobAlertSubscription {
            id,
            email: alert.email,
            filters: alert.filters.normalized(),
            created_at: now,
        };
        subscriptions.push(subscription.clone());
        self.store(JOB_ALERTS_KEY, &subscriptions).await?;

        if subscription.filters.is_empty() {
            info!("Created job alert {id} for {} (all new jobs)", subscription.email);
        } else {
            info!("Created job alert {id} for {}", subscription.email);
        }
        Ok(subscription)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Skills assessment
    // ────────────────────────────────────────────────────────────────────────

    /// Most recently stored assessment result, if any.
    pub async fn latest_assessment(&self) -> Result<Option<AssessmentResult>, AppError> {
        let Some(raw) = self.kv.get(SKILL_ASSESSMENT_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(result) => Ok(Some(result)),
            Err(e) => {
                warn!("Discarding unreadable '{SKILL_ASSESSMENT_KEY}' data: {e}");
                Ok(None)
            }
        }
    }

    /// Replaces the stored result; only the latest assessment is kept.
    pub async fn save_assessment(&self, result: &AssessmentResult) -> Result<(), AppError> {
        let raw = serde_json::to_string(result)?;
        let _guard = self.write_lock.lock().await;
        self.kv.set(SKILL_ASSESSMENT_KEY, &raw).await?;
        info!(
            "Stored skills assessment with {} job matches",
            result.job_matches.len()
        );
        Ok(())
    }
}
