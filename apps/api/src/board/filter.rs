use serde::{Deserialize, Serialize};

use crate::models::job::Job;

/// Transient search criteria. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
}

impl FilterCriteria {
    pub fn new(
        search_term: impl Into<String>,
        location: impl Into<String>,
        job_type: impl Into<String>,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            location: location.into(),
            job_type: job_type.into(),
        }
    }

    /// Case-insensitive substring match against title, company and description.
    fn matches_search(&self, job: &Job) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        [&job.title, &job.company, &job.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    pub fn matches(&self, job: &Job) -> bool {
        self.matches_search(job)
            && (self.location.is_empty() || job.location == self.location)
            && (self.job_type.is_empty() || job.job_type == self.job_type)
    }
}

/// Returns the jobs matching `criteria`, preserving input order.
pub fn filter_jobs<'a, I>(jobs: I, criteria: &FilterCriteria) -> Vec<&'a Job>
where
    I: IntoIterator<Item = &'a Job>,
{
    jobs.into_iter().filter(|job| criteria.matches(job)).collect()
}
