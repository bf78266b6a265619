use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::matching::MatchRatio;
use crate::board::parsing::{posted_rank, salary_key};
use crate::models::job::Job;

/// Ordering applied to the filtered listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest "N ... ago" first.
    #[default]
    #[serde(rename = "recent")]
    Recent,
    #[serde(rename = "salary-desc", alias = "salary-high")]
    SalaryDesc,
    #[serde(rename = "salary-asc", alias = "salary-low")]
    SalaryAsc,
    /// Best skill match against the caller's profile first.
    #[serde(rename = "match")]
    Match,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Recent => "recent",
            SortOrder::SalaryDesc => "salary-desc",
            SortOrder::SalaryAsc => "salary-asc",
            SortOrder::Match => "match",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(SortOrder::Recent),
            "salary-desc" | "salary-high" => Ok(SortOrder::SalaryDesc),
            "salary-asc" | "salary-low" => Ok(SortOrder::SalaryAsc),
            "match" => Ok(SortOrder::Match),
            other => Err(format!("unknown sort order '{other}'")),
        }
    }
}

/// Returns a reordered copy of `jobs`. The sort is stable: equal keys keep input order.
///
/// `profile` is only consulted for [`SortOrder::Match`].
pub fn sort_jobs<'a>(jobs: &[&'a Job], order: SortOrder, profile: &[String]) -> Vec<&'a Job> {
    let mut sorted = jobs.to_vec();
    match order {
        SortOrder::Recent => sorted.sort_by_key(|job| posted_rank(&job.posted)),
        SortOrder::SalaryDesc => {
            sorted.sort_by(|a, b| salary_key(&b.salary).cmp(&salary_key(&a.salary)))
        }
        SortOrder::SalaryAsc => sorted.sort_by_key(|job| salary_key(&job.salary)),
        SortOrder::Match => {
            let mut scored: Vec<(MatchRatio, &'a Job)> = sorted
                .iter()
                .map(|job| (MatchRatio::compute(&job.skills, profile), *job))
                .collect();
            scored.sort_by(|(a, _), (b, _)| b.cmp_ratio(a));
            sorted = scored.into_iter().map(|(_, job)| job).collect();
        }
    }
    sorted
}
