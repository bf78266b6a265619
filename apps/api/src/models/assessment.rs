use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::matching::SkillMatchReport;
use crate::errors::AppError;
use crate::models::job::Job;

pub const MAX_EXPERIENCE_YEARS: i64 = 30;

fn default_salary_range() -> [u64; 2] {
    [15_000, 30_000]
}

/// Answers submitted from the skills assessment quiz.
///
/// Skill entries are option ids ("customer-service") or free-text custom skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsAssessment {
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: i64,
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub preferred_job_types: Vec<String>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub interest_areas: Vec<String>,
    #[serde(default = "default_salary_range")]
    pub salary_range: [u64; 2],
}

impl SkillsAssessment {
    /// Trims every list entry and drops the blank ones.
    pub fn normalized(self) -> Self {
        Self {
            skills: non_blank_entries(self.skills),
            preferred_job_types: non_blank_entries(self.preferred_job_types),
            preferred_locations: non_blank_entries(self.preferred_locations),
            soft_skills: non_blank_entries(self.soft_skills),
            interest_areas: non_blank_entries(self.interest_areas),
            education_level: self
                .education_level
                .map(|level| level.trim().to_string())
                .filter(|level| !level.is_empty()),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.skills.is_empty() {
            return Err(invalid("Please select at least one skill."));
        }
        if !(0..=MAX_EXPERIENCE_YEARS).contains(&self.experience_years) {
            return Err(invalid("Experience must be between 0 and 30 years."));
        }
        if self.preferred_job_types.is_empty() {
            return Err(invalid("Please select at least one preferred job type."));
        }
        if self.preferred_locations.is_empty() {
            return Err(invalid("Please select at least one preferred location."));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}

fn non_blank_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    /// Technical plus soft skills.
    pub total_skills: usize,
    pub strength_areas: Vec<String>,
    pub development_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentJobMatch {
    #[serde(flatten)]
    pub job: Job,
    pub match_percentage: u32,
    pub skill_match: SkillMatchReport,
}

/// Outcome of one assessment, kept as the visitor's latest result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub job_matches: Vec<AssessmentJobMatch>,
    pub skill_assessment: SkillSummary,
    pub assessed: DateTime<Utc>,
}
