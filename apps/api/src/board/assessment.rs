//! Skills assessment scoring.
//!
//! Turns quiz answers into a skill summary (strengths, development areas) and the
//! catalog listings that best fit the answered skills.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::board::matching::{SkillMatchReport, SkillProfile};
use crate::board::sorter::{sort_jobs, SortOrder};
use crate::errors::AppError;
use crate::models::assessment::{
    AssessmentJobMatch, AssessmentResult, SkillSummary, SkillsAssessment,
};
use crate::models::job::{Job, JobCatalog};

/// Upper bound on listings returned with a result.
pub const MAX_JOB_MATCHES: usize = 3;

const NO_STRENGTHS: &str = "Not enough data to determine strengths";
const NO_DEVELOPMENT_AREAS: &str = "No specific development areas identified";

/// Quiz option ids and the skill names listings use for them.
const SKILL_LABELS: &[(&str, &str)] = &[
    ("javascript", "JavaScript"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("react", "React"),
    ("nodejs", "Node.js"),
    ("php", "PHP"),
    ("python", "Python"),
    ("java", "Java"),
    ("csharp", "C#"),
    ("cplusplus", "C++"),
    ("sql", "SQL"),
    ("mongodb", "MongoDB"),
    ("communication", "Communication"),
    ("customer-service", "Customer Service"),
    ("ms-office", "Microsoft Office"),
    ("excel", "Excel"),
    ("data-entry", "Data Entry"),
    ("bookkeeping", "Bookkeeping"),
    ("writing", "Writing"),
    ("editing", "Editing"),
    ("sales", "Sales"),
    ("marketing", "Marketing"),
    ("social-media", "Social Media"),
    ("project-management", "Project Management"),
    ("organization", "Organization"),
    ("time-management", "Time Management"),
    ("english", "English Proficiency"),
    ("teamwork", "Teamwork"),
    ("problem-solving", "Problem Solving"),
    ("critical-thinking", "Critical Thinking"),
    ("adaptability", "Adaptability"),
    ("leadership", "Leadership"),
    ("creativity", "Creativity"),
    ("attention-to-detail", "Attention to Detail"),
    ("conflict-resolution", "Conflict Resolution"),
];

/// Display name for an option id. Custom skills come back unchanged.
pub fn skill_label(skill: &str) -> &str {
    SKILL_LABELS
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(skill))
        .map_or(skill, |(_, label)| *label)
}

/// True when `entries` holds the option `id`, by id or by its display name.
fn has(entries: &[String], id: &str) -> bool {
    let label = skill_label(id);
    entries
        .iter()
        .any(|entry| entry.eq_ignore_ascii_case(id) || entry.eq_ignore_ascii_case(label))
}

pub fn strength_areas(answers: &SkillsAssessment) -> Vec<String> {
    let mut strengths = Vec::new();
    if has(&answers.skills, "communication") || has(&answers.soft_skills, "communication") {
        strengths.push("Communication Skills");
    }
    if has(&answers.skills, "customer-service") {
        strengths.push("Customer Service");
    }
    if has(&answers.soft_skills, "teamwork") && has(&answers.soft_skills, "adaptability") {
        strengths.push("Collaborative Work");
    }
    if answers.experience_years > 2 {
        strengths.push("Professional Experience");
    }
    if strengths.is_empty() {
        strengths.push(NO_STRENGTHS);
    }
    strengths.into_iter().map(String::from).collect()
}

pub fn development_areas(answers: &SkillsAssessment) -> Vec<String> {
    let mut areas = Vec::new();
    if !has(&answers.skills, "excel") && !has(&answers.skills, "ms-office") {
        areas.push("Office Productivity Software");
    }
    if !has(&answers.soft_skills, "leadership") && !has(&answers.soft_skills, "problem-solving") {
        areas.push("Leadership & Problem Solving");
    }
    if answers.skills.len() < 5 {
        areas.push("Technical Skill Diversification");
    }
    if areas.is_empty() {
        areas.push(NO_DEVELOPMENT_AREAS);
    }
    areas.into_iter().map(String::from).collect()
}

/// Technical and soft skills as listing skill names, de-duplicated.
fn skill_profile(answers: &SkillsAssessment) -> SkillProfile {
    let mut profile = SkillProfile::default();
    for skill in answers.skills.iter().chain(&answers.soft_skills) {
        profile.add(skill_label(skill));
    }
    profile
}

/// Best-fitting listings, highest match first, skipping listings with no overlap.
pub fn job_matches(catalog: &JobCatalog, profile: &SkillProfile) -> Vec<AssessmentJobMatch> {
    let jobs: Vec<&Job> = catalog.jobs().iter().collect();
    sort_jobs(&jobs, SortOrder::Match, profile.skills())
        .into_iter()
        .map(|job| {
            let skill_match = SkillMatchReport::compute(&job.skills, profile.skills());
            AssessmentJobMatch {
                job: job.clone(),
                match_percentage: skill_match.percentage,
                skill_match,
            }
        })
        .filter(|m| m.match_percentage > 0)
        .take(MAX_JOB_MATCHES)
        .collect()
}

/// Validates the answers and scores them against the catalog.
pub fn assess(
    answers: SkillsAssessment,
    catalog: &JobCatalog,
    now: DateTime<Utc>,
) -> Result<AssessmentResult, AppError> {
    let answers = answers.normalized();
    answers.validate()?;

    let profile = skill_profile(&answers);
    let job_matches = job_matches(catalog, &profile);
    debug!(
        skills = profile.skills().len(),
        matches = job_matches.len(),
        "Scored skills assessment"
    );

    Ok(AssessmentResult {
        job_matches,
        skill_assessment: SkillSummary {
            total_skills: answers.skills.len() + answers.soft_skills.len(),
            strength_areas: strength_areas(&answers),
            development_areas: development_areas(&answers),
        },
        assessed: now,
    })
}
