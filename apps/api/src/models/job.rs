use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// One job listing. Listings are static for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    /// Human-readable recency, e.g. "2 days ago".
    pub posted: String,
    pub description: String,
    pub skills: Vec<String>,
}

/// Read-only collection of listings served by the board.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Loads listings from a JSON array on disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job seed file {}", path.display()))?;
        let jobs: Vec<Job> = serde_json::from_str(&raw)
            .with_context(|| format!("Job seed file {} is not a valid job list", path.display()))?;

        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if !seen.insert(job.id) {
                bail!(
                    "Job seed file {} contains duplicate job id {}",
                    path.display(),
                    job.id
                );
            }
        }
        Ok(Self::new(jobs))
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn find(&self, id: u32) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }
}

impl Default for JobCatalog {
    fn default() -> Self {
        Self::new(seed_jobs())
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    company: &str,
    location: &str,
    job_type: &str,
    salary: &str,
    posted: &str,
    skills: &[&str],
    description: &str,
) -> Job {
    Job {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        job_type: job_type.to_string(),
        salary: salary.to_string(),
        posted: posted.to_string(),
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// Built-in listings used when no seed file is configured.
pub fn seed_jobs() -> Vec<Job> {
    vec![
        listing(
            1,
            "Customer Service Representative",
            "Global Connect",
            "Manila",
            "Full-time",
            "₱18,000 - ₱22,000",
            "2 days ago",
            &["Communication", "Customer Service", "English Proficiency"],
            "Provide exceptional customer service via phone and email. Resolve customer inquiries and concerns in a timely manner.",
        ),
        listing(
            2,
            "Administrative Assistant",
            "PhilTech Solutions",
            "Cebu",
            "Full-time",
            "₱16,000 - ₱20,000",
            "3 days ago",
            &["Organization", "MS Office", "Time Management"],
            "Support office operations by maintaining files, scheduling meetings, and assisting with administrative tasks.",
        ),
        listing(
            3,
            "Junior Web Developer",
            "Innovation Labs",
            "Remote",
            "Full-time",
            "₱25,000 - ₱35,000",
            "1 week ago",
            &["HTML", "CSS", "JavaScript", "React"],
            "Develop and maintain websites using modern web technologies. Collaborate with design team to implement UI/UX.",
        ),
        listing(
            4,
            "Sales Associate",
            "Retail Solutions Inc.",
            "Davao",
            "Part-time",
            "₱12,000 - ₱15,000",
            "5 days ago",
            &["Sales", "Customer Service", "Inventory Management"],
            "Assist customers with product selection, process transactions, and maintain store appearance.",
        ),
        listing(
            5,
            "Data Entry Specialist",
            "InfoTech Services",
            "Remote",
            "Contract",
            "₱18,000 - ₱22,000",
            "4 days ago",
            &["Data Entry", "MS Excel", "Attention to Detail"],
            "Input and maintain data in company databases with high accuracy. Generate reports as needed.",
        ),
        listing(
            6,
            "Social Media Assistant",
            "Digital Marketing PH",
            "Manila",
            "Part-time",
            "₱15,000 - ₱18,000",
            "1 day ago",
            &["Social Media", "Content Creation", "Communication"],
            "Create and schedule content for social media platforms. Engage with followers and monitor social media trends.",
        ),
    ]
}
