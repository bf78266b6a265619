//! Share links and share text for a single listing.

use serde::Serialize;
use url::form_urlencoded::byte_serialize;

use crate::models::job::Job;

/// `base` with any query string dropped, plus `?share=<id>`.
pub fn shareable_url(base: &str, job_id: u32) -> String {
    let base = base.split('?').next().unwrap_or(base);
    format!("{base}?share={job_id}")
}

/// Short headline used by social share intents.
pub fn share_headline(job: &Job) -> String {
    format!("Check out this {} position at {}!", job.title, job.company)
}

/// Full plain-text summary used for native share sheets and clipboard copies.
pub fn sharing_text(job: &Job) -> String {
    format!(
        "{}\n\nLocation: {}\nSalary: {}\nType: {}\n\nRequired skills: {}",
        share_headline(job),
        job.location,
        job.salary,
        job.job_type,
        job.skills.join(", ")
    )
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub url: String,
    pub title: String,
    pub text: String,
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
}

impl ShareLinks {
    pub fn build(base: &str, job: &Job) -> Self {
        let url = shareable_url(base, job.id);
        let headline = share_headline(job);
        let encoded_url = encode(&url);
        let encoded_headline = encode(&headline);

        Self {
            facebook: format!("https://www.facebook.com/sharer/sharer.php?u={encoded_url}"),
            twitter: format!(
                "https://twitter.com/intent/tweet?text={encoded_headline}&url={encoded_url}"
            ),
            linkedin: format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={encoded_url}&title={encoded_headline}"
            ),
            title: format!("{} at {}", job.title, job.company),
            text: sharing_text(job),
            url,
        }
    }
}
