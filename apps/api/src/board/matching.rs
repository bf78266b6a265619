//! Skill matching — overlap between a job's required skills and a user's skill profile.
//!
//! A required skill is covered when either side contains the other, ignoring case:
//! "Excel" covers "MS Excel", and "Customer Service Lead" covers "Customer Service".

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Skills assumed for a visitor who has not edited their profile.
pub const DEFAULT_PROFILE: &[&str] = &["Communication", "Customer Service"];

// ────────────────────────────────────────────────────────────────────────────
// Skill profile
// ────────────────────────────────────────────────────────────────────────────

/// Ordered, user-editable list of possessed skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillProfile {
    skills: Vec<String>,
}

impl SkillProfile {
    pub fn new(skills: Vec<String>) -> Self {
        Self { skills }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_PROFILE.iter().map(|s| s.to_string()).collect())
    }

    /// Parses a comma-separated list, dropping blank entries.
    pub fn from_csv(raw: &str) -> Self {
        let mut profile = Self::default();
        for skill in raw.split(',') {
            profile.add(skill);
        }
        profile
    }

    /// Appends the trimmed skill unless it is blank or already present (exact match).
    /// Returns whether the profile changed.
    pub fn add(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// Removes every entry equal to `skill`. Returns whether the profile changed.
    pub fn remove(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill);
        self.skills.len() != before
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

fn covers(required: &str, possessed: &[String]) -> bool {
    let required = required.to_lowercase();
    possessed.iter().any(|skill| {
        let skill = skill.to_lowercase();
        skill.contains(&required) || required.contains(&skill)
    })
}

/// Raw overlap count. Ordering compares the exact ratio `matched / required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRatio {
    pub matched: usize,
    pub required: usize,
}

impl MatchRatio {
    pub fn compute(required: &[String], possessed: &[String]) -> Self {
        if required.is_empty() || possessed.is_empty() {
            return Self {
                matched: 0,
                required: required.len(),
            };
        }
        let matched = required.iter().filter(|r| covers(r, possessed)).count();
        Self {
            matched,
            required: required.len(),
        }
    }

    /// Round-half-up percentage in 0..=100.
    pub fn percentage(&self) -> u32 {
        if self.required == 0 {
            return 0;
        }
        ((200 * self.matched + self.required) / (2 * self.required)) as u32
    }

    pub fn cmp_ratio(&self, other: &Self) -> Ordering {
        // Empty requirement lists score 0, same as no overlap.
        let lhs = self.matched * other.required.max(1);
        let rhs = other.matched * self.required.max(1);
        lhs.cmp(&rhs)
    }
}

/// Integer percentage of required skills covered by the possessed skills.
pub fn match_percentage(required: &[String], possessed: &[String]) -> u32 {
    MatchRatio::compute(required, possessed).percentage()
}

/// Nearest half-star out of five.
pub fn star_rating(percentage: u32) -> f32 {
    half_stars(percentage) as f32 / 2.0
}

fn half_stars(percentage: u32) -> u32 {
    (percentage.min(100) + 5) / 10
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarBreakdown {
    pub full: u32,
    pub half: u32,
    pub empty: u32,
}

impl StarBreakdown {
    pub fn from_percentage(percentage: u32) -> Self {
        let halves = half_stars(percentage);
        let full = halves / 2;
        let half = halves % 2;
        Self {
            full,
            half,
            empty: 5 - full - half,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLabel {
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchLabel {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p > 80 => MatchLabel::Excellent,
            p if p > 60 => MatchLabel::Good,
            p if p > 40 => MatchLabel::Fair,
            _ => MatchLabel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLabel::Excellent => "Excellent Match",
            MatchLabel::Good => "Good Match",
            MatchLabel::Fair => "Fair Match",
            MatchLabel::Low => "Low Match",
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the match badge and its tooltip render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchReport {
    pub percentage: u32,
    pub stars: f32,
    pub star_breakdown: StarBreakdown,
    pub label: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl SkillMatchReport {
    pub fn compute(required: &[String], possessed: &[String]) -> Self {
        let percentage = match_percentage(required, possessed);
        let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required
            .iter()
            .cloned()
            .partition(|skill| covers(skill, possessed));

        Self {
            percentage,
            stars: star_rating(percentage),
            star_breakdown: StarBreakdown::from_percentage(percentage),
            label: MatchLabel::from_percentage(percentage).to_string(),
            matched_skills,
            missing_skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_match_is_excellent() {
        let report = SkillMatchReport::compute(
            &skills(&["Communication", "Customer Service"]),
            &skills(&["Communication", "Customer Service"]),
        );
        assert_eq!(report.percentage, 100);
        assert_eq!(report.stars, 5.0);
        assert_eq!(report.label, "Excellent Match");
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_no_overlap_is_low() {
        let report = SkillMatchReport::compute(
            &skills(&["HTML", "CSS", "JavaScript"]),
            &skills(&["Communication"]),
        );
        assert_eq!(report.percentage, 0);
        assert_eq!(report.label, "Low Match");
        assert_eq!(report.missing_skills.len(), 3);
    }

    #[test]
    fn test_empty_lists_score_zero() {
        assert_eq!(match_percentage(&[], &skills(&["Sales"])), 0);
        assert_eq!(match_percentage(&skills(&["Sales"]), &[]), 0);
    }

    #[test]
    fn test_containment_is_symmetric_and_case_insensitive() {
        assert_eq!(match_percentage(&skills(&["MS Excel"]), &skills(&["excel"])), 100);
        assert_eq!(match_percentage(&skills(&["Excel"]), &skills(&["ms excel"])), 100);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // 1 of 3 → 33.33 → 33; 2 of 3 → 66.67 → 67; 1 of 8 → 12.5 → 13
        let three = skills(&["A", "B", "C"]);
        assert_eq!(match_percentage(&three, &skills(&["A"])), 33);
        assert_eq!(match_percentage(&three, &skills(&["A", "B"])), 67);
        let eight = skills(&["a1", "b2", "c3", "d4", "e5", "f6", "g7", "h8"]);
        assert_eq!(match_percentage(&eight, &skills(&["a1"])), 13);
    }

    #[test]
    fn test_star_rating_half_precision() {
        assert_eq!(star_rating(0), 0.0);
        assert_eq!(star_rating(33), 1.5);
        assert_eq!(star_rating(45), 2.5);
        assert_eq!(star_rating(67), 3.5);
        assert_eq!(star_rating(100), 5.0);
    }

    #[test]
    fn test_star_breakdown_sums_to_five() {
        for p in 0..=100 {
            let b = StarBreakdown::from_percentage(p);
            assert_eq!(b.full + b.half + b.empty, 5, "percentage {p}");
        }
        assert_eq!(
            StarBreakdown::from_percentage(67),
            StarBreakdown { full: 3, half: 1, empty: 1 }
        );
    }

    #[test]
    fn test_label_thresholds_are_strict() {
        assert_eq!(MatchLabel::from_percentage(81), MatchLabel::Excellent);
        assert_eq!(MatchLabel::from_percentage(80), MatchLabel::Good);
        assert_eq!(MatchLabel::from_percentage(61), MatchLabel::Good);
        assert_eq!(MatchLabel::from_percentage(60), MatchLabel::Fair);
        assert_eq!(MatchLabel::from_percentage(41), MatchLabel::Fair);
        assert_eq!(MatchLabel::from_percentage(40), MatchLabel::Low);
    }

    #[test]
    fn test_report_partitions_required_in_order() {
        let report = SkillMatchReport::compute(
            &skills(&["Sales", "Customer Service", "Inventory Management"]),
            &skills(&["Communication", "Customer Service"]),
        );
        assert_eq!(report.matched_skills, skills(&["Customer Service"]));
        assert_eq!(report.missing_skills, skills(&["Sales", "Inventory Management"]));
        assert_eq!(report.percentage, 33);
    }

    #[test]
    fn test_ratio_ordering_is_exact() {
        let a = MatchRatio { matched: 1, required: 3 };
        let b = MatchRatio { matched: 2, required: 6 };
        let c = MatchRatio { matched: 1, required: 2 };
        assert_eq!(a.cmp_ratio(&b), Ordering::Equal);
        assert_eq!(c.cmp_ratio(&a), Ordering::Greater);
    }

    #[test]
    fn test_profile_add_trims_and_dedups() {
        let mut profile = SkillProfile::with_defaults();
        assert!(profile.add("  Sales "));
        assert!(!profile.add("Sales"));
        assert!(!profile.add("   "));
        // Duplicate check is case-sensitive.
        assert!(profile.add("sales"));
        assert_eq!(profile.skills().len(), 4);
    }

    #[test]
    fn test_profile_remove_exact() {
        let mut profile = SkillProfile::with_defaults();
        assert!(!profile.remove("communication"));
        assert!(profile.remove("Communication"));
        assert_eq!(profile.skills(), &["Customer Service".to_string()]);
    }

    #[test]
    fn test_profile_from_csv() {
        let profile = SkillProfile::from_csv("HTML, CSS,,HTML , ");
        assert_eq!(profile.skills(), &["HTML".to_string(), "CSS".to_string()]);
    }
}
