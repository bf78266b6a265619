//! Job board page controller.
//!
//! Holds the filter/sort/page state for one visitor and recomputes the visible listings
//! synchronously on every read: filter → saved-only → sort → paginate. Every state change
//! resets the page to 1 so `1 ≤ current_page ≤ total_pages` always holds.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::board::filter::{filter_jobs, FilterCriteria};
use crate::board::matching::{SkillMatchReport, SkillProfile};
use crate::board::pagination::{paginate, total_pages, PageInfo};
use crate::board::parsing::is_recently_posted;
use crate::board::sorter::{sort_jobs, SortOrder};
use crate::models::job::{Job, JobCatalog};

/// A listing as rendered on the board.
#[derive(Debug, Clone, Serialize)]
pub struct JobCard {
    #[serde(flatten)]
    pub job: Job,
    pub saved: bool,
    pub skill_match: SkillMatchReport,
}

/// One recomputed page of the board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub jobs: Vec<JobCard>,
    pub total_matches: usize,
    pub pagination: PageInfo,
    pub criteria: FilterCriteria,
    pub sort: SortOrder,
    pub show_only_saved: bool,
    pub summary: SearchSummary,
}

/// Headline shown after a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    pub title: String,
    pub description: String,
}

impl SearchSummary {
    pub fn for_count(count: usize) -> Self {
        let description = if count > 0 {
            "Showing matching jobs below."
        } else {
            "Try adjusting your search criteria."
        };
        Self {
            title: format!("{count} jobs found"),
            description: description.to_string(),
        }
    }
}

pub struct JobBoardController<'a> {
    catalog: &'a JobCatalog,
    criteria: FilterCriteria,
    sort: SortOrder,
    show_only_saved: bool,
    saved_ids: BTreeSet<u32>,
    skills: SkillProfile,
    current_page: usize,
    items_per_page: usize,
}

impl<'a> JobBoardController<'a> {
    pub fn new(catalog: &'a JobCatalog, items_per_page: usize) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            sort: SortOrder::default(),
            show_only_saved: false,
            saved_ids: BTreeSet::new(),
            skills: SkillProfile::with_defaults(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    #[cfg(test)]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.current_page = 1;
    }

    pub fn set_sort_order(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.current_page = 1;
    }

    pub fn set_show_only_saved(&mut self, show_only_saved: bool) {
        self.show_only_saved = show_only_saved;
        self.current_page = 1;
    }

    /// Replaces the saved set, e.g. after loading it from the store.
    pub fn set_saved_ids(&mut self, ids: impl IntoIterator<Item = u32>) {
        self.saved_ids = ids.into_iter().collect();
        if self.show_only_saved {
            self.current_page = 1;
        }
    }

    pub fn set_skills(&mut self, skills: SkillProfile) {
        self.skills = skills;
        if self.sort == SortOrder::Match {
            self.current_page = 1;
        }
    }

    pub fn add_skill(&mut self, skill: &str) -> bool {
        let changed = self.skills.add(skill);
        if changed && self.sort == SortOrder::Match {
            self.current_page = 1;
        }
        changed
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let changed = self.skills.remove(skill);
        if changed && self.sort == SortOrder::Match {
            self.current_page = 1;
        }
        changed
    }

    /// Filtered, saved-only and sorted listings before pagination.
    fn matching_jobs(&self) -> Vec<&'a Job> {
        let mut jobs = filter_jobs(self.catalog.jobs(), &self.criteria);
        if self.show_only_saved {
            jobs.retain(|job| self.saved_ids.contains(&job.id));
        }
        sort_jobs(&jobs, self.sort, self.skills.skills())
    }

    pub fn total_matches(&self) -> usize {
        self.matching_jobs().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_matches(), self.items_per_page)
    }

    /// Moves to `page` if it exists. Out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        if page < 1 || page > total {
            debug!("Ignoring page {page} outside 1..={total}");
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn view(&self) -> BoardView {
        let matching = self.matching_jobs();
        let total_matches = matching.len();
        let total = total_pages(total_matches, self.items_per_page);
        let page = paginate(&matching, self.current_page, self.items_per_page).unwrap_or(&[]);

        debug!(
            total_matches,
            page = self.current_page,
            sort = %self.sort,
            "Recomputed job board view"
        );

        let jobs = page
            .iter()
            .map(|job| JobCard {
                job: (*job).clone(),
                saved: self.saved_ids.contains(&job.id),
                skill_match: SkillMatchReport::compute(&job.skills, self.skills.skills()),
            })
            .collect();

        BoardView {
            jobs,
            total_matches,
            pagination: PageInfo::new(self.current_page, total, self.items_per_page),
            criteria: self.criteria.clone(),
            sort: self.sort,
            show_only_saved: self.show_only_saved,
            summary: SearchSummary::for_count(total_matches),
        }
    }

    /// Listings posted within the last few days, in catalog order.
    pub fn recent_jobs(&self) -> Vec<&'a Job> {
        self.catalog
            .jobs()
            .iter()
            .filter(|job| is_recently_posted(&job.posted))
            .collect()
    }
}
