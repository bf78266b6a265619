//! Axum route handlers for the Jobs API.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::board::assessment::assess;
use crate::board::controller::{BoardView, JobBoardController};
use crate::board::filter::FilterCriteria;
use crate::board::matching::{SkillMatchReport, SkillProfile};
use crate::board::sharing::ShareLinks;
use crate::board::sorter::SortOrder;
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::models::alert::{JobAlertSubscription, NewJobAlert};
use crate::models::assessment::{AssessmentResult, SkillsAssessment};
use crate::models::job::Job;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    pub sort: Option<SortOrder>,
    pub page: Option<usize>,
    #[serde(default)]
    pub saved_only: bool,
    /// Comma-separated skill profile; the default profile is used when absent.
    pub skills: Option<String>,
    /// One-off edits applied on top of the profile.
    pub add_skill: Option<String>,
    pub remove_skill: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    pub job: Job,
    pub saved: bool,
    pub share: ShareLinks,
}

#[derive(Debug, Serialize)]
pub struct SavedJobsResponse {
    pub ids: Vec<u32>,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
pub struct ToggleSavedResponse {
    pub id: u32,
    pub saved: bool,
}

#[derive(Debug, Deserialize)]
pub struct SkillMatchRequest {
    pub required: Vec<String>,
    pub possessed: Vec<String>,
}

fn find_job(state: &AppState, id: u32) -> Result<&Job, AppError> {
    state
        .catalog
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Listings
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
///
/// Runs the board pipeline for the given criteria and returns one page.
/// Out-of-range pages are ignored and the first page is returned.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<BoardQuery>,
) -> Result<Json<BoardView>, AppError> {
    let saved_ids = state.store.list().await?;

    let mut board = JobBoardController::new(&state.catalog, state.config.items_per_page);
    board.set_criteria(FilterCriteria::new(query.search, query.location, query.job_type));
    board.set_sort_order(query.sort.unwrap_or_default());
    board.set_saved_ids(saved_ids);
    board.set_show_only_saved(query.saved_only);
    if let Some(skills) = query.skills.as_deref() {
        board.set_skills(SkillProfile::from_csv(skills));
    }
    if let Some(skill) = query.add_skill.as_deref() {
        board.add_skill(skill);
    }
    if let Some(skill) = query.remove_skill.as_deref() {
        board.remove_skill(skill);
    }
    if let Some(page) = query.page {
        board.go_to_page(page);
    }

    Ok(Json(board.view()))
}

/// GET /api/v1/recent-jobs
pub async fn handle_recent_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    let board = JobBoardController::new(&state.catalog, state.config.items_per_page);
    Json(board.recent_jobs().into_iter().cloned().collect())
}

/// GET /api/v1/jobs/:id
///
/// Also serves `?share=<id>` links: the UI resolves the shared id through here.
pub async fn handle_get_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let job = find_job(&state, id)?;
    let saved = state.store.is_saved(id).await?;
    Ok(Json(JobDetailResponse {
        share: ShareLinks::build(&state.config.share_base_url, job),
        job: job.clone(),
        saved,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Saved jobs
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/saved-jobs
pub async fn handle_list_saved(
    State(state): State<AppState>,
) -> Result<Json<SavedJobsResponse>, AppError> {
    let ids = state.store.list().await?;
    let jobs = ids
        .iter()
        .filter_map(|id| state.catalog.find(*id))
        .cloned()
        .collect();
    Ok(Json(SavedJobsResponse { ids, jobs }))
}

/// PUT /api/v1/saved-jobs/:id
pub async fn handle_save_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> Result<StatusCode, AppError> {
    find_job(&state, id)?;
    state.store.save(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/saved-jobs/:id
pub async fn handle_unsave_job(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> Result<StatusCode, AppError> {
    state.store.unsave(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/saved-jobs/:id/toggle
pub async fn handle_toggle_saved(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> Result<Json<ToggleSavedResponse>, AppError> {
    find_job(&state, id)?;
    let saved = state.store.toggle(id).await?;
    Ok(Json(ToggleSavedResponse { id, saved }))
}

// ────────────────────────────────────────────────────────────────────────────
// Alerts and skills
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/alerts
pub async fn handle_list_alerts(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobAlertSubscription>>, AppError> {
    Ok(Json(state.store.list_subscriptions().await?))
}

/// POST /api/v1/alerts
pub async fn handle_create_alert(
    State(state): State<AppState>,
    AppJson(request): AppJson<NewJobAlert>,
) -> Result<(StatusCode, Json<JobAlertSubscription>), AppError> {
    let subscription = state.store.add_subscription(request).await?;
    Ok((StatusCode::CREATED, Json(subscription)))
}

/// POST /api/v1/skills/match
pub async fn handle_skill_match(
    AppJson(request): AppJson<SkillMatchRequest>,
) -> Json<SkillMatchReport> {
    Json(SkillMatchReport::compute(&request.required, &request.possessed))
}

// ────────────────────────────────────────────────────────────────────────────
// Skills assessment
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/assessments
///
/// Scores the answers and stores the result as the latest assessment.
pub async fn handle_create_assessment(
    State(state): State<AppState>,
    AppJson(answers): AppJson<SkillsAssessment>,
) -> Result<(StatusCode, Json<AssessmentResult>), AppError> {
    let result = assess(answers, &state.catalog, Utc::now())?;
    state.store.save_assessment(&result).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// GET /api/v1/assessments/latest
pub async fn handle_latest_assessment(
    State(state): State<AppState>,
) -> Result<Json<AssessmentResult>, AppError> {
    state
        .store
        .latest_assessment()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No skills assessment has been completed".to_string()))
}
