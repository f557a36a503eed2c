use actix_web::web;
use std::sync::Arc;
use validator::Validate;

use crate::dto::FindTeamQuery;
use crate::handlers::ApiException;

use kl_core::domain::entities::Team;
use kl_core::repositories::TeamRepository;
use kl_core::services::TeamService;
use kl_shared::ApiResponse;

/// Application state that holds shared services
pub struct AppState<T>
where
    T: TeamRepository,
{
    pub team_service: Arc<TeamService<T>>,
}

impl<T: TeamRepository> AppState<T> {
    pub fn new(repository: T) -> Self {
        Self {
            team_service: Arc::new(TeamService::new(repository)),
        }
    }
}

/// Handler for GET /team
///
/// Looks up one team with its stadium and the stadium's schedules.
///
/// # Query
/// * `teamId` - at least three characters when present
///
/// # Response
///
/// ## Success
/// ```json
/// {
///     "success": true,
///     "response": { "teamId": "K03", "teamName": "스틸러스", "stadium": { ... } },
///     "error": null
/// }
/// ```
///
/// ## Errors
/// * `8888` - `teamId` shorter than three characters
/// * `T404` - no such team
pub async fn find_team_by_id<T>(
    state: web::Data<AppState<T>>,
    query: web::Query<FindTeamQuery>,
) -> Result<web::Json<ApiResponse<Team>>, ApiException>
where
    T: TeamRepository + 'static,
{
    let query = query.into_inner();
    query.validate()?;

    let team_id = query.team_id.as_deref().unwrap_or_default();
    let team = state.team_service.find_team_by_id(team_id).await?;

    Ok(web::Json(ApiResponse::success(team)))
}
