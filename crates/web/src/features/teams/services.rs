use sqlx::SqlitePool;
use storage::{
    dto::team::CreateTeamRequest,
    models::{Team, TeamId},
    repository::team::TeamRepository,
};

use crate::credentials::hash_password;
use crate::error::{WebError, WebResult};

pub async fn list_teams(pool: &SqlitePool) -> WebResult<Vec<Team>> {
    Ok(TeamRepository::new(pool).list().await?)
}

/// Register a team with a hashed password
pub async fn create_team(pool: &SqlitePool, request: &CreateTeamRequest) -> WebResult<Team> {
    let request = request.trimmed();
    if request.name.is_empty() || request.username.is_empty() {
        return Err(WebError::BadRequest(
            "Name, username and password are required".to_string(),
        ));
    }

    let password_hash = hash_password(&request.password)?;
    let team = TeamRepository::new(pool)
        .create(&request.name, &request.username, &password_hash)
        .await?;

    tracing::info!(team_id = team.id, name = %team.name, "Team created");
    Ok(team)
}

pub async fn toggle_team(pool: &SqlitePool, team_id: TeamId) -> WebResult<Team> {
    let team = TeamRepository::new(pool).toggle_active(team_id).await?;
    tracing::info!(team_id, is_active = team.is_active, "Team status changed");
    Ok(team)
}

pub async fn reset_password(pool: &SqlitePool, team_id: TeamId, new_password: &str) -> WebResult<()> {
    let password_hash = hash_password(new_password)?;
    TeamRepository::new(pool)
        .set_password_hash(team_id, &password_hash)
        .await?;

    tracing::info!(team_id, "Team password reset");
    Ok(())
}
