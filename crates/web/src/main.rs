use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod credentials;
mod error;
mod features;
mod middleware;
mod state;


use config::Config;
use features::{admin, auth, jornadas, matches, overview, standings, team_portal, teams};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        overview::handlers::get_overview,
        standings::handlers::get_standings,
        jornadas::handlers::list_jornadas_with_matches,
        matches::handlers::list_matches,
        auth::handlers::login,
        auth::handlers::logout,
        team_portal::handlers::get_dashboard,
        team_portal::handlers::get_match,
        team_portal::handlers::submit_result,
        admin::handlers::get_summary,
        teams::handlers::list_teams,
        teams::handlers::create_team,
        teams::handlers::toggle_team,
        teams::handlers::reset_password,
        jornadas::handlers::list_jornadas,
        jornadas::handlers::schedule_jornadas,
        matches::handlers::list_matches_admin,
        matches::handlers::generate_fixtures,
        matches::handlers::record_result,
        matches::handlers::reset_match,
        matches::handlers::delete_match,
    ),
    components(
        schemas(
            storage::dto::standings::StandingRow,
            storage::dto::dashboard::OverviewResponse,
            storage::dto::dashboard::TeamDashboardResponse,
            storage::dto::dashboard::AdminSummaryResponse,
            storage::dto::jornada::ScheduleJornadasRequest,
            storage::dto::jornada::ScheduleJornadasResponse,
            storage::dto::jornada::JornadaWithMatches,
            storage::dto::matches::MatchDetail,
            storage::dto::matches::TeamResultReport,
            storage::dto::matches::AdminResultReport,
            storage::dto::matches::GenerateFixturesRequest,
            storage::dto::matches::FixtureGenerationResponse,
            storage::dto::team::TeamResponse,
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::ResetPasswordRequest,
            storage::dto::auth::LoginRequest,
            storage::dto::auth::LoginResponse,
            storage::dto::auth::Role,
            storage::models::Jornada,
            storage::models::MatchStatus,
            storage::models::TeamSummary,
        )
    ),
    tags(
        (name = "league", description = "Public league data"),
        (name = "standings", description = "League table"),
        (name = "auth", description = "Administrator and team sessions"),
        (name = "team", description = "Team portal"),
        (name = "admin", description = "League administration"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Session token")
                        .build(),
                ),
            )
        }
    }
}

/// API routes plus Swagger UI, CORS and request tracing.
fn app(state: AppState) -> Router {
    features::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting league API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!(
        timezone = %config.league.timezone,
        no_show_win_points = config.league.no_show_win_points,
        "Configuration loaded successfully"
    );

    tracing::info!("Opening database at: {}", config.database_url);
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState::new(db, config.league, config.admin);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
