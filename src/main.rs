use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use profile_service::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use profile_service::auth::adapter::outgoing::UserRepositoryPostgres;
use profile_service::auth::application::ports::outgoing::token_provider::TokenProvider;
use profile_service::config::{load_env_files, AppConfig};
use profile_service::profile::adapter::outgoing::{
    ProfileQueryPostgres, ProfileRepositoryPostgres,
};
use profile_service::profile::application::profile_use_cases::ProfileUseCases;
use profile_service::profile::application::service::{
    AddEducationService, AddExperienceService, DeleteProfileService, GetOwnProfileService,
    GetProfileByOwnerService, ListProfilesService, RemoveEducationService,
    RemoveExperienceService, UpsertProfileService,
};
use profile_service::shared::api::custom_json_config;
use profile_service::{init_routes, AppState};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_files();

    let config = AppConfig::from_env().context("invalid server configuration")?;
    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .connect_timeout(config.db_connect_timeout)
        .acquire_timeout(config.db_connect_timeout)
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("failed to apply migrations")?;

    let db_arc = Arc::new(conn);

    // Ports
    let profile_repository = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));
    let user_repository = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        profile: ProfileUseCases {
            get_own: Arc::new(GetOwnProfileService::new(profile_query.clone())),
            list: Arc::new(ListProfilesService::new(profile_query.clone())),
            get_by_owner: Arc::new(GetProfileByOwnerService::new(profile_query)),
            upsert: Arc::new(UpsertProfileService::new(profile_repository.clone())),
            delete: Arc::new(DeleteProfileService::new(
                profile_repository.clone(),
                user_repository,
            )),
            add_experience: Arc::new(AddExperienceService::new(profile_repository.clone())),
            remove_experience: Arc::new(RemoveExperienceService::new(profile_repository.clone())),
            add_education: Arc::new(AddEducationService::new(profile_repository.clone())),
            remove_education: Arc::new(RemoveEducationService::new(profile_repository)),
        },
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));

    let server_url = config.server_url();
    info!("Server listening on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
