// src/main.rs

use std::sync::Arc;

use anyhow::Context;

use kmdb::application::{build_router, AppState};
use kmdb::config::AppConfig;
use kmdb::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use kmdb::logging::init_logger;
use kmdb::repositories::*;
use kmdb::services::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. CONFIGURATION & LOGGING
    dotenvy::dotenv().ok();
    init_logger();
    let config = AppConfig::from_env().context("Invalid configuration")?;

    // 2. INFRASTRUCTURE
    let pool = Arc::new(
        create_connection_pool(&config.database_path, config.pool_max_size)
            .context("Failed to open the database")?,
    );

    // Initialize schema (idempotent)
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;
        let stats = get_database_stats(&conn)?;
        log::info!(
            "Database {} ready: {} movie(s), {} actor(s), {} genre(s), {} bytes",
            config.database_path.display(),
            stats.movie_count,
            stats.actor_count,
            stats.genre_count,
            stats.size_bytes
        );
    }

    // 3. REPOSITORIES
    let movie_repo: Arc<dyn MovieRepository> = Arc::new(SqliteMovieRepository::new());
    let actor_repo: Arc<dyn ActorRepository> = Arc::new(SqliteActorRepository::new());
    let genre_repo: Arc<dyn GenreRepository> = Arc::new(SqliteGenreRepository::new());

    // 4. SERVICES
    let movie_service = Arc::new(MovieService::new(
        pool.clone(),
        movie_repo.clone(),
        actor_repo.clone(),
        genre_repo.clone(),
    ));
    let actor_service = Arc::new(ActorService::new(
        pool.clone(),
        actor_repo.clone(),
        movie_repo.clone(),
    ));
    let genre_service = Arc::new(GenreService::new(pool.clone(), genre_repo, movie_repo));

    // 5. APPLICATION STATE & ROUTER
    let app = build_router(AppState::new(movie_service, actor_service, genre_service));

    // 6. SERVE
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    log::info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
