#![allow(dead_code)]

use axum_test::TestServer;
use movie_catalog::core::{AppState, database};
use sqlx::SqlitePool;
use std::sync::Arc;

const CATALOG_FIXTURE: &str = include_str!("../fixtures/catalog.sql");

/// Crea un database in memoria con lo schema applicato
pub async fn create_test_pool() -> SqlitePool {
    let pool = database::connect("sqlite::memory:", 1, false)
        .await
        .expect("Failed to open in-memory database");
    database::init_schema(&pool)
        .await
        .expect("Failed to create schema");
    pool
}

/// Come `create_test_pool`, con i fixtures di `fixtures/catalog.sql` caricati
///
/// Generi: 1 Drama, 2 Comedy, 3 Documentary (senza film).
/// Registi: 1 Nolan, 2 Coppola, 3 Varda (senza film).
/// Film 1..7 hanno un genere; il film 8 ha genre_id NULL e director_id 1.
pub async fn create_seeded_pool() -> SqlitePool {
    let pool = create_test_pool().await;
    for statement in CATALOG_FIXTURE.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("Failed to load fixture");
    }
    pool
}

/// Crea un AppState per i test
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = movie_catalog::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// TestServer su database vuoto
pub async fn empty_server() -> TestServer {
    create_test_server(create_test_state(create_test_pool().await))
}

/// TestServer su database con fixtures
pub async fn seeded_server() -> TestServer {
    create_test_server(create_test_state(create_seeded_pool().await))
}

/// Id nell'header Location di una risposta 201, es. `/movies/9` -> 9
pub fn location_id(response: &axum_test::TestResponse) -> i64 {
    let location = response.header("location");
    location
        .to_str()
        .expect("Location header should be ASCII")
        .rsplit('/')
        .next()
        .and_then(|id| id.parse().ok())
        .expect("Location header should end with an id")
}
