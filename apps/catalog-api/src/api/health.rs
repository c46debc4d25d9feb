//! Readiness endpoint

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// 200 when the upload directory exists and, if configured, the database answers.
async fn ready(State(state): State<AppState>) -> Response {
    let dir = state.config.uploads.dir.clone();
    let uploads: HealthCheckFuture<'_> = Box::pin(async move {
        match tokio::fs::metadata(&dir).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(format!("{} is not a directory", dir.display())),
            Err(e) => Err(format!("{}: {}", dir.display(), e)),
        }
    });

    let mut checks = vec![("uploads", uploads)];

    if let Some(db) = &state.db {
        let db_check: HealthCheckFuture<'_> = Box::pin(async move {
            database::postgres::check_health(db)
                .await
                .map_err(|e| e.to_string())
        });
        checks.push(("database", db_check));
    }

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
