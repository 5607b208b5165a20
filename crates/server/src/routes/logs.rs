use axum::{
    extract::{Path, Query},
    Json,
};
use shared::{
    api::payloads::{LogQuery, LogResponse},
    repository::{ExerciseRepository, UserRepository},
};
use tracing::{debug, instrument};

use crate::{db::DatabaseConnection, AppError, ResultContext};

#[instrument(skip(db))]
pub async fn fetch_log(
    db: DatabaseConnection,
    Path(id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogResponse>, AppError> {
    let (user, entries) = db
        .run(move |conn| {
            let user = conn.fetch_user(&id)?;
            let filter = query.filter(user.id);
            debug!(?filter);
            let entries = conn.query_exercises(&filter)?;
            Ok((user, entries))
        })
        .await
        .context("Error retrieving logs")?;

    Ok(Json(LogResponse::new(user, entries)))
}
