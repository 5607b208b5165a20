use axum::{extract::Path, Json};
use shared::{
    api::payloads::{AddExerciseRequest, ExerciseResponse},
    repository::{ExerciseRepository, UserRepository},
};
use tracing::instrument;

use crate::{db::DatabaseConnection, AppError, FormOrJson, ResultContext};

#[instrument(skip(db))]
pub async fn add_exercise(
    db: DatabaseConnection,
    Path(id): Path<String>,
    FormOrJson(req): FormOrJson<AddExerciseRequest>,
) -> Result<Json<ExerciseResponse>, AppError> {
    let (user, entry) = db
        .run(move |conn| {
            // Nothing is written unless the user exists
            let user = conn.fetch_user(&id)?;
            let entry = conn.add_exercise(req.for_user(user.id))?;
            Ok((user, entry))
        })
        .await
        .context("Error adding exercise")?;

    Ok(Json(ExerciseResponse::new(user, entry)))
}
