use axum::Json;
use shared::{
    api::payloads::{CreateUserRequest, UserResponse},
    model::NewUser,
    repository::UserRepository,
};
use tracing::{debug, instrument};

use crate::{db::DatabaseConnection, AppError, FormOrJson, ResultContext};

#[instrument(skip(db))]
pub async fn list_users(db: DatabaseConnection) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = db
        .run(|conn| conn.list_users())
        .await
        .context("Error retrieving users")?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[instrument(skip(db))]
pub async fn create_user(
    db: DatabaseConnection,
    FormOrJson(req): FormOrJson<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let new_user = NewUser::from(req);
    debug!(?new_user, "Creating user");

    let user = db
        .run(move |conn| conn.create_user(new_user))
        .await
        .context("Error creating user")?;

    Ok(Json(user.into()))
}
