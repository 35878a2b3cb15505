/// User CRUD endpoints
///
/// Each handler is a thin translation between HTTP and the SQL
/// operations in [`crate::models::user`]: decode input, run the
/// statement, encode the row. All failures are handled here at the
/// handler boundary and logged with the request's trace id; error
/// responses carry empty bodies.
///
/// # Endpoints
///
/// - `GET    /api/go/users` - List users
/// - `POST   /api/go/users` - Create user
/// - `GET    /api/go/users/:id` - Get user
/// - `PUT    /api/go/users/:id` - Update user
/// - `DELETE /api/go/users/:id` - Delete user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    middleware::trace::RequestContext,
    models::user::{NewUser, User},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde::Deserialize;

/// Create/update request body
///
/// Missing fields default to the empty string and unknown fields
/// (including a client-supplied `id`) are ignored. Only a
/// syntactically malformed body is rejected.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

/// Lists all users
///
/// Rows that fail to decode are logged and skipped; the listing still
/// succeeds with the remaining rows. Only a failed query aborts the
/// request.
pub async fn list_users(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> ApiResult<Json<Vec<User>>> {
    let rows = User::list(&state.db).await.map_err(|error| {
        tracing::error!(error = %error, trace_id = %ctx.trace_id, "user query failed");
        ApiError::Internal
    })?;

    let mut users = Vec::with_capacity(rows.len());
    for row in rows {
        match row {
            Ok(user) => users.push(user),
            Err(error) => {
                tracing::error!(
                    error = %error,
                    trace_id = %ctx.trace_id,
                    "skipping user row that failed to decode"
                );
            }
        }
    }

    tracing::info!(count = users.len(), trace_id = %ctx.trace_id, "listed users");
    Ok(Json(users))
}

/// Gets a single user by id
///
/// A missing row and a failed lookup both answer 404 on this route.
pub async fn get_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<i32>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, id)
        .await
        .map_err(|error| {
            tracing::error!(error = %error, id, trace_id = %ctx.trace_id, "user lookup failed");
            ApiError::NotFound
        })?
        .ok_or_else(|| {
            tracing::warn!(id, trace_id = %ctx.trace_id, "user not found");
            ApiError::NotFound
        })?;

    Ok(Json(user))
}

/// Creates a user
///
/// The store assigns the id, which is echoed back in the response.
pub async fn create_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(payload) = body.map_err(|error| {
        tracing::error!(error = %error, trace_id = %ctx.trace_id, "request body decode failed");
        ApiError::BadRequest
    })?;

    let user = User::create(
        &state.db,
        NewUser {
            name: payload.name,
            email: payload.email,
        },
    )
    .await
    .map_err(|error| {
        tracing::error!(error = %error, trace_id = %ctx.trace_id, "user insert failed");
        ApiError::Internal
    })?;

    tracing::info!(id = user.id, trace_id = %ctx.trace_id, "user created");
    Ok(Json(user))
}

/// Updates a user in place
///
/// The write is blind; the canonical row is read back afterwards so
/// the response reflects whatever the store actually kept. The two
/// statements are not wrapped in a transaction: a concurrent delete
/// between them answers 500 even though the write itself succeeded,
/// as does an update of an id that never existed.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<i32>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(payload) = body.map_err(|error| {
        tracing::error!(error = %error, trace_id = %ctx.trace_id, "request body decode failed");
        ApiError::BadRequest
    })?;

    User::update(
        &state.db,
        id,
        NewUser {
            name: payload.name,
            email: payload.email,
        },
    )
    .await
    .map_err(|error| {
        tracing::error!(error = %error, id, trace_id = %ctx.trace_id, "user update failed");
        ApiError::Internal
    })?;

    let user = User::find_by_id(&state.db, id)
        .await
        .map_err(|error| {
            tracing::error!(error = %error, id, trace_id = %ctx.trace_id, "post-update fetch failed");
            ApiError::Internal
        })?
        .ok_or_else(|| {
            tracing::error!(id, trace_id = %ctx.trace_id, "post-update fetch found no row");
            ApiError::Internal
        })?;

    tracing::info!(id, trace_id = %ctx.trace_id, "user updated");
    Ok(Json(user))
}

/// Deletes a user
///
/// The statement runs once; zero affected rows is the not-found
/// signal, a failed statement is a store error.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<i32>,
) -> ApiResult<Json<&'static str>> {
    let deleted = User::delete(&state.db, id).await.map_err(|error| {
        tracing::error!(error = %error, id, trace_id = %ctx.trace_id, "user delete failed");
        ApiError::Internal
    })?;

    if !deleted {
        tracing::warn!(id, trace_id = %ctx.trace_id, "user not found for delete");
        return Err(ApiError::NotFound);
    }

    tracing::info!(id, trace_id = %ctx.trace_id, "user deleted");
    Ok(Json("User deleted"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_defaults_missing_fields() {
        let payload: UserPayload = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(payload.name, "A");
        assert_eq!(payload.email, "");
    }

    #[test]
    fn test_payload_ignores_client_supplied_id() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"id":42,"name":"A","email":"a@x.com"}"#).unwrap();
        assert_eq!(payload.name, "A");
        assert_eq!(payload.email, "a@x.com");
    }

    #[test]
    fn test_payload_rejects_malformed_json() {
        let result = serde_json::from_str::<UserPayload>("{not json");
        assert!(result.is_err());
    }
}
