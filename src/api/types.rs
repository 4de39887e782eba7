//! Shared types for the API layer: router state, extractors and
//! response bodies common to every entity.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::core_state::CoreState;
use crate::models::{EntityKind, Validate};

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

/// JSON body that has been deserialized and passed [`Validate`].
/// Either failure is reported as a 422.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Integer `{id}` path segment; anything else is a 422.
pub struct EntityId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

/// Body returned by every successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

impl DeletedResponse {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            message: format!("{} deleted", kind.label()),
        }
    }
}

/// Map a missing row to the entity's 404.
pub fn found<T>(kind: EntityKind, row: Option<T>) -> Result<T, ApiError> {
    row.ok_or_else(|| ApiError::NotFound(format!("{} not found", kind.label())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleted_message_uses_entity_label() {
        assert_eq!(
            DeletedResponse::new(EntityKind::Appointment).message,
            "Appointment deleted"
        );
    }

    #[test]
    fn found_maps_none_to_not_found() {
        let err = found::<i64>(EntityKind::Medication, None).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Medication not found"));
        assert_eq!(found(EntityKind::Medication, Some(3)).unwrap(), 3);
    }
}
