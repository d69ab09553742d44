//! Typed request parsing that reports rejections as structured 422s.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::{ApiError, FieldError};

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// `Json<T>` whose rejection is an [`ApiError::Validation`].
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::Validation(vec![json_field_error(&rejection)])),
        }
    }
}

/// `Path<T>` whose rejection is an [`ApiError::Validation`].
#[derive(Debug)]
pub struct ValidPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::Validation(vec![FieldError::new(
                &["path"],
                rejection.body_text(),
                "invalid_type",
            )])),
        }
    }
}

fn json_field_error(rejection: &JsonRejection) -> FieldError {
    match rejection {
        JsonRejection::JsonDataError(e) => data_error(&e.body_text()),
        JsonRejection::JsonSyntaxError(e) => FieldError::new(&["body"], e.body_text(), "json_invalid"),
        JsonRejection::MissingJsonContentType(e) => FieldError::new(&["body"], e.body_text(), "content_type"),
        other => FieldError::new(&["body"], other.body_text(), "invalid"),
    }
}

/// Turn serde's data error text into a field-level entry.
///
/// Handles `missing field `x`` and `path.to.field: <reason>` forms.
fn data_error(text: &str) -> FieldError {
    let detail = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text);
    let detail = match detail.rfind(" at line ") {
        Some(idx) => &detail[..idx],
        None => detail,
    };

    if let Some(field) = detail.split("missing field `").nth(1).and_then(|rest| rest.split('`').next()) {
        return FieldError::new(&["body", field], "Field required", "missing");
    }

    if let Some((path, reason)) = detail.split_once(": ") {
        if !path.is_empty() && !path.contains(' ') {
            let mut loc = vec!["body"];
            loc.extend(path.split('.').filter(|s| !s.is_empty()));
            return FieldError::new(&loc, reason, "invalid_type");
        }
    }

    FieldError::new(&["body"], detail, "invalid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let e = data_error(
            "Failed to deserialize the JSON body into the target type: missing field `name` at line 1 column 2",
        );
        assert_eq!(e, FieldError::new(&["body", "name"], "Field required", "missing"));
    }

    #[test]
    fn wrong_type_uses_the_path() {
        let e = data_error(
            "Failed to deserialize the JSON body into the target type: name: invalid type: integer `5`, expected a string at line 1 column 10",
        );
        assert_eq!(e.loc, vec!["body", "name"]);
        assert_eq!(e.msg, "invalid type: integer `5`, expected a string");
        assert_eq!(e.kind, "invalid_type");
    }

    #[test]
    fn top_level_type_error_stays_on_body() {
        let e = data_error(
            "Failed to deserialize the JSON body into the target type: invalid type: sequence, expected struct SpecialtyCreate at line 1 column 1",
        );
        assert_eq!(e.loc, vec!["body"]);
        assert_eq!(e.kind, "invalid");
    }
}
