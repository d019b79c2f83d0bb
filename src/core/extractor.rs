use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, OptionalFromRequest, Request},
    http::header,
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON body extractor whose rejections use the standard error envelope.
///
/// As `Option<AppJson<T>>` it yields `None` for a request without a JSON
/// content type or with an empty body, so write handlers can fall back to an
/// empty DTO and report the missing fields themselves.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl<T, S> OptionalFromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        if !has_json_content_type(&req) {
            return Ok(None);
        }

        let bytes = <Bytes as FromRequest<S>>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        if bytes.is_empty() {
            return Ok(None);
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Some(AppJson(value)))
    }
}

fn has_json_content_type(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"))
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                format!("Invalid JSON syntax: {}", err.body_text())
            }
            JsonRejection::MissingJsonContentType(_) => {
                "Expected request with `Content-Type: application/json`".to_string()
            }
            other => {
                tracing::debug!("Unhandled JSON rejection: {}", other);
                "Failed to parse JSON body".to_string()
            }
        };
        AppError::BadRequest(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    #[tokio::test]
    async fn test_accepts_valid_json() {
        let request = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Goa"}"#))
            .unwrap();

        let AppJson(payload) = <AppJson<Payload> as FromRequest<()>>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(payload.name, "Goa");
    }

    #[tokio::test]
    async fn test_syntax_error_becomes_bad_request() {
        let request = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"#))
            .unwrap();

        let result = <AppJson<Payload> as FromRequest<()>>::from_request(request, &()).await;
        match result {
            Err(AppError::BadRequest(message)) => {
                assert!(message.starts_with("Invalid JSON syntax"))
            }
            _ => panic!("expected BadRequest"),
        }
    }

    async fn optional(request: Request<Body>) -> Result<Option<Payload>, AppError> {
        <AppJson<Payload> as OptionalFromRequest<()>>::from_request(request, &())
            .await
            .map(|body| body.map(|AppJson(payload)| payload))
    }

    #[tokio::test]
    async fn test_optional_body_absent() {
        let no_body = Request::builder().body(Body::empty()).unwrap();
        assert!(optional(no_body).await.unwrap().is_none());

        let plain_text = Request::builder()
            .header("content-type", "text/plain")
            .body(Body::from("name=Goa"))
            .unwrap();
        assert!(optional(plain_text).await.unwrap().is_none());

        let empty_json = Request::builder()
            .header("content-type", "application/json")
            .body(Body::empty())
            .unwrap();
        assert!(optional(empty_json).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_optional_body_present() {
        let request = Request::builder()
            .header("content-type", "application/json; charset=utf-8")
            .body(Body::from(r#"{"name":"Goa"}"#))
            .unwrap();
        let payload = optional(request).await.unwrap().unwrap();
        assert_eq!(payload.name, "Goa");

        let malformed = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"#))
            .unwrap();
        assert!(matches!(
            optional(malformed).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_content_type_becomes_bad_request() {
        let request = Request::builder()
            .body(Body::from(r#"{"name":"Goa"}"#))
            .unwrap();

        let result = <AppJson<Payload> as FromRequest<()>>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
