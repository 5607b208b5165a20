use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Body extractor accepting either a url encoded form or JSON, picked by the
/// request's content type. Any other (or missing) content type, and an empty
/// JSON body, deserialize as if the body was `{}`
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOrJson<T>(pub T);

#[derive(Debug, PartialEq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(mime) = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
    else {
        return BodyKind::Other;
    };

    if mime.type_() != mime::APPLICATION {
        BodyKind::Other
    } else if mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON) {
        BodyKind::Json
    } else if mime.subtype() == mime::WWW_FORM_URLENCODED {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

fn empty_body<T: DeserializeOwned>() -> Result<T, Response> {
    serde_json::from_value(Value::Object(Map::new()))
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response())
}

#[async_trait]
impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match body_kind(&req) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                if bytes.is_empty() {
                    empty_body()?
                } else {
                    let Json(value) = Json::<T>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;
                    value
                }
            }
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                value
            }
            BodyKind::Other => empty_body()?,
        };

        Ok(FormOrJson(value))
    }
}

#[cfg(test)]
mod test {
    use axum::{
        body::Body,
        extract::{FromRequest, Request},
        http::{header::CONTENT_TYPE, StatusCode},
    };
    use serde::Deserialize;

    use super::FormOrJson;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        username: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Payload, StatusCode> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body)).unwrap();

        FormOrJson::<Payload>::from_request(req, &())
            .await
            .map(|FormOrJson(p)| p)
            .map_err(|r| r.status())
    }

    #[tokio::test]
    async fn test_form_body() {
        let payload = extract(Some("application/x-www-form-urlencoded"), "username=fcc_test")
            .await
            .unwrap();
        assert_eq!(payload.username.as_deref(), Some("fcc_test"));
    }

    #[tokio::test]
    async fn test_json_body() {
        let payload = extract(Some("application/json; charset=utf-8"), r#"{"username":"fcc_test"}"#)
            .await
            .unwrap();
        assert_eq!(payload.username.as_deref(), Some("fcc_test"));
    }

    #[tokio::test]
    async fn test_unknown_or_missing_content_type_is_empty() {
        assert_eq!(extract(None, "username=fcc_test").await.unwrap().username, None);
        assert_eq!(extract(Some("text/plain"), "username=fcc_test").await.unwrap().username, None);
        assert_eq!(extract(Some("application/json"), "").await.unwrap().username, None);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        assert_eq!(
            extract(Some("application/json"), "{").await.unwrap_err(),
            StatusCode::BAD_REQUEST
        );
    }
}
