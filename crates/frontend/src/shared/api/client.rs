use contracts::shared::resource::Resource;
use gloo_net::http::{Request, RequestBuilder, Response};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use crate::shared::session;

/// Base URL for API requests, resolved once per page load. `LGU_API_BASE`
/// baked in at build time wins; otherwise the app assumes the API is
/// served from its own origin.
pub fn api_base() -> &'static str {
    static BASE: OnceCell<String> = OnceCell::new();
    BASE.get_or_init(|| {
        if let Some(base) = option_env!("LGU_API_BASE") {
            return base.trim_end_matches('/').to_string();
        }
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    })
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Lists a resource collection.
pub async fn fetch_list<T: Resource>() -> Result<Vec<T>, ApiError> {
    let response = authorize(Request::get(&api_url(T::BASE_PATH)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let (status, body) = read_body(response).await?;
    if !(200..300).contains(&status) {
        return Err(http_error(status, &body));
    }
    decode_list(status, &body)
}

/// Creates a record from a draft; the server answers with the stored
/// record including its assigned `ID`.
pub async fn create<T: Resource>(draft: &T::Draft) -> Result<T, ApiError> {
    let request = authorize(Request::post(&api_url(T::BASE_PATH)))
        .json(draft)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send_for_record(request).await
}

/// Replaces the record with the matching id in full.
pub async fn replace<T: Resource>(record: &T) -> Result<T, ApiError> {
    let url = api_url(&format!("{}/{}", T::BASE_PATH, record.id()));
    let request = authorize(Request::put(&url))
        .json(record)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send_for_record(request).await
}

pub async fn remove<T: Resource>(id: i32) -> Result<(), ApiError> {
    let url = api_url(&format!("{}/{}", T::BASE_PATH, id));
    let response = authorize(Request::delete(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        let (status, body) = read_body(response).await?;
        return Err(http_error(status, &body));
    }
    Ok(())
}

/// Posts a filter to a report view and decodes the row array.
pub async fn fetch_report<Req, Row>(path: &str, filter: &Req) -> Result<Vec<Row>, ApiError>
where
    Req: Serialize,
    Row: DeserializeOwned,
{
    let request = authorize(Request::post(&api_url(path)))
        .json(filter)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let (status, body) = read_body(response).await?;
    if !(200..300).contains(&status) {
        return Err(http_error(status, &body));
    }
    decode_list(status, &body)
}

/// Multipart create: the draft goes into a `payload` part, each file into
/// an `attachments` part. The browser sets the multipart boundary itself.
pub async fn create_with_attachments<T: Resource>(
    draft: &T::Draft,
    files: &[web_sys::File],
) -> Result<T, ApiError> {
    let form = multipart_form(draft, files)?;
    let request = authorize(Request::post(&api_url(T::BASE_PATH)))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send_for_record(request).await
}

/// Multipart replace; files already stored on the server stay untouched,
/// only new ones ride along.
pub async fn replace_with_attachments<T: Resource>(
    id: i32,
    draft: &T::Draft,
    files: &[web_sys::File],
) -> Result<T, ApiError> {
    let form = multipart_form(draft, files)?;
    let url = api_url(&format!("{}/{}", T::BASE_PATH, id));
    let request = authorize(Request::put(&url))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send_for_record(request).await
}

fn multipart_form<D: Serialize>(
    draft: &D,
    files: &[web_sys::File],
) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("FormData is not available".to_string()))?;
    let payload = serde_json::to_string(draft).map_err(|e| ApiError::Network(e.to_string()))?;
    form.append_with_str("payload", &payload)
        .map_err(|_| ApiError::Network("Failed to build multipart payload".to_string()))?;
    for file in files {
        form.append_with_blob_and_filename("attachments", file, &file.name())
            .map_err(|_| ApiError::Network("Failed to attach file".to_string()))?;
    }
    Ok(form)
}

async fn send_for_record<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let (status, body) = read_body(response).await?;
    if !(200..300).contains(&status) {
        return Err(http_error(status, &body));
    }
    decode_one(status, &body)
}

async fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}

/// Builds the typed failure for a non-2xx response, probing the JSON body
/// for a server-supplied message before falling back to the status line.
fn http_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| format!("HTTP {}", status));
    ApiError::Http { status, message }
}

/// Decodes a list body. The legacy API answers a bare JSON object instead
/// of an array for some empty collections; that case decodes as the empty
/// list rather than an error.
fn decode_list<T: DeserializeOwned>(status: u16, body: &str) -> Result<Vec<T>, ApiError> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Array(_)) => serde_json::from_str::<Vec<T>>(body).map_err(|e| {
            ApiError::Http {
                status,
                message: format!("Unexpected list payload: {}", e),
            }
        }),
        Ok(_) => Ok(Vec::new()),
        Err(e) => Err(ApiError::Http {
            status,
            message: format!("Response was not valid JSON: {}", e),
        }),
    }
}

fn decode_one<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<T>(body).map_err(|e| ApiError::Http {
        status,
        message: format!("Response was not valid JSON: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_currency::Currency;

    #[test]
    fn list_decoding_accepts_an_array() {
        let body = r#"[{"ID":1,"Code":"PHP","Name":"Philippine Peso"}]"#;
        let items: Vec<Currency> = decode_list(200, body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].code, "PHP");
    }

    #[test]
    fn non_array_payload_coerces_to_empty_list() {
        let items: Vec<Currency> = decode_list(200, r#"{"message":"no data"}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn unparseable_body_is_an_http_failure() {
        let err = decode_list::<Currency>(200, "<html>proxy timeout</html>").unwrap_err();
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn http_error_prefers_the_server_message() {
        let err = http_error(500, r#"{"message":"Internal Server Error"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "Internal Server Error".to_string()
            }
        );
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[test]
    fn http_error_falls_back_to_the_status_line() {
        let err = http_error(502, "Bad Gateway");
        assert_eq!(err.to_string(), "HTTP 502");
    }
}
