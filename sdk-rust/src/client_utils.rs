use crate::{GenerationError, GenerationResult};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Response,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;

/// Create a JSON request, parse the response.
/// Returns `BackendError` with the provider's message on a non-success
/// status code.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: HeaderMap,
    provider: &'static str,
    fallback_message: &str,
) -> GenerationResult<R> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response.json::<R>().await?)
    } else {
        Err(GenerationError::BackendError {
            provider,
            status,
            message: provider_error_message(response, fallback_message).await,
        })
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Read `error.message` from an error body, or use `fallback` when the body
/// is not JSON or does not carry a message.
async fn provider_error_message(response: Response, fallback: &str) -> String {
    response
        .json::<ErrorEnvelope>()
        .await
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Build a header value from a secret without echoing the secret in the
/// error.
pub fn secret_header_value(
    value: &str,
    provider: &'static str,
) -> GenerationResult<HeaderValue> {
    let mut header = HeaderValue::from_str(value).map_err(|_| {
        GenerationError::InvalidInput(format!(
            "The {provider} API key contains characters that are not allowed in a header"
        ))
    })?;
    header.set_sensitive(true);
    Ok(header)
}

/// Copy user supplied headers into `headers`.
pub fn insert_extra_headers(
    headers: &mut HeaderMap,
    extra: &HashMap<String, String>,
    provider: &'static str,
) -> GenerationResult<()> {
    for (key, value) in extra {
        let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
            GenerationError::InvalidInput(format!(
                "Invalid {provider} header name '{key}': {error}"
            ))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|error| {
            GenerationError::InvalidInput(format!(
                "Invalid {provider} header value for '{key}': {error}"
            ))
        })?;
        headers.insert(header_name, header_value);
    }

    Ok(())
}
