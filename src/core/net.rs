use serde::de::DeserializeOwned;

use crate::core::PdlError;

/// Read the response body and decode it as JSON.
///
/// Non-2xx responses become [`PdlError::Status`] with the body attached
/// verbatim, so callers never see a half-decoded provider error payload.
pub(crate) async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, PdlError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(PdlError::Status {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str::<T>(&body).map_err(PdlError::Json)
}
