//! HTTP rendering of a normalized upstream outcome

use avatar_relay::NormalizedResult;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Response wrapper for every relayed route
pub struct Relayed(pub NormalizedResult);

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.into_body())).into_response()
    }
}

impl From<NormalizedResult> for Relayed {
    fn from(result: NormalizedResult) -> Self {
        Self(result)
    }
}
