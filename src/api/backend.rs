//! Reservation backend seam and its HTTP implementation.

use crate::api::models::{AvailabilityResponse, BookingRequest, BookingResponse, HealthResponse};
use crate::errors::{AppError, AppResult};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

const AVAILABILITY_PATH: &str = "/api/reservations/availability";
const RESERVATIONS_PATH: &str = "/api/reservations";
const HEALTH_PATH: &str = "/api/health";

/// Calls the reservation subsystem needs from the backend.
///
/// A non-success HTTP status is not an error here: it comes back as a
/// response with `ok == false`. Errors are reserved for transport failures.
#[allow(async_fn_in_trait)]
pub trait ReservationBackend {
    async fn availability(
        &self,
        time_slot: &str,
        guests: Option<u32>,
    ) -> AppResult<AvailabilityResponse>;

    async fn book(&self, request: &BookingRequest) -> AppResult<BookingResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: Url,
    client: Client,
}

impl HttpBackend {
    pub fn new(api_base: &str, timeout: Duration) -> AppResult<Self> {
        let base = Url::parse(api_base)
            .map_err(|e| AppError::Config(format!("invalid api_base '{api_base}': {e}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "invalid api_base '{api_base}': not an http(s) URL"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { base, client })
    }

    /// `api_base` may carry a path prefix (e.g. behind a proxy), so endpoints
    /// are appended to it rather than resolved against it.
    fn endpoint(&self, path: &str) -> AppResult<Url> {
        let joined = format!("{}{}", self.base.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|e| AppError::Config(format!("invalid endpoint {joined}: {e}")))
    }

    pub async fn health(&self) -> AppResult<HealthResponse> {
        let res = self.client.get(self.endpoint(HEALTH_PATH)?).send().await?;
        let (ok, body) = lenient_body::<HealthResponse>(res).await?;
        Ok(HealthResponse {
            ok: ok && body.ok,
            ..body
        })
    }
}

impl ReservationBackend for HttpBackend {
    async fn availability(
        &self,
        time_slot: &str,
        guests: Option<u32>,
    ) -> AppResult<AvailabilityResponse> {
        let mut query = vec![("timeSlot", time_slot.to_string())];
        if let Some(g) = guests {
            query.push(("guests", g.to_string()));
        }

        let res = self
            .client
            .get(self.endpoint(AVAILABILITY_PATH)?)
            .query(&query)
            .send()
            .await?;

        let (ok, body) = lenient_body::<AvailabilityResponse>(res).await?;
        Ok(AvailabilityResponse {
            ok: ok && body.ok,
            ..body
        })
    }

    async fn book(&self, request: &BookingRequest) -> AppResult<BookingResponse> {
        let res = self
            .client
            .post(self.endpoint(RESERVATIONS_PATH)?)
            .json(request)
            .send()
            .await?;

        let (ok, body) = lenient_body::<BookingResponse>(res).await?;
        Ok(BookingResponse {
            ok: ok && body.ok,
            ..body
        })
    }
}

/// Status flag plus the decoded body; an undecodable body becomes `T::default()`.
async fn lenient_body<T>(res: Response) -> AppResult<(bool, T)>
where
    T: DeserializeOwned + Default,
{
    let ok = res.status().is_success();
    let bytes = res.bytes().await?;
    let body = serde_json::from_slice(&bytes).unwrap_or_default();
    Ok((ok, body))
}
