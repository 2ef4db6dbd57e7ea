use crate::api::backend::ReservationBackend;
use crate::api::models::BookingResponse;
use crate::core::form::FormState;
use crate::errors::{AppError, AppResult};
use crate::utils::time::clock_part;

pub const FALLBACK_MESSAGE: &str = "Reservation failed.";

pub struct BookingLogic;

impl BookingLogic {
    /// Validate the form and post it. A refused booking is an
    /// `AppError::Backend` carrying the backend's message.
    pub async fn submit<B: ReservationBackend>(
        backend: &B,
        form: &FormState,
    ) -> AppResult<BookingResponse> {
        let request = form.booking_request()?;
        let res = backend.book(&request).await?;

        if !res.ok {
            let message = res
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            return Err(AppError::Backend(message));
        }

        Ok(res)
    }

    /// Human-readable confirmation lines for a successful booking.
    pub fn confirmation_lines(res: &BookingResponse) -> Vec<String> {
        let mut lines = vec![format!(
            "Success. {}",
            res.message.as_deref().unwrap_or("Reservation confirmed.")
        )];

        match res.tables().as_slice() {
            [] => {}
            [one] => lines.push(format!("Table: {one}")),
            many => {
                let list: Vec<String> = many.iter().map(ToString::to_string).collect();
                lines.push(format!("Tables: {}", list.join(", ")));
            }
        }

        if let Some(end) = res.end_time.as_deref().and_then(clock_part) {
            lines.push(format!("Ends at {end}"));
        }

        lines
    }
}
