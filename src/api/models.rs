//! Wire models of the reservation backend (`/api/*`).
//!
//! Response bodies derive `Default` and default every field: a body that does
//! not decode is treated as an empty object, which reads as `ok: false`.

use serde::{Deserialize, Serialize};

/// `GET /api/reservations/availability`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityResponse {
    pub ok: bool,
    pub fully_booked: bool,
    pub available_tables: u32,
    pub table_count: u32,
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `POST /api/reservations` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub time_slot: String,
    pub guests: u32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// `POST /api/reservations` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingResponse {
    pub ok: bool,
    pub message: Option<String>,
    pub table_number: Option<u32>,
    pub table_numbers: Option<Vec<u32>>,
    pub tables_booked: Option<u32>,
    pub end_time: Option<String>,
    pub time_slot: Option<String>,
    pub guests: Option<u32>,
}

impl BookingResponse {
    /// Tables assigned to the booking, whichever shape the backend used.
    pub fn tables(&self) -> Vec<u32> {
        match (&self.table_numbers, self.table_number) {
            (Some(many), _) if !many.is_empty() => many.clone(),
            (_, Some(one)) => vec![one],
            _ => Vec::new(),
        }
    }
}

/// `GET /api/health`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
}
