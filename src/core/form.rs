//! Reservation form state.
//!
//! `FormState` is an immutable value: every setter returns a new state. The
//! date reducer is the only one that touches slot calculation, and it keeps
//! the selected time consistent with the slots offered for the new date.

use crate::api::models::BookingRequest;
use crate::core::slots::{compose_slot, time_slots};
use crate::errors::{AppError, AppResult};
use crate::utils::date::today_iso;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.trim().to_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub date: String,
    pub time: String,
    pub guests: Option<u32>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty form preset to today's date and its first slot.
    pub fn for_today() -> AppResult<Self> {
        Self::new().with_date(&today_iso())
    }

    /// Set the date and re-resolve the time against that date's slots:
    /// - no date: time left as is
    /// - no slots: time cleared
    /// - current time offered: kept
    /// - otherwise: first slot of the day
    pub fn with_date(&self, date: &str) -> AppResult<Self> {
        let date = date.trim().to_string();
        if date.is_empty() {
            return Ok(Self {
                date,
                ..self.clone()
            });
        }

        let slots: Vec<String> = time_slots(Some(&date))?
            .iter()
            .map(ToString::to_string)
            .collect();

        let time = match slots.first() {
            None => String::new(),
            Some(_) if slots.contains(&self.time) => self.time.clone(),
            Some(first) => first.clone(),
        };

        Ok(Self {
            date,
            time,
            ..self.clone()
        })
    }

    pub fn with_time(&self, time: &str) -> Self {
        Self {
            time: time.trim().to_string(),
            ..self.clone()
        }
    }

    pub fn with_guests(&self, guests: Option<u32>) -> Self {
        Self {
            guests,
            ..self.clone()
        }
    }

    pub fn with_name(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    pub fn with_email(&self, email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..self.clone()
        }
    }

    pub fn with_phone(&self, phone: &str) -> Self {
        Self {
            phone: phone.to_string(),
            ..self.clone()
        }
    }

    /// Composed `YYYY-MM-DDTHH:MM`, empty until both date and time are set.
    pub fn time_slot(&self) -> String {
        compose_slot(Some(&self.date), Some(&self.time))
    }

    /// First failing rule as a user-facing message.
    pub fn validate(&self) -> Result<(), String> {
        if self.date.is_empty() {
            return Err("Please choose a date.".into());
        }
        if self.time.is_empty() {
            return Err("Please choose a time.".into());
        }
        if !matches!(self.guests, Some(g) if g > 0) {
            return Err("Guests must be a positive number.".into());
        }
        if self.name.trim().is_empty() {
            return Err("Name is required.".into());
        }
        if !is_valid_email(&self.email) {
            return Err("Email is invalid.".into());
        }
        Ok(())
    }

    /// Validated, normalized booking payload.
    pub fn booking_request(&self) -> AppResult<BookingRequest> {
        self.validate().map_err(AppError::Validation)?;

        let phone = self.phone.trim();

        Ok(BookingRequest {
            time_slot: self.time_slot(),
            guests: self.guests.unwrap_or_default(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        })
    }
}
