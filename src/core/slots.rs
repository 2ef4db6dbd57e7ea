//! Reservation slot calculation.
//!
//! Everything here is a pure function of the calendar date: the weekday picks
//! one of three opening-hours buckets, the bucket yields the operating window
//! and the display label, and the window yields the list of start times.
//!
//! Dates are timezone-less civil dates (`NaiveDate`); the weekday is taken
//! from the civil date itself, so no zone conversion can shift it.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{non_blank, parse_date};
use crate::utils::time::format_minute_of_day;
use chrono::{Datelike, Weekday};
use serde::Serialize;
use std::fmt;

/// Every booking occupies a table for this long.
pub const RESERVATION_DURATION_MINUTES: u16 = 60;

/// Start times are offered every 30 minutes from opening.
pub const SLOT_STEP_MINUTES: u16 = 30;

/// Day of week, Sunday = 0 … Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub fn index(self) -> u8 {
        self.0
    }

    /// All seven days, Sunday first.
    pub fn all() -> impl Iterator<Item = DayOfWeek> {
        (0..=6).map(DayOfWeek)
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(w: Weekday) -> Self {
        DayOfWeek(w.num_days_from_sunday() as u8)
    }
}

/// Opening and closing minute of the day, `open < close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    pub open: u16,
    pub close: u16,
}

impl OperatingWindow {
    const fn hours(open_hour: u16, close_hour: u16) -> Self {
        Self {
            open: open_hour * 60,
            close: close_hour * 60,
        }
    }

    /// Latest start that still ends by closing time, `None` when the window is
    /// shorter than one reservation.
    pub fn last_start(&self) -> Option<u16> {
        self.close
            .checked_sub(RESERVATION_DURATION_MINUTES)
            .filter(|last| *last >= self.open)
    }
}

/// A valid reservation start time, rendered `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservationSlot {
    minute_of_day: u16,
}

impl ReservationSlot {
    pub fn minute_of_day(&self) -> u16 {
        self.minute_of_day
    }

    /// Minute of day at which the reservation ends.
    pub fn end_minute(&self) -> u16 {
        self.minute_of_day + RESERVATION_DURATION_MINUTES
    }
}

impl fmt::Display for ReservationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minute_of_day(self.minute_of_day))
    }
}

impl Serialize for ReservationSlot {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// The three opening-hours buckets of the week.
///
/// Both the operating window and the display label are derived from the
/// bucket, which keeps what the user reads and what the slot math uses in step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursBucket {
    MonThu,
    FriSat,
    Sunday,
}

impl HoursBucket {
    pub fn for_day(dow: DayOfWeek) -> Self {
        match dow.index() {
            1..=4 => HoursBucket::MonThu,
            5 | 6 => HoursBucket::FriSat,
            _ => HoursBucket::Sunday,
        }
    }

    pub fn window(self) -> OperatingWindow {
        match self {
            HoursBucket::MonThu => OperatingWindow::hours(17, 22),
            HoursBucket::FriSat => OperatingWindow::hours(17, 23),
            HoursBucket::Sunday => OperatingWindow::hours(11, 15),
        }
    }

    pub fn days(self) -> &'static str {
        match self {
            HoursBucket::MonThu => "Mon–Thu",
            HoursBucket::FriSat => "Fri–Sat",
            HoursBucket::Sunday => "Sun",
        }
    }

    pub fn label(self) -> String {
        let w = self.window();
        format!(
            "{} {}–{}",
            self.days(),
            format_minute_of_day(w.open),
            format_minute_of_day(w.close)
        )
    }
}

/// Weekly schedule in display order.
pub fn weekly_schedule() -> [HoursBucket; 3] {
    [HoursBucket::MonThu, HoursBucket::FriSat, HoursBucket::Sunday]
}

/// Weekday of a `YYYY-MM-DD` date.
pub fn day_of_week(date: &str) -> AppResult<DayOfWeek> {
    let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    Ok(d.weekday().into())
}

/// Opening hours for a weekday. Every day has hours.
pub fn operating_window(dow: DayOfWeek) -> OperatingWindow {
    HoursBucket::for_day(dow).window()
}

/// Start times inside a window, stepping from opening to the last start that
/// still fits a full reservation.
pub fn slots_in_window(window: OperatingWindow) -> Vec<ReservationSlot> {
    let Some(last_start) = window.last_start() else {
        return Vec::new();
    };

    (window.open..=last_start)
        .step_by(SLOT_STEP_MINUTES as usize)
        .map(|minute_of_day| ReservationSlot { minute_of_day })
        .collect()
}

/// Valid reservation start times for a date. No date selected yields an empty
/// list rather than an error.
pub fn time_slots(date: Option<&str>) -> AppResult<Vec<ReservationSlot>> {
    let Some(date) = non_blank(date) else {
        return Ok(Vec::new());
    };

    let dow = day_of_week(date)?;
    Ok(slots_in_window(operating_window(dow)))
}

/// Opening hours label for a date, `""` when no date is selected.
pub fn hours_label(date: Option<&str>) -> AppResult<String> {
    let Some(date) = non_blank(date) else {
        return Ok(String::new());
    };

    Ok(HoursBucket::for_day(day_of_week(date)?).label())
}

/// `YYYY-MM-DDTHH:MM` key used by the backend. Inputs are not validated.
pub fn compose_slot(date: Option<&str>, time: Option<&str>) -> String {
    match (date, time) {
        (Some(d), Some(t)) if !d.is_empty() && !t.is_empty() => format!("{d}T{t}"),
        _ => String::new(),
    }
}
