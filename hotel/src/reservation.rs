//! Reservation types for tracking room bookings.
//!
//! A reservation binds a client to a room for a pair of dates. It is looked
//! up by the natural key (client national id, room number).

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Date format used for input and storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
///
/// A trailing time component (`YYYY-MM-DDTHH:MM:SS`) is accepted and dropped,
/// so rows written with full timestamps still load.
///
/// # Errors
///
/// Returns a validation error if the value is not a valid date.
///
/// # Examples
///
/// ```
/// use hotel::reservation::parse_date;
///
/// let date = parse_date("2024-01-10").unwrap();
/// assert_eq!(parse_date("2024-01-10T00:00:00").unwrap(), date);
/// assert!(parse_date("10/01/2024").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<NaiveDate, Error> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date())
        })
        .map_err(|e| Error::Validation {
            field: "date".into(),
            message: format!("'{trimmed}' is not a YYYY-MM-DD date: {e}"),
        })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A unique lookup key for a reservation.
///
/// # Examples
///
/// ```
/// use hotel::ReservationKey;
///
/// let key = ReservationKey::new("CF1", 101);
/// assert_eq!(format!("{key}"), "CF1:101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationKey {
    /// National id of the client holding the reservation.
    pub national_id: String,
    /// Number of the reserved room.
    pub room_number: u32,
}

impl ReservationKey {
    /// Creates a new reservation key.
    #[must_use]
    pub fn new(national_id: impl Into<String>, room_number: u32) -> Self {
        Self {
            national_id: national_id.into(),
            room_number,
        }
    }
}

impl fmt::Display for ReservationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.national_id, self.room_number)
    }
}

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// The room is held for the client.
    #[default]
    Active,
    /// The reservation was cancelled; the record is kept.
    Cancelled,
}

impl ReservationStatus {
    /// Returns the label stored in the database.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReservationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("active") => Ok(Self::Active),
            v if v.eq_ignore_ascii_case("cancelled") => Ok(Self::Cancelled),
            other => Err(Error::Validation {
                field: "status".into(),
                message: format!("unknown reservation status '{other}'"),
            }),
        }
    }
}

/// A room booking.
///
/// Check-out is not required to follow check-in.
///
/// # Examples
///
/// ```
/// use hotel::{Reservation, ReservationKey, ReservationStatus};
/// use hotel::reservation::parse_date;
///
/// let reservation = Reservation::new(
///     ReservationKey::new("CF1", 101),
///     parse_date("2024-01-10").unwrap(),
///     parse_date("2024-01-12").unwrap(),
/// );
/// assert_eq!(reservation.status(), ReservationStatus::Active);
/// assert_eq!(reservation.nights(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    key: ReservationKey,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: ReservationStatus,
}

impl Reservation {
    /// Creates an active reservation.
    #[must_use]
    pub const fn new(key: ReservationKey, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            key,
            check_in,
            check_out,
            status: ReservationStatus::Active,
        }
    }

    /// Sets the status, used when restoring persisted reservations.
    #[must_use]
    pub const fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the reservation key.
    #[must_use]
    pub const fn key(&self) -> &ReservationKey {
        &self.key
    }

    /// Returns the national id of the client.
    #[must_use]
    pub fn national_id(&self) -> &str {
        &self.key.national_id
    }

    /// Returns the reserved room number.
    #[must_use]
    pub const fn room_number(&self) -> u32 {
        self.key.room_number
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns whether the reservation is still active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// Number of nights between check-in and check-out; negative when the
    /// dates are reversed.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub(crate) fn reschedule(&mut self, check_in: NaiveDate, check_out: NaiveDate) {
        self.check_in = check_in;
        self.check_out = check_out;
    }

    pub(crate) fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room: {}, Check-in: {}, Check-out: {}, Status: {}",
            self.key.room_number,
            format_date(self.check_in),
            format_date(self.check_out),
            self.status
        )
    }
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
