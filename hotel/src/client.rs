//! Client records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A hotel client, identified by a national id (DPI).
///
/// The client's reservations live in the manager's registry; the client keeps
/// their positions in booking order.
///
/// # Examples
///
/// ```
/// use hotel::Client;
///
/// let client = Client::new("Ana", "Lopez", "CF1");
/// assert_eq!(client.national_id(), "CF1");
/// assert_eq!(client.full_name(), "Ana Lopez");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    first_names: String,
    last_names: String,
    national_id: String,
    #[serde(skip)]
    reservations: Vec<usize>,
}

impl Client {
    /// Creates a client with no reservations.
    #[must_use]
    pub fn new(
        first_names: impl Into<String>,
        last_names: impl Into<String>,
        national_id: impl Into<String>,
    ) -> Self {
        Self {
            first_names: first_names.into(),
            last_names: last_names.into(),
            national_id: national_id.into(),
            reservations: Vec::new(),
        }
    }

    /// Returns the client's first names.
    #[must_use]
    pub fn first_names(&self) -> &str {
        &self.first_names
    }

    /// Returns the client's last names.
    #[must_use]
    pub fn last_names(&self) -> &str {
        &self.last_names
    }

    /// Returns the client's national id.
    #[must_use]
    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    /// Returns first and last names separated by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
    }

    /// Returns how many reservations the client has made.
    #[must_use]
    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    pub(crate) fn rename(&mut self, first_names: String, last_names: String) {
        self.first_names = first_names;
        self.last_names = last_names;
    }

    /// Registry positions of this client's reservations, in booking order.
    pub(crate) fn reservation_slots(&self) -> &[usize] {
        &self.reservations
    }

    pub(crate) fn push_reservation_slot(&mut self, slot: usize) {
        self.reservations.push(slot);
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.national_id)
    }
}
