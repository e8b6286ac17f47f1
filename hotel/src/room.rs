//! Room types and category-specific pricing.
//!
//! A room's category is a closed set; each category carries its own display
//! label and discount factor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The category of a room.
///
/// # Examples
///
/// ```
/// use hotel::RoomCategory;
///
/// assert_eq!(RoomCategory::Suite.label(), "Suite");
/// assert_eq!("deluxe".parse::<RoomCategory>().unwrap(), RoomCategory::Deluxe);
/// assert_eq!("1".parse::<RoomCategory>().unwrap(), RoomCategory::Standard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    /// Standard room, 5% discount.
    Standard,
    /// Suite, 10% discount.
    Suite,
    /// Deluxe room, 15% discount.
    Deluxe,
}

impl RoomCategory {
    /// All categories in menu order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Suite, Self::Deluxe];

    /// Returns the human-readable label stored alongside the room.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Suite => "Suite",
            Self::Deluxe => "Deluxe",
        }
    }

    /// Returns the multiplier applied to the nightly rate by a discount.
    #[must_use]
    pub const fn discount_factor(self) -> f64 {
        match self {
            Self::Standard => 0.95,
            Self::Suite => 0.90,
            Self::Deluxe => 0.85,
        }
    }

    /// Returns the number used for this category in the console menu.
    #[must_use]
    pub const fn menu_code(self) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Suite => 2,
            Self::Deluxe => 3,
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoomCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.label().eq_ignore_ascii_case(trimmed) || c.menu_code().to_string() == trimmed
            })
            .ok_or_else(|| Error::Validation {
                field: "category".into(),
                message: format!("unknown room category '{trimmed}' (expected Standard, Suite or Deluxe)"),
            })
    }
}

/// A hotel room.
///
/// # Examples
///
/// ```
/// use hotel::{Room, RoomCategory};
///
/// let mut room = Room::deluxe(301, 200.0);
/// assert_eq!(room.category(), RoomCategory::Deluxe);
/// assert!(room.is_available());
///
/// room.apply_discount();
/// assert!((room.nightly_rate() - 170.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    number: u32,
    category: RoomCategory,
    nightly_rate: f64,
    is_available: bool,
}

impl Room {
    /// Creates an available room.
    #[must_use]
    pub const fn new(number: u32, category: RoomCategory, nightly_rate: f64) -> Self {
        Self {
            number,
            category,
            nightly_rate,
            is_available: true,
        }
    }

    /// Creates an available Standard room.
    #[must_use]
    pub const fn standard(number: u32, nightly_rate: f64) -> Self {
        Self::new(number, RoomCategory::Standard, nightly_rate)
    }

    /// Creates an available Suite.
    #[must_use]
    pub const fn suite(number: u32, nightly_rate: f64) -> Self {
        Self::new(number, RoomCategory::Suite, nightly_rate)
    }

    /// Creates an available Deluxe room.
    #[must_use]
    pub const fn deluxe(number: u32, nightly_rate: f64) -> Self {
        Self::new(number, RoomCategory::Deluxe, nightly_rate)
    }

    /// Sets the availability flag, used when restoring persisted rooms.
    #[must_use]
    pub const fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Returns the room number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns the room category.
    #[must_use]
    pub const fn category(&self) -> RoomCategory {
        self.category
    }

    /// Returns the nightly rate.
    #[must_use]
    pub const fn nightly_rate(&self) -> f64 {
        self.nightly_rate
    }

    /// Returns whether the room can be booked.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.is_available
    }

    /// Multiplies the nightly rate by the category's discount factor.
    pub fn apply_discount(&mut self) {
        self.nightly_rate *= self.category.discount_factor();
    }

    pub(crate) fn set_nightly_rate(&mut self, rate: f64) {
        self.nightly_rate = rate;
    }

    pub(crate) fn set_available(&mut self, is_available: bool) {
        self.is_available = is_available;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number: {}, Category: {}, Rate: ${:.2}",
            self.number, self.category, self.nightly_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_category() {
        assert_eq!(Room::standard(1, 10.0).category(), RoomCategory::Standard);
        assert_eq!(Room::suite(2, 10.0).category(), RoomCategory::Suite);
        assert_eq!(Room::deluxe(3, 10.0).category(), RoomCategory::Deluxe);
    }

    #[test]
    fn test_new_room_is_available() {
        let room = Room::standard(101, 100.0);
        assert!(room.is_available());
        assert!(!room.with_availability(false).is_available());
    }

    #[test]
    fn test_discount_factors() {
        let mut standard = Room::standard(1, 100.0);
        let mut suite = Room::suite(2, 100.0);
        let mut deluxe = Room::deluxe(3, 100.0);
        standard.apply_discount();
        suite.apply_discount();
        deluxe.apply_discount();

        assert!((standard.nightly_rate() - 95.0).abs() < 1e-9);
        assert!((suite.nightly_rate() - 90.0).abs() < 1e-9);
        assert!((deluxe.nightly_rate() - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_discount_compounds() {
        let mut room = Room::suite(2, 100.0);
        room.apply_discount();
        room.apply_discount();
        assert!((room.nightly_rate() - 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Standard".parse::<RoomCategory>().unwrap(), RoomCategory::Standard);
        assert_eq!(" SUITE ".parse::<RoomCategory>().unwrap(), RoomCategory::Suite);
        assert_eq!("3".parse::<RoomCategory>().unwrap(), RoomCategory::Deluxe);
        assert!("4".parse::<RoomCategory>().is_err());
        assert!("penthouse".parse::<RoomCategory>().is_err());
    }

    #[test]
    fn test_category_label_round_trip() {
        for category in RoomCategory::ALL {
            assert_eq!(category.label().parse::<RoomCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_room_display() {
        let room = Room::standard(101, 100.0);
        assert_eq!(room.to_string(), "Number: 101, Category: Standard, Rate: $100.00");
    }
}
