#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hotel
//!
//! A library for running a small hotel's front desk: rooms, clients, and
//! reservations, kept in memory and mirrored to `SQLite`.
//!
//! ## Core Types
//!
//! - [`Room`] and [`RoomCategory`]: rooms with category-specific discounts
//! - [`Client`]: guests identified by national id
//! - [`Reservation`], [`ReservationKey`], [`ReservationStatus`]: bookings
//! - [`HotelManager`]: the in-memory registries and business rules
//! - [`Database`]: the `SQLite` persistence adapter
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use hotel::{Client, HotelManager, Reservation, ReservationKey, Room};
//! use hotel::reservation::parse_date;
//!
//! let mut manager = HotelManager::new();
//! manager.add_room(Room::standard(101, 100.0)).unwrap();
//! manager.register_client(Client::new("Ana", "Lopez", "CF1")).unwrap();
//!
//! manager
//!     .book_room(Reservation::new(
//!         ReservationKey::new("CF1", 101),
//!         parse_date("2024-01-10").unwrap(),
//!         parse_date("2024-01-12").unwrap(),
//!     ))
//!     .unwrap();
//! assert!(!manager.find_room(101).unwrap().is_available());
//!
//! manager.cancel_reservation("CF1", 101).unwrap();
//! assert!(manager.find_room(101).unwrap().is_available());
//! ```

pub mod client;
pub mod config;
pub mod database;
pub mod error;
pub mod init;
pub mod logging;
pub mod manager;
pub mod reservation;
pub mod room;

pub use client::Client;
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use manager::{DateRange, HotelManager};
pub use reservation::{Reservation, ReservationKey, ReservationStatus};
pub use room::{Room, RoomCategory};
