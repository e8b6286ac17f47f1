//! Multi-statement writes that must land together.

use rusqlite::TransactionBehavior;

use crate::error::{Error, Result};
use crate::{Reservation, Room};

use super::connection::Database;
use super::operations::{insert_reservation_row, update_reservation_row, update_room_row};

impl Database {
    /// Stores a new booking: inserts the reservation and rewrites the room's
    /// availability in one transaction.
    ///
    /// Returns the row id of the inserted reservation.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the room is not stored; the transaction is rolled
    /// back and nothing is written.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hotel::database::{Database, DatabaseConfig};
    /// use hotel::reservation::parse_date;
    /// use hotel::{HotelManager, Reservation, ReservationKey};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/hotel.db")).unwrap();
    /// let mut manager = db.load_manager().unwrap();
    /// let booked = manager
    ///     .book_room(Reservation::new(
    ///         ReservationKey::new("CF1", 101),
    ///         parse_date("2024-01-10").unwrap(),
    ///         parse_date("2024-01-12").unwrap(),
    ///     ))
    ///     .unwrap()
    ///     .clone();
    /// let room = manager.find_room(101).unwrap();
    /// db.record_booking(&booked, room).unwrap();
    /// ```
    pub fn record_booking(&mut self, reservation: &Reservation, room: &Room) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let id = insert_reservation_row(&tx, reservation)?;
        if !update_room_row(&tx, room)? {
            return Err(Error::room_not_found(room.number()));
        }

        tx.commit()?;
        Ok(id)
    }

    /// Stores a cancellation: rewrites the reservation's active row and, when
    /// the room still exists, its availability, in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no active row matches the reservation; the
    /// transaction is rolled back.
    pub fn record_cancellation(&mut self, reservation: &Reservation, room: Option<&Room>) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !update_reservation_row(&tx, reservation)? {
            return Err(Error::NotFound {
                resource: format!("active reservation {}", reservation.key()),
            });
        }
        if let Some(room) = room {
            update_room_row(&tx, room)?;
        }

        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, date};
    use crate::{ReservationKey, ReservationStatus};

    fn sample_reservation() -> Reservation {
        Reservation::new(
            ReservationKey::new("CF1", 101),
            date("2024-01-10"),
            date("2024-01-12"),
        )
    }

    #[test]
    fn test_record_booking_writes_both_rows() {
        let mut db = create_test_database();
        db.insert_room(&Room::standard(101, 100.0)).unwrap();

        let booked_room = Room::standard(101, 100.0).with_availability(false);
        db.record_booking(&sample_reservation(), &booked_room).unwrap();

        let room = Database::get_room(db.connection(), 101).unwrap().unwrap();
        assert!(!room.is_available());
        assert_eq!(
            Database::list_reservations(db.connection()).unwrap(),
            vec![sample_reservation()]
        );
    }

    #[test]
    fn test_record_booking_rolls_back_for_missing_room() {
        let mut db = create_test_database();

        let err = db
            .record_booking(&sample_reservation(), &Room::standard(101, 100.0))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(Database::list_reservations(db.connection()).unwrap().is_empty());
    }

    #[test]
    fn test_record_cancellation() {
        let mut db = create_test_database();
        db.insert_room(&Room::standard(101, 100.0)).unwrap();
        db.record_booking(
            &sample_reservation(),
            &Room::standard(101, 100.0).with_availability(false),
        )
        .unwrap();

        let cancelled = sample_reservation().with_status(ReservationStatus::Cancelled);
        db.record_cancellation(&cancelled, Some(&Room::standard(101, 100.0)))
            .unwrap();

        assert!(Database::get_room(db.connection(), 101).unwrap().unwrap().is_available());
        assert_eq!(
            Database::list_reservations(db.connection()).unwrap(),
            vec![cancelled.clone()]
        );

        // no active row remains
        assert!(db.record_cancellation(&cancelled, None).unwrap_err().is_not_found());
    }

    #[test]
    fn test_record_cancellation_for_removed_room() {
        let mut db = create_test_database();
        db.insert_reservation(&sample_reservation()).unwrap();

        let cancelled = sample_reservation().with_status(ReservationStatus::Cancelled);
        db.record_cancellation(&cancelled, None).unwrap();

        assert_eq!(
            Database::list_reservations(db.connection()).unwrap()[0].status(),
            ReservationStatus::Cancelled
        );
    }
}
