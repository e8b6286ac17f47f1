//! Front desk: the manager plus the store it is mirrored to.
//!
//! Every mutation runs against the [`HotelManager`] first; only a successful
//! change is written through to the [`Database`]. A failed manager call
//! leaves both untouched.

use chrono::NaiveDate;
use hotel::{Client, Database, Error, HotelManager, Reservation, Result, Room};

/// Owns the in-memory registries and the database connection.
#[derive(Debug)]
pub struct FrontDesk {
    manager: HotelManager,
    db: Database,
}

impl FrontDesk {
    /// Loads the stored records and takes ownership of the connection.
    pub fn open(db: Database) -> Result<Self> {
        let manager = db.load_manager()?;
        Ok(Self { manager, db })
    }

    /// Read access to the registries.
    pub fn manager(&self) -> &HotelManager {
        &self.manager
    }

    /// Closes the database connection.
    pub fn close(self) -> Result<()> {
        self.db.close()
    }

    /// Registers a room.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` if the number is taken; store errors otherwise.
    pub fn add_room(&mut self, room: Room) -> Result<()> {
        self.manager.add_room(room.clone())?;
        self.db.insert_room(&room)
    }

    /// Sets a room's nightly rate and returns the updated room.
    pub fn update_room_price(&mut self, number: u32, rate: f64) -> Result<Room> {
        let room = self.manager.update_room_price(number, rate)?.clone();
        self.db.update_room(&room)?;
        Ok(room)
    }

    /// Applies the room's category discount.
    pub fn apply_discount(&mut self, number: u32) -> Result<Room> {
        let room = self.manager.apply_discount(number)?.clone();
        self.db.update_room(&room)?;
        Ok(room)
    }

    /// Removes every room with this number; returns how many were removed.
    ///
    /// The store is written first, so a failed delete leaves the registries
    /// as they were.
    ///
    /// # Errors
    ///
    /// `RoomOccupied` while the room has an active reservation; store errors
    /// otherwise.
    pub fn remove_room(&mut self, number: u32) -> Result<usize> {
        self.manager.ensure_room_removable(number)?;
        if self.manager.find_room(number).is_some() {
            self.db.delete_room(number)?;
        }
        self.manager.remove_room(number)
    }

    /// Registers a client.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` if the national id is taken; store errors otherwise.
    pub fn register_client(&mut self, client: Client) -> Result<()> {
        self.manager.register_client(client.clone())?;
        self.db.insert_client(&client)
    }

    /// Replaces a client's names.
    pub fn update_client(
        &mut self,
        national_id: &str,
        first_names: &str,
        last_names: &str,
    ) -> Result<Client> {
        let client = self
            .manager
            .update_client(national_id, first_names, last_names)?
            .clone();
        self.db.update_client(&client)?;
        Ok(client)
    }

    /// Books a room and stores the reservation with the room's new
    /// availability in one transaction.
    ///
    /// # Errors
    ///
    /// `RoomUnavailable` or `NotFound` from the booking rules; store errors
    /// otherwise.
    pub fn book_room(&mut self, reservation: Reservation) -> Result<Reservation> {
        let booked = self.manager.book_room(reservation)?.clone();
        let room = self
            .manager
            .find_room(booked.room_number())
            .ok_or_else(|| Error::room_not_found(booked.room_number()))?;
        self.db.record_booking(&booked, room)?;
        Ok(booked)
    }

    /// Moves the dates of a client's active reservation for a room.
    pub fn update_reservation_dates(
        &mut self,
        national_id: &str,
        room_number: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Reservation> {
        let updated = self
            .manager
            .update_reservation_dates(national_id, room_number, check_in, check_out)?
            .clone();
        self.db.update_reservation(&updated)?;
        Ok(updated)
    }

    /// Cancels a client's active reservation for a room and frees the room.
    pub fn cancel_reservation(&mut self, national_id: &str, room_number: u32) -> Result<Reservation> {
        let cancelled = self
            .manager
            .cancel_reservation(national_id, room_number)?
            .clone();
        self.db
            .record_cancellation(&cancelled, self.manager.find_room(room_number))?;
        Ok(cancelled)
    }
}
