//! In-memory registries and reservation lifecycle rules.
//!
//! [`HotelManager`] owns every room, client and reservation known to the
//! console. All scans run in insertion order and the first match wins.
//! Nothing here touches the database; callers mirror accepted changes through
//! [`crate::Database`].

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::{Client, Reservation, ReservationKey, Room};

/// A date range supplied to availability queries.
///
/// Availability is a per-room flag, so the range is carried for the caller's
/// benefit only and does not filter results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First night of the stay.
    pub start: NaiveDate,
    /// Day of departure.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range; no ordering is enforced.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// The hotel's management context.
///
/// # Examples
///
/// ```
/// use hotel::{Client, HotelManager, Reservation, ReservationKey, Room};
/// use hotel::reservation::parse_date;
///
/// let mut manager = HotelManager::new();
/// manager.add_room(Room::standard(101, 100.0)).unwrap();
/// manager.register_client(Client::new("Ana", "Lopez", "CF1")).unwrap();
///
/// let reservation = Reservation::new(
///     ReservationKey::new("CF1", 101),
///     parse_date("2024-01-10").unwrap(),
///     parse_date("2024-01-12").unwrap(),
/// );
/// manager.book_room(reservation).unwrap();
/// assert!(!manager.find_room(101).unwrap().is_available());
///
/// manager.cancel_reservation("CF1", 101).unwrap();
/// assert!(manager.find_room(101).unwrap().is_available());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HotelManager {
    rooms: Vec<Room>,
    clients: Vec<Client>,
    reservations: Vec<Reservation>,
}

impl HotelManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a manager from previously persisted records.
    ///
    /// No business rules are applied: rooms keep their stored availability
    /// and reservations keep their stored status. Reservations are attached
    /// to their client in the order given.
    #[must_use]
    pub fn from_parts(rooms: Vec<Room>, clients: Vec<Client>, reservations: Vec<Reservation>) -> Self {
        let mut manager = Self {
            rooms,
            clients,
            reservations,
        };

        for slot in 0..manager.reservations.len() {
            let national_id = manager.reservations[slot].national_id().to_owned();
            if let Some(client) = manager.client_mut(&national_id) {
                client.push_reservation_slot(slot);
            } else {
                log::debug!("reservation in slot {slot} references unknown client {national_id}");
            }
        }

        manager
    }

    // ------------------------------------------------------------------
    // Rooms
    // ------------------------------------------------------------------

    /// Adds a room to the registry.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if a room with the same number exists.
    pub fn add_room(&mut self, room: Room) -> Result<()> {
        if self.find_room(room.number()).is_some() {
            return Err(Error::DuplicateKey {
                entity: "room",
                key: room.number().to_string(),
            });
        }
        log::debug!("adding room {}", room.number());
        self.rooms.push(room);
        Ok(())
    }

    /// Overwrites the nightly rate of a room.
    ///
    /// The rate is taken as given; input validation belongs to the caller.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no room has the given number.
    pub fn update_room_price(&mut self, number: u32, new_rate: f64) -> Result<&Room> {
        let room = self
            .room_mut(number)
            .ok_or_else(|| Error::room_not_found(number))?;
        room.set_nightly_rate(new_rate);
        Ok(room)
    }

    /// Applies the category discount to a room's rate.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no room has the given number.
    pub fn apply_discount(&mut self, number: u32) -> Result<&Room> {
        let room = self
            .room_mut(number)
            .ok_or_else(|| Error::room_not_found(number))?;
        room.apply_discount();
        Ok(room)
    }

    /// Removes every room with the given number and returns how many were
    /// removed. Reservations that referenced the room are kept.
    ///
    /// # Errors
    ///
    /// Returns `RoomOccupied` while an active reservation holds the room;
    /// nothing is removed.
    pub fn remove_room(&mut self, number: u32) -> Result<usize> {
        self.ensure_room_removable(number)?;
        let before = self.rooms.len();
        self.rooms.retain(|room| room.number() != number);
        Ok(before - self.rooms.len())
    }

    /// Checks that [`remove_room`](Self::remove_room) would succeed.
    ///
    /// An unknown room number always passes.
    ///
    /// # Errors
    ///
    /// Returns `RoomOccupied` if the room exists and an active reservation
    /// references its number.
    pub fn ensure_room_removable(&self, number: u32) -> Result<()> {
        let booked = self
            .reservations
            .iter()
            .any(|r| r.room_number() == number && r.is_active());
        if booked && self.find_room(number).is_some() {
            return Err(Error::RoomOccupied { number });
        }
        Ok(())
    }

    /// Returns the first room with the given number.
    #[must_use]
    pub fn find_room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number() == number)
    }

    /// Returns all rooms currently marked available.
    ///
    /// The date range does not influence the result.
    #[must_use]
    pub fn list_available_rooms(&self, _range: &DateRange) -> Vec<&Room> {
        self.rooms.iter().filter(|room| room.is_available()).collect()
    }

    /// Returns every room in insertion order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    fn room_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number() == number)
    }

    // ------------------------------------------------------------------
    // Clients
    // ------------------------------------------------------------------

    /// Registers a client.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if a client with the same national id exists.
    pub fn register_client(&mut self, client: Client) -> Result<()> {
        if self.find_client(client.national_id()).is_some() {
            return Err(Error::DuplicateKey {
                entity: "client",
                key: client.national_id().to_owned(),
            });
        }
        log::debug!("registering client {}", client.national_id());
        self.clients.push(client);
        Ok(())
    }

    /// Replaces a client's names.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no client has the given national id.
    pub fn update_client(
        &mut self,
        national_id: &str,
        first_names: impl Into<String>,
        last_names: impl Into<String>,
    ) -> Result<&Client> {
        let client = self
            .client_mut(national_id)
            .ok_or_else(|| Error::client_not_found(national_id))?;
        client.rename(first_names.into(), last_names.into());
        Ok(client)
    }

    /// Returns the first client with the given national id.
    #[must_use]
    pub fn find_client(&self, national_id: &str) -> Option<&Client> {
        self.clients
            .iter()
            .find(|client| client.national_id() == national_id)
    }

    /// Returns every client in registration order.
    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Returns a client's reservations in booking order.
    ///
    /// Unknown clients have no reservations.
    #[must_use]
    pub fn client_reservations(&self, national_id: &str) -> Vec<&Reservation> {
        self.find_client(national_id)
            .map(|client| {
                client
                    .reservation_slots()
                    .iter()
                    .filter_map(|&slot| self.reservations.get(slot))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn client_mut(&mut self, national_id: &str) -> Option<&mut Client> {
        self.clients
            .iter_mut()
            .find(|client| client.national_id() == national_id)
    }

    // ------------------------------------------------------------------
    // Reservations
    // ------------------------------------------------------------------

    /// Books the reservation's room for its client.
    ///
    /// On success the room becomes unavailable and the reservation is
    /// appended to the registry and to the client's own list. On failure
    /// nothing changes.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the client or the room is not registered
    /// - `RoomUnavailable` if the room is already booked
    pub fn book_room(&mut self, reservation: Reservation) -> Result<&Reservation> {
        let national_id = reservation.national_id().to_owned();
        let number = reservation.room_number();

        if self.find_client(&national_id).is_none() {
            return Err(Error::client_not_found(&national_id));
        }

        let room = self
            .room_mut(number)
            .ok_or_else(|| Error::room_not_found(number))?;
        if !room.is_available() {
            return Err(Error::RoomUnavailable { number });
        }
        room.set_available(false);

        let slot = self.reservations.len();
        self.reservations.push(reservation);
        if let Some(client) = self.client_mut(&national_id) {
            client.push_reservation_slot(slot);
        }
        log::debug!("booked room {number} for {national_id}");

        Ok(&self.reservations[slot])
    }

    /// Moves an active reservation to new dates.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no reservation matches the key
    /// - `ReservationCancelled` if every match is cancelled
    pub fn update_reservation_dates(
        &mut self,
        national_id: &str,
        room_number: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<&Reservation> {
        let slot = self.active_slot(national_id, room_number)?;
        let reservation = &mut self.reservations[slot];
        reservation.reschedule(check_in, check_out);
        Ok(reservation)
    }

    /// Cancels an active reservation and frees its room.
    ///
    /// The record is kept with status `Cancelled` and its dates unchanged.
    /// If the room is missing, as in stores written before removal checked
    /// for bookings, only the status changes.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no reservation matches the key
    /// - `ReservationCancelled` if every match is already cancelled
    pub fn cancel_reservation(&mut self, national_id: &str, room_number: u32) -> Result<&Reservation> {
        let slot = self.active_slot(national_id, room_number)?;
        self.reservations[slot].cancel();

        match self.room_mut(room_number) {
            Some(room) => room.set_available(true),
            None => log::debug!("cancelled reservation for removed room {room_number}"),
        }

        Ok(&self.reservations[slot])
    }

    /// Returns the first reservation with the given key, whatever its status.
    #[must_use]
    pub fn find_reservation(&self, national_id: &str, room_number: u32) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.national_id() == national_id && r.room_number() == room_number)
    }

    /// Returns every reservation in booking order.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Position of the first active reservation with the given key.
    fn active_slot(&self, national_id: &str, room_number: u32) -> Result<usize> {
        let mut matched = false;
        for (slot, reservation) in self.reservations.iter().enumerate() {
            if reservation.national_id() != national_id || reservation.room_number() != room_number {
                continue;
            }
            if reservation.is_active() {
                return Ok(slot);
            }
            matched = true;
        }

        let key = ReservationKey::new(national_id, room_number);
        if matched {
            Err(Error::ReservationCancelled {
                key: key.to_string(),
            })
        } else {
            Err(Error::NotFound {
                resource: format!("reservation {key}"),
            })
        }
    }
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
