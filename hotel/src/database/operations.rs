//! Database CRUD operations for rooms, clients, and reservations.
//!
//! Every write runs in its own IMMEDIATE transaction and is committed before
//! returning. Reads are associated functions taking a [`Connection`] so they
//! can run inside a caller's transaction.

use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::{Error, Result};
use crate::manager::HotelManager;
use crate::reservation::{format_date, parse_date};
use crate::{Client, Reservation, ReservationKey, ReservationStatus, Room, RoomCategory};

use super::connection::Database;
use super::schema::{INSERT_RESERVATION, INSERT_ROOM, UPDATE_ACTIVE_RESERVATION, UPDATE_ROOM};

const DELETE_ROOM: &str = "DELETE FROM rooms WHERE number = ?";

const INSERT_CLIENT: &str = r"
    INSERT INTO clients (national_id, first_names, last_names)
    VALUES (?1, ?2, ?3)
";

const UPDATE_CLIENT: &str = r"
    UPDATE clients
    SET first_names = ?1, last_names = ?2
    WHERE national_id = ?3
";

const SELECT_ROOM: &str = r"
    SELECT number, category, nightly_rate, is_available
    FROM rooms
    WHERE number = ?
";

const LIST_ROOMS: &str = r"
    SELECT number, category, nightly_rate, is_available
    FROM rooms
    ORDER BY id
";

const SELECT_CLIENT: &str = r"
    SELECT national_id, first_names, last_names
    FROM clients
    WHERE national_id = ?
";

const LIST_CLIENTS: &str = r"
    SELECT national_id, first_names, last_names
    FROM clients
    ORDER BY rowid
";

const LIST_RESERVATIONS: &str = r"
    SELECT client_national_id, room_number, check_in, check_out, status
    FROM reservations
    ORDER BY id
";

type RoomRow = (i64, String, f64, i64);
type ClientRow = (String, String, String);
type ReservationRow = (String, i64, String, String, String);

fn corrupt(table: &'static str, details: impl Into<String>) -> Error {
    Error::CorruptRow {
        table,
        details: details.into(),
    }
}

fn read_room_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RoomRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn read_client_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ClientRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn read_reservation_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReservationRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
}

fn decode_room((number, category, rate, available): RoomRow) -> Result<Room> {
    let number = u32::try_from(number)
        .map_err(|_| corrupt("rooms", format!("room number {number} out of range")))?;
    let category = category
        .parse::<RoomCategory>()
        .map_err(|e| corrupt("rooms", format!("room {number}: {e}")))?;
    Ok(Room::new(number, category, rate).with_availability(available != 0))
}

fn decode_client((national_id, first_names, last_names): ClientRow) -> Client {
    Client::new(first_names, last_names, national_id)
}

fn decode_reservation(
    (national_id, room_number, check_in, check_out, status): ReservationRow,
) -> Result<Reservation> {
    let room_number = u32::try_from(room_number)
        .map_err(|_| corrupt("reservations", format!("room number {room_number} out of range")))?;
    let key = ReservationKey::new(national_id, room_number);
    let check_in =
        parse_date(&check_in).map_err(|e| corrupt("reservations", format!("{key}: {e}")))?;
    let check_out =
        parse_date(&check_out).map_err(|e| corrupt("reservations", format!("{key}: {e}")))?;
    let status = status
        .parse::<ReservationStatus>()
        .map_err(|e| corrupt("reservations", format!("{key}: {e}")))?;
    Ok(Reservation::new(key, check_in, check_out).with_status(status))
}

pub(super) fn insert_reservation_row(conn: &Connection, reservation: &Reservation) -> Result<i64> {
    conn.execute(
        INSERT_RESERVATION,
        params![
            reservation.national_id(),
            reservation.room_number(),
            format_date(reservation.check_in()),
            format_date(reservation.check_out()),
            reservation.status().label(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub(super) fn update_reservation_row(conn: &Connection, reservation: &Reservation) -> Result<bool> {
    let rows = conn.execute(
        UPDATE_ACTIVE_RESERVATION,
        params![
            format_date(reservation.check_in()),
            format_date(reservation.check_out()),
            reservation.status().label(),
            reservation.national_id(),
            reservation.room_number(),
        ],
    )?;
    Ok(rows > 0)
}

pub(super) fn update_room_row(conn: &Connection, room: &Room) -> Result<bool> {
    let rows = conn.execute(
        UPDATE_ROOM,
        params![
            room.category().label(),
            room.nightly_rate(),
            i64::from(room.is_available()),
            room.number(),
        ],
    )?;
    Ok(rows > 0)
}

impl Database {
    /// Inserts a room.
    ///
    /// # Errors
    ///
    /// Returns an error if a room with the same number is already stored or
    /// the insert fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hotel::database::{Database, DatabaseConfig};
    /// use hotel::Room;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/hotel.db")).unwrap();
    /// db.insert_room(&Room::standard(101, 100.0)).unwrap();
    /// ```
    pub fn insert_room(&mut self, room: &Room) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_ROOM,
            params![
                room.number(),
                room.category().label(),
                room.nightly_rate(),
                i64::from(room.is_available()),
            ],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Rewrites category, rate, and availability of a stored room.
    ///
    /// Returns `Ok(false)` if no room has that number.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or update fails.
    pub fn update_room(&mut self, room: &Room) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let updated = update_room_row(&tx, room)?;
        tx.commit()?;
        Ok(updated)
    }

    /// Deletes a room by number. Reservations referencing it are kept.
    ///
    /// Returns `Ok(false)` if no room has that number.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    pub fn delete_room(&mut self, number: u32) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let rows = tx.execute(DELETE_ROOM, params![number])?;
        tx.commit()?;
        Ok(rows > 0)
    }

    /// Inserts a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the national id is already stored or the insert
    /// fails.
    pub fn insert_client(&mut self, client: &Client) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_CLIENT,
            params![client.national_id(), client.first_names(), client.last_names()],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Rewrites a stored client's names.
    ///
    /// Returns `Ok(false)` if no client has that national id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or update fails.
    pub fn update_client(&mut self, client: &Client) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows = tx.execute(
            UPDATE_CLIENT,
            params![client.first_names(), client.last_names(), client.national_id()],
        )?;

        tx.commit()?;
        Ok(rows > 0)
    }

    /// Inserts a reservation and returns its row id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or insert fails.
    pub fn insert_reservation(&mut self, reservation: &Reservation) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let id = insert_reservation_row(&tx, reservation)?;
        tx.commit()?;
        Ok(id)
    }

    /// Rewrites dates and status of the oldest active row for the
    /// reservation's (client, room) pair.
    ///
    /// Returns `Ok(false)` if no active row matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or update fails.
    pub fn update_reservation(&mut self, reservation: &Reservation) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let updated = update_reservation_row(&tx, reservation)?;
        tx.commit()?;
        Ok(updated)
    }

    /// Retrieves a room by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded.
    pub fn get_room(conn: &Connection, number: u32) -> Result<Option<Room>> {
        let mut stmt = conn.prepare(SELECT_ROOM)?;

        match stmt.query_row(params![number], read_room_row) {
            Ok(row) => decode_room(row).map(Some),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieves a client by national id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_client(conn: &Connection, national_id: &str) -> Result<Option<Client>> {
        let mut stmt = conn.prepare(SELECT_CLIENT)?;

        match stmt.query_row(params![national_id], read_client_row) {
            Ok(row) => Ok(Some(decode_client(row))),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all rooms in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(LIST_ROOMS)?;
        let rows = stmt
            .query_map([], read_room_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(decode_room).collect()
    }

    /// Lists all clients in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_clients(conn: &Connection) -> Result<Vec<Client>> {
        let mut stmt = conn.prepare(LIST_CLIENTS)?;
        let rows = stmt
            .query_map([], read_client_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows.into_iter().map(decode_client).collect())
    }

    /// Lists all reservations ordered by row id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS)?;
        let rows = stmt
            .query_map([], read_reservation_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(decode_reservation).collect()
    }

    /// Loads every stored record into a fresh [`HotelManager`].
    ///
    /// # Errors
    ///
    /// Returns an error if any table cannot be read or decoded.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hotel::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/hotel.db")).unwrap();
    /// let manager = db.load_manager().unwrap();
    /// println!("{} rooms", manager.rooms().len());
    /// ```
    pub fn load_manager(&self) -> Result<HotelManager> {
        let rooms = Self::list_rooms(&self.conn)?;
        let clients = Self::list_clients(&self.conn)?;
        let reservations = Self::list_reservations(&self.conn)?;
        log::debug!(
            "loaded {} rooms, {} clients, {} reservations",
            rooms.len(),
            clients.len(),
            reservations.len()
        );
        Ok(HotelManager::from_parts(rooms, clients, reservations))
    }
}
