//! Listing output in table, JSON, and CSV form.

use std::io::{self, Write};

use hotel::config::OutputFormat;
use hotel::reservation::format_date;
use hotel::{Client, Reservation, Room};

use crate::error::CliError;

const ROOM_HEADERS: [&str; 4] = ["number", "category", "nightly_rate", "is_available"];

const RESERVATION_HEADERS: [&str; 5] = [
    "national_id",
    "room_number",
    "check_in",
    "check_out",
    "status",
];

fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(io::Error::new(io::ErrorKind::Other, e))
}

fn json_error(e: serde_json::Error) -> CliError {
    CliError::Io(io::Error::new(io::ErrorKind::Other, e))
}

fn room_record(room: &Room) -> [String; 4] {
    [
        room.number().to_string(),
        room.category().label().to_string(),
        format!("{:.2}", room.nightly_rate()),
        room.is_available().to_string(),
    ]
}

fn reservation_record(reservation: &Reservation) -> [String; 5] {
    [
        reservation.national_id().to_string(),
        reservation.room_number().to_string(),
        format_date(reservation.check_in()),
        format_date(reservation.check_out()),
        reservation.status().label().to_string(),
    ]
}

fn write_table<W: Write, const N: usize>(
    out: &mut W,
    headers: [&str; N],
    rows: impl Iterator<Item = [String; N]>,
) -> Result<(), CliError> {
    let header_line = headers
        .iter()
        .map(|h| h.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;
    for row in rows {
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}

fn write_csv<W: Write, const N: usize>(
    out: W,
    headers: [&str; N],
    rows: impl Iterator<Item = [String; N]>,
) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer.write_record(&row).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes rooms in the requested format.
pub fn write_rooms<W: Write>(out: &mut W, rooms: &[&Room], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write_table(out, ROOM_HEADERS, rooms.iter().map(|r| room_record(r))),
        OutputFormat::Csv => write_csv(out, ROOM_HEADERS, rooms.iter().map(|r| room_record(r))),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rooms).map_err(json_error)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

/// Writes a client and their reservations in the requested format.
///
/// CSV output lists the reservations only.
pub fn write_client<W: Write>(
    out: &mut W,
    client: &Client,
    reservations: &[&Reservation],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "First names: {}", client.first_names())?;
            writeln!(out, "Last names: {}", client.last_names())?;
            writeln!(out, "National ID: {}", client.national_id())?;
            writeln!(out, "Reservations:")?;
            for reservation in reservations {
                writeln!(out, "  {reservation}")?;
            }
            Ok(())
        }
        OutputFormat::Csv => write_csv(
            out,
            RESERVATION_HEADERS,
            reservations.iter().map(|r| reservation_record(r)),
        ),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "first_names": client.first_names(),
                "last_names": client.last_names(),
                "national_id": client.national_id(),
                "reservations": reservations
                    .iter()
                    .map(|r| serde_json::json!({
                        "room_number": r.room_number(),
                        "check_in": format_date(r.check_in()),
                        "check_out": format_date(r.check_out()),
                        "status": r.status().label(),
                    }))
                    .collect::<Vec<_>>(),
            });
            serde_json::to_writer_pretty(&mut *out, &value).map_err(json_error)?;
            writeln!(out)?;
            Ok(())
        }
    }
}
