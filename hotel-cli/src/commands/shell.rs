//! Interactive menu-driven console.
//!
//! The console reads from any [`BufRead`] and writes to any [`Write`], so it
//! can be driven from tests. Unparseable input is reported and the prompt is
//! repeated; end of input behaves like choosing "Exit".

use std::io::{self, BufRead, Write};

use clap::Args;
use chrono::NaiveDate;
use hotel::config::OutputFormat;
use hotel::reservation::parse_date;
use hotel::{Client, DateRange, Logger, Reservation, ReservationKey, Room, RoomCategory};

use crate::desk::FrontDesk;
use crate::error::CliError;
use crate::output::write_client;
use crate::utils::{create_logger, load_configuration, open_database, validate_rate, GlobalOptions};

/// Run the interactive menu (the default when no command is given).
#[derive(Args, Default)]
pub struct ShellCommand {}

impl ShellCommand {
    /// Execute the shell command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = create_logger(global, &config);
        let db = open_database(global, &config)?;
        logger.info(&format!("using database {}", db.path().display()));

        let mut desk = FrontDesk::open(db)?;
        let stdin = io::stdin();
        let stdout = io::stdout();
        let result = Console::new(stdin.lock(), stdout.lock(), logger).run(&mut desk);

        // the connection is released on every path
        let closed = desk.close();
        result?;
        closed.map_err(CliError::from)
    }
}

/// Why a menu loop stopped early.
enum Stop {
    /// Input ended.
    Eof,
    /// Unrecoverable failure; ends the session.
    Fatal(CliError),
}

impl From<io::Error> for Stop {
    fn from(e: io::Error) -> Self {
        Stop::Fatal(CliError::Io(e))
    }
}

type Step<T = ()> = Result<T, Stop>;

/// The menu-driven console.
pub struct Console<R, W> {
    input: R,
    output: W,
    logger: Logger,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, logger: Logger) -> Self {
        Self {
            input,
            output,
            logger,
        }
    }

    /// Runs the main menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or when the store rejects a write.
    pub fn run(&mut self, desk: &mut FrontDesk) -> Result<(), CliError> {
        match self.main_menu(desk) {
            Ok(()) | Err(Stop::Eof) => Ok(()),
            Err(Stop::Fatal(e)) => {
                self.logger.error(&format!("session ended: {e}"));
                Err(e)
            }
        }
    }

    fn main_menu(&mut self, desk: &mut FrontDesk) -> Step {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- Hotel Main Menu ---")?;
            writeln!(self.output, "1. Rooms")?;
            writeln!(self.output, "2. Clients")?;
            writeln!(self.output, "3. Reservations")?;
            writeln!(self.output, "4. Check room availability")?;
            writeln!(self.output, "5. Show client and reservations")?;
            writeln!(self.output, "6. Exit")?;

            match self.read_line("Select an option: ")?.trim() {
                "1" => self.rooms_menu(desk)?,
                "2" => self.clients_menu(desk)?,
                "3" => self.reservations_menu(desk)?,
                "4" => self.availability(desk)?,
                "5" => self.client_lookup(desk)?,
                "6" => {
                    writeln!(self.output, "Thank you for using the system. Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    fn rooms_menu(&mut self, desk: &mut FrontDesk) -> Step {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- Rooms ---")?;
            writeln!(self.output, "1. Register new room")?;
            writeln!(self.output, "2. Change room rate")?;
            writeln!(self.output, "3. Delete room")?;
            writeln!(self.output, "4. Back to main menu")?;

            match self.read_line("Select an option: ")?.trim() {
                "1" => {
                    let number = self.prompt_room_number("Room number: ")?;
                    let category = self.prompt_parsed(
                        "Room category (1: Standard, 2: Suite, 3: Deluxe): ",
                        |s| s.parse::<RoomCategory>().map_err(|e| e.to_string()),
                    )?;
                    let rate = self.prompt_rate("Nightly rate: ")?;
                    let result = desk.add_room(Room::new(number, category, rate));
                    self.report(result, |_| "Room registered successfully.".to_string())?;
                }
                "2" => {
                    let number = self.prompt_room_number("Room number to modify: ")?;
                    let rate = self.prompt_rate("New nightly rate: ")?;
                    let result = desk.update_room_price(number, rate);
                    self.report(result, |room| format!("Room updated successfully. {room}"))?;
                }
                "3" => {
                    let number = self.prompt_room_number("Room number to delete: ")?;
                    let result = desk.remove_room(number);
                    self.report(result, |removed| match removed {
                        0 => format!("No room with number {number}."),
                        _ => "Room deleted successfully.".to_string(),
                    })?;
                }
                "4" => return Ok(()),
                _ => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    fn clients_menu(&mut self, desk: &mut FrontDesk) -> Step {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- Clients ---")?;
            writeln!(self.output, "1. Register new client")?;
            writeln!(self.output, "2. Update client information")?;
            writeln!(self.output, "3. Back to main menu")?;

            match self.read_line("Select an option: ")?.trim() {
                "1" => {
                    let first_names = self.prompt_text("First names: ")?;
                    let last_names = self.prompt_text("Last names: ")?;
                    let national_id = self.prompt_text("National ID (DPI): ")?;
                    let result =
                        desk.register_client(Client::new(first_names, last_names, national_id));
                    self.report(result, |_| "Client registered successfully.".to_string())?;
                }
                "2" => {
                    let national_id = self.prompt_text("National ID of the client to update: ")?;
                    let first_names = self.prompt_text("New first names: ")?;
                    let last_names = self.prompt_text("New last names: ")?;
                    let result = desk.update_client(&national_id, &first_names, &last_names);
                    self.report(result, |_| "Client information updated successfully.".to_string())?;
                }
                "3" => return Ok(()),
                _ => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    fn reservations_menu(&mut self, desk: &mut FrontDesk) -> Step {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- Reservations ---")?;
            writeln!(self.output, "1. Book a room")?;
            writeln!(self.output, "2. Change reservation dates")?;
            writeln!(self.output, "3. Cancel reservation")?;
            writeln!(self.output, "4. Back to main menu")?;

            match self.read_line("Select an option: ")?.trim() {
                "1" => {
                    let national_id = self.prompt_text("Client national ID: ")?;
                    let room = self.prompt_room_number("Room number: ")?;
                    let check_in = self.prompt_date("Check-in date (YYYY-MM-DD): ")?;
                    let check_out = self.prompt_date("Check-out date (YYYY-MM-DD): ")?;
                    let result = desk.book_room(Reservation::new(
                        ReservationKey::new(national_id, room),
                        check_in,
                        check_out,
                    ));
                    self.report(result, |_| "Reservation created successfully.".to_string())?;
                }
                "2" => {
                    let national_id = self.prompt_text("Client national ID: ")?;
                    let room = self.prompt_room_number("Room number: ")?;
                    let check_in = self.prompt_date("New check-in date (YYYY-MM-DD): ")?;
                    let check_out = self.prompt_date("New check-out date (YYYY-MM-DD): ")?;
                    let result = desk.update_reservation_dates(&national_id, room, check_in, check_out);
                    self.report(result, |_| "Reservation updated successfully.".to_string())?;
                }
                "3" => {
                    let national_id = self.prompt_text("Client national ID: ")?;
                    let room = self.prompt_room_number("Room number: ")?;
                    let result = desk.cancel_reservation(&national_id, room);
                    self.report(result, |_| "Reservation cancelled successfully.".to_string())?;
                }
                "4" => return Ok(()),
                _ => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    fn availability(&mut self, desk: &FrontDesk) -> Step {
        let start = self.prompt_date("Start date (YYYY-MM-DD): ")?;
        let end = self.prompt_date("End date (YYYY-MM-DD): ")?;

        let rooms = desk.manager().list_available_rooms(&DateRange::new(start, end));
        writeln!(self.output, "Available rooms:")?;
        for room in rooms {
            writeln!(self.output, "{room}")?;
        }
        Ok(())
    }

    fn client_lookup(&mut self, desk: &FrontDesk) -> Step {
        let national_id = self.prompt_text("Client national ID: ")?;
        let manager = desk.manager();

        match manager.find_client(&national_id) {
            Some(client) => {
                let reservations = manager.client_reservations(&national_id);
                writeln!(self.output, "Client information:")?;
                write_client(&mut self.output, client, &reservations, OutputFormat::Table)
                    .map_err(Stop::Fatal)?;
            }
            None => writeln!(self.output, "Client not found.")?,
        }
        Ok(())
    }

    /// Prints the outcome of an operation. Business-rule failures are shown
    /// and the session continues; store failures stop it.
    fn report<T>(&mut self, result: hotel::Result<T>, success: impl FnOnce(&T) -> String) -> Step {
        match result {
            Ok(value) => {
                writeln!(self.output, "{}", success(&value))?;
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                self.logger.debug(&format!("rejected: {e:?}"));
                writeln!(self.output, "Error: {e}")?;
                Ok(())
            }
            Err(e) => Err(Stop::Fatal(CliError::from(e))),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Step<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(Stop::Eof);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Step<T> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(message) => writeln!(self.output, "Invalid input: {message}")?,
            }
        }
    }

    fn prompt_text(&mut self, prompt: &str) -> Step<String> {
        self.prompt_parsed(prompt, |s| {
            if s.is_empty() {
                Err("a value is required".to_string())
            } else {
                Ok(s.to_string())
            }
        })
    }

    fn prompt_room_number(&mut self, prompt: &str) -> Step<u32> {
        self.prompt_parsed(prompt, |s| {
            s.parse::<u32>()
                .map_err(|_| format!("'{s}' is not a valid room number"))
        })
    }

    fn prompt_rate(&mut self, prompt: &str) -> Step<f64> {
        self.prompt_parsed(prompt, |s| {
            let rate = s
                .parse::<f64>()
                .map_err(|_| format!("'{s}' is not a number"))?;
            validate_rate(rate)
        })
    }

    fn prompt_date(&mut self, prompt: &str) -> Step<NaiveDate> {
        self.prompt_parsed(prompt, |s| parse_date(s).map_err(|e| e.to_string()))
    }
}
