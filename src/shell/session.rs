//! Shell session: owns the lot lifecycle and renders command results.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::builders::LotBuilder;
use crate::core::{LotError, ParkingLot};
use crate::shell::command::{Command, CommandError};

/// Lifecycle of the lot owned by a session.
#[derive(Debug, Default)]
pub enum LotState {
    /// No `create_parking_lot` has run yet.
    #[default]
    Uninitialized,
    /// A lot exists and serves commands.
    Constructed(ParkingLot),
}

impl LotState {
    /// The lot, or [`LotError::NotInitialized`].
    ///
    /// # Errors
    ///
    /// Fails while the state is [`LotState::Uninitialized`].
    pub fn lot(&self) -> Result<&ParkingLot, LotError> {
        match self {
            Self::Uninitialized => Err(LotError::NotInitialized),
            Self::Constructed(lot) => Ok(lot),
        }
    }
}

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this line and keep reading.
    Reply(String),
    /// Nothing to print (blank input).
    Silent,
    /// Stop the read loop.
    Exit,
}

/// A command session over one lot.
#[derive(Debug, Default)]
pub struct Session {
    state: LotState,
}

impl Session {
    /// Start with no lot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already constructed lot.
    #[must_use]
    pub fn with_lot(lot: ParkingLot) -> Self {
        Self {
            state: LotState::Constructed(lot),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &LotState {
        &self.state
    }

    /// Parse and execute one line, rendering any failure as a reply.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match Command::parse(line) {
            Ok(None) => Outcome::Silent,
            Ok(Some(command)) => self
                .execute(command)
                .unwrap_or_else(|err| Outcome::Reply(format!("Error: {err}"))),
            Err(CommandError::Unknown(word)) => {
                debug!(%word, "unknown command");
                Outcome::Reply("Invalid command".into())
            }
            Err(err) => Outcome::Reply(format!("Error: {err}")),
        }
    }

    /// Execute a parsed command against the session's lot.
    ///
    /// # Errors
    ///
    /// [`LotError::NotInitialized`] for lot commands issued before
    /// `create_parking_lot`, [`LotError::InvalidConfig`] for rejected
    /// dimensions. Capacity and duplicate rejections of `park` are rendered
    /// as replies, not errors.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, LotError> {
        let reply = match command {
            Command::Exit => return Ok(Outcome::Exit),
            Command::CreateParkingLot {
                floors,
                spots_per_floor,
            } => {
                let lot = LotBuilder::new()
                    .with_floors(floors)
                    .with_spots_per_floor(spots_per_floor)
                    .build()?;
                self.state = LotState::Constructed(lot);
                "Parking lot created".to_string()
            }
            Command::Park { vehicle_id, kind } => match self.state.lot()?.park(&vehicle_id, kind) {
                Ok(assignment) => format!("Parked at {assignment}"),
                Err(LotError::CapacityExhausted { .. }) => "Parking failed".to_string(),
                Err(err @ LotError::AlreadyParked(_)) => format!("Parking failed: {err}"),
                Err(err) => return Err(err),
            },
            Command::Leave { vehicle_id } => {
                if self.state.lot()?.leave(&vehicle_id) {
                    "Vehicle removed".to_string()
                } else {
                    "Vehicle not found".to_string()
                }
            }
            Command::Availability { floor: Some(floor) } => {
                let lot = self.state.lot()?;
                let available = usize::try_from(floor).map_or(0, |f| lot.available_count(f));
                format!("Available spots: {available}")
            }
            Command::Availability { floor: None } => {
                format!("Total available: {}", self.state.lot()?.total_available())
            }
            Command::TruckAvailability => format!(
                "Truck spaces available: {}",
                self.state.lot()?.truck_capacity_available()
            ),
            Command::Locate { vehicle_id } => match self.state.lot()?.locate(&vehicle_id) {
                Some(assignment) => format!("Located at {assignment}"),
                None => "Vehicle not found".to_string(),
            },
            Command::IsFull => {
                if self.state.lot()?.is_full() {
                    "Parking lot is full".to_string()
                } else {
                    "Spaces available".to_string()
                }
            }
            Command::Status => match serde_json::to_string(&self.state.lot()?.snapshot()) {
                Ok(json) => json,
                Err(err) => format!("Error: {err}"),
            },
        };
        Ok(Outcome::Reply(reply))
    }

    /// Read commands from `input` until `exit` or end of input.
    ///
    /// With `prompt` set, `> ` is written before each read.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures on `input` or `output`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        prompt: bool,
    ) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(output, "> ")?;
                output.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            match self.handle_line(&line?) {
                Outcome::Reply(reply) => writeln!(output, "{reply}")?,
                Outcome::Silent => {}
                Outcome::Exit => break,
            }
        }
        output.flush()
    }
}
