//! Line-oriented command grammar.

use std::str::FromStr;

use thiserror::Error;

use crate::core::{UnknownVehicleKind, VehicleKind};

/// A parsed shell command with typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create_parking_lot <floors> <spots_per_floor>`
    CreateParkingLot {
        /// Number of floors.
        floors: usize,
        /// Spots on each floor.
        spots_per_floor: usize,
    },
    /// `park <vehicle_id> <bike|car|truck>`
    Park {
        /// License plate.
        vehicle_id: String,
        /// Vehicle kind.
        kind: VehicleKind,
    },
    /// `leave <vehicle_id>`
    Leave {
        /// License plate.
        vehicle_id: String,
    },
    /// `availability [floor]`. The floor may be negative, which reports 0.
    Availability {
        /// Floor to query, or the whole lot when absent.
        floor: Option<i64>,
    },
    /// `truck_availability`
    TruckAvailability,
    /// `locate <vehicle_id>`
    Locate {
        /// License plate.
        vehicle_id: String,
    },
    /// `is_full`
    IsFull,
    /// `status`
    Status,
    /// `exit`
    Exit,
}

/// Reasons a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command word is not recognised.
    #[error("invalid command `{0}`")]
    Unknown(String),
    /// A required argument is absent.
    #[error("{command}: missing argument <{argument}>")]
    MissingArgument {
        /// Command word.
        command: &'static str,
        /// Name of the absent argument.
        argument: &'static str,
    },
    /// An argument that must be an integer is not one.
    #[error("{argument}: `{value}` is not a valid number")]
    InvalidNumber {
        /// Name of the argument.
        argument: &'static str,
        /// Raw token.
        value: String,
    },
    /// The vehicle kind token is not recognised.
    #[error(transparent)]
    UnknownKind(#[from] UnknownVehicleKind),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// The command word is case-insensitive and trailing extra arguments
    /// are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let mut args = Args {
            command: "",
            tokens,
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "create_parking_lot" => {
                args.command = "create_parking_lot";
                Self::CreateParkingLot {
                    floors: args.number("floors")?,
                    spots_per_floor: args.number("spots_per_floor")?,
                }
            }
            "park" => {
                args.command = "park";
                let vehicle_id = args.word("vehicle_id")?.to_string();
                let kind = args.word("kind")?.parse::<VehicleKind>()?;
                Self::Park { vehicle_id, kind }
            }
            "leave" => {
                args.command = "leave";
                Self::Leave {
                    vehicle_id: args.word("vehicle_id")?.to_string(),
                }
            }
            "availability" => {
                args.command = "availability";
                Self::Availability {
                    floor: args.optional_number("floor")?,
                }
            }
            "truck_availability" => Self::TruckAvailability,
            "locate" => {
                args.command = "locate";
                Self::Locate {
                    vehicle_id: args.word("vehicle_id")?.to_string(),
                }
            }
            "is_full" => Self::IsFull,
            "status" => Self::Status,
            "exit" => Self::Exit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }
}

struct Args<'a, I: Iterator<Item = &'a str>> {
    command: &'static str,
    tokens: I,
}

impl<'a, I: Iterator<Item = &'a str>> Args<'a, I> {
    fn word(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
        self.tokens.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn number<N: FromStr>(&mut self, argument: &'static str) -> Result<N, CommandError> {
        let raw = self.word(argument)?;
        parse_number(argument, raw)
    }

    fn optional_number<N: FromStr>(
        &mut self,
        argument: &'static str,
    ) -> Result<Option<N>, CommandError> {
        self.tokens
            .next()
            .map(|raw| parse_number(argument, raw))
            .transpose()
    }
}

fn parse_number<N: FromStr>(argument: &'static str, raw: &str) -> Result<N, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidNumber {
        argument,
        value: raw.to_string(),
    })
}
