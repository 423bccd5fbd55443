//! Tests for the shell command grammar

use parking_allocator::core::VehicleKind;
use parking_allocator::shell::{Command, CommandError};

#[test]
fn test_parse_every_command_word() {
    let cases = [
        (
            "create_parking_lot 2 3",
            Command::CreateParkingLot {
                floors: 2,
                spots_per_floor: 3,
            },
        ),
        (
            "park KA-01 bike",
            Command::Park {
                vehicle_id: "KA-01".to_string(),
                kind: VehicleKind::Bike,
            },
        ),
        (
            "leave KA-01",
            Command::Leave {
                vehicle_id: "KA-01".to_string(),
            },
        ),
        ("availability 1", Command::Availability { floor: Some(1) }),
        ("truck_availability", Command::TruckAvailability),
        (
            "locate KA-01",
            Command::Locate {
                vehicle_id: "KA-01".to_string(),
            },
        ),
        ("is_full", Command::IsFull),
        ("status", Command::Status),
        ("exit", Command::Exit),
    ];

    for (line, expected) in cases {
        assert_eq!(Command::parse(line), Ok(Some(expected)), "line `{}`", line);
    }
}

#[test]
fn test_command_word_case_insensitive() {
    assert_eq!(Command::parse("Is_Full"), Ok(Some(Command::IsFull)));
    assert_eq!(
        Command::parse("  LOCATE   ab12  "),
        Ok(Some(Command::Locate {
            vehicle_id: "ab12".to_string()
        }))
    );
}

#[test]
fn test_vehicle_id_keeps_case() {
    let Ok(Some(Command::Park { vehicle_id, .. })) = Command::parse("park AbC car") else {
        panic!("park should parse");
    };
    assert_eq!(vehicle_id, "AbC");
}

#[test]
fn test_command_errors() {
    assert_eq!(
        Command::parse("leave"),
        Err(CommandError::MissingArgument {
            command: "leave",
            argument: "vehicle_id",
        })
    );
    assert_eq!(
        Command::parse("availability first"),
        Err(CommandError::InvalidNumber {
            argument: "floor",
            value: "first".to_string(),
        })
    );
    assert_eq!(
        format!("{}", Command::parse("park X van").unwrap_err()),
        "unknown vehicle kind `van`"
    );
    assert_eq!(
        Command::parse("reserve X"),
        Err(CommandError::Unknown("reserve".to_string()))
    );
}
