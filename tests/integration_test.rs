//! Integration tests for the weighing entry lifecycle

use tempfile::tempdir;
use weight_station::app::WeighingSession;
use weight_station::domain::service::ValidationPolicy;
use weight_station::error::{Error, ValidationError};
use weight_station::export::ticket;
use weight_station::store::{EntryStore, LayoutStore};

/// Full lifecycle: first-weight-only save, lookup, second weighing,
/// in-place resave.
#[test]
fn test_two_stage_weighing_lifecycle() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = EntryStore::open(dir.path().to_path_buf()).expect("Failed to open store");

    // First weighing: vehicle arrives loaded, no second weight yet
    let mut session = WeighingSession::fresh(&store, ValidationPolicy::Lenient);
    assert_eq!(session.serial_number(), "1");
    session.vehicle_number = "ABC-1".to_string();
    session.amount = 500.0;
    session.first_weight = 1000.0;
    session.mark_filling();

    let first_save = session.save(&mut store).expect("First save failed");
    assert_eq!(first_save.final_weight, 0.0);
    assert_eq!(first_save.weight_per_40, "0");
    assert_eq!(store.count(), 1);

    // Operator moves on to other vehicles
    session.start_new(&store);
    assert_eq!(session.serial_number(), "2");

    // Vehicle returns: look the entry up and take the second reading
    assert!(session.search_by_serial(&store, "1"));
    assert!(session.is_editing());
    session.set_second_weight(850.0);
    assert_eq!(session.final_weight(), 150.0);
    assert_eq!(session.weight_per_40(), "3.30");

    let second_save = session.save(&mut store).expect("Resave failed");
    assert_eq!(store.count(), 1, "Edit must replace, not append");
    assert_eq!(second_save.serial_number, "1");
    assert_eq!(second_save.final_weight, 150.0);
    assert_eq!(second_save.weight_per_40, "3.30");
    assert_eq!(second_save.date, first_save.date);
    assert_eq!(second_save.time, first_save.time);
    assert!(second_save.second_date.is_some());

    // The committed record is what the store now holds
    let stored = store.find_by_serial("1").expect("Entry disappeared");
    assert_eq!(*stored, second_save);
}

/// Serial allocation follows insertion order across restarts.
#[test]
fn test_serial_sequence_survives_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");

    {
        let mut store = EntryStore::open(dir.path().to_path_buf()).expect("open");
        for _ in 0..3 {
            let mut session = WeighingSession::fresh(&store, ValidationPolicy::Lenient);
            session.vehicle_number = "ABC-1".to_string();
            session.amount = 500.0;
            session.first_weight = 1000.0;
            session.save(&mut store).expect("save");
        }
    }

    let store = EntryStore::open(dir.path().to_path_buf()).expect("reopen");
    assert_eq!(store.count(), 3);
    let session = WeighingSession::fresh(&store, ValidationPolicy::Lenient);
    assert_eq!(session.serial_number(), "4");
}

/// A clobbered entries file degrades to an empty store instead of
/// blocking the terminal, and the next save rebuilds a valid file.
#[test]
fn test_corrupt_store_recovers_and_resaves() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("entries.json"), "\"entries\": [").expect("write");

    let mut store = EntryStore::open(dir.path().to_path_buf()).expect("open");
    assert_eq!(store.count(), 0);

    let mut session = WeighingSession::fresh(&store, ValidationPolicy::Lenient);
    assert_eq!(session.serial_number(), "1");
    session.vehicle_number = "ABC-1".to_string();
    session.amount = 500.0;
    session.first_weight = 1000.0;
    session.save(&mut store).expect("save after recovery");

    let reopened = EntryStore::open(dir.path().to_path_buf()).expect("reopen");
    assert_eq!(reopened.count(), 1);
}

/// Duplicate serials are refused in create mode; edit mode targets the
/// existing record and bypasses the check.
#[test]
fn test_duplicate_serial_create_vs_edit() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = EntryStore::open(dir.path().to_path_buf()).expect("open");

    // Two sessions allocated before either saves both get serial "1"
    let mut first = WeighingSession::fresh(&store, ValidationPolicy::Lenient);
    let mut stale = WeighingSession::fresh(&store, ValidationPolicy::Lenient);
    assert_eq!(first.serial_number(), "1");
    assert_eq!(stale.serial_number(), "1");

    first.vehicle_number = "ABC-1".to_string();
    first.amount = 500.0;
    first.first_weight = 1000.0;
    first.save(&mut store).expect("save");

    stale.vehicle_number = "XYZ-9".to_string();
    stale.amount = 700.0;
    stale.first_weight = 2000.0;
    let err = stale.save(&mut store).expect_err("serial reuse must fail");
    assert!(matches!(
        err,
        Error::Validation(ValidationError::DuplicateSerial)
    ));
    assert_eq!(store.count(), 1, "Refused save must leave store unchanged");

    // The same serial is fine on the edit path
    first.start_new(&store);
    assert!(first.search_by_serial(&store, "1"));
    first.amount = 650.0;
    first.save(&mut store).expect("edit resave");
    assert_eq!(store.count(), 1);
    assert_eq!(store.find_by_serial("1").unwrap().amount, 650.0);
}

/// Validation messages surface through the error type unchanged.
#[test]
fn test_validation_messages() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = EntryStore::open(dir.path().to_path_buf()).expect("open");

    let mut session = WeighingSession::fresh(&store, ValidationPolicy::Lenient);
    let err = session.save(&mut store).expect_err("empty session must not save");
    match err {
        Error::Validation(v) => {
            assert_eq!(v, ValidationError::MissingFirstWeight);
            assert_eq!(v.to_string(), "Please enter first weight");
        }
        other => panic!("Unexpected error: {other}"),
    }
}

/// Saved entry flows into a printable ticket with stored layout
/// overrides applied.
#[test]
fn test_saved_entry_prints_with_layout_overrides() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = EntryStore::open(dir.path().to_path_buf()).expect("open");
    let mut layout = LayoutStore::open(dir.path().to_path_buf()).expect("open layout");

    let mut session = WeighingSession::fresh(&store, ValidationPolicy::Lenient);
    session.vehicle_number = "LEB-1234".to_string();
    session.driver_name = "Akram".to_string();
    session.amount = 500.0;
    session.first_weight = 1000.0;
    session.set_second_weight(915.0);
    let entry = session.save(&mut store).expect("save");
    assert_eq!(entry.final_weight, 85.0);
    assert_eq!(entry.weight_per_40, "2.5");

    layout
        .apply_json(r#"{"type":"savePrintPositions","positions":{"vehicle":{"x":200,"y":80}}}"#)
        .expect("apply layout");

    let ticket_path = dir.path().join("ticket.html");
    ticket::write_ticket(&ticket_path, &entry, layout.positions()).expect("write ticket");

    let html = std::fs::read_to_string(&ticket_path).expect("read ticket");
    assert!(html.contains("left: 200px; top: 80px;"));
    assert!(html.contains("LEB-1234"));
    assert!(html.contains("2.5"));
}
