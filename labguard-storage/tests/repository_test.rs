//! SQLite repository integration tests.

use std::sync::Arc;

use chrono::NaiveDate;
use labguard_core::{
    AnalyteRecord, AnalyteSession, ControlConfig, Measurement, QcEngine, QcRepository, QcStatus,
    WestgardRule,
};
use labguard_storage::SqliteRepository;

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, n).unwrap()
}

fn glucose() -> ControlConfig {
    ControlConfig::new("glucose", "Glucose", 100.0, 10.0, "mg/dL")
}

#[test]
fn load_missing_analyte_is_none() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    assert!(repo.load("glucose").unwrap().is_none());
    assert!(repo.list_analytes().unwrap().is_empty());
}

#[test]
fn round_trips_a_classified_record() {
    let repo = SqliteRepository::open_in_memory().unwrap();

    let mut session = AnalyteSession::new(AnalyteRecord::empty(glucose()));
    session
        .add(Measurement::new("a", day(1), 125.0).with_comment("new lot"))
        .unwrap();
    session.add(Measurement::new("b", day(2), 122.0)).unwrap();
    let record = session.into_record();

    repo.store("glucose", &record).unwrap();
    let loaded = repo.load("glucose").unwrap().unwrap();
    assert_eq!(loaded, record);

    // Derived fields survive the trip intact.
    assert_eq!(loaded.measurements[0].comment.as_deref(), Some("new lot"));
    assert_eq!(loaded.measurements[1].status, Some(QcStatus::Error));
    assert_eq!(
        loaded.measurements[1].rules.as_slice(),
        &[WestgardRule::TwoTwoS]
    );
}

#[test]
fn load_returns_evaluation_order() {
    let repo = SqliteRepository::open_in_memory().unwrap();

    // Store rows shuffled: same date ties plus out-of-order dates.
    let record = AnalyteRecord {
        control: glucose(),
        measurements: vec![
            Measurement::new("m2", day(5), 101.0),
            Measurement::new("m1", day(5), 99.0),
            Measurement::new("m0", day(1), 100.0),
        ],
    };
    repo.store("glucose", &record).unwrap();

    let loaded = repo.load("glucose").unwrap().unwrap();
    let ids: Vec<&str> = loaded.measurements.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m0", "m1", "m2"]);
}

#[test]
fn store_replaces_previous_state() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let mut record = AnalyteRecord {
        control: glucose(),
        measurements: vec![Measurement::new("a", day(1), 100.0)],
    };
    repo.store("glucose", &record).unwrap();

    record.measurements.clear();
    record.control.sd = 5.0;
    repo.store("glucose", &record).unwrap();

    let loaded = repo.load("glucose").unwrap().unwrap();
    assert!(loaded.measurements.is_empty());
    assert_eq!(loaded.control.sd, 5.0);
}

#[test]
fn zero_sd_record_round_trips_without_z_scores() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let mut session = AnalyteSession::new(AnalyteRecord::empty(ControlConfig::new(
        "new_assay",
        "New Assay",
        50.0,
        0.0,
        "U/L",
    )));
    session.add(Measurement::new("a", day(1), 80.0)).unwrap();
    repo.store("new_assay", &session.into_record()).unwrap();

    let loaded = repo.load("new_assay").unwrap().unwrap();
    assert_eq!(loaded.measurements[0].z_score, None);
    assert_eq!(loaded.measurements[0].status, Some(QcStatus::Ok));
}

#[test]
fn persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qc.db");

    {
        let repo = SqliteRepository::open(&path).unwrap();
        repo.store("glucose", &AnalyteRecord::empty(glucose()))
            .unwrap();
    }

    let repo = SqliteRepository::open(&path).unwrap();
    assert_eq!(repo.list_analytes().unwrap(), vec!["glucose"]);
    assert!(repo.load("glucose").unwrap().is_some());
}

#[test]
fn engine_over_sqlite_recomputes_on_config_edit() {
    let repo = Arc::new(SqliteRepository::open_in_memory().unwrap());
    let engine = QcEngine::new(repo);
    engine.register_control(glucose()).unwrap();

    engine.add_measurement("glucose", day(1), 101.0, None).unwrap();
    engine.add_measurement("glucose", day(2), 102.0, None).unwrap();
    engine.update_control("glucose", 100.0, 0.25).unwrap();

    let record = engine.history("glucose").unwrap();
    assert!(record
        .measurements
        .iter()
        .all(|m| m.status == Some(QcStatus::Error)));
    assert_eq!(record.measurements[0].z_score, Some(4.0));
}
