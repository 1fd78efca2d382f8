//! End-to-end tests for `build_wards_network_distance`.
//!
//! The link loop visits slots `0..nlinks`: the sentinel slot gets a default
//! link and the last link is never measured.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wardnet::{
    build_wards_network_distance, read_done_file, Error, InputFiles, NetworkLimits, NodeId,
    RecordError, ToLink,
};

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

const POSITIONS: &str = "1 0 0\n2 3 4\n";

#[test]
fn test_single_link_is_not_measured() {
    let dir = TempDir::new().unwrap();
    let work = write(&dir, "work.dat", "1 2 1\n");
    let pos = write(&dir, "pos.dat", POSITIONS);
    let files = InputFiles::new(work).with_position(pos);

    let net = build_wards_network_distance(&files, &NetworkLimits::default()).unwrap();

    assert_eq!(net.to_links.get(1).unwrap().distance, None);
    assert_eq!(net.to_links.slots()[0], Some(ToLink::default()));
    assert_eq!(net.total_distance, Some(0.0));
    assert_eq!(net.node(NodeId(2)).unwrap().position(), (3.0, 4.0));
}

#[test]
fn test_first_of_two_links_is_measured() {
    let dir = TempDir::new().unwrap();
    let work = write(&dir, "work.dat", "1 2 1\n2 1 1\n");
    let pos = write(&dir, "pos.dat", POSITIONS);
    let files = InputFiles::new(work).with_position(pos);

    let net = build_wards_network_distance(&files, &NetworkLimits::default()).unwrap();

    let measured = net.to_links.get(1).unwrap().distance.unwrap();
    assert!((measured - 5.0).abs() < 1e-12);
    assert_eq!(net.to_links.get(2).unwrap().distance, None);
    assert_eq!(net.total_distance, Some(measured));
}

#[test]
fn test_play_links_never_measured() {
    let dir = TempDir::new().unwrap();
    let work = write(&dir, "work.dat", "1 1 1\n1 2 1\n2 1 1\n");
    let pos = write(&dir, "pos.dat", POSITIONS);
    let files = InputFiles::new(&work).with_play(&work).with_position(pos);

    let net = build_wards_network_distance(&files, &NetworkLimits::default()).unwrap();

    assert_eq!(net.to_links.get(1).unwrap().distance, Some(0.0));
    assert_eq!(net.to_links.get(2).unwrap().distance, Some(5.0));
    assert_eq!(net.to_links.get(3).unwrap().distance, None);
    assert_eq!(net.total_distance, Some(5.0));
    assert!(net.play.iter().all(|(_, link)| link.distance.is_none()));
    assert!(net.play.slots()[0].is_none());
}

#[test]
fn test_unpositioned_ward_measures_from_origin() {
    let dir = TempDir::new().unwrap();
    let work = write(&dir, "work.dat", "3 2 1\n2 3 1\n");
    let pos = write(&dir, "pos.dat", "2 6 8\n");
    let files = InputFiles::new(work).with_position(pos);

    let net = build_wards_network_distance(&files, &NetworkLimits::default()).unwrap();

    assert_eq!(net.to_links.get(1).unwrap().distance, Some(10.0));
}

#[test]
fn test_position_requires_file() {
    let dir = TempDir::new().unwrap();
    let work = write(&dir, "work.dat", "1 2 1\n");

    let err = build_wards_network_distance(&InputFiles::new(work), &NetworkLimits::default())
        .unwrap_err();
    assert!(matches!(err, Error::MissingInput("position")));
}

#[test]
fn test_position_for_unknown_ward_aborts() {
    let dir = TempDir::new().unwrap();
    let work = write(&dir, "work.dat", "1 2 1\n");
    let pos = write(&dir, "pos.dat", "1 0 0\n7 1 1\n");
    let files = InputFiles::new(work).with_position(pos);

    let err = build_wards_network_distance(&files, &NetworkLimits::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Corrupt { line_no: 2, source: RecordError::UnknownNode(NodeId(7)), .. }
    ));
}

#[test]
fn test_malformed_position_aborts() {
    let dir = TempDir::new().unwrap();
    let work = write(&dir, "work.dat", "1 2 1\n");
    let pos = write(&dir, "pos.dat", "1 0\n");
    let files = InputFiles::new(work).with_position(pos);

    let err = build_wards_network_distance(&files, &NetworkLimits::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Corrupt { source: RecordError::MissingField("y"), .. }
    ));
}

#[test]
fn test_done_file_from_input_set() {
    let dir = TempDir::new().unwrap();
    let work = write(&dir, "work.dat", "1 2 1\n");
    let done = write(&dir, "done.dat", "12345.5\n");
    let files = InputFiles::new(work).with_done(done);

    let seeds = read_done_file(files.done.as_deref().unwrap()).unwrap();
    assert_eq!(seeds, vec![12345.5]);
}
