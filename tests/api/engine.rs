//! Engine behaviour over synthetic worlds.

use super::dataset::{write_dataset, PolygonSpec, Shortcut, ZoneSpec};
use h3o::{CellIndex, LatLng, Resolution};
use std::path::Path;
use tzf::error::UnknownZone;
use tzf::{TimezoneFinder, ZoneRef};

fn cell(lng: f64, lat: f64) -> CellIndex {
    LatLng::new(lat, lng)
        .expect("latlng")
        .to_cell(Resolution::Three)
}

/// Ocean rectangle west of the prime meridian.
const OCEAN: &[(f64, f64)] =
    &[(-20.0, -15.0), (-1.0, -15.0), (-1.0, 5.0), (-20.0, 5.0)];
/// Main landmass of `Alpha/East`, with an extra vertex on the north edge
/// so it stays the largest polygon of its zone.
const MAIN: &[(f64, f64)] =
    &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (5.0, 10.0), (0.0, 10.0)];
/// Enclave carved out of `MAIN` and filled by `Beta/Enclave`.
const ENCLAVE: &[(f64, f64)] =
    &[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)];
/// Small island of `Alpha/East`.
const ISLAND: &[(f64, f64)] =
    &[(12.0, 0.0), (13.0, 0.0), (13.0, 1.0), (12.0, 1.0)];
/// `Alpha/West`, far enough east that its bbox rejects `(5, 5)`.
const WEST: &[(f64, f64)] =
    &[(20.0, 0.0), (30.0, 0.0), (30.0, 10.0), (20.0, 10.0)];
/// Antimeridian-adjacent territory.
const ALEUTIAN: &[(f64, f64)] =
    &[(-180.0, 50.0), (-178.0, 50.0), (-178.0, 52.0), (-180.0, 52.0)];

/// Writes the ocean-covered world.
///
/// Polygon ids: 0 `OCEAN`, 1 `MAIN`, 2 `ISLAND`, 3 `WEST`, 4 `ENCLAVE`,
/// 5 `ALEUTIAN`.
fn ocean_world(dir: &Path) {
    write_dataset(
        dir,
        &[
            ZoneSpec {
                name: "Etc/GMT",
                polygons: vec![PolygonSpec::solid(OCEAN)],
            },
            ZoneSpec {
                name: "Alpha/East",
                polygons: vec![
                    PolygonSpec::with_holes(MAIN, &[ENCLAVE]),
                    PolygonSpec::solid(ISLAND),
                ],
            },
            ZoneSpec {
                name: "Alpha/West",
                polygons: vec![PolygonSpec::solid(WEST)],
            },
            ZoneSpec {
                name: "Beta/Enclave",
                polygons: vec![PolygonSpec::solid(ENCLAVE)],
            },
            ZoneSpec {
                name: "Pacific/Aleutian",
                polygons: vec![PolygonSpec::solid(ALEUTIAN)],
            },
        ],
        &[
            (cell(2.0, 2.0), Shortcut::Unique(1)),
            (cell(5.0, 5.0), Shortcut::Candidates(vec![3, 1, 4])),
            (cell(4.5, 3.0), Shortcut::Candidates(vec![3, 1, 4])),
            (cell(8.0, 8.0), Shortcut::Candidates(vec![1, 2])),
            (cell(-10.0, -5.0), Shortcut::Unique(0)),
            (cell(-5.0, -5.0), Shortcut::Candidates(vec![0])),
            (cell(-180.0, 51.0), Shortcut::Unique(4)),
        ],
    );
}

/// Both load modes must behave identically.
fn finders(dir: &Path) -> [TimezoneFinder; 2] {
    [
        TimezoneFinder::new(dir).expect("mapped finder"),
        TimezoneFinder::in_memory(dir).expect("in-memory finder"),
    ]
}

#[test]
fn unique_cell_resolves_without_polygon_tests() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());

    for finder in finders(dir.path()) {
        assert_eq!(
            finder.timezone_at(2.0, 2.0).expect("query"),
            Some("Alpha/East"),
        );
        // Shortcut soundness: a unique answer agrees with the full query.
        assert_eq!(
            finder.unique_timezone_at(2.0, 2.0).expect("query"),
            finder.timezone_at(2.0, 2.0).expect("query"),
        );
    }
}

#[test]
fn enclave_wins_inside_a_hole() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());

    for finder in finders(dir.path()) {
        // (5, 5) is inside MAIN, but inside its hole; the enclave zone
        // filling the hole must win. WEST is walked first and dropped by
        // its bounding box.
        assert_eq!(
            finder.timezone_at(5.0, 5.0).expect("query"),
            Some("Beta/Enclave"),
        );
        // Candidate cells never produce a "unique" answer.
        assert_eq!(finder.unique_timezone_at(5.0, 5.0).expect("query"), None);
        // South of the hole, MAIN itself wins after its holes were tested.
        assert_eq!(
            finder.timezone_at(4.5, 3.0).expect("query"),
            Some("Alpha/East"),
        );
    }
}

#[test]
fn candidates_of_one_zone_collapse() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());

    for finder in finders(dir.path()) {
        assert_eq!(
            finder.timezone_at(8.0, 8.0).expect("query"),
            Some("Alpha/East"),
        );
    }
}

#[test]
fn ocean_zones_are_returned_but_filtered_on_land_queries() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());

    for finder in finders(dir.path()) {
        // Via a unique cell.
        assert_eq!(
            finder.timezone_at(-10.0, -5.0).expect("query"),
            Some("Etc/GMT"),
        );
        assert_eq!(finder.timezone_at_land(-10.0, -5.0).expect("query"), None);
        // Via a candidate cell.
        assert_eq!(
            finder.timezone_at(-5.0, -5.0).expect("query"),
            Some("Etc/GMT"),
        );
        assert_eq!(finder.timezone_at_land(-5.0, -5.0).expect("query"), None);
        // Land results pass through the filter untouched.
        assert_eq!(
            finder.timezone_at_land(2.0, 2.0).expect("query"),
            Some("Alpha/East"),
        );
    }
}

#[test]
fn antimeridian_spellings_agree() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());

    for finder in finders(dir.path()) {
        let west = finder.timezone_at(-180.0, 51.0).expect("query");
        let east = finder.timezone_at(180.0, 51.0).expect("query");

        assert_eq!(west, Some("Pacific/Aleutian"));
        assert_eq!(west, east);
    }
}

#[test]
fn queries_are_pure() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());

    for finder in finders(dir.path()) {
        for _ in 0..3 {
            assert_eq!(
                finder.timezone_at(5.0, 5.0).expect("query"),
                Some("Beta/Enclave"),
            );
        }
    }
}

#[test]
fn out_of_bounds_coordinates_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());
    let [finder, _] = finders(dir.path());

    let err = finder.timezone_at(180.001, 0.0).expect_err("lng too big");
    assert_eq!(err.value, 180.001);
    assert!(finder.timezone_at(-180.001, 0.0).is_err());
    assert!(finder.timezone_at(0.0, 90.001).is_err());
    assert!(finder.timezone_at(0.0, -90.001).is_err());
    assert!(finder.timezone_at(f64::NAN, 0.0).is_err());
    assert!(finder.timezone_at_land(200.0, 0.0).is_err());
    assert!(finder.unique_timezone_at(200.0, 0.0).is_err());
}

#[test]
fn poles_resolve_in_range() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());
    let [finder, _] = finders(dir.path());

    // No entries at the poles in this synthetic world; the point is that
    // the coordinates are accepted.
    for lng in [-180.0, -90.0, 0.0, 90.0, 180.0] {
        assert_eq!(finder.timezone_at(lng, 90.0).expect("north pole"), None);
        assert_eq!(finder.timezone_at(lng, -90.0).expect("south pole"), None);
    }
}

#[test]
fn zone_table_accessors() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());
    let [finder, _] = finders(dir.path());

    assert_eq!(finder.zone_count(), 5);
    assert_eq!(
        finder.zone_names(),
        &[
            "Etc/GMT",
            "Alpha/East",
            "Alpha/West",
            "Beta/Enclave",
            "Pacific/Aleutian",
        ],
    );
    assert_eq!(finder.zone_id("Beta/Enclave"), Some(3));
    assert_eq!(finder.zone_id("Mars/Olympus"), None);
    assert!(finder.covers_oceans());
}

#[test]
fn geometry_round_trips_to_degrees() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());
    let [finder, _] = finders(dir.path());

    let geometry = finder.get_geometry("Alpha/East").expect("geometry");
    assert_eq!(geometry.name(), "Alpha/East");
    assert_eq!(geometry.polygons().len(), 2);

    // Storage order: largest polygon first.
    let main = &geometry.polygons()[0];
    let island = &geometry.polygons()[1];
    assert!(main.boundary().len() >= island.boundary().len());

    assert_eq!(main.boundary().points().collect::<Vec<_>>(), MAIN);
    assert_eq!(main.holes().len(), 1);
    assert_eq!(main.holes()[0].points().collect::<Vec<_>>(), ENCLAVE);
    assert_eq!(island.boundary().points().collect::<Vec<_>>(), ISLAND);

    // Parallel-array access agrees with the pairs.
    let lngs: Vec<f64> = MAIN.iter().map(|&(lng, _)| lng).collect();
    let lats: Vec<f64> = MAIN.iter().map(|&(_, lat)| lat).collect();
    assert_eq!(main.boundary().lngs(), lngs);
    assert_eq!(main.boundary().lats(), lats);

    // By id, same answer.
    let by_id = finder.get_geometry(ZoneRef::Id(1)).expect("geometry");
    assert_eq!(by_id, geometry);
}

#[test]
fn unknown_zones_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());
    let [finder, _] = finders(dir.path());

    assert_eq!(
        finder.get_geometry("Mars/Olympus"),
        Err(UnknownZone {
            zone: "Mars/Olympus".to_owned()
        }),
    );
    assert!(finder.get_geometry(ZoneRef::Id(5)).is_err());
}

#[test]
#[allow(deprecated)]
fn certain_timezone_at_is_timezone_at() {
    let dir = tempfile::tempdir().expect("tempdir");
    ocean_world(dir.path());
    let [finder, _] = finders(dir.path());

    for (lng, lat) in [(2.0, 2.0), (5.0, 5.0), (-10.0, -5.0), (60.0, 60.0)] {
        assert_eq!(
            finder.certain_timezone_at(lng, lat).expect("query"),
            finder.timezone_at(lng, lat).expect("query"),
        );
    }
}

#[test]
fn land_only_dataset_returns_none_offshore() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dataset(
        dir.path(),
        &[ZoneSpec {
            name: "Alpha/East",
            polygons: vec![PolygonSpec::solid(MAIN)],
        }],
        &[
            (cell(5.0, 5.0), Shortcut::Candidates(vec![0])),
            (cell(15.0, 15.0), Shortcut::Candidates(vec![0])),
        ],
    );

    for finder in finders(dir.path()) {
        assert!(!finder.covers_oceans());
        // Without ocean cover a lone candidate is still ray-cast...
        assert_eq!(
            finder.timezone_at(5.0, 5.0).expect("query"),
            Some("Alpha/East"),
        );
        // ...and a miss is a miss.
        assert_eq!(finder.timezone_at(15.0, 15.0).expect("query"), None);
        // A cell absent from the index resolves to nothing.
        assert_eq!(finder.timezone_at(60.0, 60.0).expect("query"), None);
    }
}
