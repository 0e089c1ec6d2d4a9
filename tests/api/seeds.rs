//! Seed scenarios against a real dataset.
//!
//! These run only when `TZF_DATASET_DIR` points at a compiled dataset
//! with ocean zones; they are ignored otherwise so the default suite
//! stays hermetic.

use std::path::PathBuf;
use tzf::TimezoneFinder;

fn dataset_dir() -> PathBuf {
    std::env::var_os("TZF_DATASET_DIR")
        .expect("TZF_DATASET_DIR must point at a dataset")
        .into()
}

#[test]
#[ignore = "needs a real dataset via TZF_DATASET_DIR"]
fn well_known_cities() {
    let finder = TimezoneFinder::new(dataset_dir()).expect("finder");

    for (lng, lat, expected) in [
        (13.358, 52.5061, "Europe/Berlin"),
        (-74.006, 40.7128, "America/New_York"),
        (139.6917, 35.6895, "Asia/Tokyo"),
        (28.0473, -26.2041, "Africa/Johannesburg"),
    ] {
        assert_eq!(
            finder.timezone_at(lng, lat).expect("query"),
            Some(expected),
            "({lng}, {lat})",
        );
    }
}

#[test]
#[ignore = "needs a real dataset via TZF_DATASET_DIR"]
fn lesotho_is_a_hole_in_south_africa() {
    let finder = TimezoneFinder::new(dataset_dir()).expect("finder");

    assert_eq!(
        finder.timezone_at(27.8546, -29.3151).expect("query"),
        Some("Africa/Maseru"),
    );
}

#[test]
#[ignore = "needs a real dataset via TZF_DATASET_DIR"]
fn mid_ocean_is_gmt() {
    let finder = TimezoneFinder::new(dataset_dir()).expect("finder");

    assert_eq!(finder.timezone_at(0.0, 0.0).expect("query"), Some("Etc/GMT"));
    assert_eq!(finder.timezone_at_land(0.0, 0.0).expect("query"), None);
}

#[test]
#[ignore = "needs a real dataset via TZF_DATASET_DIR"]
fn jerusalem_gaza_border_region() {
    let finder = TimezoneFinder::new(dataset_dir()).expect("finder");

    assert_eq!(
        finder.timezone_at(35.2137, 31.7683).expect("query"),
        Some("Asia/Jerusalem"),
    );
    assert_eq!(
        finder.timezone_at(34.4668, 31.5017).expect("query"),
        Some("Asia/Gaza"),
    );
}
