//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::countries::{BoundingBoxTable, DEFAULT_COUNTRY_TABLE};
use crate::Error;
use tile_grid::Extent;

#[test]
fn test_lookup() {
    let json = r#"{
        "Norway": {"x_min": 4.5, "x_max": 31.2, "y_min": 57.9, "y_max": 71.2},
        "Belgium": {"x_min": 2.51, "x_max": 6.41, "y_min": 49.5, "y_max": 51.51}
    }"#;
    let table = BoundingBoxTable::parse(json, "").unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.countries().map(|c| c.as_str()).collect::<Vec<_>>(),
        vec!["Belgium", "Norway"]
    );
    assert_eq!(
        table.lookup("Norway").unwrap(),
        Extent {
            minx: 4.5,
            miny: 57.9,
            maxx: 31.2,
            maxy: 71.2,
        }
    );
    match table.lookup("norway") {
        Err(Error::UnknownCountry(name)) => assert_eq!(name, "norway"),
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(
        table.lookup("Narnia").unwrap_err().to_string(),
        "Country 'Narnia' not found in bounding box table"
    );
}

#[test]
fn test_invalid_table() {
    let json = r#"{"Norway": {"x_min": 4.5, "x_max": 31.2}}"#;
    match BoundingBoxTable::parse(json, "bboxes.json") {
        Err(Error::Config(msg)) => assert!(msg.starts_with("bboxes.json - missing field")),
        other => panic!("unexpected result {:?}", other),
    }
    assert!(BoundingBoxTable::from_file("no_such_file.json").is_err());
}

#[test]
fn test_shipped_table() {
    // Tests run in the crate directory
    let table = BoundingBoxTable::from_file(&format!("../{}", DEFAULT_COUNTRY_TABLE)).unwrap();
    assert!(!table.is_empty());
    for name in table.countries() {
        let bbox = table.lookup(name).unwrap();
        assert!(bbox.validate_lonlat().is_ok(), "{}: {:?}", name, bbox);
    }
    let nl = table.lookup("Netherlands").unwrap();
    assert!(nl.minx < 5.0 && nl.maxx > 7.0);
}
