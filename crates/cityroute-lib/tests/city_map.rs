mod common;

use cityroute_lib::{build_graph, load_city_map, CityMap, Error, Position};

use common::fixtures_dir;

#[test]
fn fixture_map_loads_places_and_streets() {
    let map = load_city_map(&fixtures_dir().join("city.json")).expect("fixture loads");

    assert_eq!(map.places.len(), 33);
    assert_eq!(map.streets.len(), 98);
    assert_eq!(map.position("Cinema"), Some(Position(3.5, 1.5)));
}

#[test]
fn english_keys_are_accepted() {
    let map = CityMap::from_json_str(
        r#"{"nodes": {"A": [0, 0], "B": [1, 0]}, "streets": [["A", "B", 2.5]]}"#,
    )
    .unwrap();

    let graph = build_graph(&map).unwrap();
    assert_eq!(graph.edge_weight("A", "B").unwrap(), 2.5);
}

#[test]
fn streets_to_unlisted_places_are_skipped() {
    let map = CityMap::from_json_str(
        r#"{"nodos": {"A": [0, 0], "B": [1, 0]}, "calles": [["A", "B", 1], ["B", "Z", "oops"]]}"#,
    )
    .unwrap();

    let graph = build_graph(&map).unwrap();
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn non_numeric_street_time_is_invalid() {
    let map = CityMap::from_json_str(
        r#"{"nodos": {"A": [0, 0], "B": [1, 0]}, "calles": [["A", "B", "fast"]]}"#,
    )
    .unwrap();

    assert!(matches!(
        build_graph(&map).unwrap_err(),
        Error::InvalidWeight { .. }
    ));
}

#[test]
fn malformed_map_is_reported() {
    let err = CityMap::from_json_str(r#"{"nodos": {"A": [0, 0]}}"#).unwrap_err();
    assert!(matches!(err, Error::MalformedDocument { .. }));

    let err = CityMap::from_json_str(r#"{"nodos": {}, "calles": [["A", "B"]]}"#).unwrap_err();
    assert!(matches!(err, Error::MalformedDocument { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_city_map(&fixtures_dir().join("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn places_keep_document_order() {
    let map = CityMap::from_json_str(
        r#"{"nodos": {"Zoo": [0, 0], "Bank": [1, 0], "Museum": [2, 0]}, "calles": []}"#,
    )
    .unwrap();

    let graph = build_graph(&map).unwrap();
    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["Zoo", "Bank", "Museum"]);

    let fixture = load_city_map(&fixtures_dir().join("city.json")).unwrap();
    let first: Vec<&str> = fixture.places.keys().take(3).map(String::as_str).collect();
    assert_eq!(first, vec!["Cinema", "Gas Station", "School"]);
}
