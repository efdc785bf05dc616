macro_rules! define_shared_cases {
    ($test_attr:meta) => {
const CELL: i64 = 628064021095030783;
const ADDRESS: &str = "8b754e649929fff";
const SQUARE_POINTS: &str =
    r#"'["POINT (0 0)", "POINT (0.02 0)", "POINT (0.02 0.02)", "POINT (0 0.02)"]'"#;

fn first_neighbor(db: &ActiveTestDb) -> i64 {
    let ring = db.query_list(&format!("SELECT hex_ring({CELL}, 1)"));
    ring[0].as_i64().expect("integer ring member")
}

// ── Inspection ───────────────────────────────────────────────────────────────

#[$test_attr]
fn is_valid_accepts_both_forms() {
    let db = ActiveTestDb::open();
    assert_eq!(db.query_i64(&format!("SELECT h3_is_valid('{ADDRESS}')")), 1);
    assert_eq!(db.query_i64(&format!("SELECT h3_is_valid({CELL})")), 1);
    assert_eq!(db.query_i64("SELECT h3_is_valid(0)"), 0);
    assert_eq!(db.query_i64("SELECT h3_is_valid('not an address')"), 0);
}

#[$test_attr]
fn base_cell_and_resolution() {
    let db = ActiveTestDb::open();
    assert_eq!(db.query_i64(&format!("SELECT h3_get_base_cell('{ADDRESS}')")), 58);
    assert_eq!(db.query_i64(&format!("SELECT h3_get_resolution({CELL})")), 11);
    assert_eq!(db.query_i64(&format!("SELECT h3_is_res_class_iii({CELL})")), 1);
    assert_eq!(db.query_i64(&format!("SELECT h3_is_pentagon({CELL})")), 0);
}

#[$test_attr]
fn string_conversions() {
    let db = ActiveTestDb::open();
    assert_eq!(db.query_text(&format!("SELECT h3_to_string({CELL})")), ADDRESS);
    assert_eq!(db.query_i64(&format!("SELECT string_to_h3('{ADDRESS}')")), CELL);
}

#[$test_attr]
fn faces_propagate_null() {
    let db = ActiveTestDb::open();
    assert!(db.query_is_null("SELECT h3_get_faces(NULL)"));
    let faces = db.query_list(&format!("SELECT h3_get_faces('{ADDRESS}')"));
    assert!(!faces.is_empty());
    assert!(faces.iter().all(|f| f.as_i64().is_some_and(|f| (0..20).contains(&f))));
}

#[$test_attr]
fn pure_function_rejects_null() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT h3_get_resolution(NULL)");
    assert_eq!(err, "h3_get_resolution: h3 must not be NULL");
}

#[$test_attr]
fn index_argument_must_be_integer_or_text() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT h3_get_resolution(1.5)");
    assert!(err.contains("must be an INTEGER index or a TEXT address"), "got: {err}");
}

#[$test_attr]
fn non_canonical_address_is_invalid() {
    let db = ActiveTestDb::open();
    assert_eq!(db.query_i64(&format!("SELECT h3_is_valid('+{ADDRESS}')")), 0);
    assert_eq!(db.query_i64(&format!("SELECT h3_is_valid(' {ADDRESS}')")), 0);
    let err = db.query_error(&format!("SELECT string_to_h3('+{ADDRESS}')"));
    assert!(err.starts_with("string_to_h3: invalid argument"), "got: {err}");
}

// ── Indexing ─────────────────────────────────────────────────────────────────

#[$test_attr]
fn geo_to_h3_golden_values() {
    let db = ActiveTestDb::open();
    assert_eq!(db.query_text("SELECT geo_to_h3_address(0.0, 0.0, 11)"), ADDRESS);
    assert_eq!(db.query_i64("SELECT geo_to_h3(0.0, 0.0, 11)"), CELL);
    assert_eq!(db.query_i64("SELECT geo_to_h3(0, 0, 11)"), CELL);
}

#[$test_attr]
fn geo_to_h3_rejects_bad_resolution() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT geo_to_h3(0.0, 0.0, 16)");
    assert!(err.starts_with("geo_to_h3: invalid argument"), "got: {err}");
}

#[$test_attr]
fn centre_and_boundary_are_wkt() {
    let db = ActiveTestDb::open();
    let centre = db.query_text(&format!("SELECT h3_to_geo('{ADDRESS}')"));
    assert!(centre.starts_with("POINT ("), "got: {centre}");

    let boundary = db.query_list(&format!("SELECT h3_to_geo_boundary({CELL})"));
    assert_eq!(boundary.len(), 6);
    assert!(boundary
        .iter()
        .all(|p| p.as_str().is_some_and(|p| p.starts_with("POINT ("))));

    let polygon = db.query_text(&format!("SELECT h3_to_geo_boundary_polygon({CELL})"));
    assert!(polygon.starts_with("POLYGON (("), "got: {polygon}");
}

#[$test_attr]
fn centre_maps_back_to_the_cell() {
    let db = ActiveTestDb::open();
    let centre = db.query_text(&format!("SELECT h3_to_geo({CELL})"));
    let coords: Vec<f64> = centre
        .trim_start_matches("POINT (")
        .trim_end_matches(')')
        .split(' ')
        .map(|c| c.parse().unwrap())
        .collect();
    let again = db.query_i64(&format!(
        "SELECT geo_to_h3({}, {}, 11)",
        coords[1], coords[0]
    ));
    assert_eq!(again, CELL);
}

#[$test_attr]
fn integer_arguments_beyond_32_bits_are_out_of_range() {
    let db = ActiveTestDb::open();
    assert_eq!(
        db.query_error("SELECT geo_to_h3(0.0, 0.0, 4294967307)"),
        "geo_to_h3: res is out of range"
    );
    assert_eq!(
        db.query_error("SELECT geo_to_h3_address(0.0, 0.0, -4294967285)"),
        "geo_to_h3_address: res is out of range"
    );
    assert_eq!(
        db.query_error(&format!("SELECT k_ring('{ADDRESS}', 4294967297)")),
        "k_ring: k is out of range"
    );
}

// ── Traversal ────────────────────────────────────────────────────────────────

#[$test_attr]
fn result_form_follows_argument_form() {
    let db = ActiveTestDb::open();
    assert_eq!(
        db.query_type(&format!("SELECT h3_to_parent('{ADDRESS}', 9)")),
        SQLITE_TEXT
    );
    assert_eq!(
        db.query_type(&format!("SELECT h3_to_parent({CELL}, 9)")),
        SQLITE_INTEGER
    );
    assert_eq!(
        db.query_i64(&format!(
            "SELECT string_to_h3(h3_to_parent('{ADDRESS}', 9)) = h3_to_parent({CELL}, 9)"
        )),
        1
    );
    assert_eq!(
        db.query_text(&format!("SELECT h3_to_parent_address('{ADDRESS}', 9)")),
        db.query_text(&format!("SELECT h3_to_parent('{ADDRESS}', 9)"))
    );
}

#[$test_attr]
fn k_ring_lists() {
    let db = ActiveTestDb::open();
    let addresses = db.query_list(&format!("SELECT k_ring('{ADDRESS}', 1)"));
    assert_eq!(addresses.len(), 7);
    assert!(addresses.iter().all(serde_json::Value::is_string));
    assert!(addresses.iter().any(|a| a == ADDRESS));

    let indexes = db.query_list(&format!("SELECT k_ring({CELL}, 2)"));
    assert_eq!(indexes.len(), 19);
    assert!(indexes.iter().all(|i| i.as_i64().is_some()));
}

#[$test_attr]
fn hex_ring_excludes_origin() {
    let db = ActiveTestDb::open();
    let ring = db.query_list(&format!("SELECT hex_ring({CELL}, 1)"));
    assert_eq!(ring.len(), 6);
    assert!(ring.iter().all(|c| c.as_i64() != Some(CELL)));
}

#[$test_attr]
fn hex_ring_around_pentagon_fails() {
    let db = ActiveTestDb::open();
    let pentagons = db.query_list("SELECT get_pentagon_indexes(5)");
    let pentagon = pentagons[0].as_i64().unwrap();
    let err = db.query_error(&format!("SELECT hex_ring({pentagon}, 1)"));
    assert!(err.starts_with("hex_ring: no result exists"), "got: {err}");
}

#[$test_attr]
fn distance_null_propagation() {
    let db = ActiveTestDb::open();
    assert!(db.query_is_null(&format!("SELECT h3_distance('{ADDRESS}', NULL)")));
    assert!(db.query_is_null("SELECT h3_distance(NULL, NULL)"));
    assert!(db.query_is_null(&format!("SELECT h3_line(NULL, {CELL})")));
}

#[$test_attr]
fn distance_and_line() {
    let db = ActiveTestDb::open();
    assert_eq!(db.query_i64(&format!("SELECT h3_distance({CELL}, {CELL})")), 0);

    let neighbor = first_neighbor(&db);
    assert_eq!(
        db.query_i64(&format!("SELECT h3_distance({CELL}, {neighbor})")),
        1
    );
    let line = db.query_list(&format!("SELECT h3_line({CELL}, {neighbor})"));
    assert_eq!(line.len(), 2);
}

#[$test_attr]
fn distance_between_mixed_forms_uses_first_form() {
    let db = ActiveTestDb::open();
    assert_eq!(
        db.query_i64(&format!("SELECT h3_distance('{ADDRESS}', {CELL})")),
        0
    );
    let line = db.query_list(&format!("SELECT h3_line('{ADDRESS}', {CELL})"));
    assert_eq!(line, vec![serde_json::Value::from(ADDRESS)]);
}

#[$test_attr]
fn distance_too_far_is_null() {
    let db = ActiveTestDb::open();
    assert!(db.query_is_null(&format!(
        "SELECT h3_distance({CELL}, geo_to_h3(45.0, 45.0, 11))"
    )));
}

#[$test_attr]
fn distance_between_resolutions_is_an_error() {
    let db = ActiveTestDb::open();
    let err = db.query_error(&format!(
        "SELECT h3_distance({CELL}, geo_to_h3(0.0, 0.0, 10))"
    ));
    assert_eq!(
        err,
        "h3_distance: cannot compute grid distance between cells of different resolutions (11 and 10)"
    );
    let err = db.query_error(&format!(
        "SELECT h3_line({CELL}, geo_to_h3(0.0, 0.0, 10))"
    ));
    assert!(err.contains("cannot compute grid line"), "got: {err}");
}

// ── Regions ──────────────────────────────────────────────────────────────────

#[$test_attr]
fn polyfill_forms_agree() {
    let db = ActiveTestDb::open();
    let indexes = db.query_list(&format!("SELECT polyfill({SQUARE_POINTS}, '[]', 9)"));
    let addresses = db.query_list(&format!("SELECT polyfill_address({SQUARE_POINTS}, '[]', 9)"));
    assert!(!indexes.is_empty());
    assert_eq!(indexes.len(), addresses.len());
    assert!(indexes.iter().all(|i| i.as_i64().is_some()));
    assert!(addresses.iter().all(serde_json::Value::is_string));

    let wkt = db.query_list(
        "SELECT polyfill_wkt('POLYGON ((0 0, 0.02 0, 0.02 0.02, 0 0.02))', 9)",
    );
    assert_eq!(wkt, indexes);
    let wkt_addresses = db.query_list(
        "SELECT polyfill_wkt_address('POLYGON ((0 0, 0.02 0, 0.02 0.02, 0 0.02))', 9)",
    );
    assert_eq!(wkt_addresses, addresses);
}

#[$test_attr]
fn polyfill_rejects_malformed_lists() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT polyfill('not json', '[]', 9)");
    assert!(err.starts_with("polyfill: invalid JSON list"), "got: {err}");

    let err = db.query_error(r#"SELECT polyfill('["POINT (0 0)", "POINT (1)"]', '[]', 9)"#);
    assert!(err.starts_with("polyfill: malformed geometry"), "got: {err}");
}

// ── Hierarchy ────────────────────────────────────────────────────────────────

#[$test_attr]
fn children_and_center_child() {
    let db = ActiveTestDb::open();
    let children = db.query_list(&format!("SELECT h3_to_children({CELL}, 12)"));
    assert_eq!(children.len(), 7);
    let center = db.query_i64(&format!("SELECT h3_to_center_child({CELL}, 12)"));
    assert!(children.iter().any(|c| c.as_i64() == Some(center)));
}

#[$test_attr]
fn compact_children_yields_parent() {
    let db = ActiveTestDb::open();
    let parent = db.query_i64(&format!("SELECT h3_to_parent({CELL}, 9)"));
    let compacted = db.query_list(&format!(
        "SELECT compact(h3_to_children({parent}, 11))"
    ));
    assert_eq!(compacted, vec![serde_json::Value::from(parent)]);

    let expanded = db.query_list(&format!("SELECT uncompact('[{parent}]', 11)"));
    assert_eq!(expanded.len(), 49);
}

#[$test_attr]
fn compact_address_form() {
    let db = ActiveTestDb::open();
    let parent = db.query_text(&format!("SELECT h3_to_parent('{ADDRESS}', 10)"));
    let compacted = db.query_list(&format!(
        "SELECT compact_address(h3_to_children('{parent}', 11))"
    ));
    assert_eq!(compacted, vec![serde_json::Value::from(parent.clone())]);
    let expanded = db.query_list(&format!("SELECT uncompact_address('[\"{parent}\"]', 11)"));
    assert_eq!(expanded.len(), 7);
    assert!(expanded.iter().any(|c| c == ADDRESS));
}

#[$test_attr]
fn address_variants_answer_text_for_integer_input() {
    let db = ActiveTestDb::open();
    assert_eq!(
        db.query_type(&format!("SELECT h3_to_parent_address({CELL}, 9)")),
        SQLITE_TEXT
    );
    assert_eq!(
        db.query_text(&format!("SELECT h3_to_parent_address({CELL}, 9)")),
        db.query_text(&format!("SELECT h3_to_parent('{ADDRESS}', 9)"))
    );

    let parent = db.query_i64(&format!("SELECT h3_to_parent({CELL}, 10)"));
    let parent_address = db.query_text(&format!("SELECT h3_to_string({parent})"));
    let compacted = db.query_list(&format!(
        "SELECT compact_address(h3_to_children({parent}, 11))"
    ));
    assert_eq!(compacted, vec![serde_json::Value::from(parent_address.clone())]);

    let expanded = db.query_list(&format!("SELECT uncompact_address('[{parent}]', 11)"));
    assert_eq!(expanded.len(), 7);
    assert!(expanded.iter().all(serde_json::Value::is_string));
    assert!(expanded.iter().any(|c| c == ADDRESS));
}

#[$test_attr]
fn compact_of_empty_list_is_empty() {
    let db = ActiveTestDb::open();
    assert_eq!(db.query_text("SELECT compact('[]')"), "[]");
}

#[$test_attr]
fn compact_rejects_bad_lists() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT compact('not json')");
    assert!(err.starts_with("compact: invalid JSON list"), "got: {err}");
    let err = db.query_error("SELECT compact('[1.5]')");
    assert!(err.starts_with("compact: invalid argument"), "got: {err}");
}

#[$test_attr]
fn uncompact_to_coarser_resolution_fails() {
    let db = ActiveTestDb::open();
    let err = db.query_error(&format!("SELECT uncompact('[{CELL}]', 10)"));
    assert!(err.starts_with("uncompact: invalid argument"), "got: {err}");
}

// ── Measurement ──────────────────────────────────────────────────────────────

#[$test_attr]
fn cell_area_units() {
    let db = ActiveTestDb::open();
    let m2 = db.query_f64(&format!("SELECT cell_area({CELL}, 'm2')"));
    let km2 = db.query_f64(&format!("SELECT cell_area('{ADDRESS}', 'km2')"));
    assert!((m2 / 1e6 - km2).abs() < 1e-9, "{m2} vs {km2}");

    let err = db.query_error(&format!("SELECT cell_area({CELL}, 'furlongs')"));
    assert!(err.starts_with("cell_area: invalid argument"), "got: {err}");
}

#[$test_attr]
fn point_dist_with_negative_coordinates() {
    let db = ActiveTestDb::open();
    let km = db.query_f64("SELECT point_dist('POINT (-1 0)', 'POINT (1 0)', 'km')");
    assert!((km - 222.39).abs() < 0.1, "got {km}");
    assert!(db.query_is_null("SELECT point_dist(NULL, 'POINT (1 0)', 'km')"));
}

#[$test_attr]
fn per_resolution_catalogues() {
    let db = ActiveTestDb::open();
    assert_eq!(db.query_i64("SELECT num_hexagons(0)"), 122);
    assert!(db.query_f64("SELECT hex_area(5, 'km2')") > db.query_f64("SELECT hex_area(6, 'km2')"));
    assert!(db.query_f64("SELECT edge_length(5, 'm')") > 0.0);

    assert_eq!(db.query_list("SELECT get_res_0_indexes()").len(), 122);
    let base = db.query_list("SELECT get_res_0_indexes_addresses()");
    assert!(base.iter().all(serde_json::Value::is_string));

    assert_eq!(db.query_list("SELECT get_pentagon_indexes(3)").len(), 12);
    let pentagons = db.query_list("SELECT get_pentagon_indexes_addresses(3)");
    assert_eq!(pentagons.len(), 12);
    for p in pentagons {
        let p = p.as_str().unwrap();
        assert_eq!(db.query_i64(&format!("SELECT h3_is_pentagon('{p}')")), 1);
    }
}

// ── Directed edges ───────────────────────────────────────────────────────────

#[$test_attr]
fn neighbors() {
    let db = ActiveTestDb::open();
    let neighbor = first_neighbor(&db);
    assert_eq!(
        db.query_i64(&format!("SELECT h3_indexes_are_neighbors({CELL}, {neighbor})")),
        1
    );
    assert_eq!(
        db.query_i64(&format!("SELECT h3_indexes_are_neighbors({CELL}, {CELL})")),
        0
    );
    assert!(db.query_is_null(&format!("SELECT h3_indexes_are_neighbors({CELL}, NULL)")));
}

#[$test_attr]
fn edge_round_trip() {
    let db = ActiveTestDb::open();
    let neighbor = first_neighbor(&db);
    let edge = db.query_i64(&format!(
        "SELECT get_h3_unidirectional_edge({CELL}, {neighbor})"
    ));

    assert_eq!(
        db.query_i64(&format!("SELECT h3_unidirectional_edge_is_valid({edge})")),
        1
    );
    assert_eq!(
        db.query_i64(&format!(
            "SELECT get_origin_h3_index_from_unidirectional_edge({edge})"
        )),
        CELL
    );
    assert_eq!(
        db.query_i64(&format!(
            "SELECT get_destination_h3_index_from_unidirectional_edge({edge})"
        )),
        neighbor
    );
    assert_eq!(
        db.query_list(&format!("SELECT get_h3_indexes_from_unidirectional_edge({edge})")),
        vec![serde_json::Value::from(CELL), serde_json::Value::from(neighbor)]
    );
    assert_eq!(
        db.query_list(&format!("SELECT get_h3_unidirectional_edge_boundary({edge})")).len(),
        2
    );
    assert!(db.query_f64(&format!("SELECT exact_edge_length({edge}, 'm')")) > 0.0);
}

#[$test_attr]
fn edge_between_non_neighbors_is_null() {
    let db = ActiveTestDb::open();
    assert!(db.query_is_null(&format!(
        "SELECT get_h3_unidirectional_edge({CELL}, {CELL})"
    )));
}

#[$test_attr]
fn edges_from_hexagon() {
    let db = ActiveTestDb::open();
    let edges = db.query_list(&format!(
        "SELECT get_h3_unidirectional_edges_from_hexagon('{ADDRESS}')"
    ));
    assert_eq!(edges.len(), 6);
    for edge in edges {
        let edge = edge.as_str().unwrap();
        assert_eq!(
            db.query_text(&format!(
                "SELECT get_origin_h3_index_from_unidirectional_edge('{edge}')"
            )),
            ADDRESS
        );
    }
}

#[$test_attr]
fn edge_functions_propagate_null() {
    let db = ActiveTestDb::open();
    for sql in [
        "SELECT h3_unidirectional_edge_is_valid(NULL)",
        "SELECT get_origin_h3_index_from_unidirectional_edge(NULL)",
        "SELECT get_destination_h3_index_from_unidirectional_edge(NULL)",
        "SELECT get_h3_indexes_from_unidirectional_edge(NULL)",
        "SELECT get_h3_unidirectional_edges_from_hexagon(NULL)",
        "SELECT get_h3_unidirectional_edge_boundary(NULL)",
        "SELECT exact_edge_length(NULL, 'm')",
        "SELECT get_h3_unidirectional_edge(NULL, NULL)",
    ] {
        assert!(db.query_is_null(sql), "{sql} should be NULL");
    }
}

#[$test_attr]
fn cells_are_not_edges() {
    let db = ActiveTestDb::open();
    assert_eq!(
        db.query_i64(&format!("SELECT h3_unidirectional_edge_is_valid({CELL})")),
        0
    );
    assert_eq!(
        db.query_i64("SELECT h3_unidirectional_edge_is_valid('not hex')"),
        0
    );
}
    };
}
