//! Canonical SQL function catalog shared by every host.
//!
//! Index arguments are accepted in either form (INTEGER or TEXT address), so
//! most names serve both. The `_address` names exist where the result form
//! cannot be inferred from an argument, and as aliases for compatibility.

/// Canonical SQL function declaration metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlFunctionSpec {
    pub name: &'static str,
    pub n_arg: i32,
}

pub const H3_FUNCTIONS: &[SqlFunctionSpec] = &[
    // Inspection
    SqlFunctionSpec {
        name: "h3_is_valid",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "h3_get_base_cell",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "h3_is_pentagon",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "h3_get_resolution",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "h3_is_res_class_iii",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "h3_get_faces",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "h3_to_string",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "string_to_h3",
        n_arg: 1,
    },
    // Indexing
    SqlFunctionSpec {
        name: "geo_to_h3",
        n_arg: 3,
    },
    SqlFunctionSpec {
        name: "geo_to_h3_address",
        n_arg: 3,
    },
    SqlFunctionSpec {
        name: "h3_to_geo",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "h3_to_geo_boundary",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "h3_to_geo_boundary_polygon",
        n_arg: 1,
    },
    // Traversal
    SqlFunctionSpec {
        name: "k_ring",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "hex_ring",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "h3_distance",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "h3_line",
        n_arg: 2,
    },
    // Regions
    SqlFunctionSpec {
        name: "polyfill",
        n_arg: 3,
    },
    SqlFunctionSpec {
        name: "polyfill_address",
        n_arg: 3,
    },
    SqlFunctionSpec {
        name: "polyfill_wkt",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "polyfill_wkt_address",
        n_arg: 2,
    },
    // Hierarchy
    SqlFunctionSpec {
        name: "h3_to_parent",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "h3_to_parent_address",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "h3_to_children",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "h3_to_center_child",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "compact",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "compact_address",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "uncompact",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "uncompact_address",
        n_arg: 2,
    },
    // Measurement
    SqlFunctionSpec {
        name: "cell_area",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "point_dist",
        n_arg: 3,
    },
    SqlFunctionSpec {
        name: "exact_edge_length",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "hex_area",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "edge_length",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "num_hexagons",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "get_res_0_indexes",
        n_arg: 0,
    },
    SqlFunctionSpec {
        name: "get_res_0_indexes_addresses",
        n_arg: 0,
    },
    SqlFunctionSpec {
        name: "get_pentagon_indexes",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "get_pentagon_indexes_addresses",
        n_arg: 1,
    },
    // Directed edges
    SqlFunctionSpec {
        name: "h3_indexes_are_neighbors",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "get_h3_unidirectional_edge",
        n_arg: 2,
    },
    SqlFunctionSpec {
        name: "h3_unidirectional_edge_is_valid",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "get_origin_h3_index_from_unidirectional_edge",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "get_destination_h3_index_from_unidirectional_edge",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "get_h3_indexes_from_unidirectional_edge",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "get_h3_unidirectional_edges_from_hexagon",
        n_arg: 1,
    },
    SqlFunctionSpec {
        name: "get_h3_unidirectional_edge_boundary",
        n_arg: 1,
    },
];

/// Looks up the arity registered for `name`.
pub fn n_arg(name: &str) -> Option<i32> {
    H3_FUNCTIONS
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.n_arg)
}
