//! SQLite extension registration via raw FFI.
//!
//! Registers all H3 functions on a raw `*mut sqlite3` handle. Every
//! registration carries its own clone of the shared indexing library handle
//! as SQLite user data. On native targets also exports the
//! `sqlite3_h3udf_init` C entry point so SQLite can load this library as a
//! loadable extension.
//!
//! Index arguments are accepted as INTEGER (the 64-bit index) or TEXT (the
//! hexadecimal address) and results come back in the same form. Lists cross
//! the boundary as JSON array text.

use crate::sqlite_compat::sqlite_transient;
use crate::sqlite_compat::*;
use std::ffi::{c_void, CString};
use std::os::raw::c_int;
use std::sync::Arc;

use h3_udf_core::function_catalog::H3_FUNCTIONS;
use h3_udf_core::functions::edges::*;
use h3_udf_core::functions::hierarchy::*;
use h3_udf_core::functions::indexing::*;
use h3_udf_core::functions::inspection::*;
use h3_udf_core::functions::measurement::*;
use h3_udf_core::functions::regions::*;
use h3_udf_core::functions::traversal::*;
use h3_udf_core::list::{
    parse_index_list, parse_nested_text_list, parse_text_list, to_json, IndexList,
};
use h3_udf_core::{H3UdfError, H3oLibrary, IndexRepr, IndexingLibrary};

// ── Constants ────────────────────────────────────────────────────────────────

const DET: c_int = SQLITE_UTF8 | SQLITE_DETERMINISTIC | SQLITE_INNOCUOUS;

type SharedLibrary = Arc<dyn IndexingLibrary>;

// ── Argument-extraction helpers ──────────────────────────────────────────────

enum SqlArg<T> {
    Null,
    Value(T),
    InvalidType,
    OutOfRange,
}

unsafe fn get_text<'a>(argv: *mut *mut sqlite3_value, i: usize) -> SqlArg<&'a str> {
    let v = *argv.add(i);
    if sqlite3_value_type(v) == SQLITE_NULL {
        return SqlArg::Null;
    }
    let ptr = sqlite3_value_text(v);
    let len = sqlite3_value_bytes(v) as usize;
    if ptr.is_null() {
        return SqlArg::InvalidType;
    }
    match std::str::from_utf8(std::slice::from_raw_parts(ptr as _, len)) {
        Ok(s) => SqlArg::Value(s),
        Err(_) => SqlArg::InvalidType,
    }
}

unsafe fn get_f64_arg(argv: *mut *mut sqlite3_value, i: usize) -> SqlArg<f64> {
    let v = *argv.add(i);
    match sqlite3_value_type(v) {
        SQLITE_NULL => SqlArg::Null,
        SQLITE_INTEGER | SQLITE_FLOAT => SqlArg::Value(sqlite3_value_double(v)),
        _ => SqlArg::InvalidType,
    }
}

unsafe fn get_i32_arg(argv: *mut *mut sqlite3_value, i: usize) -> SqlArg<i32> {
    let v = *argv.add(i);
    match sqlite3_value_type(v) {
        SQLITE_NULL => SqlArg::Null,
        SQLITE_INTEGER => match i32::try_from(sqlite3_value_int64(v)) {
            Ok(n) => SqlArg::Value(n),
            Err(_) => SqlArg::OutOfRange,
        },
        _ => SqlArg::InvalidType,
    }
}

unsafe fn get_i64_arg(argv: *mut *mut sqlite3_value, i: usize) -> SqlArg<i64> {
    let v = *argv.add(i);
    match sqlite3_value_type(v) {
        SQLITE_NULL => SqlArg::Null,
        SQLITE_INTEGER => SqlArg::Value(sqlite3_value_int64(v)),
        _ => SqlArg::InvalidType,
    }
}

/// An H3 index argument in the form the caller passed it.
#[derive(Debug)]
enum H3Value {
    Index(i64),
    Address(String),
}

impl H3Value {
    fn into_repr<R: IndexRepr>(self) -> Result<R, H3UdfError> {
        let index = match self {
            H3Value::Index(h3) => h3.to_index()?,
            H3Value::Address(h3) => h3.to_index()?,
        };
        Ok(R::from_index(index))
    }
}

unsafe fn get_h3_arg(argv: *mut *mut sqlite3_value, i: usize) -> SqlArg<H3Value> {
    let v = *argv.add(i);
    match sqlite3_value_type(v) {
        SQLITE_NULL => SqlArg::Null,
        SQLITE_INTEGER => SqlArg::Value(H3Value::Index(sqlite3_value_int64(v))),
        SQLITE_TEXT => match get_text(argv, i) {
            SqlArg::Value(s) => SqlArg::Value(H3Value::Address(s.to_owned())),
            SqlArg::Null => SqlArg::Null,
            SqlArg::InvalidType | SqlArg::OutOfRange => SqlArg::InvalidType,
        },
        _ => SqlArg::InvalidType,
    }
}

/// Two nullable index arguments brought to a single form: the form of the
/// first non-NULL one.
#[derive(Debug)]
enum H3Pair {
    Indexes(Option<i64>, Option<i64>),
    Addresses(Option<String>, Option<String>),
}

impl H3Pair {
    fn new(a: Option<H3Value>, b: Option<H3Value>) -> Result<Self, H3UdfError> {
        let addresses = matches!(
            (&a, &b),
            (Some(H3Value::Address(_)), _) | (None, Some(H3Value::Address(_)))
        );
        if addresses {
            Ok(Self::Addresses(
                a.map(H3Value::into_repr::<String>).transpose()?,
                b.map(H3Value::into_repr::<String>).transpose()?,
            ))
        } else {
            Ok(Self::Indexes(
                a.map(H3Value::into_repr::<i64>).transpose()?,
                b.map(H3Value::into_repr::<i64>).transpose()?,
            ))
        }
    }
}

// ── Result-setting helpers ───────────────────────────────────────────────────

fn checked_c_int_len(len: usize) -> Option<c_int> {
    c_int::try_from(len).ok()
}

const ERROR_MSG_TOO_LARGE: &str = "internal error: error message too large";
const PANIC_IN_CALLBACK_MSG: &str = "panic in SQLite callback";

unsafe fn set_text(ctx: *mut sqlite3_context, s: &str) {
    let Some(len) = checked_c_int_len(s.len()) else {
        set_error(ctx, "internal error: text result too large");
        return;
    };
    sqlite3_result_text(ctx, s.as_ptr().cast(), len, sqlite_transient());
}

unsafe fn set_null(ctx: *mut sqlite3_context) {
    sqlite3_result_null(ctx);
}

unsafe fn set_error(ctx: *mut sqlite3_context, msg: &str) {
    if let Some(len) = checked_c_int_len(msg.len()) {
        sqlite3_result_error(ctx, msg.as_ptr().cast(), len);
        return;
    }

    let len = c_int::try_from(ERROR_MSG_TOO_LARGE.len())
        .expect("fallback error length must fit in c_int");
    sqlite3_result_error(ctx, ERROR_MSG_TOO_LARGE.as_ptr().cast(), len);
}

/// A value a callback can hand back to SQLite. `label` prefixes error
/// messages.
trait SqlResult {
    unsafe fn set(self, ctx: *mut sqlite3_context, label: &str);
}

impl SqlResult for bool {
    unsafe fn set(self, ctx: *mut sqlite3_context, _label: &str) {
        sqlite3_result_int(ctx, self as c_int);
    }
}

impl SqlResult for i32 {
    unsafe fn set(self, ctx: *mut sqlite3_context, _label: &str) {
        sqlite3_result_int(ctx, self);
    }
}

impl SqlResult for i64 {
    unsafe fn set(self, ctx: *mut sqlite3_context, _label: &str) {
        sqlite3_result_int64(ctx, self);
    }
}

impl SqlResult for f64 {
    unsafe fn set(self, ctx: *mut sqlite3_context, _label: &str) {
        sqlite3_result_double(ctx, self);
    }
}

impl SqlResult for String {
    unsafe fn set(self, ctx: *mut sqlite3_context, _label: &str) {
        set_text(ctx, &self);
    }
}

macro_rules! json_list_result {
    ($($t:ty),*) => {
        $(
            impl SqlResult for Vec<$t> {
                unsafe fn set(self, ctx: *mut sqlite3_context, _label: &str) {
                    set_text(ctx, &to_json(self));
                }
            }
        )*
    };
}

json_list_result!(i32, i64, String);

impl<T: SqlResult> SqlResult for Option<T> {
    unsafe fn set(self, ctx: *mut sqlite3_context, label: &str) {
        match self {
            Some(v) => v.set(ctx, label),
            None => set_null(ctx),
        }
    }
}

impl<T: SqlResult> SqlResult for Result<T, H3UdfError> {
    unsafe fn set(self, ctx: *mut sqlite3_context, label: &str) {
        match self {
            Ok(v) => v.set(ctx, label),
            Err(e) => set_error(ctx, &format!("{label}: {e}")),
        }
    }
}

unsafe fn xfunc_guard<F>(ctx: *mut sqlite3_context, label: &str, f: F)
where
    F: FnOnce(),
{
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
    if result.is_err() {
        log::warn!("{label}: callback panicked");
        set_error(ctx, &format!("{label}: {PANIC_IN_CALLBACK_MSG}"));
    }
}

// ── Argument policies ────────────────────────────────────────────────────────
//
// `optional_*` helpers pass NULL through as `None`; `require_*` helpers
// reject it. Both set the SQL error themselves and return `None` when the
// argument has the wrong type.

unsafe fn optional_arg<T>(
    ctx: *mut sqlite3_context,
    arg: SqlArg<T>,
    fn_name: &str,
    arg_name: &str,
    expected: &str,
) -> Option<Option<T>> {
    match arg {
        SqlArg::Value(v) => Some(Some(v)),
        SqlArg::Null => Some(None),
        SqlArg::InvalidType => {
            set_error(ctx, &format!("{fn_name}: {arg_name} must be {expected}"));
            None
        }
        SqlArg::OutOfRange => {
            set_error(ctx, &format!("{fn_name}: {arg_name} is out of range"));
            None
        }
    }
}

unsafe fn required_arg<T>(
    ctx: *mut sqlite3_context,
    arg: SqlArg<T>,
    fn_name: &str,
    arg_name: &str,
    expected: &str,
) -> Option<T> {
    match optional_arg(ctx, arg, fn_name, arg_name, expected)? {
        Some(v) => Some(v),
        None => {
            set_error(ctx, &format!("{fn_name}: {arg_name} must not be NULL"));
            None
        }
    }
}

unsafe fn require_f64_arg(
    ctx: *mut sqlite3_context,
    argv: *mut *mut sqlite3_value,
    i: usize,
    fn_name: &str,
    arg_name: &str,
) -> Option<f64> {
    required_arg(ctx, get_f64_arg(argv, i), fn_name, arg_name, "numeric")
}

unsafe fn require_i32_arg(
    ctx: *mut sqlite3_context,
    argv: *mut *mut sqlite3_value,
    i: usize,
    fn_name: &str,
    arg_name: &str,
) -> Option<i32> {
    required_arg(ctx, get_i32_arg(argv, i), fn_name, arg_name, "integer")
}

unsafe fn require_i64_arg(
    ctx: *mut sqlite3_context,
    argv: *mut *mut sqlite3_value,
    i: usize,
    fn_name: &str,
    arg_name: &str,
) -> Option<i64> {
    required_arg(ctx, get_i64_arg(argv, i), fn_name, arg_name, "integer")
}

unsafe fn require_text_arg<'a>(
    ctx: *mut sqlite3_context,
    argv: *mut *mut sqlite3_value,
    i: usize,
    fn_name: &str,
    arg_name: &str,
) -> Option<&'a str> {
    required_arg(ctx, get_text(argv, i), fn_name, arg_name, "valid UTF-8 text")
}

unsafe fn optional_text_arg<'a>(
    ctx: *mut sqlite3_context,
    argv: *mut *mut sqlite3_value,
    i: usize,
    fn_name: &str,
    arg_name: &str,
) -> Option<Option<&'a str>> {
    optional_arg(ctx, get_text(argv, i), fn_name, arg_name, "valid UTF-8 text")
}

const H3_EXPECTED: &str = "an INTEGER index or a TEXT address";

unsafe fn require_h3_arg(
    ctx: *mut sqlite3_context,
    argv: *mut *mut sqlite3_value,
    i: usize,
    fn_name: &str,
    arg_name: &str,
) -> Option<H3Value> {
    required_arg(ctx, get_h3_arg(argv, i), fn_name, arg_name, H3_EXPECTED)
}

unsafe fn optional_h3_arg(
    ctx: *mut sqlite3_context,
    argv: *mut *mut sqlite3_value,
    i: usize,
    fn_name: &str,
    arg_name: &str,
) -> Option<Option<H3Value>> {
    optional_arg(ctx, get_h3_arg(argv, i), fn_name, arg_name, H3_EXPECTED)
}

// ── Library handle ───────────────────────────────────────────────────────────

/// Library handle registered with the function being called.
unsafe fn library<'a>(ctx: *mut sqlite3_context) -> &'a dyn IndexingLibrary {
    let data = sqlite3_user_data(ctx).cast::<SharedLibrary>();
    &**data
}

unsafe extern "C" fn drop_library(data: *mut c_void) {
    if !data.is_null() {
        drop(Box::from_raw(data.cast::<SharedLibrary>()));
    }
}

fn polyfill_json<R: IndexRepr>(
    lib: &dyn IndexingLibrary,
    points: &str,
    holes: &str,
    res: i32,
) -> Result<Vec<R>, H3UdfError> {
    let points = parse_text_list(points)?;
    let holes = parse_nested_text_list(holes)?;
    polyfill(lib, &points, &holes, res)
}

// ── Callback macros ──────────────────────────────────────────────────────────
//
// Each macro generates an `unsafe extern "C" fn` with the standard SQLite
// scalar-function signature. Trailing `name = getter(position)` pairs fetch
// scalar arguments; the fetched name doubles as the argument name in error
// messages.

/// 1 index (+ scalars) → T, answered in the form of the index argument.
macro_rules! xfunc_h3 {
    ($name:ident, $label:expr, $func:ident $(, $arg:ident = $get:ident($pos:literal))*) => {
        unsafe extern "C" fn $name(
            ctx: *mut sqlite3_context,
            _n: c_int,
            argv: *mut *mut sqlite3_value,
        ) {
            xfunc_guard(ctx, $label, || {
                let lib = library(ctx);
                let Some(h3) = require_h3_arg(ctx, argv, 0, $label, "h3") else {
                    return;
                };
                $(
                    let Some($arg) = $get(ctx, argv, $pos, $label, stringify!($arg)) else {
                        return;
                    };
                )*
                match h3 {
                    H3Value::Index(h3) => $func(lib, &h3 $(, $arg)*).set(ctx, $label),
                    H3Value::Address(h3) => $func(lib, &h3 $(, $arg)*).set(ctx, $label),
                }
            });
        }
    };
}

/// 1 nullable index (+ scalars) → T. NULL is handed to the function as `None`.
macro_rules! xfunc_h3_nullable {
    ($name:ident, $label:expr, $func:ident $(, $arg:ident = $get:ident($pos:literal))*) => {
        unsafe extern "C" fn $name(
            ctx: *mut sqlite3_context,
            _n: c_int,
            argv: *mut *mut sqlite3_value,
        ) {
            xfunc_guard(ctx, $label, || {
                let lib = library(ctx);
                let Some(h3) = optional_h3_arg(ctx, argv, 0, $label, "h3") else {
                    return;
                };
                $(
                    let Some($arg) = $get(ctx, argv, $pos, $label, stringify!($arg)) else {
                        return;
                    };
                )*
                match h3 {
                    Some(H3Value::Index(h3)) => $func(lib, Some(&h3) $(, $arg)*).set(ctx, $label),
                    Some(H3Value::Address(h3)) => {
                        $func(lib, Some(&h3) $(, $arg)*).set(ctx, $label)
                    }
                    None => $func::<_, i64>(lib, None $(, $arg)*).set(ctx, $label),
                }
            });
        }
    };
}

/// 2 nullable indexes → T.
macro_rules! xfunc_h3_pair {
    ($name:ident, $label:expr, $func:ident) => {
        unsafe extern "C" fn $name(
            ctx: *mut sqlite3_context,
            _n: c_int,
            argv: *mut *mut sqlite3_value,
        ) {
            xfunc_guard(ctx, $label, || {
                let lib = library(ctx);
                let Some(a) = optional_h3_arg(ctx, argv, 0, $label, "a") else {
                    return;
                };
                let Some(b) = optional_h3_arg(ctx, argv, 1, $label, "b") else {
                    return;
                };
                match H3Pair::new(a, b) {
                    Ok(H3Pair::Indexes(a, b)) => $func(lib, a.as_ref(), b.as_ref()).set(ctx, $label),
                    Ok(H3Pair::Addresses(a, b)) => {
                        $func(lib, a.as_ref(), b.as_ref()).set(ctx, $label)
                    }
                    Err(e) => set_error(ctx, &format!(concat!($label, ": {}"), e)),
                }
            });
        }
    };
}

/// JSON index list (+ scalars) → T, answered in the form of the list items.
macro_rules! xfunc_h3_list {
    ($name:ident, $label:expr, $func:ident $(, $arg:ident = $get:ident($pos:literal))*) => {
        unsafe extern "C" fn $name(
            ctx: *mut sqlite3_context,
            _n: c_int,
            argv: *mut *mut sqlite3_value,
        ) {
            xfunc_guard(ctx, $label, || {
                let lib = library(ctx);
                let Some(json) = require_text_arg(ctx, argv, 0, $label, "h3") else {
                    return;
                };
                $(
                    let Some($arg) = $get(ctx, argv, $pos, $label, stringify!($arg)) else {
                        return;
                    };
                )*
                match parse_index_list(json) {
                    Ok(IndexList::Indexes(h3)) => $func(lib, &h3 $(, $arg)*).set(ctx, $label),
                    Ok(IndexList::Addresses(h3)) => $func(lib, &h3 $(, $arg)*).set(ctx, $label),
                    Err(e) => set_error(ctx, &format!(concat!($label, ": {}"), e)),
                }
            });
        }
    };
}

/// 1 index (+ scalars) → T, always answered in address form.
macro_rules! xfunc_h3_address {
    ($name:ident, $label:expr, $func:ident $(, $arg:ident = $get:ident($pos:literal))*) => {
        unsafe extern "C" fn $name(
            ctx: *mut sqlite3_context,
            _n: c_int,
            argv: *mut *mut sqlite3_value,
        ) {
            xfunc_guard(ctx, $label, || {
                let lib = library(ctx);
                let Some(h3) = require_h3_arg(ctx, argv, 0, $label, "h3") else {
                    return;
                };
                $(
                    let Some($arg) = $get(ctx, argv, $pos, $label, stringify!($arg)) else {
                        return;
                    };
                )*
                match h3.into_repr::<String>() {
                    Ok(h3) => $func(lib, &h3 $(, $arg)*).set(ctx, $label),
                    Err(e) => set_error(ctx, &format!(concat!($label, ": {}"), e)),
                }
            });
        }
    };
}

/// JSON index list (+ scalars) → T, always answered in address form.
macro_rules! xfunc_h3_list_address {
    ($name:ident, $label:expr, $func:ident $(, $arg:ident = $get:ident($pos:literal))*) => {
        unsafe extern "C" fn $name(
            ctx: *mut sqlite3_context,
            _n: c_int,
            argv: *mut *mut sqlite3_value,
        ) {
            xfunc_guard(ctx, $label, || {
                let lib = library(ctx);
                let Some(json) = require_text_arg(ctx, argv, 0, $label, "h3") else {
                    return;
                };
                $(
                    let Some($arg) = $get(ctx, argv, $pos, $label, stringify!($arg)) else {
                        return;
                    };
                )*
                match parse_index_list(json) {
                    Ok(list) => $func(lib, &list.into_addresses() $(, $arg)*).set(ctx, $label),
                    Err(e) => set_error(ctx, &format!(concat!($label, ": {}"), e)),
                }
            });
        }
    };
}

/// Scalar arguments only; the result form is fixed by the SQL name.
macro_rules! xfunc_scalar {
    ($name:ident, $label:expr, |$lib:ident $(, $arg:ident = $get:ident($pos:literal))*| $body:expr) => {
        unsafe extern "C" fn $name(
            ctx: *mut sqlite3_context,
            _n: c_int,
            argv: *mut *mut sqlite3_value,
        ) {
            xfunc_guard(ctx, $label, || {
                let $lib = library(ctx);
                $(
                    let Some($arg) = $get(ctx, argv, $pos, $label, stringify!($arg)) else {
                        return;
                    };
                )*
                let result = $body;
                result.set(ctx, $label);
            });
        }
    };
}

// ── Inspection ───────────────────────────────────────────────────────────────

xfunc_h3!(h3_is_valid_xfunc, "h3_is_valid", h3_is_valid);
xfunc_h3!(h3_get_base_cell_xfunc, "h3_get_base_cell", h3_get_base_cell);
xfunc_h3!(h3_is_pentagon_xfunc, "h3_is_pentagon", h3_is_pentagon);
xfunc_h3!(h3_get_resolution_xfunc, "h3_get_resolution", h3_get_resolution);
xfunc_h3!(h3_is_res_class_iii_xfunc, "h3_is_res_class_iii", h3_is_res_class_iii);
xfunc_h3_nullable!(h3_get_faces_xfunc, "h3_get_faces", h3_get_faces);
xfunc_scalar!(h3_to_string_xfunc, "h3_to_string", |_lib, h3 = require_i64_arg(0)| {
    h3_to_string(h3)
});
xfunc_scalar!(
    string_to_h3_xfunc,
    "string_to_h3",
    |_lib, address = require_text_arg(0)| string_to_h3(address)
);

// ── Indexing ─────────────────────────────────────────────────────────────────

xfunc_scalar!(
    geo_to_h3_xfunc,
    "geo_to_h3",
    |lib, lat = require_f64_arg(0), lng = require_f64_arg(1), res = require_i32_arg(2)| {
        geo_to_h3::<_, i64>(lib, lat, lng, res)
    }
);
xfunc_scalar!(
    geo_to_h3_address_xfunc,
    "geo_to_h3_address",
    |lib, lat = require_f64_arg(0), lng = require_f64_arg(1), res = require_i32_arg(2)| {
        geo_to_h3::<_, String>(lib, lat, lng, res)
    }
);
xfunc_h3!(h3_to_geo_xfunc, "h3_to_geo", h3_to_geo);
xfunc_h3!(h3_to_geo_boundary_xfunc, "h3_to_geo_boundary", h3_to_geo_boundary);
xfunc_h3!(
    h3_to_geo_boundary_polygon_xfunc,
    "h3_to_geo_boundary_polygon",
    h3_to_geo_boundary_polygon
);

// ── Traversal ────────────────────────────────────────────────────────────────

xfunc_h3!(k_ring_xfunc, "k_ring", k_ring, k = require_i32_arg(1));
xfunc_h3!(hex_ring_xfunc, "hex_ring", hex_ring, k = require_i32_arg(1));
xfunc_h3_pair!(h3_distance_xfunc, "h3_distance", h3_distance);
xfunc_h3_pair!(h3_line_xfunc, "h3_line", h3_line);

// ── Regions ──────────────────────────────────────────────────────────────────

xfunc_scalar!(
    polyfill_xfunc,
    "polyfill",
    |lib, points = require_text_arg(0), holes = require_text_arg(1), res = require_i32_arg(2)| {
        polyfill_json::<i64>(lib, points, holes, res)
    }
);
xfunc_scalar!(
    polyfill_address_xfunc,
    "polyfill_address",
    |lib, points = require_text_arg(0), holes = require_text_arg(1), res = require_i32_arg(2)| {
        polyfill_json::<String>(lib, points, holes, res)
    }
);
xfunc_scalar!(
    polyfill_wkt_xfunc,
    "polyfill_wkt",
    |lib, polygon = require_text_arg(0), res = require_i32_arg(1)| {
        polyfill_wkt::<_, i64>(lib, polygon, res)
    }
);
xfunc_scalar!(
    polyfill_wkt_address_xfunc,
    "polyfill_wkt_address",
    |lib, polygon = require_text_arg(0), res = require_i32_arg(1)| {
        polyfill_wkt::<_, String>(lib, polygon, res)
    }
);

// ── Hierarchy ────────────────────────────────────────────────────────────────

xfunc_h3!(h3_to_parent_xfunc, "h3_to_parent", h3_to_parent, res = require_i32_arg(1));
xfunc_h3_address!(
    h3_to_parent_address_xfunc,
    "h3_to_parent_address",
    h3_to_parent,
    res = require_i32_arg(1)
);
xfunc_h3!(
    h3_to_children_xfunc,
    "h3_to_children",
    h3_to_children,
    res = require_i32_arg(1)
);
xfunc_h3!(
    h3_to_center_child_xfunc,
    "h3_to_center_child",
    h3_to_center_child,
    res = require_i32_arg(1)
);
xfunc_h3_list!(compact_xfunc, "compact", compact);
xfunc_h3_list_address!(compact_address_xfunc, "compact_address", compact);
xfunc_h3_list!(uncompact_xfunc, "uncompact", uncompact, res = require_i32_arg(1));
xfunc_h3_list_address!(
    uncompact_address_xfunc,
    "uncompact_address",
    uncompact,
    res = require_i32_arg(1)
);

// ── Measurement ──────────────────────────────────────────────────────────────

xfunc_h3!(cell_area_xfunc, "cell_area", cell_area, unit = require_text_arg(1));
xfunc_scalar!(
    point_dist_xfunc,
    "point_dist",
    |lib, a = optional_text_arg(0), b = optional_text_arg(1), unit = require_text_arg(2)| {
        point_dist(lib, a, b, unit)
    }
);
xfunc_h3_nullable!(
    exact_edge_length_xfunc,
    "exact_edge_length",
    exact_edge_length,
    unit = require_text_arg(1)
);
xfunc_scalar!(
    hex_area_xfunc,
    "hex_area",
    |lib, res = require_i32_arg(0), unit = require_text_arg(1)| hex_area(lib, res, unit)
);
xfunc_scalar!(
    edge_length_xfunc,
    "edge_length",
    |lib, res = require_i32_arg(0), unit = require_text_arg(1)| edge_length(lib, res, unit)
);
xfunc_scalar!(num_hexagons_xfunc, "num_hexagons", |lib, res = require_i32_arg(0)| {
    num_hexagons(lib, res)
});
xfunc_scalar!(get_res_0_indexes_xfunc, "get_res_0_indexes", |lib| {
    get_res_0_indexes::<_, i64>(lib)
});
xfunc_scalar!(
    get_res_0_indexes_addresses_xfunc,
    "get_res_0_indexes_addresses",
    |lib| get_res_0_indexes::<_, String>(lib)
);
xfunc_scalar!(
    get_pentagon_indexes_xfunc,
    "get_pentagon_indexes",
    |lib, res = require_i32_arg(0)| get_pentagon_indexes::<_, i64>(lib, res)
);
xfunc_scalar!(
    get_pentagon_indexes_addresses_xfunc,
    "get_pentagon_indexes_addresses",
    |lib, res = require_i32_arg(0)| get_pentagon_indexes::<_, String>(lib, res)
);

// ── Directed edges ───────────────────────────────────────────────────────────

xfunc_h3_pair!(
    h3_indexes_are_neighbors_xfunc,
    "h3_indexes_are_neighbors",
    h3_indexes_are_neighbors
);
xfunc_h3_pair!(
    get_h3_unidirectional_edge_xfunc,
    "get_h3_unidirectional_edge",
    get_h3_unidirectional_edge
);
xfunc_h3_nullable!(
    h3_unidirectional_edge_is_valid_xfunc,
    "h3_unidirectional_edge_is_valid",
    h3_unidirectional_edge_is_valid
);
xfunc_h3_nullable!(
    get_origin_h3_index_from_unidirectional_edge_xfunc,
    "get_origin_h3_index_from_unidirectional_edge",
    get_origin_h3_index_from_unidirectional_edge
);
xfunc_h3_nullable!(
    get_destination_h3_index_from_unidirectional_edge_xfunc,
    "get_destination_h3_index_from_unidirectional_edge",
    get_destination_h3_index_from_unidirectional_edge
);
xfunc_h3_nullable!(
    get_h3_indexes_from_unidirectional_edge_xfunc,
    "get_h3_indexes_from_unidirectional_edge",
    get_h3_indexes_from_unidirectional_edge
);
xfunc_h3_nullable!(
    get_h3_unidirectional_edges_from_hexagon_xfunc,
    "get_h3_unidirectional_edges_from_hexagon",
    get_h3_unidirectional_edges_from_hexagon
);
xfunc_h3_nullable!(
    get_h3_unidirectional_edge_boundary_xfunc,
    "get_h3_unidirectional_edge_boundary",
    get_h3_unidirectional_edge_boundary
);

// ── Registration ─────────────────────────────────────────────────────────────

type XFunc = unsafe extern "C" fn(*mut sqlite3_context, c_int, *mut *mut sqlite3_value);

unsafe fn reg(
    db: *mut sqlite3,
    name: &str,
    n_arg: c_int,
    flags: c_int,
    xfunc: XFunc,
    lib: &SharedLibrary,
) -> c_int {
    let c_name = match CString::new(name) {
        Ok(v) => v,
        Err(_) => return SQLITE_ERROR,
    };
    // Released by `drop_library`, which SQLite also calls when registration fails.
    let user_data = Box::into_raw(Box::new(Arc::clone(lib)));
    let destroy: UserDataDestructor = drop_library;
    sqlite3_create_function_v2(
        db,
        c_name.as_ptr(),
        n_arg,
        flags,
        user_data.cast::<c_void>(),
        Some(xfunc),
        None,
        None,
        Some(destroy),
    )
}

/// Register all H3 functions into an open SQLite database, backed by
/// [`H3oLibrary`].
///
/// Returns `SQLITE_OK` (0) on success, or the first error code on failure.
///
/// # Safety
/// `db` must be a valid, open SQLite database handle for the lifetime of the call.
pub unsafe fn register_functions(db: *mut sqlite3) -> c_int {
    register_functions_with(db, Arc::new(H3oLibrary::new()))
}

/// Register all H3 functions into an open SQLite database, backed by `lib`.
///
/// Each function keeps its own clone of `lib` until SQLite drops the
/// function (connection close or re-registration).
///
/// # Safety
/// `db` must be a valid, open SQLite database handle for the lifetime of the call.
pub unsafe fn register_functions_with(db: *mut sqlite3, lib: Arc<dyn IndexingLibrary>) -> c_int {
    let callbacks: &[(&str, c_int, XFunc)] = &[
        // Inspection
        ("h3_is_valid", 1, h3_is_valid_xfunc),
        ("h3_get_base_cell", 1, h3_get_base_cell_xfunc),
        ("h3_is_pentagon", 1, h3_is_pentagon_xfunc),
        ("h3_get_resolution", 1, h3_get_resolution_xfunc),
        ("h3_is_res_class_iii", 1, h3_is_res_class_iii_xfunc),
        ("h3_get_faces", 1, h3_get_faces_xfunc),
        ("h3_to_string", 1, h3_to_string_xfunc),
        ("string_to_h3", 1, string_to_h3_xfunc),
        // Indexing
        ("geo_to_h3", 3, geo_to_h3_xfunc),
        ("geo_to_h3_address", 3, geo_to_h3_address_xfunc),
        ("h3_to_geo", 1, h3_to_geo_xfunc),
        ("h3_to_geo_boundary", 1, h3_to_geo_boundary_xfunc),
        ("h3_to_geo_boundary_polygon", 1, h3_to_geo_boundary_polygon_xfunc),
        // Traversal
        ("k_ring", 2, k_ring_xfunc),
        ("hex_ring", 2, hex_ring_xfunc),
        ("h3_distance", 2, h3_distance_xfunc),
        ("h3_line", 2, h3_line_xfunc),
        // Regions
        ("polyfill", 3, polyfill_xfunc),
        ("polyfill_address", 3, polyfill_address_xfunc),
        ("polyfill_wkt", 2, polyfill_wkt_xfunc),
        ("polyfill_wkt_address", 2, polyfill_wkt_address_xfunc),
        // Hierarchy
        ("h3_to_parent", 2, h3_to_parent_xfunc),
        ("h3_to_parent_address", 2, h3_to_parent_address_xfunc),
        ("h3_to_children", 2, h3_to_children_xfunc),
        ("h3_to_center_child", 2, h3_to_center_child_xfunc),
        ("compact", 1, compact_xfunc),
        ("compact_address", 1, compact_address_xfunc),
        ("uncompact", 2, uncompact_xfunc),
        ("uncompact_address", 2, uncompact_address_xfunc),
        // Measurement
        ("cell_area", 2, cell_area_xfunc),
        ("point_dist", 3, point_dist_xfunc),
        ("exact_edge_length", 2, exact_edge_length_xfunc),
        ("hex_area", 2, hex_area_xfunc),
        ("edge_length", 2, edge_length_xfunc),
        ("num_hexagons", 1, num_hexagons_xfunc),
        ("get_res_0_indexes", 0, get_res_0_indexes_xfunc),
        ("get_res_0_indexes_addresses", 0, get_res_0_indexes_addresses_xfunc),
        ("get_pentagon_indexes", 1, get_pentagon_indexes_xfunc),
        ("get_pentagon_indexes_addresses", 1, get_pentagon_indexes_addresses_xfunc),
        // Directed edges
        ("h3_indexes_are_neighbors", 2, h3_indexes_are_neighbors_xfunc),
        ("get_h3_unidirectional_edge", 2, get_h3_unidirectional_edge_xfunc),
        ("h3_unidirectional_edge_is_valid", 1, h3_unidirectional_edge_is_valid_xfunc),
        (
            "get_origin_h3_index_from_unidirectional_edge",
            1,
            get_origin_h3_index_from_unidirectional_edge_xfunc,
        ),
        (
            "get_destination_h3_index_from_unidirectional_edge",
            1,
            get_destination_h3_index_from_unidirectional_edge_xfunc,
        ),
        (
            "get_h3_indexes_from_unidirectional_edge",
            1,
            get_h3_indexes_from_unidirectional_edge_xfunc,
        ),
        (
            "get_h3_unidirectional_edges_from_hexagon",
            1,
            get_h3_unidirectional_edges_from_hexagon_xfunc,
        ),
        (
            "get_h3_unidirectional_edge_boundary",
            1,
            get_h3_unidirectional_edge_boundary_xfunc,
        ),
    ];

    if callbacks.len() != H3_FUNCTIONS.len() {
        log::warn!(
            "callback table has {} entries, catalog has {}",
            callbacks.len(),
            H3_FUNCTIONS.len()
        );
        return SQLITE_ERROR;
    }

    for spec in H3_FUNCTIONS {
        let Some((_, _, xfunc)) = callbacks
            .iter()
            .find(|(name, n_arg, _)| *name == spec.name && *n_arg == spec.n_arg as c_int)
        else {
            log::warn!("no callback for {}/{}", spec.name, spec.n_arg);
            return SQLITE_ERROR;
        };

        let rc = reg(db, spec.name, spec.n_arg as c_int, DET, *xfunc, &lib);
        if rc != SQLITE_OK {
            return rc;
        }
    }

    log::debug!("registered {} H3 functions", H3_FUNCTIONS.len());
    SQLITE_OK
}

// ── C entry point for loadable extension (native only) ───────────────────────

/// `sqlite3_h3udf_init` is the entry point called by SQLite when loading
/// this library as a loadable extension (`.load_extension('h3udf')`).
#[cfg(not(target_arch = "wasm32"))]
#[no_mangle]
pub unsafe extern "C" fn sqlite3_h3udf_init(
    db: *mut sqlite3,
    _pz_err_msg: *mut *mut std::ffi::c_char,
    _p_api: *mut sqlite3_api_routines,
) -> c_int {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| register_functions(db))) {
        Ok(rc) => rc,
        Err(_) => SQLITE_ERROR,
    }
}

/// Compatibility entry point name expected by SQLite's default loader rules for
/// libraries named like `libh3_udf_sqlite`.
#[cfg(not(target_arch = "wasm32"))]
#[no_mangle]
pub unsafe extern "C" fn sqlite3_h3udfsqlite_init(
    db: *mut sqlite3,
    pz_err_msg: *mut *mut std::ffi::c_char,
    p_api: *mut sqlite3_api_routines,
) -> c_int {
    sqlite3_h3udf_init(db, pz_err_msg, p_api)
}
