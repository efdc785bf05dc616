//! One import path for the SQLite C API on every target: `libsqlite3-sys`
//! on native builds, `sqlite-wasm-rs` on wasm32.

#[cfg(not(target_arch = "wasm32"))]
pub use libsqlite3_sys::*;

#[cfg(target_arch = "wasm32")]
pub use sqlite_wasm_rs::*;

/// `SQLITE_TRANSIENT`: SQLite copies text results before the setter returns.
#[cfg(not(target_arch = "wasm32"))]
pub fn sqlite_transient() -> sqlite3_destructor_type {
    unsafe { std::mem::transmute(-1_isize) }
}

#[cfg(target_arch = "wasm32")]
pub fn sqlite_transient() -> sqlite3_destructor_type {
    sqlite_wasm_rs::SQLITE_TRANSIENT()
}

/// Destructor SQLite runs on a function's user data when the function is
/// replaced, the connection closes, or registration fails.
pub type UserDataDestructor = unsafe extern "C" fn(*mut std::ffi::c_void);
