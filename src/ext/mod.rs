/// Extension traits for built-in Rust types.
///
/// Each extension trait is placed in its own file named after the type it
/// extends (`path.rs` for `std::path::Path`).
pub mod path;

pub use path::PathExt;
