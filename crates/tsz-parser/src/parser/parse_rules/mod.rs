//! Token-level parsing rules shared by the grammar productions.
//!
//! These are free functions over token kinds and the scanner so the
//! productions in `state_types.rs` stay focused on building nodes.

mod utils;

pub use utils::{can_start_jsdoc_type, is_type_terminator, look_ahead_is};
