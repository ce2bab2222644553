//! `previous` and `hasNext` template helpers.
//!
//! A binding layer feeds each helper the current `array` and `value` and
//! renders what comes back. Helpers hold no state, so re-running them after
//! the array is replaced is all the recomputation there is.

pub mod config;
mod error;
mod helper;
pub mod logging;
mod output;

pub use error::{Error, Result};
pub use helper::{HelperName, has_next, invoke, invoke_by_name, previous};
pub use output::{Flag, HelperOutput, render_output, render_with};
pub use seqhelpers_position::{Identity, Offset};
