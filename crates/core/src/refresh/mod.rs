//! Latest-wins holder for periodically refreshed results.

mod refresh_cell;


pub use refresh_cell::{Outcome, RefreshCell, RequestToken};
