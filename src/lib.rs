pub mod algorithm;
pub mod command;
pub mod network;
pub mod router;
pub mod utils;

/// Routes listed per query unless configured otherwise.
pub const MAX_ROUTES: usize = 5;
pub const MAX_K: usize = 20;

pub use router::Router;
