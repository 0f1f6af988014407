// Composition root for the eventos API.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory evento store and wire it into the handlers.
// - Build the router.

pub mod config;
pub mod http;
pub mod state;
