/// Game session module: running matches and the registry that holds them.

pub mod server;
pub mod registry;

pub use registry::MatchRegistry;
