// Library crate: the headless editing engine, exposed for hosts, the CLI binary
// and integration tests. Rendering and persistence live with the host.

pub mod command;
pub mod document;
pub mod error;
pub mod fixtures;
pub mod geometry;
pub mod ids;
pub mod layers;
pub mod shortcuts;
pub mod state;

pub use command::{execute_command, execute_json, execute_json_batch, inspect, Command};
pub use error::EditError;
pub use state::{EngineConfig, EngineSession, Transition};
