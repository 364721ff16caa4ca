pub mod config;
pub mod display;
pub mod history;
pub mod session;

pub use config::EngineConfig;
pub use display::{element_display_name, element_icon, layer_listing, short_id, LayerEntry};
pub use history::{HistoryState, MAX_HISTORY};
pub use session::{EngineSession, Transition};
