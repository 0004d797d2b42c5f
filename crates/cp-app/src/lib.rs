//! # cp-app
//!
//! Application layer of the ClipPanel history runtime: the materialized
//! list/selection state, pure reducers over it, and the async orchestration
//! that drives pagination, mutations and push-notification folding against
//! the ports defined in `cp-core`.

pub mod error;
pub mod listener;
pub mod mutate;
pub mod navigation;
pub mod panel;
pub mod selection;
pub mod state;
pub mod sync;

pub use navigation::{KeyPress, PanelKey};
pub use panel::ClipboardPanel;
pub use state::PanelState;
pub use sync::LoadOptions;
