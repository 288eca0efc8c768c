//! Collapsible table-of-contents state.
//!
//! Tracks which outline nodes are expanded, persists the whole flag vector as
//! one fixed-width blob, and keeps node indicators in sync on click and hover.

pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod store;
pub(crate) mod toggle;
pub(crate) mod view;

pub use state::{Flag, OutlineState, encoded_len, is_expanded, load, save};
pub use storage::{FileStorage, MemoryStorage, StorageAdapter};
pub use store::OutlineStore;
pub use toggle::ToggleController;
pub use view::{Icon, IndicatorView, NodeRegistry, NodeView, VecRegistry};
