pub mod config;
pub mod error;
pub mod outline;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;

pub use config::Config;
pub use error::{LoadError, OutlineError};
pub use outline::{
    FileStorage, Flag, Icon, MemoryStorage, NodeRegistry, NodeView, OutlineState, OutlineStore,
    StorageAdapter, ToggleController,
};
pub use search::{Record, RecordStore, SearchOutput, SearchSession, TermSyntax, search};
pub use server::NavServer;
pub use state::NavState;
