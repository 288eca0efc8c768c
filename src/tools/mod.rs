pub mod outline;
pub mod search;

pub use outline::*;
pub use search::*;
