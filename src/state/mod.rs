pub mod filter;
pub mod loader;
pub mod totals;

pub use filter::*;
pub use loader::*;
pub use totals::*;
