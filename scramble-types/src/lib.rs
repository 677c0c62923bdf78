pub mod errors;
pub mod session;
pub mod stats;

// Re-export all types
pub use errors::*;
pub use session::*;
pub use stats::*;
