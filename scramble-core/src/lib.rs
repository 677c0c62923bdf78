pub mod catalog;
pub mod events;
pub mod rules;
pub mod scoring;
pub mod scramble;
pub mod selection;
pub mod session;
pub mod stats;

// Re-export main components
pub use catalog::*;
pub use events::*;
pub use rules::*;
pub use scoring::*;
pub use scramble::*;
pub use selection::*;
pub use session::*;
pub use stats::*;
