pub mod cli;
pub mod display;
pub mod input;
pub mod normalize;
pub mod plane;
pub mod render;
pub mod report;
pub mod types;

// Re-export the types most callers need
pub use plane::{NormalizeError, PlaneBuf, PlaneMut};
