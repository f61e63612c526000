//! Console commands - the operations the CLI exposes

mod dashboard;
mod inventory;
mod receivers;

pub use dashboard::*;
pub use inventory::*;
pub use receivers::*;
