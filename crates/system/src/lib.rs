pub mod memory;
pub mod synthetic;

pub use memory::process_memory_mb;
pub use synthetic::{run, Reading, SyntheticWorkload};
