
pub mod binary;
pub mod binary_phase;

pub use binary::Binary;
pub use binary_phase::BinaryPhase;
