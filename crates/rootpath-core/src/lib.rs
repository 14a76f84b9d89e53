pub mod justification;
pub mod math;

pub use justification::Justification;
