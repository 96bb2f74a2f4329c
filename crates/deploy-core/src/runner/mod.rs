pub mod builder;
pub mod core;

pub use builder::RunnerBuilder;
pub use core::StepRunner;
