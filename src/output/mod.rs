//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::print_benchmark_result;
pub use formatters::feedback_line;
