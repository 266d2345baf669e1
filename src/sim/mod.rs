pub mod driver;
pub mod metrics;
pub mod workload;

pub use driver::run_all;
pub use metrics::{summarize, ProcessMetrics, Summary};
