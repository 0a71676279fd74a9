pub mod history_file;
pub mod observability;

pub use history_file::load_history;
pub use observability::{Metrics, MetricsReporter};
