pub mod statistics;
pub mod write_csv;

pub use statistics::{compute_event_statistics, EventStatistics, STATISTICS_COLUMNS};
pub use write_csv::{to_csv_string, write_csv_file};
