/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_tree_reader;
mod mock_vulnerability_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_tree_reader::MockTreeReader;
pub use mock_vulnerability_reader::MockVulnerabilityReader;
