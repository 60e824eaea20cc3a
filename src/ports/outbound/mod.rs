/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, clock, etc.).
pub mod dependency_tree_reader;
pub mod graph_formatter;
pub mod identifier_generator;
pub mod output_presenter;
pub mod progress_reporter;
pub mod vulnerability_reader;

pub use dependency_tree_reader::DependencyTreeReader;
pub use graph_formatter::GraphFormatter;
pub use identifier_generator::IdentifierGenerator;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use vulnerability_reader::VulnerabilityReader;
