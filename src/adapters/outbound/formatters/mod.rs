/// Formatter adapters for the dependency graph renderings
mod dot_formatter;
mod json_formatter;
mod tree_formatter;

pub use dot_formatter::DotFormatter;
pub use json_formatter::JsonFormatter;
pub use tree_formatter::TreeFormatter;
