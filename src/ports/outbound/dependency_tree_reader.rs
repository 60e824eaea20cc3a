use crate::sbom_generation::domain::DependencyTree;
use crate::shared::Result;
use std::path::Path;

/// DependencyTreeReader port for loading the scanner's resolved tree
///
/// This port abstracts where the tree comes from. The engine only ever sees
/// the parsed `DependencyTree`.
pub trait DependencyTreeReader {
    /// Reads and parses a dependency tree document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a valid dependency tree
    fn read_tree(&self, path: &Path) -> Result<DependencyTree>;
}
