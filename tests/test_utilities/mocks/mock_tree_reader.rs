use npm_sbom::prelude::*;
use std::path::Path;

/// Mock DependencyTreeReader returning a fixed tree, or failing when built
/// with [`MockTreeReader::failing`]
pub struct MockTreeReader {
    tree: Option<DependencyTree>,
}

impl MockTreeReader {
    pub fn new(tree: DependencyTree) -> Self {
        Self { tree: Some(tree) }
    }

    pub fn failing() -> Self {
        Self { tree: None }
    }
}

impl DependencyTreeReader for MockTreeReader {
    fn read_tree(&self, path: &Path) -> Result<DependencyTree> {
        match &self.tree {
            Some(tree) => Ok(tree.clone()),
            None => Err(SbomError::TreeNotFound {
                path: path.to_path_buf(),
                suggestion: "mock reader has no tree".to_string(),
            }
            .into()),
        }
    }
}
