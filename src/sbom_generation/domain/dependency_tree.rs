use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping of dependency name to its resolved node.
///
/// Declaration order matters: roots and children are visited in the order
/// the scanner emitted them.
pub type DependencyMap = IndexMap<String, DependencyNode>;

/// DependencyTree - the resolved dependency tree handed over by the scanner
///
/// The tree may declare the same package (same name and version) at several
/// positions. Collapsing those repeats is the job of the graph builder; the
/// tree itself is treated as read-only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyTree {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub dependencies: DependencyMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub dev_dependencies: DependencyMap,
    #[serde(default)]
    pub packages: Vec<PackageInfo>,
}

/// A single resolved package occurrence inside the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyNode {
    pub name: String,
    pub version: String,
    /// Resolved location (tarball URL, path). Passed through to SPDX as the
    /// download location, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencyMap>,
}

/// Flat package record, exactly one per distinct (name, version)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub is_direct: bool,
    #[serde(default)]
    pub is_dev_dependency: bool,
}

impl DependencyNode {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            resolved: None,
            dependencies: None,
        }
    }

    /// Adds a child dependency, keyed by its name
    pub fn with_dependency(mut self, child: DependencyNode) -> Self {
        self.dependencies
            .get_or_insert_with(IndexMap::new)
            .insert(child.name.clone(), child);
        self
    }

    pub fn with_resolved(mut self, resolved: impl Into<String>) -> Self {
        self.resolved = Some(resolved.into());
        self
    }

    /// Iterates over child nodes in declaration order
    pub fn children(&self) -> impl Iterator<Item = &DependencyNode> {
        self.dependencies.iter().flat_map(|deps| deps.values())
    }
}

impl PackageInfo {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        is_direct: bool,
        is_dev_dependency: bool,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            is_direct,
            is_dev_dependency,
        }
    }
}

impl DependencyTree {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies: IndexMap::new(),
            dev_dependencies: IndexMap::new(),
            packages: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, node: DependencyNode) -> Self {
        self.dependencies.insert(node.name.clone(), node);
        self
    }

    pub fn with_dev_dependency(mut self, node: DependencyNode) -> Self {
        self.dev_dependencies.insert(node.name.clone(), node);
        self
    }

    pub fn with_package(mut self, package: PackageInfo) -> Self {
        self.packages.push(package);
        self
    }

    /// Returns a copy of the tree without dev dependency roots or dev packages
    ///
    /// This is the scanner-side filter applied before graph construction when
    /// dev dependencies are not requested. The graph builder never filters.
    pub fn without_dev_dependencies(&self) -> Self {
        Self {
            name: self.name.clone(),
            version: self.version.clone(),
            dependencies: self.dependencies.clone(),
            dev_dependencies: IndexMap::new(),
            packages: self
                .packages
                .iter()
                .filter(|p| !p.is_dev_dependency)
                .cloned()
                .collect(),
        }
    }

    /// Looks up the resolved location of a package anywhere in the tree
    pub fn resolved_location(&self, name: &str, version: &str) -> Option<&str> {
        fn search<'a>(node: &'a DependencyNode, name: &str, version: &str) -> Option<&'a str> {
            if node.name == name && node.version == version {
                if let Some(resolved) = node.resolved.as_deref() {
                    return Some(resolved);
                }
            }
            node.children().find_map(|child| search(child, name, version))
        }

        self.dependencies
            .values()
            .chain(self.dev_dependencies.values())
            .find_map(|node| search(node, name, version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tree_preserves_declaration_order() {
        let json = r#"{
            "name": "demo-app",
            "version": "1.0.0",
            "dependencies": {
                "zeta": { "name": "zeta", "version": "1.0.0" },
                "alpha": {
                    "name": "alpha",
                    "version": "2.0.0",
                    "resolved": "https://registry.npmjs.org/alpha/-/alpha-2.0.0.tgz",
                    "dependencies": {
                        "beta": { "name": "beta", "version": "0.1.0" }
                    }
                }
            },
            "packages": [
                { "name": "zeta", "version": "1.0.0", "isDirect": true, "isDevDependency": false }
            ]
        }"#;

        let tree: DependencyTree = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = tree.dependencies.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert!(tree.dev_dependencies.is_empty());
        assert_eq!(tree.packages.len(), 1);
        assert!(tree.packages[0].is_direct);

        let alpha = &tree.dependencies["alpha"];
        assert_eq!(alpha.children().count(), 1);
        assert_eq!(
            alpha.resolved.as_deref(),
            Some("https://registry.npmjs.org/alpha/-/alpha-2.0.0.tgz")
        );
    }

    #[test]
    fn test_without_dev_dependencies() {
        let tree = DependencyTree::new("demo-app", "1.0.0")
            .with_dependency(DependencyNode::new("lodash", "4.17.21"))
            .with_dev_dependency(DependencyNode::new("chalk", "5.3.0"))
            .with_package(PackageInfo::new("lodash", "4.17.21", true, false))
            .with_package(PackageInfo::new("chalk", "5.3.0", true, true));

        let pruned = tree.without_dev_dependencies();

        assert_eq!(pruned.dependencies.len(), 1);
        assert!(pruned.dev_dependencies.is_empty());
        assert_eq!(pruned.packages.len(), 1);
        assert_eq!(pruned.packages[0].name, "lodash");
        // original is untouched
        assert_eq!(tree.packages.len(), 2);
    }

    #[test]
    fn test_resolved_location_searches_nested_nodes() {
        let tree = DependencyTree::new("demo-app", "1.0.0").with_dependency(
            DependencyNode::new("express", "4.18.2").with_dependency(
                DependencyNode::new("accepts", "1.3.8")
                    .with_resolved("https://registry.npmjs.org/accepts/-/accepts-1.3.8.tgz"),
            ),
        );

        assert_eq!(
            tree.resolved_location("accepts", "1.3.8"),
            Some("https://registry.npmjs.org/accepts/-/accepts-1.3.8.tgz")
        );
        assert_eq!(tree.resolved_location("express", "4.18.2"), None);
        assert_eq!(tree.resolved_location("missing", "1.0.0"), None);
    }
}
