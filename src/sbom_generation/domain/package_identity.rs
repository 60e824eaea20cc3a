use crate::shared::error::SbomError;
use crate::shared::Result;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Package URL prefix for the npm ecosystem
const NPM_PURL_PREFIX: &str = "pkg:npm/";

/// Prefix shared by every SPDX element identifier
pub const SPDX_REF_PREFIX: &str = "SPDXRef-";

/// Canonical identity of one logical package
///
/// All three identifiers are derived from `(name, version)` only, so the
/// graph, the CycloneDX document and the SPDX document always agree on which
/// package they are talking about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageIdentity {
    name: String,
    version: String,
    key: String,
    purl: String,
    spdx_id: String,
}

impl PackageIdentity {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            key: dedup_key(name, version),
            purl: package_url(name, version),
            spdx_id: spdx_id(name, version),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// `name@version`, the node identity used throughout the graph
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Package URL, doubles as the CycloneDX `bom-ref`
    pub fn purl(&self) -> &str {
        &self.purl
    }

    pub fn bom_ref(&self) -> &str {
        &self.purl
    }

    pub fn spdx_id(&self) -> &str {
        &self.spdx_id
    }
}

/// Returns the dedup key `name@version`
pub fn dedup_key(name: &str, version: &str) -> String {
    format!("{}@{}", name, version)
}

/// Returns the npm package URL for a package
///
/// Scoped names (`@scope/pkg`) map the scope to the purl namespace with the
/// leading `@` stripped; namespace and name are percent-encoded.
pub fn package_url(name: &str, version: &str) -> String {
    match split_scope(name) {
        Some((scope, pkg)) => format!(
            "{}{}/{}@{}",
            NPM_PURL_PREFIX,
            urlencoding::encode(scope),
            urlencoding::encode(pkg),
            version
        ),
        None => format!("{}{}@{}", NPM_PURL_PREFIX, urlencoding::encode(name), version),
    }
}

/// Returns the SPDX element identifier for a package
pub fn spdx_id(name: &str, version: &str) -> String {
    format!(
        "{}{}",
        SPDX_REF_PREFIX,
        sanitize_spdx_fragment(&format!("{}-{}", name, version))
    )
}

/// Replaces every run of characters outside `[A-Za-z0-9.-]` with a single
/// `-` and collapses repeated `-`.
///
/// Leading dashes are kept so a scoped `@scope/pkg` stays distinct from an
/// unscoped `scope-pkg`.
pub fn sanitize_spdx_fragment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
            c
        } else {
            '-'
        };
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Decodes an npm package URL back into `(name, version)`
///
/// Inverse of [`package_url`]: a namespace segment is restored as an
/// `@scope/` prefix.
pub fn decode_package_url(purl: &str) -> Result<(String, String)> {
    let invalid = |reason: &str| SbomError::InvalidPackageUrl {
        purl: purl.to_string(),
        reason: reason.to_string(),
    };

    let body = purl
        .strip_prefix(NPM_PURL_PREFIX)
        .ok_or_else(|| invalid("not an npm package URL"))?;
    let (path, version) = body
        .rsplit_once('@')
        .ok_or_else(|| invalid("missing version"))?;
    if path.is_empty() || version.is_empty() {
        return Err(invalid("empty name or version").into());
    }

    let decode = |segment: &str| {
        urlencoding::decode(segment)
            .map(|s| s.into_owned())
            .map_err(|_| invalid("invalid percent-encoding"))
    };

    let name = match path.split_once('/') {
        Some((scope, pkg)) => format!("@{}/{}", decode(scope)?, decode(pkg)?),
        None => decode(path)?,
    };

    Ok((name, version.to_string()))
}

/// Splits `@scope/pkg` into `("scope", "pkg")`
fn split_scope(name: &str) -> Option<(&str, &str)> {
    name.strip_prefix('@')?.split_once('/')
}

/// IdentityMap - the canonical package set keyed by dedup key
///
/// Insertion order is preserved so renderers emit packages in the order the
/// scanner listed them. Inserting two distinct packages whose SPDX ids
/// collide is a hard error.
#[derive(Debug, Clone, Default)]
pub struct IdentityMap {
    by_key: IndexMap<String, PackageIdentity>,
    spdx_owners: HashMap<String, String>,
}

impl IdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from `(name, version)` pairs, ignoring exact repeats
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = Self::new();
        for (name, version) in pairs {
            map.insert(name, version)?;
        }
        Ok(map)
    }

    /// Registers a package, returning its identity
    ///
    /// # Errors
    /// Returns `SbomError::IdentityCollision` if a different package already
    /// owns the same SPDX id.
    pub fn insert(&mut self, name: &str, version: &str) -> Result<&PackageIdentity> {
        let identity = PackageIdentity::new(name, version);
        let key = identity.key().to_string();

        if !self.by_key.contains_key(&key) {
            if let Some(owner) = self.spdx_owners.get(identity.spdx_id()) {
                return Err(SbomError::IdentityCollision {
                    spdx_id: identity.spdx_id().to_string(),
                    first: owner.clone(),
                    second: key,
                }
                .into());
            }
            self.spdx_owners
                .insert(identity.spdx_id().to_string(), key.clone());
            self.by_key.insert(key.clone(), identity);
        }

        Ok(&self.by_key[&key])
    }

    pub fn get(&self, key: &str) -> Option<&PackageIdentity> {
        self.by_key.get(key)
    }

    pub fn lookup(&self, name: &str, version: &str) -> Option<&PackageIdentity> {
        self.by_key.get(&dedup_key(name, version))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackageIdentity> {
        self.by_key.values()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
