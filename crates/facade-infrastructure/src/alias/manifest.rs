//! Package Alias Manifest
//!
//! Packages contribute facade aliases by submitting [`PackageAliasEntry`]
//! values to [`PACKAGE_ALIASES`] at link time. The manifest collects them,
//! minus any package the application opted out of.
//!
//! ```rust,ignore
//! #[linkme::distributed_slice(PACKAGE_ALIASES)]
//! static CACHE_ALIAS: PackageAliasEntry = PackageAliasEntry {
//!     package: "facade-infrastructure",
//!     alias: "Cache",
//!     target: "facade_infrastructure::facades::Cache",
//! };
//! ```

use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Opt-out entry ignoring every package
pub const IGNORE_ALL_PACKAGES: &str = "*";

/// Alias contributed by a package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageAliasEntry {
    /// Package contributing the alias
    pub package: &'static str,
    /// Short name
    pub alias: &'static str,
    /// Fully-qualified facade type name
    pub target: &'static str,
}

// Packages submit alias entries at compile time
#[linkme::distributed_slice]
pub static PACKAGE_ALIASES: [PackageAliasEntry] = [..];

/// Aliases contributed by linked packages
#[derive(Debug, Clone, Default)]
pub struct PackageManifest {
    entries: Vec<PackageAliasEntry>,
    ignored: BTreeSet<String>,
}

impl PackageManifest {
    /// Manifest of every entry submitted to [`PACKAGE_ALIASES`]
    pub fn discover() -> Self {
        Self::from_entries(PACKAGE_ALIASES.iter().copied())
    }

    /// Manifest of explicit entries
    pub fn from_entries(entries: impl IntoIterator<Item = PackageAliasEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            ignored: BTreeSet::new(),
        }
    }

    /// Manifest contributing nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ignore aliases from `packages`; `"*"` ignores every package
    pub fn without_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(packages.into_iter().map(Into::into));
        self
    }

    fn is_ignored(&self, package: &str) -> bool {
        self.ignored.contains(IGNORE_ALL_PACKAGES) || self.ignored.contains(package)
    }

    /// Merged alias table
    ///
    /// Link order is unspecified, so entries are merged in `(package, alias)`
    /// order: when two packages submit the same alias, the package whose
    /// name sorts last wins and the conflict is logged.
    pub fn aliases(&self) -> BTreeMap<String, String> {
        let mut entries: Vec<&PackageAliasEntry> = self
            .entries
            .iter()
            .filter(|entry| !self.is_ignored(entry.package))
            .collect();
        entries.sort_by_key(|entry| (entry.package, entry.alias));

        let mut aliases = BTreeMap::new();
        for entry in entries {
            if let Some(previous) = aliases.insert(entry.alias.to_string(), entry.target.to_string())
            {
                if previous != entry.target {
                    warn!(
                        alias = entry.alias,
                        replaced = %previous,
                        target = entry.target,
                        package = entry.package,
                        "Conflicting package alias"
                    );
                }
            }
        }
        aliases
    }

    /// Packages contributing at least one alias, sorted
    pub fn packages(&self) -> Vec<&'static str> {
        let packages: BTreeSet<&'static str> = self
            .entries
            .iter()
            .filter(|entry| !self.is_ignored(entry.package))
            .map(|entry| entry.package)
            .collect();
        packages.into_iter().collect()
    }
}
