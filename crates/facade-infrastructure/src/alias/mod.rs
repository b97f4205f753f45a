//! Facade aliases: configured and package-contributed short names
//! resolved lazily to facade type names.

pub mod manifest;
pub mod resolver;

pub use manifest::{IGNORE_ALL_PACKAGES, PACKAGE_ALIASES, PackageAliasEntry, PackageManifest};
pub use resolver::AliasResolver;
