//! Facades for the default services
//!
//! Each facade registers itself in the facade catalog and contributes a
//! short alias through the package manifest.

use crate::alias::{PACKAGE_ALIASES, PackageAliasEntry};
use crate::constants::{CACHE_ACCESSOR, CLOCK_ACCESSOR, CORE_PACKAGE, LOG_ACCESSOR};
use crate::facade::{FACADES, Facade, FacadeEntry};
use facade_domain::value_objects::AccessorKey;

/// Facade for the clock service
#[derive(Debug, Clone, Copy)]
pub struct Clock;

impl Facade for Clock {
    fn accessor() -> AccessorKey {
        AccessorKey::from(CLOCK_ACCESSOR)
    }
}

/// Facade for the log service
#[derive(Debug, Clone, Copy)]
pub struct Log;

impl Facade for Log {
    fn accessor() -> AccessorKey {
        AccessorKey::from(LOG_ACCESSOR)
    }
}

/// Facade for the cache service
#[derive(Debug, Clone, Copy)]
pub struct Cache;

impl Facade for Cache {
    fn accessor() -> AccessorKey {
        AccessorKey::from(CACHE_ACCESSOR)
    }
}

// ============================================================================
// Catalog entries
// ============================================================================

#[linkme::distributed_slice(FACADES)]
static CLOCK_FACADE: FacadeEntry = FacadeEntry {
    type_name: "facade_infrastructure::facades::Clock",
    accessor: CLOCK_ACCESSOR,
};

#[linkme::distributed_slice(FACADES)]
static LOG_FACADE: FacadeEntry = FacadeEntry {
    type_name: "facade_infrastructure::facades::Log",
    accessor: LOG_ACCESSOR,
};

#[linkme::distributed_slice(FACADES)]
static CACHE_FACADE: FacadeEntry = FacadeEntry {
    type_name: "facade_infrastructure::facades::Cache",
    accessor: CACHE_ACCESSOR,
};

// ============================================================================
// Package aliases
// ============================================================================

#[linkme::distributed_slice(PACKAGE_ALIASES)]
static CLOCK_ALIAS: PackageAliasEntry = PackageAliasEntry {
    package: CORE_PACKAGE,
    alias: "Clock",
    target: "facade_infrastructure::facades::Clock",
};

#[linkme::distributed_slice(PACKAGE_ALIASES)]
static LOG_ALIAS: PackageAliasEntry = PackageAliasEntry {
    package: CORE_PACKAGE,
    alias: "Log",
    target: "facade_infrastructure::facades::Log",
};

#[linkme::distributed_slice(PACKAGE_ALIASES)]
static CACHE_ALIAS: PackageAliasEntry = PackageAliasEntry {
    package: CORE_PACKAGE,
    alias: "Cache",
    target: "facade_infrastructure::facades::Cache",
};
