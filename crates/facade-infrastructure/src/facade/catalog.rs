//! Facade Catalog
//!
//! Facade types register themselves at link time so a fully-qualified type
//! name produced by the alias resolver can be mapped back to the accessor
//! key the facade stands for.

use facade_domain::value_objects::AccessorKey;

/// Registry entry describing one facade type
#[derive(Debug, Clone, Copy)]
pub struct FacadeEntry {
    /// Fully-qualified type name of the facade
    pub type_name: &'static str,
    /// Accessor key the facade resolves
    pub accessor: &'static str,
}

impl FacadeEntry {
    /// Accessor key for this facade
    pub fn accessor_key(&self) -> AccessorKey {
        AccessorKey::from(self.accessor)
    }
}

// Facade types submit entries at compile time
#[linkme::distributed_slice]
pub static FACADES: [FacadeEntry] = [..];

/// Find the facade registered under `type_name`
pub fn find_facade(type_name: &str) -> Option<&'static FacadeEntry> {
    FACADES.iter().find(|entry| entry.type_name == type_name)
}

/// List registered facades as (type name, accessor) pairs, sorted by type name
pub fn list_facades() -> Vec<(&'static str, &'static str)> {
    let mut facades: Vec<_> = FACADES
        .iter()
        .map(|entry| (entry.type_name, entry.accessor))
        .collect();
    facades.sort_unstable();
    facades
}
