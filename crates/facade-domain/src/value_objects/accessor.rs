//! Accessor Keys
//!
//! An accessor key names the logical service a facade stands for. The same
//! key is used for the container binding and the resolved-instance registry
//! entry, so it must be stable for the lifetime of the facade.

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;

/// Value Object: Facade Accessor Key
///
/// Either a symbolic name (`"cache"`) or the identity of a Rust type. Type
/// keys compare by [`TypeId`]; the captured type name is kept for display
/// and error messages only.
///
/// ## Example
///
/// ```rust
/// use facade_domain::value_objects::AccessorKey;
///
/// struct Mailer;
///
/// let named = AccessorKey::named("cache");
/// let typed = AccessorKey::of::<Mailer>();
///
/// assert_eq!(named.as_str(), "cache");
/// assert!(typed.as_str().ends_with("Mailer"));
/// assert_eq!(typed, AccessorKey::of::<Mailer>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessorKey {
    /// Symbolic service name
    Named(Cow<'static, str>),
    /// Identity of a concrete type
    Type {
        /// Type identity used for equality and hashing
        id: TypeId,
        /// Fully-qualified type name
        name: &'static str,
    },
}

impl AccessorKey {
    /// Create a symbolic accessor key
    pub fn named<S: Into<Cow<'static, str>>>(name: S) -> Self {
        Self::Named(name.into())
    }

    /// Create an accessor key from the identity of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Type {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Human-readable form of the key
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name.as_ref(),
            Self::Type { name, .. } => *name,
        }
    }

    /// Whether the key was built from a type identity
    pub fn is_type(&self) -> bool {
        matches!(self, Self::Type { .. })
    }
}

impl fmt::Display for AccessorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for AccessorKey {
    fn from(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }
}

impl From<String> for AccessorKey {
    fn from(name: String) -> Self {
        Self::Named(Cow::Owned(name))
    }
}

impl From<&AccessorKey> for AccessorKey {
    fn from(key: &AccessorKey) -> Self {
        key.clone()
    }
}
