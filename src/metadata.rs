pub mod label;

use std::{
    any::TypeId,
    cmp::Ordering,
    fmt::{
        self,
        Debug,
        Display,
    },
    hash::{
        Hash,
        Hasher,
    },
};

use self::label::Labeled;

// =============================================================================
// ValueType
// =============================================================================

pub trait ValueType: Debug + Default + Send + Sync {}

impl<T> ValueType for T where T: Debug + Default + Send + Sync {}

// =============================================================================
// MetadataValue
// =============================================================================

/// Any entity bound from an external metadata source.
///
/// Beyond being a cheaply cloneable, thread-safe handle, the capability makes
/// no further promises; identity and equality belong to the implementor.
pub trait MetadataValue: Clone + Debug + Send + Sync + 'static {}

// =============================================================================
// MetadataType
// =============================================================================

/// The classification of a metadata entity: the record type a bound entity
/// carries, addressable by column label.
pub trait MetadataType: Labeled + ValueType + 'static {
    const NAME: &'static str;

    #[must_use]
    fn kind() -> Kind
    where
        Self: Sized,
    {
        Kind::of::<Self>()
    }
}

// =============================================================================
// Kind
// =============================================================================

/// Runtime identifier of a [`MetadataType`].
#[derive(Clone, Copy, Debug)]
pub struct Kind {
    id: TypeId,
    name: &'static str,
}

// -----------------------------------------------------------------------------
// Kind - Standard Traits
// -----------------------------------------------------------------------------

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Ordered by name. Distinct types sharing a name fall back to their type id.
impl Ord for Kind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Kind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// -----------------------------------------------------------------------------
// Kind - Methods
// -----------------------------------------------------------------------------

impl Kind {
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: MetadataType,
    {
        Self {
            id: TypeId::of::<T>(),
            name: T::NAME,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod kind_tests {
    use super::{
        Kind,
        MetadataType,
    };
    use crate::catalog::{
        ColumnRecord,
        TableRecord,
    };

    #[test]
    fn kind_identity() {
        assert_eq!(Kind::of::<ColumnRecord>(), ColumnRecord::kind());
        assert_ne!(Kind::of::<ColumnRecord>(), Kind::of::<TableRecord>());
    }

    #[test]
    fn kind_order() {
        let mut kinds = vec![TableRecord::kind(), ColumnRecord::kind()];

        kinds.sort();

        assert_eq!(kinds, [ColumnRecord::kind(), TableRecord::kind()]);
        assert!(TableRecord::kind() <= TableRecord::kind());
    }

    #[test]
    fn kind_display() {
        assert_eq!(TableRecord::kind().to_string(), "Table");
        assert_eq!(ColumnRecord::kind().name(), "Column");
    }
}
