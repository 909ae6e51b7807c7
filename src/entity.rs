pub mod builder;
pub mod child;
pub mod located;

use std::sync::Arc;

use async_lock::{
    RwLock,
    RwLockReadGuard,
    RwLockWriteGuard,
};
use async_trait::async_trait;
use futures::FutureExt;
use tracing::debug;

pub use self::{
    builder::Builder,
    child::Child,
};
use crate::{
    MetadataType,
    MetadataValue,
};

// =============================================================================
// Top
// =============================================================================

/// Parent of top-level entities such as catalogs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Top;

impl MetadataValue for Top {}

// =============================================================================
// Entity
// =============================================================================

/// A bound metadata record `R` whose parent is a `P`.
///
/// Entities are handles: clones share the same record and parent link, and
/// two handles are equal only when they point at the same entity. An entity
/// holds a handle to its parent, so a parent stays reachable for as long as
/// any of its children do.
#[derive(Debug)]
pub struct Entity<R, P = Top>(pub(crate) Arc<RwLock<Internal<R, P>>>)
where
    R: MetadataType,
    P: MetadataValue;

// -----------------------------------------------------------------------------
// Entity - Standard Traits
// -----------------------------------------------------------------------------

impl<R, P> Clone for Entity<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<R, P> PartialEq for Entity<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<R, P> Eq for Entity<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
}

// -----------------------------------------------------------------------------
// Entity - Library Traits
// -----------------------------------------------------------------------------

impl<R, P> MetadataValue for Entity<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
}

#[async_trait]
impl<R, P> Child<P> for Entity<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
    async fn parent(&self) -> Option<P> {
        self.read_lock(|this| this.parent.clone()).await
    }

    async fn set_parent(&self, parent: &P) {
        let parent = parent.clone();

        self.write_lock(|mut this| this.parent = Some(parent))
            .await;

        debug!(kind = R::NAME, "parent assigned");
    }
}

// -----------------------------------------------------------------------------
// Entity - Read/Write (Internal)
// -----------------------------------------------------------------------------

impl<R, P> Entity<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
    async fn read_lock<T>(&self, f: impl FnOnce(RwLockReadGuard<'_, Internal<R, P>>) -> T) -> T {
        self.0.read().map(f).await
    }

    async fn write_lock<T>(&self, f: impl FnOnce(RwLockWriteGuard<'_, Internal<R, P>>) -> T) -> T {
        self.0.write().map(f).await
    }
}

// -----------------------------------------------------------------------------
// Entity - Create
// -----------------------------------------------------------------------------

impl<R, P> Entity<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
    pub(crate) fn create_internal(record: Option<R>, parent: Option<P>) -> Self {
        Self(Arc::new(RwLock::new(Internal {
            parent,
            record: record.unwrap_or_default(),
        })))
    }

    #[must_use]
    pub fn create(record: R, parent: &P) -> Self {
        Self::create_internal(Some(record), Some(parent.clone()))
    }

    /// An entity whose parent is wired later through [`Child::set_parent`].
    #[must_use]
    pub fn detached(record: R) -> Self {
        Self::create_internal(Some(record), None)
    }

    #[must_use]
    pub fn builder() -> Builder<R, P> {
        Builder::default()
    }
}

impl<R> Entity<R, Top>
where
    R: MetadataType,
{
    #[must_use]
    pub fn root(record: R) -> Self {
        Self::detached(record)
    }
}


// -----------------------------------------------------------------------------
// Entity - Record
// -----------------------------------------------------------------------------

impl<R, P> Entity<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
    pub async fn read<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        self.read_lock(|this| f(&this.record)).await
    }

    pub async fn write<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        self.write_lock(|mut this| f(&mut this.record)).await
    }
}

impl<R, P> Entity<R, P>
where
    R: MetadataType + Clone,
    P: MetadataValue,
{
    pub async fn snapshot(&self) -> R {
        self.read(R::clone).await
    }
}


// -----------------------------------------------------------------------------
// Entity - Parent
// -----------------------------------------------------------------------------

#[cfg(test)]
mod parent_tests {
    use crate::{
        catalog::{
            Catalog,
            CatalogRecord,
            Schema,
            SchemaRecord,
        },
        parent_of,
        Child,
    };

    #[tokio::test]
    async fn set_then_get() {
        let catalog = Catalog::root(CatalogRecord::new("main"));
        let schema = Schema::detached(SchemaRecord::new("main", "public"));

        schema.set_parent(&catalog).await;

        assert_eq!(schema.parent().await, Some(catalog));
        assert!(schema.has_parent().await);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let first = Catalog::root(CatalogRecord::new("first"));
        let second = Catalog::root(CatalogRecord::new("second"));
        let schema = Schema::create(SchemaRecord::new("first", "public"), &first);

        schema.set_parent(&second).await;

        let parent = schema.parent().await;

        assert_eq!(parent, Some(second));
        assert_ne!(parent, Some(first));
    }

    async fn bind_schemas() -> Vec<Schema> {
        let catalog = Catalog::root(CatalogRecord::new("main"));
        let schema = Schema::detached(SchemaRecord::new("main", "public"));

        schema.set_parent(&catalog).await;

        vec![schema]
    }

    #[tokio::test]
    async fn parent_outlives_caller_handle() {
        let schemas = bind_schemas().await;
        let catalog = schemas[0].parent().await.expect("parent was set");

        assert!(schemas[0].has_parent().await);
        assert_eq!(catalog.snapshot().await.table_cat, "main");
    }

    #[tokio::test]
    async fn created_parent_outlives_scope() {
        let schema = {
            let catalog = Catalog::root(CatalogRecord::new("main"));

            Schema::create(SchemaRecord::new("main", "public"), &catalog)
        };

        let catalog = schema.parent().await.expect("parent set at creation");

        assert_eq!(catalog.snapshot().await.table_cat, "main");
    }

    #[tokio::test]
    async fn parent_of_shared_across_clones() {
        let catalog = Catalog::root(CatalogRecord::new("main"));
        let schema = Schema::detached(SchemaRecord::new("main", "public"));
        let clone = schema.clone();

        clone.set_parent(&catalog).await;

        assert_eq!(parent_of(&schema).await, Some(catalog));
    }
}

// =============================================================================
// Internal
// =============================================================================

#[derive(Debug)]
pub(crate) struct Internal<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
    parent: Option<P>,
    record: R,
}
