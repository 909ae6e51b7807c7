use async_trait::async_trait;

use super::{
    Child,
    Entity,
    Top,
};
use crate::{
    MetadataType,
    MetadataValue,
};

// =============================================================================
// Named
// =============================================================================

pub trait Named {
    fn name(&self) -> Option<&str>;
}

// =============================================================================
// Located
// =============================================================================

#[async_trait]
pub trait Located {
    /// Names from the top-most reachable ancestor down to `self`.
    async fn path(&self) -> Vec<String>;

    async fn qualified_name(&self) -> String {
        self.path().await.join(".")
    }
}

// -----------------------------------------------------------------------------
// Located - Implementations
// -----------------------------------------------------------------------------

#[async_trait]
impl Located for Top {
    async fn path(&self) -> Vec<String> {
        Vec::new()
    }
}

#[async_trait]
impl<R, P> Located for Entity<R, P>
where
    R: MetadataType + Named,
    P: MetadataValue + Located,
{
    async fn path(&self) -> Vec<String> {
        let name = self
            .read(|record| record.name().map(ToOwned::to_owned))
            .await;
        let mut path = match self.parent().await {
            Some(parent) => parent.path().await,
            _ => Vec::new(),
        };

        path.extend(name);
        path
    }
}

#[cfg(test)]
mod located_tests {
    use super::Located;
    use crate::{
        catalog::{
            Catalog,
            CatalogRecord,
            Column,
            ColumnRecord,
            PrimaryKey,
            PrimaryKeyRecord,
            Schema,
            SchemaRecord,
            Table,
            TableRecord,
        },
        Top,
    };

    #[tokio::test]
    async fn top_has_no_path() {
        assert!(Top.path().await.is_empty());
        assert_eq!(Top.qualified_name().await, "");
    }

    #[tokio::test]
    async fn column_path() {
        let catalog = Catalog::root(CatalogRecord::new("main"));
        let schema = Schema::create(SchemaRecord::new("main", "public"), &catalog);
        let table = Table::create(TableRecord::new("main", "public", "orders"), &schema);
        let column = Column::create(ColumnRecord::of(&table.snapshot().await, "id", 1), &table);

        assert_eq!(column.path().await, ["main", "public", "orders", "id"]);
        assert_eq!(column.qualified_name().await, "main.public.orders.id");
    }

    #[tokio::test]
    async fn empty_names_are_skipped() {
        let catalog = Catalog::root(CatalogRecord::new(""));
        let schema = Schema::create(SchemaRecord::new("", ""), &catalog);
        let table = Table::create(TableRecord::new("", "", "orders"), &schema);

        assert_eq!(table.qualified_name().await, "orders");
    }

    #[tokio::test]
    async fn empty_leaf_names_are_skipped() {
        let catalog = Catalog::root(CatalogRecord::new("main"));
        let schema = Schema::create(SchemaRecord::new("main", "public"), &catalog);
        let table = Table::create(TableRecord::new("main", "public", ""), &schema);
        let column = Column::create(ColumnRecord::of(&table.snapshot().await, "", 1), &table);
        let key = PrimaryKey::create(PrimaryKeyRecord::of(&table.snapshot().await, "", 1), &table);

        assert_eq!(table.qualified_name().await, "main.public");
        assert_eq!(column.qualified_name().await, "main.public");
        assert_eq!(key.path().await, ["main", "public"]);
    }

    #[tokio::test]
    async fn detached_path_stops() {
        let table = Table::detached(TableRecord::new("main", "public", "orders"));

        assert_eq!(table.qualified_name().await, "orders");
    }
}
