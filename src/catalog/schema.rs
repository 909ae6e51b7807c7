use super::{
    non_empty,
    CatalogRecord,
    COLUMN_LABEL_TABLE_CATALOG,
    COLUMN_LABEL_TABLE_SCHEM,
};
use crate::{
    ChildOf,
    LabelValue,
    Labeled,
    MetadataType,
    Named,
};

// SchemaRecord

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaRecord {
    pub table_schem: String,
    pub table_catalog: Option<String>,
}

impl SchemaRecord {
    #[must_use]
    pub fn new(table_catalog: &str, table_schem: &str) -> Self {
        Self {
            table_schem: table_schem.to_owned(),
            table_catalog: Some(table_catalog.to_owned()),
        }
    }
}

impl Labeled for SchemaRecord {
    const LABELS: &'static [&'static str] = &[COLUMN_LABEL_TABLE_SCHEM, COLUMN_LABEL_TABLE_CATALOG];

    fn labeled(&self, label: &str) -> Option<LabelValue> {
        match label {
            COLUMN_LABEL_TABLE_SCHEM => Some(self.table_schem.as_str().into()),
            COLUMN_LABEL_TABLE_CATALOG => Some(self.table_catalog.clone().into()),
            _ => None,
        }
    }
}

impl MetadataType for SchemaRecord {
    const NAME: &'static str = "Schema";
}

impl ChildOf<CatalogRecord> for SchemaRecord {}

impl Named for SchemaRecord {
    fn name(&self) -> Option<&str> {
        non_empty(&self.table_schem)
    }
}
