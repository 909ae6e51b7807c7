use super::{
    non_empty,
    COLUMN_LABEL_TABLE_CAT,
};
use crate::{
    LabelValue,
    Labeled,
    MetadataType,
    Named,
};

// CatalogRecord

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogRecord {
    pub table_cat: String,
}

impl CatalogRecord {
    #[must_use]
    pub fn new(table_cat: &str) -> Self {
        Self {
            table_cat: table_cat.to_owned(),
        }
    }
}

impl Labeled for CatalogRecord {
    const LABELS: &'static [&'static str] = &[COLUMN_LABEL_TABLE_CAT];

    fn labeled(&self, label: &str) -> Option<LabelValue> {
        match label {
            COLUMN_LABEL_TABLE_CAT => Some(self.table_cat.as_str().into()),
            _ => None,
        }
    }
}

impl MetadataType for CatalogRecord {
    const NAME: &'static str = "Catalog";
}

impl Named for CatalogRecord {
    fn name(&self) -> Option<&str> {
        non_empty(&self.table_cat)
    }
}
