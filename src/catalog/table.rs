use super::{
    non_empty,
    SchemaRecord,
    COLUMN_LABEL_REMARKS,
    COLUMN_LABEL_TABLE_CAT,
    COLUMN_LABEL_TABLE_NAME,
    COLUMN_LABEL_TABLE_SCHEM,
    COLUMN_LABEL_TABLE_TYPE,
};
use crate::{
    ChildOf,
    LabelValue,
    Labeled,
    MetadataType,
    Named,
};

// TableRecord

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRecord {
    pub table_cat: Option<String>,
    pub table_schem: Option<String>,
    pub table_name: String,
    pub table_type: Option<String>,
    pub remarks: Option<String>,
}

impl TableRecord {
    #[must_use]
    pub fn new(table_cat: &str, table_schem: &str, table_name: &str) -> Self {
        Self {
            table_cat: Some(table_cat.to_owned()),
            table_schem: Some(table_schem.to_owned()),
            table_name: table_name.to_owned(),
            ..Self::default()
        }
    }
}

impl Labeled for TableRecord {
    const LABELS: &'static [&'static str] = &[
        COLUMN_LABEL_TABLE_CAT,
        COLUMN_LABEL_TABLE_SCHEM,
        COLUMN_LABEL_TABLE_NAME,
        COLUMN_LABEL_TABLE_TYPE,
        COLUMN_LABEL_REMARKS,
    ];

    fn labeled(&self, label: &str) -> Option<LabelValue> {
        match label {
            COLUMN_LABEL_TABLE_CAT => Some(self.table_cat.clone().into()),
            COLUMN_LABEL_TABLE_SCHEM => Some(self.table_schem.clone().into()),
            COLUMN_LABEL_TABLE_NAME => Some(self.table_name.as_str().into()),
            COLUMN_LABEL_TABLE_TYPE => Some(self.table_type.clone().into()),
            COLUMN_LABEL_REMARKS => Some(self.remarks.clone().into()),
            _ => None,
        }
    }
}

impl MetadataType for TableRecord {
    const NAME: &'static str = "Table";
}

impl ChildOf<SchemaRecord> for TableRecord {}

impl Named for TableRecord {
    fn name(&self) -> Option<&str> {
        non_empty(&self.table_name)
    }
}
