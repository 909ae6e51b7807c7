use super::{
    non_empty,
    TableRecord,
    COLUMN_LABEL_COLUMN_NAME,
    COLUMN_LABEL_KEY_SEQ,
    COLUMN_LABEL_PK_NAME,
    COLUMN_LABEL_TABLE_CAT,
    COLUMN_LABEL_TABLE_NAME,
    COLUMN_LABEL_TABLE_SCHEM,
};
use crate::{
    ChildOf,
    LabelValue,
    Labeled,
    MetadataType,
    Named,
};

// PrimaryKeyRecord

/// One column of a table's primary key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrimaryKeyRecord {
    pub table_cat: Option<String>,
    pub table_schem: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub key_seq: i16,
    pub pk_name: Option<String>,
}

impl PrimaryKeyRecord {
    #[must_use]
    pub fn of(table: &TableRecord, column_name: &str, key_seq: i16) -> Self {
        Self {
            table_cat: table.table_cat.clone(),
            table_schem: table.table_schem.clone(),
            table_name: table.table_name.clone(),
            column_name: column_name.to_owned(),
            key_seq,
            pk_name: None,
        }
    }
}

impl Labeled for PrimaryKeyRecord {
    const LABELS: &'static [&'static str] = &[
        COLUMN_LABEL_TABLE_CAT,
        COLUMN_LABEL_TABLE_SCHEM,
        COLUMN_LABEL_TABLE_NAME,
        COLUMN_LABEL_COLUMN_NAME,
        COLUMN_LABEL_KEY_SEQ,
        COLUMN_LABEL_PK_NAME,
    ];

    fn labeled(&self, label: &str) -> Option<LabelValue> {
        match label {
            COLUMN_LABEL_TABLE_CAT => Some(self.table_cat.clone().into()),
            COLUMN_LABEL_TABLE_SCHEM => Some(self.table_schem.clone().into()),
            COLUMN_LABEL_TABLE_NAME => Some(self.table_name.as_str().into()),
            COLUMN_LABEL_COLUMN_NAME => Some(self.column_name.as_str().into()),
            COLUMN_LABEL_KEY_SEQ => Some(self.key_seq.into()),
            COLUMN_LABEL_PK_NAME => Some(self.pk_name.clone().into()),
            _ => None,
        }
    }
}

impl MetadataType for PrimaryKeyRecord {
    const NAME: &'static str = "PrimaryKey";
}

impl ChildOf<TableRecord> for PrimaryKeyRecord {}

impl Named for PrimaryKeyRecord {
    fn name(&self) -> Option<&str> {
        non_empty(&self.column_name)
    }
}
