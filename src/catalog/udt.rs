use super::{
    non_empty,
    SchemaRecord,
    COLUMN_LABEL_BASE_TYPE,
    COLUMN_LABEL_CLASS_NAME,
    COLUMN_LABEL_DATA_TYPE,
    COLUMN_LABEL_REMARKS,
    COLUMN_LABEL_TYPE_CAT,
    COLUMN_LABEL_TYPE_NAME,
    COLUMN_LABEL_TYPE_SCHEM,
};
use crate::{
    ChildOf,
    LabelValue,
    Labeled,
    MetadataType,
    Named,
};

// UdtRecord

/// A user-defined type. `base_type` is only set for distinct types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UdtRecord {
    pub type_cat: Option<String>,
    pub type_schem: Option<String>,
    pub type_name: String,
    pub class_name: Option<String>,
    pub data_type: i32,
    pub remarks: Option<String>,
    pub base_type: Option<i16>,
}

impl UdtRecord {
    #[must_use]
    pub fn new(type_cat: &str, type_schem: &str, type_name: &str) -> Self {
        Self {
            type_cat: Some(type_cat.to_owned()),
            type_schem: Some(type_schem.to_owned()),
            type_name: type_name.to_owned(),
            ..Self::default()
        }
    }
}

impl Labeled for UdtRecord {
    const LABELS: &'static [&'static str] = &[
        COLUMN_LABEL_TYPE_CAT,
        COLUMN_LABEL_TYPE_SCHEM,
        COLUMN_LABEL_TYPE_NAME,
        COLUMN_LABEL_CLASS_NAME,
        COLUMN_LABEL_DATA_TYPE,
        COLUMN_LABEL_REMARKS,
        COLUMN_LABEL_BASE_TYPE,
    ];

    fn labeled(&self, label: &str) -> Option<LabelValue> {
        match label {
            COLUMN_LABEL_TYPE_CAT => Some(self.type_cat.clone().into()),
            COLUMN_LABEL_TYPE_SCHEM => Some(self.type_schem.clone().into()),
            COLUMN_LABEL_TYPE_NAME => Some(self.type_name.as_str().into()),
            COLUMN_LABEL_CLASS_NAME => Some(self.class_name.clone().into()),
            COLUMN_LABEL_DATA_TYPE => Some(self.data_type.into()),
            COLUMN_LABEL_REMARKS => Some(self.remarks.clone().into()),
            COLUMN_LABEL_BASE_TYPE => Some(self.base_type.into()),
            _ => None,
        }
    }
}

impl MetadataType for UdtRecord {
    const NAME: &'static str = "UDT";
}

impl ChildOf<SchemaRecord> for UdtRecord {}

impl Named for UdtRecord {
    fn name(&self) -> Option<&str> {
        non_empty(&self.type_name)
    }
}
