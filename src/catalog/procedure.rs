use super::{
    non_empty,
    SchemaRecord,
    COLUMN_LABEL_PROCEDURE_CAT,
    COLUMN_LABEL_PROCEDURE_NAME,
    COLUMN_LABEL_PROCEDURE_SCHEM,
    COLUMN_LABEL_PROCEDURE_TYPE,
    COLUMN_LABEL_REMARKS,
    COLUMN_LABEL_SPECIFIC_NAME,
};
use crate::{
    ChildOf,
    LabelValue,
    Labeled,
    MetadataType,
    Named,
};

// ProcedureRecord

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcedureRecord {
    pub procedure_cat: Option<String>,
    pub procedure_schem: Option<String>,
    pub procedure_name: String,
    pub remarks: Option<String>,
    pub procedure_type: i16,
    pub specific_name: Option<String>,
}

impl ProcedureRecord {
    #[must_use]
    pub fn new(procedure_cat: &str, procedure_schem: &str, procedure_name: &str) -> Self {
        Self {
            procedure_cat: Some(procedure_cat.to_owned()),
            procedure_schem: Some(procedure_schem.to_owned()),
            procedure_name: procedure_name.to_owned(),
            ..Self::default()
        }
    }
}

impl Labeled for ProcedureRecord {
    const LABELS: &'static [&'static str] = &[
        COLUMN_LABEL_PROCEDURE_CAT,
        COLUMN_LABEL_PROCEDURE_SCHEM,
        COLUMN_LABEL_PROCEDURE_NAME,
        COLUMN_LABEL_REMARKS,
        COLUMN_LABEL_PROCEDURE_TYPE,
        COLUMN_LABEL_SPECIFIC_NAME,
    ];

    fn labeled(&self, label: &str) -> Option<LabelValue> {
        match label {
            COLUMN_LABEL_PROCEDURE_CAT => Some(self.procedure_cat.clone().into()),
            COLUMN_LABEL_PROCEDURE_SCHEM => Some(self.procedure_schem.clone().into()),
            COLUMN_LABEL_PROCEDURE_NAME => Some(self.procedure_name.as_str().into()),
            COLUMN_LABEL_REMARKS => Some(self.remarks.clone().into()),
            COLUMN_LABEL_PROCEDURE_TYPE => Some(self.procedure_type.into()),
            COLUMN_LABEL_SPECIFIC_NAME => Some(self.specific_name.clone().into()),
            _ => None,
        }
    }
}

impl MetadataType for ProcedureRecord {
    const NAME: &'static str = "Procedure";
}

impl ChildOf<SchemaRecord> for ProcedureRecord {}

impl Named for ProcedureRecord {
    fn name(&self) -> Option<&str> {
        non_empty(&self.procedure_name)
    }
}
