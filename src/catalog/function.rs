use super::{
    non_empty,
    SchemaRecord,
    COLUMN_LABEL_FUNCTION_CAT,
    COLUMN_LABEL_FUNCTION_NAME,
    COLUMN_LABEL_FUNCTION_SCHEM,
    COLUMN_LABEL_FUNCTION_TYPE,
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

// FunctionRecord

/// A system or user function available in a schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionRecord {
    pub function_cat: Option<String>,
    pub function_schem: Option<String>,
    pub function_name: String,
    pub remarks: Option<String>,
    pub function_type: Option<i32>,
    pub specific_name: Option<String>,
}

impl FunctionRecord {
    #[must_use]
    pub fn new(function_cat: &str, function_schem: &str, function_name: &str) -> Self {
        Self {
            function_cat: Some(function_cat.to_owned()),
            function_schem: Some(function_schem.to_owned()),
            function_name: function_name.to_owned(),
            ..Self::default()
        }
    }
}

impl Labeled for FunctionRecord {
    const LABELS: &'static [&'static str] = &[
        COLUMN_LABEL_FUNCTION_CAT,
        COLUMN_LABEL_FUNCTION_SCHEM,
        COLUMN_LABEL_FUNCTION_NAME,
        COLUMN_LABEL_REMARKS,
        COLUMN_LABEL_FUNCTION_TYPE,
        COLUMN_LABEL_SPECIFIC_NAME,
    ];

    fn labeled(&self, label: &str) -> Option<LabelValue> {
        match label {
            COLUMN_LABEL_FUNCTION_CAT => Some(self.function_cat.clone().into()),
            COLUMN_LABEL_FUNCTION_SCHEM => Some(self.function_schem.clone().into()),
            COLUMN_LABEL_FUNCTION_NAME => Some(self.function_name.as_str().into()),
            COLUMN_LABEL_REMARKS => Some(self.remarks.clone().into()),
            COLUMN_LABEL_FUNCTION_TYPE => Some(self.function_type.into()),
            COLUMN_LABEL_SPECIFIC_NAME => Some(self.specific_name.clone().into()),
            _ => None,
        }
    }
}

impl MetadataType for FunctionRecord {
    const NAME: &'static str = "Function";
}

impl ChildOf<SchemaRecord> for FunctionRecord {}

impl Named for FunctionRecord {
    fn name(&self) -> Option<&str> {
        non_empty(&self.function_name)
    }
}

#[cfg(test)]
mod labeled_tests {
    use super::FunctionRecord;
    use crate::{
        Labeled,
        LabeledExt,
    };

    #[test]
    fn every_label_resolves() {
        let function = FunctionRecord::new("main", "public", "abs");

        for label in FunctionRecord::LABELS {
            assert!(function.labeled(label).is_some(), "{label}");
        }
    }

    #[test]
    fn function_type() {
        let function = FunctionRecord {
            function_type: Some(1),
            ..FunctionRecord::new("main", "public", "abs")
        };

        assert_eq!(function.labeled_as_int("FUNCTION_TYPE"), Ok(Some(1)));
        assert_eq!(
            FunctionRecord::default().labeled_as_int("FUNCTION_TYPE"),
            Ok(None)
        );
    }
}
