use super::{
    ColumnRecord,
    COLUMN_LABEL_COLUMN_NAME,
    COLUMN_LABEL_GRANTEE,
    COLUMN_LABEL_GRANTOR,
    COLUMN_LABEL_IS_GRANTABLE,
    COLUMN_LABEL_PRIVILEGE,
    COLUMN_LABEL_TABLE_CAT,
    COLUMN_LABEL_TABLE_NAME,
    COLUMN_LABEL_TABLE_SCHEM,
};
use crate::{
    ChildOf,
    LabelValue,
    Labeled,
    MetadataType,
};

// ColumnPrivilegeRecord

/// One access right granted on a column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnPrivilegeRecord {
    pub table_cat: Option<String>,
    pub table_schem: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub grantor: Option<String>,
    pub grantee: String,
    pub privilege: String,
    pub is_grantable: Option<String>,
}

impl ColumnPrivilegeRecord {
    #[must_use]
    pub fn of(column: &ColumnRecord, grantee: &str, privilege: &str) -> Self {
        Self {
            table_cat: column.table_cat.clone(),
            table_schem: column.table_schem.clone(),
            table_name: column.table_name.clone(),
            column_name: column.column_name.clone(),
            grantee: grantee.to_owned(),
            privilege: privilege.to_owned(),
            ..Self::default()
        }
    }

    /// `YES` if the grantee may grant to others, `NO` if not, otherwise
    /// unknown.
    #[must_use]
    pub fn is_grantable_flag(&self) -> Option<bool> {
        match self.is_grantable.as_deref() {
            Some("YES") => Some(true),
            Some("NO") => Some(false),
            _ => None,
        }
    }
}

impl Labeled for ColumnPrivilegeRecord {
    const LABELS: &'static [&'static str] = &[
        COLUMN_LABEL_TABLE_CAT,
        COLUMN_LABEL_TABLE_SCHEM,
        COLUMN_LABEL_TABLE_NAME,
        COLUMN_LABEL_COLUMN_NAME,
        COLUMN_LABEL_GRANTOR,
        COLUMN_LABEL_GRANTEE,
        COLUMN_LABEL_PRIVILEGE,
        COLUMN_LABEL_IS_GRANTABLE,
    ];

    fn labeled(&self, label: &str) -> Option<LabelValue> {
        match label {
            COLUMN_LABEL_TABLE_CAT => Some(self.table_cat.clone().into()),
            COLUMN_LABEL_TABLE_SCHEM => Some(self.table_schem.clone().into()),
            COLUMN_LABEL_TABLE_NAME => Some(self.table_name.as_str().into()),
            COLUMN_LABEL_COLUMN_NAME => Some(self.column_name.as_str().into()),
            COLUMN_LABEL_GRANTOR => Some(self.grantor.clone().into()),
            COLUMN_LABEL_GRANTEE => Some(self.grantee.as_str().into()),
            COLUMN_LABEL_PRIVILEGE => Some(self.privilege.as_str().into()),
            COLUMN_LABEL_IS_GRANTABLE => Some(self.is_grantable.clone().into()),
            _ => None,
        }
    }
}

impl MetadataType for ColumnPrivilegeRecord {
    const NAME: &'static str = "ColumnPrivilege";
}

impl ChildOf<ColumnRecord> for ColumnPrivilegeRecord {}
