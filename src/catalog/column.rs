use super::{
    non_empty,
    TableRecord,
    COLUMN_LABEL_COLUMN_NAME,
    COLUMN_LABEL_COLUMN_SIZE,
    COLUMN_LABEL_DATA_TYPE,
    COLUMN_LABEL_IS_AUTOINCREMENT,
    COLUMN_LABEL_IS_NULLABLE,
    COLUMN_LABEL_NULLABLE,
    COLUMN_LABEL_ORDINAL_POSITION,
    COLUMN_LABEL_TABLE_CAT,
    COLUMN_LABEL_TABLE_NAME,
    COLUMN_LABEL_TABLE_SCHEM,
    COLUMN_LABEL_TYPE_NAME,
};
use crate::{
    ChildOf,
    LabelValue,
    Labeled,
    MetadataType,
    Named,
};

// =============================================================================
// Nullable
// =============================================================================

/// Values of the `NULLABLE` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nullable {
    Never,
    Allowed,
    Unknown,
}

impl Nullable {
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Never),
            1 => Some(Self::Allowed),
            2 => Some(Self::Unknown),
            _ => None,
        }
    }

    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Never => 0,
            Self::Allowed => 1,
            Self::Unknown => 2,
        }
    }
}

// =============================================================================
// ColumnRecord
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnRecord {
    pub table_cat: Option<String>,
    pub table_schem: Option<String>,
    pub table_name: String,
    pub column_name: String,
    pub data_type: i32,
    pub type_name: Option<String>,
    pub column_size: Option<i32>,
    pub nullable: i32,
    pub ordinal_position: i32,
    pub is_nullable: Option<String>,
    pub is_autoincrement: Option<String>,
}

// -----------------------------------------------------------------------------
// ColumnRecord - Create
// -----------------------------------------------------------------------------

impl ColumnRecord {
    /// A column of `table`; ordinal positions start at 1.
    #[must_use]
    pub fn of(table: &TableRecord, column_name: &str, ordinal_position: i32) -> Self {
        Self {
            table_cat: table.table_cat.clone(),
            table_schem: table.table_schem.clone(),
            table_name: table.table_name.clone(),
            column_name: column_name.to_owned(),
            ordinal_position,
            nullable: Nullable::Unknown.raw(),
            ..Self::default()
        }
    }
}

// -----------------------------------------------------------------------------
// ColumnRecord - Flags
// -----------------------------------------------------------------------------

impl ColumnRecord {
    #[must_use]
    pub const fn nullability(&self) -> Option<Nullable> {
        Nullable::from_raw(self.nullable)
    }

    /// `YES` and `NO` map to a flag; anything else, including an empty
    /// string, means the driver could not tell.
    #[must_use]
    pub fn is_nullable_flag(&self) -> Option<bool> {
        yes_no(self.is_nullable.as_deref())
    }

    #[must_use]
    pub fn is_autoincrement_flag(&self) -> Option<bool> {
        yes_no(self.is_autoincrement.as_deref())
    }
}

fn yes_no(value: Option<&str>) -> Option<bool> {
    match value {
        Some("YES") => Some(true),
        Some("NO") => Some(false),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// ColumnRecord - Library Traits
// -----------------------------------------------------------------------------

impl Labeled for ColumnRecord {
    const LABELS: &'static [&'static str] = &[
        COLUMN_LABEL_TABLE_CAT,
        COLUMN_LABEL_TABLE_SCHEM,
        COLUMN_LABEL_TABLE_NAME,
        COLUMN_LABEL_COLUMN_NAME,
        COLUMN_LABEL_DATA_TYPE,
        COLUMN_LABEL_TYPE_NAME,
        COLUMN_LABEL_COLUMN_SIZE,
        COLUMN_LABEL_NULLABLE,
        COLUMN_LABEL_ORDINAL_POSITION,
        COLUMN_LABEL_IS_NULLABLE,
        COLUMN_LABEL_IS_AUTOINCREMENT,
    ];

    fn labeled(&self, label: &str) -> Option<LabelValue> {
        match label {
            COLUMN_LABEL_TABLE_CAT => Some(self.table_cat.clone().into()),
            COLUMN_LABEL_TABLE_SCHEM => Some(self.table_schem.clone().into()),
            COLUMN_LABEL_TABLE_NAME => Some(self.table_name.as_str().into()),
            COLUMN_LABEL_COLUMN_NAME => Some(self.column_name.as_str().into()),
            COLUMN_LABEL_DATA_TYPE => Some(self.data_type.into()),
            COLUMN_LABEL_TYPE_NAME => Some(self.type_name.clone().into()),
            COLUMN_LABEL_COLUMN_SIZE => Some(self.column_size.into()),
            COLUMN_LABEL_NULLABLE => Some(self.nullable.into()),
            COLUMN_LABEL_ORDINAL_POSITION => Some(self.ordinal_position.into()),
            COLUMN_LABEL_IS_NULLABLE => Some(self.is_nullable.clone().into()),
            COLUMN_LABEL_IS_AUTOINCREMENT => Some(self.is_autoincrement.clone().into()),
            _ => None,
        }
    }
}

impl MetadataType for ColumnRecord {
    const NAME: &'static str = "Column";
}

impl ChildOf<TableRecord> for ColumnRecord {}

impl Named for ColumnRecord {
    fn name(&self) -> Option<&str> {
        non_empty(&self.column_name)
    }
}
