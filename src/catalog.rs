#[allow(clippy::module_inception)]
mod catalog;
mod column;
mod column_privilege;
mod function;
mod primary_key;
mod procedure;
mod schema;
mod table;
mod udt;

pub use self::{
    catalog::CatalogRecord,
    column::{
        ColumnRecord,
        Nullable,
    },
    column_privilege::ColumnPrivilegeRecord,
    function::FunctionRecord,
    primary_key::PrimaryKeyRecord,
    procedure::ProcedureRecord,
    schema::SchemaRecord,
    table::TableRecord,
    udt::UdtRecord,
};
use crate::{
    error::HierarchyError,
    Entity,
    Hierarchy,
    Top,
};

// =============================================================================
// Column Labels
// =============================================================================

pub const COLUMN_LABEL_TABLE_CAT: &str = "TABLE_CAT";
pub const COLUMN_LABEL_TABLE_CATALOG: &str = "TABLE_CATALOG";
pub const COLUMN_LABEL_TABLE_SCHEM: &str = "TABLE_SCHEM";
pub const COLUMN_LABEL_TABLE_NAME: &str = "TABLE_NAME";
pub const COLUMN_LABEL_TABLE_TYPE: &str = "TABLE_TYPE";
pub const COLUMN_LABEL_REMARKS: &str = "REMARKS";
pub const COLUMN_LABEL_COLUMN_NAME: &str = "COLUMN_NAME";
pub const COLUMN_LABEL_DATA_TYPE: &str = "DATA_TYPE";
pub const COLUMN_LABEL_TYPE_NAME: &str = "TYPE_NAME";
pub const COLUMN_LABEL_COLUMN_SIZE: &str = "COLUMN_SIZE";
pub const COLUMN_LABEL_NULLABLE: &str = "NULLABLE";
pub const COLUMN_LABEL_ORDINAL_POSITION: &str = "ORDINAL_POSITION";
pub const COLUMN_LABEL_IS_NULLABLE: &str = "IS_NULLABLE";
pub const COLUMN_LABEL_IS_AUTOINCREMENT: &str = "IS_AUTOINCREMENT";
pub const COLUMN_LABEL_KEY_SEQ: &str = "KEY_SEQ";
pub const COLUMN_LABEL_PK_NAME: &str = "PK_NAME";
pub const COLUMN_LABEL_FUNCTION_CAT: &str = "FUNCTION_CAT";
pub const COLUMN_LABEL_FUNCTION_SCHEM: &str = "FUNCTION_SCHEM";
pub const COLUMN_LABEL_FUNCTION_NAME: &str = "FUNCTION_NAME";
pub const COLUMN_LABEL_FUNCTION_TYPE: &str = "FUNCTION_TYPE";
pub const COLUMN_LABEL_PROCEDURE_CAT: &str = "PROCEDURE_CAT";
pub const COLUMN_LABEL_PROCEDURE_SCHEM: &str = "PROCEDURE_SCHEM";
pub const COLUMN_LABEL_PROCEDURE_NAME: &str = "PROCEDURE_NAME";
pub const COLUMN_LABEL_PROCEDURE_TYPE: &str = "PROCEDURE_TYPE";
pub const COLUMN_LABEL_SPECIFIC_NAME: &str = "SPECIFIC_NAME";
pub const COLUMN_LABEL_TYPE_CAT: &str = "TYPE_CAT";
pub const COLUMN_LABEL_TYPE_SCHEM: &str = "TYPE_SCHEM";
pub const COLUMN_LABEL_CLASS_NAME: &str = "CLASS_NAME";
pub const COLUMN_LABEL_BASE_TYPE: &str = "BASE_TYPE";
pub const COLUMN_LABEL_GRANTOR: &str = "GRANTOR";
pub const COLUMN_LABEL_GRANTEE: &str = "GRANTEE";
pub const COLUMN_LABEL_PRIVILEGE: &str = "PRIVILEGE";
pub const COLUMN_LABEL_IS_GRANTABLE: &str = "IS_GRANTABLE";

// =============================================================================
// Entities
// =============================================================================

pub type Catalog = Entity<CatalogRecord, Top>;
pub type Schema = Entity<SchemaRecord, Catalog>;
pub type Table = Entity<TableRecord, Schema>;
pub type Column = Entity<ColumnRecord, Table>;
pub type PrimaryKey = Entity<PrimaryKeyRecord, Table>;
pub type ColumnPrivilege = Entity<ColumnPrivilegeRecord, Column>;
pub type Function = Entity<FunctionRecord, Schema>;
pub type Procedure = Entity<ProcedureRecord, Schema>;
pub type Udt = Entity<UdtRecord, Schema>;

// =============================================================================
// Hierarchy
// =============================================================================

/// The declared edges between the catalog record types.
pub fn hierarchy() -> Result<Hierarchy, HierarchyError> {
    let mut hierarchy = Hierarchy::new();

    hierarchy
        .register::<SchemaRecord, CatalogRecord>()?
        .register::<TableRecord, SchemaRecord>()?
        .register::<ColumnRecord, TableRecord>()?
        .register::<PrimaryKeyRecord, TableRecord>()?
        .register::<ColumnPrivilegeRecord, ColumnRecord>()?
        .register::<FunctionRecord, SchemaRecord>()?
        .register::<ProcedureRecord, SchemaRecord>()?
        .register::<UdtRecord, SchemaRecord>()?;

    Ok(hierarchy)
}

/// Empty names stand for "none" in catalog metadata.
fn non_empty(name: &str) -> Option<&str> {
    Some(name).filter(|name| !name.is_empty())
}
