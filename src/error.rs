use miette::Diagnostic;
use thiserror::Error;

use crate::Kind;

// =============================================================================

// Label Errors

#[derive(Clone, Debug, Diagnostic, Error, PartialEq, Eq)]
pub enum LabelError {
    #[diagnostic(code(label::unknown), help("check the labels listed by the record type"))]
    #[error("no value labeled as '{label}'")]
    Unknown { label: String },
    #[diagnostic(code(label::convert), help("read the value with `labeled_value` instead"))]
    #[error("value '{value}' labeled as '{label}' is not convertible to {target}")]
    NotConvertible {
        label: String,
        value: String,
        target: &'static str,
    },
}

// =============================================================================

// Hierarchy Errors

#[derive(Clone, Copy, Debug, Diagnostic, Error, PartialEq, Eq)]
pub enum HierarchyError {
    #[diagnostic(code(hierarchy::cycle), help("a type may not be its own ancestor"))]
    #[error("declaring '{child}' as a child of '{parent}' would create a cycle")]
    Cycle { child: Kind, parent: Kind },
    #[diagnostic(
        code(hierarchy::conflict),
        help("register each type once, or configure the hierarchy to replace or keep edges")
    )]
    #[error("'{child}' is already a child of '{existing}', not '{parent}'")]
    Conflict {
        child: Kind,
        existing: Kind,
        parent: Kind,
    },
}

// =============================================================================

// Build Errors

#[derive(Clone, Copy, Debug, Diagnostic, Error, PartialEq, Eq)]
pub enum BuildError {
    #[diagnostic(code(entity::build), help("supply a parent before building"))]
    #[error("'{kind}' entity built without a parent")]
    MissingParent { kind: Kind },
}
