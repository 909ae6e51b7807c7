#![deny(
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    unsafe_code,
    unused
)]
#![deny(
    rust_2018_compatibility,
    rust_2018_idioms
)]
#![deny(
    rust_2021_compatibility,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions
)]
#![deny(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic
)]
#![allow(
    clippy::missing_errors_doc,
    missing_docs,
    rustdoc::all
)]

pub mod catalog;
mod entity;
mod error;
mod hierarchy;
mod metadata;

pub use entity::{
    builder::Builder as EntityBuilder,
    child::{
        parent_of,
        Child,
    },
    located::{
        Located,
        Named,
    },
    Entity,
    Top,
};
pub use error::{
    BuildError,
    HierarchyError,
    LabelError,
};
pub use hierarchy::{
    ChildOf,
    Conflict,
    Edge,
    Hierarchy,
    Options as HierarchyOptions,
};
pub use metadata::{
    label::{
        LabelValue,
        Labeled,
        LabeledExt,
    },
    Kind,
    MetadataType,
    MetadataValue,
    ValueType,
};
