//! # probe-core
//!
//! Core types shared across the docprobe crates.
//!
//! This crate provides:
//! - The Firestore field value model ([`FieldValue`]) decoded from REST JSON
//! - [`Fields`], a schema-less field map with defaulting accessors
//! - [`Number`], a numeric field that prints the way it was stored
//! - [`Document`], one fetched record with its identifier
//! - Typed records for the five inspected collections
//! - [`OrderedGroups`], an insertion-ordered grouping of records by key
//! - Collection naming and per-run counts
//! - Cross-cutting error types

pub mod collections;
pub mod document;
pub mod entities;
pub mod errors;
pub mod fields;
pub mod grouping;
pub mod number;
pub mod value;

pub use collections::{CollectionCounts, CollectionName};
pub use document::Document;
pub use errors::CoreError;
pub use fields::Fields;
pub use grouping::{Group, OrderedGroups};
pub use number::Number;
pub use value::FieldValue;
