//! Core data model for quill.
//!
//! Descriptors are the input contract: one immutable record per
//! user-specified property or block, built fresh from the manifest on
//! every run. They carry no identity beyond their position in the list.

mod block;
mod property;

pub use block::BlockDescriptor;
pub use property::{DateValue, FieldDescriptor, PropertyValue};
