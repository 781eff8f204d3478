//! The write direction: Cocina descriptive metadata to MODS elements.
//!
//! [`write_descriptive`] is the entry point; everything else is one writer
//! per concept, sharing a [`WriteContext`] for group-id allocation and
//! diagnostics. Writers append to a caller-owned [`crate::xml::XmlElement`]
//! and never perform I/O.

pub mod admin_metadata;
pub mod attributes;
pub mod context;
pub mod contributor;
pub mod descriptive;
pub mod event;
pub mod form;
pub mod geographic;
pub mod identifier;
pub mod language;
pub mod location;
pub mod name_title;
pub mod note;
pub mod part;
pub mod related_resource;
pub mod role;
pub mod subject;
pub mod title;

pub use context::{IdGenerator, WriteContext};
pub use descriptive::write_descriptive;
pub use name_title::NameTitleGroups;
