//! # Cocina MODS - descriptive metadata to MODS XML
//!
//! Cocina MODS writes a validated Cocina descriptive-metadata tree out as
//! MODS-shaped XML elements: one writer per descriptive concept, appended
//! to a caller-owned root in fixed MODS order.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Cocina tree  │────▶│   Writers    │────▶│  XmlElement  │
//! │ (validated)  │     │ (per concept)│     │    tree      │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cocina_mods::{write_descriptive, DescriptiveResource, NoticeLog, XmlElement};
//!
//! fn main() {
//!     let resource: DescriptiveResource =
//!         serde_json::from_str(include_str!("resource.json")).unwrap();
//!     let mut mods = XmlElement::new("mods");
//!     let mut log = NoticeLog::new();
//!     write_descriptive(&mut mods, &resource, &mut log).unwrap();
//!     println!("{}", mods.to_xml().unwrap());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (DescriptiveResource, DescriptiveValue)
//! - [`vocab`] - Canonical lookup tables, shared by both directions
//! - [`xml`] - Output element tree and quick-xml serialization
//! - [`diagnostics`] - Non-fatal data-quality notices
//! - [`write`] - The writers and their orchestrator

// Core modules
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod vocab;
pub mod xml;

// Writing
pub mod write;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{VocabResult, VocabularyError, WriteError, WriteResult, XmlError, XmlResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    Access,
    AdminMetadata,
    Contributor,
    DescriptiveResource,
    DescriptiveValue,
    Event,
    Geographic,
    Language,
    RelatedResource,
    Shape,
    Source,
};

// =============================================================================
// Re-exports - Diagnostics
// =============================================================================

pub use diagnostics::{DiagnosticsSink, Notice, NoticeLevel, NoticeLog, NullSink};

// =============================================================================
// Re-exports - XML output
// =============================================================================

pub use xml::{XmlContent, XmlElement};

// =============================================================================
// Re-exports - Writing
// =============================================================================

pub use write::{write_descriptive, IdGenerator, NameTitleGroups, WriteContext};
