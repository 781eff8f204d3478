//! Per-document write state.
//!
//! One [`WriteContext`] is constructed per descriptive-resource write and
//! threaded by mutable reference through every writer. It carries the only
//! mutable state in the whole pass: the two group-id counters and the
//! diagnostics sink. Nothing survives the write; sharing a context across
//! documents would corrupt group-id scoping.

use crate::diagnostics::{DiagnosticsSink, Notice};

/// Allocator for `altRepGroup` and `nameTitleGroup` identifiers.
///
/// The two counters are independent on purpose: an altRepGroup and a
/// nameTitleGroup may legitimately carry the same numeric value without
/// colliding, because they live in different attributes.
#[derive(Debug)]
pub struct IdGenerator {
    alt_rep_group: u32,
    name_title_group: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            alt_rep_group: 1,
            name_title_group: 1,
        }
    }

    /// Next altRepGroup id, rendered as a decimal string.
    pub fn next_alt_rep_group(&mut self) -> String {
        let id = self.alt_rep_group;
        self.alt_rep_group += 1;
        id.to_string()
    }

    /// Next nameTitleGroup id, rendered as a decimal string.
    pub fn next_name_title_group(&mut self) -> String {
        let id = self.name_title_group;
        self.name_title_group += 1;
        id.to_string()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable state threaded through one document write.
pub struct WriteContext<'a> {
    /// Group-id allocator, shared by every writer in this document.
    pub ids: IdGenerator,
    diagnostics: &'a mut dyn DiagnosticsSink,
}

impl<'a> WriteContext<'a> {
    pub fn new(diagnostics: &'a mut dyn DiagnosticsSink) -> Self {
        Self {
            ids: IdGenerator::new(),
            diagnostics,
        }
    }

    /// Report a data-quality notice. Fire-and-forget.
    pub fn notify(&mut self, notice: Notice) {
        self.diagnostics.notify(notice);
    }
}
