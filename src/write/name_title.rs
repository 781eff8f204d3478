//! Name/title group resolution.
//!
//! A structured title may embed a name (a sub-part typed `name`). When that
//! name matches a contributor, the title's `titleInfo` and the
//! contributor's `name` element must share one `nameTitleGroup` id. The
//! orchestrator resolves all pairings up front into a [`NameTitleGroups`]
//! table so the Title and Contributor writers agree on ids without talking
//! to each other.
//!
//! Matching is by exact string equality of name tokens only - never by
//! URI or authority. Two distinct real-world entities with coincidentally
//! identical name strings will be linked. That is a known, accepted
//! limitation of the mapping, not a bug to silently fix here.

use std::collections::HashMap;

use crate::models::{Contributor, DescriptiveValue, Shape};
use crate::write::context::IdGenerator;

/// Outcome of matching one title's embedded name against the contributors.
#[derive(Debug, Clone, PartialEq)]
pub struct NameTitleMatch {
    pub contributor_index: usize,
    pub name_index: usize,
    /// Index into the name's parallel variants, when the match hit one.
    pub parallel_index: Option<usize>,
}

/// The `name`-typed sub-part embedded in a structured title, if any.
pub fn embedded_name(title: &DescriptiveValue) -> Option<&DescriptiveValue> {
    title.structured_value.iter().find(|part| part.type_is("name"))
}

/// Tokens of a name: sub-part values for a structured name, the single
/// value otherwise.
fn name_tokens(name: &DescriptiveValue) -> Vec<&str> {
    match name.shape() {
        Some(Shape::Structured(parts)) => {
            parts.iter().filter_map(|p| p.value.as_deref()).collect()
        }
        Some(Shape::Plain(value)) => vec![value],
        _ => Vec::new(),
    }
}

/// Every title token must equal some contributor-name token.
fn tokens_match(title_tokens: &[&str], contributor_name: &DescriptiveValue) -> bool {
    let contributor_tokens = name_tokens(contributor_name);
    if contributor_tokens.is_empty() {
        return false;
    }
    title_tokens
        .iter()
        .all(|token| contributor_tokens.contains(token))
}

/// Find the contributor whose name matches the title's embedded name.
///
/// Search order is contributors, then names, then parallel variants; the
/// first full match wins. Returns `None` when the title embeds no name or
/// nothing matches.
pub fn find_contributor_for_title(
    title: &DescriptiveValue,
    contributors: &[Contributor],
) -> Option<NameTitleMatch> {
    let embedded = embedded_name(title)?;
    let tokens = name_tokens(embedded);
    if tokens.is_empty() {
        return None;
    }

    for (contributor_index, contributor) in contributors.iter().enumerate() {
        for (name_index, name) in contributor.name.iter().enumerate() {
            match name.shape() {
                Some(Shape::Parallel(variants)) => {
                    for (parallel_index, variant) in variants.iter().enumerate() {
                        if tokens_match(&tokens, variant) {
                            return Some(NameTitleMatch {
                                contributor_index,
                                name_index,
                                parallel_index: Some(parallel_index),
                            });
                        }
                    }
                }
                _ => {
                    if tokens_match(&tokens, name) {
                        return Some(NameTitleMatch {
                            contributor_index,
                            name_index,
                            parallel_index: None,
                        });
                    }
                }
            }
        }
    }
    None
}

/// One title's side of a name/title pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleGroup {
    /// Shared nameTitleGroup id.
    pub id: String,
    /// The matched contributor, or `None` when the title must emit its own
    /// sibling `name` element from its embedded name parts.
    pub contributor_index: Option<usize>,
}

/// One contributor's side of a name/title pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributorGroup {
    pub id: String,
    pub name_index: usize,
    pub parallel_index: Option<usize>,
}

/// Precomputed name/title pairings for one document.
#[derive(Debug, Default)]
pub struct NameTitleGroups {
    by_title: HashMap<usize, TitleGroup>,
    by_contributor: HashMap<usize, ContributorGroup>,
}

impl NameTitleGroups {
    /// Resolve all pairings, allocating ids from the shared generator.
    pub fn resolve(
        titles: &[DescriptiveValue],
        contributors: &[Contributor],
        ids: &mut IdGenerator,
    ) -> Self {
        let mut groups = Self::default();

        for (title_index, title) in titles.iter().enumerate() {
            // Only uniform titles emit a titleInfo that carries the group
            // id; pairing any other shape would leave the contributor's
            // name pointing at a group no title ever joins.
            if !title.type_is("uniform") || embedded_name(title).is_none() {
                continue;
            }
            let id = ids.next_name_title_group();
            match find_contributor_for_title(title, contributors) {
                Some(found) => {
                    groups.by_title.insert(
                        title_index,
                        TitleGroup {
                            id: id.clone(),
                            contributor_index: Some(found.contributor_index),
                        },
                    );
                    // First title to claim a contributor wins.
                    groups
                        .by_contributor
                        .entry(found.contributor_index)
                        .or_insert(ContributorGroup {
                            id,
                            name_index: found.name_index,
                            parallel_index: found.parallel_index,
                        });
                }
                None => {
                    groups.by_title.insert(
                        title_index,
                        TitleGroup {
                            id,
                            contributor_index: None,
                        },
                    );
                }
            }
        }
        groups
    }

    /// Pairing for a title, by its index in the title collection.
    pub fn for_title(&self, title_index: usize) -> Option<&TitleGroup> {
        self.by_title.get(&title_index)
    }

    /// Pairing for a contributor, by its index in the contributor
    /// collection.
    pub fn for_contributor(&self, contributor_index: usize) -> Option<&ContributorGroup> {
        self.by_contributor.get(&contributor_index)
    }
}
