//! GEDCOM line-stream parser.
//!
//! Scans the record text line by line with a small parse context (current
//! block, current event tag and subtype) and builds a fresh
//! [`GenealogyCollection`]. This is a best-effort extraction pass, not a
//! validating parser: malformed or unrecognized lines are skipped without
//! any signal.

mod name;

use log::info;

use crate::gazetteer::Gazetteer;
use crate::models::{EventKind, Family, GenealogyCollection, Individual};

/// Which record block the parser is currently inside
#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum Block {
    #[default]
    None,
    Individual(String),
    Family(String),
}

/// Parse context threaded through the line scan.
///
/// The event tag is kept as the raw level-1 token because any word tag can
/// open an event context; only at place-recording time is it mapped to one
/// of the six tracked kinds.
#[derive(Debug, Default)]
struct ParseContext {
    block: Block,
    event_tag: Option<String>,
    event_subtype: Option<String>,
}

impl ParseContext {
    fn clear(&mut self) {
        self.block = Block::None;
        self.event_tag = None;
        self.event_subtype = None;
    }
}

/// Stateful GEDCOM parser bound to a place resolver.
///
/// The resolver must be fully built before parsing starts; with an empty
/// resolver every place stays unresolved but is still recorded.
pub struct GedcomParser<'a> {
    gazetteer: &'a Gazetteer,
}

impl<'a> GedcomParser<'a> {
    /// Create a parser over the given resolver
    #[must_use]
    pub const fn new(gazetteer: &'a Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Consume the full record text and build the genealogy graph.
    ///
    /// Accepts `\n` or `\r\n` terminators. The returned collection fully
    /// replaces any previously parsed one; nothing is merged.
    #[must_use]
    pub fn parse(&self, text: &str) -> GenealogyCollection {
        let mut collection = GenealogyCollection::new();
        let mut ctx = ParseContext::default();

        for line in text.lines() {
            if let Some(content) = line.strip_prefix("0 ") {
                ctx.clear();
                Self::handle_level0(content, &mut ctx, &mut collection);
            } else if let Some(content) = line.strip_prefix("1 ") {
                Self::handle_level1(content, &mut ctx, &mut collection);
            } else if let Some(content) = line.strip_prefix("2 ") {
                self.handle_level2(content, &mut ctx, &mut collection);
            }
        }

        collection.rebuild_children_index();
        info!(
            "Parsed {} individuals, {} families",
            collection.individual_count(),
            collection.family_count()
        );
        collection
    }

    /// A level-0 line has already cleared the context; open a new block for
    /// `@id@ INDI` / `@id@ FAM` headers, last declaration wins on duplicates.
    fn handle_level0(content: &str, ctx: &mut ParseContext, out: &mut GenealogyCollection) {
        let Some((id, tag)) = split_pointer_header(content) else {
            return;
        };
        match tag {
            "INDI" => {
                out.insert_individual(Individual::new(id));
                ctx.block = Block::Individual(id.to_string());
            }
            "FAM" => {
                out.insert_family(Family::new(id));
                ctx.block = Block::Family(id.to_string());
            }
            _ => {}
        }
    }

    fn handle_level1(content: &str, ctx: &mut ParseContext, out: &mut GenealogyCollection) {
        match ctx.block.clone() {
            Block::Individual(id) => {
                if let Some(raw) = content.strip_prefix("NAME ") {
                    if let Some(individual) = out.individual_mut(&id) {
                        individual.name = name::display_name(raw);
                    }
                } else if let Some(value) = content.strip_prefix("FAMC ") {
                    if let Some(famc) = pointer_id(value) {
                        if let Some(individual) = out.individual_mut(&id) {
                            individual.famc = Some(famc.to_string());
                        }
                    }
                } else if let Some(tag) = word_tag(content) {
                    ctx.event_tag = Some(tag.to_string());
                    ctx.event_subtype = None;
                }
            }
            Block::Family(id) => {
                if let Some(value) = content.strip_prefix("HUSB ") {
                    if let Some(husband) = pointer_id(value) {
                        if let Some(family) = out.family_mut(&id) {
                            family.husband = Some(husband.to_string());
                        }
                    }
                } else if let Some(value) = content.strip_prefix("WIFE ") {
                    if let Some(wife) = pointer_id(value) {
                        if let Some(family) = out.family_mut(&id) {
                            family.wife = Some(wife.to_string());
                        }
                    }
                } else if word_tag(content) == Some("MARR") {
                    ctx.event_tag = Some("MARR".to_string());
                    ctx.event_subtype = None;
                }
            }
            Block::None => {}
        }
    }

    fn handle_level2(&self, content: &str, ctx: &mut ParseContext, out: &mut GenealogyCollection) {
        match ctx.block.clone() {
            Block::Individual(id) => {
                if let Some(value) = content.strip_prefix("TYPE ") {
                    if ctx.event_tag.as_deref() == Some("EVEN") {
                        ctx.event_subtype = Some(value.to_lowercase());
                    }
                } else if let Some(value) = content.strip_prefix("DATE ") {
                    Self::record_year(&id, value, ctx, out);
                } else if let Some(value) = content.strip_prefix("PLAC ") {
                    if let Some(kind) = effective_kind(ctx) {
                        let occurrence = self.gazetteer.resolve_place(value);
                        out.events.record(kind, &id, occurrence);
                    }
                }
            }
            Block::Family(id) => {
                if let Some(value) = content.strip_prefix("PLAC ") {
                    if ctx.event_tag.as_deref() == Some("MARR") {
                        self.record_marriage_place(&id, value, out);
                    }
                }
            }
            Block::None => {}
        }
    }

    /// Birth and death years are the only dates the model retains
    fn record_year(
        individual_id: &str,
        value: &str,
        ctx: &ParseContext,
        out: &mut GenealogyCollection,
    ) {
        let Some(year) = name::extract_year(value) else {
            return;
        };
        let Some(individual) = out.individual_mut(individual_id) else {
            return;
        };
        match ctx.event_tag.as_deref() {
            Some("BIRT") => individual.birth_year = Some(year),
            Some("DEAT") => individual.death_year = Some(year),
            _ => {}
        }
    }

    /// A marriage place is a shared event: the same occurrence is recorded
    /// under both spouse ids, to be halved at aggregation time.
    fn record_marriage_place(&self, family_id: &str, value: &str, out: &mut GenealogyCollection) {
        let Some(family) = out.family(family_id) else {
            return;
        };
        let spouses: Vec<String> = family.spouses().map(str::to_string).collect();
        let occurrence = self.gazetteer.resolve_place(value);
        for spouse in &spouses {
            out.events.record(EventKind::Marriage, spouse, occurrence.clone());
        }
    }
}

/// Bucket for the current event, reclassifying a generic EVEN whose subtype
/// text is "residence"
fn effective_kind(ctx: &ParseContext) -> Option<EventKind> {
    let tag = ctx.event_tag.as_deref()?;
    if tag == "EVEN" && ctx.event_subtype.as_deref() == Some("residence") {
        return Some(EventKind::Residence);
    }
    EventKind::from_tag(tag)
}

/// Split a level-0 `@id@ TAG` header into the id and the trimmed tag
fn split_pointer_header(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix('@')?;
    let close = rest.find('@')?;
    Some((&rest[..close], rest[close + 1..].trim()))
}

/// Extract the id from a `@id@` pointer value
fn pointer_id(value: &str) -> Option<&str> {
    let rest = value.trim().strip_prefix('@')?;
    rest.find('@').map(|close| &rest[..close])
}

/// First whitespace-delimited token of a line, when purely word characters
fn word_tag(content: &str) -> Option<&str> {
    let token = content.split_whitespace().next()?;
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
        .then_some(token)
}
