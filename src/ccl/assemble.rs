//! Document assembler
//!
//! Merges a template, the field store and the section-variant state into
//! final letter text. Compound tokens are resolved first, the result is
//! re-scanned (variant bodies introduce new scalar tokens), and every
//! remaining token is substituted from the store or replaced with a bracketed
//! human-readable placeholder, so assembled text always reads as prose with
//! explicit gaps and no raw `{{...}}` syntax survives.
//!
//! [`assemble`] is a pure function of its inputs; recomputation after every
//! edit is total, so callers never patch previous output.

use crate::ccl::fields::FieldStore;
use crate::ccl::scanner::scan;
use crate::ccl::sections::{SectionChoices, SectionKind};

/// The bracketed placeholder shown for an unanswered token:
/// `figure_or_range` becomes `[figure or range]`.
pub fn placeholder_for(name: &str) -> String {
    format!("[{}]", name.replace('_', " "))
}

/// Substitute every `{{name}}` in `text` from the store, falling back to the
/// bracketed placeholder when the field is empty or unknown. Repeated
/// occurrences of one name resolve identically by construction: the store is
/// the single source of truth.
pub fn substitute_scalars(text: &str, store: &FieldStore) -> String {
    let tokens = scan(text);
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for token in &tokens {
        out.push_str(&text[cursor..token.start]);
        let value = store.get(&token.name);
        if value.is_empty() {
            out.push_str(&placeholder_for(&token.name));
        } else {
            out.push_str(value);
        }
        cursor = token.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Assemble the final letter text.
///
/// 1. Each compound token present in the template is replaced with its
///    resolver's expansion (variant body or selection prompt).
/// 2. The result is re-scanned; variant substitution rewrites spans, so
///    tokens are re-derived rather than patched.
/// 3. Remaining scalar tokens are substituted with store values or bracketed
///    placeholders.
pub fn assemble(template: &str, store: &FieldStore, choices: &SectionChoices) -> String {
    let mut text = template.to_string();
    for kind in SectionKind::ALL {
        let token = format!("{{{{{}}}}}", kind.token_name());
        if text.contains(&token) {
            text = text.replace(&token, &choices.expand(kind, store));
        }
    }
    substitute_scalars(&text, store)
}

/// Finalize-time check: names of tokens that would still render as
/// placeholders, in first-occurrence order, deduplicated. The check only
/// reports; it never blocks edits or assembly.
pub fn missing_required_fields(
    template: &str,
    store: &FieldStore,
    choices: &SectionChoices,
) -> Vec<String> {
    let mut expanded = template.to_string();
    for kind in SectionKind::ALL {
        let token = format!("{{{{{}}}}}", kind.token_name());
        if expanded.contains(&token) {
            expanded = expanded.replace(&token, &choices.expand(kind, store));
        }
    }

    let mut missing = Vec::new();
    for token in scan(&expanded) {
        if store.get(&token.name).is_empty() && !missing.contains(&token.name) {
            missing.push(token.name);
        }
    }
    missing
}
