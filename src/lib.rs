//! # ccl
//!
//! A document assembly engine for client care letters.
//!
//! A letter template carries `{{name}}` placeholders. Scalar placeholders are
//! answered through a [field store](ccl::fields::FieldStore); three compound
//! placeholders (`charges_section_choice`, `costs_section_choice`,
//! `disbursements_section_choice`) expand to one of a fixed set of
//! multi-paragraph [section variants](ccl::sections). The
//! [assembler](ccl::assemble::assemble) merges everything into final prose,
//! and the [structural formatter](ccl::blocks::to_blocks) re-derives typed
//! blocks (headings, em-dash bullets, the action-point checkbox table) from
//! the merged text for rendering.
//!
//! The engine is pure and synchronous: every mutation is followed by a total
//! recomputation of text and blocks. Persistence, transport and UI belong to
//! callers.

pub mod ccl;
