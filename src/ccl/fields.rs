//! Field store for letter drafting
//!
//! Every scalar placeholder in the letter is backed by a named field holding
//! a string value and a "touched" flag. The store is a plain state container:
//! it is mutated only through [`FieldStore::set`] and [`FieldStore::prefill`],
//! and read by the assembler on every recomputation.
//!
//! The field map is a closed schema. Known names live in [`FIELD_CATALOG`]
//! (with their human display names); the only dynamic family is the
//! disbursement row fields `disbursement_<n>_{description,amount,vat}`.
//! Setting a name outside the schema is an error; reading any unset name
//! yields the empty string.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// Known field names with their display names, as shown by suggestion and
/// field-list UIs. One entry per scalar placeholder the letter templates use.
pub const FIELD_CATALOG: &[(&str, &str)] = &[
    ("insert_clients_name", "Client Name"),
    ("insert_heading_eg_matter_description", "Matter Heading"),
    ("matter", "Matter Type"),
    ("name_of_person_handling_matter", "Handler Name"),
    ("status", "Handler Status"),
    ("name_of_handler", "Handler Short Name"),
    ("handler", "Handler Reference"),
    ("email", "Contact Method"),
    ("fee_earner_phone", "Handler Phone"),
    ("fee_earner_email", "Handler Email"),
    ("fee_earner_postal_address", "Handler Postal Address"),
    ("insert_current_position_and_scope_of_retainer", "Scope of Work"),
    ("next_steps", "Next Actions"),
    ("realistic_timescale", "Timeline"),
    ("next_stage", "Next Milestone"),
    ("figure", "Payment Amount"),
    ("figure_or_range", "Cost Estimate"),
    (
        "we_cannot_give_an_estimate_of_our_overall_charges_in_this_matter_because_reason_why_estimate_is_not_possible",
        "No Estimate Reason",
    ),
    ("estimate", "Disbursement Estimate"),
    ("simple_disbursements_estimate", "Simple Estimate Amount"),
    (
        "in_total_including_vat_or_for_the_next_steps_in_your_matter",
        "Estimate Scope",
    ),
    (
        "give_examples_of_what_your_estimate_includes_eg_accountants_report_and_court_fees",
        "Estimate Includes",
    ),
    ("identify_the_other_party_eg_your_opponents", "Opposing Party"),
    ("may_will", "Litigation Likelihood"),
    ("and_or_intervals_eg_every_three_months", "Cost Update Frequency"),
    ("contact_details_for_marketing_opt_out", "Marketing Contact"),
    ("link_to_preference_centre", "Preference Centre URL"),
    (
        "explain_the_nature_of_your_arrangement_with_any_introducer_for_link_to_sample_wording_see_drafting_note_referral_and_fee_sharing_arrangement",
        "Referral Arrangement",
    ),
    ("instructions_link", "Cancellation Instructions URL"),
    ("name", "Supervisor Name"),
    (
        "names_and_contact_details_of_other_members_of_staff_who_can_help_with_queries",
        "Support Staff",
    ),
    ("name_of_firm", "Firm Name"),
    ("insert_next_step_you_would_like_client_to_take", "Next Step for Client"),
    ("state_why_this_step_is_important", "Step Importance"),
    ("state_amount", "Payment on Account"),
    ("insert_consequence", "Consequence of Non-payment"),
    (
        "describe_first_document_or_information_you_need_from_your_client",
        "First Document Required",
    ),
    (
        "describe_second_document_or_information_you_need_from_your_client",
        "Second Document Required",
    ),
    (
        "describe_third_document_or_information_you_need_from_your_client",
        "Third Document Required",
    ),
    ("matter_number", "Matter Reference Number"),
];

/// Pattern for the dynamic disbursement-row family.
static ROW_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^disbursement_[0-9]+_(description|amount|vat)$")
        .expect("row field pattern is valid")
});

/// Errors from field store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The name is neither in the catalog nor a disbursement row field.
    UnknownField(String),
}

impl std::error::Error for FieldError {}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::UnknownField(name) => write!(f, "unknown field: {}", name),
        }
    }
}

/// Value and touched status of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue {
    pub value: String,
    /// True once the user has explicitly set the field. Prefilled values stay
    /// untouched, marking them as system-suggested rather than confirmed.
    pub touched: bool,
}

/// Current value and touched status per field name.
///
/// Fields are created empty/untouched from the catalog and never deleted
/// during a session; [`FieldStore::reset`] restores the initial state when
/// the whole draft is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStore {
    values: BTreeMap<String, FieldValue>,
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldStore {
    /// Create a store seeded with every catalog field, empty and untouched.
    pub fn new() -> Self {
        let values = FIELD_CATALOG
            .iter()
            .map(|(name, _)| (name.to_string(), FieldValue::default()))
            .collect();
        FieldStore { values }
    }

    /// Whether a name is part of the schema (catalog or row family).
    pub fn is_known(name: &str) -> bool {
        FIELD_CATALOG.iter().any(|(n, _)| *n == name) || ROW_FIELD_RE.is_match(name)
    }

    /// Display name for a catalog field, if it has one.
    pub fn display_name(name: &str) -> Option<&'static str> {
        FIELD_CATALOG
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, display)| *display)
    }

    /// Current value of a field; `""` when unset or unknown.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(|v| v.value.as_str()).unwrap_or("")
    }

    /// Overwrite a field value and mark it touched.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FieldError> {
        if !Self::is_known(name) {
            return Err(FieldError::UnknownField(name.to_string()));
        }
        let entry = self.values.entry(name.to_string()).or_default();
        entry.value = value.into();
        entry.touched = true;
        Ok(())
    }

    /// Whether the user has explicitly set this field.
    pub fn is_touched(&self, name: &str) -> bool {
        self.values.get(name).map(|v| v.touched).unwrap_or(false)
    }

    /// Suggest a value without marking the field touched.
    ///
    /// Only applies when the field is unset and untouched: prefill is
    /// idempotent and always loses to any prior or subsequent
    /// [`FieldStore::set`], including a set that emptied the field.
    pub fn prefill(&mut self, name: &str, value: impl Into<String>) -> Result<(), FieldError> {
        if !Self::is_known(name) {
            return Err(FieldError::UnknownField(name.to_string()));
        }
        let entry = self.values.entry(name.to_string()).or_default();
        if entry.value.is_empty() && !entry.touched {
            entry.value = value.into();
        }
        Ok(())
    }

    /// Clear a field back to empty/untouched. Used when a disbursement row is
    /// removed so its values do not linger.
    pub fn clear(&mut self, name: &str) {
        if let Some(entry) = self.values.get_mut(name) {
            *entry = FieldValue::default();
        }
    }

    /// Reset the whole store to its initial state (whole-draft reset).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Snapshot of non-empty values, for serialization by callers.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .filter(|(_, v)| !v.value.is_empty())
            .map(|(name, v)| (name.clone(), v.value.clone()))
            .collect()
    }
}
