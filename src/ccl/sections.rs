//! Section variant resolvers
//!
//! Three compound placeholders in the letter expand to one of a small set of
//! mutually exclusive, multi-paragraph forms: how charges are described, the
//! costs-at-risk wording, and the disbursements section. Each compound token
//! has a [`SectionState`] holding the chosen variant and whether the chooser
//! is currently revealed; until a variant is chosen (or while the chooser is
//! re-opened), rendering yields a bracketed selection prompt instead of prose.
//!
//! Variant bodies are token-bearing templates: their sub-field placeholders
//! are left as `{{name}}` so the assembler's re-scan substitutes them through
//! the same path as every other scalar field. Sub-field names are distinct
//! per variant, so switching variants cannot leak values between them, and
//! [`SectionState::reopen`] preserves whatever was already entered.

use crate::ccl::assemble::substitute_scalars;
use crate::ccl::fields::FieldStore;
use std::fmt;
use std::str::FromStr;

/// The three compound tokens recognized in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Charges,
    Costs,
    Disbursements,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Charges,
        SectionKind::Costs,
        SectionKind::Disbursements,
    ];

    /// The placeholder name this section occupies in templates.
    pub fn token_name(self) -> &'static str {
        match self {
            SectionKind::Charges => "charges_section_choice",
            SectionKind::Costs => "costs_section_choice",
            SectionKind::Disbursements => "disbursements_section_choice",
        }
    }

    fn selection_prompt(self) -> &'static str {
        match self {
            SectionKind::Charges => "[Select a charges option]",
            SectionKind::Costs => "[Select a costs option]",
            SectionKind::Disbursements => "[Select a disbursements option]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargesVariant {
    /// Fixed hourly rate tiers plus a user-entered estimate figure.
    HourlyRate,
    /// No overall estimate: reason, next stage and a figure or range.
    NoEstimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostsVariant {
    /// Fixed sentence, no sub-fields.
    NoCosts,
    /// Risk of paying another party's costs; names the other party.
    RiskCosts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisbursementsVariant {
    /// Dynamically-sized grid of disbursement rows with derived VAT.
    Table,
    /// Single estimate amount, optionally extended with example phrases.
    Estimate,
}

impl FromStr for ChargesVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly_rate" => Ok(ChargesVariant::HourlyRate),
            "no_estimate" => Ok(ChargesVariant::NoEstimate),
            other => Err(format!("unknown charges variant: {}", other)),
        }
    }
}

impl FromStr for CostsVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_costs" => Ok(CostsVariant::NoCosts),
            "risk_costs" => Ok(CostsVariant::RiskCosts),
            other => Err(format!("unknown costs variant: {}", other)),
        }
    }
}

impl FromStr for DisbursementsVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(DisbursementsVariant::Table),
            "estimate" => Ok(DisbursementsVariant::Estimate),
            other => Err(format!("unknown disbursements variant: {}", other)),
        }
    }
}

/// Chosen variant and chooser visibility for one compound token.
///
/// `variant == None` means "not yet chosen". Choosing collapses the chooser;
/// changing the variant later requires an explicit [`SectionState::reopen`],
/// which keeps the current variant and its sub-field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionState<V> {
    variant: Option<V>,
    revealed: bool,
}

impl<V> Default for SectionState<V> {
    fn default() -> Self {
        SectionState {
            variant: None,
            revealed: false,
        }
    }
}

impl<V: Copy> SectionState<V> {
    /// Set the variant and collapse the chooser, revealing generated text.
    pub fn choose(&mut self, variant: V) {
        self.variant = Some(variant);
        self.revealed = false;
    }

    /// Re-open the chooser (the "Change" affordance) without clearing the
    /// chosen variant or any sub-field values.
    pub fn reopen(&mut self) {
        self.revealed = true;
    }

    pub fn variant(&self) -> Option<V> {
        self.variant
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether rendering should present a chooser instead of prose.
    pub fn needs_choice(&self) -> bool {
        self.revealed || self.variant.is_none()
    }
}

// Variant bodies. The wording is the firm's standard engagement-letter text
// and must not be normalized.

const CHARGES_HOURLY_RATE: &str = "Our fees are calculated on the basis of an hourly rate. My rate is £395 per hour. Other Partners/senior solicitors are charged at £395, Associate solicitors at £325, Solicitors at £285 and trainees and paralegals are charged at £195. All hourly rates will be subject to the addition of VAT.

Short incoming and outgoing letters, messages, emails and routine phone calls are charged at 1/10 of an hour. All other work is timed in six minute units and charged at the relevant hourly rate. Please note that lots of small emails or telephone calls may unnecessarily increase the costs to you.

I estimate the cost of the Initial Scope with be £{{figure}} plus VAT.";

const CHARGES_NO_ESTIMATE: &str = "We cannot give an estimate of our overall charges in this matter because {{we_cannot_give_an_estimate_of_our_overall_charges_in_this_matter_because_reason_why_estimate_is_not_possible}}. The next stage in your matter is {{next_stage}} and we estimate that our charges up to the completion of that stage will be in the region of £{{figure_or_range}}.

We reserve the right to increase the hourly rates if the work done is particularly complex or urgent, or the nature of your instructions require us to work outside normal office hours. If this happens, we will notify you in advance and agree an appropriate rate.

We will review our hourly rates on a periodic basis. This is usually done annually each January. We will give you advance notice of any change to our hourly rates.";

const COSTS_NO_COSTS: &str = "We do not expect that you will have to pay another party's costs. This only tends to arise in litigation and is therefore not relevant to your matter.";

const COSTS_RISK: &str = "There is a risk that you may have to pay {{identify_the_other_party_eg_your_opponents}} costs in this matter. This is explained in section 5, Funding and billing below.";

const DISBURSEMENTS_TABLE_INTRO: &str =
    "Based on the information you have provided, we expect to incur the following disbursements:";

const DISBURSEMENTS_TABLE_HEADER: &str = "Disbursement | Amount | VAT";

const DISBURSEMENTS_ESTIMATE: &str = "We cannot give an exact figure for your disbursements, but this is likely to be in the region of £{{simple_disbursements_estimate}} in total including VAT.";

const DISBURSEMENTS_ESTIMATE_WITH_EXAMPLES_PREFIX: &str = "We cannot give an exact figure for your disbursements, but this is likely to be in the region of £{{simple_disbursements_estimate}} for the next steps in your matter including ";

/// VAT rate applied to disbursement amounts.
const VAT_RATE: f64 = 0.20;

/// Dynamic disbursement rows for the `table` variant.
///
/// Rows carry stable 1-based ids: removing row 2 of 3 leaves the fields of
/// rows 1 and 3 untouched, and ids are never reused within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisbursementTable {
    rows: Vec<u32>,
    next_id: u32,
}

impl Default for DisbursementTable {
    fn default() -> Self {
        DisbursementTable {
            rows: vec![1],
            next_id: 2,
        }
    }
}

impl DisbursementTable {
    /// Row ids in display order.
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Append a row, returning its id.
    pub fn add_row(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(id);
        id
    }

    /// Remove a row and discard its three field values. Returns false when
    /// the id is not present.
    pub fn remove_row(&mut self, id: u32, store: &mut FieldStore) -> bool {
        let Some(pos) = self.rows.iter().position(|r| *r == id) else {
            return false;
        };
        self.rows.remove(pos);
        store.clear(&Self::description_field(id));
        store.clear(&Self::amount_field(id));
        store.clear(&Self::vat_field(id));
        true
    }

    pub fn description_field(id: u32) -> String {
        format!("disbursement_{}_description", id)
    }

    pub fn amount_field(id: u32) -> String {
        format!("disbursement_{}_amount", id)
    }

    pub fn vat_field(id: u32) -> String {
        format!("disbursement_{}_vat", id)
    }

    /// Derived VAT cell for a row: amount × 0.20 rendered as `£x.xx`.
    /// None when the amount is empty or not a number.
    pub fn derived_vat(store: &FieldStore, id: u32) -> Option<String> {
        let raw = store.get(&Self::amount_field(id));
        let cleaned = raw.trim().trim_start_matches('£').replace(',', "");
        if cleaned.is_empty() {
            return None;
        }
        let amount: f64 = cleaned.parse().ok()?;
        Some(format!("£{:.2}", amount * VAT_RATE))
    }

    /// The grid as a token-bearing text span; the VAT column is resolved here
    /// because it is derived, everything else stays a placeholder.
    fn expand(&self, store: &FieldStore) -> String {
        let mut out = String::new();
        out.push_str(DISBURSEMENTS_TABLE_INTRO);
        out.push_str("\n\n");
        out.push_str(DISBURSEMENTS_TABLE_HEADER);
        for id in &self.rows {
            let vat = Self::derived_vat(store, *id)
                .unwrap_or_else(|| format!("{{{{{}}}}}", Self::vat_field(*id)));
            out.push('\n');
            out.push_str(&format!(
                "{{{{{desc}}}}} | £{{{{{amount}}}}} | {vat}",
                desc = Self::description_field(*id),
                amount = Self::amount_field(*id),
                vat = vat,
            ));
        }
        out
    }
}

/// Multi-select of canned example phrases for the `estimate` variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimateExamples {
    /// Whether the "including ..." clause is appended at all.
    pub enabled: bool,
    selected: Vec<String>,
}

impl EstimateExamples {
    /// Add the phrase if absent, remove it if present.
    pub fn toggle(&mut self, phrase: &str) {
        if let Some(pos) = self.selected.iter().position(|p| p == phrase) {
            self.selected.remove(pos);
        } else {
            self.selected.push(phrase.to_string());
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// The clause body: selected phrases joined with natural-language "and",
    /// or the examples placeholder token when nothing is selected.
    fn clause(&self) -> String {
        if self.selected.is_empty() {
            return "{{give_examples_of_what_your_estimate_includes_eg_accountants_report_and_court_fees}}".to_string();
        }
        join_with_and(&self.selected)
    }
}

/// Join phrases as prose: "a", "a and b", "a, b and c".
pub fn join_with_and(phrases: &[String]) -> String {
    match phrases.len() {
        0 => String::new(),
        1 => phrases[0].clone(),
        n => format!("{} and {}", phrases[..n - 1].join(", "), phrases[n - 1]),
    }
}

/// Complete section-variant state for one draft: one state per compound
/// token plus the disbursement grid and estimate examples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionChoices {
    pub charges: SectionState<ChargesVariant>,
    pub costs: SectionState<CostsVariant>,
    pub disbursements: SectionState<DisbursementsVariant>,
    pub disbursement_rows: DisbursementTable,
    pub estimate_examples: EstimateExamples,
}

impl SectionChoices {
    /// The token-bearing text a compound token expands to: either the
    /// variant's body or a bracketed selection prompt while no variant is
    /// active. The field store is only consulted for derived values (VAT).
    pub fn expand(&self, kind: SectionKind, store: &FieldStore) -> String {
        match kind {
            SectionKind::Charges => {
                if self.charges.needs_choice() {
                    return kind.selection_prompt().to_string();
                }
                match self.charges.variant() {
                    Some(ChargesVariant::HourlyRate) => CHARGES_HOURLY_RATE.to_string(),
                    Some(ChargesVariant::NoEstimate) => CHARGES_NO_ESTIMATE.to_string(),
                    None => kind.selection_prompt().to_string(),
                }
            }
            SectionKind::Costs => {
                if self.costs.needs_choice() {
                    return kind.selection_prompt().to_string();
                }
                match self.costs.variant() {
                    Some(CostsVariant::NoCosts) => COSTS_NO_COSTS.to_string(),
                    Some(CostsVariant::RiskCosts) => COSTS_RISK.to_string(),
                    None => kind.selection_prompt().to_string(),
                }
            }
            SectionKind::Disbursements => {
                if self.disbursements.needs_choice() {
                    return kind.selection_prompt().to_string();
                }
                match self.disbursements.variant() {
                    Some(DisbursementsVariant::Table) => self.disbursement_rows.expand(store),
                    Some(DisbursementsVariant::Estimate) => {
                        if self.estimate_examples.enabled {
                            format!(
                                "{}{}.",
                                DISBURSEMENTS_ESTIMATE_WITH_EXAMPLES_PREFIX,
                                self.estimate_examples.clause()
                            )
                        } else {
                            DISBURSEMENTS_ESTIMATE.to_string()
                        }
                    }
                    None => kind.selection_prompt().to_string(),
                }
            }
        }
    }

    /// Render one section standalone: expand it and substitute its sub-field
    /// tokens from the store, bracketed placeholders for anything empty.
    pub fn render(&self, kind: SectionKind, store: &FieldStore) -> String {
        substitute_scalars(&self.expand(kind, store), store)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchosen_section_renders_prompt() {
        let choices = SectionChoices::default();
        let store = FieldStore::new();
        assert_eq!(
            choices.render(SectionKind::Costs, &store),
            "[Select a costs option]"
        );
    }

    #[test]
    fn test_choose_collapses_and_reopen_preserves() {
        let mut choices = SectionChoices::default();
        choices.costs.choose(CostsVariant::NoCosts);
        assert!(!choices.costs.needs_choice());

        choices.costs.reopen();
        assert!(choices.costs.needs_choice());
        assert_eq!(choices.costs.variant(), Some(CostsVariant::NoCosts));
    }

    #[test]
    fn test_reopened_section_renders_prompt_again() {
        let mut choices = SectionChoices::default();
        let store = FieldStore::new();
        choices.costs.choose(CostsVariant::NoCosts);
        choices.costs.reopen();
        assert_eq!(
            choices.render(SectionKind::Costs, &store),
            "[Select a costs option]"
        );
    }

    #[test]
    fn test_costs_no_costs_text() {
        let mut choices = SectionChoices::default();
        let store = FieldStore::new();
        choices.costs.choose(CostsVariant::NoCosts);
        assert_eq!(
            choices.render(SectionKind::Costs, &store),
            "We do not expect that you will have to pay another party's costs. This only tends to arise in litigation and is therefore not relevant to your matter."
        );
    }

    #[test]
    fn test_costs_risk_substitutes_other_party() {
        let mut choices = SectionChoices::default();
        let mut store = FieldStore::new();
        choices.costs.choose(CostsVariant::RiskCosts);
        store
            .set("identify_the_other_party_eg_your_opponents", "the landlord")
            .unwrap();
        let text = choices.render(SectionKind::Costs, &store);
        assert!(text.contains("pay the landlord costs in this matter"));
    }

    #[test]
    fn test_charges_variants_do_not_leak_sub_fields() {
        let mut choices = SectionChoices::default();
        let mut store = FieldStore::new();
        store.set("figure", "1,000").unwrap();
        store.set("figure_or_range", "2,000-3,000").unwrap();

        choices.charges.choose(ChargesVariant::HourlyRate);
        let hourly = choices.render(SectionKind::Charges, &store);
        assert!(hourly.contains("£1,000 plus VAT"));
        assert!(!hourly.contains("2,000-3,000"));

        choices.charges.choose(ChargesVariant::NoEstimate);
        let no_estimate = choices.render(SectionKind::Charges, &store);
        assert!(no_estimate.contains("in the region of £2,000-3,000"));
        assert!(!no_estimate.contains("1,000 plus VAT"));
    }

    #[test]
    fn test_derived_vat() {
        let mut store = FieldStore::new();
        store.set("disbursement_1_amount", "100.00").unwrap();
        assert_eq!(
            DisbursementTable::derived_vat(&store, 1),
            Some("£20.00".to_string())
        );
        assert_eq!(DisbursementTable::derived_vat(&store, 2), None);

        store.set("disbursement_2_amount", "£1,250").unwrap();
        assert_eq!(
            DisbursementTable::derived_vat(&store, 2),
            Some("£250.00".to_string())
        );

        store.set("disbursement_3_amount", "not a number").unwrap();
        assert_eq!(DisbursementTable::derived_vat(&store, 3), None);
    }

    #[test]
    fn test_row_removal_discards_only_that_row() {
        let mut choices = SectionChoices::default();
        let mut store = FieldStore::new();
        let row2 = choices.disbursement_rows.add_row();
        let row3 = choices.disbursement_rows.add_row();
        assert_eq!((row2, row3), (2, 3));

        for id in 1..=3u32 {
            store
                .set(&DisbursementTable::description_field(id), format!("item {}", id))
                .unwrap();
            store
                .set(&DisbursementTable::amount_field(id), "100")
                .unwrap();
        }

        assert!(choices.disbursement_rows.remove_row(2, &mut store));
        assert_eq!(choices.disbursement_rows.rows(), &[1, 3]);
        assert_eq!(store.get("disbursement_2_description"), "");
        assert_eq!(store.get("disbursement_2_amount"), "");
        assert_eq!(store.get("disbursement_1_description"), "item 1");
        assert_eq!(store.get("disbursement_3_description"), "item 3");

        // Removing an absent row is a no-op.
        assert!(!choices.disbursement_rows.remove_row(2, &mut store));
    }

    #[test]
    fn test_table_expansion_has_one_line_per_row() {
        let mut choices = SectionChoices::default();
        let mut store = FieldStore::new();
        choices.disbursements.choose(DisbursementsVariant::Table);
        choices.disbursement_rows.add_row();
        store.set("disbursement_1_amount", "100.00").unwrap();

        let text = choices.expand(SectionKind::Disbursements, &store);
        assert!(text.contains("Disbursement | Amount | VAT"));
        assert!(text.contains("{{disbursement_1_description}} | £{{disbursement_1_amount}} | £20.00"));
        assert!(text.contains("{{disbursement_2_description}} | £{{disbursement_2_amount}} | {{disbursement_2_vat}}"));
    }

    #[test]
    fn test_estimate_examples_joining() {
        let mut choices = SectionChoices::default();
        let mut store = FieldStore::new();
        choices.disbursements.choose(DisbursementsVariant::Estimate);
        store.set("simple_disbursements_estimate", "500").unwrap();

        let plain = choices.render(SectionKind::Disbursements, &store);
        assert!(plain.contains("region of £500 in total including VAT."));

        choices.estimate_examples.enabled = true;
        choices.estimate_examples.toggle("court fees");
        choices.estimate_examples.toggle("accountants report");
        let with_examples = choices.render(SectionKind::Disbursements, &store);
        assert!(with_examples.contains("including court fees and accountants report."));

        choices.estimate_examples.toggle("search fees");
        let with_three = choices.render(SectionKind::Disbursements, &store);
        assert!(with_three.contains("court fees, accountants report and search fees."));

        // Toggling off removes the phrase again.
        choices.estimate_examples.toggle("search fees");
        let back_to_two = choices.render(SectionKind::Disbursements, &store);
        assert!(back_to_two.contains("court fees and accountants report."));
    }

    #[test]
    fn test_estimate_examples_empty_selection_renders_placeholder() {
        let mut choices = SectionChoices::default();
        let store = FieldStore::new();
        choices.disbursements.choose(DisbursementsVariant::Estimate);
        choices.estimate_examples.enabled = true;
        let text = choices.render(SectionKind::Disbursements, &store);
        assert!(text.contains(
            "[give examples of what your estimate includes eg accountants report and court fees]"
        ));
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("hourly_rate".parse(), Ok(ChargesVariant::HourlyRate));
        assert_eq!("no_costs".parse(), Ok(CostsVariant::NoCosts));
        assert_eq!("table".parse(), Ok(DisbursementsVariant::Table));
        assert!("bogus".parse::<ChargesVariant>().is_err());
    }
}
