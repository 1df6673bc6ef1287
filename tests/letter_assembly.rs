//! End-to-end assembly tests against the built-in engagement letter
//!
//! These exercise the full pipeline: compound-token expansion, re-scan and
//! scalar substitution, driven through the public API the way a drafting UI
//! would drive it.

use ccl::ccl::assemble::{assemble, missing_required_fields, substitute_scalars};
use ccl::ccl::fields::FieldStore;
use ccl::ccl::sections::{
    ChargesVariant, CostsVariant, DisbursementsVariant, SectionChoices, SectionKind,
};
use ccl::ccl::template::{Prefill, DEFAULT_CCL_TEMPLATE};
use rstest::rstest;

#[test]
fn test_untouched_session_is_all_placeholders_and_prompts() {
    let store = FieldStore::new();
    let choices = SectionChoices::default();
    let text = assemble(DEFAULT_CCL_TEMPLATE, &store, &choices);

    assert!(text.starts_with("Dear [insert clients name]"));
    assert!(text.contains("[Select a charges option]"));
    assert!(text.contains("[Select a costs option]"));
    assert!(text.contains("[Select a disbursements option]"));
    assert!(!text.contains("{{"));
    assert!(!text.contains("}}"));
}

#[test]
fn test_simple_substitution_with_section_choice() {
    let mut store = FieldStore::new();
    store.set("name", "Jane").unwrap();
    let mut choices = SectionChoices::default();
    choices.costs.choose(CostsVariant::NoCosts);

    let text = assemble("Dear {{name}}. {{costs_section_choice}}", &store, &choices);
    assert_eq!(
        text,
        "Dear Jane. We do not expect that you will have to pay another party's costs. This only tends to arise in litigation and is therefore not relevant to your matter."
    );
}

#[test]
fn test_no_raw_token_syntax_survives_full_assembly() {
    let mut store = FieldStore::new();
    store.set("insert_clients_name", "Mr. John Smith").unwrap();
    store.set("figure", "1,500").unwrap();
    let mut choices = SectionChoices::default();
    choices.charges.choose(ChargesVariant::HourlyRate);
    choices.costs.choose(CostsVariant::RiskCosts);
    choices
        .disbursements
        .choose(DisbursementsVariant::Estimate);

    let text = assemble(DEFAULT_CCL_TEMPLATE, &store, &choices);
    assert!(!text.contains("{{"));
    assert!(!text.contains("}}"));
    assert!(text.contains("Dear Mr. John Smith"));
    assert!(text.contains("with be £1,500 plus VAT."));
}

#[test]
fn test_every_occurrence_of_a_name_resolves_identically() {
    let mut store = FieldStore::new();
    store.set("figure", "750").unwrap();
    let mut choices = SectionChoices::default();
    choices.charges.choose(ChargesVariant::HourlyRate);

    // `figure` appears both inside the charges variant and in section 6.
    let text = assemble(DEFAULT_CCL_TEMPLATE, &store, &choices);
    assert!(text.contains("with be £750 plus VAT."));
    assert!(text.contains("Please provide us with £750 on account of costs."));
    assert!(!text.contains("[figure]"));
}

#[test]
fn test_switching_variants_recomputes_without_residue() {
    let mut store = FieldStore::new();
    store
        .set("identify_the_other_party_eg_your_opponents", "the landlord")
        .unwrap();
    let mut choices = SectionChoices::default();

    choices.costs.choose(CostsVariant::RiskCosts);
    let risk = assemble(DEFAULT_CCL_TEMPLATE, &store, &choices);
    assert!(risk.contains("pay the landlord costs in this matter"));

    choices.costs.choose(CostsVariant::NoCosts);
    let no_costs = assemble(DEFAULT_CCL_TEMPLATE, &store, &choices);
    assert!(!no_costs.contains("the landlord costs"));
    assert!(no_costs.contains("We do not expect that you will have to pay another party's costs."));
}

#[test]
fn test_assembly_is_a_pure_function_of_its_inputs() {
    let mut store = FieldStore::new();
    store.set("matter", "a lease renewal").unwrap();
    let mut choices = SectionChoices::default();
    choices.charges.choose(ChargesVariant::NoEstimate);

    let first = assemble(DEFAULT_CCL_TEMPLATE, &store, &choices);
    let second = assemble(DEFAULT_CCL_TEMPLATE, &store, &choices);
    assert_eq!(first, second);
}

#[test]
fn test_prefill_flows_into_assembly_until_overridden() {
    let mut store = FieldStore::new();
    let prefill = Prefill {
        client_name: Some("Ms. Emily Davis".to_string()),
        matter_title: Some("Contract Negotiation".to_string()),
        ..Prefill::default()
    };
    prefill.apply(&mut store).unwrap();

    let choices = SectionChoices::default();
    let text = assemble(DEFAULT_CCL_TEMPLATE, &store, &choices);
    assert!(text.starts_with("Dear Ms. Emily Davis"));
    assert!(text.contains("RE: Contract Negotiation"));

    store.set("insert_clients_name", "Ms. E. Davis").unwrap();
    let text = assemble(DEFAULT_CCL_TEMPLATE, &store, &choices);
    assert!(text.starts_with("Dear Ms. E. Davis"));
}

#[test]
fn test_missing_fields_shrink_as_answers_arrive() {
    let mut store = FieldStore::new();
    let mut choices = SectionChoices::default();
    choices.costs.choose(CostsVariant::RiskCosts);

    let template = "{{costs_section_choice}}";
    let before = missing_required_fields(template, &store, &choices);
    assert_eq!(
        before,
        vec!["identify_the_other_party_eg_your_opponents".to_string()]
    );

    store
        .set("identify_the_other_party_eg_your_opponents", "the tenant")
        .unwrap();
    assert!(missing_required_fields(template, &store, &choices).is_empty());
}

#[test]
fn test_missing_fields_for_the_default_template_include_sub_fields() {
    let store = FieldStore::new();
    let mut choices = SectionChoices::default();
    choices.charges.choose(ChargesVariant::NoEstimate);

    let missing = missing_required_fields(DEFAULT_CCL_TEMPLATE, &store, &choices);
    assert!(missing.contains(&"insert_clients_name".to_string()));
    assert!(missing.contains(&"next_stage".to_string()));
    assert!(missing.contains(&"figure_or_range".to_string()));
    // Deduplicated: each name is reported once however often it occurs.
    assert_eq!(
        missing.iter().filter(|n| n.as_str() == "figure").count(),
        1
    );
}

#[rstest(
    name, expected,
    case("figure_or_range", "[figure or range]"),
    case("insert_clients_name", "[insert clients name]"),
    case("may_will", "[may will]")
)]
fn test_placeholder_wording(name: &str, expected: &str) {
    let store = FieldStore::new();
    let out = substitute_scalars(&format!("{{{{{}}}}}", name), &store);
    assert_eq!(out, expected);
}

#[test]
fn test_section_render_matches_assembly_of_the_bare_token() {
    let mut store = FieldStore::new();
    store.set("simple_disbursements_estimate", "500").unwrap();
    let mut choices = SectionChoices::default();
    choices
        .disbursements
        .choose(DisbursementsVariant::Estimate);

    let standalone = choices.render(SectionKind::Disbursements, &store);
    let assembled = assemble("{{disbursements_section_choice}}", &store, &choices);
    assert_eq!(standalone, assembled);
}
