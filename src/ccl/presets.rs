//! Preset suggestion index
//!
//! Static mapping from field name to a short list of canned phrases. This is
//! display/suggestion data looked up by the UI layer; it is never required
//! for correctness and nothing here is computed.

/// Canned phrases per field, tried in declaration order by suggestion UIs.
pub const FIELD_PRESETS: &[(&str, &[&str])] = &[
    (
        "insert_clients_name",
        &[
            "Mr. John Smith",
            "Mrs. Sarah Johnson",
            "Ms. Emily Davis",
            "Dr. Michael Brown",
            "Mr. and Mrs. Williams",
        ],
    ),
    (
        "matter",
        &[
            "Commercial Property Purchase",
            "Residential Property Sale",
            "Business Acquisition",
            "Employment Dispute",
            "Contract Negotiation",
        ],
    ),
    (
        "name_of_person_handling_matter",
        &[
            "John Williams",
            "Sarah Mitchell",
            "Michael Thompson",
            "Emily Roberts",
            "David Anderson",
        ],
    ),
    (
        "status",
        &[
            "Senior Associate",
            "Partner",
            "Associate",
            "Senior Partner",
            "Consultant",
        ],
    ),
    (
        "next_steps",
        &[
            "Review and sign the attached documents",
            "Provide requested documentation",
            "Attend the scheduled meeting",
            "Review the draft contract",
            "Complete the client questionnaire",
        ],
    ),
    (
        "next_stage",
        &[
            "document review",
            "contract negotiation",
            "completion",
            "exchange of contracts",
            "due diligence",
        ],
    ),
    ("figure", &["500", "1,000", "1,500", "2,500", "3,000"]),
    (
        "figure_or_range",
        &[
            "2,000-3,000",
            "5,000-7,500",
            "1,500-2,500",
            "3,000-5,000",
            "10,000-15,000",
        ],
    ),
    (
        "we_cannot_give_an_estimate_of_our_overall_charges_in_this_matter_because_reason_why_estimate_is_not_possible",
        &[
            "the scope of work is unclear at this stage",
            "it depends on the complexity of negotiations",
            "the matter involves multiple unknown variables",
            "we need more information about your requirements",
            "the timeline and scope may change significantly",
        ],
    ),
    (
        "identify_the_other_party_eg_your_opponents",
        &[
            "the seller",
            "the buyer",
            "the landlord",
            "the tenant",
            "the opposing party",
            "the defendant",
            "the claimant",
            "the other party's",
            "your opponent's",
        ],
    ),
    (
        "simple_disbursements_estimate",
        &["500", "1000", "1500", "2000", "3000"],
    ),
    (
        "insert_next_step_you_would_like_client_to_take",
        &[
            "telephone me to discuss this letter and the next steps in your matter",
            "review and sign the enclosed documentation",
            "provide the requested information and documents",
            "attend the scheduled meeting or consultation",
            "confirm your instructions and preferred approach",
        ],
    ),
    (
        "state_why_this_step_is_important",
        &[
            "This will help us understand your priorities and proceed efficiently",
            "This is required to move forward with your matter",
            "Without this, there may be delays in progressing your case",
            "This will ensure we are acting in accordance with your wishes",
            "This step is necessary to comply with legal requirements",
        ],
    ),
    ("state_amount", &["500", "1,000", "1,500", "2,000", "2,500"]),
    (
        "describe_first_document_or_information_you_need_from_your_client",
        &[
            "Copy of your passport or driving licence",
            "Recent utility bill confirming your address",
            "Contract or agreement relating to this matter",
            "Correspondence from the other party",
            "Financial statements or accounts",
        ],
    ),
    (
        "describe_second_document_or_information_you_need_from_your_client",
        &[
            "Bank statements for the last 3 months",
            "Proof of income or employment",
            "Insurance policy documents",
            "Previous legal correspondence",
            "Property deeds or title documents",
        ],
    ),
    (
        "describe_third_document_or_information_you_need_from_your_client",
        &[
            "Details of any previous legal proceedings",
            "Contact details for relevant third parties",
            "Company registration documents (if applicable)",
            "Power of attorney (if acting for someone else)",
            "Any other relevant documentation",
        ],
    ),
];

/// Canned phrases offered by the disbursements-estimate examples multi-select.
pub const ESTIMATE_EXAMPLE_PHRASES: &[&str] = &[
    "court fees",
    "accountants report",
    "search fees",
    "Land Registry fees",
    "expert witness fees",
];

/// Preset phrases for a field; empty when the field has none.
pub fn presets_for(field: &str) -> &'static [&'static str] {
    FIELD_PRESETS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, phrases)| *phrases)
        .unwrap_or(&[])
}
