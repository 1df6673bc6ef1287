//! Default letter template and session-start prefill
//!
//! The engagement-letter template is a plain string constant carrying
//! `{{name}}` placeholders, three compound section tokens, em-dash bullet
//! lists and the action-point checkbox table. The engine owns no file format
//! for it; callers may supply their own template string instead.

use crate::ccl::fields::{FieldError, FieldStore};

/// The standard client-care engagement letter.
pub const DEFAULT_CCL_TEMPLATE: &str = r#"Dear {{insert_clients_name}}

{{insert_heading_eg_matter_description}}

Thank you for your instructions to act on your behalf in connection with {{matter}}. This Engagement Letter and the attached Terms of Business explain the basis on which we will be acting for you—together they form the contract between us.

Please contact me if you have any difficulty understanding this Engagement Letter or other information we may provide, eg if anything in this letter is unclear or you require information to be provided in larger text, another format or a different language.

1 Contact details and supervision

The person dealing with your matter is {{name_of_person_handling_matter}}, who is a {{status}}. Their contact details are:

Telephone number: {{fee_earner_phone}}
Email address: {{fee_earner_email}}
Postal address: {{fee_earner_postal_address}}

The best way to contact {{name_of_handler}} is {{email}}.

If {{handler}} is not available, the following members of staff may be able to deal with any queries you have:

{{names_and_contact_details_of_other_members_of_staff_who_can_help_with_queries}}

The person with overall responsibility for supervising your matter is {{name}}, who is a Partner.

2 Scope of services

{{insert_current_position_and_scope_of_retainer}} ("Initial Scope")

We will provide legal advice and services to you with reasonable care and skill. However, the nature of many types of legal work means that it is not possible to guarantee a particular outcome.

Our Terms of Business sets out general limitations on the scope of our services. Your matter may involve issues for which you need tax advice. We cannot and do not give advice on taxation and you should seek the advice of a suitably qualified tax expert. Where your case needs expert evidence then you will need to identify, with us, a suitably qualified expert to give an opinion. Any expert fees will be your responsibility.

3 Next steps

The next steps in your matter are {{next_steps}}.

We expect this will take {{realistic_timescale}}. This is an estimate only. We will tell you if it is necessary to revise this timescale.

4 Legal costs

There are three main elements to the legal costs of any matter:

—our charges (see section 4.1 below);

—expenses we must pay on your behalf—sometimes called disbursements (see section 4.2 below);

—costs that you may have to pay another party (see section 4.3 below).

4.1 Our charges

{{charges_section_choice}}

4.2 Disbursements (expenses)

Disbursements are expenses we must pay on your behalf.

{{disbursements_section_choice}}

4.3 Costs you may have to pay another party

{{costs_section_choice}}

5 Funding and billing

You are responsible for the legal costs set out in this Engagement Letter.

Unless agreed otherwise, our interim bills are detailed bills and are final in respect of the period to which they relate, save that disbursements may be billed separately and later than the interim bill for our charges in respect of the same period. We will send you a final bill at the end of your matter which will cover our charges from the date of the last interim bill and any unbilled disbursements. You have the right to challenge any interim bill or the final bill by applying to the court to assess the bill under the Solicitors Act 1974. The usual time limit for applying to the court for an assessment is one month from the date of delivery of the interim or final bill. Please be aware that the time limit runs from the date of each individual bill.

Invoices are due forthwith with interest payable from 14 days after the date of the invoice.

6 Payment on account of costs

Please provide us with £{{figure}} on account of costs. Our account is:

Helix Law General Client Account, Barclays Bank, Eastbourne, 20-27-91 93472434

Please use the reference {{matter_number}}

We work with money on account at all times, unless otherwise agreed in writing. This means that you should pay any invoice in full immediately, even if we hold money on account. If you fail pay an invoice when due, fail to maintain a reasonable sum on account of costs and/or disbursements we may, at our discretion, suspend work. We may terminate the retainer if the invoice is more than 14 days overdue. We may also terminate the retainer if you refuse, neglect or are unable to pay a reasonable sum on account of costs and/or disbursements within a reasonable time of it being requested. For urgent matters or necessary steps that require immediate action that reasonable time may be measured in hours.

7 Costs updates

We have agreed to provide you with an update on the amount of costs when appropriate as the matter progresses{{and_or_intervals_eg_every_three_months}}.

8 Risk analysis

We have discussed whether the potential outcome of your matter justifies the expense and risk involved. Our preliminary assessment is that it does.

9 Limitation

Each cause of action has a strict time limit after which you cannot bring a claim. Contract claims could be 6 years from the date the sums claimed/damages fell due/accrued.

If there is some fact that I have not been given or you disagree with my view on the limitation period then please let me know at once.

10 Data protection

We take your privacy very seriously. Our Privacy policy contains important information on how and why we collect, process and store your personal data. It also explains your rights in relation to your personal data. The Privacy policy is available on our website at Helix Law Privacy Policy, but please contact us if you would like us to send a copy to you or if you would prefer us to explain our Privacy policy verbally.

We use outside counsel, experts, software providers and an external file auditors so your confidential information will be shared with them. Each will be bound to confidentiality by the particular contract with us and/or their professional obligations to you and to us.

11 Marketing

We may use your personal data to send you updates (by email, text, telephone or post) about legal developments that might be of interest to you and/or information about our services, including exclusive offers, promotions or new services. You have the right to opt out of receiving promotional communications at any time, by:

—contacting us at {{contact_details_for_marketing_opt_out}};

—using the 'unsubscribe' link in emails or 'STOP' number in texts;

—updating your marketing preferences on our {{link_to_preference_centre}}.

12 Prevention of money laundering, terrorist financing and proliferation financing

We are required by law to obtain satisfactory evidence of the identity of our clients and also sometimes people related to them. This includes where monies are received from third parties on your behalf. This is because solicitors deal with money and property on behalf of clients and criminals can at times therefore attempt to use our services and accounts in an attempt to launder money. We therefore need to obtain and retain evidence of your identity. Most Solicitor firms request that their clients provide evidence of their identity themselves. However, we recognise that this can be time consuming and we therefore obtain confirmation of your identity using a search service, at our cost. Please note that if you do not wish us to verify your identity electronically you must bring this to our immediate attention. The electronic search process does leave an electronic 'footprint' each time a search is conducted. Footprints detail the date, time and reason for a search and certain types of search footprints are used in credit scoring systems and may have a detrimental impact on a consumer's ability to obtain credit.

Unfortunately if the report is unsuccessful i.e. if you have only recently moved address, we may need to ask you to send in certain documents for our records, such as a recent utility bill confirming your address, and photographic identity documents such as a passport or driving licence. If this is necessary the identity documents should be provided by you, as our client or, where our client is a limited company, by a Director of the company. If you wish to provide us with authority to discuss your matter with any third party we must have your authority confirmed in writing. Please contact me if you have any queries regarding this.

13 Duties to the court

Your matter {{may_will}} involve court proceedings. All solicitors have a professional duty to uphold the rule of law and the proper administration of justice. We must comply with our duties to the court, even where this conflicts with our obligations to you. This means that we must not:

—attempt to deceive or knowingly or recklessly mislead the court

—be complicit in another person deceiving or misleading the court

—place ourselves in contempt of court

—make or offer payments to witnesses who depend on their evidence or the outcome of the case

We must also comply with court orders that put obligations on us and ensure that evidence relating to sensitive issues is not misused.

The court gives orders and there are strict times for complying with those orders. If the orders aren't followed in time then it may result in your case being struck out and an order for costs being made against you. It is your responsibility to reply quickly to any request for information, documents and instructions we may make of you. If you leave it to the last minute we cannot guarantee that you will be able to complete our work in time as we may have other matters and court proceedings that prevent us meeting your deadline.

In all litigation and disputes all parties have a duty to preserve evidence that is relevant to the dispute, including physical and electronic records and documents which either help your case and also includes those which are against you. This duty is important not least as if documents are deleted or destroyed that are relevant to the dispute our advice to you may be compromised. Further if documents are destroyed the court will be entitled to assume the absolute worst in terms of their content. This is likely to be extremely unhelpful to your case. Please contact me if you have any queries regarding this.

14 Complaints

We want to give you the best possible service. However, if at any point you become unhappy or concerned about the service we have provided you should inform us immediately so we can do our best to resolve the problem.

In the first instance it may be helpful to contact the person who is working on your case to discuss your concerns and we will do our best to resolve any issues. If you would like to make a formal complaint, you can read our full complaints procedure here. Making a complaint will not affect how we handle your matter.

You may have a right to complain to the Legal Ombudsman. The time frame for doing so and full details of how to contact the Legal Ombudsman are in our Terms of Business.

15 Limit on liability

Our maximum liability to you (or any other party we have agreed may rely on our services) in relation to any single matter or any group of connected matters which may be aggregated by our insurers will be £3,000,000, including interest and costs. This limit overrides any limit stated in our Terms of Business.

If you wish to discuss a variation of this limit, please contact the person dealing with your matter. Agreeing a higher limit on our liability may result in us seeking an increase in our charges for handling your matter.

Please see our Terms of Business for an explanation of other limits on our liability to you.

16 Referral and fee sharing arrangement

{{explain_the_nature_of_your_arrangement_with_any_introducer_for_link_to_sample_wording_see_drafting_note_referral_and_fee_sharing_arrangement}}

17 Right to cancel

You have the right to cancel this contract within 14 days without giving any reason. We will not start work during the cancellation period unless you expressly ask us to. The 'Instructions for Cancellation' notice at {{instructions_link}} explains:
— how to cancel and the effect of cancellation;
— what you will be liable for if you ask us to start work during the cancellation period.

18 Action points

The action list below explains what you need to do next.

Action required by you | Additional information
☐ Sign and return one copy of the Terms of Business below | If you don't sign but continue to give us instructions you will be deemed to have accepted the terms in this letter and the Terms of Business
☐ {{insert_next_step_you_would_like_client_to_take}} | {{state_why_this_step_is_important}}
☐ Provide a payment on account of costs and disbursements of £{{state_amount}} | If we do not receive a payment on account of costs and disbursements, {{insert_consequence}}
☐ If you would like us to start work during the 14-day cancellation period, sign and return the attached 'Request to start work during the cancellation period' form | This form is attached to this Engagement Letter
☐ Alternatively, if you wish to cancel your contract with us, tell us within 14 days | You can simply inform us of your decision to cancel by letter, telephone or e-mail
☐ Provide the following documents (and information) to allow me to take the next steps in your matter: | Without these documents there may be a delay in your matter

{{describe_first_document_or_information_you_need_from_your_client}}
{{describe_second_document_or_information_you_need_from_your_client}}
{{describe_third_document_or_information_you_need_from_your_client}}

Please contact me if you have any queries or concerns about your matter, this Engagement Letter or the attached Terms of Business."#;

/// Prefill record supplied once at session start, before any user edit.
///
/// Applied through [`FieldStore::prefill`] only, so it can never overwrite a
/// user edit and never marks fields touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefill {
    pub client_name: Option<String>,
    pub matter_title: Option<String>,
    pub matter_description: Option<String>,
    pub handler_name: Option<String>,
    pub handler_status: Option<String>,
}

impl Prefill {
    /// Seed the store from the record. The heading is derived from the matter
    /// title ("RE: ...") the way the drafting screen initializes a new draft.
    pub fn apply(&self, store: &mut FieldStore) -> Result<(), FieldError> {
        if let Some(client_name) = &self.client_name {
            store.prefill("insert_clients_name", client_name.clone())?;
        }
        if let Some(title) = &self.matter_title {
            store.prefill("matter", title.clone())?;
            store.prefill(
                "insert_heading_eg_matter_description",
                format!("RE: {}", title),
            )?;
        }
        if let Some(description) = &self.matter_description {
            store.prefill("insert_current_position_and_scope_of_retainer", description.clone())?;
        }
        if let Some(handler_name) = &self.handler_name {
            store.prefill("name_of_person_handling_matter", handler_name.clone())?;
        }
        if let Some(handler_status) = &self.handler_status {
            store.prefill("status", handler_status.clone())?;
        }
        Ok(())
    }
}
