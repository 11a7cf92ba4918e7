use std::collections::HashMap;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::loan_list::LoanList;
use crate::hooks::{use_loans, NewLoanInput, ToastKind};
use crate::models::{LoanKind, UserInfo};
use crate::utils::validation::{validate_amount, validate_phone, validate_required};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub user: UserInfo,
    pub token: String,
    pub on_logout: Callback<()>,
    pub on_toast: Callback<(ToastKind, String)>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let loans = use_loans(props.user.clone(), props.token.clone(), props.on_toast.clone());

    let amount_ref = use_node_ref();
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let reason_ref = use_node_ref();
    let form_errors = use_state(HashMap::<&'static str, String>::new);

    let on_submit = {
        let amount_ref = amount_ref.clone();
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let reason_ref = reason_ref.clone();
        let form_errors = form_errors.clone();
        let create_loan = loans.create_loan.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(amount_input), Some(name_input), Some(phone_input), Some(reason_input)) = (
                amount_ref.cast::<HtmlInputElement>(),
                name_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
                reason_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let mut errors = HashMap::new();
            let amount = match validate_amount(&amount_input.value()) {
                Ok(v) => Some(v),
                Err(e) => {
                    errors.insert("amount", e);
                    None
                }
            };
            if let Err(e) = validate_required(&name_input.value(), "Name") {
                errors.insert("name", e);
            }
            if let Err(e) = validate_phone(&phone_input.value()) {
                errors.insert("phone", e);
            }
            if let Err(e) = validate_required(&reason_input.value(), "Reason") {
                errors.insert("reason", e);
            }

            let blocked = !errors.is_empty();
            form_errors.set(errors);
            if blocked {
                return;
            }

            // Inputs only clear on a confirmed create; a failed round trip
            // keeps them for the retry.
            let on_created = {
                let amount_input = amount_input.clone();
                let name_input = name_input.clone();
                let phone_input = phone_input.clone();
                let reason_input = reason_input.clone();
                Callback::from(move |_| {
                    amount_input.set_value("");
                    name_input.set_value("");
                    phone_input.set_value("");
                    reason_input.set_value("");
                })
            };

            create_loan.emit(NewLoanInput {
                amount: amount.unwrap_or_default(),
                loan_giver_name: name_input.value().trim().to_string(),
                loan_giver_phone_number: phone_input.value().trim().to_string(),
                reason: reason_input.value().trim().to_string(),
                on_created,
            });
        })
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    let field_error = |field: &str| -> Html {
        match form_errors.get(field) {
            Some(error) => html! { <p class="field-error">{error}</p> },
            None => html! {},
        }
    };

    html! {
        <div class="home-page">
            <header class="home-header">
                <div>
                    <h1>{"Loan Tracker"}</h1>
                    <p>{format!("Welcome {} ({})", props.user.name, props.user.phone_number)}</p>
                </div>
                <button class="btn-logout" onclick={on_logout_click}>{"Log out"}</button>
            </header>

            <div class="home-grid">
                <section class="create-loan">
                    <h2>{"Create New Loan"}</h2>
                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="loan-amount">{"Amount *"}</label>
                            <input
                                type="text"
                                inputmode="decimal"
                                id="loan-amount"
                                placeholder="0.00"
                                ref={amount_ref}
                            />
                            { field_error("amount") }
                        </div>
                        <div class="form-group">
                            <label for="giver-name">{"Borrower's Name *"}</label>
                            <input
                                type="text"
                                id="giver-name"
                                placeholder="Full name"
                                ref={name_ref}
                            />
                            { field_error("name") }
                        </div>
                        <div class="form-group">
                            <label for="giver-phone">{"Borrower's Phone *"}</label>
                            <input
                                type="tel"
                                id="giver-phone"
                                placeholder="Phone number"
                                ref={phone_ref}
                            />
                            { field_error("phone") }
                        </div>
                        <div class="form-group">
                            <label for="loan-reason">{"Reason *"}</label>
                            <input
                                type="text"
                                id="loan-reason"
                                placeholder="Loan purpose"
                                ref={reason_ref}
                            />
                            { field_error("reason") }
                        </div>
                        <button type="submit" class="btn-create" disabled={loans.creating}>
                            { if loans.creating { "Creating..." } else { "Create Loan" } }
                        </button>
                    </form>
                </section>

                <LoanList
                    kind={LoanKind::Payable}
                    collection={loans.payables.clone()}
                    pending={loans.pending.clone()}
                    on_amount={loans.set_pending_amount.clone()}
                    on_note={loans.set_pending_note.clone()}
                    on_pay={loans.pay.clone()}
                    on_pay_with_note={loans.pay_with_note.clone()}
                    on_full_pay={loans.full_pay.clone()}
                />

                <LoanList
                    kind={LoanKind::Receivable}
                    collection={loans.receivables.clone()}
                    pending={loans.pending.clone()}
                    on_amount={loans.set_pending_amount.clone()}
                    on_note={loans.set_pending_note.clone()}
                    on_pay={loans.pay.clone()}
                    on_pay_with_note={loans.pay_with_note.clone()}
                    on_full_pay={loans.full_pay.clone()}
                />
            </div>
        </div>
    }
}
