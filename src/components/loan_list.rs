use std::collections::HashMap;

use yew::prelude::*;

use crate::components::loan_card::LoanCard;
use crate::models::{Loan, LoanKind};
use crate::stores::{LedgerCollection, PendingEdit};
use crate::utils::format::format_amount;

#[derive(Properties, PartialEq)]
pub struct LoanListProps {
    pub kind: LoanKind,
    pub collection: LedgerCollection,
    pub pending: HashMap<String, PendingEdit>,
    pub on_amount: Callback<(String, String)>,
    pub on_note: Callback<(String, String)>,
    pub on_pay: Callback<String>,
    pub on_pay_with_note: Callback<String>,
    pub on_full_pay: Callback<String>,
}

#[function_component(LoanList)]
pub fn loan_list(props: &LoanListProps) -> Html {
    let collection = &props.collection;

    // Receivables read best newest-first; payables keep backend order.
    let loans: Vec<Loan> = match props.kind {
        LoanKind::Payable => collection.loans.clone(),
        LoanKind::Receivable => {
            let mut sorted = collection.loans.clone();
            sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            sorted
        }
    };

    let empty_message = match props.kind {
        LoanKind::Payable => "No payables",
        LoanKind::Receivable => "No receivables",
    };

    html! {
        <div class="loan-list">
            <div class="loan-list-header">
                <h3>{format!("{} ({})", props.kind.label(), loans.len())}</h3>
                <p class="loan-list-total">
                    {format!("Total {} tk", format_amount(collection.total))}
                </p>
            </div>

            if collection.loading && loans.is_empty() {
                <div class="loan-list-loading">
                    <div class="placeholder-card"></div>
                    <div class="placeholder-card"></div>
                </div>
            }

            if let Some(error) = &collection.error {
                <p class="loan-list-error">{format!("Error loading loans: {}", error)}</p>
            }

            <div class="loan-list-items">
                { for loans.iter().map(|loan| {
                    let pending = props
                        .pending
                        .get(&loan.transaction_id)
                        .cloned()
                        .unwrap_or_default();
                    html! {
                        <LoanCard
                            key={loan.transaction_id.clone()}
                            loan={loan.clone()}
                            kind={props.kind}
                            pending={pending}
                            on_amount={props.on_amount.clone()}
                            on_note={props.on_note.clone()}
                            on_pay={props.on_pay.clone()}
                            on_pay_with_note={props.on_pay_with_note.clone()}
                            on_full_pay={props.on_full_pay.clone()}
                        />
                    }
                }) }

                if !collection.loading && collection.error.is_none() && loans.is_empty() {
                    <p class="loan-list-empty">{empty_message}</p>
                }
            </div>
        </div>
    }
}
