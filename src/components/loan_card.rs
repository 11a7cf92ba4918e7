use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{Loan, LoanKind};
use crate::stores::PendingEdit;
use crate::utils::format::{format_amount, format_timestamp};
use crate::utils::validation::validate_amount;

#[derive(Properties, PartialEq)]
pub struct LoanCardProps {
    pub loan: Loan,
    pub kind: LoanKind,
    #[prop_or_default]
    pub pending: PendingEdit,
    pub on_amount: Callback<(String, String)>,
    pub on_note: Callback<(String, String)>,
    pub on_pay: Callback<String>,
    pub on_pay_with_note: Callback<String>,
    pub on_full_pay: Callback<String>,
}

#[function_component(LoanCard)]
pub fn loan_card(props: &LoanCardProps) -> Html {
    let loan = &props.loan;
    let settled = loan.is_settled();

    let counterpart = match props.kind {
        LoanKind::Payable => &loan.loan_giver_info,
        LoanKind::Receivable => &loan.loan_taker_info,
    };

    let settled_label = match props.kind {
        LoanKind::Payable => "✓ Settled",
        LoanKind::Receivable => "✓ Received",
    };

    let card_class = if settled { "loan-card settled" } else { "loan-card" };

    html! {
        <div class={card_class}>
            <div class="loan-card-header">
                <div>
                    <p class="loan-party">{counterpart.display()}</p>
                    if let Some(phone) = &counterpart.phone_number {
                        <p class="loan-party-phone">{phone}</p>
                    }
                    if settled {
                        <span class="settled-badge">{settled_label}</span>
                    }
                </div>
                <p class="loan-amount">{format!("{} tk", format_amount(loan.amount))}</p>
            </div>

            <p class="loan-reason">{format!("Reason: {}", loan.reason)}</p>
            <p class="loan-time">{format!("Taken: {}", format_timestamp(&loan.created_at))}</p>
            if loan.created_at != loan.updated_at {
                <p class="loan-time">{format!("Updated: {}", format_timestamp(&loan.updated_at))}</p>
            }

            if !loan.notes.is_empty() {
                <div class="loan-notes">
                    <p class="loan-notes-title">
                        { match props.kind {
                            LoanKind::Payable => "Payment Records",
                            LoanKind::Receivable => "Received Records",
                        } }
                    </p>
                    { for loan.notes.iter().enumerate().map(|(idx, note)| {
                        let label = note
                            .note_message
                            .clone()
                            .filter(|m| !m.is_empty())
                            .unwrap_or_else(|| format!("Payment {}", idx + 1));
                        html! {
                            <div class="loan-note">
                                <span>{label}</span>
                                <span class="loan-note-amount">{format!("{} tk", format_amount(note.amount))}</span>
                            </div>
                        }
                    }) }
                </div>
            }

            // A settled loan is terminal: no payment controls, ever.
            if props.kind == LoanKind::Payable && !settled {
                { payment_controls(props) }
            }
        </div>
    }
}

fn payment_controls(props: &LoanCardProps) -> Html {
    let loan = &props.loan;
    let pending = &props.pending;
    let transaction_id = loan.transaction_id.clone();

    let amount_error = if pending.has_amount() {
        validate_amount(&pending.amount).err()
    } else {
        None
    };
    let amount_ok = pending.has_amount() && amount_error.is_none();

    let on_amount_input = {
        let on_amount = props.on_amount.clone();
        let transaction_id = transaction_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_amount.emit((transaction_id.clone(), input.value()));
        })
    };

    let on_note_input = {
        let on_note = props.on_note.clone();
        let transaction_id = transaction_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_note.emit((transaction_id.clone(), input.value()));
        })
    };

    let pay_click = {
        let on_pay = props.on_pay.clone();
        let transaction_id = transaction_id.clone();
        Callback::from(move |_| on_pay.emit(transaction_id.clone()))
    };
    let pay_with_note_click = {
        let on_pay_with_note = props.on_pay_with_note.clone();
        let transaction_id = transaction_id.clone();
        Callback::from(move |_| on_pay_with_note.emit(transaction_id.clone()))
    };
    let full_pay_click = {
        let on_full_pay = props.on_full_pay.clone();
        let transaction_id = transaction_id.clone();
        Callback::from(move |_| on_full_pay.emit(transaction_id.clone()))
    };

    html! {
        <div class="payment-controls">
            <input
                type="text"
                inputmode="decimal"
                class="pay-amount-input"
                placeholder="Amount to pay"
                value={pending.amount.clone()}
                oninput={on_amount_input}
            />
            if let Some(error) = amount_error {
                <p class="field-error">{error}</p>
            }
            <input
                type="text"
                class="pay-note-input"
                placeholder="Note (optional)"
                value={pending.note.clone()}
                oninput={on_note_input}
            />
            <div class="payment-buttons">
                // Plain pay is only for note-less partial payments; once a
                // note is typed, the combined action takes over.
                <button
                    class="btn-pay"
                    disabled={pending.busy || !amount_ok || pending.has_note()}
                    onclick={pay_click}
                >
                    { if pending.busy { "..." } else { "Pay" } }
                </button>
                <button
                    class="btn-pay-note"
                    disabled={pending.busy || !amount_ok || !pending.has_note()}
                    onclick={pay_with_note_click}
                >
                    { if pending.busy { "..." } else { "Add note and Pay" } }
                </button>
            </div>
            <button class="btn-full-pay" disabled={pending.busy} onclick={full_pay_click}>
                { if pending.busy { "..." } else { "Full Pay" } }
            </button>
        </div>
    }
}
