// ============================================================================
// LEDGER SYNCHRONIZER - two server-backed collections + pending edits
// ============================================================================
// Payables and receivables are fetched independently per phone number and
// are only eventually consistent with each other: every mutation invalidates
// BOTH (a payment on one side changes the counterpart view) instead of
// patching state locally. Out-of-order responses are discarded through a
// per-collection fetch sequence.
//
// Collections and pending edits live in RefCells, with a version state that
// only triggers re-renders (same pattern as use_toasts). Async continuations
// therefore mutate CURRENT state: a payment resolving on one loan cannot
// clobber input typed on another loan, or a busy flag set, while it was in
// flight.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_toasts::ToastKind;
use crate::models::{CreateLoanRequest, LoanKind, UserInfo};
use crate::services::{loan_service, ApiClient};
use crate::stores::{FetchSeq, LedgerCollection, PendingEdit};

/// Create-loan form values, already validated by the form component.
/// `on_created` fires only on success so the form can clear itself; on
/// failure the inputs stay as typed.
#[derive(Clone, PartialEq)]
pub struct NewLoanInput {
    pub amount: f64,
    pub loan_giver_name: String,
    pub loan_giver_phone_number: String,
    pub reason: String,
    pub on_created: Callback<()>,
}

pub struct UseLoansHandle {
    pub payables: LedgerCollection,
    pub receivables: LedgerCollection,
    pub pending: HashMap<String, PendingEdit>,
    pub creating: bool,
    pub refresh_all: Callback<()>,
    pub create_loan: Callback<NewLoanInput>,
    /// Partial payment, amount only.
    pub pay: Callback<String>,
    /// Partial payment, amount + note.
    pub pay_with_note: Callback<String>,
    /// Full settlement of the loan's current outstanding amount.
    pub full_pay: Callback<String>,
    pub set_pending_amount: Callback<(String, String)>,
    pub set_pending_note: Callback<(String, String)>,
}

fn spawn_fetch(
    kind: LoanKind,
    client: ApiClient,
    phone: String,
    state: Rc<RefCell<LedgerCollection>>,
    seq: Rc<RefCell<FetchSeq>>,
    version: UseStateHandle<u32>,
) {
    let my_seq = seq.borrow_mut().next();

    state.borrow_mut().loading = true;
    version.set(*version + 1);

    wasm_bindgen_futures::spawn_local(async move {
        let result = match kind {
            LoanKind::Payable => client.loan_list(&phone).await,
            LoanKind::Receivable => client.receivable_list(&phone).await,
        };

        if !seq.borrow_mut().try_apply(my_seq) {
            log::info!("⏭️ Discarding stale {:?} response (seq {})", kind, my_seq);
            return;
        }

        match result {
            Ok(value) => {
                let (loans, total) = loan_service::normalize_loan_list(&value);
                log::info!("📥 {:?}: {} loans, total {}", kind, loans.len(), total);
                *state.borrow_mut() = LedgerCollection {
                    loans,
                    total,
                    loading: false,
                    error: None,
                };
            }
            Err(e) => {
                log::error!("❌ Fetch {:?} failed: {}", kind, e);
                // Keep whatever list we had; worst case is a stale view.
                let mut current = state.borrow_mut();
                current.loading = false;
                current.error = Some(e);
            }
        }
        version.set(*version + 1);
    });
}

#[hook]
pub fn use_loans(user: UserInfo, token: String, on_toast: Callback<(ToastKind, String)>) -> UseLoansHandle {
    let payables = use_mut_ref(LedgerCollection::default);
    let receivables = use_mut_ref(LedgerCollection::default);
    let pending = use_mut_ref(HashMap::<String, PendingEdit>::new);
    let creating = use_state(|| false);
    let version = use_state(|| 0u32);

    let payable_seq = use_mut_ref(FetchSeq::default);
    let receivable_seq = use_mut_ref(FetchSeq::default);

    let client = ApiClient::new(Some(token));
    let phone = user.phone_number.clone();

    let refresh_all = {
        let client = client.clone();
        let phone = phone.clone();
        let payables = payables.clone();
        let receivables = receivables.clone();
        let payable_seq = payable_seq.clone();
        let receivable_seq = receivable_seq.clone();
        let version = version.clone();
        Callback::from(move |_| {
            spawn_fetch(
                LoanKind::Payable,
                client.clone(),
                phone.clone(),
                payables.clone(),
                payable_seq.clone(),
                version.clone(),
            );
            spawn_fetch(
                LoanKind::Receivable,
                client.clone(),
                phone.clone(),
                receivables.clone(),
                receivable_seq.clone(),
                version.clone(),
            );
        })
    };

    // Initial load, re-run if the identity ever changes.
    {
        let refresh_all = refresh_all.clone();
        use_effect_with(phone.clone(), move |_| {
            refresh_all.emit(());
            || ()
        });
    }

    let create_loan = {
        let client = client.clone();
        let phone = phone.clone();
        let creating = creating.clone();
        let refresh_all = refresh_all.clone();
        let on_toast = on_toast.clone();
        Callback::from(move |input: NewLoanInput| {
            if *creating {
                return;
            }
            let request = CreateLoanRequest {
                amount: input.amount,
                loan_taker_phone_number: phone.clone(),
                loan_giver_name: input.loan_giver_name,
                loan_giver_phone_number: input.loan_giver_phone_number,
                reason: input.reason,
            };

            let client = client.clone();
            let creating = creating.clone();
            let refresh_all = refresh_all.clone();
            let on_toast = on_toast.clone();
            creating.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match client.create_loan(&request).await {
                    Ok(_) => {
                        log::info!("✅ Loan created");
                        input.on_created.emit(());
                        on_toast.emit((ToastKind::Success, "Loan created successfully!".to_string()));
                        refresh_all.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Create loan failed: {}", e);
                        on_toast.emit((
                            ToastKind::Error,
                            "Failed to create loan. Please try again.".to_string(),
                        ));
                    }
                }
                creating.set(false);
            });
        })
    };

    // Shared machinery for the three payment modes.
    let make_payment = {
        let client = client.clone();
        let pending = pending.clone();
        let payables = payables.clone();
        let refresh_all = refresh_all.clone();
        let on_toast = on_toast.clone();
        let version = version.clone();

        move |with_note: bool, full_pay: bool| {
            let client = client.clone();
            let pending = pending.clone();
            let payables = payables.clone();
            let refresh_all = refresh_all.clone();
            let on_toast = on_toast.clone();
            let version = version.clone();

            Callback::from(move |transaction_id: String| {
                let edit = pending
                    .borrow()
                    .get(&transaction_id)
                    .cloned()
                    .unwrap_or_default();
                let loan = payables
                    .borrow()
                    .loans
                    .iter()
                    .find(|l| l.transaction_id == transaction_id)
                    .cloned();
                let Some(loan) = loan else {
                    return;
                };
                // resolve_payment also carries the re-entrancy guard (busy)
                // and the settled-is-terminal refusal.
                let Some(request) = edit.resolve_payment(&loan, with_note, full_pay) else {
                    return;
                };

                pending
                    .borrow_mut()
                    .entry(transaction_id.clone())
                    .or_default()
                    .busy = true;
                version.set(*version + 1);

                let client = client.clone();
                let pending = pending.clone();
                let refresh_all = refresh_all.clone();
                let on_toast = on_toast.clone();
                let version = version.clone();

                wasm_bindgen_futures::spawn_local(async move {
                    match client.update_loan(&transaction_id, &request, full_pay).await {
                        Ok(_) => {
                            log::info!("✅ Payment applied on {}", transaction_id);
                            // Success discards only THIS transaction's edit.
                            pending.borrow_mut().remove(&transaction_id);

                            let message = if full_pay {
                                "Loan paid in full!"
                            } else if request.note.is_some() {
                                "Note added and payment made successfully!"
                            } else {
                                "Payment made successfully!"
                            };
                            on_toast.emit((ToastKind::Success, message.to_string()));
                            refresh_all.emit(());
                        }
                        Err(e) => {
                            log::error!("❌ Payment failed on {}: {}", transaction_id, e);
                            // Failure only drops the busy flag; the typed
                            // values stay for a retry.
                            if let Some(edit) = pending.borrow_mut().get_mut(&transaction_id) {
                                edit.busy = false;
                            }
                            on_toast.emit((
                                ToastKind::Error,
                                "Failed to make payment. Please try again.".to_string(),
                            ));
                        }
                    }
                    version.set(*version + 1);
                });
            })
        }
    };

    let pay = make_payment(false, false);
    let pay_with_note = make_payment(true, false);
    let full_pay = make_payment(false, true);

    let set_pending_amount = {
        let pending = pending.clone();
        let version = version.clone();
        Callback::from(move |(transaction_id, amount): (String, String)| {
            pending.borrow_mut().entry(transaction_id).or_default().amount = amount;
            version.set(*version + 1);
        })
    };

    let set_pending_note = {
        let pending = pending.clone();
        let version = version.clone();
        Callback::from(move |(transaction_id, note): (String, String)| {
            pending.borrow_mut().entry(transaction_id).or_default().note = note;
            version.set(*version + 1);
        })
    };

    let handle = UseLoansHandle {
        payables: payables.borrow().clone(),
        receivables: receivables.borrow().clone(),
        pending: pending.borrow().clone(),
        creating: *creating,
        refresh_all,
        create_loan,
        pay,
        pay_with_note,
        full_pay,
        set_pending_amount,
        set_pending_note,
    };
    handle
}
