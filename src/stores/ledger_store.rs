// ============================================================================
// LEDGER STORE - view state for the two loan collections
// ============================================================================

use crate::models::{Loan, UpdateLoanRequest};

/// One phone-number-scoped collection (payables or receivables) as the view
/// sees it. Collections are replaced wholesale by invalidation-triggered
/// re-fetches, never patched locally.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LedgerCollection {
    pub loans: Vec<Loan>,
    pub total: f64,
    pub loading: bool,
    pub error: Option<String>,
}

/// Ephemeral per-transaction edit state: candidate payment amount, optional
/// note, and the re-entrancy guard for that transaction. Discarded on a
/// successful mutation, preserved on failure so the user can retry.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PendingEdit {
    pub amount: String,
    pub note: String,
    pub busy: bool,
}

impl PendingEdit {
    pub fn has_amount(&self) -> bool {
        !self.amount.trim().is_empty()
    }

    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }

    /// Resolve this edit into the PATCH body for one of the three mutually
    /// exclusive payment modes, or None when the submission is not allowed:
    ///
    /// - plain pay: a valid pending amount and NO note typed
    /// - pay with note: a valid pending amount AND a note
    /// - full pay: always the loan's entire current outstanding amount,
    ///   whatever the pending input says; note included only if typed
    ///
    /// A busy transaction (mutation already in flight) and a settled loan
    /// (`amount == 0` is terminal) refuse every mode.
    pub fn resolve_payment(
        &self,
        loan: &Loan,
        with_note: bool,
        full_pay: bool,
    ) -> Option<UpdateLoanRequest> {
        if self.busy || loan.is_settled() {
            return None;
        }

        let note = if (with_note || full_pay) && self.has_note() {
            Some(self.note.trim().to_string())
        } else {
            None
        };

        let amount = if full_pay {
            loan.amount
        } else {
            let parsed = crate::utils::validation::validate_amount(&self.amount).ok()?;
            if with_note {
                if !self.has_note() {
                    return None;
                }
            } else if self.has_note() {
                // Once a note is typed, only the combined action applies.
                return None;
            }
            parsed
        };

        Some(UpdateLoanRequest {
            amount: Some(amount),
            note,
        })
    }
}

/// Monotonic fetch-sequence guard for one collection. Two mutations on
/// different loans can race their re-fetches; a response carrying a sequence
/// older than the last applied one is discarded instead of overwriting the
/// cache with stale data.
#[derive(Debug, Default)]
pub struct FetchSeq {
    issued: u64,
    applied: u64,
}

impl FetchSeq {
    /// Reserve the sequence number for a fetch about to be issued.
    pub fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Attempt to apply a resolved fetch. Returns false when a newer
    /// response already landed.
    pub fn try_apply(&mut self, seq: u64) -> bool {
        if seq <= self.applied {
            return false;
        }
        self.applied = seq;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_order_responses_apply() {
        let mut seq = FetchSeq::default();
        let a = seq.next();
        let b = seq.next();
        assert!(seq.try_apply(a));
        assert!(seq.try_apply(b));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut seq = FetchSeq::default();
        let first = seq.next();
        let second = seq.next();
        // second resolves before first
        assert!(seq.try_apply(second));
        assert!(!seq.try_apply(first));
    }

    #[test]
    fn duplicate_apply_is_rejected() {
        let mut seq = FetchSeq::default();
        let only = seq.next();
        assert!(seq.try_apply(only));
        assert!(!seq.try_apply(only));
    }

    fn loan_owing(amount: f64) -> Loan {
        Loan {
            transaction_id: "tran-1".to_string(),
            amount,
            loan_giver_info: Default::default(),
            loan_taker_info: Default::default(),
            reason: "dinner".to_string(),
            notes: Vec::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn full_pay_submits_full_outstanding_amount() {
        let loan = loan_owing(500.0);
        // A non-empty pending amount must not leak into a full settlement.
        let edit = PendingEdit {
            amount: "123".to_string(),
            ..Default::default()
        };
        let request = edit.resolve_payment(&loan, false, true).unwrap();
        assert_eq!(request.amount, Some(500.0));
        assert_eq!(request.note, None);
    }

    #[test]
    fn full_pay_carries_a_typed_note() {
        let loan = loan_owing(500.0);
        let edit = PendingEdit {
            note: " last one ".to_string(),
            ..Default::default()
        };
        let request = edit.resolve_payment(&loan, false, true).unwrap();
        assert_eq!(request.amount, Some(500.0));
        assert_eq!(request.note, Some("last one".to_string()));
    }

    #[test]
    fn plain_pay_needs_amount_and_no_note() {
        let loan = loan_owing(500.0);

        let valid = PendingEdit {
            amount: "120".to_string(),
            ..Default::default()
        };
        let request = valid.resolve_payment(&loan, false, false).unwrap();
        assert_eq!(request.amount, Some(120.0));
        assert_eq!(request.note, None);

        // note typed -> plain pay no longer applies
        let with_note = PendingEdit {
            amount: "120".to_string(),
            note: "part one".to_string(),
            ..Default::default()
        };
        assert_eq!(with_note.resolve_payment(&loan, false, false), None);

        // no amount, or an unparseable one
        let empty = PendingEdit::default();
        assert_eq!(empty.resolve_payment(&loan, false, false), None);
        let bad = PendingEdit {
            amount: "12a".to_string(),
            ..Default::default()
        };
        assert_eq!(bad.resolve_payment(&loan, false, false), None);
    }

    #[test]
    fn pay_with_note_needs_both_fields() {
        let loan = loan_owing(500.0);

        let both = PendingEdit {
            amount: "120".to_string(),
            note: "part one".to_string(),
            ..Default::default()
        };
        let request = both.resolve_payment(&loan, true, false).unwrap();
        assert_eq!(request.amount, Some(120.0));
        assert_eq!(request.note, Some("part one".to_string()));

        let missing_note = PendingEdit {
            amount: "120".to_string(),
            ..Default::default()
        };
        assert_eq!(missing_note.resolve_payment(&loan, true, false), None);
    }

    #[test]
    fn settled_loan_refuses_every_mode() {
        let settled = loan_owing(0.0);
        let edit = PendingEdit {
            amount: "50".to_string(),
            note: "again".to_string(),
            ..Default::default()
        };
        assert_eq!(edit.resolve_payment(&settled, false, false), None);
        assert_eq!(edit.resolve_payment(&settled, true, false), None);
        assert_eq!(edit.resolve_payment(&settled, false, true), None);
    }

    #[test]
    fn busy_transaction_refuses_every_mode() {
        let loan = loan_owing(500.0);
        let edit = PendingEdit {
            amount: "50".to_string(),
            note: "racing".to_string(),
            busy: true,
        };
        assert_eq!(edit.resolve_payment(&loan, false, false), None);
        assert_eq!(edit.resolve_payment(&loan, true, false), None);
        assert_eq!(edit.resolve_payment(&loan, false, true), None);
    }

    #[test]
    fn pending_edit_flags() {
        let mut edit = PendingEdit::default();
        assert!(!edit.has_amount());
        assert!(!edit.has_note());
        edit.amount = " 500 ".to_string();
        edit.note = "part one".to_string();
        assert!(edit.has_amount());
        assert!(edit.has_note());
    }
}
