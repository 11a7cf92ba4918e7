use serde::{Deserialize, Serialize};

/// One side of a loan relationship. The backend omits `name` on some
/// records, so display falls back to the phone number.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct PartyInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<String>,
}

impl PartyInfo {
    /// Preferred display label: name, otherwise phone number.
    pub fn display(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.phone_number.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Timestamped partial-payment record attached to a loan.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoanNote {
    #[serde(rename = "noteMessage", default)]
    pub note_message: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub time: Option<String>,
}

/// A loan as the backend reports it.
///
/// `amount` is the CURRENT OUTSTANDING balance, not the original principal,
/// and counts down toward zero as payments land. `amount == 0` is the sole
/// settled signal; there is no status field the UI trusts.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Loan {
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "loanGiver_Info", default)]
    pub loan_giver_info: PartyInfo,
    #[serde(rename = "loanTaker_Info", default)]
    pub loan_taker_info: PartyInfo,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub notes: Vec<LoanNote>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

impl Loan {
    pub fn is_settled(&self) -> bool {
        self.amount == 0.0
    }
}

/// Which side of the ledger a collection represents.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LoanKind {
    /// Loans the current user owes.
    Payable,
    /// Loans owed to the current user.
    Receivable,
}

impl LoanKind {
    pub fn label(&self) -> &'static str {
        match self {
            LoanKind::Payable => "My Payables",
            LoanKind::Receivable => "Receivables",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateLoanRequest {
    pub amount: f64,
    #[serde(rename = "loanTakerPhoneNumber")]
    pub loan_taker_phone_number: String,
    #[serde(rename = "loanGiverName")]
    pub loan_giver_name: String,
    #[serde(rename = "loanGiverPhoneNumber")]
    pub loan_giver_phone_number: String,
    pub reason: String,
}

/// PATCH body for `/payable/update-loan/{transactionId}`. `fullPay` travels
/// as a query flag, not in the body.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UpdateLoanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
