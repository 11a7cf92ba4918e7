use serde_json::Value;

use crate::models::Loan;

/// Normalize the backend's list responses to one internal shape.
///
/// Known variants:
///   - a bare array of loans
///   - `{ "data": { "list": [...], "totalLoan": n } }`
///   - `{ "list": [...], "total": n }`
///
/// Anything that does not resolve to an array normalizes to an empty list,
/// and a missing aggregate defaults to 0. View code never sees the raw
/// wire shapes.
pub fn normalize_loan_list(response: &Value) -> (Vec<Loan>, f64) {
    let (list, scope) = if let Some(items) = response.as_array() {
        (Some(items), response)
    } else if let Some(data) = response.get("data").filter(|d| d.get("list").is_some()) {
        (data.get("list").and_then(Value::as_array), data)
    } else if response.get("list").is_some() {
        (response.get("list").and_then(Value::as_array), response)
    } else {
        (None, response)
    };

    let loans = match list {
        Some(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value::<Loan>(item.clone()).ok())
            .collect(),
        None => Vec::new(),
    };

    let total = scope
        .get("totalLoan")
        .or_else(|| scope.get("total"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0);

    (loans, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_loan(id: &str, amount: f64) -> Value {
        json!({
            "transactionId": id,
            "amount": amount,
            "loanGiver_Info": { "name": "Ron", "phoneNumber": "01811111111" },
            "loanTaker_Info": { "phoneNumber": "01700000000" },
            "reason": "dinner",
            "notes": [],
            "createdAt": "2025-07-28T10:53:37.216Z",
            "updatedAt": "2025-07-28T10:53:37.216Z"
        })
    }

    #[test]
    fn normalizes_bare_array() {
        let response = json!([sample_loan("tran-1", 500.0)]);
        let (loans, total) = normalize_loan_list(&response);
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0].transaction_id, "tran-1");
        assert_eq!(loans[0].amount, 500.0);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn normalizes_data_list_wrapper() {
        let response = json!({
            "message": "all loan list completed",
            "data": { "list": [sample_loan("tran-1", 120.0)], "totalLoan": 120 }
        });
        let (loans, total) = normalize_loan_list(&response);
        assert_eq!(loans.len(), 1);
        assert_eq!(total, 120.0);
    }

    #[test]
    fn normalizes_flat_list_wrapper() {
        let response = json!({
            "list": [sample_loan("tran-1", 50.0), sample_loan("tran-2", 0.0)],
            "total": 50
        });
        let (loans, total) = normalize_loan_list(&response);
        assert_eq!(loans.len(), 2);
        assert!(loans[1].is_settled());
        assert_eq!(total, 50.0);
    }

    #[test]
    fn non_list_shapes_normalize_to_empty() {
        for response in [
            json!({ "message": "nothing here" }),
            json!("oops"),
            json!(42),
            json!(null),
            json!({ "data": { "list": "not-an-array" } }),
        ] {
            let (loans, total) = normalize_loan_list(&response);
            assert!(loans.is_empty());
            assert_eq!(total, 0.0);
        }
    }

    #[test]
    fn entries_without_transaction_id_are_skipped() {
        let response = json!([sample_loan("tran-1", 10.0), { "amount": 5 }]);
        let (loans, _) = normalize_loan_list(&response);
        assert_eq!(loans.len(), 1);
    }

    #[test]
    fn optional_party_fields_survive() {
        let response = json!([{
            "transactionId": "tran-2",
            "amount": 120,
            "loanGiver_Info": { "phoneNumber": "01712269709" },
            "loanTaker_Info": { "name": "Hasib", "phoneNumber": "01915910291" },
            "reason": "kacchi",
            "notes": [],
            "createdAt": "2025-07-28T10:53:37.216Z",
            "updatedAt": "2025-07-28T10:53:37.216Z"
        }]);
        let (loans, _) = normalize_loan_list(&response);
        assert_eq!(loans[0].loan_giver_info.display(), "01712269709");
        assert_eq!(loans[0].loan_taker_info.display(), "Hasib");
    }
}
