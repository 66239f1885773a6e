//! Payment model

use serde::{Deserialize, Serialize};

use super::{Entity, PaymentMethod, PaymentStatus};
use crate::storage::Record;

/// A tuition payment received from a student
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub id: i64,
    pub date: String,
    pub student_id: i64,
    /// Whole currency units
    pub amount: u64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub memo: String,
}

impl Record for Payment {
    const PATH: &'static str = "data/payments.json";
    const PROPERTY: &'static str = "payments";
    const LABEL: &'static str = "payment";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Entity for Payment {
    fn invalid_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.date.trim().is_empty() {
            missing.push("date");
        }
        if self.student_id == 0 {
            missing.push("studentId");
        }
        if self.amount == 0 {
            missing.push("amount");
        }
        if !self.method.as_str().is_empty() && !self.method.is_known() {
            missing.push("method");
        }
        if !self.status.as_str().is_empty() && !self.status.is_known() {
            missing.push("status");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_amount_is_rejected() {
        let json = r#"{"id": 1, "date": "2024-01-05", "studentId": 1, "amount": -100}"#;
        assert!(serde_json::from_str::<Payment>(json).is_err());
    }

    #[test]
    fn test_invalid_fields() {
        let payment = Payment {
            date: "2024-01-05".to_string(),
            ..Default::default()
        };
        assert_eq!(payment.invalid_fields(), vec!["studentId", "amount"]);

        let payment = Payment {
            date: "2024-01-05".to_string(),
            student_id: 1,
            amount: 100_000,
            method: PaymentMethod::Card,
            status: PaymentStatus::from_label("환불"),
            ..Default::default()
        };
        assert_eq!(payment.invalid_fields(), vec!["status"]);
    }
}
