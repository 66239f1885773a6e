//! Display-name resolution for foreign keys
//!
//! Ids are never checked against the referenced documents, so a lookup can
//! miss; it then yields [`UNKNOWN_LABEL`] instead of failing.

use serde::Serialize;

use crate::models::{ClassSession, Payment, Student, Teacher};

/// Shown in place of a name that could not be resolved
pub const UNKNOWN_LABEL: &str = "알 수 없음";

pub fn student_name(students: &[Student], id: i64) -> &str {
    students
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.name.as_str())
        .unwrap_or(UNKNOWN_LABEL)
}

pub fn teacher_name(teachers: &[Teacher], id: i64) -> &str {
    teachers
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.name.as_str())
        .unwrap_or(UNKNOWN_LABEL)
}

/// A class session with its participants' names
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassView {
    #[serde(flatten)]
    pub class: ClassSession,
    pub student_name: String,
    pub teacher_name: String,
}

impl ClassView {
    pub fn new(class: ClassSession, students: &[Student], teachers: &[Teacher]) -> Self {
        Self {
            student_name: student_name(students, class.student_id).to_string(),
            teacher_name: teacher_name(teachers, class.teacher_id).to_string(),
            class,
        }
    }
}

/// A payment with the paying student's name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentView {
    #[serde(flatten)]
    pub payment: Payment,
    pub student_name: String,
}

impl PaymentView {
    pub fn new(payment: Payment, students: &[Student]) -> Self {
        Self {
            student_name: student_name(students, payment.student_id).to_string(),
            payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn students() -> Vec<Student> {
        vec![Student {
            id: 1,
            name: "김하늘".to_string(),
            ..Default::default()
        }]
    }

    #[test]
    fn test_unknown_student() {
        assert_eq!(student_name(&students(), 1), "김하늘");
        assert_eq!(student_name(&students(), 42), UNKNOWN_LABEL);
        assert_eq!(teacher_name(&[], 1), UNKNOWN_LABEL);
    }

    #[test]
    fn test_class_view_flattens() {
        let class = ClassSession {
            id: 3,
            student_id: 1,
            teacher_id: 9,
            ..Default::default()
        };
        let view = ClassView::new(class, &students(), &[]);
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["studentName"], "김하늘");
        assert_eq!(value["teacherName"], UNKNOWN_LABEL);
    }
}
