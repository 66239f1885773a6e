//! Dashboard summary

use chrono::NaiveDate;
use serde::Serialize;

use super::lookup::{ClassView, PaymentView};
use crate::storage::AcademyData;
use crate::utils::dates::{format_date, in_same_month};

/// Payments listed on the dashboard
const RECENT_PAYMENTS: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub total_teachers: usize,
    pub total_classes: usize,
    /// Sum of payments dated in the current month
    pub monthly_revenue: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub today_classes: Vec<ClassView>,
    /// Most recently added first
    pub recent_payments: Vec<PaymentView>,
}

/// Summarize the academy as of `today`
pub fn build(data: &AcademyData, today: NaiveDate) -> Dashboard {
    let monthly_revenue = data
        .payments
        .iter()
        .filter(|p| in_same_month(&p.date, today))
        .map(|p| p.amount)
        .sum();

    let today_str = format_date(today);
    let today_classes = data
        .classes
        .iter()
        .filter(|c| c.date == today_str)
        .cloned()
        .map(|c| ClassView::new(c, &data.students, &data.teachers))
        .collect();

    let recent_payments = data
        .payments
        .iter()
        .rev()
        .take(RECENT_PAYMENTS)
        .cloned()
        .map(|p| PaymentView::new(p, &data.students))
        .collect();

    Dashboard {
        stats: DashboardStats {
            total_students: data.students.len(),
            total_teachers: data.teachers.len(),
            total_classes: data.classes.len(),
            monthly_revenue,
        },
        today_classes,
        recent_payments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassSession, Payment, Student};

    fn payment(id: i64, date: &str, amount: u64) -> Payment {
        Payment {
            id,
            date: date.to_string(),
            student_id: 1,
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn test_build() {
        let data = AcademyData {
            students: vec![Student {
                id: 1,
                name: "김하늘".to_string(),
                ..Default::default()
            }],
            teachers: vec![],
            classes: vec![
                ClassSession {
                    id: 1,
                    date: "2024-05-20".to_string(),
                    student_id: 1,
                    teacher_id: 2,
                    ..Default::default()
                },
                ClassSession {
                    id: 2,
                    date: "2024-05-21".to_string(),
                    ..Default::default()
                },
            ],
            payments: (1..=7)
                .map(|i| payment(i, "2024-05-02", 10_000))
                .chain([payment(8, "2024-04-30", 99_000), payment(9, "2023-05-10", 1)])
                .collect(),
        };
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        let dashboard = build(&data, today);
        assert_eq!(dashboard.stats.total_students, 1);
        assert_eq!(dashboard.stats.total_classes, 2);
        assert_eq!(dashboard.stats.monthly_revenue, 70_000);

        assert_eq!(dashboard.today_classes.len(), 1);
        assert_eq!(dashboard.today_classes[0].student_name, "김하늘");
        assert_eq!(dashboard.today_classes[0].teacher_name, "알 수 없음");

        let recent: Vec<i64> = dashboard
            .recent_payments
            .iter()
            .map(|p| p.payment.id)
            .collect();
        assert_eq!(recent, vec![9, 8, 7, 6, 5]);
    }
}
