//! Class session model

use serde::{Deserialize, Serialize};

use super::{ClassDuration, Entity};
use crate::storage::Record;
use crate::utils::dates::{parse_date, weekday_label};

/// One scheduled lesson between a student and a teacher
///
/// `student_id` and `teacher_id` are not checked against the other documents;
/// a dangling id is displayed with the unknown label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassSession {
    pub id: i64,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Weekday label derived from `date`
    pub day_of_week: String,
    pub time: String,
    pub student_id: i64,
    pub teacher_id: i64,
    pub instrument: String,
    pub duration: ClassDuration,
    pub content: String,
}

impl ClassSession {
    /// Recompute the weekday label from the date
    pub fn refresh_day_of_week(&mut self) {
        if let Some(label) = weekday_label(&self.date) {
            self.day_of_week = label.to_string();
        }
    }
}

impl Record for ClassSession {
    const PATH: &'static str = "data/classes.json";
    const PROPERTY: &'static str = "classes";
    const LABEL: &'static str = "class";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Entity for ClassSession {
    fn normalize(&mut self) {
        self.refresh_day_of_week();
    }

    fn invalid_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if parse_date(&self.date).is_none() {
            missing.push("date");
        }
        if self.time.trim().is_empty() {
            missing.push("time");
        }
        if self.student_id == 0 {
            missing.push("studentId");
        }
        if self.teacher_id == 0 {
            missing.push("teacherId");
        }
        if !self.duration.as_str().is_empty() && !self.duration.is_known() {
            missing.push("duration");
        }
        missing
    }
}
