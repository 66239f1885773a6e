//! Student model

use serde::{Deserialize, Serialize};

use super::Entity;
use crate::storage::Record;

/// A student enrolled at the academy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub instrument: String,
    pub phone: String,
}

impl Record for Student {
    const PATH: &'static str = "data/students.json";
    const PROPERTY: &'static str = "students";
    const LABEL: &'static str = "student";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Entity for Student {
    fn invalid_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.instrument.trim().is_empty() {
            missing.push("instrument");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        missing
    }
}
