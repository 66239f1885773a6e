//! Teacher model

use serde::{Deserialize, Serialize};

use super::Entity;
use crate::storage::Record;

/// A teacher, with the account their pay goes to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub instrument: String,
    pub phone: String,
    pub bank_account: String,
}

impl Record for Teacher {
    const PATH: &'static str = "data/teachers.json";
    const PROPERTY: &'static str = "teachers";
    const LABEL: &'static str = "teacher";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Entity for Teacher {
    fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("instrument", &self.instrument),
            ("phone", &self.phone),
            ("bankAccount", &self.bank_account),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
