//! Read-side logic over loaded entity lists

pub mod dashboard;
pub mod lookup;
