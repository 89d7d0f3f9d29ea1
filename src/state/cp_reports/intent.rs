use crate::store::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CpReportsIntent {
    SetCountry(Option<i64>),
    SetYear(Option<i32>),
    Reset,
}

impl Intent for CpReportsIntent {}
