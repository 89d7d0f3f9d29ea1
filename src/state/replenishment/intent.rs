use crate::store::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplenishmentIntent {
    SetPeriod { start_year: i32, end_year: i32 },
    ClearPeriod,
    SetActiveTab(usize),
}

impl Intent for ReplenishmentIntent {}
