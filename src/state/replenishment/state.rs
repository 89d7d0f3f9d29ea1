use crate::store::SliceState;

/// State of the replenishment dashboard: the selected triennium and the
/// active dashboard tab.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReplenishmentState {
    /// Inclusive start/end years of the selected period, `None` until the
    /// user picks one.
    pub period: Option<(i32, i32)>,
    pub active_tab: usize,
}

impl ReplenishmentState {
    pub fn period_label(&self) -> Option<String> {
        self.period.map(|(start, end)| format!("{start}-{end}"))
    }
}

impl SliceState for ReplenishmentState {}
