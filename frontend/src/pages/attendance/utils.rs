use crate::api::{AttendanceRecord, Period};
use crate::pages::students::utils::record_for_period;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    Marked { time: String },
    Missing,
}

impl GridCell {
    pub fn symbol(&self) -> &'static str {
        match self {
            GridCell::Marked { .. } => "✔",
            GridCell::Missing => "✗",
        }
    }
}

pub fn column_header(period: &Period) -> String {
    format!("P{}", period.period)
}

pub fn grid_cell(records: &[AttendanceRecord], period: &Period) -> GridCell {
    match record_for_period(records, period.period) {
        Some(record) => GridCell::Marked {
            time: record.time.clone().unwrap_or_default(),
        },
        None => GridCell::Missing,
    }
}
