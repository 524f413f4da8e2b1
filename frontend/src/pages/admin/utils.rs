use crate::api::{Analytics, CreateStudent, Period, SetScheduleRequest};
use crate::pages::home::utils::StatTile;
use chrono::{NaiveDate, NaiveTime};
use leptos::*;

pub fn admin_stat_tiles(analytics: &Analytics) -> Vec<StatTile> {
    vec![
        StatTile {
            label: "Total Students",
            value: analytics.total_students.to_string(),
        },
        StatTile {
            label: "Present Today",
            value: analytics.present_today.to_string(),
        },
        StatTile {
            label: "Average Attendance",
            value: analytics.attendance_rate.clone(),
        },
        StatTile {
            label: "Active Classes",
            value: analytics.active_classes.to_string(),
        },
    ]
}

#[derive(Clone, Copy)]
pub struct AddStudentForm {
    pub email: RwSignal<String>,
    pub name: RwSignal<String>,
    pub roll_number: RwSignal<String>,
    pub course: RwSignal<String>,
}

impl Default for AddStudentForm {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            name: create_rw_signal(String::new()),
            roll_number: create_rw_signal(String::new()),
            course: create_rw_signal(String::new()),
        }
    }
}

impl AddStudentForm {
    pub fn to_request(&self) -> Result<CreateStudent, String> {
        let request = CreateStudent {
            email: self.email.get_untracked().trim().to_string(),
            name: self.name.get_untracked().trim().to_string(),
            roll_number: self.roll_number.get_untracked().trim().to_string(),
            course: self.course.get_untracked().trim().to_string(),
        };
        if [
            &request.email,
            &request.name,
            &request.roll_number,
            &request.course,
        ]
        .iter()
        .any(|field| field.is_empty())
        {
            return Err("All fields are required.".into());
        }
        Ok(request)
    }

    pub fn reset(&self) {
        self.email.set(String::new());
        self.name.set(String::new());
        self.roll_number.set(String::new());
        self.course.set(String::new());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleRow {
    pub subject: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Subject,
    Start,
    End,
}

// Period times go out as HH:MM; attendance marking parses nothing else.
const CLOCK_FORMAT: &str = "%H:%M";

fn parse_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value.trim(), "%H:%M:%S"))
        .ok()
}

/// Checks every row and numbers the periods 1..n in row order.
pub fn build_periods(rows: &[ScheduleRow]) -> Result<Vec<Period>, String> {
    if rows.is_empty() {
        return Err("Add at least one period.".into());
    }
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let number = idx as u32 + 1;
            let subject = row.subject.trim();
            if subject.is_empty() || row.start.trim().is_empty() || row.end.trim().is_empty() {
                return Err("Please fill all fields for each period.".to_string());
            }
            match (parse_clock(&row.start), parse_clock(&row.end)) {
                (Some(start), Some(end)) if end > start => Ok(Period {
                    period: number,
                    subject: subject.to_string(),
                    start: start.format(CLOCK_FORMAT).to_string(),
                    end: end.format(CLOCK_FORMAT).to_string(),
                }),
                (Some(_), Some(_)) => Err(format!("Period {} must end after it starts.", number)),
                _ => Err(format!("Period {} has an invalid time.", number)),
            }
        })
        .collect()
}

#[derive(Clone, Copy)]
pub struct ScheduleDraft {
    pub rows: RwSignal<Vec<ScheduleRow>>,
}

impl Default for ScheduleDraft {
    fn default() -> Self {
        Self {
            rows: create_rw_signal(vec![ScheduleRow::default()]),
        }
    }
}

impl ScheduleDraft {
    pub fn add_row(&self) {
        self.rows.update(|rows| rows.push(ScheduleRow::default()));
    }

    pub fn can_remove(&self) -> bool {
        self.rows.with(|rows| rows.len() > 1)
    }

    pub fn remove_row(&self, index: usize) {
        self.rows.update(|rows| {
            if rows.len() > 1 && index < rows.len() {
                rows.remove(index);
            }
        });
    }

    pub fn update(&self, index: usize, field: RowField, value: String) {
        self.rows.update(|rows| {
            if let Some(row) = rows.get_mut(index) {
                match field {
                    RowField::Subject => row.subject = value,
                    RowField::Start => row.start = value,
                    RowField::End => row.end = value,
                }
            }
        });
    }

    pub fn reset(&self) {
        self.rows.set(vec![ScheduleRow::default()]);
    }

    pub fn to_request(&self, date: NaiveDate) -> Result<SetScheduleRequest, String> {
        let periods = self.rows.with_untracked(|rows| build_periods(rows))?;
        Ok(SetScheduleRequest { date, periods })
    }
}
