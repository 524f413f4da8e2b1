use crate::api::{AttendanceRecord, Period, PresenceStatus, Student, UpdateStudent};
use crate::components::student_card::StudentCardModel;
use leptos::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Students, today's periods and today's records, fetched together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub students: Vec<Student>,
    pub periods: Vec<Period>,
    pub attendance: HashMap<String, Vec<AttendanceRecord>>,
}

impl RosterSnapshot {
    pub fn records_for(&self, student_id: &str) -> &[AttendanceRecord] {
        self.attendance
            .get(student_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Case-insensitive match on name, roll number or course.
pub fn matches_search(student: &Student, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    [
        student.name.as_str(),
        student.roll_number_or_empty(),
        student.course_or_empty(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

pub fn filter_students(students: &[Student], term: &str) -> Vec<Student> {
    students
        .iter()
        .filter(|student| matches_search(student, term))
        .cloned()
        .collect()
}

pub fn attendance_percent(attended: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((attended as f64 / total as f64) * 100.0).round() as u32
    }
}

pub fn summarize_student(
    student: &Student,
    records: &[AttendanceRecord],
    periods: &[Period],
) -> StudentCardModel {
    let attended = records
        .iter()
        .filter(|record| record.status == PresenceStatus::Present)
        .count();
    let total = periods.len();
    let mut model = StudentCardModel::from_student(student);
    model.attended_classes = attended;
    model.total_classes = total;
    model.attendance_rate = attendance_percent(attended, total);
    model.last_attendance = records
        .last()
        .and_then(|record| record.time.clone())
        .unwrap_or_else(|| "Never".into());
    model.status = if attended > 0 {
        PresenceStatus::Present
    } else {
        PresenceStatus::Absent
    };
    model
}

pub fn record_for_period(records: &[AttendanceRecord], period: u32) -> Option<&AttendanceRecord> {
    records.iter().find(|record| record.period == Some(period))
}

pub fn showing_summary(shown: usize, total: usize) -> String {
    format!("Showing {} of {} students", shown, total)
}

pub fn empty_roster_message(total: usize) -> &'static str {
    if total == 0 {
        "No students have been added yet. Add your first student to get started."
    } else {
        "Try adjusting your search terms to find students."
    }
}

/// Inline edit form for one roster entry.
#[derive(Clone, Copy)]
pub struct StudentEditForm {
    pub id: RwSignal<Option<String>>,
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub roll_number: RwSignal<String>,
    pub course: RwSignal<String>,
}

impl Default for StudentEditForm {
    fn default() -> Self {
        Self {
            id: create_rw_signal(None),
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            roll_number: create_rw_signal(String::new()),
            course: create_rw_signal(String::new()),
        }
    }
}

impl StudentEditForm {
    pub fn open(&self, student: &Student) {
        self.id.set(Some(student.id.clone()));
        self.name.set(student.name.clone());
        self.email.set(student.email.clone());
        self.roll_number.set(student.roll_number_or_empty().to_string());
        self.course.set(student.course_or_empty().to_string());
    }

    pub fn close(&self) {
        self.id.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.id.get().is_some()
    }

    pub fn to_request(&self) -> Result<(String, UpdateStudent), String> {
        let id = self
            .id
            .get_untracked()
            .ok_or_else(|| "No student selected.".to_string())?;
        let name = self.name.get_untracked().trim().to_string();
        let email = self.email.get_untracked().trim().to_string();
        if name.is_empty() || email.is_empty() {
            return Err("Name and email are required.".into());
        }
        let roll_number = self.roll_number.get_untracked().trim().to_string();
        let course = self.course.get_untracked().trim().to_string();
        Ok((
            id,
            UpdateStudent {
                name: Some(name),
                email: Some(email),
                roll_number: Some(roll_number).filter(|v| !v.is_empty()),
                course: Some(course).filter(|v| !v.is_empty()),
            },
        ))
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::student;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn edit_form_builds_partial_update() {
        with_runtime(|| {
            let form = StudentEditForm::default();
            assert!(form.to_request().is_err());
            form.open(&student("s1", "Ravi", "CS01", "BCA"));
            assert!(form.is_open());
            form.course.set("  ".into());
            let (id, update) = form.to_request().unwrap();
            assert_eq!(id, "s1");
            assert_eq!(update.name.as_deref(), Some("Ravi"));
            assert!(update.course.is_none());
            form.close();
            assert!(!form.is_open());
        });
    }
}
