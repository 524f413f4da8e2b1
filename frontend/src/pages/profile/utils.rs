use crate::api::{AttendanceRecord, Period, PresenceStatus, ProfileUpdate, UserResponse};
use crate::pages::students::utils::{attendance_percent, record_for_period};
use leptos::*;
use serde::{Deserialize, Serialize};
use web_sys::File;

pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Today's schedule and the signed-in student's records for today.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub periods: Vec<Period>,
    pub records: Vec<AttendanceRecord>,
}

impl ProfileSnapshot {
    pub fn attended(&self, period: u32) -> bool {
        record_for_period(&self.records, period).is_some()
    }

    pub fn today_percent(&self) -> u32 {
        let present = self
            .records
            .iter()
            .filter(|record| record.status == PresenceStatus::Present)
            .count();
        attendance_percent(present, self.periods.len())
    }

    /// Newest first.
    pub fn recent_activity(&self) -> Vec<AttendanceRecord> {
        let skip = self.records.len().saturating_sub(RECENT_ACTIVITY_LIMIT);
        self.records.iter().skip(skip).rev().cloned().collect()
    }
}

#[derive(Clone, Copy)]
pub struct ProfileForm {
    pub editing: RwSignal<bool>,
    pub name: RwSignal<String>,
    pub roll_number: RwSignal<String>,
    pub course: RwSignal<String>,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            editing: create_rw_signal(false),
            name: create_rw_signal(String::new()),
            roll_number: create_rw_signal(String::new()),
            course: create_rw_signal(String::new()),
        }
    }
}

impl ProfileForm {
    pub fn fill(&self, user: &UserResponse) {
        self.name.set(user.name.clone());
        self.roll_number
            .set(user.roll_number.clone().unwrap_or_default());
        self.course.set(user.course.clone().unwrap_or_default());
    }

    pub fn to_update(&self) -> Result<ProfileUpdate, String> {
        let name = self.name.get_untracked().trim().to_string();
        if name.is_empty() {
            return Err("Name is required.".into());
        }
        let roll_number = self.roll_number.get_untracked().trim().to_string();
        let course = self.course.get_untracked().trim().to_string();
        Ok(ProfileUpdate {
            name: Some(name),
            roll_number: Some(roll_number).filter(|v| !v.is_empty()),
            course: Some(course).filter(|v| !v.is_empty()),
            ..ProfileUpdate::default()
        })
    }
}

/// Photo registration form; the file itself stays out of the reactive graph.
#[derive(Clone, Copy)]
pub struct FaceUploadForm {
    pub name: RwSignal<String>,
    pub roll_number: RwSignal<String>,
    pub file_name: RwSignal<Option<String>>,
    file: StoredValue<Option<File>>,
}

impl Default for FaceUploadForm {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            roll_number: create_rw_signal(String::new()),
            file_name: create_rw_signal(None),
            file: store_value(None),
        }
    }
}

pub fn validate_face_upload(name: &str, has_file: bool) -> Result<(), String> {
    if name.trim().is_empty() || !has_file {
        Err("Please provide a name and photo.".into())
    } else {
        Ok(())
    }
}

impl FaceUploadForm {
    pub fn select(&self, file: Option<File>) {
        self.file_name.set(file.as_ref().map(|f| f.name()));
        self.file.set_value(file);
    }

    /// The chosen file, name and optional roll number.
    pub fn to_submission(&self) -> Result<(File, String, Option<String>), String> {
        let name = self.name.get_untracked().trim().to_string();
        let file = self.file.get_value();
        validate_face_upload(&name, file.is_some())?;
        let file = file.ok_or_else(|| "Please provide a name and photo.".to_string())?;
        let roll = self.roll_number.get_untracked().trim().to_string();
        Ok((file, name, Some(roll).filter(|r| !r.is_empty())))
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.roll_number.set(String::new());
        self.select(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(period: u32, status: PresenceStatus, time: &str) -> AttendanceRecord {
        AttendanceRecord {
            student_id: Some("u1".into()),
            student_name: Some("Asha Raman".into()),
            roll_number: None,
            date: None,
            period: Some(period),
            status,
            time: Some(time.into()),
        }
    }

    fn periods(n: u32) -> Vec<Period> {
        (1..=n)
            .map(|p| Period {
                period: p,
                subject: format!("Subject {}", p),
                start: "09:00".into(),
                end: "09:50".into(),
            })
            .collect()
    }

    #[test]
    fn percent_uses_present_records_over_periods() {
        let snapshot = ProfileSnapshot {
            periods: periods(3),
            records: vec![
                record(1, PresenceStatus::Present, "09:01:00"),
                record(2, PresenceStatus::Present, "10:01:00"),
            ],
        };
        assert_eq!(snapshot.today_percent(), 67);
        assert!(snapshot.attended(2));
        assert!(!snapshot.attended(3));
        assert_eq!(ProfileSnapshot::default().today_percent(), 0);
    }

    #[test]
    fn recent_activity_is_last_ten_newest_first() {
        let records = (1..=12)
            .map(|p| record(p, PresenceStatus::Present, &format!("{:02}:00:00", p)))
            .collect();
        let snapshot = ProfileSnapshot {
            periods: Vec::new(),
            records,
        };
        let recent = snapshot.recent_activity();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].period, Some(12));
        assert_eq!(recent[9].period, Some(3));
    }

    #[test]
    fn face_upload_needs_name_and_file() {
        assert!(validate_face_upload("", true).is_err());
        assert!(validate_face_upload("Asha", false).is_err());
        assert!(validate_face_upload("Asha", true).is_ok());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::student_user;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn profile_form_round_trips_user() {
        with_runtime(|| {
            let form = ProfileForm::default();
            form.fill(&student_user());
            assert_eq!(form.roll_number.get(), "CS2024001");
            form.course.set(" ".into());
            let update = form.to_update().unwrap();
            assert_eq!(update.name.as_deref(), Some("Asha Raman"));
            assert!(update.course.is_none());
            assert!(update.password.is_none());

            form.name.set(String::new());
            assert_eq!(form.to_update().unwrap_err(), "Name is required.");
        });
    }

    #[test]
    fn face_upload_without_file_is_rejected() {
        with_runtime(|| {
            let form = FaceUploadForm::default();
            form.name.set("Asha".into());
            assert_eq!(
                form.to_submission().unwrap_err(),
                "Please provide a name and photo."
            );
        });
    }
}
