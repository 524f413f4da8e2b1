use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(rename = "rollNumber", skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "rollNumber", default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
}

impl UserResponse {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "rollNumber", skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "rollNumber", default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub face_registered_at: Option<String>,
}

impl Student {
    pub fn roll_number_or_empty(&self) -> &str {
        self.roll_number.as_deref().unwrap_or("")
    }

    pub fn course_or_empty(&self) -> &str {
        self.course.as_deref().unwrap_or("")
    }

    pub fn has_face_registered(&self) -> bool {
        self.face_registered_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStudent {
    pub email: String,
    pub name: String,
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
    pub course: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStudent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "rollNumber", skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    #[serde(default)]
    pub total_students: u64,
    #[serde(default)]
    pub present_today: u64,
    #[serde(default = "zero_percent")]
    pub attendance_rate: String,
    #[serde(default)]
    pub active_classes: u64,
    #[serde(default = "zero_percent")]
    pub recognition_accuracy: String,
}

fn zero_percent() -> String {
    "0%".to_string()
}

impl Default for Analytics {
    fn default() -> Self {
        Self {
            total_students: 0,
            present_today: 0,
            attendance_rate: zero_percent(),
            active_classes: 0,
            recognition_accuracy: zero_percent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub period: u32,
    pub subject: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub periods: Vec<Period>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScheduleRequest {
    pub date: NaiveDate,
    pub periods: Vec<Period>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Present,
    Late,
    #[default]
    #[serde(other)]
    Absent,
}

impl PresenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceStatus::Present => "present",
            PresenceStatus::Late => "late",
            PresenceStatus::Absent => "absent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "studentId", default)]
    pub student_id: Option<String>,
    #[serde(rename = "studentName", default)]
    pub student_name: Option<String>,
    #[serde(rename = "rollNumber", default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    // Records created by free recognition carry no period.
    #[serde(default)]
    pub period: Option<u32>,
    #[serde(default)]
    pub status: PresenceStatus,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodayAttendanceResponse {
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyAttendanceResponse {
    #[serde(default)]
    pub attendance: HashMap<String, Vec<AttendanceRecord>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedUser {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "rollNumber", default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResponse {
    pub status: String,
    #[serde(default)]
    pub user: Option<RecognizedUser>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub min_distance: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceRegistrationResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub quality_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodAttendanceResponse {
    #[serde(default)]
    pub message: String,
    // The backend echoes the form field back, so this may be a string or a number.
    #[serde(default)]
    pub period: Option<Value>,
    #[serde(default)]
    pub user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl From<crate::utils::media::CaptureError> for ApiError {
    fn from(error: crate::utils::media::CaptureError) -> Self {
        ApiError::capture(error.to_string())
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn capture(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "CAPTURE_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNAUTHORIZED".to_string(),
            details: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED" || self.code == "401"
    }
}
