use crate::api::{ApiError, RecognitionResponse};

const DEFAULT_CONFIDENCE: f64 = 99.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionStatus {
    Idle,
    Scanning,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanResult {
    Recognized {
        name: String,
        roll_number: String,
        course: String,
        confidence: f64,
    },
    Unknown,
    Failed(String),
}

impl ScanResult {
    pub fn badge(&self) -> &'static str {
        match self {
            ScanResult::Recognized { .. } => "Recognized",
            ScanResult::Unknown => "Unknown Person",
            ScanResult::Failed(_) => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub result: ScanResult,
    pub timestamp: String,
}

/// Scores at or below 1.0 are fractions; larger ones are already percentages.
pub fn confidence_percent(raw: Option<f64>) -> f64 {
    match raw {
        Some(value) if value <= 1.0 => value * 100.0,
        Some(value) => value,
        None => DEFAULT_CONFIDENCE,
    }
}

pub fn format_confidence(percent: f64) -> String {
    format!("{:.1}%", percent)
}

fn or_na(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "N/A".into())
}

pub fn scan_result_from_response(response: Result<RecognitionResponse, ApiError>) -> ScanResult {
    match response {
        Ok(RecognitionResponse {
            status,
            user: Some(user),
            ..
        }) if status == "success" => ScanResult::Recognized {
            name: user.name,
            roll_number: or_na(user.roll_number),
            course: or_na(user.course),
            confidence: confidence_percent(user.confidence),
        },
        Ok(_) => ScanResult::Unknown,
        Err(err) => ScanResult::Failed(err.error),
    }
}
