use chrono::NaiveDate;
use reqwest::{
    multipart::{Form, Part},
    Method,
};

use super::{
    client::ApiClient,
    types::{
        ApiError, DailyAttendanceResponse, FaceRegistrationResponse, PeriodAttendanceResponse,
        RecognitionResponse, TodayAttendanceResponse,
    },
};
use crate::utils::{media::ImageUpload, time::format_date};

fn image_part(image: ImageUpload) -> Result<Part, ApiError> {
    Part::bytes(image.bytes)
        .file_name(image.file_name)
        .mime_str(&image.mime)
        .map_err(|e| ApiError::validation(format!("Unsupported image type: {}", e)))
}

impl ApiClient {
    pub async fn get_today_attendance(&self) -> Result<TodayAttendanceResponse, ApiError> {
        let builder = self.request(Method::GET, "/attendance/today").await;
        self.send_authed(builder).await
    }

    pub async fn get_attendance_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<DailyAttendanceResponse, ApiError> {
        let builder = self
            .request(Method::GET, "/attendance")
            .await
            .query(&[("date", format_date(date))]);
        self.send_authed(builder).await
    }

    pub async fn mark_period_attendance(
        &self,
        period: u32,
        image: ImageUpload,
    ) -> Result<PeriodAttendanceResponse, ApiError> {
        let form = Form::new()
            .part("image", image_part(image)?)
            .text("period", period.to_string());
        let builder = self
            .request(Method::POST, "/attendance/period")
            .await
            .multipart(form);
        self.send_authed(builder).await
    }

    pub async fn recognize_face(&self, image: ImageUpload) -> Result<RecognitionResponse, ApiError> {
        let form = Form::new().part("image", image_part(image)?);
        let builder = self
            .request(Method::POST, "/recognize-quality")
            .await
            .multipart(form);
        self.send_authed(builder).await
    }

    pub async fn register_face(
        &self,
        image: ImageUpload,
        name: Option<String>,
        roll_number: Option<String>,
    ) -> Result<FaceRegistrationResponse, ApiError> {
        let mut form = Form::new().part("image", image_part(image)?);
        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            form = form.text("name", name);
        }
        if let Some(roll) = roll_number.filter(|r| !r.trim().is_empty()) {
            form = form.text("rollNumber", roll);
        }
        let builder = self
            .request(Method::POST, "/register-face-quality")
            .await
            .multipart(form);
        self.send_authed(builder).await
    }
}
