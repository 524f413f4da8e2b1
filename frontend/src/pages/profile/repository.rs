use super::utils::ProfileSnapshot;
use crate::api::{
    ApiClient, ApiError, FaceRegistrationResponse, MessageResponse, PeriodAttendanceResponse,
    ProfileUpdate,
};
use crate::utils::media::ImageUpload;
use crate::utils::time::today_utc;
use futures::future::join;
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl Default for ProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Either half falls back to empty so the page still renders.
    pub async fn fetch_today(&self) -> Result<ProfileSnapshot, ApiError> {
        let (schedule, attendance) = join(
            self.client.get_schedule(today_utc()),
            self.client.get_today_attendance(),
        )
        .await;
        let periods = schedule.map(|s| s.periods).unwrap_or_else(|err| {
            log::warn!("Failed to load today's schedule: {}", err);
            Vec::new()
        });
        let records = attendance.map(|a| a.attendance).unwrap_or_else(|err| {
            log::warn!("Failed to load today's attendance: {}", err);
            Vec::new()
        });
        Ok(ProfileSnapshot { periods, records })
    }

    pub async fn save_profile(&self, update: ProfileUpdate) -> Result<MessageResponse, ApiError> {
        self.client.update_profile(&update).await
    }

    pub async fn register_face(
        &self,
        image: ImageUpload,
        name: Option<String>,
        roll_number: Option<String>,
    ) -> Result<FaceRegistrationResponse, ApiError> {
        self.client.register_face(image, name, roll_number).await
    }

    pub async fn mark_period(
        &self,
        period: u32,
        image: ImageUpload,
    ) -> Result<PeriodAttendanceResponse, ApiError> {
        self.client.mark_period_attendance(period, image).await
    }
}
