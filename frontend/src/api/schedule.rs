use chrono::NaiveDate;
use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, MessageResponse, ScheduleResponse, SetScheduleRequest},
};
use crate::utils::time::format_date;

impl ApiClient {
    pub async fn get_schedule(&self, date: NaiveDate) -> Result<ScheduleResponse, ApiError> {
        let builder = self
            .request(Method::GET, "/schedule")
            .await
            .query(&[("date", format_date(date))]);
        self.send_authed(builder).await
    }

    pub async fn set_schedule(&self, payload: &SetScheduleRequest) -> Result<MessageResponse, ApiError> {
        let builder = self.request(Method::POST, "/schedule").await.json(payload);
        self.send_authed(builder).await
    }
}
