use crate::api::{
    Analytics, ApiClient, ApiError, CreateStudent, MessageResponse, SetScheduleRequest,
};
use crate::pages::students::{repository::RosterRepository, utils::RosterSnapshot};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
    roster: RosterRepository,
}

impl Default for AdminRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self {
            roster: RosterRepository::new_with_client(client.clone()),
            client,
        }
    }

    pub fn roster(&self) -> RosterRepository {
        self.roster.clone()
    }

    pub async fn fetch_analytics(&self) -> Result<Analytics, ApiError> {
        self.client.get_analytics().await
    }

    pub async fn fetch_snapshot(&self) -> Result<RosterSnapshot, ApiError> {
        self.roster.fetch_snapshot().await
    }

    pub async fn add_student(&self, payload: CreateStudent) -> Result<MessageResponse, ApiError> {
        self.client.create_student(&payload).await
    }

    pub async fn save_schedule(
        &self,
        payload: SetScheduleRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.set_schedule(&payload).await
    }
}
