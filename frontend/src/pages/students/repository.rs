use super::utils::RosterSnapshot;
use crate::api::{ApiClient, ApiError, MessageResponse, UpdateStudent};
use crate::utils::time::today_utc;
use futures::future::join3;
use std::rc::Rc;

#[derive(Clone)]
pub struct RosterRepository {
    client: Rc<ApiClient>,
}

impl Default for RosterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Students, today's schedule and today's attendance in one round.
    ///
    /// The student list is required; a missing schedule or attendance
    /// map degrades to empty so the roster still renders.
    pub async fn fetch_snapshot(&self) -> Result<RosterSnapshot, ApiError> {
        let today = today_utc();
        let (students, schedule, attendance) = join3(
            self.client.list_students(),
            self.client.get_schedule(today),
            self.client.get_attendance_for_date(today),
        )
        .await;
        let periods = match schedule {
            Ok(schedule) => schedule.periods,
            Err(err) => {
                log::warn!("Failed to load today's schedule: {}", err);
                Vec::new()
            }
        };
        let attendance = match attendance {
            Ok(daily) => daily.attendance,
            Err(err) => {
                log::warn!("Failed to load today's attendance: {}", err);
                Default::default()
            }
        };
        Ok(RosterSnapshot {
            students: students?,
            periods,
            attendance,
        })
    }

    pub async fn update_student(
        &self,
        id: String,
        payload: UpdateStudent,
    ) -> Result<MessageResponse, ApiError> {
        self.client.update_student(&id, &payload).await
    }

    pub async fn delete_student(&self, id: String) -> Result<MessageResponse, ApiError> {
        self.client.delete_student(&id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> RosterRepository {
        RosterRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn snapshot_combines_three_endpoints() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/students");
            then.status(200).json_body(json!([
                { "id": "s1", "name": "Ravi", "email": "ravi@francisxavier.ac.in", "rollNumber": "CS01", "course": "BCA" }
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/schedule");
            then.status(200).json_body(json!({
                "date": "2025-01-02",
                "periods": [{ "period": 1, "subject": "Maths", "start": "09:00", "end": "09:50" }]
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance");
            then.status(200).json_body(json!({
                "attendance": { "s1": [{ "studentId": "s1", "period": 1, "status": "present", "time": "09:03:00" }] }
            }));
        });

        let snapshot = repo(&server).fetch_snapshot().await.unwrap();
        assert_eq!(snapshot.students.len(), 1);
        assert_eq!(snapshot.periods.len(), 1);
        assert_eq!(snapshot.records_for("s1").len(), 1);
        assert!(snapshot.records_for("missing").is_empty());
    }

    #[tokio::test]
    async fn snapshot_tolerates_missing_schedule() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/students");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/schedule");
            then.status(500).json_body(json!({ "error": "boom" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance");
            then.status(200).json_body(json!({ "attendance": {} }));
        });

        let snapshot = repo(&server).fetch_snapshot().await.unwrap();
        assert!(snapshot.periods.is_empty());
    }

    #[tokio::test]
    async fn snapshot_fails_when_students_fail() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/students");
            then.status(403).json_body(json!({ "error": "Admin access required" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/schedule");
            then.status(200).json_body(json!({ "periods": [] }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance");
            then.status(200).json_body(json!({ "attendance": {} }));
        });

        let err = repo(&server).fetch_snapshot().await.unwrap_err();
        assert_eq!(err.error, "Admin access required");
    }
}
