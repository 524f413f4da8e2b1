use super::{
    repository::AdminRepository,
    utils::{AddStudentForm, ScheduleDraft},
};
use crate::api::{Analytics, ApiClient, ApiError, CreateStudent, MessageResponse, SetScheduleRequest};
use crate::components::layout::MessageState;
use crate::pages::students::view_model::{use_polled_roster, RosterResource};
use crate::utils::time::today_utc;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub analytics: Resource<u32, Result<Analytics, ApiError>>,
    pub roster: RosterResource,
    pub refresh: RwSignal<u32>,
    pub search: RwSignal<String>,
    pub add_form: AddStudentForm,
    pub add_messages: MessageState,
    pub add_action: Action<CreateStudent, Result<MessageResponse, ApiError>>,
    pub schedule: ScheduleDraft,
    pub schedule_messages: MessageState,
    pub schedule_action: Action<SetScheduleRequest, Result<MessageResponse, ApiError>>,
}

impl AdminViewModel {
    pub fn submit_student(&self) {
        if self.add_action.pending().get_untracked() {
            return;
        }
        match self.add_form.to_request() {
            Ok(request) => {
                self.add_messages.clear();
                self.add_action.dispatch(request);
            }
            Err(msg) => self.add_messages.set_error(msg),
        }
    }

    pub fn submit_schedule(&self) {
        if self.schedule_action.pending().get_untracked() {
            return;
        }
        match self.schedule.to_request(today_utc()) {
            Ok(request) => {
                self.schedule_messages.clear();
                self.schedule_action.dispatch(request);
            }
            Err(msg) => self.schedule_messages.set_error(msg),
        }
    }

    fn reload(&self) {
        self.refresh.update(|n| *n = n.wrapping_add(1));
    }
}

pub fn use_admin_view_model() -> AdminViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminRepository::new_with_client(Rc::new(api));
    let (roster, refresh) = use_polled_roster(repository.roster());

    let analytics_repo = repository.clone();
    let analytics = create_resource(
        move || refresh.get(),
        move |_| {
            let repo = analytics_repo.clone();
            async move { repo.fetch_analytics().await }
        },
    );

    let add_repo = repository.clone();
    let add_action = create_action(move |payload: &CreateStudent| {
        let repo = add_repo.clone();
        let payload = payload.clone();
        async move { repo.add_student(payload).await }
    });

    let schedule_repo = repository;
    let schedule_action = create_action(move |payload: &SetScheduleRequest| {
        let repo = schedule_repo.clone();
        let payload = payload.clone();
        async move { repo.save_schedule(payload).await }
    });

    let vm = AdminViewModel {
        analytics,
        roster,
        refresh,
        search: create_rw_signal(String::new()),
        add_form: AddStudentForm::default(),
        add_messages: MessageState::default(),
        add_action,
        schedule: ScheduleDraft::default(),
        schedule_messages: MessageState::default(),
        schedule_action,
    };

    create_effect(move |_| {
        if let Some(result) = add_action.value().get() {
            match result {
                Ok(response) => {
                    vm.add_messages.set_success(response.message);
                    vm.add_form.reset();
                    vm.reload();
                }
                Err(err) => vm.add_messages.set_error(err.error),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = schedule_action.value().get() {
            match result {
                Ok(_) => {
                    vm.schedule_messages.set_success("Schedule saved for today.");
                    vm.schedule.reset();
                    vm.reload();
                }
                Err(err) => vm.schedule_messages.set_error(err.error),
            }
        }
    });

    vm
}
