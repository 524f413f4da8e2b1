use super::{repository::RosterRepository, utils::{RosterSnapshot, StudentEditForm}};
use crate::api::{ApiClient, ApiError, MessageResponse, Student, UpdateStudent};
use crate::components::layout::MessageState;
use crate::config;
use crate::utils::timers::use_interval;
use leptos::*;
use std::rc::Rc;

pub type RosterResource = Resource<u32, Result<RosterSnapshot, ApiError>>;

pub fn use_roster_repository() -> RosterRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    RosterRepository::new_with_client(Rc::new(api))
}

/// Roster resource that reloads whenever `refresh` is bumped, plus a
/// timer that bumps it every poll interval.
pub fn use_polled_roster(repository: RosterRepository) -> (RosterResource, RwSignal<u32>) {
    let refresh = create_rw_signal(0u32);
    let roster = create_resource(
        move || refresh.get(),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_snapshot().await }
        },
    );
    use_interval(config::timings().poll_interval_ms, move || {
        refresh.update(|n| *n = n.wrapping_add(1))
    });
    (roster, refresh)
}

#[derive(Clone, Copy)]
pub struct StudentsViewModel {
    pub roster: RosterResource,
    pub refresh: RwSignal<u32>,
    pub search: RwSignal<String>,
    pub expanded: RwSignal<Option<String>>,
    pub messages: MessageState,
    pub edit_form: StudentEditForm,
    pub save_action: Action<(String, UpdateStudent), Result<MessageResponse, ApiError>>,
    pub pending_delete: RwSignal<Option<Student>>,
    pub delete_action: Action<String, Result<MessageResponse, ApiError>>,
}

impl StudentsViewModel {
    pub fn toggle_details(&self, id: &str) {
        self.expanded.update(|current| {
            *current = match current.as_deref() {
                Some(open) if open == id => None,
                _ => Some(id.to_string()),
            }
        });
    }

    pub fn submit_edit(&self) {
        match self.edit_form.to_request() {
            Ok(payload) => {
                self.save_action.dispatch(payload);
            }
            Err(msg) => self.messages.set_error(msg),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(student) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(student.id);
        }
        self.pending_delete.set(None);
    }
}

pub fn use_students_view_model() -> StudentsViewModel {
    let repository = use_roster_repository();
    let (roster, refresh) = use_polled_roster(repository.clone());
    let messages = MessageState::default();
    let edit_form = StudentEditForm::default();

    let save_repo = repository.clone();
    let save_action = create_action(move |(id, payload): &(String, UpdateStudent)| {
        let repo = save_repo.clone();
        let id = id.clone();
        let payload = payload.clone();
        async move { repo.update_student(id, payload).await }
    });

    let delete_repo = repository;
    let delete_action = create_action(move |id: &String| {
        let repo = delete_repo.clone();
        let id = id.clone();
        async move { repo.delete_student(id).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    messages.set_success("Student updated successfully.");
                    edit_form.close();
                    refresh.update(|n| *n = n.wrapping_add(1));
                }
                Err(err) => messages.set_error(err.error),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(_) => {
                    messages.set_success("Student deleted successfully.");
                    refresh.update(|n| *n = n.wrapping_add(1));
                }
                Err(err) => messages.set_error(err.error),
            }
        }
    });

    StudentsViewModel {
        roster,
        refresh,
        search: create_rw_signal(String::new()),
        expanded: create_rw_signal(None),
        messages,
        edit_form,
        save_action,
        pending_delete: create_rw_signal(None),
        delete_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::student;
    use crate::test_support::ssr::with_idle_resources;

    #[test]
    fn view_model_starts_with_empty_search() {
        with_idle_resources(|| {
            let vm = use_students_view_model();
            assert!(vm.search.get().is_empty());
            assert!(vm.pending_delete.get().is_none());
            assert!(!vm.edit_form.is_open());
        });
    }

    #[test]
    fn details_toggle_per_student() {
        with_idle_resources(|| {
            let vm = use_students_view_model();
            vm.toggle_details("s1");
            assert_eq!(vm.expanded.get().as_deref(), Some("s1"));
            vm.toggle_details("s2");
            assert_eq!(vm.expanded.get().as_deref(), Some("s2"));
            vm.toggle_details("s2");
            assert!(vm.expanded.get().is_none());
        });
    }

    #[test]
    fn invalid_edit_reports_error_without_dispatch() {
        with_idle_resources(|| {
            let vm = use_students_view_model();
            vm.edit_form.open(&student("s1", "Ravi", "CS01", "BCA"));
            vm.edit_form.name.set(String::new());
            vm.submit_edit();
            assert_eq!(vm.messages.error.get(), Some("Name and email are required.".into()));
            assert_eq!(vm.save_action.version().get(), 0);
        });
    }
}
