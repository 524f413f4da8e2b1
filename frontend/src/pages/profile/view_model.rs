use super::{
    repository::ProfileRepository,
    utils::{FaceUploadForm, ProfileForm, ProfileSnapshot},
};
use crate::api::{
    ApiClient, ApiError, FaceRegistrationResponse, PeriodAttendanceResponse, ProfileUpdate,
    UserResponse,
};
use crate::components::layout::MessageState;
use crate::config;
use crate::state::auth::{refresh_user, use_auth, AuthState};
use crate::utils::media::{capture_with_camera, read_file, ImageUpload};
use leptos::{html, *};
use std::rc::Rc;
use web_sys::File;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraTask {
    Register,
    Period(u32),
}

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub auth: ReadSignal<AuthState>,
    pub today: Resource<u32, Result<ProfileSnapshot, ApiError>>,
    pub refresh: RwSignal<u32>,
    pub form: ProfileForm,
    pub profile_messages: MessageState,
    pub save_action: Action<ProfileUpdate, Result<UserResponse, ApiError>>,
    pub upload: FaceUploadForm,
    pub face_messages: MessageState,
    pub upload_action: Action<(File, String, Option<String>), Result<FaceRegistrationResponse, ApiError>>,
    pub attendance_messages: MessageState,
    pub camera_task: RwSignal<Option<CameraTask>>,
    pub marking: RwSignal<Option<u32>>,
    pub video_ref: NodeRef<html::Video>,
    pub canvas_ref: NodeRef<html::Canvas>,
    repository: StoredValue<ProfileRepository>,
}

fn registered_message(response: &FaceRegistrationResponse) -> String {
    if response.message.trim().is_empty() {
        "Your face has been successfully registered for recognition.".into()
    } else {
        response.message.clone()
    }
}

fn marked_message(period: u32, response: &PeriodAttendanceResponse) -> String {
    if response.message.trim().is_empty() {
        format!("Attendance marked for period {}", period)
    } else {
        response.message.clone()
    }
}

impl ProfileViewModel {
    pub fn start_edit(&self) {
        if let Some(user) = self.auth.get_untracked().user {
            self.form.fill(&user);
        }
        self.profile_messages.clear();
        self.form.editing.set(true);
    }

    pub fn cancel_edit(&self) {
        self.form.editing.set(false);
    }

    pub fn save(&self) {
        match self.form.to_update() {
            Ok(update) => {
                self.save_action.dispatch(update);
            }
            Err(msg) => self.profile_messages.set_error(msg),
        }
    }

    pub fn submit_upload(&self) {
        match self.upload.to_submission() {
            Ok(submission) => {
                self.face_messages.clear();
                self.upload_action.dispatch(submission);
            }
            Err(msg) => self.face_messages.set_error(msg),
        }
    }

    fn reload(&self) {
        self.refresh.update(|n| *n = n.wrapping_add(1));
    }

    /// A period is being marked, by upload or by webcam.
    pub fn marking_busy(&self) -> bool {
        self.marking.get_untracked().is_some()
            || matches!(self.camera_task.get_untracked(), Some(CameraTask::Period(_)))
    }

    /// Runs one camera capture for `task` and then `then`; the task stays
    /// set until `then` finishes, so only one may be in flight.
    fn with_camera_frame<F, Fut>(&self, task: CameraTask, delay_ms: u32, then: F)
    where
        F: FnOnce(ImageUpload) -> Fut + 'static,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        if self.camera_task.get_untracked().is_some() {
            return;
        }
        if matches!(task, CameraTask::Period(_)) && self.marking_busy() {
            return;
        }
        let messages = match task {
            CameraTask::Register => self.face_messages,
            CameraTask::Period(_) => self.attendance_messages,
        };
        let (Some(video), Some(canvas)) =
            (self.video_ref.get_untracked(), self.canvas_ref.get_untracked())
        else {
            messages.set_error("Camera preview is not ready");
            return;
        };
        self.camera_task.set(Some(task));
        let camera_task = self.camera_task;
        spawn_local(async move {
            match capture_with_camera(&video, &canvas, delay_ms).await {
                Ok(frame) => then(frame).await,
                Err(err) => {
                    log::warn!("Camera capture failed: {}", err);
                    messages.set_error(ApiError::from(err).error);
                }
            }
            camera_task.set(None);
        });
    }

    pub fn register_with_webcam(&self) {
        let repo = self.repository.get_value();
        let messages = self.face_messages;
        self.with_camera_frame(
            CameraTask::Register,
            config::timings().registration_delay_ms,
            move |frame| async move {
                match repo.register_face(frame, None, None).await {
                    Ok(response) => messages.set_success(registered_message(&response)),
                    Err(err) => messages.set_error(err.error),
                }
            },
        );
    }

    pub fn mark_with_webcam(&self, period: u32) {
        let vm = *self;
        self.with_camera_frame(
            CameraTask::Period(period),
            config::timings().registration_delay_ms,
            move |frame| async move { vm.mark(period, frame).await },
        );
    }

    pub fn mark_with_file(&self, period: u32, file: File) {
        if self.marking_busy() {
            return;
        }
        self.marking.set(Some(period));
        let vm = *self;
        spawn_local(async move {
            match read_file(&file).await {
                Ok(image) => vm.mark(period, image).await,
                Err(err) => {
                    vm.marking.set(None);
                    vm.attendance_messages.set_error(ApiError::from(err).error);
                }
            }
        });
    }

    async fn mark(&self, period: u32, image: ImageUpload) {
        self.marking.set(Some(period));
        let result = self.repository.get_value().mark_period(period, image).await;
        self.marking.set(None);
        match result {
            Ok(response) => {
                self.attendance_messages
                    .set_success(marked_message(period, &response));
                self.reload();
            }
            Err(err) => self.attendance_messages.set_error(err.error),
        }
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let (auth, set_auth) = use_auth();
    let api = Rc::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let repository = ProfileRepository::new_with_client(api.clone());

    let refresh = create_rw_signal(0u32);
    let today_repo = repository.clone();
    let today = create_resource(
        move || refresh.get(),
        move |_| {
            let repo = today_repo.clone();
            async move { repo.fetch_today().await }
        },
    );

    let save_repo = repository.clone();
    let save_action = create_action(move |update: &ProfileUpdate| {
        let repo = save_repo.clone();
        let api = api.clone();
        let update = update.clone();
        async move {
            repo.save_profile(update).await?;
            refresh_user(&api, set_auth).await
        }
    });

    let upload_repo = repository.clone();
    let upload_action = create_action(
        move |(file, name, roll): &(File, String, Option<String>)| {
            let repo = upload_repo.clone();
            let (file, name, roll) = (file.clone(), name.clone(), roll.clone());
            async move {
                let image = read_file(&file).await?;
                repo.register_face(image, Some(name), roll).await
            }
        },
    );

    let vm = ProfileViewModel {
        auth,
        today,
        refresh,
        form: ProfileForm::default(),
        profile_messages: MessageState::default(),
        save_action,
        upload: FaceUploadForm::default(),
        face_messages: MessageState::default(),
        upload_action,
        attendance_messages: MessageState::default(),
        camera_task: create_rw_signal(None),
        marking: create_rw_signal(None),
        video_ref: create_node_ref::<html::Video>(),
        canvas_ref: create_node_ref::<html::Canvas>(),
        repository: store_value(repository),
    };

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    vm.profile_messages
                        .set_success("Your profile information has been saved successfully.");
                    vm.form.editing.set(false);
                }
                Err(err) => vm.profile_messages.set_error(err.error),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = upload_action.value().get() {
            match result {
                Ok(response) => {
                    vm.face_messages.set_success(registered_message(&response));
                    vm.upload.reset();
                }
                Err(err) => vm.face_messages.set_error(err.error),
            }
        }
    });

    vm
}
