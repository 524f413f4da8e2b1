use super::utils::ProfileSnapshot;
use super::view_model::{use_profile_view_model, CameraTask, ProfileViewModel};
use crate::components::layout::{FeedbackBanner, Layout, LoadingSpinner};
use crate::utils::media::take_file;
use leptos::{ev::SubmitEvent, *};
use web_sys::{Event, File, HtmlInputElement};

fn selected_file(ev: &Event) -> Option<File> {
    event_target::<HtmlInputElement>(ev)
        .files()
        .and_then(|files| files.get(0))
}

fn card_class() -> &'static str {
    "bg-surface-elevated rounded-lg shadow-sm border border-border p-6 space-y-4"
}

#[component]
fn InfoRow(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div>
            <p class="text-sm font-medium text-fg-muted">{label}</p>
            <p class="text-fg">{move || value.get()}</p>
        </div>
    }
}

#[component]
fn EditInput(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            <input
                class="mt-1 w-full rounded-md border border-border px-3 py-2"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn PersonalInfo(vm: ProfileViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.save_action.pending();
    let user_field = move |pick: fn(&crate::api::UserResponse) -> String| {
        Signal::derive(move || vm.auth.get().user.as_ref().map(pick).unwrap_or_default())
    };
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.save();
    };

    view! {
        <section class=card_class()>
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-fg">"Personal Information"</h2>
                <Show when=move || !form.editing.get()>
                    <button
                        type="button"
                        class="px-3 py-1.5 rounded-md border border-border text-sm"
                        on:click=move |_| vm.start_edit()
                    >
                        "Edit"
                    </button>
                </Show>
            </div>
            <FeedbackBanner messages=vm.profile_messages />
            <Show
                when=move || form.editing.get()
                fallback=move || view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <InfoRow label="Full Name" value=user_field(|u| u.name.clone()) />
                        <InfoRow label="Email" value=user_field(|u| u.email.clone()) />
                        <InfoRow
                            label="Roll Number"
                            value=user_field(|u| u.roll_number.clone().unwrap_or_else(|| "N/A".into()))
                        />
                        <InfoRow
                            label="Course"
                            value=user_field(|u| u.course.clone().unwrap_or_else(|| "N/A".into()))
                        />
                    </div>
                }
            >
                <form class="space-y-3" on:submit=on_submit>
                    <EditInput label="Full Name" value=form.name />
                    <InfoRow label="Email" value=user_field(|u| u.email.clone()) />
                    <EditInput label="Roll Number" value=form.roll_number />
                    <EditInput label="Course" value=form.course />
                    <div class="flex gap-2">
                        <button
                            type="submit"
                            class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text text-sm font-medium disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Saving..." } else { "Save" }}
                        </button>
                        <button
                            type="button"
                            class="px-4 py-2 rounded-md border border-border text-sm"
                            on:click=move |_| vm.cancel_edit()
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}

#[component]
fn FaceRegistration(vm: ProfileViewModel) -> impl IntoView {
    let upload = vm.upload;
    let registering = move || vm.camera_task.get() == Some(CameraTask::Register);
    let uploading = vm.upload_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_upload();
    };

    view! {
        <section class=card_class()>
            <h2 class="text-lg font-semibold text-fg">"Face Registration"</h2>
            <FeedbackBanner messages=vm.face_messages />
            <button
                type="button"
                class="w-full px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text font-medium disabled:opacity-50"
                disabled=move || vm.camera_task.get().is_some()
                on:click=move |_| vm.register_with_webcam()
            >
                {move || if registering() { "Registering..." } else { "Register Face (Webcam)" }}
            </button>
            <form class="space-y-3 border-t border-border pt-4" on:submit=on_submit>
                <p class="text-sm text-fg-muted">"Or upload a clear photo of your face"</p>
                <EditInput label="Name" value=upload.name />
                <EditInput label="Roll Number (optional)" value=upload.roll_number />
                <input
                    type="file"
                    accept="image/*"
                    class="block w-full text-sm"
                    on:change=move |ev| upload.select(selected_file(&ev))
                />
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md border border-border text-sm font-medium disabled:opacity-50"
                    disabled=move || uploading.get()
                >
                    {move || if uploading.get() { "Uploading..." } else { "Upload Photo" }}
                </button>
            </form>
        </section>
    }
}

fn schedule_list(vm: ProfileViewModel, snapshot: &ProfileSnapshot) -> View {
    if snapshot.periods.is_empty() {
        return view! { <p class="text-sm text-fg-muted">"No schedule set for today."</p> }
            .into_view();
    }
    snapshot
        .periods
        .iter()
        .map(|period| {
            let number = period.period;
            let action = if snapshot.attended(number) {
                view! {
                    <span class="px-2 py-0.5 rounded-full text-xs font-medium bg-status-success-bg text-status-success-text">
                        "Attended"
                    </span>
                }
                .into_view()
            } else {
                let busy = move || {
                    vm.marking.get() == Some(number)
                        || vm.camera_task.get() == Some(CameraTask::Period(number))
                };
                view! {
                    <div class="flex gap-2">
                        <button
                            type="button"
                            class="px-3 py-1.5 rounded-md bg-action-primary-bg text-action-primary-text text-sm disabled:opacity-50"
                            disabled=busy
                            on:click=move |_| vm.mark_with_webcam(number)
                        >
                            {move || if busy() { "Marking..." } else { "Mark Attendance (Webcam)" }}
                        </button>
                        <label class="px-3 py-1.5 rounded-md border border-border text-sm cursor-pointer">
                            "Upload"
                            <input
                                type="file"
                                accept="image/*"
                                class="hidden"
                                disabled=busy
                                on:change=move |ev| {
                                    let input = event_target::<HtmlInputElement>(&ev);
                                    if let Some(file) = take_file(&input) {
                                        vm.mark_with_file(number, file);
                                    }
                                }
                            />
                        </label>
                    </div>
                }
                .into_view()
            };
            view! {
                <li class="py-3 flex flex-col sm:flex-row sm:items-center sm:justify-between gap-2">
                    <div class="text-sm">
                        <span class="font-medium text-fg">{format!("Period {}: {}", number, period.subject)}</span>
                        <span class="ml-2 text-fg-muted">{format!("{} - {}", period.start, period.end)}</span>
                    </div>
                    {action}
                </li>
            }
        })
        .collect_view()
}

fn overview(snapshot: &ProfileSnapshot) -> View {
    let percent = snapshot.today_percent();
    view! {
        <div class="text-center">
            <div class="text-4xl font-bold text-action-primary-bg">{format!("{}%", percent)}</div>
            <p class="text-sm text-fg-muted">"Today's attendance"</p>
        </div>
        <div class="w-full bg-border rounded-full h-2">
            <div class="bg-action-primary-bg h-2 rounded-full" style=format!("width: {}%", percent.min(100))></div>
        </div>
    }
    .into_view()
}

fn recent_activity(snapshot: &ProfileSnapshot) -> View {
    let recent = snapshot.recent_activity();
    if recent.is_empty() {
        return view! { <p class="text-sm text-fg-muted">"No attendance records yet."</p> }
            .into_view();
    }
    recent
        .into_iter()
        .map(|record| {
            let date = record
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "Today".into());
            let period = record
                .period
                .map(|p| format!("Period {}", p))
                .unwrap_or_else(|| "Recognition".into());
            view! {
                <div class="flex items-center justify-between py-2 border-b border-border text-sm">
                    <div>
                        <p class="font-medium text-fg">{date}</p>
                        <p class="text-fg-muted">{period} " · " {record.status.as_str()}</p>
                    </div>
                    <span class="text-fg-muted">{record.time.unwrap_or_else(|| "-".into())}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();
    let (video_ref, canvas_ref) = (vm.video_ref, vm.canvas_ref);
    let today = vm.today;
    let snapshot = move || today.get().map(|result| result.unwrap_or_default());
    let camera_class = move || {
        if vm.camera_task.get().is_some() {
            "w-full max-w-sm rounded-lg mx-auto"
        } else {
            "hidden"
        }
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-3xl font-bold text-fg">"Student Profile"</h1>
                    <p class="text-fg-muted">"Your details, face registration and today's classes"</p>
                </div>
                <video node_ref=video_ref class=camera_class autoplay=true playsinline=true muted=true></video>
                <canvas node_ref=canvas_ref class="hidden"></canvas>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <PersonalInfo vm=vm />
                    <FaceRegistration vm=vm />
                </div>
                <section class=card_class()>
                    <h2 class="text-lg font-semibold text-fg">"Today's Class Schedule & Period Attendance"</h2>
                    <FeedbackBanner messages=vm.attendance_messages />
                    <Transition fallback=move || view! { <LoadingSpinner /> }>
                        {move || snapshot().map(|data| view! {
                            <ul class="divide-y divide-border">{schedule_list(vm, &data)}</ul>
                        })}
                    </Transition>
                </section>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <section class=card_class()>
                        <h2 class="text-lg font-semibold text-fg">"Attendance Overview"</h2>
                        <Transition fallback=move || view! { <LoadingSpinner /> }>
                            {move || snapshot().map(|data| overview(&data))}
                        </Transition>
                    </section>
                    <section class=card_class()>
                        <h2 class="text-lg font-semibold text-fg">"Recent Activity"</h2>
                        <Transition fallback=move || view! { <LoadingSpinner /> }>
                            {move || snapshot().map(|data| recent_activity(&data))}
                        </Transition>
                    </section>
                </div>
            </div>
        </Layout>
    }
}
