use super::utils::{format_confidence, RecognitionStatus, ScanOutcome, ScanResult};
use super::view_model::{use_recognition_view_model, RecognitionViewModel};
use crate::components::layout::Layout;
use leptos::*;

fn detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <p class="text-sm font-medium text-fg-muted">{label}</p>
            <p class="text-fg font-semibold">{value}</p>
        </div>
    }
}

#[component]
pub fn ScanOutcomeCard(outcome: ScanOutcome) -> impl IntoView {
    let badge = outcome.result.badge();
    let body = match outcome.result {
        ScanResult::Recognized {
            name,
            roll_number,
            course,
            confidence,
        } => view! {
            <div class="grid grid-cols-2 gap-4">
                {detail("Name", name)}
                {detail("Roll Number", roll_number)}
                {detail("Course", course)}
                {detail("Confidence", format_confidence(confidence))}
            </div>
        }
        .into_view(),
        ScanResult::Unknown => view! {
            <div class="text-center">
                <p class="text-status-warning-text font-medium">"Unknown person detected"</p>
                <p class="text-sm text-fg-muted">"This person is not registered in the system"</p>
            </div>
        }
        .into_view(),
        ScanResult::Failed(message) => view! {
            <div class="text-center">
                <p class="text-status-error-text font-medium">"Recognition failed"</p>
                <p class="text-sm text-fg-muted">{message}</p>
                <p class="text-sm text-fg-muted">"Please try again"</p>
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <span class="px-2 py-0.5 rounded-full text-xs font-medium bg-surface-muted">{badge}</span>
                <span class="text-xs text-fg-muted">{outcome.timestamp}</span>
            </div>
            {body}
        </div>
    }
}

#[component]
fn CameraControls(vm: RecognitionViewModel) -> impl IntoView {
    view! {
        <div class="flex gap-2">
            <Show
                when=move || vm.is_scanning()
                fallback=move || view! {
                    <button
                        type="button"
                        class="flex-1 px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text font-medium"
                        on:click=move |_| vm.start()
                    >
                        "Start Scanning"
                    </button>
                }
            >
                <button
                    type="button"
                    class="flex-1 px-4 py-2 rounded-md bg-action-danger-bg text-action-danger-text font-medium"
                    on:click=move |_| vm.stop()
                >
                    "Stop Scanning"
                </button>
            </Show>
            <button
                type="button"
                class="px-4 py-2 rounded-md border border-border font-medium"
                on:click=move |_| vm.reset()
            >
                "Reset"
            </button>
        </div>
    }
}

#[component]
pub fn RecognitionPanel() -> impl IntoView {
    let vm = use_recognition_view_model();
    let (video_ref, canvas_ref) = (vm.video_ref, vm.canvas_ref);
    let video_class = move || {
        if vm.is_scanning() {
            "w-full h-full object-cover"
        } else {
            "hidden"
        }
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-3xl font-bold text-fg">"Face Recognition"</h1>
                    <p class="text-fg-muted">"Look at the camera to mark your attendance"</p>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <section class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6 space-y-4">
                        <h2 class="text-lg font-semibold text-fg">"Camera Feed"</h2>
                        <div class="relative aspect-video rounded-lg bg-surface-muted overflow-hidden flex items-center justify-center">
                            <video node_ref=video_ref class=video_class autoplay=true playsinline=true muted=true></video>
                            <Show when=move || !vm.is_scanning()>
                                <p class="text-fg-muted">"Click start to begin face recognition"</p>
                            </Show>
                            <Show when=move || vm.is_scanning()>
                                <div class="absolute bottom-3 inset-x-0 text-center text-sm text-action-primary-text">
                                    "Scanning..."
                                </div>
                            </Show>
                        </div>
                        <canvas node_ref=canvas_ref class="hidden"></canvas>
                        <CameraControls vm=vm />
                    </section>
                    <section class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6 space-y-4">
                        <h2 class="text-lg font-semibold text-fg">"Recognition Results"</h2>
                        {move || match vm.outcome.get() {
                            Some(outcome) => view! { <ScanOutcomeCard outcome=outcome /> }.into_view(),
                            None if vm.status.get() == RecognitionStatus::Scanning => view! {
                                <p class="text-fg-muted text-center py-8">"Analyzing..."</p>
                            }
                            .into_view(),
                            None => view! {
                                <div class="text-center py-8">
                                    <h3 class="text-xl font-semibold text-fg mb-2">"No Results Yet"</h3>
                                    <p class="text-fg-muted">"Start scanning to see recognition results"</p>
                                </div>
                            }
                            .into_view(),
                        }}
                    </section>
                </div>
            </div>
        </Layout>
    }
}
