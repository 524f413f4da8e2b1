use super::utils::{
    empty_roster_message, filter_students, showing_summary, summarize_student, RosterSnapshot,
};
use super::view_model::{use_students_view_model, StudentsViewModel};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    layout::{ErrorMessage, FeedbackBanner, Layout, LoadingSpinner},
    period_table::{period_status_rows, PeriodTable},
    student_card::StudentCard,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SearchBox(search: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="relative max-w-md">
            <span class="absolute left-3 top-2.5 text-fg-muted" aria-hidden="true">"🔍"</span>
            <input
                type="search"
                class="w-full pl-10 pr-3 py-2 rounded-md border border-border bg-surface-elevated"
                placeholder="Search by name, roll number, or course..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn EditField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
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
fn EditStudentDialog(vm: StudentsViewModel) -> impl IntoView {
    let form = vm.edit_form;
    let pending = vm.save_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_edit();
    };

    view! {
        <Show when=move || form.is_open()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| form.close()
                ></button>
                <form
                    class="relative z-[61] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    on:submit=on_submit
                >
                    <h2 class="text-lg font-semibold text-fg">"Edit Student"</h2>
                    <EditField label="Full Name" value=form.name />
                    <EditField label="Email" value=form.email />
                    <EditField label="Roll Number" value=form.roll_number />
                    <EditField label="Course" value=form.course />
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="px-4 py-2 rounded-md bg-surface-muted text-sm font-semibold"
                            on:click=move |_| form.close()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text text-sm font-semibold disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

fn roster_view(vm: StudentsViewModel, snapshot: RosterSnapshot) -> View {
    let filtered = filter_students(&snapshot.students, &vm.search.get());
    let total = snapshot.students.len();
    if filtered.is_empty() {
        return view! {
            <EmptyState title="No students found" description=empty_roster_message(total) />
        }
        .into_view();
    }
    let summary = showing_summary(filtered.len(), total);
    let expanded = vm.expanded.get();
    let cards = filtered
        .into_iter()
        .map(|student| {
            let records = snapshot.records_for(&student.id);
            let model = summarize_student(&student, records, &snapshot.periods);
            let details = (expanded.as_deref() == Some(student.id.as_str())).then(|| {
                if snapshot.periods.is_empty() {
                    view! { <p class="text-sm text-fg-muted">"No schedule set for today."</p> }
                        .into_view()
                } else {
                    view! { <PeriodTable rows=period_status_rows(&snapshot.periods, records) /> }
                        .into_view()
                }
            });
            let id = student.id.clone();
            let on_view_details = Callback::new(move |_| vm.toggle_details(&id));
            let for_edit = student.clone();
            let on_edit = Callback::new(move |_| vm.edit_form.open(&for_edit));
            let on_delete = Callback::new(move |_| vm.pending_delete.set(Some(student.clone())));
            view! {
                <div class="space-y-2">
                    <StudentCard
                        student=model
                        on_view_details=on_view_details
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                    {details}
                </div>
            }
        })
        .collect_view();
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
        <p class="text-sm text-fg-muted text-center mt-6">{summary}</p>
    }
    .into_view()
}

#[component]
pub fn StudentsPanel() -> impl IntoView {
    let vm = use_students_view_model();
    let roster = vm.roster;
    let delete_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|student| {
                format!(
                    "Remove {} from the roster? This cannot be undone.",
                    student.name
                )
            })
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-3xl font-bold text-fg">"Students"</h1>
                    <p class="text-fg-muted">"Today's attendance for every enrolled student"</p>
                </div>
                <FeedbackBanner messages=vm.messages />
                <SearchBox search=vm.search />
                <Transition fallback=move || view! { <LoadingSpinner /> }>
                    {move || {
                        roster
                            .get()
                            .map(|result| match result {
                                Ok(snapshot) => roster_view(vm, snapshot),
                                Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            })
                    }}
                </Transition>
            </div>
            <EditStudentDialog vm=vm />
            <ConfirmDialog
                is_open=delete_open
                title="Delete Student"
                message=delete_message
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
                confirm_label="Delete"
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                destructive=true
            />
        </Layout>
    }
}
