use crate::components::layout::FeedbackBanner;
use crate::pages::admin::layout::SectionCard;
use crate::pages::admin::view_model::AdminViewModel;
use leptos::{ev::SubmitEvent, *};

#[component]
fn FormInput(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            <input
                type=input_type
                required=true
                class="mt-1 w-full rounded-md border border-border px-3 py-2"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn AddStudentSection(vm: AdminViewModel) -> impl IntoView {
    let form = vm.add_form;
    let pending = vm.add_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_student();
    };

    view! {
        <SectionCard title="Add Student">
            <FeedbackBanner messages=vm.add_messages />
            <form class="grid grid-cols-1 sm:grid-cols-2 gap-4" on:submit=on_submit>
                <FormInput label="Email" input_type="email" value=form.email />
                <FormInput label="Full Name" value=form.name />
                <FormInput label="Roll Number" value=form.roll_number />
                <FormInput label="Course" value=form.course />
                <div class="sm:col-span-2">
                    <button
                        type="submit"
                        class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text font-medium disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Adding..." } else { "Add Student" }}
                    </button>
                </div>
            </form>
        </SectionCard>
    }
}
