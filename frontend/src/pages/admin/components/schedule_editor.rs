use crate::api::Period;
use crate::components::layout::FeedbackBanner;
use crate::pages::admin::layout::SectionCard;
use crate::pages::admin::utils::{RowField, ScheduleDraft};
use crate::pages::admin::view_model::AdminViewModel;
use leptos::{ev::SubmitEvent, *};

fn row_input(
    draft: ScheduleDraft,
    index: usize,
    field: RowField,
    input_type: &'static str,
    value: String,
) -> impl IntoView {
    let placeholder = match field {
        RowField::Subject => "Subject",
        RowField::Start => "Start",
        RowField::End => "End",
    };
    view! {
        <input
            type=input_type
            placeholder=placeholder
            class="rounded-md border border-border px-3 py-2"
            prop:value=value
            on:change=move |ev| draft.update(index, field, event_target_value(&ev))
        />
    }
}

#[component]
pub fn ScheduleEditor(vm: AdminViewModel) -> impl IntoView {
    let draft = vm.schedule;
    let pending = vm.schedule_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_schedule();
    };

    let rows = move || {
        draft
            .rows
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                view! {
                    <div class="grid grid-cols-[auto_1fr_auto_auto_auto] gap-2 items-center">
                        <span class="text-sm font-medium text-fg-muted">{format!("P{}", index + 1)}</span>
                        {row_input(draft, index, RowField::Subject, "text", row.subject)}
                        {row_input(draft, index, RowField::Start, "time", row.start)}
                        {row_input(draft, index, RowField::End, "time", row.end)}
                        <button
                            type="button"
                            class="px-2 py-1 rounded-md text-sm text-status-error-text disabled:opacity-40"
                            disabled=move || !draft.can_remove()
                            on:click=move |_| draft.remove_row(index)
                        >
                            "Remove"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <SectionCard title="Set Today's Schedule">
            <FeedbackBanner messages=vm.schedule_messages />
            <form class="space-y-3" on:submit=on_submit>
                {rows}
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="px-3 py-2 rounded-md border border-border text-sm"
                        on:click=move |_| draft.add_row()
                    >
                        "Add Period"
                    </button>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text text-sm font-medium disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Saving..." } else { "Save Schedule" }}
                    </button>
                </div>
            </form>
        </SectionCard>
    }
}

#[component]
pub fn TodaySchedule(periods: Vec<Period>) -> impl IntoView {
    if periods.is_empty() {
        return view! { <p class="text-sm text-fg-muted">"No schedule set for today."</p> }
            .into_view();
    }
    view! {
        <ul class="divide-y divide-border">
            {periods
                .into_iter()
                .map(|period| view! {
                    <li class="py-2 flex justify-between text-sm">
                        <span class="font-medium text-fg">
                            {format!("Period {}: {}", period.period, period.subject)}
                        </span>
                        <span class="text-fg-muted">{format!("{} - {}", period.start, period.end)}</span>
                    </li>
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}
