use crate::components::{
    empty_state::EmptyState,
    period_table::{period_status_rows, PeriodTable},
    student_card::StudentCard,
};
use crate::pages::students::utils::{
    empty_roster_message, filter_students, showing_summary, summarize_student, RosterSnapshot,
};
use leptos::*;

#[component]
pub fn StudentGrid(snapshot: RosterSnapshot, #[prop(into)] search: Signal<String>) -> impl IntoView {
    move || {
        let filtered = filter_students(&snapshot.students, &search.get());
        let total = snapshot.students.len();
        if filtered.is_empty() {
            return view! {
                <EmptyState title="No students found" description=empty_roster_message(total) />
            }
            .into_view();
        }
        let summary = showing_summary(filtered.len(), total);
        let cards = filtered
            .into_iter()
            .map(|student| {
                let records = snapshot.records_for(&student.id);
                let model = summarize_student(&student, records, &snapshot.periods);
                let table = (!snapshot.periods.is_empty()).then(|| {
                    view! { <PeriodTable rows=period_status_rows(&snapshot.periods, records) /> }
                });
                view! {
                    <div class="space-y-2">
                        <StudentCard student=model />
                        {table}
                    </div>
                }
            })
            .collect_view();
        view! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
            <p class="text-sm text-fg-muted text-center">{summary}</p>
        }
        .into_view()
    }
}
