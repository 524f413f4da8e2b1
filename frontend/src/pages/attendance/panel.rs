use super::utils::{column_header, grid_cell, GridCell};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::pages::students::utils::RosterSnapshot;
use crate::pages::students::view_model::{use_polled_roster, use_roster_repository};
use leptos::*;

#[component]
pub fn AttendanceGrid(snapshot: RosterSnapshot) -> impl IntoView {
    if snapshot.periods.is_empty() {
        return view! {
            <p class="text-fg-muted">"No schedule set for today."</p>
        }
        .into_view();
    }

    let headers = snapshot
        .periods
        .iter()
        .map(|period| {
            view! {
                <th class="px-4 py-2 text-left">
                    <div class="font-semibold">{column_header(period)}</div>
                    <div class="text-xs text-fg-muted">{period.subject.clone()}</div>
                </th>
            }
        })
        .collect_view();

    let rows = snapshot
        .students
        .iter()
        .map(|student| {
            let records = snapshot.records_for(&student.id);
            let cells = snapshot
                .periods
                .iter()
                .map(|period| {
                    let cell = grid_cell(records, period);
                    let (class, time) = match &cell {
                        GridCell::Marked { time } => ("text-status-success-text", time.clone()),
                        GridCell::Missing => ("text-status-error-text", String::new()),
                    };
                    view! {
                        <td class=format!("px-4 py-2 {}", class)>
                            <span class="font-bold">{cell.symbol()}</span>
                            <span class="ml-1 text-xs">{time}</span>
                        </td>
                    }
                })
                .collect_view();
            view! {
                <tr class="border-t border-border">
                    <td class="px-4 py-2 font-medium text-fg">{student.name.clone()}</td>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="overflow-x-auto bg-surface-elevated rounded-lg shadow-sm border border-border">
            <table class="min-w-full text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left">"Student"</th>
                        {headers}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_view()
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let (roster, _refresh) = use_polled_roster(use_roster_repository());

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-3xl font-bold text-fg">"Today's Attendance"</h1>
                    <p class="text-fg-muted">"Per-period marks for every student, refreshed automatically"</p>
                </div>
                <Transition fallback=move || view! { <LoadingSpinner /> }>
                    {move || {
                        roster.get().map(|result| match result {
                            Ok(snapshot) => view! { <AttendanceGrid snapshot=snapshot /> }.into_view(),
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })
                    }}
                </Transition>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{AttendanceRecord, Period, PresenceStatus};
    use crate::test_support::helpers::student;
    use crate::test_support::ssr::render_to_string;
    use std::collections::HashMap;

    #[test]
    fn grid_marks_each_period() {
        let html = render_to_string(move || {
            let mut attendance = HashMap::new();
            attendance.insert(
                "s1".to_string(),
                vec![AttendanceRecord {
                    student_id: Some("s1".into()),
                    student_name: None,
                    roll_number: None,
                    date: None,
                    period: Some(1),
                    status: PresenceStatus::Present,
                    time: Some("09:01:00".into()),
                }],
            );
            let snapshot = RosterSnapshot {
                students: vec![student("s1", "Ravi Kumar", "CS01", "BCA")],
                periods: vec![
                    Period {
                        period: 1,
                        subject: "Maths".into(),
                        start: "09:00".into(),
                        end: "09:50".into(),
                    },
                    Period {
                        period: 2,
                        subject: "Physics".into(),
                        start: "10:00".into(),
                        end: "10:50".into(),
                    },
                ],
                attendance,
            };
            view! { <AttendanceGrid snapshot=snapshot /> }
        });
        assert!(html.contains("P1"));
        assert!(html.contains("Physics"));
        assert!(html.contains("Ravi Kumar"));
        assert!(html.contains("✔"));
        assert!(html.contains("09:01:00"));
        assert!(html.contains("✗"));
    }

    #[test]
    fn grid_without_periods_says_so() {
        let html = render_to_string(move || {
            view! { <AttendanceGrid snapshot=RosterSnapshot::default() /> }
        });
        assert!(html.contains("No schedule set for today."));
    }
}
