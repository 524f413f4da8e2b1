use crate::api::{AttendanceRecord, Period};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodStatusRow {
    pub period: u32,
    pub subject: String,
    pub present: bool,
    pub time: String,
}

/// One row per scheduled period with the student's mark for it.
pub fn period_status_rows(periods: &[Period], records: &[AttendanceRecord]) -> Vec<PeriodStatusRow> {
    periods
        .iter()
        .map(|period| {
            let record = records.iter().find(|r| r.period == Some(period.period));
            PeriodStatusRow {
                period: period.period,
                subject: period.subject.clone(),
                present: record.is_some(),
                time: record
                    .and_then(|r| r.time.clone())
                    .unwrap_or_else(|| "-".into()),
            }
        })
        .collect()
}

#[component]
pub fn PeriodTable(rows: Vec<PeriodStatusRow>) -> impl IntoView {
    view! {
        <table class="w-full text-sm mt-2">
            <thead>
                <tr class="text-left text-fg-muted">
                    <th class="py-1">"Period"</th>
                    <th class="py-1">"Subject"</th>
                    <th class="py-1">"Status"</th>
                    <th class="py-1">"Time"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let (label, class) = if row.present {
                            ("Present", "text-status-success-text")
                        } else {
                            ("Absent", "text-status-error-text")
                        };
                        view! {
                            <tr class="border-t border-border">
                                <td class="py-1">{row.period}</td>
                                <td class="py-1">{row.subject}</td>
                                <td class=format!("py-1 font-medium {}", class)>{label}</td>
                                <td class="py-1">{row.time}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn table_labels_each_row() {
        let html = render_to_string(move || {
            let rows = vec![
                PeriodStatusRow {
                    period: 1,
                    subject: "Maths".into(),
                    present: true,
                    time: "09:01:00".into(),
                },
                PeriodStatusRow {
                    period: 2,
                    subject: "Physics".into(),
                    present: false,
                    time: "-".into(),
                },
            ];
            view! { <PeriodTable rows=rows /> }
        });
        assert!(html.contains("Present"));
        assert!(html.contains("Absent"));
        assert!(html.contains("09:01:00"));
    }
}
