use crate::api::{PresenceStatus, Student};
use leptos::*;

/// Everything a roster card shows for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentCardModel {
    pub id: String,
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub year: String,
    pub department: String,
    pub avatar: Option<String>,
    pub attendance_rate: u32,
    pub total_classes: usize,
    pub attended_classes: usize,
    pub last_attendance: String,
    pub status: PresenceStatus,
}

impl StudentCardModel {
    /// A card with no attendance figures; the roster fills them in.
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            name: student.name.clone(),
            roll_number: student.roll_number_or_empty().to_string(),
            email: student.email.clone(),
            phone: student.phone.clone().unwrap_or_else(|| "N/A".into()),
            course: student.course_or_empty().to_string(),
            year: student.year.clone().unwrap_or_else(|| "1st".into()),
            department: student
                .department
                .clone()
                .unwrap_or_else(|| "Computer Science".into()),
            avatar: student.avatar.clone().filter(|a| !a.trim().is_empty()),
            attendance_rate: 0,
            total_classes: 0,
            attended_classes: 0,
            last_attendance: "Never".into(),
            status: PresenceStatus::Absent,
        }
    }
}

/// First letters of the first two words, e.g. "Ravi Kumar" -> "RK".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn status_class(status: PresenceStatus) -> &'static str {
    match status {
        PresenceStatus::Present => "bg-status-success-bg text-status-success-text",
        PresenceStatus::Late => "bg-status-warning-bg text-status-warning-text",
        PresenceStatus::Absent => "bg-status-error-bg text-status-error-text",
    }
}

fn status_icon(status: PresenceStatus) -> &'static str {
    match status {
        PresenceStatus::Present => "✔",
        PresenceStatus::Absent => "✗",
        PresenceStatus::Late => "◷",
    }
}

#[component]
pub fn StudentCard(
    student: StudentCardModel,
    #[prop(optional)] on_edit: Option<Callback<()>>,
    #[prop(optional)] on_view_details: Option<Callback<()>>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let avatar = match student.avatar.clone() {
        Some(src) => view! {
            <img src=src alt=student.name.clone() class="w-full h-full rounded-full object-cover" />
        }
        .into_view(),
        None => initials(&student.name).into_view(),
    };
    let rate_width = format!("width: {}%", student.attendance_rate.min(100));

    view! {
        <div class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6" data-student-id=student.id.clone()>
            <div class="flex items-start space-x-4">
                <div class="w-16 h-16 rounded-full bg-action-primary-bg flex items-center justify-center text-action-primary-text font-bold text-lg shrink-0">
                    {avatar}
                </div>
                <div class="flex-1 min-w-0">
                    <div class="flex items-center justify-between mb-2">
                        <h3 class="font-semibold text-lg text-fg truncate">{student.name.clone()}</h3>
                        <span class=format!("inline-flex items-center gap-1 px-2 py-0.5 rounded-full text-xs font-medium {}", status_class(student.status))>
                            {status_icon(student.status)} " " {student.status.as_str()}
                        </span>
                    </div>
                    <div class="space-y-1 text-sm text-fg-muted">
                        <div>"Roll: " {student.roll_number.clone()}</div>
                        <div>{format!("{} - {} Year", student.course, student.year)}</div>
                        <div class="truncate">{student.email.clone()}</div>
                        <div>{student.phone.clone()}</div>
                    </div>
                    <div class="mt-4 p-3 rounded-lg bg-surface-muted">
                        <div class="flex items-center justify-between mb-2">
                            <span class="text-sm font-medium">"Attendance Rate"</span>
                            <span class="text-sm font-bold text-action-primary-bg">
                                {format!("{}%", student.attendance_rate)}
                            </span>
                        </div>
                        <div class="w-full bg-border rounded-full h-2">
                            <div class="bg-action-primary-bg h-2 rounded-full" style=rate_width></div>
                        </div>
                        <div class="flex justify-between text-xs text-fg-muted mt-2">
                            <span>{format!("{}/{} classes", student.attended_classes, student.total_classes)}</span>
                            <span>"Last: " {student.last_attendance.clone()}</span>
                        </div>
                    </div>
                    <div class="flex space-x-2 mt-4">
                        {on_view_details.map(|cb| view! {
                            <button
                                type="button"
                                class="flex-1 px-3 py-1.5 rounded-md border border-border text-sm hover:bg-action-ghost-bg-hover"
                                on:click=move |_| cb.call(())
                            >
                                "View Details"
                            </button>
                        })}
                        {on_edit.map(|cb| view! {
                            <button
                                type="button"
                                class="flex-1 px-3 py-1.5 rounded-md bg-surface-muted text-sm hover:bg-action-ghost-bg-hover"
                                on:click=move |_| cb.call(())
                            >
                                "Edit"
                            </button>
                        })}
                        {on_delete.map(|cb| view! {
                            <button
                                type="button"
                                class="px-3 py-1.5 rounded-md bg-action-danger-bg text-action-danger-text text-sm hover:bg-action-danger-bg-hover"
                                on:click=move |_| cb.call(())
                            >
                                "Delete"
                            </button>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::student;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn card_renders_figures_and_initials() {
        let html = render_to_string(move || {
            let mut model =
                StudentCardModel::from_student(&student("s1", "Ravi Kumar", "CS01", "BCA"));
            model.attendance_rate = 50;
            model.attended_classes = 1;
            model.total_classes = 2;
            model.status = PresenceStatus::Present;
            view! { <StudentCard student=model /> }
        });
        assert!(html.contains("RK"));
        assert!(html.contains("Roll: "));
        assert!(html.contains("CS01"));
        assert!(html.contains("BCA - 1st Year"));
        assert!(html.contains("50%"));
        assert!(html.contains("1&#x2F;2 classes"));
        assert!(html.contains("present"));
        assert!(!html.contains("Delete"));
    }

    #[test]
    fn card_shows_only_wired_actions() {
        let html = render_to_string(move || {
            let model = StudentCardModel::from_student(&student("s1", "Ravi", "CS01", "BCA"));
            view! {
                <StudentCard
                    student=model
                    on_edit=Callback::new(|_| ())
                    on_delete=Callback::new(|_| ())
                />
            }
        });
        assert!(html.contains("Edit"));
        assert!(html.contains("Delete"));
        assert!(!html.contains("View Details"));
    }
}
