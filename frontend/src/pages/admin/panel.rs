use super::{
    components::{
        add_student::AddStudentSection,
        schedule_editor::{ScheduleEditor, TodaySchedule},
        student_grid::StudentGrid,
    },
    layout::{AdminDashboardFrame, SectionCard},
    utils::admin_stat_tiles,
    view_model::use_admin_view_model,
};
use crate::api::Analytics;
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use crate::pages::students::SearchBox;
use leptos::*;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let vm = use_admin_view_model();
    let analytics = vm.analytics;
    let roster = vm.roster;
    let search: Signal<String> = vm.search.into();

    let stats = move || {
        let data = match analytics.get() {
            Some(Ok(data)) => data,
            Some(Err(err)) => {
                log::warn!("Failed to load analytics: {}", err);
                Analytics::default()
            }
            None => Analytics::default(),
        };
        admin_stat_tiles(&data)
            .into_iter()
            .map(|tile| {
                view! {
                    <div class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6">
                        <p class="text-sm font-medium text-fg-muted">{tile.label}</p>
                        <p class="text-2xl font-bold text-fg">{tile.value}</p>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Layout>
            <AdminDashboardFrame>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    <Transition fallback=move || view! { <LoadingSpinner /> }>{stats}</Transition>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <AddStudentSection vm=vm />
                    <ScheduleEditor vm=vm />
                </div>
                <SectionCard title="Today's Schedule">
                    <Transition fallback=move || view! { <LoadingSpinner /> }>
                        {move || {
                            roster.get().map(|result| {
                                let periods = result.map(|snapshot| snapshot.periods).unwrap_or_default();
                                view! { <TodaySchedule periods=periods /> }
                            })
                        }}
                    </Transition>
                </SectionCard>
                <SectionCard title="Students">
                    <SearchBox search=vm.search />
                    <Transition fallback=move || view! { <LoadingSpinner /> }>
                        {move || {
                            roster.get().map(|result| match result {
                                Ok(snapshot) => view! { <StudentGrid snapshot=snapshot search=search /> }.into_view(),
                                Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            })
                        }}
                    </Transition>
                </SectionCard>
            </AdminDashboardFrame>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_panel_renders_sections() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <AdminPanel /> }
        });
        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("Add Student"));
        assert!(html.contains("Set Today&#x27;s Schedule") || html.contains("Set Today's Schedule"));
        assert!(html.contains("Add Period"));
        assert!(html.contains("Search by name, roll number, or course"));
    }
}
