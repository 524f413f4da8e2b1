use leptos::*;

#[component]
pub fn AdminDashboardFrame(children: Children) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-fg">"Admin Dashboard"</h1>
                <p class="mt-1 text-fg-muted">
                    "Manage students, today's schedule and attendance records."
                </p>
            </div>
            {children()}
        </div>
    }
}

#[component]
pub fn SectionCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">{title}</h2>
            {children()}
        </section>
    }
}
