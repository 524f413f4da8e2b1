use super::utils::{quick_actions, stat_tiles, FEATURES};
use crate::{
    api::{Analytics, ApiClient, Role},
    components::layout::Layout,
    state::auth::use_auth,
};
use leptos::*;

#[component]
pub fn HomePanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let analytics = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.get_analytics().await }
        },
    );

    let tiles = move || {
        let loaded = match analytics.get() {
            Some(Ok(data)) => Some(data),
            Some(Err(err)) => {
                log::warn!("Failed to load analytics: {}", err);
                Some(Analytics::default())
            }
            None => None,
        };
        stat_tiles(loaded.as_ref().unwrap_or(&Analytics::default()))
            .into_iter()
            .map(|tile| {
                let value = if loaded.is_some() { tile.value } else { "...".to_string() };
                view! {
                    <div class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6">
                        <p class="text-sm font-medium text-fg-muted">{tile.label}</p>
                        <p class="text-2xl font-bold text-fg">{value}</p>
                    </div>
                }
            })
            .collect_view()
    };

    let actions = move || {
        let role = auth.get().role().unwrap_or(Role::Student);
        quick_actions(role)
            .into_iter()
            .map(|action| {
                view! {
                    <div class="bg-surface-elevated rounded-lg shadow-sm border border-border p-6">
                        <h3 class="font-semibold text-lg text-fg mb-2">{action.title}</h3>
                        <p class="text-fg-muted mb-4">{action.description}</p>
                        <a href=action.href class="inline-flex items-center px-3 py-1.5 rounded-md border border-border text-sm">
                            "Get Started →"
                        </a>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Layout>
            <section class="rounded-2xl bg-surface-muted p-8 sm:p-12 mb-12">
                <h1 class="text-4xl sm:text-5xl font-bold text-fg mb-6">
                    "Welcome to St. Francis Xavier"
                    <span class="block text-action-primary-bg">"Attendance System"</span>
                </h1>
                <p class="text-xl text-fg-muted mb-8">
                    "Face recognition for seamless student attendance tracking and management."
                </p>
                <div class="flex flex-col sm:flex-row gap-4">
                    <a href="/recognition" class="px-6 py-3 rounded-md bg-action-primary-bg text-action-primary-text font-medium">
                        "Start Recognition"
                    </a>
                    <Show when=move || !auth.get().is_admin()>
                        <a href="/profile" class="px-6 py-3 rounded-md border border-border font-medium">
                            "View Profile"
                        </a>
                    </Show>
                </div>
            </section>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                <Transition fallback=|| ()>{tiles}</Transition>
            </div>
            <section class="mb-12">
                <h2 class="text-3xl font-bold text-fg mb-6">"Quick Actions"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{actions}</div>
            </section>
            <section>
                <h2 class="text-3xl font-bold text-fg mb-6">"Features"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <div class="bg-surface-elevated rounded-lg border border-border p-6">
                                <h3 class="font-semibold text-fg mb-2">{feature.title}</h3>
                                <p class="text-sm text-fg-muted">{feature.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </Layout>
    }
}
