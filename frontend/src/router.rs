use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::{RequireRole, ADMIN_ONLY, STUDENT_ONLY},
    pages::{
        AdminPage, AttendancePage, HomePage, LoginPage, NotFoundPage, ProfilePage,
        RecognitionPage, SignupPage, StudentsPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/signup",
    "/admin",
    "/students",
    "/attendance",
    "/recognition",
    "/profile",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/login", "/signup"];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin", "/students", "/attendance"];

pub const STUDENT_ROUTE_PATHS: &[&str] = &["/profile"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="FaceAttend" />
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignupPage/>
                    <Route path="/" view=ProtectedHome/>
                    <Route path="/admin" view=ProtectedAdmin/>
                    <Route path="/students" view=ProtectedStudents/>
                    <Route path="/attendance" view=ProtectedAttendance/>
                    <Route path="/recognition" view=ProtectedRecognition/>
                    <Route path="/profile" view=ProtectedProfile/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedHome() -> impl IntoView {
    view! { <RequireRole><HomePage/></RequireRole> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireRole allowed=ADMIN_ONLY><AdminPage/></RequireRole> }
}

#[component]
fn ProtectedStudents() -> impl IntoView {
    view! { <RequireRole allowed=ADMIN_ONLY><StudentsPage/></RequireRole> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireRole allowed=ADMIN_ONLY><AttendancePage/></RequireRole> }
}

#[component]
fn ProtectedRecognition() -> impl IntoView {
    view! { <RequireRole><RecognitionPage/></RequireRole> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireRole allowed=STUDENT_ONLY><ProfilePage/></RequireRole> }
}
