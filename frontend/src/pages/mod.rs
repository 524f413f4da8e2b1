pub mod admin;
pub mod attendance;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod recognition;
pub mod signup;
pub mod students;

pub use admin::AdminPage;
pub use attendance::AttendancePage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use recognition::RecognitionPage;
pub use signup::SignupPage;
pub use students::StudentsPage;
