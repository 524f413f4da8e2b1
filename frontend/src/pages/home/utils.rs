use crate::api::{Analytics, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Face Recognition",
        description: "Camera-based recognition for seamless attendance tracking",
    },
    Feature {
        title: "Student Management",
        description: "Student profiles with per-period attendance figures",
    },
    Feature {
        title: "Analytics Dashboard",
        description: "Live attendance figures and reports for administrators",
    },
    Feature {
        title: "Secure & Reliable",
        description: "Token-based sign-in restricted to college accounts",
    },
];

pub fn stat_tiles(analytics: &Analytics) -> Vec<StatTile> {
    vec![
        StatTile {
            label: "Active Students",
            value: analytics.total_students.to_string(),
        },
        StatTile {
            label: "Classes Today",
            value: analytics.active_classes.to_string(),
        },
        StatTile {
            label: "Attendance Rate",
            value: analytics.attendance_rate.clone(),
        },
        StatTile {
            label: "Recognition Accuracy",
            value: analytics.recognition_accuracy.clone(),
        },
    ]
}

pub fn quick_actions(role: Role) -> Vec<QuickAction> {
    match role {
        Role::Admin => vec![
            QuickAction {
                title: "Manage Students",
                description: "Add, edit, and manage student profiles",
                href: "/students",
            },
            QuickAction {
                title: "View Analytics",
                description: "Check attendance reports and statistics",
                href: "/admin",
            },
            QuickAction {
                title: "Face Recognition",
                description: "Test the face recognition system",
                href: "/recognition",
            },
        ],
        Role::Student => vec![
            QuickAction {
                title: "Mark Attendance",
                description: "Use face recognition to mark your attendance",
                href: "/recognition",
            },
            QuickAction {
                title: "View Profile",
                description: "Check your attendance history and profile",
                href: "/profile",
            },
        ],
    }
}
