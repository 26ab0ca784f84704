//! Permission tokens guarding the user resource

use super::types::Permission;

/// View the user list or a single user
pub const ACCESS_USER: &str = "access_user";
/// Create users
pub const CREATE_USER: &str = "create_user";
/// Edit other users
pub const UPDATE_USER: &str = "update_user";
/// Delete users
pub const DELETE_USER: &str = "delete_user";

/// Permissions seeded at boot
pub static DEFAULT_PERMISSIONS: [Permission; 4] = [
    Permission {
        name: ACCESS_USER,
        description: "View users",
    },
    Permission {
        name: CREATE_USER,
        description: "Create users",
    },
    Permission {
        name: UPDATE_USER,
        description: "Update users",
    },
    Permission {
        name: DELETE_USER,
        description: "Delete users",
    },
];
