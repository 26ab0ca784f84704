/// Permission entity module
pub mod permission;
/// Role entity module
pub mod role;
/// Role/permission pivot entity module
pub mod role_permission;
/// User entity module
pub mod user;
/// User/permission pivot entity module
pub mod user_permission;
/// User/role pivot entity module
pub mod user_role;
/// User session entity module
pub mod user_session;

pub use permission::Entity as Permission;
pub use role::Entity as Role;
pub use role_permission::Entity as RolePermission;
pub use user::Entity as User;
pub use user_permission::Entity as UserPermission;
pub use user_role::Entity as UserRole;
pub use user_session::Entity as UserSession;
