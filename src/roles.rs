pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_RECRUITER: &str = "RECRUITER";
pub const ROLE_PLAYER: &str = "PLAYER";

pub const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_RECRUITER, ROLE_PLAYER];
