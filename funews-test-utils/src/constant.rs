//! Standard values used across tests.

/// Email of the administrator account configured in bootstrap tests.
pub static TEST_ADMIN_EMAIL: &str = "admin@x.com";

/// Password of the administrator account configured in bootstrap tests.
pub static TEST_ADMIN_PASSWORD: &str = "admin_password";

/// Role value of an administrator account.
pub const ADMIN_ROLE: i16 = 3;

/// Role value of a staff account.
pub const STAFF_ROLE: i16 = 1;
