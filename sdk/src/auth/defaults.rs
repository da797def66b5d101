pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const MIN_PASSWORD_LENGTH: usize = 3;
pub const MAX_PASSWORD_LENGTH: usize = 100;
