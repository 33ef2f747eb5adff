/// Email used for fixture accounts unless a test needs a second one.
pub const TEST_EMAIL: &str = "test@example.com";
/// Display name of fixture accounts.
pub const TEST_NAME: &str = "Test User";
/// Plain text password every fixture account is created with.
pub const TEST_PASSWORD: &str = "correct horse battery staple";
/// Session cookie signing secret, long enough to derive a cookie key from.
pub const TEST_SESSION_SECRET: &str =
    "test-session-secret-0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
