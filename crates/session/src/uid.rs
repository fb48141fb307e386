use uuid::Uuid;

/// Prefix shared by every generated user identifier.
pub const UID_PREFIX: &str = "user_";

/// Generate an opaque user identifier: `user_` followed by a v4 UUID in simple form.
///
/// Unique enough for a mocked login; not a security token.
pub fn generate_uid() -> String {
    format!("{}{}", UID_PREFIX, Uuid::new_v4().simple())
}
