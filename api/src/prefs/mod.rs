pub mod display_preference;
pub mod user_prefs;

/// Reads a boolean flag value: "true" (any case) or "1".
pub(crate) fn is_truthy(val: &str) -> bool {
    val.eq_ignore_ascii_case("true") || val == "1"
}
