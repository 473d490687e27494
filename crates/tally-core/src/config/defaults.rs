//! Serde default-value functions for config fields.

pub(super) fn default_true() -> bool {
    true
}
pub(super) fn default_data_dir() -> String {
    "~/.tally".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_language() -> String {
    "en".to_string()
}
pub(super) fn default_fresh_secs() -> u64 {
    300
}
pub(super) fn default_retain_secs() -> u64 {
    600
}
pub(super) fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}
pub(super) fn default_api_timeout_secs() -> u64 {
    15
}
