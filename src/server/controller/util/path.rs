//! Canonical paths handlers redirect to after a successful POST.

pub const INDEX_PATH: &str = "/api/events";

/// Target of the logout redirect
pub const HOME_PATH: &str = "/";

pub fn registered_path(url_name: &str, helper_id: i32) -> String {
    format!("/api/events/{}/registered/{}", url_name, helper_id)
}

pub fn edit_event_path(url_name: &str) -> String {
    format!("/api/admin/events/{}/edit", url_name)
}

pub fn jobs_and_shifts_path(url_name: &str) -> String {
    format!("/api/admin/events/{}/jobs", url_name)
}

pub fn helpers_path(url_name: &str) -> String {
    format!("/api/admin/events/{}/helpers", url_name)
}

pub fn job_helpers_path(url_name: &str, job_id: i32) -> String {
    format!("/api/admin/events/{}/jobs/{}/helpers", url_name, job_id)
}
