//! Naming helpers for target pods and services.

/// App label shared by every target pod and its headless service.
pub const TARGET_APP_NAME: &str = "ballast-target";

/// Qualified in-cluster DNS name of a target replica behind the headless
/// service, e.g. `ballast-target-0.ballast-target.ballast-system`.
pub fn qualified_headless_service_name(replica: u32, namespace: &str) -> String {
    format!("{TARGET_APP_NAME}-{replica}.{TARGET_APP_NAME}.{namespace}")
}
