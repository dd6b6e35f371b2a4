//! Asset URLs for the carousel images, honouring the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/facts` when the site is served
/// from a subdirectory), relative image paths are prefixed with it. Absolute URLs
/// and `data:` URIs pass through untouched.
#[must_use]
pub fn asset_url(path: &str) -> String {
    asset_url_with_base(path, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// CSS `url(...)` value for an image path.
#[must_use]
pub fn css_url(path: &str) -> String {
    format!("url({})", asset_url(path))
}

fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || path.starts_with("data:") || path.contains("://")
}

fn asset_url_with_base(path: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() || is_absolute(path) {
        return path.to_string();
    }
    format!("{base}/{}", path.trim_start_matches("./"))
}
