//! Deployment base path and static asset locations.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/vault` when hosted
/// under a subdirectory), generated URLs are prefixed accordingly. Local
/// builds without `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router, `None` when the site is served from `/`.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

pub const LOGO: &str = "static/images/logo.webp";
pub const HOME_ILLUSTRATION: &str = "static/images/home-illustration.png";
pub const DETAILS_IMAGE: &str = "static/images/home-details-image.webp";
pub const SPEED_ICON: &str = "static/svgs/speed-icon.svg";
pub const SECURE_DATA_ICON: &str = "static/svgs/secure-data-icon.svg";
pub const SECURITY_ICON: &str = "static/svgs/security-icon.svg";
pub const REGISTER_SUCCESS_ICON: &str = "static/svgs/register-success-icon.svg";
pub const RESET_PASSWORD_SUCCESS_ICON: &str = "static/svgs/reset-password-success.svg";

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}
