//! MegaVault core
//!
//! Platform-agnostic logic for the MegaVault marketing and account pages.
//! Everything here is pure state and lookup tables; the browser shell lives
//! in `megavault-web`.

pub mod blog;
pub mod forms;
pub mod layout;
pub mod page_window;
pub mod pagination;
pub mod routes;
pub mod scroll;
pub mod styles;
pub mod viewport;
pub mod wizard;

pub use blog::{BlogCatalog, BlogPost, CatalogError};
pub use forms::{
    FieldValue, ForgotPasswordForm, FormError, FormRecord, LoginForm, RegisterForm,
    ResetPasswordForm,
};
pub use layout::{NAV_LINKS, NavLink, SidebarAction, SidebarState};
pub use page_window::{PageWindow, WINDOW_WIDTH, clamp_current_page, page_window};
pub use pagination::{
    PaginationAction, PaginationState, Rounding, page_bounds, page_slice, total_pages,
};
pub use routes::{AppPath, TokenDecision, TokenGate, parse_token};
pub use scroll::{ScrollTracker, header_hidden};
pub use styles::{
    ButtonSize, ButtonVariant, CheckboxSize, CheckboxVariant, FontSize, InputVariant, LabelColor,
    Radius, compose,
};
pub use viewport::{BREAKPOINTS, Breakpoint, page_size_for_width};
pub use wizard::{MAX_STEP, RegisterStep, WizardAction};

/// Copyright line shared by the footer and the sidebar.
pub const COPYRIGHT: &str = "Copyright © MegaVault 2024";

/// Brand name rendered next to the logo.
pub const BRAND: &str = "MegaVault";
