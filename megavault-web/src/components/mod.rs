pub mod auth_card;
pub mod blog_card;
pub mod blog_pagination;
pub mod icons;
pub mod sidebar;
pub mod site_footer;
pub mod site_header;
pub mod success_panel;
pub mod ui;

pub use auth_card::AuthCard;
pub use blog_card::BlogCard;
pub use blog_pagination::BlogPagination;
pub use icons::{Icon, IconKind};
pub use sidebar::SidebarMenu;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
pub use success_panel::SuccessPanel;
