pub mod page;
pub mod session;

pub use page::{PageSnapshot, SitePage};
pub use session::{BrowserConfig, BrowserKind, new_session};
