//! Navigation links and the mobile sidebar.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
}

/// Links shown in the header, the sidebar and the footer.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        title: "Login",
        href: "/login",
    },
    NavLink {
        title: "Register",
        href: "/register",
    },
    NavLink {
        title: "Blog",
        href: "#blog",
    },
];

impl NavLink {
    /// In-page anchors scroll instead of routing.
    #[must_use]
    pub fn is_anchor(&self) -> bool {
        self.href.starts_with('#')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    Open,
    #[default]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    Open,
    Close,
}

impl SidebarState {
    #[must_use]
    pub const fn apply(self, action: SidebarAction) -> Self {
        match action {
            SidebarAction::Open => Self::Open,
            SidebarAction::Close => Self::Closed,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
