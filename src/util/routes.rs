//! Application route table.

/// Every navigable destination in the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Login,
    AuthCallback,
    Dashboard,
    Jobs,
    Events,
    Management,
    Profile,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Login => "/login",
            AppRoute::AuthCallback => "/auth/callback",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Jobs => "/jobs",
            AppRoute::Events => "/events",
            AppRoute::Management => "/management",
            AppRoute::Profile => "/profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Landing => "Home",
            AppRoute::Login => "Sign in",
            AppRoute::AuthCallback => "Signing in",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Jobs => "Jobs",
            AppRoute::Events => "Events",
            AppRoute::Management => "Management",
            AppRoute::Profile => "Profile",
        }
    }
}
