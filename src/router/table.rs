//! Static route declarations for the console.

use super::DeclaredMeta;

/// Page component rendered for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    ForgotPassword,
    DefaultLayout,
    Dashboard,
    UserList,
    UserDetail,
    UserAuthDetail,
    PostList,
    TagList,
}

#[derive(Debug)]
pub struct RouteRecord {
    /// Segment pattern relative to the parent; `:name` captures a segment.
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: View,
    pub meta: DeclaredMeta,
    pub children: &'static [RouteRecord],
}

const fn meta(requires_auth: Option<bool>, title: Option<&'static str>, parent_menu: Option<&'static str>) -> DeclaredMeta {
    DeclaredMeta { requires_auth, title, parent_menu }
}

const fn leaf(path: &'static str, name: &'static str, view: View, meta: DeclaredMeta) -> RouteRecord {
    RouteRecord { path, name: Some(name), view, meta, children: &[] }
}

const NO_META: DeclaredMeta = meta(None, None, None);

pub static ROUTES: &[RouteRecord] = &[
    leaf("/login", "login", View::Login, meta(Some(false), None, None)),
    leaf("/forgot-password", "forgot-password", View::ForgotPassword, meta(Some(false), None, None)),
    RouteRecord {
        path: "/",
        name: None,
        view: View::DefaultLayout,
        meta: meta(Some(true), None, None),
        children: &[
            leaf("", "dashboard", View::Dashboard, NO_META),
            leaf("users", "users", View::UserList, meta(None, Some("User Management"), None)),
            leaf(
                "users/detail/:userId",
                "userDetail",
                View::UserDetail,
                meta(None, Some("User Detail"), Some("users")),
            ),
            leaf(
                "users/auth/:userId",
                "userAuthDetail",
                View::UserAuthDetail,
                meta(None, Some("User Verification Detail"), Some("users")),
            ),
            leaf("posts", "posts", View::PostList, NO_META),
            leaf("tags", "tags", View::TagList, NO_META),
        ],
    },
];
