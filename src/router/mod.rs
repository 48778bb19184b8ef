//! Console route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views are declared once in [`ROUTES`]. Before every navigation the host
//! asks [`RouteGuard::navigate`] whether to show the target; anonymous
//! sessions are sent to `/login` for any route that requires auth. The
//! attempted destination is not remembered.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

mod table;

pub use table::{ROUTES, RouteRecord, View};

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::navigate::{LOGIN_PATH, Navigator};
use crate::session::{SessionContext, SessionState};

// =============================================================================
// META
// =============================================================================

/// Meta as declared on one route record; unset fields inherit from the parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclaredMeta {
    pub requires_auth: Option<bool>,
    pub title: Option<&'static str>,
    pub parent_menu: Option<&'static str>,
}

/// Effective meta of a matched route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub title: Option<&'static str>,
    pub parent_menu: Option<&'static str>,
}

impl DeclaredMeta {
    fn merged_over(self, parent: DeclaredMeta) -> DeclaredMeta {
        DeclaredMeta {
            requires_auth: self.requires_auth.or(parent.requires_auth),
            title: self.title.or(parent.title),
            parent_menu: self.parent_menu.or(parent.parent_menu),
        }
    }

    fn effective(self) -> RouteMeta {
        RouteMeta {
            requires_auth: self.requires_auth.unwrap_or(false),
            title: self.title,
            parent_menu: self.parent_menu,
        }
    }
}

// =============================================================================
// MATCHING
// =============================================================================

/// A concrete path resolved against [`ROUTES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: Option<&'static str>,
    pub view: View,
    /// Layout view wrapping `view`, when the route is nested.
    pub layout: Option<View>,
    pub meta: RouteMeta,
    pub params: BTreeMap<&'static str, String>,
}

/// Resolve `path` (query and fragment ignored) to its route.
#[must_use]
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    resolve_in(ROUTES, &[], DeclaredMeta::default(), None, &segments)
}

fn resolve_in(
    records: &'static [RouteRecord],
    prefix: &[&'static str],
    inherited: DeclaredMeta,
    layout: Option<View>,
    segments: &[&str],
) -> Option<RouteMatch> {
    for record in records {
        let mut pattern = prefix.to_vec();
        pattern.extend(record.path.split('/').filter(|s| !s.is_empty()));
        let meta = record.meta.merged_over(inherited);

        if !record.children.is_empty() {
            if let Some(found) = resolve_in(record.children, &pattern, meta, Some(record.view), segments) {
                return Some(found);
            }
            continue;
        }

        if let Some(params) = match_segments(&pattern, segments) {
            return Some(RouteMatch { name: record.name, view: record.view, layout, meta: meta.effective(), params });
        }
    }
    None
}

fn match_segments(pattern: &[&'static str], segments: &[&str]) -> Option<BTreeMap<&'static str, String>> {
    if pattern.len() != segments.len() {
        return None;
    }
    let mut params = BTreeMap::new();
    for (&expected, &actual) in pattern.iter().zip(segments) {
        match expected.strip_prefix(':') {
            Some(name) => {
                params.insert(name, actual.to_owned());
            }
            None if expected == actual => {}
            None => return None,
        }
    }
    Some(params)
}

// =============================================================================
// GUARD
// =============================================================================

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decision table keyed by session state and the route's auth requirement.
#[must_use]
pub fn decide(state: SessionState, requires_auth: bool) -> GuardDecision {
    match (state, requires_auth) {
        (SessionState::Anonymous, true) => GuardDecision::Redirect(LOGIN_PATH),
        _ => GuardDecision::Proceed,
    }
}

/// Navigation-time authorization check. Reads the session, never writes it.
#[derive(Clone)]
pub struct RouteGuard {
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    pub fn new(session: SessionContext, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    #[must_use]
    pub fn evaluate(&self, meta: &RouteMeta) -> GuardDecision {
        decide(self.session.state(), meta.requires_auth)
    }

    /// Evaluate navigation to `path` and ask the navigator to redirect when denied.
    /// Paths outside the table carry no meta and always proceed.
    pub fn navigate(&self, path: &str) -> GuardDecision {
        let meta = resolve(path).map(|found| found.meta).unwrap_or_default();
        let decision = self.evaluate(&meta);
        if let GuardDecision::Redirect(target) = decision {
            tracing::debug!(path, target, "navigation denied for anonymous session");
            self.navigator.redirect(target);
        }
        decision
    }
}
