//! Role-based route guarding. Every decision is made synchronously from
//! locally decoded claims; per-request authorization stays server-side.

use crate::models::role::Role;
use crate::token::store::TokenStore;
use std::fmt::Display;
use tracing::debug;

/// `Route` is a navigable destination within the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    AdminDashboard,
    AgentDashboard,
    CustomerDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::AdminDashboard => "/admin",
            Route::AgentDashboard => "/agent",
            Route::CustomerDashboard => "/customer",
        }
    }

    /// The dashboard registered for the provided role.
    pub fn dashboard_for(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminDashboard,
            Role::Agent => Route::AgentDashboard,
            Role::Customer => Route::CustomerDashboard,
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// `AccessDecision` is the outcome of one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The view may mount.
    Allow,
    /// The view must not mount; navigate to the carried route instead.
    Redirect(Route),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// `RouteGuard` gates entry into role-scoped views using the claims of the
/// stored token.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    store: TokenStore,
}

impl RouteGuard {
    pub fn new(store: TokenStore) -> Self {
        Self { store }
    }

    /// Entry check for any authenticated view, regardless of role.
    pub fn require_authenticated(&self) -> AccessDecision {
        if self.store.is_authenticated() {
            AccessDecision::Allow
        } else {
            debug!("Unauthenticated navigation attempt, redirecting to login");
            AccessDecision::Redirect(Route::Login)
        }
    }

    /// Entry check for guest-only views such as login and signup. A signed
    /// in user is bounced to their own dashboard instead.
    pub fn require_guest(&self) -> AccessDecision {
        if self.store.token().is_none() {
            AccessDecision::Allow
        } else {
            AccessDecision::Redirect(self.redirect_for_role())
        }
    }

    /// Entry check for a role-scoped view. A mismatched role is redirected
    /// to the caller's own dashboard rather than a dead-end page; the role
    /// claim is trusted for routing only.
    pub fn require_role(&self, required: Role) -> AccessDecision {
        let Some(role) = self.store.role() else {
            debug!("No resolvable role, redirecting to login");
            return AccessDecision::Redirect(Route::Login);
        };

        if role == required {
            AccessDecision::Allow
        } else {
            debug!("Role {role} denied entry to {required} view");
            AccessDecision::Redirect(Route::dashboard_for(role))
        }
    }

    /// The dashboard matching the current role, or the login entry point
    /// when no role is resolvable.
    pub fn redirect_for_role(&self) -> Route {
        match self.store.role() {
            Some(role) => Route::dashboard_for(role),
            None => Route::Login,
        }
    }

    /// Where to navigate after logging out: the public landing page.
    pub fn redirect_after_logout(&self) -> Route {
        Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn store_with_role(role: &str) -> TokenStore {
        let payload = format!(r#"{{"role":"{role}"}}"#);
        let store = TokenStore::in_memory();
        store.set_token(&format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload)));
        store
    }

    #[test]
    fn should_allow_matching_role() {
        let guard = RouteGuard::new(store_with_role("ADMIN"));
        assert_eq!(guard.require_role(Role::Admin), AccessDecision::Allow);
    }

    #[test]
    fn should_redirect_mismatched_role_to_own_dashboard() {
        let pairs = [
            (Role::Admin, Role::Agent, Route::AdminDashboard),
            (Role::Admin, Role::Customer, Route::AdminDashboard),
            (Role::Agent, Role::Admin, Route::AgentDashboard),
            (Role::Agent, Role::Customer, Route::AgentDashboard),
            (Role::Customer, Role::Admin, Route::CustomerDashboard),
            (Role::Customer, Role::Agent, Route::CustomerDashboard),
        ];
        for (current, required, own_dashboard) in pairs {
            let guard = RouteGuard::new(store_with_role(&current.to_string()));
            assert_eq!(
                guard.require_role(required),
                AccessDecision::Redirect(own_dashboard),
                "current: {current}, required: {required}"
            );
        }
    }

    #[test]
    fn should_redirect_unauthenticated_to_login() {
        let guard = RouteGuard::new(TokenStore::in_memory());
        assert_eq!(
            guard.require_role(Role::Admin),
            AccessDecision::Redirect(Route::Login)
        );
        assert_eq!(
            guard.require_authenticated(),
            AccessDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn should_redirect_malformed_token_to_login() {
        let store = TokenStore::in_memory();
        store.set_token("a.b");
        let guard = RouteGuard::new(store);
        assert_eq!(
            guard.require_role(Role::Customer),
            AccessDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn should_admit_admin_token_from_wire_format() {
        let store = TokenStore::in_memory();
        store.set_token("abc.eyJyb2xlIjoiQURNSU4iLCJleHAiOjk5OTk5OTk5OTl9.sig");
        let guard = RouteGuard::new(store.clone());
        assert!(guard.require_role(Role::Admin).is_allowed());
        assert!(!store.is_expired());
    }

    #[test]
    fn should_gate_guest_views() {
        let guard = RouteGuard::new(TokenStore::in_memory());
        assert_eq!(guard.require_guest(), AccessDecision::Allow);

        let guard = RouteGuard::new(store_with_role("AGENT"));
        assert_eq!(
            guard.require_guest(),
            AccessDecision::Redirect(Route::AgentDashboard)
        );
    }

    #[test]
    fn should_map_each_role_to_its_dashboard() {
        assert_eq!(Route::dashboard_for(Role::Admin).path(), "/admin");
        assert_eq!(Route::dashboard_for(Role::Agent).path(), "/agent");
        assert_eq!(Route::dashboard_for(Role::Customer).path(), "/customer");
    }

    #[test]
    fn should_redirect_for_role_to_login_without_identity() {
        let guard = RouteGuard::new(TokenStore::in_memory());
        assert_eq!(guard.redirect_for_role(), Route::Login);
    }

    #[test]
    fn should_land_on_the_public_home_page_after_logout() {
        let store = store_with_role("CUSTOMER");
        let guard = RouteGuard::new(store.clone());

        store.clear();
        assert_eq!(guard.redirect_after_logout(), Route::Home);
        assert_eq!(guard.redirect_after_logout().path(), "/");
        assert_eq!(guard.require_guest(), AccessDecision::Allow);
    }
}
