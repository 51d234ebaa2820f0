//! Navigation guard decision.
//!
//! The guard component in the web shell waits for the session to initialize
//! (fetching it if needed) and then applies [`decide`] to the target route.
//! The decision is a pure function of the target's classification and
//! whether a user is present, computed fresh on every navigation — the user
//! can log out mid-session, so nothing here may be cached.

/// How the route table classifies a navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteClass {
    /// Reachable without a user.
    pub public: bool,
    /// The login route itself.
    pub login: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    /// Authenticated users have no business on the login page; send them to
    /// the default authenticated route.
    RedirectToPosts,
}

pub fn decide(target: RouteClass, user_present: bool) -> GuardDecision {
    if target.login && user_present {
        GuardDecision::RedirectToPosts
    } else if !target.public && !user_present {
        GuardDecision::RedirectToLogin
    } else {
        GuardDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN: RouteClass = RouteClass {
        public: true,
        login: true,
    };
    const PROTECTED: RouteClass = RouteClass {
        public: false,
        login: false,
    };

    #[test]
    fn anonymous_on_protected_route_goes_to_login() {
        assert_eq!(decide(PROTECTED, false), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn anonymous_on_login_route_is_allowed() {
        assert_eq!(decide(LOGIN, false), GuardDecision::Allow);
    }

    #[test]
    fn authenticated_on_login_route_goes_to_posts() {
        assert_eq!(decide(LOGIN, true), GuardDecision::RedirectToPosts);
    }

    #[test]
    fn authenticated_on_protected_route_is_allowed() {
        assert_eq!(decide(PROTECTED, true), GuardDecision::Allow);
    }

    #[test]
    fn public_non_login_route_never_redirects() {
        let public = RouteClass {
            public: true,
            login: false,
        };
        assert_eq!(decide(public, false), GuardDecision::Allow);
        assert_eq!(decide(public, true), GuardDecision::Allow);
    }
}
