use crate::error::AppError;
use crate::middleware::member::MemberContext;
use crate::models::role::{ChairPosition, Role};

/// Root of the member dashboard. Matches only exactly under the shared-page
/// rule, so its sub-paths are not shared by default.
pub const DASHBOARD_ROOT: &str = "/dashboard";

/// Pages every authenticated member may view.
pub const SHARED_PAGES: &[&str] = &[
    DASHBOARD_ROOT,
    "/dashboard/profile",
    "/dashboard/calendar",
    "/dashboard/directory",
];

/// Pages restricted to exec roles unless a chair grants them.
pub const EXEC_PAGES: &[&str] = &[
    "/dashboard/members",
    "/dashboard/attendance",
    "/dashboard/blog",
    "/dashboard/announcements",
    "/dashboard/media",
    "/dashboard/recruitment",
    "/dashboard/alumni",
    "/dashboard/events",
    "/dashboard/historian",
    "/dashboard/settings",
];

/// Extra route prefixes granted by each chair position.
pub const CHAIR_PAGE_ACCESS: &[(ChairPosition, &[&str])] = &[
    (ChairPosition::Recruitment, &["/dashboard/recruitment"]),
    (ChairPosition::Alumni, &["/dashboard/alumni"]),
    (ChairPosition::Social, &["/dashboard/events"]),
    (
        ChairPosition::SocialMedia,
        &["/dashboard/media", "/dashboard/blog"],
    ),
    (ChairPosition::Brotherhood, &["/dashboard/attendance"]),
    (
        ChairPosition::Historian,
        &["/dashboard/historian", "/dashboard/media"],
    ),
];

/// Static route table gating dashboard pages by role and chair.
#[derive(Debug)]
pub struct RouteAccessPolicy {
    pub root: &'static str,
    pub shared_pages: &'static [&'static str],
    pub exec_pages: &'static [&'static str],
    pub chair_pages: &'static [(ChairPosition, &'static [&'static str])],
}

static DASHBOARD_POLICY: RouteAccessPolicy = RouteAccessPolicy {
    root: DASHBOARD_ROOT,
    shared_pages: SHARED_PAGES,
    exec_pages: EXEC_PAGES,
    chair_pages: CHAIR_PAGE_ACCESS,
};

/// `true` when `page` is `base` itself or a path underneath it.
///
/// Every rule tier goes through this so shared, chair and exec checks agree
/// on what "under" means: `/dashboard/media2` is not under `/dashboard/media`.
pub fn matches_route(page: &str, base: &str) -> bool {
    page == base
        || page
            .strip_prefix(base)
            .is_some_and(|rest| rest.starts_with('/'))
}

impl RouteAccessPolicy {
    /// The process-wide dashboard table. Read-only for the life of the process.
    pub fn dashboard() -> &'static RouteAccessPolicy {
        &DASHBOARD_POLICY
    }

    /// Route prefixes granted to `chair`, or `None` if the table has no entry.
    pub fn chair_grants(&self, chair: ChairPosition) -> Option<&'static [&'static str]> {
        self.chair_pages
            .iter()
            .find(|(c, _)| *c == chair)
            .map(|(_, pages)| *pages)
    }

    fn chair_grants_str(&self, chair: Option<&str>) -> Option<&'static [&'static str]> {
        let chair = chair.filter(|c| !c.is_empty())?.parse().ok()?;
        self.chair_grants(chair)
    }

    pub fn is_chair_holder(&self, chair: Option<&str>) -> bool {
        self.chair_grants_str(chair).is_some()
    }

    fn is_shared(&self, page: &str) -> bool {
        self.shared_pages.iter().any(|&shared| {
            if shared == self.root {
                page == shared
            } else {
                matches_route(page, shared)
            }
        })
    }

    /// Decide whether a member may view `page`. First matching rule wins:
    ///
    /// 1. shared pages (root by exact match only)
    /// 2. exec roles see everything
    /// 3. chair grants, exact or sub-path
    /// 4. exec-only pages are denied
    /// 5. anything unlisted is allowed
    ///
    /// Rule 5 is a permissive default: a new sensitive route is reachable by
    /// every member until it is added to `exec_pages`.
    pub fn can_access_page(&self, role: &str, chair: Option<&str>, page: &str) -> bool {
        if self.is_shared(page) {
            return true;
        }
        if is_exec_role(role) {
            return true;
        }
        if let Some(grants) = self.chair_grants_str(chair) {
            if grants.iter().any(|base| matches_route(page, base)) {
                return true;
            }
        }
        if self.exec_pages.iter().any(|base| matches_route(page, base)) {
            return false;
        }
        true
    }

    /// Every route prefix the table names, in table order without duplicates.
    pub fn known_pages(&self) -> Vec<&'static str> {
        let mut pages: Vec<&'static str> = Vec::new();
        let shared = self.shared_pages.iter().copied();
        let exec = self.exec_pages.iter().copied();
        let chair = self
            .chair_pages
            .iter()
            .flat_map(|&(_, grants)| grants.iter().copied());
        for page in shared.chain(exec).chain(chair) {
            if !pages.contains(&page) {
                pages.push(page);
            }
        }
        pages
    }

    /// Known route prefixes the member may view, for navigation rendering.
    pub fn accessible_pages(&self, role: &str, chair: Option<&str>) -> Vec<&'static str> {
        self.known_pages()
            .into_iter()
            .filter(|page| self.can_access_page(role, chair, page))
            .collect()
    }
}

/// `true` for the six exec roles; `false` for every other string.
pub fn is_exec_role(role: &str) -> bool {
    role.parse::<Role>().is_ok_and(Role::is_exec)
}

/// `true` when `chair` is set and has an entry in the chair table.
pub fn is_chair_holder(chair: Option<&str>) -> bool {
    RouteAccessPolicy::dashboard().is_chair_holder(chair)
}

pub fn can_access_page(role: &str, chair: Option<&str>, page: &str) -> bool {
    RouteAccessPolicy::dashboard().can_access_page(role, chair, page)
}

pub fn accessible_pages(role: &str, chair: Option<&str>) -> Vec<&'static str> {
    RouteAccessPolicy::dashboard().accessible_pages(role, chair)
}

/// Require that the member may view `page`. Returns `Forbidden` otherwise.
pub fn require_page_access(
    policy: &RouteAccessPolicy,
    member: &MemberContext,
    page: &str,
) -> Result<(), AppError> {
    if policy.can_access_page(&member.role, member.chair.as_deref(), page) {
        return Ok(());
    }
    tracing::debug!(
        role = %member.role,
        chair = ?member.chair,
        page,
        "dashboard access denied"
    );
    Err(AppError::Forbidden(format!("you do not have access to {page}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_exec_role() {
        for role in ["admin", "president", "vpi", "vpx", "treasurer", "secretary"] {
            assert!(is_exec_role(role), "{role}");
        }
        for role in ["junior_active", "active", "alumni", "inactive", "", "Admin", "root"] {
            assert!(!is_exec_role(role), "{role}");
        }
    }

    #[test]
    fn test_is_chair_holder() {
        assert!(is_chair_holder(Some("historian")));
        assert!(is_chair_holder(Some("social_media")));
        assert!(!is_chair_holder(None));
        assert!(!is_chair_holder(Some("")));
        assert!(!is_chair_holder(Some("philanthropy")));
    }

    #[test]
    fn test_every_chair_has_a_table_entry() {
        let policy = RouteAccessPolicy::dashboard();
        for chair in ChairPosition::ALL {
            assert!(policy.chair_grants(chair).is_some(), "{chair}");
        }
    }

    #[test]
    fn test_matches_route() {
        assert!(matches_route("/dashboard/media", "/dashboard/media"));
        assert!(matches_route("/dashboard/media/upload", "/dashboard/media"));
        assert!(!matches_route("/dashboard/media2", "/dashboard/media"));
        assert!(!matches_route("/dashboard", "/dashboard/media"));
    }

    #[test]
    fn test_exec_only_page_denied_to_non_exec() {
        assert!(!can_access_page("active", None, "/dashboard/members"));
        assert!(!can_access_page("alumni", None, "/dashboard/members/42"));
        assert!(!can_access_page("", None, "/dashboard/blog"));
    }

    #[test]
    fn test_exec_override() {
        assert!(can_access_page("admin", None, "/dashboard/members"));
        assert!(can_access_page("treasurer", None, "/dashboard/historian/archive"));
    }

    #[test]
    fn test_chair_sub_path_grant() {
        assert!(can_access_page("active", Some("historian"), "/dashboard/historian/archive"));
        assert!(can_access_page("active", Some("historian"), "/dashboard/media"));
        assert!(!can_access_page("active", Some("historian"), "/dashboard/blog"));
        assert!(can_access_page("junior_active", Some("social_media"), "/dashboard/blog/new"));
    }

    #[test]
    fn test_unrecognized_chair_grants_nothing() {
        assert!(!can_access_page("active", Some("philanthropy"), "/dashboard/historian"));
        assert!(!can_access_page("active", Some(""), "/dashboard/historian"));
    }

    #[test]
    fn test_default_allow_for_unlisted_pages() {
        assert!(can_access_page("active", None, "/dashboard/some-brand-new-page"));
        assert!(can_access_page("not-a-role", None, "/dashboard/some-brand-new-page"));
    }

    #[test]
    fn test_shared_pages() {
        assert!(can_access_page("inactive", None, "/dashboard"));
        assert!(can_access_page("inactive", None, "/dashboard/profile"));
        assert!(can_access_page("inactive", None, "/dashboard/profile/edit"));
    }

    #[test]
    fn test_root_is_shared_by_exact_match_only() {
        let policy = RouteAccessPolicy::dashboard();
        assert!(policy.is_shared("/dashboard"));
        assert!(!policy.is_shared("/dashboard/members"));
        assert!(!policy.is_shared("/dashboard/some-brand-new-page"));
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert!(!can_access_page("active", None, "/dashboard/attendance"));
            assert!(can_access_page("active", Some("brotherhood"), "/dashboard/attendance"));
        }
    }

    #[test]
    fn test_known_pages_are_unique() {
        let pages = RouteAccessPolicy::dashboard().known_pages();
        let mut deduped = pages.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(pages.len(), deduped.len());
        assert_eq!(pages[0], DASHBOARD_ROOT);
    }

    #[test]
    fn test_accessible_pages() {
        let all = RouteAccessPolicy::dashboard().known_pages();
        assert_eq!(accessible_pages("president", None), all);

        let member = accessible_pages("active", None);
        assert_eq!(member, SHARED_PAGES.to_vec());

        let historian = accessible_pages("active", Some("historian"));
        assert!(historian.contains(&"/dashboard/historian"));
        assert!(historian.contains(&"/dashboard/media"));
        assert!(!historian.contains(&"/dashboard/members"));
    }

    #[test]
    fn test_require_page_access() {
        let policy = RouteAccessPolicy::dashboard();
        let member = MemberContext {
            role: "active".to_string(),
            chair: Some("recruitment".to_string()),
        };
        assert!(require_page_access(policy, &member, "/dashboard/recruitment/leads").is_ok());
        assert!(matches!(
            require_page_access(policy, &member, "/dashboard/members"),
            Err(AppError::Forbidden(_))
        ));
    }
}
