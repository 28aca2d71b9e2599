use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Organizational role held by every member. The first six are exec roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    President,
    Vpi,
    Vpx,
    Treasurer,
    Secretary,
    JuniorActive,
    Active,
    Alumni,
    Inactive,
}

impl Role {
    /// All roles in display order, exec roles first.
    pub const ALL: [Role; 10] = [
        Role::Admin,
        Role::President,
        Role::Vpi,
        Role::Vpx,
        Role::Treasurer,
        Role::Secretary,
        Role::JuniorActive,
        Role::Active,
        Role::Alumni,
        Role::Inactive,
    ];

    pub const EXEC: [Role; 6] = [
        Role::Admin,
        Role::President,
        Role::Vpi,
        Role::Vpx,
        Role::Treasurer,
        Role::Secretary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::President => "president",
            Role::Vpi => "vpi",
            Role::Vpx => "vpx",
            Role::Treasurer => "treasurer",
            Role::Secretary => "secretary",
            Role::JuniorActive => "junior_active",
            Role::Active => "active",
            Role::Alumni => "alumni",
            Role::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::President => "President",
            Role::Vpi => "VP Internal",
            Role::Vpx => "VP External",
            Role::Treasurer => "Treasurer",
            Role::Secretary => "Secretary",
            Role::JuniorActive => "Junior Active",
            Role::Active => "Active",
            Role::Alumni => "Alumni",
            Role::Inactive => "Inactive",
        }
    }

    /// Opaque badge style token consumed by the dashboard renderer.
    pub fn style(self) -> &'static str {
        match self {
            Role::Admin => "badge-red",
            Role::President => "badge-purple",
            Role::Vpi => "badge-indigo",
            Role::Vpx => "badge-blue",
            Role::Treasurer => "badge-green",
            Role::Secretary => "badge-teal",
            Role::JuniorActive => "badge-amber",
            Role::Active => "badge-gold",
            Role::Alumni => "badge-slate",
            Role::Inactive => "badge-gray",
        }
    }

    pub fn is_exec(self) -> bool {
        Role::EXEC.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {:?}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Committee chair a member may hold in addition to their role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChairPosition {
    Recruitment,
    Alumni,
    Social,
    SocialMedia,
    Brotherhood,
    Historian,
}

impl ChairPosition {
    pub const ALL: [ChairPosition; 6] = [
        ChairPosition::Recruitment,
        ChairPosition::Alumni,
        ChairPosition::Social,
        ChairPosition::SocialMedia,
        ChairPosition::Brotherhood,
        ChairPosition::Historian,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChairPosition::Recruitment => "recruitment",
            ChairPosition::Alumni => "alumni",
            ChairPosition::Social => "social",
            ChairPosition::SocialMedia => "social_media",
            ChairPosition::Brotherhood => "brotherhood",
            ChairPosition::Historian => "historian",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChairPosition::Recruitment => "Recruitment Chair",
            ChairPosition::Alumni => "Alumni Relations Chair",
            ChairPosition::Social => "Social Chair",
            ChairPosition::SocialMedia => "Social Media Chair",
            ChairPosition::Brotherhood => "Brotherhood Chair",
            ChairPosition::Historian => "Historian",
        }
    }
}

impl fmt::Display for ChairPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChair(pub String);

impl fmt::Display for UnknownChair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown chair position: {:?}", self.0)
    }
}

impl std::error::Error for UnknownChair {}

impl FromStr for ChairPosition {
    type Err = UnknownChair;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChairPosition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownChair(s.to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct RoleInfo {
    pub id: Role,
    pub label: &'static str,
    pub style: &'static str,
    pub exec: bool,
}

impl From<Role> for RoleInfo {
    fn from(role: Role) -> Self {
        Self {
            id: role,
            label: role.label(),
            style: role.style(),
            exec: role.is_exec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exactly_ten_roles_six_exec() {
        assert_eq!(Role::ALL.len(), 10);
        let exec: Vec<Role> = Role::ALL.into_iter().filter(|r| r.is_exec()).collect();
        assert_eq!(exec, Role::EXEC.to_vec());
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_role_parse_is_exact() {
        assert!("Admin".parse::<Role>().is_err());
        assert!(" admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        assert_eq!(
            "pledge".parse::<Role>().unwrap_err().to_string(),
            "unknown role: \"pledge\""
        );
    }

    #[test]
    fn test_labels_and_styles_are_distinct() {
        let labels: HashSet<_> = Role::ALL.iter().map(|r| r.label()).collect();
        let styles: HashSet<_> = Role::ALL.iter().map(|r| r.style()).collect();
        assert_eq!(labels.len(), 10);
        assert_eq!(styles.len(), 10);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_value(Role::JuniorActive).unwrap(),
            serde_json::json!("junior_active")
        );
        assert_eq!(
            serde_json::from_value::<ChairPosition>(serde_json::json!("social_media")).unwrap(),
            ChairPosition::SocialMedia
        );
    }

    #[test]
    fn test_chair_parse() {
        for chair in ChairPosition::ALL {
            assert_eq!(chair.to_string().parse::<ChairPosition>(), Ok(chair));
        }
        assert!("philanthropy".parse::<ChairPosition>().is_err());
    }

    #[test]
    fn test_role_info() {
        let info = RoleInfo::from(Role::Vpx);
        assert_eq!(info.label, "VP External");
        assert!(info.exec);
        assert!(!RoleInfo::from(Role::Alumni).exec);
    }
}
