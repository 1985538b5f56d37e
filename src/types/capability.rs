use super::Role;

/// Name of the project that marks a schedule as a vacation.
pub const VACATION_PROJECT_NAME: &str = "Vacation";

/// Names of the roles seeded at bootstrap, in seeding order.
pub const RESERVED_ROLE_NAMES: [&str; 3] = ["Superadmin", "Admin", "User"];

/// Ids the reserved roles receive on a freshly bootstrapped database.
pub const RESERVED_ROLE_IDS: [i64; 3] = [1, 2, 3];

/// One of the four independent flags a role can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ManageUsers,
    SeeOtherSchedules,
    AddProjects,
    SeeReports,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Self::ManageUsers,
        Self::SeeOtherSchedules,
        Self::AddProjects,
        Self::SeeReports,
    ];
}

impl Role {
    /// Returns true if this role carries the capability.
    #[must_use]
    pub const fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::ManageUsers => self.can_add_and_modify_users,
            Capability::SeeOtherSchedules => self.can_see_other_schedules,
            Capability::AddProjects => self.can_add_projects,
            Capability::SeeReports => self.can_see_reports,
        }
    }

    /// Builds an unsaved role holding exactly the given capabilities.
    #[must_use]
    pub fn with_capabilities(name: impl Into<String>, capabilities: &[Capability]) -> Self {
        Self {
            role_id: 0,
            role_name: name.into(),
            can_add_and_modify_users: capabilities.contains(&Capability::ManageUsers),
            can_see_other_schedules: capabilities.contains(&Capability::SeeOtherSchedules),
            can_add_projects: capabilities.contains(&Capability::AddProjects),
            can_see_reports: capabilities.contains(&Capability::SeeReports),
        }
    }

    /// Returns true if the role name is one of the bootstrap roles.
    #[must_use]
    pub fn is_reserved_name(name: &str) -> bool {
        RESERVED_ROLE_NAMES.contains(&name)
    }
}
