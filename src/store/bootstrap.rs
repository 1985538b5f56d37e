use super::Store;
use crate::auth::PasswordHasher;
use crate::error::Result;
use crate::types::{Capability, Contract, Project, Role, User, VACATION_PROJECT_NAME};

pub const DEFAULT_ADMIN_MAIL: &str = "admin@mydb";

/// Credentials of the administrator created at bootstrap.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub mail: String,
    pub password: String,
}

/// Rows written by [`seed`]. Ids are assigned by the store.
#[derive(Debug, Clone)]
pub struct ReservedRows {
    pub vacation: Project,
    /// Base roles in seeding order. The administrator gets the first one.
    pub roles: Vec<Role>,
    pub contract: Contract,
    pub admin: User,
}

impl ReservedRows {
    pub fn new(admin: &AdminSeed) -> Result<Self> {
        let password = PasswordHasher::new().hash(&admin.password)?;

        Ok(Self {
            vacation: Project {
                project_id: 0,
                project_name: VACATION_PROJECT_NAME.to_string(),
            },
            roles: vec![
                Role::with_capabilities("Superadmin", &Capability::ALL),
                Role::with_capabilities(
                    "Admin",
                    &[Capability::AddProjects, Capability::SeeReports],
                ),
                Role::with_capabilities("User", &[]),
            ],
            contract: Contract {
                contract_id: 0,
                contract_name: "Admin".to_string(),
            },
            admin: User {
                user_id: 0,
                contract_id: 0,
                role_id: 0,
                username: "Admin".to_string(),
                password,
                last_name: "Admin".to_string(),
                first_name: "Admin".to_string(),
                mail: admin.mail.clone(),
                theoretical_hours_worked: 0,
                vacation_hours: 0,
            },
        })
    }
}

/// Inserts the reserved rows: the Vacation project, the three base roles,
/// the "Admin" contract and the administrator account. Either all of them
/// are written or none.
///
/// Seeding is skipped when the Vacation project already exists. Returns
/// whether anything was written.
pub fn seed(store: &dyn Store, admin: &AdminSeed) -> Result<bool> {
    if store.get_vacation_project()?.is_some() {
        tracing::debug!("Reserved rows already present, skipping seed");
        return Ok(false);
    }

    store.create_reserved(&ReservedRows::new(admin)?)?;

    tracing::info!("Seeded reserved rows and administrator {}", admin.mail);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;
    use crate::types::{RESERVED_ROLE_IDS, RESERVED_ROLE_NAMES};

    fn admin() -> AdminSeed {
        AdminSeed {
            mail: DEFAULT_ADMIN_MAIL.to_string(),
            password: "s3cret".to_string(),
        }
    }

    fn store() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store.initialize().unwrap();
        store
    }

    #[test]
    fn test_seed_creates_reserved_rows() {
        let store = store();
        assert!(seed(&store, &admin()).unwrap());

        let vacation = store.get_vacation_project().unwrap().unwrap();
        assert_eq!(vacation.project_id, 1);

        let roles = store.list_roles().unwrap();
        let names: Vec<&str> = roles.iter().map(|r| r.role_name.as_str()).collect();
        assert_eq!(names, RESERVED_ROLE_NAMES);
        let ids: Vec<i64> = roles.iter().map(|r| r.role_id).collect();
        assert_eq!(ids, RESERVED_ROLE_IDS);

        assert!(roles[0].has(Capability::ManageUsers));
        assert!(roles[1].has(Capability::AddProjects));
        assert!(!roles[1].has(Capability::ManageUsers));
        assert!(Capability::ALL.iter().all(|c| !roles[2].has(*c)));
    }

    #[test]
    fn test_seed_admin_can_log_in() {
        let store = store();
        seed(&store, &admin()).unwrap();

        let user = store.get_user_by_mail(DEFAULT_ADMIN_MAIL).unwrap().unwrap();
        assert_eq!(user.role_id, 1);
        assert_ne!(user.password, "s3cret");
        assert!(PasswordHasher::new().verify("s3cret", &user.password).unwrap());
    }

    #[test]
    fn test_seed_is_idempotent() {
        let store = store();
        assert!(seed(&store, &admin()).unwrap());
        assert!(!seed(&store, &admin()).unwrap());

        assert_eq!(store.list_roles().unwrap().len(), 3);
        assert_eq!(store.list_users().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_seed_leaves_nothing_behind() {
        let store = store();
        store
            .create_user(&User {
                user_id: 0,
                contract_id: store
                    .create_contract(&Contract {
                        contract_id: 0,
                        contract_name: "CDI".to_string(),
                    })
                    .unwrap(),
                role_id: store.create_role(&Role::with_capabilities("Intern", &[])).unwrap(),
                username: "taken".to_string(),
                password: "x".to_string(),
                last_name: "Taken".to_string(),
                first_name: "Taken".to_string(),
                mail: DEFAULT_ADMIN_MAIL.to_string(),
                theoretical_hours_worked: 0,
                vacation_hours: 0,
            })
            .unwrap();

        // The admin mail is already used, so the last insert fails.
        assert!(seed(&store, &admin()).is_err());

        assert!(store.get_vacation_project().unwrap().is_none());
        assert_eq!(store.list_roles().unwrap().len(), 1);
        assert_eq!(store.list_contracts().unwrap().len(), 1);
    }
}
