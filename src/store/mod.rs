mod bootstrap;
mod schema;
mod sqlite;

pub use bootstrap::{AdminSeed, DEFAULT_ADMIN_MAIL, ReservedRows, seed};
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
///
/// `get_*` methods return `Ok(None)` when no row matches. `update_*` methods
/// replace the whole row and fail with [`crate::error::Error::NotFound`] when
/// the id is unknown. `delete_*` methods succeed even if nothing was deleted.
pub trait Store: Send + Sync {
    /// Creates any missing tables. Existing data is kept.
    fn initialize(&self) -> Result<()>;

    /// Drops every table and recreates the schema.
    fn reset(&self) -> Result<()>;

    /// Writes the bootstrap rows in one transaction. The administrator is
    /// linked to the first role and to the contract.
    fn create_reserved(&self, rows: &ReservedRows) -> Result<()>;

    // User operations
    fn list_users(&self) -> Result<Vec<User>>;
    fn get_user(&self, id: i64) -> Result<Option<User>>;
    fn get_user_by_mail(&self, mail: &str) -> Result<Option<User>>;
    fn list_users_of_company(&self, company_id: i64) -> Result<Vec<User>>;
    fn list_users_of_project(&self, project_id: i64) -> Result<Vec<User>>;
    fn list_users_of_schedule(&self, schedule_id: i64) -> Result<Vec<User>>;
    fn create_user(&self, user: &User) -> Result<i64>;
    fn update_user(&self, user: &User) -> Result<User>;
    fn delete_user(&self, id: i64) -> Result<()>;

    // Role operations
    fn list_roles(&self) -> Result<Vec<Role>>;
    fn get_role(&self, id: i64) -> Result<Option<Role>>;
    fn get_role_of_user(&self, user_id: i64) -> Result<Option<Role>>;
    fn get_role_by_name(&self, name: &str) -> Result<Option<Role>>;
    fn create_role(&self, role: &Role) -> Result<i64>;
    fn update_role(&self, role: &Role) -> Result<Role>;
    fn delete_role(&self, id: i64) -> Result<()>;

    // Contract operations
    fn list_contracts(&self) -> Result<Vec<Contract>>;
    fn get_contract(&self, id: i64) -> Result<Option<Contract>>;
    fn get_contract_of_user(&self, user_id: i64) -> Result<Option<Contract>>;
    fn create_contract(&self, contract: &Contract) -> Result<i64>;
    fn update_contract(&self, contract: &Contract) -> Result<Contract>;
    fn delete_contract(&self, id: i64) -> Result<()>;

    // Function operations
    fn list_functions(&self) -> Result<Vec<Function>>;
    fn get_function(&self, id: i64) -> Result<Option<Function>>;
    fn list_functions_of_user(&self, user_id: i64) -> Result<Vec<Function>>;
    fn create_function(&self, function: &Function) -> Result<i64>;
    fn update_function(&self, function: &Function) -> Result<Function>;
    fn delete_function(&self, id: i64) -> Result<()>;

    // Company operations
    fn list_companies(&self) -> Result<Vec<Company>>;
    fn get_company(&self, id: i64) -> Result<Option<Company>>;
    fn create_company(&self, company: &Company) -> Result<i64>;
    fn update_company(&self, company: &Company) -> Result<Company>;
    fn delete_company(&self, id: i64) -> Result<()>;

    // Project operations
    fn list_projects(&self) -> Result<Vec<Project>>;
    fn get_project(&self, id: i64) -> Result<Option<Project>>;
    fn list_projects_of_company(&self, company_id: i64) -> Result<Vec<Project>>;
    fn list_projects_of_user(&self, user_id: i64) -> Result<Vec<Project>>;
    fn get_vacation_project(&self) -> Result<Option<Project>>;
    fn create_project(&self, project: &Project) -> Result<i64>;
    fn update_project(&self, project: &Project) -> Result<Project>;
    fn delete_project(&self, id: i64) -> Result<()>;

    // Schedule operations
    fn get_schedule(&self, id: i64) -> Result<Option<Schedule>>;
    fn list_schedules_of_user(&self, user_id: i64) -> Result<Vec<Schedule>>;
    fn list_schedules_of_project(&self, project_id: i64) -> Result<Vec<Schedule>>;
    fn create_schedule(&self, schedule: &Schedule) -> Result<i64>;
    fn update_schedule(&self, schedule: &Schedule) -> Result<Schedule>;
    fn delete_schedule(&self, id: i64) -> Result<()>;

    // Vacation operations (schedules pinned to the Vacation project)
    fn list_vacations_of_user(&self, user_id: i64) -> Result<Vec<Schedule>>;
    fn get_vacation(&self, id: i64) -> Result<Option<Schedule>>;
    fn create_vacation(&self, vacation: &Schedule) -> Result<i64>;
    fn update_vacation(&self, vacation: &Schedule) -> Result<Schedule>;
    fn delete_vacation(&self, id: i64) -> Result<()>;

    // Comment operations
    fn list_comments(&self) -> Result<Vec<Comment>>;
    fn get_comment(&self, id: i64) -> Result<Option<Comment>>;
    fn list_comments_of_user(&self, user_id: i64) -> Result<Vec<Comment>>;
    fn list_comments_of_schedule(&self, schedule_id: i64) -> Result<Vec<Comment>>;
    fn list_comments_of_project(&self, project_id: i64) -> Result<Vec<Comment>>;
    fn create_comment(&self, comment: &Comment) -> Result<i64>;
    fn update_comment(&self, comment: &Comment) -> Result<Comment>;
    fn delete_comment(&self, id: i64) -> Result<()>;

    // Join table operations
    fn create_company_project(&self, link: CompanyProject) -> Result<()>;
    fn delete_company_project(&self, link: CompanyProject) -> Result<()>;
    fn create_company_user(&self, link: CompanyUser) -> Result<()>;
    fn delete_company_user(&self, link: CompanyUser) -> Result<()>;
    fn create_user_schedule(&self, link: UserSchedule) -> Result<()>;
    fn delete_user_schedule(&self, link: UserSchedule) -> Result<()>;
    fn create_user_function(&self, link: UserFunction) -> Result<()>;
    fn delete_user_function(&self, link: UserFunction) -> Result<()>;
}
