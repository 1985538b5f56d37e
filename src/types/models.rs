use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Wire and storage format for schedule dates.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub user_id: i64,
    pub contract_id: i64,
    pub role_id: i64,
    pub username: String,
    /// Argon2id PHC string once stored. Request bodies carry the plaintext.
    #[serde(default)]
    pub password: String,
    pub last_name: String,
    pub first_name: String,
    pub mail: String,
    pub theoretical_hours_worked: i64,
    pub vacation_hours: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub role_id: i64,
    pub role_name: String,
    pub can_add_and_modify_users: bool,
    pub can_see_other_schedules: bool,
    pub can_add_projects: bool,
    pub can_see_reports: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    #[serde(default)]
    pub contract_id: i64,
    pub contract_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    #[serde(default)]
    pub function_id: i64,
    pub function_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub company_id: i64,
    pub company_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub project_id: i64,
    pub project_name: String,
}

/// A work period on a project. A schedule whose project is the reserved
/// Vacation project is a vacation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub schedule_id: i64,
    pub project_id: i64,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub comment_id: i64,
    pub schedule_id: i64,
    pub comment: String,
    pub is_important: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProject {
    pub company_id: i64,
    pub project_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyUser {
    pub company_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSchedule {
    pub user_id: i64,
    pub schedule_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFunction {
    pub user_id: i64,
    pub function_id: i64,
}
