use std::path::Path;
use std::sync::Mutex;

use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Params, Row, Transaction, params};

use super::{ReservedRows, Store};
use super::schema::{DROP_SCHEMA, SCHEMA};
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens a private in-memory database. Used by tests and throwaway servers.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn query_one<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.conn()
            .query_row(sql, params, map)
            .optional()
            .map_err(Error::from)
    }

    fn query_all<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.conn();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, map)?;
        let items = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Runs `f` inside a transaction and commits if it succeeds. Dropping
    /// the transaction on error rolls it back.
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let value = f(&tx)?;

        tx.commit()?;
        Ok(value)
    }

    /// Runs a single INSERT and returns the new row id.
    fn insert<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        self.transaction(|tx| {
            tx.execute(sql, params)?;
            Ok(tx.last_insert_rowid())
        })
    }

    /// Runs a single UPDATE. No matching row is NotFound.
    fn replace<P: Params>(&self, sql: &str, params: P) -> Result<()> {
        self.transaction(|tx| match tx.execute(sql, params)? {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        })
    }

    /// Runs a single DELETE. Deleting nothing is not an error.
    fn remove<P: Params>(&self, sql: &str, params: P) -> Result<()> {
        self.transaction(|tx| {
            tx.execute(sql, params)?;
            Ok(())
        })
    }

    fn vacation_project_id(&self) -> Result<i64> {
        self.get_vacation_project()?
            .map(|p| p.project_id)
            .ok_or(Error::NotFound)
    }
}

fn parse_datetime(s: Option<String>) -> Option<NaiveDateTime> {
    let s = s?;
    NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT)
        .map_err(|e| tracing::error!("Invalid datetime in database: '{}' - {}", s, e))
        .ok()
}

fn format_datetime(dt: Option<&NaiveDateTime>) -> Option<String> {
    dt.map(|dt| dt.format(DATETIME_FORMAT).to_string())
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        user_id: row.get(0)?,
        contract_id: row.get(1)?,
        role_id: row.get(2)?,
        username: row.get(3)?,
        password: row.get(4)?,
        last_name: row.get(5)?,
        first_name: row.get(6)?,
        mail: row.get(7)?,
        theoretical_hours_worked: row.get(8)?,
        vacation_hours: row.get(9)?,
    })
}

fn role_from_row(row: &Row<'_>) -> rusqlite::Result<Role> {
    Ok(Role {
        role_id: row.get(0)?,
        role_name: row.get(1)?,
        can_add_and_modify_users: row.get(2)?,
        can_see_other_schedules: row.get(3)?,
        can_add_projects: row.get(4)?,
        can_see_reports: row.get(5)?,
    })
}

fn contract_from_row(row: &Row<'_>) -> rusqlite::Result<Contract> {
    Ok(Contract {
        contract_id: row.get(0)?,
        contract_name: row.get(1)?,
    })
}

fn function_from_row(row: &Row<'_>) -> rusqlite::Result<Function> {
    Ok(Function {
        function_id: row.get(0)?,
        function_name: row.get(1)?,
    })
}

fn company_from_row(row: &Row<'_>) -> rusqlite::Result<Company> {
    Ok(Company {
        company_id: row.get(0)?,
        company_name: row.get(1)?,
    })
}

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        project_id: row.get(0)?,
        project_name: row.get(1)?,
    })
}

fn schedule_from_row(row: &Row<'_>) -> rusqlite::Result<Schedule> {
    Ok(Schedule {
        schedule_id: row.get(0)?,
        project_id: row.get(1)?,
        start_date: parse_datetime(row.get(2)?),
        end_date: parse_datetime(row.get(3)?),
    })
}

fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        comment_id: row.get(0)?,
        schedule_id: row.get(1)?,
        comment: row.get(2)?,
        is_important: row.get(3)?,
    })
}

fn insert_user(conn: &Connection, user: &User) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO users (contract_id, role_id, username, password, last_name, first_name,
                            mail, theoretical_hours_worked, vacation_hours)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            user.contract_id,
            user.role_id,
            user.username,
            user.password,
            user.last_name,
            user.first_name,
            user.mail,
            user.theoretical_hours_worked,
            user.vacation_hours,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn insert_role(conn: &Connection, role: &Role) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO roles (role_name, can_add_and_modify_users, can_see_other_schedules,
                            can_add_projects, can_see_reports)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            role.role_name,
            role.can_add_and_modify_users,
            role.can_see_other_schedules,
            role.can_add_projects,
            role.can_see_reports,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn insert_contract(conn: &Connection, contract: &Contract) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO contracts (contract_name) VALUES (?1)",
        params![contract.contract_name],
    )?;
    Ok(conn.last_insert_rowid())
}

fn insert_project(conn: &Connection, project: &Project) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO projects (project_name) VALUES (?1)",
        params![project.project_name],
    )?;
    Ok(conn.last_insert_rowid())
}

const USER_COLUMNS: &str = "u.user_id, u.contract_id, u.role_id, u.username, u.password, \
     u.last_name, u.first_name, u.mail, u.theoretical_hours_worked, u.vacation_hours";
const ROLE_COLUMNS: &str = "r.role_id, r.role_name, r.can_add_and_modify_users, \
     r.can_see_other_schedules, r.can_add_projects, r.can_see_reports";
const SCHEDULE_COLUMNS: &str = "s.schedule_id, s.project_id, s.start_date, s.end_date";
const COMMENT_COLUMNS: &str = "c.comment_id, c.schedule_id, c.comment, c.is_important";

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(DROP_SCHEMA)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn create_reserved(&self, rows: &ReservedRows) -> Result<()> {
        self.transaction(|tx| {
            insert_project(tx, &rows.vacation)?;

            let mut role_ids = Vec::with_capacity(rows.roles.len());
            for role in &rows.roles {
                role_ids.push(insert_role(tx, role)?);
            }
            let role_id = role_ids.first().copied().ok_or(Error::NotFound)?;

            let contract_id = insert_contract(tx, &rows.contract)?;

            insert_user(
                tx,
                &User {
                    role_id,
                    contract_id,
                    ..rows.admin.clone()
                },
            )?;
            Ok(())
        })
    }

    // User operations

    fn list_users(&self) -> Result<Vec<User>> {
        self.query_all(
            &format!("SELECT {USER_COLUMNS} FROM users u ORDER BY u.user_id"),
            (),
            user_from_row,
        )
    }

    fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.query_one(
            &format!("SELECT {USER_COLUMNS} FROM users u WHERE u.user_id = ?1"),
            params![id],
            user_from_row,
        )
    }

    fn get_user_by_mail(&self, mail: &str) -> Result<Option<User>> {
        self.query_one(
            &format!("SELECT {USER_COLUMNS} FROM users u WHERE u.mail = ?1"),
            params![mail],
            user_from_row,
        )
    }

    fn list_users_of_company(&self, company_id: i64) -> Result<Vec<User>> {
        self.query_all(
            &format!(
                "SELECT {USER_COLUMNS} FROM users u
                 JOIN company_users cu ON cu.user_id = u.user_id
                 WHERE cu.company_id = ?1"
            ),
            params![company_id],
            user_from_row,
        )
    }

    fn list_users_of_project(&self, project_id: i64) -> Result<Vec<User>> {
        self.query_all(
            &format!(
                "SELECT DISTINCT {USER_COLUMNS} FROM users u
                 JOIN user_schedules us ON us.user_id = u.user_id
                 JOIN schedules s ON s.schedule_id = us.schedule_id
                 WHERE s.project_id = ?1"
            ),
            params![project_id],
            user_from_row,
        )
    }

    fn list_users_of_schedule(&self, schedule_id: i64) -> Result<Vec<User>> {
        self.query_all(
            &format!(
                "SELECT {USER_COLUMNS} FROM users u
                 JOIN user_schedules us ON us.user_id = u.user_id
                 WHERE us.schedule_id = ?1"
            ),
            params![schedule_id],
            user_from_row,
        )
    }

    fn create_user(&self, user: &User) -> Result<i64> {
        self.transaction(|tx| Ok(insert_user(tx, user)?))
    }

    fn update_user(&self, user: &User) -> Result<User> {
        self.replace(
            "UPDATE users SET contract_id = ?1, role_id = ?2, username = ?3, password = ?4,
                              last_name = ?5, first_name = ?6, mail = ?7,
                              theoretical_hours_worked = ?8, vacation_hours = ?9
             WHERE user_id = ?10",
            params![
                user.contract_id,
                user.role_id,
                user.username,
                user.password,
                user.last_name,
                user.first_name,
                user.mail,
                user.theoretical_hours_worked,
                user.vacation_hours,
                user.user_id,
            ],
        )?;
        Ok(user.clone())
    }

    fn delete_user(&self, id: i64) -> Result<()> {
        self.remove("DELETE FROM users WHERE user_id = ?1", params![id])
    }

    // Role operations

    fn list_roles(&self) -> Result<Vec<Role>> {
        self.query_all(
            &format!("SELECT {ROLE_COLUMNS} FROM roles r ORDER BY r.role_id"),
            (),
            role_from_row,
        )
    }

    fn get_role(&self, id: i64) -> Result<Option<Role>> {
        self.query_one(
            &format!("SELECT {ROLE_COLUMNS} FROM roles r WHERE r.role_id = ?1"),
            params![id],
            role_from_row,
        )
    }

    fn get_role_of_user(&self, user_id: i64) -> Result<Option<Role>> {
        self.query_one(
            &format!(
                "SELECT {ROLE_COLUMNS} FROM roles r
                 JOIN users u ON u.role_id = r.role_id
                 WHERE u.user_id = ?1"
            ),
            params![user_id],
            role_from_row,
        )
    }

    fn get_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        self.query_one(
            &format!("SELECT {ROLE_COLUMNS} FROM roles r WHERE r.role_name = ?1"),
            params![name],
            role_from_row,
        )
    }

    fn create_role(&self, role: &Role) -> Result<i64> {
        self.transaction(|tx| Ok(insert_role(tx, role)?))
    }

    fn update_role(&self, role: &Role) -> Result<Role> {
        self.replace(
            "UPDATE roles SET role_name = ?1, can_add_and_modify_users = ?2,
                              can_see_other_schedules = ?3, can_add_projects = ?4,
                              can_see_reports = ?5
             WHERE role_id = ?6",
            params![
                role.role_name,
                role.can_add_and_modify_users,
                role.can_see_other_schedules,
                role.can_add_projects,
                role.can_see_reports,
                role.role_id,
            ],
        )?;
        Ok(role.clone())
    }

    fn delete_role(&self, id: i64) -> Result<()> {
        self.remove("DELETE FROM roles WHERE role_id = ?1", params![id])
    }

    // Contract operations

    fn list_contracts(&self) -> Result<Vec<Contract>> {
        self.query_all(
            "SELECT contract_id, contract_name FROM contracts ORDER BY contract_id",
            (),
            contract_from_row,
        )
    }

    fn get_contract(&self, id: i64) -> Result<Option<Contract>> {
        self.query_one(
            "SELECT contract_id, contract_name FROM contracts WHERE contract_id = ?1",
            params![id],
            contract_from_row,
        )
    }

    fn get_contract_of_user(&self, user_id: i64) -> Result<Option<Contract>> {
        self.query_one(
            "SELECT c.contract_id, c.contract_name FROM contracts c
             JOIN users u ON u.contract_id = c.contract_id
             WHERE u.user_id = ?1",
            params![user_id],
            contract_from_row,
        )
    }

    fn create_contract(&self, contract: &Contract) -> Result<i64> {
        self.transaction(|tx| Ok(insert_contract(tx, contract)?))
    }

    fn update_contract(&self, contract: &Contract) -> Result<Contract> {
        self.replace(
            "UPDATE contracts SET contract_name = ?1 WHERE contract_id = ?2",
            params![contract.contract_name, contract.contract_id],
        )?;
        Ok(contract.clone())
    }

    fn delete_contract(&self, id: i64) -> Result<()> {
        self.remove("DELETE FROM contracts WHERE contract_id = ?1", params![id])
    }

    // Function operations

    fn list_functions(&self) -> Result<Vec<Function>> {
        self.query_all(
            "SELECT function_id, function_name FROM functions ORDER BY function_id",
            (),
            function_from_row,
        )
    }

    fn get_function(&self, id: i64) -> Result<Option<Function>> {
        self.query_one(
            "SELECT function_id, function_name FROM functions WHERE function_id = ?1",
            params![id],
            function_from_row,
        )
    }

    fn list_functions_of_user(&self, user_id: i64) -> Result<Vec<Function>> {
        self.query_all(
            "SELECT f.function_id, f.function_name FROM functions f
             JOIN user_functions uf ON uf.function_id = f.function_id
             WHERE uf.user_id = ?1",
            params![user_id],
            function_from_row,
        )
    }

    fn create_function(&self, function: &Function) -> Result<i64> {
        self.insert(
            "INSERT INTO functions (function_name) VALUES (?1)",
            params![function.function_name],
        )
    }

    fn update_function(&self, function: &Function) -> Result<Function> {
        self.replace(
            "UPDATE functions SET function_name = ?1 WHERE function_id = ?2",
            params![function.function_name, function.function_id],
        )?;
        Ok(function.clone())
    }

    fn delete_function(&self, id: i64) -> Result<()> {
        self.remove("DELETE FROM functions WHERE function_id = ?1", params![id])
    }

    // Company operations

    fn list_companies(&self) -> Result<Vec<Company>> {
        self.query_all(
            "SELECT company_id, company_name FROM companies ORDER BY company_id",
            (),
            company_from_row,
        )
    }

    fn get_company(&self, id: i64) -> Result<Option<Company>> {
        self.query_one(
            "SELECT company_id, company_name FROM companies WHERE company_id = ?1",
            params![id],
            company_from_row,
        )
    }

    fn create_company(&self, company: &Company) -> Result<i64> {
        self.insert(
            "INSERT INTO companies (company_name) VALUES (?1)",
            params![company.company_name],
        )
    }

    fn update_company(&self, company: &Company) -> Result<Company> {
        self.replace(
            "UPDATE companies SET company_name = ?1 WHERE company_id = ?2",
            params![company.company_name, company.company_id],
        )?;
        Ok(company.clone())
    }

    fn delete_company(&self, id: i64) -> Result<()> {
        self.remove("DELETE FROM companies WHERE company_id = ?1", params![id])
    }

    // Project operations

    fn list_projects(&self) -> Result<Vec<Project>> {
        self.query_all(
            "SELECT project_id, project_name FROM projects ORDER BY project_id",
            (),
            project_from_row,
        )
    }

    fn get_project(&self, id: i64) -> Result<Option<Project>> {
        self.query_one(
            "SELECT project_id, project_name FROM projects WHERE project_id = ?1",
            params![id],
            project_from_row,
        )
    }

    fn list_projects_of_company(&self, company_id: i64) -> Result<Vec<Project>> {
        self.query_all(
            "SELECT p.project_id, p.project_name FROM projects p
             JOIN company_projects cp ON cp.project_id = p.project_id
             WHERE cp.company_id = ?1",
            params![company_id],
            project_from_row,
        )
    }

    fn list_projects_of_user(&self, user_id: i64) -> Result<Vec<Project>> {
        self.query_all(
            "SELECT DISTINCT p.project_id, p.project_name FROM projects p
             JOIN schedules s ON s.project_id = p.project_id
             JOIN user_schedules us ON us.schedule_id = s.schedule_id
             WHERE us.user_id = ?1",
            params![user_id],
            project_from_row,
        )
    }

    fn get_vacation_project(&self) -> Result<Option<Project>> {
        self.query_one(
            "SELECT project_id, project_name FROM projects WHERE project_name = ?1",
            params![VACATION_PROJECT_NAME],
            project_from_row,
        )
    }

    fn create_project(&self, project: &Project) -> Result<i64> {
        self.transaction(|tx| Ok(insert_project(tx, project)?))
    }

    fn update_project(&self, project: &Project) -> Result<Project> {
        self.replace(
            "UPDATE projects SET project_name = ?1 WHERE project_id = ?2",
            params![project.project_name, project.project_id],
        )?;
        Ok(project.clone())
    }

    fn delete_project(&self, id: i64) -> Result<()> {
        self.remove("DELETE FROM projects WHERE project_id = ?1", params![id])
    }

    // Schedule operations

    fn get_schedule(&self, id: i64) -> Result<Option<Schedule>> {
        self.query_one(
            &format!("SELECT {SCHEDULE_COLUMNS} FROM schedules s WHERE s.schedule_id = ?1"),
            params![id],
            schedule_from_row,
        )
    }

    fn list_schedules_of_user(&self, user_id: i64) -> Result<Vec<Schedule>> {
        self.query_all(
            &format!(
                "SELECT {SCHEDULE_COLUMNS} FROM schedules s
                 JOIN user_schedules us ON us.schedule_id = s.schedule_id
                 WHERE us.user_id = ?1"
            ),
            params![user_id],
            schedule_from_row,
        )
    }

    fn list_schedules_of_project(&self, project_id: i64) -> Result<Vec<Schedule>> {
        self.query_all(
            &format!("SELECT {SCHEDULE_COLUMNS} FROM schedules s WHERE s.project_id = ?1"),
            params![project_id],
            schedule_from_row,
        )
    }

    fn create_schedule(&self, schedule: &Schedule) -> Result<i64> {
        self.insert(
            "INSERT INTO schedules (project_id, start_date, end_date) VALUES (?1, ?2, ?3)",
            params![
                schedule.project_id,
                format_datetime(schedule.start_date.as_ref()),
                format_datetime(schedule.end_date.as_ref()),
            ],
        )
    }

    fn update_schedule(&self, schedule: &Schedule) -> Result<Schedule> {
        self.replace(
            "UPDATE schedules SET project_id = ?1, start_date = ?2, end_date = ?3
             WHERE schedule_id = ?4",
            params![
                schedule.project_id,
                format_datetime(schedule.start_date.as_ref()),
                format_datetime(schedule.end_date.as_ref()),
                schedule.schedule_id,
            ],
        )?;
        Ok(schedule.clone())
    }

    fn delete_schedule(&self, id: i64) -> Result<()> {
        self.remove("DELETE FROM schedules WHERE schedule_id = ?1", params![id])
    }

    // Vacation operations

    fn list_vacations_of_user(&self, user_id: i64) -> Result<Vec<Schedule>> {
        self.query_all(
            &format!(
                "SELECT {SCHEDULE_COLUMNS} FROM schedules s
                 JOIN user_schedules us ON us.schedule_id = s.schedule_id
                 JOIN projects p ON p.project_id = s.project_id
                 WHERE us.user_id = ?1 AND p.project_name = ?2"
            ),
            params![user_id, VACATION_PROJECT_NAME],
            schedule_from_row,
        )
    }

    fn get_vacation(&self, id: i64) -> Result<Option<Schedule>> {
        self.query_one(
            &format!(
                "SELECT {SCHEDULE_COLUMNS} FROM schedules s
                 JOIN projects p ON p.project_id = s.project_id
                 WHERE s.schedule_id = ?1 AND p.project_name = ?2"
            ),
            params![id, VACATION_PROJECT_NAME],
            schedule_from_row,
        )
    }

    fn create_vacation(&self, vacation: &Schedule) -> Result<i64> {
        let project_id = self.vacation_project_id()?;
        self.create_schedule(&Schedule {
            project_id,
            ..vacation.clone()
        })
    }

    fn update_vacation(&self, vacation: &Schedule) -> Result<Schedule> {
        let project_id = self.vacation_project_id()?;
        let pinned = Schedule {
            project_id,
            ..vacation.clone()
        };

        self.replace(
            "UPDATE schedules SET start_date = ?1, end_date = ?2
             WHERE schedule_id = ?3 AND project_id = ?4",
            params![
                format_datetime(pinned.start_date.as_ref()),
                format_datetime(pinned.end_date.as_ref()),
                pinned.schedule_id,
                project_id,
            ],
        )?;
        Ok(pinned)
    }

    fn delete_vacation(&self, id: i64) -> Result<()> {
        let project_id = self.vacation_project_id()?;
        self.remove(
            "DELETE FROM schedules WHERE schedule_id = ?1 AND project_id = ?2",
            params![id, project_id],
        )
    }

    // Comment operations

    fn list_comments(&self) -> Result<Vec<Comment>> {
        self.query_all(
            &format!("SELECT {COMMENT_COLUMNS} FROM comments c ORDER BY c.comment_id"),
            (),
            comment_from_row,
        )
    }

    fn get_comment(&self, id: i64) -> Result<Option<Comment>> {
        self.query_one(
            &format!("SELECT {COMMENT_COLUMNS} FROM comments c WHERE c.comment_id = ?1"),
            params![id],
            comment_from_row,
        )
    }

    fn list_comments_of_user(&self, user_id: i64) -> Result<Vec<Comment>> {
        self.query_all(
            &format!(
                "SELECT {COMMENT_COLUMNS} FROM comments c
                 JOIN user_schedules us ON us.schedule_id = c.schedule_id
                 WHERE us.user_id = ?1"
            ),
            params![user_id],
            comment_from_row,
        )
    }

    fn list_comments_of_schedule(&self, schedule_id: i64) -> Result<Vec<Comment>> {
        self.query_all(
            &format!("SELECT {COMMENT_COLUMNS} FROM comments c WHERE c.schedule_id = ?1"),
            params![schedule_id],
            comment_from_row,
        )
    }

    fn list_comments_of_project(&self, project_id: i64) -> Result<Vec<Comment>> {
        self.query_all(
            &format!(
                "SELECT {COMMENT_COLUMNS} FROM comments c
                 JOIN schedules s ON s.schedule_id = c.schedule_id
                 WHERE s.project_id = ?1"
            ),
            params![project_id],
            comment_from_row,
        )
    }

    fn create_comment(&self, comment: &Comment) -> Result<i64> {
        self.insert(
            "INSERT INTO comments (schedule_id, comment, is_important) VALUES (?1, ?2, ?3)",
            params![comment.schedule_id, comment.comment, comment.is_important],
        )
    }

    fn update_comment(&self, comment: &Comment) -> Result<Comment> {
        self.replace(
            "UPDATE comments SET schedule_id = ?1, comment = ?2, is_important = ?3
             WHERE comment_id = ?4",
            params![
                comment.schedule_id,
                comment.comment,
                comment.is_important,
                comment.comment_id,
            ],
        )?;
        Ok(comment.clone())
    }

    fn delete_comment(&self, id: i64) -> Result<()> {
        self.remove("DELETE FROM comments WHERE comment_id = ?1", params![id])
    }

    // Join table operations

    fn create_company_project(&self, link: CompanyProject) -> Result<()> {
        self.insert(
            "INSERT INTO company_projects (company_id, project_id) VALUES (?1, ?2)",
            params![link.company_id, link.project_id],
        )
        .map(drop)
    }

    fn delete_company_project(&self, link: CompanyProject) -> Result<()> {
        self.remove(
            "DELETE FROM company_projects WHERE company_id = ?1 AND project_id = ?2",
            params![link.company_id, link.project_id],
        )
    }

    fn create_company_user(&self, link: CompanyUser) -> Result<()> {
        self.insert(
            "INSERT INTO company_users (company_id, user_id) VALUES (?1, ?2)",
            params![link.company_id, link.user_id],
        )
        .map(drop)
    }

    fn delete_company_user(&self, link: CompanyUser) -> Result<()> {
        self.remove(
            "DELETE FROM company_users WHERE company_id = ?1 AND user_id = ?2",
            params![link.company_id, link.user_id],
        )
    }

    fn create_user_schedule(&self, link: UserSchedule) -> Result<()> {
        self.insert(
            "INSERT INTO user_schedules (user_id, schedule_id) VALUES (?1, ?2)",
            params![link.user_id, link.schedule_id],
        )
        .map(drop)
    }

    fn delete_user_schedule(&self, link: UserSchedule) -> Result<()> {
        self.remove(
            "DELETE FROM user_schedules WHERE user_id = ?1 AND schedule_id = ?2",
            params![link.user_id, link.schedule_id],
        )
    }

    fn create_user_function(&self, link: UserFunction) -> Result<()> {
        self.insert(
            "INSERT INTO user_functions (user_id, function_id) VALUES (?1, ?2)",
            params![link.user_id, link.function_id],
        )
        .map(drop)
    }

    fn delete_user_function(&self, link: UserFunction) -> Result<()> {
        self.remove(
            "DELETE FROM user_functions WHERE user_id = ?1 AND function_id = ?2",
            params![link.user_id, link.function_id],
        )
    }
}
