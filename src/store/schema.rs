pub const SCHEMA: &str = r#"
-- Contract kinds (internship, permanent, ...)
CREATE TABLE IF NOT EXISTS contracts (
    contract_id INTEGER PRIMARY KEY AUTOINCREMENT,
    contract_name TEXT NOT NULL
);

-- Job functions a user can hold
CREATE TABLE IF NOT EXISTS functions (
    function_id INTEGER PRIMARY KEY AUTOINCREMENT,
    function_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS companies (
    company_id INTEGER PRIMARY KEY AUTOINCREMENT,
    company_name TEXT NOT NULL
);

-- The "Vacation" project is reserved and seeded at bootstrap
CREATE TABLE IF NOT EXISTS projects (
    project_id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_name TEXT NOT NULL UNIQUE
);

-- Roles carry four independent capability flags
CREATE TABLE IF NOT EXISTS roles (
    role_id INTEGER PRIMARY KEY AUTOINCREMENT,
    role_name TEXT NOT NULL UNIQUE,
    can_add_and_modify_users INTEGER NOT NULL,
    can_see_other_schedules INTEGER NOT NULL,
    can_add_projects INTEGER NOT NULL,
    can_see_reports INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    contract_id INTEGER NOT NULL REFERENCES contracts(contract_id),
    role_id INTEGER NOT NULL REFERENCES roles(role_id),
    username TEXT NOT NULL,
    password TEXT NOT NULL,           -- argon2id hash with embedded salt
    last_name TEXT NOT NULL,
    first_name TEXT NOT NULL,
    mail TEXT NOT NULL UNIQUE,
    theoretical_hours_worked INTEGER NOT NULL,
    vacation_hours INTEGER NOT NULL
);

-- Work periods; dates are stored as "YYYY-MM-DD HH:MM:SS"
CREATE TABLE IF NOT EXISTS schedules (
    schedule_id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL REFERENCES projects(project_id),
    start_date TEXT,
    end_date TEXT
);

CREATE TABLE IF NOT EXISTS comments (
    comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    schedule_id INTEGER NOT NULL REFERENCES schedules(schedule_id),
    comment TEXT NOT NULL,
    is_important INTEGER NOT NULL
);

-- Join tables
CREATE TABLE IF NOT EXISTS company_projects (
    company_id INTEGER REFERENCES companies(company_id),
    project_id INTEGER REFERENCES projects(project_id),
    PRIMARY KEY (company_id, project_id)
);

CREATE TABLE IF NOT EXISTS company_users (
    company_id INTEGER REFERENCES companies(company_id),
    user_id INTEGER REFERENCES users(user_id),
    PRIMARY KEY (company_id, user_id)
);

CREATE TABLE IF NOT EXISTS user_schedules (
    user_id INTEGER REFERENCES users(user_id),
    schedule_id INTEGER REFERENCES schedules(schedule_id),
    PRIMARY KEY (user_id, schedule_id)
);

CREATE TABLE IF NOT EXISTS user_functions (
    user_id INTEGER REFERENCES users(user_id),
    function_id INTEGER REFERENCES functions(function_id),
    PRIMARY KEY (user_id, function_id)
);

CREATE INDEX IF NOT EXISTS idx_users_role ON users(role_id);
CREATE INDEX IF NOT EXISTS idx_schedules_project ON schedules(project_id);
CREATE INDEX IF NOT EXISTS idx_comments_schedule ON comments(schedule_id);
"#;

/// Drops every table, children first.
pub const DROP_SCHEMA: &str = r#"
DROP TABLE IF EXISTS user_functions;
DROP TABLE IF EXISTS user_schedules;
DROP TABLE IF EXISTS company_users;
DROP TABLE IF EXISTS company_projects;
DROP TABLE IF EXISTS comments;
DROP TABLE IF EXISTS schedules;
DROP TABLE IF EXISTS users;
DROP TABLE IF EXISTS roles;
DROP TABLE IF EXISTS projects;
DROP TABLE IF EXISTS companies;
DROP TABLE IF EXISTS functions;
DROP TABLE IF EXISTS contracts;
"#;
