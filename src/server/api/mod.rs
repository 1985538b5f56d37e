mod comments;
mod companies;
mod contracts;
mod functions;
mod links;
mod projects;
mod roles;
mod schedules;
mod users;
mod vacations;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::server::AppState;

/// Routes that require an authenticated session.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // User routes
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/{id}/schedules", get(users::list_user_schedules))
        .route("/users/{id}/vacations", get(users::list_user_vacations))
        .route("/users/{id}/comments", get(users::list_user_comments))
        .route("/users/{id}/projects", get(users::list_user_projects))
        .route("/users/{id}/functions", get(users::list_user_functions))
        .route("/users/{id}/role", get(users::get_user_role))
        .route("/users/{id}/contract", get(users::get_user_contract))
        .route(
            "/users/{id}/schedules/{schedule_id}",
            post(links::add_user_schedule).delete(links::remove_user_schedule),
        )
        .route(
            "/users/{id}/functions/{function_id}",
            post(links::add_user_function).delete(links::remove_user_function),
        )
        // Role routes
        .route("/roles", get(roles::list_roles).post(roles::create_role))
        .route(
            "/roles/{id}",
            get(roles::get_role)
                .patch(roles::update_role)
                .delete(roles::delete_role),
        )
        // Contract routes
        .route(
            "/contracts",
            get(contracts::list_contracts).post(contracts::create_contract),
        )
        .route(
            "/contracts/{id}",
            get(contracts::get_contract)
                .patch(contracts::update_contract)
                .delete(contracts::delete_contract),
        )
        // Function routes
        .route(
            "/functions",
            get(functions::list_functions).post(functions::create_function),
        )
        .route(
            "/functions/{id}",
            get(functions::get_function)
                .patch(functions::update_function)
                .delete(functions::delete_function),
        )
        // Company routes
        .route(
            "/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/companies/{id}",
            get(companies::get_company)
                .patch(companies::update_company)
                .delete(companies::delete_company),
        )
        .route("/companies/{id}/users", get(users::list_company_users))
        .route(
            "/companies/{id}/projects",
            get(companies::list_company_projects),
        )
        .route(
            "/companies/{id}/users/{user_id}",
            post(links::add_company_user).delete(links::remove_company_user),
        )
        .route(
            "/companies/{id}/projects/{project_id}",
            post(links::add_company_project).delete(links::remove_company_project),
        )
        // Project routes
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/{id}",
            get(projects::get_project)
                .patch(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/projects/{id}/users", get(users::list_project_users))
        .route(
            "/projects/{id}/schedules",
            get(projects::list_project_schedules),
        )
        .route(
            "/projects/{id}/comments",
            get(projects::list_project_comments),
        )
        // Schedule routes
        .route("/schedules", post(schedules::create_schedule))
        .route(
            "/schedules/{id}",
            get(schedules::get_schedule)
                .patch(schedules::update_schedule)
                .delete(schedules::delete_schedule),
        )
        .route("/schedules/{id}/users", get(users::list_schedule_users))
        .route(
            "/schedules/{id}/comments",
            get(schedules::list_schedule_comments),
        )
        // Vacation routes
        .route("/vacations", post(vacations::create_vacation))
        .route(
            "/vacations/{id}",
            get(vacations::get_vacation)
                .patch(vacations::update_vacation)
                .delete(vacations::delete_vacation),
        )
        // Comment routes
        .route(
            "/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/comments/{id}",
            get(comments::get_comment)
                .patch(comments::update_comment)
                .delete(comments::delete_comment),
        )
}
