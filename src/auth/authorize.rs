//! Role-based access decisions for protected routes.
//!
//! The decision only looks at the HTTP method and the first three path
//! segments, read as `/{resource}/{id}/{goal}`. Anything the table does not
//! mention is allowed.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::Identity;
use crate::server::AppState;
use crate::types::{Capability, RESERVED_ROLE_IDS, Role};

/// The parts of a request the access table looks at.
#[derive(Debug, Clone, Copy)]
pub struct Target<'a> {
    pub method: &'a Method,
    pub resource: &'a str,
    pub id: Option<i64>,
    pub goal: Option<&'a str>,
}

impl<'a> Target<'a> {
    /// Splits a request path into resource, numeric id and goal segments.
    #[must_use]
    pub fn parse(method: &'a Method, path: &'a str) -> Self {
        let mut segments = path.trim_start_matches('/').split('/');

        let resource = segments.next().unwrap_or_default();
        let id = segments.next().and_then(|s| s.parse().ok());
        let goal = segments.next().filter(|s| !s.is_empty());

        Self {
            method,
            resource,
            id,
            goal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// The role lacks a capability.
    Forbidden(&'static str),
    /// The request targets a reserved row.
    Reserved(&'static str),
}

impl Decision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        self == Decision::Allow
    }
}

impl IntoResponse for Decision {
    fn into_response(self) -> Response {
        match self {
            Decision::Allow => StatusCode::OK.into_response(),
            Decision::Forbidden(message) => (StatusCode::FORBIDDEN, message).into_response(),
            Decision::Reserved(message) => (StatusCode::UNAUTHORIZED, message).into_response(),
        }
    }
}

fn require(role: &Role, capability: Capability, message: &'static str) -> Decision {
    if role.has(capability) {
        Decision::Allow
    } else {
        Decision::Forbidden(message)
    }
}

/// Decides whether a role may perform the request.
///
/// `vacation_project_id` is the id of the reserved Vacation project, if it
/// exists.
#[must_use]
pub fn decide(target: Target<'_>, role: &Role, vacation_project_id: Option<i64>) -> Decision {
    let targets_vacation = target.id.is_some() && target.id == vacation_project_id;

    match (target.method, target.resource) {
        (&Method::DELETE, "users") => {
            require(role, Capability::ManageUsers, "Deleting a user is forbidden")
        }
        (&Method::DELETE, "projects") => {
            if targets_vacation {
                Decision::Reserved("Can't delete the vacation project")
            } else {
                require(role, Capability::AddProjects, "Deleting a project is forbidden")
            }
        }
        (&Method::DELETE, "roles") => match target.id {
            Some(id) if RESERVED_ROLE_IDS.contains(&id) => {
                Decision::Reserved("Can't delete one of the basic roles")
            }
            _ => Decision::Allow,
        },
        (&Method::PATCH, "users") => {
            require(role, Capability::ManageUsers, "Updating a user is forbidden")
        }
        (&Method::PATCH, "projects") if targets_vacation => {
            Decision::Reserved("Can't modify the vacation project")
        }
        (&Method::PUT, "users") => {
            require(role, Capability::ManageUsers, "Creating a user is forbidden")
        }
        (&Method::PUT, "projects") => require(
            role,
            Capability::AddProjects,
            "Creating a new project is forbidden",
        ),
        (&Method::GET | &Method::HEAD, "users") if target.goal == Some("schedules") => require(
            role,
            Capability::SeeOtherSchedules,
            "Getting other schedules is forbidden",
        ),
        _ => Decision::Allow,
    }
}

/// Applies [`decide`] to every request, using the caller's role as stored
/// right now.
pub async fn authorize(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(identity) = request.extensions().get::<Identity>().cloned() else {
        return (StatusCode::UNAUTHORIZED, "Not authenticated").into_response();
    };

    let role = match state.store.get_role(identity.role_id) {
        Ok(Some(role)) => role,
        Ok(None) => {
            tracing::debug!("Role {} of {} does not exist", identity.role_id, identity.mail);
            return (StatusCode::BAD_REQUEST, "GetRole error").into_response();
        }
        Err(e) => {
            tracing::error!("Failed to load role {}: {e}", identity.role_id);
            return (StatusCode::BAD_REQUEST, "GetRole error").into_response();
        }
    };

    let vacation_project_id = match state.store.get_vacation_project() {
        Ok(project) => project.map(|p| p.project_id),
        Err(e) => {
            tracing::error!("Failed to load the vacation project: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "GetProject error").into_response();
        }
    };

    let decision = {
        let target = Target::parse(request.method(), request.uri().path());
        decide(target, &role, vacation_project_id)
    };

    if !decision.is_allowed() {
        tracing::debug!(
            "Denied {} {} for {}: {decision:?}",
            request.method(),
            request.uri().path(),
            identity.mail
        );
        return decision.into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const VACATION: Option<i64> = Some(1);

    fn nobody() -> Role {
        Role::with_capabilities("Nobody", &[])
    }

    fn everybody() -> Role {
        Role::with_capabilities("Everybody", &Capability::ALL)
    }

    fn check(method: Method, path: &str, role: &Role) -> Decision {
        decide(Target::parse(&method, path), role, VACATION)
    }

    #[test]
    fn test_parse_target() {
        let target = Target::parse(&Method::GET, "/users/12/schedules");
        assert_eq!(target.resource, "users");
        assert_eq!(target.id, Some(12));
        assert_eq!(target.goal, Some("schedules"));

        let target = Target::parse(&Method::GET, "/users");
        assert_eq!(target.resource, "users");
        assert_eq!(target.id, None);
        assert_eq!(target.goal, None);

        let target = Target::parse(&Method::GET, "/users/abc");
        assert_eq!(target.id, None);
    }

    #[test]
    fn test_delete_users() {
        assert!(matches!(
            check(Method::DELETE, "/users/5", &nobody()),
            Decision::Forbidden(_)
        ));
        assert!(check(Method::DELETE, "/users/5", &everybody()).is_allowed());
    }

    #[test]
    fn test_delete_projects() {
        assert!(matches!(
            check(Method::DELETE, "/projects/1", &everybody()),
            Decision::Reserved(_)
        ));
        assert!(matches!(
            check(Method::DELETE, "/projects/1", &nobody()),
            Decision::Reserved(_)
        ));
        assert!(matches!(
            check(Method::DELETE, "/projects/4", &nobody()),
            Decision::Forbidden(_)
        ));
        assert!(check(Method::DELETE, "/projects/4", &everybody()).is_allowed());
    }

    #[test]
    fn test_delete_projects_follows_vacation_id() {
        let target = Target::parse(&Method::DELETE, "/projects/9");
        assert!(matches!(
            decide(target, &everybody(), Some(9)),
            Decision::Reserved(_)
        ));
        assert!(decide(target, &everybody(), None).is_allowed());
    }

    #[test]
    fn test_delete_roles() {
        for id in RESERVED_ROLE_IDS {
            let path = format!("/roles/{id}");
            assert!(matches!(
                check(Method::DELETE, &path, &everybody()),
                Decision::Reserved(_)
            ));
        }
        assert!(check(Method::DELETE, "/roles/4", &nobody()).is_allowed());
    }

    #[test]
    fn test_patch_users() {
        assert!(matches!(
            check(Method::PATCH, "/users/5", &nobody()),
            Decision::Forbidden(_)
        ));
        let role = Role::with_capabilities("Manager", &[Capability::ManageUsers]);
        assert!(check(Method::PATCH, "/users/5", &role).is_allowed());
    }

    #[test]
    fn test_patch_projects() {
        assert!(matches!(
            check(Method::PATCH, "/projects/1", &everybody()),
            Decision::Reserved(_)
        ));
        assert!(check(Method::PATCH, "/projects/2", &nobody()).is_allowed());
    }

    #[test]
    fn test_put_rows() {
        assert!(matches!(
            check(Method::PUT, "/users", &nobody()),
            Decision::Forbidden(_)
        ));
        assert!(check(Method::PUT, "/users", &everybody()).is_allowed());

        assert!(matches!(
            check(Method::PUT, "/projects", &nobody()),
            Decision::Forbidden(_)
        ));
        let role = Role::with_capabilities("Lead", &[Capability::AddProjects]);
        assert!(check(Method::PUT, "/projects", &role).is_allowed());
    }

    #[test]
    fn test_get_other_schedules() {
        assert!(matches!(
            check(Method::GET, "/users/3/schedules", &nobody()),
            Decision::Forbidden(_)
        ));
        let role = Role::with_capabilities("Viewer", &[Capability::SeeOtherSchedules]);
        assert!(check(Method::GET, "/users/3/schedules", &role).is_allowed());

        assert!(check(Method::GET, "/users/3", &nobody()).is_allowed());
        assert!(check(Method::GET, "/users/3/comments", &nobody()).is_allowed());
    }

    #[test]
    fn test_head_other_schedules_follows_get() {
        assert!(matches!(
            check(Method::HEAD, "/users/3/schedules", &nobody()),
            Decision::Forbidden(_)
        ));
        let role = Role::with_capabilities("Viewer", &[Capability::SeeOtherSchedules]);
        assert!(check(Method::HEAD, "/users/3/schedules", &role).is_allowed());
    }

    #[test]
    fn test_unlisted_requests_are_allowed() {
        let role = nobody();
        assert!(check(Method::POST, "/users", &role).is_allowed());
        assert!(check(Method::POST, "/projects", &role).is_allowed());
        assert!(check(Method::DELETE, "/contracts/1", &role).is_allowed());
        assert!(check(Method::PATCH, "/roles/1", &role).is_allowed());
        assert!(check(Method::GET, "/projects/1/schedules", &role).is_allowed());
    }

    #[test]
    fn test_denials_map_to_status() {
        assert_eq!(
            Decision::Forbidden("x").into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            Decision::Reserved("x").into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
