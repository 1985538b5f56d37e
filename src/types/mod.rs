mod capability;
mod models;

pub use capability::{
    Capability, RESERVED_ROLE_IDS, RESERVED_ROLE_NAMES, VACATION_PROJECT_NAME,
};
pub use models::*;
