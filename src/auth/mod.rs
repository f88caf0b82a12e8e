pub mod middleware;

pub use middleware::{InternalSecretAuth, INTERNAL_SECRET_HEADER};
