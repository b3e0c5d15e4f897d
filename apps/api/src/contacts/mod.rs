// Contact capture for the "coming soon" signup form.
// Implements: email validation, plan-interest normalization, a single insert into `contacts`.

pub mod handlers;
pub mod store;
pub mod validation;

pub use store::{ContactStore, PgContactStore};
