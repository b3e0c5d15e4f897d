// Ad Builder: repurposes landing-page sections into fixed-size marketing images.
// Implements: section copy catalog, ad composition, HTTP handlers.
// All computation is pure and synchronous; handlers never touch the database.

pub mod composer;
pub mod handlers;
pub mod sections;
