//!
//! # Create secret form
//!
//! Field state of the form, the rules deciding which fields are invalid and
//! creation of the resulting basic-auth secret.
//!
mod create;
mod form;
mod options;
mod session;
mod validate;

pub use create::*;
pub use form::*;
pub use options::*;
pub use session::*;
pub use validate::*;
