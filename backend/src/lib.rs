//! Backend for the weekly allowance account.
//!
//! - **domain**: the account model and the service that drives it
//! - **io**: mapping between domain values and the `shared` DTOs

pub mod domain;
pub mod io;

pub use domain::*;
pub use io::*;
