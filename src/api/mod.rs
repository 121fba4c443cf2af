//! API module
//!
//! `ApiClient` exposes one accessor per remote resource. All of them go
//! through a single templated fetch engine driven by the table in
//! [`resources`]:
//!
//! 1. render the resource's path template with the supplied identifiers
//! 2. dispatch through the HTTP client
//! 3. unwrap the envelope, failing on `success: false` or a non-200 status
//! 4. narrow the data into the accessor's result type

mod client;
pub mod resources;

pub use client::{ApiClient, SessionIds};
pub use resources::{Argument, Resource};
