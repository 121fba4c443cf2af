//! Output module
//!
//! Human-readable printers for accessor results. Presentation only.

mod printer;

pub use printer::{
    print_client_info, print_endpoints, print_records, render_client_info, render_endpoints,
    render_records, NOT_AVAILABLE,
};

#[cfg(test)]
mod tests;
