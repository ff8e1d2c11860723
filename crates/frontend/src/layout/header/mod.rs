pub mod header;
pub mod nav_dropdown;

pub use header::SiteHeader;
pub use nav_dropdown::{NavDropdown, NavMenuItem};
