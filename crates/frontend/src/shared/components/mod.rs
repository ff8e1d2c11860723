pub mod tab_set;

pub use tab_set::{TabBar, TabSetLabel, TabSetState};
