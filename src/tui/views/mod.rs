//! TUI view components
//!
//! Rendering components for the connector control. Each component is
//! responsible for one part of the control.

mod control;
mod menu_list;
mod option;

pub use control::*;
pub use menu_list::*;
pub use option::*;
