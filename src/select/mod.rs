//! Dropdown select widget: single or multiple selection, keyboard
//! navigation, custom option rendering.

mod option;
mod state;
mod view;

pub use option::SelectOption;
pub use state::{SelectConfig, SelectData, SelectState};
pub use view::{control_id, menu_id, option_id};
