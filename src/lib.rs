pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod select;
pub mod styles;
pub mod subscription;
pub mod types;

pub use element::{contains_element, find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton, SelectValue};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_focusable};
pub use layout::{LayoutResult, Rect};
pub use select::{
    control_id, menu_id, option_id, SelectConfig, SelectData, SelectOption, SelectState,
};
pub use styles::{ensure_styles, install_count, Stylesheet, STYLE_ID};
pub use subscription::{PointerRegistry, PointerSubscription};
pub use types::*;
