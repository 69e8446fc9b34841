pub mod page;
pub mod pointer;

pub use page::{wire_debounced_resize, wire_visibility};
pub use pointer::wire_avatar_pointer;
