pub mod avatar;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod field;
pub mod nav;
pub mod particles;
pub mod render;
pub mod scheduler;
pub mod smoothing;
pub mod theme;
pub mod typewriter;

pub use avatar::*;
pub use debounce::*;
pub use error::*;
pub use field::*;
pub use particles::*;
pub use render::*;
pub use scheduler::*;
pub use smoothing::*;
pub use theme::*;
pub use typewriter::*;
