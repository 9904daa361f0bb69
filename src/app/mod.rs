pub mod app;
pub mod event;
pub mod input_buffer;
pub mod mode;
pub mod render_state;
pub mod state;

pub use app::{App, StatusKind, StatusMessage};
pub use event::AppEvent;
pub use input_buffer::InputBuffer;
pub use mode::AppMode;
pub use render_state::{RenderState, ResultRow};
pub use state::FormState;
