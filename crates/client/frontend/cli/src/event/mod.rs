//! Frame loop and its input/render handlers.
mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
