//! Embassy tasks
//!
//! Only the button handlers run as tasks; the input loop runs directly in
//! `main` on the thread executor.

mod buttons;

pub use buttons::button_task;
