//! Command Handlers 实现

mod member_handlers;

pub use member_handlers::*;
