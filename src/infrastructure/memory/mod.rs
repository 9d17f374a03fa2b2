//! Memory Layer - In-Memory State Management
//!
//! 实现 MemberStore，进程重启后状态丢失

mod member_store;

pub use member_store::InMemoryMemberStore;
