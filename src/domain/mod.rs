//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Family Context: 家庭成员

pub mod family;
