//! Family Context - 家庭成员限界上下文
//!
//! 职责:
//! - 成员实体与标识
//! - 新成员输入（不含 id，由 MemberStore 分配）

mod entities;
mod value_objects;

pub use entities::{Member, NewMember};
pub use value_objects::MemberId;
