//! Member Commands

use crate::domain::family::MemberId;

/// 添加成员命令
#[derive(Debug, Clone)]
pub struct AddMember {
    pub first_name: String,
    pub age: i64,
    pub lucky_numbers: Vec<i64>,
}

/// 删除成员命令
#[derive(Debug, Clone)]
pub struct DeleteMember {
    pub member_id: MemberId,
}
