//! Member Queries

use crate::domain::family::MemberId;

/// 获取成员详情查询
#[derive(Debug, Clone)]
pub struct GetMember {
    pub member_id: MemberId,
}

/// 列出所有成员查询
#[derive(Debug, Clone)]
pub struct ListMembers;
