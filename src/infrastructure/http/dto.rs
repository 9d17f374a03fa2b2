//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::MemberResponse;

// ============================================================================
// Member DTOs
// ============================================================================

/// 添加成员请求体中必须出现的字段，按顺序校验
pub const REQUIRED_MEMBER_FIELDS: [&str; 3] = ["first_name", "age", "lucky_numbers"];

/// 添加成员请求
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub first_name: String,
    pub age: i64,
    pub lucky_numbers: Vec<i64>,
}

/// 成员列表响应
#[derive(Debug, Serialize)]
pub struct FamilyListResponse {
    pub last_name: String,
    pub family: Vec<MemberResponse>,
}

/// 仅包含提示信息的响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
