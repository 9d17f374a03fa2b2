//! Family Context - Entities

use serde::{Deserialize, Serialize};

use super::MemberId;

/// 新成员输入
///
/// 三个字段都必须出现（lucky_numbers 可以为空），不做范围校验
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewMember {
    pub first_name: String,
    pub age: i64,
    pub lucky_numbers: Vec<i64>,
}

impl NewMember {
    pub fn new(first_name: impl Into<String>, age: i64, lucky_numbers: Vec<i64>) -> Self {
        Self {
            first_name: first_name.into(),
            age,
            lucky_numbers,
        }
    }
}

/// 家庭成员
///
/// 不变量:
/// - id 创建后不可变
/// - 没有更新操作，成员创建后整体不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    first_name: String,
    age: i64,
    lucky_numbers: Vec<i64>,
}

impl Member {
    /// 以分配好的 id 创建成员
    pub fn new(id: MemberId, input: NewMember) -> Self {
        Self {
            id,
            first_name: input.first_name,
            age: input.age,
            lucky_numbers: input.lucky_numbers,
        }
    }

    // Getters
    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn lucky_numbers(&self) -> &[i64] {
        &self.lucky_numbers
    }
}
