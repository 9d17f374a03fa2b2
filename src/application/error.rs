//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::family::MemberId;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} with ID {id} not found")]
    NotFound {
        resource_type: &'static str,
        id: MemberId,
    },

    /// 验证错误（请求体缺失、必填字段缺失、类型不符）
    #[error("{0}")]
    ValidationError(String),

    /// 集合为空（仅在 empty_list_is_error 策略开启时产生）
    #[error("{0}")]
    EmptyCollection(String),

    /// 存储错误
    #[error("Store error: {0}")]
    StoreError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: MemberId) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<crate::application::ports::MemberStoreError> for ApplicationError {
    fn from(err: crate::application::ports::MemberStoreError) -> Self {
        Self::StoreError(err.to_string())
    }
}
