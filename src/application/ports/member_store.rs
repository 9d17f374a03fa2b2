//! Member Store Port - 家庭成员存储
//!
//! 定义成员集合的抽象接口，具体实现在 infrastructure/memory 层

use thiserror::Error;

use crate::domain::family::{Member, MemberId, NewMember};

/// Member Store 错误
///
/// 查询不到成员不是错误，通过 `Option` 表示
#[derive(Debug, Error)]
pub enum MemberStoreError {
    #[error("Member id space exhausted after {0}")]
    IdSpaceExhausted(MemberId),
}

/// Member Store Port
///
/// 管理成员集合与 id 计数器，所有状态存储在内存中
pub trait MemberStorePort: Send + Sync {
    /// 家庭姓氏
    fn last_name(&self) -> &str;

    /// 按插入顺序返回所有成员
    fn list_all(&self) -> Vec<Member>;

    /// 根据 id 查找成员
    fn get_by_id(&self, id: MemberId) -> Option<Member>;

    /// 添加成员，分配下一个 id
    fn add(&self, input: NewMember) -> Result<Member, MemberStoreError>;

    /// 删除成员，返回被删除的记录
    fn delete(&self, id: MemberId) -> Option<Member>;

    /// 当前成员数量
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
