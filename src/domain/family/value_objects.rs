//! Family Context - Value Objects

use serde::{Deserialize, Serialize};

/// 成员唯一标识
///
/// 由 MemberStore 单调递增分配，从 1 开始，删除后不会复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
    /// 第一个分配的 id
    pub const FIRST: MemberId = MemberId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 下一个 id，溢出时返回 None
    pub fn next(&self) -> Option<MemberId> {
        self.0.checked_add(1).map(MemberId)
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_is_strictly_greater() {
        let id = MemberId::FIRST;
        let next = id.next().unwrap();
        assert!(next > id);
        assert_eq!(next.value(), 2);
    }

    #[test]
    fn test_next_overflow() {
        assert!(MemberId::new(u64::MAX).next().is_none());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&MemberId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
