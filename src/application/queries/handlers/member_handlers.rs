//! Member Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::MemberStorePort;
use crate::application::queries::{GetMember, ListMembers};
use crate::domain::family::Member;

// ============================================================================
// Response DTOs
// ============================================================================

/// 成员详情响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    pub id: u64,
    pub first_name: String,
    pub age: i64,
    pub lucky_numbers: Vec<i64>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id().value(),
            first_name: member.first_name().to_string(),
            age: member.age(),
            lucky_numbers: member.lucky_numbers().to_vec(),
        }
    }
}

/// 家庭成员列表响应
#[derive(Debug, Clone)]
pub struct FamilyResponse {
    pub last_name: String,
    pub members: Vec<MemberResponse>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetMember Handler
pub struct GetMemberHandler {
    member_store: Arc<dyn MemberStorePort>,
}

impl GetMemberHandler {
    pub fn new(member_store: Arc<dyn MemberStorePort>) -> Self {
        Self { member_store }
    }

    pub async fn handle(&self, query: GetMember) -> Result<MemberResponse, ApplicationError> {
        let member = self
            .member_store
            .get_by_id(query.member_id)
            .ok_or_else(|| ApplicationError::not_found("Member", query.member_id))?;

        Ok(MemberResponse::from(member))
    }
}

/// ListMembers Handler
///
/// `empty_list_is_error` 为 true 时，空集合返回 EmptyCollection 错误
pub struct ListMembersHandler {
    member_store: Arc<dyn MemberStorePort>,
    empty_list_is_error: bool,
}

impl ListMembersHandler {
    pub fn new(member_store: Arc<dyn MemberStorePort>, empty_list_is_error: bool) -> Self {
        Self {
            member_store,
            empty_list_is_error,
        }
    }

    pub async fn handle(&self, _query: ListMembers) -> Result<FamilyResponse, ApplicationError> {
        let members = self.member_store.list_all();

        if members.is_empty() && self.empty_list_is_error {
            return Err(ApplicationError::EmptyCollection(
                "No members found".to_string(),
            ));
        }

        tracing::debug!(count = members.len(), "Members listed");

        Ok(FamilyResponse {
            last_name: self.member_store.last_name().to_string(),
            members: members.into_iter().map(MemberResponse::from).collect(),
        })
    }
}
