//! Member Command Handlers

use std::sync::Arc;

use crate::application::commands::{AddMember, DeleteMember};
use crate::application::error::ApplicationError;
use crate::application::ports::MemberStorePort;
use crate::application::queries::handlers::MemberResponse;
use crate::domain::family::NewMember;

// ============================================================================
// AddMember
// ============================================================================

/// AddMember Handler
pub struct AddMemberHandler {
    member_store: Arc<dyn MemberStorePort>,
}

impl AddMemberHandler {
    pub fn new(member_store: Arc<dyn MemberStorePort>) -> Self {
        Self { member_store }
    }

    pub async fn handle(&self, command: AddMember) -> Result<MemberResponse, ApplicationError> {
        let input = NewMember::new(command.first_name, command.age, command.lucky_numbers);
        let member = self.member_store.add(input)?;

        tracing::info!(
            member_id = %member.id(),
            first_name = %member.first_name(),
            "Member added"
        );

        Ok(MemberResponse::from(member))
    }
}

// ============================================================================
// DeleteMember
// ============================================================================

/// DeleteMember Handler
pub struct DeleteMemberHandler {
    member_store: Arc<dyn MemberStorePort>,
}

impl DeleteMemberHandler {
    pub fn new(member_store: Arc<dyn MemberStorePort>) -> Self {
        Self { member_store }
    }

    /// 删除成员，返回被删除的记录
    pub async fn handle(&self, command: DeleteMember) -> Result<MemberResponse, ApplicationError> {
        let member_id = command.member_id;

        let member = self
            .member_store
            .delete(member_id)
            .ok_or_else(|| ApplicationError::not_found("Member", member_id))?;

        tracing::info!(
            member_id = %member_id,
            first_name = %member.first_name(),
            "Member deleted"
        );

        Ok(MemberResponse::from(member))
    }
}
