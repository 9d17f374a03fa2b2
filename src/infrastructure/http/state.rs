//! Application State
//!
//! 包含 MemberStore 以及所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddMemberHandler, DeleteMemberHandler,
    // Query handlers
    GetMemberHandler, ListMembersHandler,
    // Ports
    MemberStorePort,
};

/// 应用状态
///
/// MemberStore 在启动时创建一次，通过 AppState 注入所有 handler
pub struct AppState {
    // ========== Ports ==========
    pub member_store: Arc<dyn MemberStorePort>,

    // ========== Command Handlers ==========
    pub add_member_handler: AddMemberHandler,
    pub delete_member_handler: DeleteMemberHandler,

    // ========== Query Handlers ==========
    pub get_member_handler: GetMemberHandler,
    pub list_members_handler: ListMembersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(member_store: Arc<dyn MemberStorePort>, empty_list_is_error: bool) -> Self {
        Self {
            member_store: member_store.clone(),

            add_member_handler: AddMemberHandler::new(member_store.clone()),
            delete_member_handler: DeleteMemberHandler::new(member_store.clone()),

            get_member_handler: GetMemberHandler::new(member_store.clone()),
            list_members_handler: ListMembersHandler::new(member_store, empty_list_is_error),
        }
    }
}
