//! Member HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{
    AddMember, ApplicationError, DeleteMember, GetMember, ListMembers, MemberResponse,
};
use crate::domain::family::MemberId;
use crate::infrastructure::http::dto::{
    AddMemberRequest, FamilyListResponse, MessageResponse, REQUIRED_MEMBER_FIELDS,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 解析路径中的成员 id
fn member_id(path: Result<Path<u64>, PathRejection>) -> Result<MemberId, ApplicationError> {
    let Path(id) = path.map_err(|e| {
        ApplicationError::validation(format!("Invalid member id: {}", e.body_text()))
    })?;
    Ok(MemberId::new(id))
}

/// 校验添加成员的请求体
///
/// 依次检查 Content-Type、请求体是否存在、必填字段是否齐全，最后检查字段类型
fn parse_add_member(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<AddMemberRequest, ApplicationError> {
    let Json(body) = payload.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ApplicationError::validation("Content-Type must be application/json")
        }
        other => ApplicationError::validation(format!("Invalid JSON body: {}", other.body_text())),
    })?;

    let fields = match body.as_object() {
        Some(fields) if !fields.is_empty() => fields,
        _ => return Err(ApplicationError::validation("Request body is missing")),
    };

    if let Some(missing) = REQUIRED_MEMBER_FIELDS
        .iter()
        .find(|field| !fields.contains_key(**field))
    {
        return Err(ApplicationError::validation(format!("'{}' is required", missing)));
    }

    serde_json::from_value(body)
        .map_err(|e| ApplicationError::validation(format!("Invalid member payload: {}", e)))
}

/// 获取成员列表
pub async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FamilyListResponse>, ApiError> {
    let result = state.list_members_handler.handle(ListMembers).await?;

    Ok(Json(FamilyListResponse {
        last_name: result.last_name,
        family: result.members,
    }))
}

/// 获取成员详情
pub async fn get_member(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<MemberResponse>, ApiError> {
    let query = GetMember {
        member_id: member_id(path)?,
    };

    let result = state.get_member_handler.handle(query).await?;

    Ok(Json(result))
}

/// 添加成员
pub async fn add_member(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let req = parse_add_member(payload)?;

    let command = AddMember {
        first_name: req.first_name,
        age: req.age,
        lucky_numbers: req.lucky_numbers,
    };

    let result = state.add_member_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

/// 删除成员
pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let member_id = member_id(path)?;

    state
        .delete_member_handler
        .handle(DeleteMember { member_id })
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "Member with ID {} has been successfully deleted",
        member_id
    ))))
}
