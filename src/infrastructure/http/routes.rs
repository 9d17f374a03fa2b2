//! HTTP Routes
//!
//! API Endpoints:
//! - /                  GET     接口列表（sitemap）
//! - /ping              GET     健康检查
//! - /members           GET     列出所有成员
//! - /members           POST    添加成员
//! - /members/:id       GET     获取成员详情
//! - /members/:id       DELETE  删除成员
//!
//! 成员路由同时接受末尾斜杠

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::sitemap))
        .route("/ping", get(handlers::ping))
        .merge(member_routes())
}

/// Member 路由
fn member_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/members", member_collection())
        .route("/members/", member_collection())
        .route("/members/:id", member_item())
        .route("/members/:id/", member_item())
}

fn member_collection() -> MethodRouter<Arc<AppState>> {
    get(handlers::list_members).post(handlers::add_member)
}

fn member_item() -> MethodRouter<Arc<AppState>> {
    get(handlers::get_member).delete(handlers::delete_member)
}
