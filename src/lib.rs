//! Family API - 家庭成员 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Family Context: 成员实体与标识
//!
//! 应用层 (application/):
//! - Ports: MemberStorePort
//! - Commands: AddMember, DeleteMember
//! - Queries: GetMember, ListMembers
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: InMemoryMemberStore

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
