//! # Data Transfer Objects Module
//!
//! HTTP 계층의 요청/응답 구조체를 기능별로 묶어 제공합니다.

pub mod auth;

// 공통 re-exports
pub use auth::*;
