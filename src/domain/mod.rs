//! # Domain Module
//!
//! 도메인 모델과 전송 계층 DTO를 제공합니다.
//!
//! - [`models`] - OAuth 토큰/사용자 정보 등 비즈니스 모델
//! - [`dto`] - HTTP 요청/응답 구조체

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
