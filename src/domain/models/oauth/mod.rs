//! # OAuth Domain Models Module
//!
//! OAuth 로그인 플로우의 프로바이더 공통/개별 모델을 제공합니다.
//!
//! - [`access_token`] - 토큰 교환 결과를 담는 공통 모델
//! - [`dingtalk_oauth_model`] - 딩톡 사용자 정보와 응답 엔벨로프

pub mod access_token;
pub mod dingtalk_oauth_model;

pub use access_token::*;
pub use dingtalk_oauth_model::*;
