//! # Authentication Services Module
//!
//! 스캔 로그인 플로우를 구성하는 서비스와 어댑터 계약을 제공합니다.
//!
//! - [`oauth_adapter`] - 프로바이더 공통 OAuth capability trait
//! - [`dingtalk_oauth`] - 딩톡 스캔 로그인 어댑터
//! - [`dingtalk_auth_service`] - 플로우 오케스트레이션 싱글톤 서비스

pub mod oauth_adapter;
pub mod dingtalk_oauth;
pub mod dingtalk_auth_service;

pub use oauth_adapter::*;
pub use dingtalk_oauth::*;
pub use dingtalk_auth_service::*;
