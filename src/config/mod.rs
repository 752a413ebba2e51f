//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! `PROFILE` 환경변수(dev/prod)에 따라 다른 `.env` 파일이 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`oauth_config`] - 딩톡 OAuth 자격증명, 엔드포인트, state 시크릿 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발/운영 환경별로 다른 설정값을 `.env.dev` / `.env.prod`로 제공합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보(App Secret, state 시크릿)는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//!
//! ### 3. 늦은 실패 대신 명시적 치환
//!
//! 어댑터 자격증명은 누락 시 패닉하지 않고 `None`으로 유지되며,
//! authorize URL 조립 시 빈 문자열로 치환됩니다.

pub mod oauth_config;

pub use oauth_config::*;
