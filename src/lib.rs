//! 딩톡 스캔 로그인 백엔드
//!
//! Rust 기반의 딩톡(DingTalk) 스캔 로그인 서비스입니다.
//! 딩톡 QR 스캔 인증 URL 생성, 콜백 코드 처리, HMAC-SHA256 서명 기반
//! 사용자 정보 조회, 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **스캔 로그인 URL**: 딩톡 인증 페이지 URL 및 state 생성
//! - **콜백 처리**: 임시 인증 코드(tmp_auth_code) 수신 및 검증
//! - **요청 서명**: 타임스탬프 기반 HMAC-SHA256 서명
//! - **사용자 정보 조회**: 서명된 요청으로 딩톡 프로필 획득
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (state 생성/검증)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  OAuth Adapter  │ ← 딩톡 API 연동 (서명, 코드 교환)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DingTalk API   │ ← 외부 프로바이더
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use dingtalk_login_backend::services::auth::DingTalkAuthService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let auth_service = DingTalkAuthService::instance();
//!
//! // 스캔 로그인 URL 발급 및 콜백 인증 처리
//! let login = auth_service.get_login_url()?;
//! let user_info = auth_service.authenticate_with_callback(&params).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
