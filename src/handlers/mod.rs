//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   OAuth Adapter - 외부 프로바이더 연동              ← Integration Layer
//! ├─────────────────────────────────────────────┤
//!   Models - 도메인 모델                            ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 주요 특징
//!
//! ### 1. 비동기 처리
//! - **Future 기반**: 모든 핸들러가 `async/await` 사용
//! - **논블로킹 I/O**: 딩톡 API 호출 시 블로킹 없음
//!
//! ### 2. 타입 안전성
//! - **컴파일 타임 검증**: 요청/응답 타입 검증
//! - **자동 직렬화**: JSON ↔ Rust 구조체 자동 변환
//! - **검증 통합**: validator 크레이트로 입력 검증
//!
//! ### 3. 에러 처리
//! - **Result 패턴**: Rust의 에러 처리 관용구 활용
//! - **자동 변환**: `?` 연산자로 에러 자동 전파
//! - **통합 에러 타입**: AppError로 모든 에러 통합 처리
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 딩톡 스캔 로그인 엔드포인트
//!   - 로그인 URL 발급 (`GET /auth/dingtalk/login`)
//!   - OAuth 콜백 (`GET /auth/dingtalk/callback`)

pub mod auth;
