//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 요청 서명, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`sign_tool`] - 타임스탬프 생성, HMAC-SHA256 서명, 쿼리 문자열 조립
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::sign_tool::{timestamp, sign};
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! // 요청 서명
//! let ts = timestamp();
//! let signature = sign(&ts, "app-secret")?;
//!
//! // 터미널 출력
//! print_boxed_title("System Initialized");
//! ```

pub mod sign_tool;
pub mod display_terminal;
