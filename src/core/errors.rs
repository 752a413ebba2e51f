//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror` 기반의 열거형 에러 타입과 Actix-Web `ResponseError` 구현을 결합하여
//! 서비스 계층의 실패가 일관된 JSON 에러 응답으로 변환되도록 합니다.
//!
//! ## 설계 철학
//!
//! ### 1. 계층화된 에러 분류
//! - **로컬 검증 실패**: 콜백 매개변수 누락 등 요청 자체의 문제
//! - **프로바이더 에러**: 딩톡 응답 엔벨로프가 나타내는 인증 실패
//! - **전송/파싱 실패**: HTTP 클라이언트와 JSON 디코더의 원본 에러
//!
//! ### 2. 원본 에러 보존
//!
//! `reqwest::Error`와 `serde_json::Error`는 `#[from]` 변환으로 감싸며,
//! 메시지를 재가공하지 않고 그대로 전파합니다. 프로바이더 엔벨로프 에러는
//! 딩톡이 돌려준 `errmsg`를 가공 없이 Display 메시지로 사용합니다.
//!
//! ### 3. 자동 HTTP 응답 변환
//!
//! `ResponseError` 구현으로 모든 에러가 적절한 상태 코드와
//! `{"error": "..."}` 형태의 JSON 본문으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 콜백에 `code` 누락 등 입력 검증 실패 |
//! | `AuthenticationError` | 401 Unauthorized | state 검증 실패, 인증 거부 |
//! | `ProviderError` | 401 Unauthorized | 딩톡 에러 엔벨로프 (`errcode != 0`) |
//! | `HttpError` | 500 Internal Server Error | 전송 계층 실패 |
//! | `JsonError` | 500 Internal Server Error | 응답 본문 디코딩 실패 |
//! | `ExternalServiceError` | 500 Internal Server Error | 기타 외부 API 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn get_access_token(params: &HashMap<String, String>) -> Result<AccessTokenModel, AppError> {
//!     let code = params.get("code").ok_or_else(|| {
//!         AppError::ValidationError("콜백 매개변수에 code가 없습니다".to_string())
//!     })?;
//!
//!     Ok(AccessTokenModel::new(code.clone()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 스캔 로그인 플로우에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror` 크레이트를 사용하여 자동으로 `Error` trait을 구현하고,
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 콜백 쿼리에 필수 매개변수(`code`)가 누락되었거나
    /// 요청 형식이 올바르지 않을 때 발생합니다. 400 Bad Request로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 에러
    ///
    /// OAuth state 검증 실패, 사용자의 인증 거부 등
    /// 로그인 플로우 자체가 거절된 경우입니다. 401 Unauthorized로 응답됩니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 프로바이더 에러 엔벨로프
    ///
    /// 딩톡 API 응답의 `errcode`가 0이 아닐 때 발생하며,
    /// Display 메시지는 딩톡이 반환한 `errmsg` 필드를 **그대로** 사용합니다.
    /// 호출자가 프로바이더의 원본 실패 사유를 읽을 수 있어야 하기 때문입니다.
    #[error("{0}")]
    ProviderError(String),

    /// HTTP 전송 계층 에러
    ///
    /// `reqwest` 클라이언트의 실패를 변환 없이 그대로 전파합니다.
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),

    /// JSON 디코딩 에러
    ///
    /// 프로바이더 응답 본문의 역직렬화 실패를 그대로 전파합니다.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// 외부 서비스 에러
    ///
    /// 위 분류에 속하지 않는 외부 API 관련 오류입니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    ///
    /// 서명 키 초기화 실패 등 예상하지 못한 시스템 오류입니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ProviderError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 애플리케이션 전역 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_provider_error_preserves_message() {
        // 프로바이더 errmsg가 가공 없이 Display로 노출되어야 함
        let err = AppError::ProviderError("临时授权码已过期".to_string());
        assert_eq!(err.to_string(), "临时授权码已过期");
    }

    #[test]
    fn test_validation_error_status_code() {
        let err = AppError::ValidationError("code missing".to_string());
        assert_eq!(err.error_response().status(), 400);
    }

    #[test]
    fn test_provider_error_status_code() {
        let err = AppError::ProviderError("denied".to_string());
        assert_eq!(err.error_response().status(), 401);
    }

    #[test]
    fn test_internal_error_status_code() {
        let err = AppError::InternalError("boom".to_string());
        assert_eq!(err.error_response().status(), 500);
    }

    #[test]
    fn test_json_error_is_transparent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let original = json_err.to_string();
        let err: AppError = json_err.into();

        // #[error(transparent)]이므로 원본 메시지가 그대로 유지됨
        assert_eq!(err.to_string(), original);
    }
}
