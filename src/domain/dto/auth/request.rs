//! # 인증 요청 DTO
//!
//! 로그인 플로우의 HTTP 요청 매개변수를 역직렬화/검증하는 구조체들입니다.

use serde::Deserialize;
use validator::Validate;

/// OAuth 콜백 쿼리 매개변수
///
/// 딩톡이 스캔 인증 완료 후 리디렉션하며 붙이는 쿼리 스트링입니다.
///
/// # Query Parameters
///
/// * `code` - 임시 인증 코드 (`tmp_auth_code`). 필수
/// * `state` - 로그인 URL 발급 시 생성한 CSRF 방지값. 필수
/// * `error` / `error_description` - 사용자가 인증을 거부했거나
///   프로바이더 쪽 오류가 발생한 경우에만 존재
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[validate(length(min = 1, message = "임시 인증 코드(code)가 필요합니다"))]
    pub code: String,

    #[validate(length(min = 1, message = "State가 필요합니다"))]
    pub state: String,

    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_query_valid() {
        let query = OAuthCallbackQuery {
            code: "tmp-code".to_string(),
            state: "abc123".to_string(),
            error: None,
            error_description: None,
        };

        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_callback_query_rejects_empty_code() {
        let query = OAuthCallbackQuery {
            code: String::new(),
            state: "abc123".to_string(),
            error: None,
            error_description: None,
        };

        assert!(query.validate().is_err());
    }
}
