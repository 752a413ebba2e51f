//! # DingTalk 요청 서명 유틸리티
//!
//! 딩톡(DingTalk) SNS API 호출에 필요한 타임스탬프 기반 서명을 생성하는 모듈입니다.
//! 딩톡의 `getuserinfo_bycode` API는 액세스 토큰 대신 요청 시각과
//! HMAC-SHA256 서명으로 호출자를 인증합니다.
//!
//! ## 서명 알고리즘
//!
//! 딩톡 공식 문서에 정의된 서명 절차는 다음과 같습니다:
//!
//! ```text
//! 1. timestamp = 현재 Unix 시각 (밀리초, 10진수 문자열)
//! 2. signature = Base64( HMAC-SHA256( key = appSecret, message = timestamp ) )
//! 3. 쿼리 스트링 조립 시 signature를 URL 인코딩
//! ```
//!
//! | 단계 | 입력 | 출력 |
//! |------|------|------|
//! | 타임스탬프 | 시스템 시계 | `"1600000000000"` |
//! | HMAC-SHA256 | timestamp + appSecret | 32바이트 다이제스트 |
//! | Base64 | 다이제스트 | `"EDRicg...+sU="` |
//! | URL 인코딩 | Base64 문자열 | `"EDRicg...%2BsU%3D"` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::utils::sign_tool;
//!
//! let timestamp = sign_tool::timestamp();
//! let signature = sign_tool::sign(&timestamp, &app_secret)?;
//!
//! let query = sign_tool::to_query_string(&[
//!     ("accessKey", app_id),
//!     ("timestamp", timestamp),
//!     ("signature", signature),
//! ]);
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::core::errors::AppError;

type HmacSha256 = Hmac<Sha256>;

/// 현재 Unix 시각을 밀리초 단위 10진수 문자열로 반환합니다
///
/// 딩톡 서명 API의 `timestamp` 매개변수는 초가 아닌 **밀리초** 단위입니다.
/// 서버 시계가 딩톡 서버와 크게 어긋나면 서명 검증이 실패하므로
/// NTP 동기화가 전제됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// let ts = sign_tool::timestamp();
/// assert_eq!(ts.len(), 13); // 2001년 이후의 밀리초 타임스탬프는 13자리
/// ```
pub fn timestamp() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// 타임스탬프를 App Secret으로 서명합니다
///
/// `HMAC-SHA256(key = secret, message = timestamp)` 결과를
/// 표준 Base64 (패딩 포함)로 인코딩하여 반환합니다.
/// 반환값은 URL 인코딩되지 않은 원본 Base64 문자열입니다 —
/// 쿼리 스트링 조립 시점에 [`url_encode`]가 적용됩니다.
///
/// # 인자
///
/// * `timestamp` - [`timestamp`]로 생성한 밀리초 문자열
/// * `secret` - 딩톡 개발자 콘솔에서 발급받은 App Secret
///
/// # 반환값
///
/// * `Ok(String)` - Base64 인코딩된 서명
/// * `Err(AppError::InternalError)` - HMAC 키 초기화 실패
///
/// # 결정성
///
/// 동일한 `(timestamp, secret)` 입력은 항상 동일한 서명을 생성합니다.
/// 이 성질은 테스트에서 고정 벡터로 검증됩니다.
pub fn sign(timestamp: &str, secret: &str) -> Result<String, AppError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::InternalError(format!("HMAC 키 초기화 실패: {}", e)))?;

    mac.update(timestamp.as_bytes());
    let digest = mac.finalize().into_bytes();

    Ok(BASE64.encode(digest))
}

/// 쿼리 스트링 값을 퍼센트 인코딩합니다
///
/// Base64 서명에 포함되는 `+`, `/`, `=` 문자는 쿼리 스트링에서
/// 반드시 이스케이프되어야 하므로 RFC 3986 방식으로 인코딩합니다.
pub fn url_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// 매개변수 목록을 URL 인코딩된 쿼리 스트링으로 조립합니다
///
/// 키와 값 모두 [`url_encode`]를 거치며, 입력 순서가 그대로 유지됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// let query = sign_tool::to_query_string(&[
///     ("accessKey", "app-id".to_string()),
///     ("signature", "a+b=".to_string()),
/// ]);
/// assert_eq!(query, "accessKey=app-id&signature=a%2Bb%3D");
/// ```
pub fn to_query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_known_vectors() {
        // 고정 입력에 대한 HMAC-SHA256/Base64 결과 검증
        assert_eq!(
            sign("1600000000000", "test-app-secret").unwrap(),
            "EDRicgkGZZlaDGnJxLMqNHcXIrjYqLP5PvTlBQMv+sU="
        );
        assert_eq!(
            sign("1546272000000", "Y").unwrap(),
            "bItuxnGPnQgXC6Jgli9w8N20oP7a/osEmfgILJc50rw="
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let first = sign("1700000000000", "secret").unwrap();
        let second = sign("1700000000000", "secret").unwrap();
        assert_eq!(first, second);

        // 타임스탬프나 시크릿이 달라지면 서명도 달라져야 함
        assert_ne!(first, sign("1700000000001", "secret").unwrap());
        assert_ne!(first, sign("1700000000000", "other-secret").unwrap());
    }

    #[test]
    fn test_timestamp_is_milliseconds() {
        let ts = timestamp();
        let parsed: i64 = ts.parse().unwrap();

        // 2020-01-01 이후의 밀리초 타임스탬프 범위 확인
        assert!(parsed > 1_577_836_800_000);
    }

    #[test]
    fn test_url_encode_escapes_base64_chars() {
        assert_eq!(url_encode("a+b/c="), "a%2Bb%2Fc%3D");
        assert_eq!(url_encode("plain"), "plain");
    }

    #[test]
    fn test_to_query_string_preserves_order() {
        let query = to_query_string(&[
            ("accessKey", "my-app".to_string()),
            ("timestamp", "1600000000000".to_string()),
            ("signature", "x+y=".to_string()),
        ]);

        assert_eq!(
            query,
            "accessKey=my-app&timestamp=1600000000000&signature=x%2By%3D"
        );
    }
}
