//! # 딩톡 OAuth 사용자 정보 모델
//!
//! 딩톡 SNS `getuserinfo_bycode` API가 반환하는 사용자 정보를
//! 처리하기 위한 데이터 모델을 정의합니다.
//!
//! ## 응답 엔벨로프 구조
//!
//! 딩톡 API는 성공/실패를 HTTP 상태 코드가 아니라 본문 엔벨로프로 구분합니다:
//!
//! ```json
//! {
//!   "errcode": 0,
//!   "errmsg": "ok",
//!   "user_info": {
//!     "nick": "张三",
//!     "openid": "liSii8KCxxxxx",
//!     "unionid": "7Huu46kk"
//!   }
//! }
//! ```
//!
//! 실패 시:
//!
//! ```json
//! {
//!   "errcode": 40078,
//!   "errmsg": "不存在的临时授权码"
//! }
//! ```
//!
//! | 필드 | 의미 |
//! |------|------|
//! | `errcode` | 0이면 성공, 그 외는 딩톡 에러 코드 |
//! | `errmsg` | 사람이 읽을 수 있는 결과 메시지 |
//! | `user_info.nick` | 사용자 닉네임 |
//! | `user_info.openid` | 앱 범위의 사용자 식별자 |
//! | `user_info.unionid` | 기업(개발자 계정) 범위의 사용자 식별자 |

use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

/// 딩톡 사용자 프로필 정보
///
/// 스캔 로그인으로 획득 가능한 필드는 닉네임과 두 종류의 식별자뿐입니다.
/// 이메일, 휴대전화 등 추가 정보는 기업 내부 API 권한이 필요하며
/// SNS 로그인 범위 밖입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DingTalkUserInfo {
    /// 사용자 닉네임
    pub nick: String,
    /// 앱 범위의 사용자 고유 식별자
    pub openid: String,
    /// 개발자 계정 범위의 사용자 고유 식별자
    ///
    /// 동일 개발자의 여러 앱에서 같은 사용자를 연결할 때 사용합니다.
    pub unionid: String,
}

/// `getuserinfo_bycode` API 응답 엔벨로프
///
/// 사용자 정보 또는 에러 코드/메시지 중 하나를 담습니다.
/// `errcode`/`errmsg`는 성공 응답에도 포함되므로(`0` / `"ok"`) 기본값 처리합니다.
#[derive(Debug, Deserialize)]
pub struct DingTalkUserInfoResponse {
    /// 딩톡 에러 코드. 0이면 성공
    #[serde(default)]
    pub errcode: i64,
    /// 결과 메시지. 실패 시 원인 설명
    #[serde(default)]
    pub errmsg: String,
    /// 성공 시에만 존재하는 사용자 프로필
    pub user_info: Option<DingTalkUserInfo>,
}

impl DingTalkUserInfoResponse {
    /// 엔벨로프가 에러를 나타내는지 확인합니다
    pub fn has_error(&self) -> bool {
        self.errcode != 0
    }

    /// 엔벨로프를 사용자 정보 결과로 변환합니다
    ///
    /// # 반환값
    ///
    /// * `Ok(DingTalkUserInfo)` - 성공 엔벨로프에 담긴 프로필
    /// * `Err(AppError::ProviderError)` - 에러 엔벨로프. 메시지는 `errmsg` 그대로
    /// * `Err(AppError::ExternalServiceError)` - 성공인데 `user_info`가 빠진 기형 응답
    pub fn into_result(self) -> Result<DingTalkUserInfo, AppError> {
        if self.has_error() {
            return Err(AppError::ProviderError(self.errmsg));
        }

        self.user_info.ok_or_else(|| {
            AppError::ExternalServiceError(
                "딩톡 응답에 user_info 필드가 없습니다".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_envelope() {
        let json = r#"{
            "errcode": 0,
            "errmsg": "ok",
            "user_info": {
                "nick": "테스트사용자",
                "openid": "openid-001",
                "unionid": "unionid-001"
            }
        }"#;

        let envelope: DingTalkUserInfoResponse = serde_json::from_str(json).unwrap();
        assert!(!envelope.has_error());

        let user = envelope.into_result().unwrap();
        assert_eq!(user.nick, "테스트사용자");
        assert_eq!(user.openid, "openid-001");
        assert_eq!(user.unionid, "unionid-001");
    }

    #[test]
    fn test_parse_error_envelope() {
        let json = r#"{"errcode": 40078, "errmsg": "不存在的临时授权码"}"#;

        let envelope: DingTalkUserInfoResponse = serde_json::from_str(json).unwrap();
        assert!(envelope.has_error());

        // 실패 메시지는 프로바이더의 errmsg와 정확히 일치해야 함
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.to_string(), "不存在的临时授权码");
    }

    #[test]
    fn test_missing_envelope_fields_default() {
        // errcode/errmsg가 생략된 응답도 디코딩 가능해야 함
        let json = r#"{"user_info": {"nick": "n", "openid": "o", "unionid": "u"}}"#;

        let envelope: DingTalkUserInfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.errcode, 0);
        assert_eq!(envelope.errmsg, "");
        assert!(envelope.into_result().is_ok());
    }

    #[test]
    fn test_success_without_user_info_is_malformed() {
        let json = r#"{"errcode": 0, "errmsg": "ok"}"#;

        let envelope: DingTalkUserInfoResponse = serde_json::from_str(json).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }
}
