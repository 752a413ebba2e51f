//! # 액세스 토큰 모델
//!
//! OAuth 토큰 교환 단계의 결과를 담는 프로바이더 공통 모델입니다.

use serde::{Deserialize, Serialize};

/// 토큰 교환 단계가 생산한 액세스 토큰 등가물
///
/// 로그인 시도당 한 번 생성되어 사용자 정보 조회에 사용된 뒤 폐기됩니다.
///
/// ## 불변식: 값의 불투명성
///
/// `access_token` 값은 어댑터에게 **불투명(opaque)** 합니다 —
/// 토큰 교환 단계가 무엇을 넣기로 했든 그대로 운반할 뿐이며,
/// 사용자 정보 조회는 이 값이 "진짜" 토큰이라고 가정해서는 안 됩니다.
/// 딩톡 스캔 로그인의 경우 별도의 토큰 발급이 없으므로
/// 콜백의 임시 인증 코드(`code`)가 그대로 담깁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenModel {
    /// 토큰 교환 단계가 결정한 값 (딩톡: 콜백 `code`)
    pub access_token: String,
}

impl AccessTokenModel {
    /// 주어진 값으로 토큰 모델을 생성합니다
    pub fn new(access_token: String) -> Self {
        Self { access_token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_carries_value_verbatim() {
        let token = AccessTokenModel::new("tmp-auth-code-123".to_string());
        assert_eq!(token.access_token, "tmp-auth-code-123");
    }

    #[test]
    fn test_access_token_serialization() {
        let token = AccessTokenModel::new("abc".to_string());
        let json = serde_json::to_string(&token).unwrap();
        let restored: AccessTokenModel = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.access_token, token.access_token);
    }
}
