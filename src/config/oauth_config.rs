//! # OAuth Configuration Module
//!
//! 딩톡(DingTalk) 스캔 로그인에 필요한 OAuth 설정을 관리하는 모듈입니다.
//! 딩톡 개발자 콘솔에서 발급받은 앱 자격증명과 엔드포인트 주소를
//! 환경 변수 기반으로 중앙집중식으로 제공합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export DINGTALK_APP_ID="dingoa..."
//! export DINGTALK_APP_KEY="your-app-secret"
//! export DINGTALK_REDIRECT_URI="http://localhost:8080/api/v1/auth/dingtalk/callback"
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! # 스캔 로그인 기본 스코프 (딩톡 앱 내부 로그인 시 snsapi_auth)
//! export DINGTALK_SCOPE="snsapi_login"
//!
//! # 엔드포인트 오버라이드 (일반적으로 변경할 필요 없음)
//! export DINGTALK_AUTHORIZE_URI="https://oapi.dingtalk.com/connect/oauth2/sns_authorize"
//! export DINGTALK_USER_INFO_URI="https://oapi.dingtalk.com/sns/getuserinfo_bycode"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DingTalkOAuthConfig, OAuthConfig};
//!
//! // 환경 변수에서 어댑터 설정 로드
//! let config = OAuthConfig::from_env();
//!
//! // 엔드포인트 조회
//! let authorize_uri = DingTalkOAuthConfig::authorize_uri();
//! ```

use std::env;

/// 프로바이더 공통 OAuth 어댑터 설정
///
/// 하나의 로그인 프로바이더에 대한 정적 설정값을 담는 불변 구조체입니다.
/// 생성 이후 변경되지 않으며, 어댑터 서비스가 소유합니다.
///
/// 모든 필드가 `Option`인 이유는 설정 누락을 생성 시점이 아니라
/// 사용 시점(authorize URL 조립)에 빈 문자열로 치환하여 처리하기 위함입니다 —
/// 프로바이더 쪽에서 누락된 매개변수를 거부하므로 서버가 먼저 패닉할 필요가 없습니다.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// 딩톡 개발자 콘솔에서 발급받은 App ID (`appid` / `accessKey` 매개변수)
    pub app_id: Option<String>,
    /// 서명에 사용되는 App Secret. 클라이언트 사이드에 노출 금지
    pub app_key: Option<String>,
    /// 인증 완료 후 사용자가 돌아올 콜백 URI
    pub redirect_uri: Option<String>,
    /// 요청할 권한 범위 (스캔 로그인: `snsapi_login`)
    pub scope: Option<String>,
}

impl OAuthConfig {
    /// 명시적 필드값으로 설정을 생성합니다
    ///
    /// 주로 테스트와 임베딩 시나리오에서 사용됩니다.
    /// 운영 환경에서는 [`OAuthConfig::from_env`]를 사용하세요.
    pub fn new(
        app_id: Option<String>,
        app_key: Option<String>,
        redirect_uri: Option<String>,
        scope: Option<String>,
    ) -> Self {
        Self {
            app_id,
            app_key,
            redirect_uri,
            scope,
        }
    }

    /// 환경 변수에서 딩톡 어댑터 설정을 로드합니다
    ///
    /// 누락된 변수는 `None`으로 유지되며, 스코프는 딩톡 스캔 로그인의
    /// 기본값 `snsapi_login`이 적용됩니다.
    ///
    /// # 사용 예제
    ///
    /// ```rust,ignore
    /// let config = OAuthConfig::from_env();
    /// if config.app_id.is_none() {
    ///     log::warn!("DINGTALK_APP_ID가 설정되지 않았습니다");
    /// }
    /// ```
    pub fn from_env() -> Self {
        Self {
            app_id: DingTalkOAuthConfig::app_id(),
            app_key: DingTalkOAuthConfig::app_key(),
            redirect_uri: DingTalkOAuthConfig::redirect_uri(),
            scope: Some(DingTalkOAuthConfig::scope()),
        }
    }
}

/// 딩톡 OAuth 환경 변수 접근자
///
/// 딩톡 개발자 콘솔 설정 가이드:
///
/// 1. [딩톡 개발자 콘솔](https://open-dev.dingtalk.com/) 접속
/// 2. 이동 애플리케이션 > 스캔 로그인 애플리케이션 생성
/// 3. appId / appSecret 발급
/// 4. 승인된 콜백 도메인에 리디렉션 URI 등록
///
/// ## 보안 고려사항
///
/// - `app_key`(App Secret)는 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct DingTalkOAuthConfig;

impl DingTalkOAuthConfig {
    /// 딩톡 App ID를 반환합니다.
    ///
    /// authorize URL의 `appid` 매개변수와 사용자 정보 조회의
    /// `accessKey` 매개변수에 모두 사용됩니다.
    pub fn app_id() -> Option<String> {
        env::var("DINGTALK_APP_ID").ok()
    }

    /// 딩톡 App Secret을 반환합니다.
    ///
    /// 타임스탬프 서명의 HMAC 키로 사용되는 민감한 값입니다.
    /// 로그에 출력하지 마세요.
    pub fn app_key() -> Option<String> {
        env::var("DINGTALK_APP_KEY").ok()
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// 딩톡 개발자 콘솔의 승인된 콜백 도메인에 등록되어 있어야 합니다.
    pub fn redirect_uri() -> Option<String> {
        env::var("DINGTALK_REDIRECT_URI").ok()
    }

    /// 요청할 OAuth 스코프를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `snsapi_login` (브라우저 스캔 로그인).
    /// 딩톡 앱 내부에서의 로그인은 `snsapi_auth`를 사용합니다.
    pub fn scope() -> String {
        env::var("DINGTALK_SCOPE").unwrap_or_else(|_| "snsapi_login".to_string())
    }

    /// 딩톡 인증(스캔) 페이지 엔드포인트를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://oapi.dingtalk.com/connect/oauth2/sns_authorize`
    pub fn authorize_uri() -> String {
        env::var("DINGTALK_AUTHORIZE_URI")
            .unwrap_or_else(|_| "https://oapi.dingtalk.com/connect/oauth2/sns_authorize".to_string())
    }

    /// 임시 인증 코드로 사용자 정보를 조회하는 엔드포인트를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://oapi.dingtalk.com/sns/getuserinfo_bycode`
    pub fn user_info_uri() -> String {
        env::var("DINGTALK_USER_INFO_URI")
            .unwrap_or_else(|_| "https://oapi.dingtalk.com/sns/getuserinfo_bycode".to_string())
    }
}

/// OAuth 보안 관련 환경 변수 접근자
pub struct OAuthSecurityConfig;

impl OAuthSecurityConfig {
    /// CSRF 방지용 state 생성에 사용되는 시크릿을 반환합니다.
    ///
    /// 미설정 시 개발용 기본값을 사용하며 경고를 남깁니다.
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
                "oauth-state-secret".to_string()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_config_new_keeps_fields() {
        let config = OAuthConfig::new(
            Some("app-id".to_string()),
            Some("app-key".to_string()),
            Some("http://localhost/callback".to_string()),
            Some("snsapi_login".to_string()),
        );

        assert_eq!(config.app_id.as_deref(), Some("app-id"));
        assert_eq!(config.app_key.as_deref(), Some("app-key"));
        assert_eq!(config.redirect_uri.as_deref(), Some("http://localhost/callback"));
        assert_eq!(config.scope.as_deref(), Some("snsapi_login"));
    }

    #[test]
    fn test_oauth_config_allows_missing_fields() {
        let config = OAuthConfig::new(None, None, None, None);

        assert!(config.app_id.is_none());
        assert!(config.app_key.is_none());
        assert!(config.redirect_uri.is_none());
        assert!(config.scope.is_none());
    }

    #[test]
    fn test_default_endpoints() {
        // 오버라이드 환경 변수가 없을 때 딩톡 고정 엔드포인트 사용
        assert_eq!(
            DingTalkOAuthConfig::authorize_uri(),
            "https://oapi.dingtalk.com/connect/oauth2/sns_authorize"
        );
        assert_eq!(
            DingTalkOAuthConfig::user_info_uri(),
            "https://oapi.dingtalk.com/sns/getuserinfo_bycode"
        );
    }
}
