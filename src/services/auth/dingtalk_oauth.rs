//! # 딩톡 스캔 로그인 어댑터
//!
//! 딩톡(DingTalk) "스캔하여 로그인" 플로우를 [`OAuthAdapter`] 계약으로 구현합니다.
//!
//! 문서:
//! <https://ding-doc.dingtalk.com/document/app/logon-free-third-party-websites>
//!
//! ## 표준 OAuth와 다른 점
//!
//! 딩톡 스캔 로그인은 RFC 6749의 Authorization Code Grant에서 두 군데 벗어납니다:
//!
//! | 단계 | 표준 OAuth 2.0 | 딩톡 스캔 로그인 |
//! |------|----------------|------------------|
//! | 토큰 교환 | `code` → access token POST | **없음** — `code`가 곧 자격증명 |
//! | 사용자 정보 인증 | `Authorization: Bearer` 헤더 | 타임스탬프 + HMAC-SHA256 서명 쿼리 |
//! | 사용자 식별 | 토큰에 연결된 계정 | 요청 본문의 `tmp_auth_code` |
//!
//! ## 플로우
//!
//! ```text
//! ┌─────────────┐                        ┌─────────────────┐               ┌─────────────────┐
//! │ 브라우저    │                        │   우리 서버     │               │  DingTalk SNS   │
//! └─────────────┘                        └─────────────────┘               └─────────────────┘
//!        │ 1. 로그인 URL 요청                     │                                │
//!        ├───────────────────────────────────────►│                                │
//!        │ 2. sns_authorize URL + state           │                                │
//!        │◄───────────────────────────────────────┤                                │
//!        │ 3. QR 스캔 및 승인                     │                                │
//!        ├────────────────────────────────────────────────────────────────────────►│
//!        │ 4. redirect_uri?code=...&state=...     │                                │
//!        │◄────────────────────────────────────────────────────────────────────────┤
//!        │ 5. 콜백 전달                           │                                │
//!        ├───────────────────────────────────────►│                                │
//!        │                                        │ 6. code → AccessTokenModel     │
//!        │                                        │ 7. POST getuserinfo_bycode     │
//!        │                                        │    ?accessKey&timestamp&sig    │
//!        │                                        │    {"tmp_auth_code": code}     │
//!        │                                        ├───────────────────────────────►│
//!        │                                        │ 8. user_info 엔벨로프          │
//!        │                                        │◄───────────────────────────────┤
//!        │ 9. 프로필 JSON                         │                                │
//!        │◄───────────────────────────────────────┤                                │
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::config::{DingTalkOAuthConfig, OAuthConfig};
use crate::core::errors::AppError;
use crate::domain::models::oauth::{
    AccessTokenModel, DingTalkUserInfo, DingTalkUserInfoResponse,
};
use crate::services::auth::oauth_adapter::OAuthAdapter;
use crate::utils::sign_tool;

/// 딩톡 스캔 로그인 어댑터
///
/// 불변 [`OAuthConfig`] 하나만 소유하며, 호출 간 공유되는 가변 상태가 없습니다.
/// 서로 다른 로그인 시도의 동시 호출에 안전합니다.
pub struct DingTalkOAuth {
    /// 어댑터 설정. 생성 이후 변경되지 않음
    config: OAuthConfig,
}

impl DingTalkOAuth {
    /// 명시적 설정으로 어댑터를 생성합니다
    pub fn new(config: OAuthConfig) -> Self {
        Self { config }
    }

    /// 환경 변수에서 설정을 로드하여 어댑터를 생성합니다
    pub fn from_env() -> Self {
        Self::new(OAuthConfig::from_env())
    }
}

#[async_trait]
impl OAuthAdapter for DingTalkOAuth {
    type UserInfo = DingTalkUserInfo;

    fn provider(&self) -> &'static str {
        "dingtalk"
    }

    fn authorize_url(&self) -> String {
        DingTalkOAuthConfig::authorize_uri()
    }

    fn user_info_url(&self) -> String {
        DingTalkOAuthConfig::user_info_uri()
    }

    /// authorize URL 매개변수를 조립합니다
    ///
    /// 정확히 다섯 개의 키 `{response_type, appid, redirect_uri, scope, state}`를
    /// 생성하며, 설정되지 않은 필드는 빈 문자열로 치환됩니다.
    fn build_authorize_params(&self, state: &str) -> Vec<(&'static str, String)> {
        vec![
            ("response_type", "code".to_string()),
            ("appid", self.config.app_id.clone().unwrap_or_default()),
            ("redirect_uri", self.config.redirect_uri.clone().unwrap_or_default()),
            ("scope", self.config.scope.clone().unwrap_or_default()),
            ("state", state.to_string()),
        ]
    }

    /// 딩톡 스캔 로그인은 별도의 access_token이 없으므로 콜백 `code`를 그대로 반환합니다
    ///
    /// # Errors
    ///
    /// 콜백 매개변수에 `code`가 없으면 `AppError::ValidationError`.
    async fn get_access_token(
        &self,
        callback_params: &HashMap<String, String>,
    ) -> Result<AccessTokenModel, AppError> {
        let code = callback_params.get("code").ok_or_else(|| {
            AppError::ValidationError("콜백 매개변수에 code가 없습니다".to_string())
        })?;

        Ok(AccessTokenModel::new(code.clone()))
    }

    /// 타임스탬프를 생성하고 App Secret으로 서명하여 조회 매개변수를 조립합니다
    ///
    /// 토큰 모델 자체는 쿼리 매개변수에 들어가지 않습니다 —
    /// `tmp_auth_code`는 요청 본문으로 전달됩니다.
    fn build_user_info_params(
        &self,
        _token: &AccessTokenModel,
    ) -> Result<Vec<(&'static str, String)>, AppError> {
        let timestamp = sign_tool::timestamp();
        let signature =
            sign_tool::sign(&timestamp, self.config.app_key.as_deref().unwrap_or_default())?;

        Ok(vec![
            ("accessKey", self.config.app_id.clone().unwrap_or_default()),
            ("timestamp", timestamp),
            ("signature", signature),
        ])
    }

    /// 서명된 쿼리와 임시 인증 코드 본문으로 딩톡 사용자 프로필을 조회합니다
    ///
    /// # 요청 형식
    ///
    /// ```text
    /// POST https://oapi.dingtalk.com/sns/getuserinfo_bycode?accessKey=...&timestamp=...&signature=...
    /// Content-Type: application/json
    ///
    /// {"tmp_auth_code": "<콜백 code>"}
    /// ```
    ///
    /// # Errors
    ///
    /// * `AppError::ProviderError` - `errcode != 0` 엔벨로프. 메시지는 `errmsg` 그대로
    /// * `AppError::HttpError` - 전송 계층 실패 (재시도 없음)
    async fn get_user_info(&self, token: &AccessTokenModel) -> Result<DingTalkUserInfo, AppError> {
        let query = sign_tool::to_query_string(&self.build_user_info_params(token)?);
        let api = format!("{}?{}", self.user_info_url(), query);

        // 여기의 access_token은 실질적으로 콜백 code —
        // 딩톡 스캔 로그인은 access token을 지원하지 않음
        let mut body = HashMap::new();
        body.insert("tmp_auth_code", token.access_token.as_str());

        let client = reqwest::Client::new();
        let response = client.post(&api).json(&body).send().await?;

        let envelope: DingTalkUserInfoResponse = response.json().await?;
        envelope.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OAuthConfig {
        OAuthConfig::new(
            Some("test-app-id".to_string()),
            Some("test-app-secret".to_string()),
            Some("http://localhost:8080/api/v1/auth/dingtalk/callback".to_string()),
            Some("snsapi_login".to_string()),
        )
    }

    #[test]
    fn test_build_authorize_params_has_exactly_five_keys() {
        let adapter = DingTalkOAuth::new(test_config());
        let params = adapter.build_authorize_params("state-123");

        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["response_type", "appid", "redirect_uri", "scope", "state"]
        );
    }

    #[test]
    fn test_build_authorize_params_values_match_config() {
        let adapter = DingTalkOAuth::new(test_config());
        let params: HashMap<&str, String> =
            adapter.build_authorize_params("state-123").into_iter().collect();

        assert_eq!(params["response_type"], "code");
        assert_eq!(params["appid"], "test-app-id");
        assert_eq!(
            params["redirect_uri"],
            "http://localhost:8080/api/v1/auth/dingtalk/callback"
        );
        assert_eq!(params["scope"], "snsapi_login");
        assert_eq!(params["state"], "state-123");
    }

    #[test]
    fn test_build_authorize_params_substitutes_empty_for_missing() {
        let adapter = DingTalkOAuth::new(OAuthConfig::new(None, None, None, None));
        let params: HashMap<&str, String> =
            adapter.build_authorize_params("").into_iter().collect();

        assert_eq!(params.len(), 5);
        assert_eq!(params["appid"], "");
        assert_eq!(params["redirect_uri"], "");
        assert_eq!(params["scope"], "");
        assert_eq!(params["state"], "");
    }

    #[test]
    fn test_build_login_url_encodes_query() {
        let adapter = DingTalkOAuth::new(test_config());
        let url = adapter.build_login_url("state-123");

        assert!(url.starts_with(
            "https://oapi.dingtalk.com/connect/oauth2/sns_authorize?response_type=code"
        ));
        // redirect_uri는 퍼센트 인코딩되어야 함
        assert!(url.contains(
            "redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fapi%2Fv1%2Fauth%2Fdingtalk%2Fcallback"
        ));
        assert!(url.contains("state=state-123"));
    }

    #[actix_web::test]
    async fn test_get_access_token_echoes_callback_code() {
        let adapter = DingTalkOAuth::new(test_config());
        let mut callback_params = HashMap::new();
        callback_params.insert("code".to_string(), "tmp-auth-code-42".to_string());
        callback_params.insert("state".to_string(), "abc".to_string());

        let token = adapter.get_access_token(&callback_params).await.unwrap();
        assert_eq!(token.access_token, "tmp-auth-code-42");
    }

    #[actix_web::test]
    async fn test_get_access_token_fails_without_code() {
        let adapter = DingTalkOAuth::new(test_config());
        let mut callback_params = HashMap::new();
        callback_params.insert("state".to_string(), "abc".to_string());

        let err = adapter.get_access_token(&callback_params).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_build_user_info_params_keys_and_signature() {
        let adapter = DingTalkOAuth::new(test_config());
        let token = AccessTokenModel::new("tmp-code".to_string());

        let params = adapter.build_user_info_params(&token).unwrap();
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["accessKey", "timestamp", "signature"]);

        let map: HashMap<&str, String> = params.into_iter().collect();
        assert_eq!(map["accessKey"], "test-app-id");

        // 동일 (timestamp, app_key) 입력이면 서명도 동일해야 함
        let expected = sign_tool::sign(&map["timestamp"], "test-app-secret").unwrap();
        assert_eq!(map["signature"], expected);
    }

    #[test]
    fn test_provider_and_endpoints() {
        let adapter = DingTalkOAuth::new(test_config());

        assert_eq!(adapter.provider(), "dingtalk");
        assert_eq!(
            adapter.authorize_url(),
            "https://oapi.dingtalk.com/connect/oauth2/sns_authorize"
        );
        assert_eq!(
            adapter.user_info_url(),
            "https://oapi.dingtalk.com/sns/getuserinfo_bycode"
        );
    }
}
