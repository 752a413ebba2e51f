//! # 딩톡 스캔 로그인 인증 서비스
//!
//! 딩톡 스캔 로그인 플로우 전체(로그인 URL 발급 → 콜백 처리 → 프로필 획득)를
//! 관리하는 싱글톤 서비스입니다. 프로바이더별 세부 사항은 [`DingTalkOAuth`]
//! 어댑터에 위임하고, 이 서비스는 CSRF 방지 state 생성/검증과
//! 플로우 오케스트레이션을 담당합니다.
//!
//! ## 보안 특징
//!
//! ### CSRF 방지 (State Parameter)
//!
//! OAuth 2.0 state 매개변수를 사용하여 Cross-Site Request Forgery 공격을 방지합니다:
//!
//! ```text
//! State Generation:
//! timestamp:secret → SHA-256 → hex(state_value)
//!
//! State Verification:
//! received_state → 빈 값 검사 → 16진수 해시 형식 검사
//! ```
//!
//! 서버 측 상태 저장소가 없으므로(저장 계층 비도입) 검증은 형식 수준입니다.
//! 클라이언트는 발급받은 state를 세션에 보관했다가 콜백 시 비교해야 합니다.
//!
//! ### Authorization Code 제한 시간
//!
//! - **일회성 사용**: 딩톡 임시 인증 코드는 한 번만 사용 가능
//! - **즉시 사용**: 코드 수신 즉시 사용자 정보 조회에 사용
//!
//! ## 싱글톤 패턴
//!
//! `#[service]` 매크로를 통해 자동으로 싱글톤으로 관리되며,
//! [`DingTalkOAuth`] 어댑터 의존성이 자동으로 주입됩니다.
//! 어댑터는 `main.rs`에서 `ServiceLocator::set()`으로 사전 등록됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::services::auth::DingTalkAuthService;
//!
//! // 1. 로그인 URL 생성
//! let auth_service = DingTalkAuthService::instance();
//! let login_response = auth_service.get_login_url()?;
//!
//! // 2. 콜백 처리 (웹 핸들러에서)
//! let user_info = auth_service
//!     .authenticate_with_callback(&callback_params)
//!     .await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use singleton_macro::service;

use crate::config::OAuthSecurityConfig;
use crate::core::errors::AppError;
use crate::domain::dto::auth::OAuthLoginUrlResponse;
use crate::domain::models::oauth::DingTalkUserInfo;
use crate::services::auth::dingtalk_oauth::DingTalkOAuth;
use crate::services::auth::oauth_adapter::OAuthAdapter;

/// 딩톡 스캔 로그인 인증 서비스
///
/// ## 주요 책임
///
/// 1. **로그인 URL 생성**: 딩톡 스캔 페이지로의 리다이렉트 URL 생성
/// 2. **State 관리**: CSRF 방지용 state 생성 및 콜백 시 검증
/// 3. **콜백 처리**: 임시 인증 코드 → 토큰 모델 → 사용자 프로필
#[service]
pub struct DingTalkAuthService {
    /// 딩톡 어댑터
    ///
    /// 프로바이더별 연산(매개변수 조립, 서명, API 호출)을 담당합니다.
    /// `main.rs`에서 등록된 싱글톤이 자동 주입됩니다.
    adapter: Arc<DingTalkOAuth>,
}

impl DingTalkAuthService {
    /// 딩톡 스캔 로그인 URL을 생성합니다
    ///
    /// # 반환값
    ///
    /// * `Ok(OAuthLoginUrlResponse)` - 로그인 URL과 state 값을 포함한 응답
    /// * `Err(AppError::InternalError)` - state 생성 실패
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://oapi.dingtalk.com/connect/oauth2/sns_authorize?
    ///   response_type=code&
    ///   appid=APP_ID&
    ///   redirect_uri=CALLBACK_URI&
    ///   scope=snsapi_login&
    ///   state=CSRF_PROTECTION_VALUE
    /// ```
    pub fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = generate_oauth_state()?;
        let login_url = self.adapter.build_login_url(&state);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// 콜백 매개변수를 처리하여 딩톡 사용자 프로필을 획득합니다
    ///
    /// # 인자
    ///
    /// * `callback_params` - 딩톡이 리디렉션에 붙인 쿼리 매개변수 매핑
    ///   (`code`, `state` 필수)
    ///
    /// # 반환값
    ///
    /// * `Ok(DingTalkUserInfo)` - 인증된 사용자의 딩톡 프로필
    /// * `Err(AppError::AuthenticationError)` - state 검증 실패
    /// * `Err(AppError::ValidationError)` - `code` 매개변수 누락
    /// * `Err(AppError::ProviderError)` - 딩톡 에러 엔벨로프 (원본 `errmsg`)
    ///
    /// # 처리 단계
    ///
    /// 1. **State 검증**: CSRF 공격 방지를 위한 state 매개변수 확인
    /// 2. **토큰 교환**: 콜백 `code` → `AccessTokenModel` (네트워크 호출 없음)
    /// 3. **사용자 정보 조회**: 서명된 요청으로 딩톡 프로필 획득
    pub async fn authenticate_with_callback(
        &self,
        callback_params: &HashMap<String, String>,
    ) -> Result<DingTalkUserInfo, AppError> {
        // 1. State 검증
        let state = callback_params
            .get("state")
            .map(String::as_str)
            .unwrap_or_default();
        verify_oauth_state(state)?;

        // 2. 임시 인증 코드로 토큰 모델 생성 (딩톡은 별도 토큰 교환 없음)
        let token = self.adapter.get_access_token(callback_params).await?;

        // 3. 서명된 요청으로 사용자 정보 조회
        let user_info = self.adapter.get_user_info(&token).await?;

        log::info!("딩톡 스캔 로그인 성공: openid={}", user_info.openid);
        Ok(user_info)
    }
}

/// OAuth State 매개변수 생성
///
/// CSRF 공격 방지를 위한 state 값을 생성합니다.
///
/// # State 생성 알고리즘
///
/// ```text
/// 1. 현재 타임스탬프 획득
/// 2. 시크릿과 결합: "timestamp:secret"
/// 3. SHA-256 해시 적용
/// 4. 16진수 문자열로 변환 (64자)
/// ```
///
/// - **타임스탬프 포함**: 재생 공격 방지
/// - **시크릿 결합**: 예측 불가능성 증대
/// - **일회성**: 각 인증 세션마다 새로운 값
fn generate_oauth_state() -> Result<String, AppError> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::InternalError(format!("시간 계산 실패: {}", e)))?
        .as_nanos();

    let state_data = format!("{}:{}", timestamp, OAuthSecurityConfig::state_secret());

    let digest = Sha256::digest(state_data.as_bytes());
    Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
}

/// OAuth State 매개변수 검증
///
/// 콜백에서 받은 state 값이 유효한지 검증하여 CSRF 공격을 방지합니다.
///
/// # 검증 규칙
///
/// 상태 저장소가 없으므로 형식 수준의 검증만 수행합니다:
///
/// 1. **빈 값 확인**: state가 빈 문자열이 아닌지 검사
/// 2. **형식 확인**: 64자 16진수 해시 형식인지 검사
fn verify_oauth_state(state: &str) -> Result<(), AppError> {
    if state.is_empty() {
        return Err(AppError::AuthenticationError(
            "유효하지 않은 OAuth state".to_string(),
        ));
    }

    if state.len() != 64 || !state.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::AuthenticationError(
            "OAuth state 형식이 올바르지 않습니다".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_state_is_hex_sha256() {
        let state = generate_oauth_state().unwrap();

        assert_eq!(state.len(), 64);
        assert!(state.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_state_passes_verification() {
        let state = generate_oauth_state().unwrap();
        assert!(verify_oauth_state(&state).is_ok());
    }

    #[test]
    fn test_verify_rejects_empty_state() {
        let err = verify_oauth_state("").unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_verify_rejects_malformed_state() {
        assert!(verify_oauth_state("short").is_err());
        assert!(verify_oauth_state(&"z".repeat(64)).is_err());
        assert!(verify_oauth_state(&"a".repeat(63)).is_err());
    }
}
