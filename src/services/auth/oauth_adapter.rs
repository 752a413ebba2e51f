//! # OAuth 어댑터 공통 계약
//!
//! 모든 OAuth 로그인 프로바이더 어댑터가 구현하는 capability trait을 정의합니다.
//! 프로바이더마다 authorize URL 매개변수, 토큰 교환 방식, 사용자 정보 API가
//! 다르므로 이 trait이 공통 뼈대를 제공하고 각 어댑터가 변형을 구현합니다.
//!
//! ## 플로우에서의 위치
//!
//! ```text
//! ┌─────────────┐    1. build_login_url(state)    ┌──────────────────┐
//! │   핸들러    ├────────────────────────────────►│   OAuthAdapter   │
//! └─────────────┘                                 │  (프로바이더별)  │
//!        │            2. get_access_token(params) └──────────────────┘
//!        ├────────────────────────────────────────────────►│
//!        │            3. get_user_info(token)              │
//!        ├────────────────────────────────────────────────►│
//!        ▼                                                 ▼
//!   HTTP 응답                                        프로바이더 API
//! ```
//!
//! 각 호출은 입력만 주어지면 독립적으로 수행 가능하며, 호출 간 공유되는
//! 가변 상태가 없습니다. 서로 다른 로그인 시도를 동시에 처리해도
//! 간섭이 발생하지 않습니다.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::models::oauth::AccessTokenModel;
use crate::utils::sign_tool;

/// OAuth 로그인 프로바이더 어댑터 계약
///
/// 네 가지 연산(authorize 매개변수 조립, 토큰 교환, 사용자 정보 매개변수 조립,
/// 사용자 정보 조회)으로 구성됩니다. 프로바이더가 표준 플로우에서 벗어나는
/// 부분(딩톡: 토큰 교환 없음, 서명 기반 사용자 정보 API)은
/// 해당 어댑터의 구현 안에 캡슐화됩니다.
#[async_trait]
pub trait OAuthAdapter: Send + Sync {
    /// 어댑터가 반환하는 사용자 프로필 타입
    type UserInfo;

    /// 프로바이더 식별자 (예: `"dingtalk"`)
    fn provider(&self) -> &'static str;

    /// 로그인을 시작하는 authorize 엔드포인트
    fn authorize_url(&self) -> String;

    /// 사용자 프로필을 반환하는 엔드포인트
    fn user_info_url(&self) -> String;

    /// authorize URL의 쿼리 매개변수를 조립합니다
    ///
    /// 부수 효과가 없는 순수 함수이며, 누락된 설정 필드는
    /// 빈 문자열로 치환되어 포함됩니다.
    fn build_authorize_params(&self, state: &str) -> Vec<(&'static str, String)>;

    /// 사용자를 리디렉션할 전체 로그인 URL을 조립합니다
    ///
    /// [`build_authorize_params`](Self::build_authorize_params)의 결과를
    /// URL 인코딩된 쿼리 스트링으로 엮어 authorize 엔드포인트에 붙입니다.
    fn build_login_url(&self, state: &str) -> String {
        let query = sign_tool::to_query_string(&self.build_authorize_params(state));
        format!("{}?{}", self.authorize_url(), query)
    }

    /// 콜백 매개변수를 액세스 토큰 등가물로 교환합니다
    ///
    /// 프로바이더가 실제 토큰 교환 엔드포인트를 제공하지 않는 경우
    /// (딩톡 스캔 로그인), 콜백의 `code`를 그대로 토큰 모델에 담아 반환할 수
    /// 있습니다. 반환된 값은 호출자에게 불투명합니다.
    ///
    /// # Errors
    ///
    /// 필수 콜백 매개변수가 누락된 경우 `AppError::ValidationError`.
    async fn get_access_token(
        &self,
        callback_params: &HashMap<String, String>,
    ) -> Result<AccessTokenModel, AppError>;

    /// 사용자 정보 요청의 쿼리 매개변수를 조립합니다
    ///
    /// 서명 기반 프로바이더는 이 단계에서 타임스탬프 생성과 서명을 수행합니다.
    fn build_user_info_params(
        &self,
        token: &AccessTokenModel,
    ) -> Result<Vec<(&'static str, String)>, AppError>;

    /// 토큰 모델로 프로바이더 사용자 프로필을 조회합니다
    ///
    /// # Errors
    ///
    /// * `AppError::ProviderError` - 프로바이더 에러 엔벨로프 (원본 메시지 유지)
    /// * `AppError::HttpError` / `AppError::JsonError` - 전송/디코딩 실패 그대로 전파
    async fn get_user_info(&self, token: &AccessTokenModel) -> Result<Self::UserInfo, AppError>;
}
