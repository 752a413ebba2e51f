//! Authentication HTTP Handlers
//!
//! 딩톡 스캔 로그인과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 로그인 URL 발급과 OAuth 콜백 처리를 제공하며, 모든 실패는
//! `AppError`의 `ResponseError` 구현을 통해 JSON 에러 응답으로 변환됩니다.
//!
//! # Endpoints
//!
//! - **로그인 시작**: 스캔 로그인 URL 발급 (`GET /auth/dingtalk/login`)
//! - **콜백 처리**: 임시 인증 코드 처리 (`GET /auth/dingtalk/callback`)

use std::collections::HashMap;

use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::auth::{OAuthCallbackQuery, ScanLoginResponse};
use crate::services::auth::DingTalkAuthService;

/// 딩톡 로그인 URL 발급 핸들러
///
/// 클라이언트가 사용자를 리디렉션할 스캔 로그인 URL과
/// 콜백 검증용 state를 반환합니다.
///
/// # Endpoint
/// `GET /auth/dingtalk/login`
#[get("/dingtalk/login")]
pub async fn dingtalk_login_url() -> Result<HttpResponse, AppError> {
    let auth_service = DingTalkAuthService::instance();
    let url_response = auth_service.get_login_url()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// 딩톡 OAuth 콜백 처리 핸들러
///
/// 딩톡 스캔 인증 완료 후 리다이렉트되는 콜백을 처리합니다.
/// 임시 인증 코드를 토큰 모델로 바꾸고 서명된 요청으로
/// 사용자 프로필을 조회하여 반환합니다.
///
/// # Endpoint
/// `GET /auth/dingtalk/callback?code={code}&state={state}`
#[get("/dingtalk/callback")]
pub async fn dingtalk_oauth_callback(
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    // 에러 체크 (사용자가 거부했거나 프로바이더 쪽 에러 발생)
    if let Some(error) = &query.error {
        let error_msg = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("딩톡 OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    // 유효성 검사
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = DingTalkAuthService::instance();

    // 콜백 쿼리를 어댑터 계약의 매개변수 매핑으로 변환
    let mut callback_params = HashMap::new();
    callback_params.insert("code".to_string(), query.code.clone());
    callback_params.insert("state".to_string(), query.state.clone());

    // 딩톡 스캔 로그인 인증 처리
    let user_info = auth_service
        .authenticate_with_callback(&callback_params)
        .await?;

    log::info!("딩톡 스캔 로그인 완료: nick={}", user_info.nick);

    Ok(HttpResponse::Ok().json(ScanLoginResponse {
        provider: "dingtalk",
        user_info,
    }))
}
