//! # 인증 응답 DTO
//!
//! 로그인 플로우의 HTTP 응답 본문 구조체들입니다.

use serde::Serialize;

use crate::domain::models::oauth::DingTalkUserInfo;

/// 로그인 URL 발급 응답
///
/// 클라이언트는 `login_url`로 사용자를 리디렉션하고,
/// `state`를 세션에 저장해 두었다가 콜백 시 비교 검증에 사용합니다.
#[derive(Debug, Serialize)]
pub struct OAuthLoginUrlResponse {
    pub login_url: String,

    pub state: String,
}

/// 스캔 로그인 완료 응답
///
/// 콜백 처리에 성공하면 딩톡 프로필과 프로바이더 식별자를 반환합니다.
#[derive(Debug, Serialize)]
pub struct ScanLoginResponse {
    /// 로그인에 사용된 프로바이더 (`"dingtalk"`)
    pub provider: &'static str,
    /// 딩톡이 반환한 사용자 프로필
    pub user_info: DingTalkUserInfo,
}
