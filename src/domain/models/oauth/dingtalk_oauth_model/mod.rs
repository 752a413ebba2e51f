//! # DingTalk OAuth Model Module
//!
//! 딩톡 스캔 로그인에서 사용되는 프로바이더별 모델 모음입니다.

pub mod dingtalk_user;

pub use dingtalk_user::*;
