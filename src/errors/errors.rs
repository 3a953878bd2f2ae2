//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 검증 위반은 에러가 아니라는 점에 주의해야 합니다. 위반이 담긴
//! Verdict는 정상적인 실행 결과이며 핸들러가 직접 응답으로 변환합니다.
//! 이 모듈의 에러는 그 바깥의 일들을 다룹니다:
//!
//! - `ValidationError` - 요청 본문 자체를 받아들일 수 없는 경우 (400)
//! - `ConfigurationError` - 스키마 디스크립터 구성 오류. 프로그래밍
//!   오류이며 기동 시점에 치명적으로 처리되고, 요청 데이터로는 절대
//!   발생하지 않습니다 (500)
//! - `InternalError` - 그 밖의 시스템 수준 오류 (500)

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 스키마/디스크립터 구성 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
