//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 생성 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 사용자 생성 API 엔드포인트 (세 가지 검증 전략 변형)
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
}

/// 사용자 생성 관련 라우트를 설정합니다
///
/// 같은 검증 엔진을 소비하는 세 가지 엔드포인트 변형을 등록합니다.
///
/// # Available Routes
///
/// - `POST /api/v1/users/binding` - 집계 검증 후 결과 확인 (위반 시 400)
/// - `POST /api/v1/users/validator` - 집계 검증, 항상 201
/// - `POST /api/v1/users/no-adult` - 미성년 그룹 조기 중단 검증
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users/binding \
///   -H "Content-Type: application/json" \
///   -d '{"name":"김수한","age":23,"gender":true,
///        "birthDay":"1999-10-30T15:00:00Z",
///        "identityNumber":"123456199910310017",
///        "email":"12345@168.com",
///        "friendDTOs":[{"name":"박영희","hairNumber":"1001"}]}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user_binding)
            .service(handlers::users::create_user_validator)
            .service(handlers::users::create_no_adult_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_validation_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "validation": "Declarative Constraint Schema",
            "modes": ["aggregate", "fail-fast"],
            "dependency_injection": "ServiceLocator"
        }
    }))
}
