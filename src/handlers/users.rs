//! # User Creation HTTP Handlers
//!
//! 사용자 생성 요청을 받아 검증 엔진을 호출하고 Verdict를 HTTP 응답으로
//! 매핑하는 핸들러들입니다. Spring Framework의 Controller 계층과 동일한
//! 역할을 수행합니다.
//!
//! ## 세 가지 엔드포인트 변형
//!
//! 같은 엔진을 소비하는 세 개의 독립적인 호출 지점이 공존합니다.
//! 각 변형은 검증 전략(모드/그룹)과 상태 코드 매핑이 다릅니다:
//!
//! | 엔드포인트 | 모드 | 그룹 | 위반 시 응답 |
//! |-----------|------|------|--------------|
//! | `POST /binding` | Aggregate | Adult | 400 + 전체 리포트 |
//! | `POST /validator` | Aggregate | Adult | 201 + 전체 리포트 |
//! | `POST /no-adult` | FailFast | Minor | 400 + 첫 위반 리포트 |
//!
//! `/validator` 변형은 위반 리포트를 본문으로 돌려줄 때도 상태 코드가
//! 201 Created입니다. 호출자는 본문이 `created`인지 여부로 성공을
//! 구분해야 합니다.
//!
//! ## 응답 형식
//!
//! 성공 본문은 고정 확인 문자열 `created`, 위반 본문은 메시지를 평가
//! 순서대로 줄 단위로 이어붙인 평문 텍스트입니다.

use actix_web::{post, web, HttpResponse};
use chrono::Local;

use crate::core::registry::ServiceLocator;
use crate::domain::dto::users::request::UserRequest;
use crate::errors::errors::AppError;
use crate::services::users::UserService;
use crate::validation::{render_report, ValidationEngine, ValidationGroup, ValidationMode};

/// 사용자 생성 핸들러 (검증 결과 확인 방식)
///
/// 집계 모드로 모든 위반을 수집한 뒤 Verdict를 직접 확인합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/users/binding`
///
/// # 응답
///
/// * `201 Created` - 검증 통과, 본문 `created`
/// * `400 Bad Request` - 위반 존재, 본문은 전체 위반 리포트 (평문)
#[post("/binding")]
pub async fn create_user_binding(
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let engine = ServiceLocator::get::<ValidationEngine>();
    // 평가 시점은 호출당 한 번만 읽는다
    let verdict = engine.validate(
        &payload,
        ValidationGroup::Adult,
        ValidationMode::Aggregate,
        Local::now(),
    );

    if !verdict.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body(render_report(&verdict)));
    }

    let service = ServiceLocator::get::<UserService>();
    let ack = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().body(ack))
}

/// 사용자 생성 핸들러 (주문형 검증 방식)
///
/// 집계 모드로 검증하되, 위반이 있어도 상태 코드는 항상
/// `201 Created`입니다. 위반 리포트는 본문으로만 전달됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/users/validator`
///
/// # 응답
///
/// * `201 Created` - 본문이 `created`이면 성공, 그 외에는 위반 리포트
#[post("/validator")]
pub async fn create_user_validator(
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let engine = ServiceLocator::get::<ValidationEngine>();
    let verdict = engine.validate(
        &payload,
        ValidationGroup::Adult,
        ValidationMode::Aggregate,
        Local::now(),
    );

    if !verdict.is_empty() {
        return Ok(HttpResponse::Created()
            .content_type("text/plain; charset=utf-8")
            .body(render_report(&verdict)));
    }

    let service = ServiceLocator::get::<UserService>();
    let ack = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().body(ack))
}

/// 미성년 사용자 생성 핸들러 (조기 중단 방식)
///
/// Minor 그룹(나이 7~17세)으로 검증하며, 첫 위반에서 즉시 중단하고
/// 해당 위반 하나만 보고합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/users/no-adult`
///
/// # 응답
///
/// * `201 Created` - 검증 통과, 본문 `created`
/// * `400 Bad Request` - 본문은 첫 위반 메시지 한 줄
#[post("/no-adult")]
pub async fn create_no_adult_user(
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let engine = ServiceLocator::get::<ValidationEngine>();
    let verdict = engine.validate(
        &payload,
        ValidationGroup::Minor,
        ValidationMode::FailFast,
        Local::now(),
    );

    if !verdict.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body(render_report(&verdict)));
    }

    let service = ServiceLocator::get::<UserService>();
    let ack = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().body(ack))
}
