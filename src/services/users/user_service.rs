//! # 사용자 생성 서비스
//!
//! 검증 경계를 통과한 요청에 대한 "생성" 비즈니스 동작입니다.
//! 이 서비스는 의도적으로 no-op 스텁입니다. 이 저장소의 관심사는
//! 요청 검증 경계이며, 영속화나 후속 비즈니스 로직은 외부 협력자의
//! 몫입니다. 핸들러와의 계약은 고정 확인 문자열 `"created"` 하나입니다.

use log::info;

use crate::domain::dto::users::request::UserRequest;
use crate::errors::errors::AppError;

/// 생성 확인 응답 문자열
pub const CREATED_ACK: &str = "created";

/// 사용자 생성 비즈니스 로직 서비스
///
/// `ServiceLocator`에 싱글톤으로 등록되어 핸들러가 공유합니다.
#[derive(Debug, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// 검증을 통과한 요청으로 사용자를 생성합니다.
    ///
    /// 생성 로직 자체는 스텁이며 항상 고정 확인 문자열을 반환합니다.
    ///
    /// # 인자
    /// * `request` - 검증을 이미 통과한 사용자 생성 요청
    ///
    /// # 반환값
    /// * `Ok(String)` - 생성 확인 문자열
    pub async fn create_user(&self, request: UserRequest) -> Result<String, AppError> {
        info!(
            "사용자 생성 요청 처리: name={:?}, email={:?}",
            request.name, request.email
        );

        Ok(CREATED_ACK.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::create_user_request::UserRequestBuilder;

    #[actix_web::test]
    async fn test_create_user_returns_fixed_acknowledgment() {
        let service = UserService::new();
        let request = UserRequestBuilder::with_default().build();

        let ack = service.create_user(request).await.unwrap();
        assert_eq!(ack, "created");
    }
}
