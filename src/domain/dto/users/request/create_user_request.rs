//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 모든 필드가 `Option`으로 역직렬화되는 점이 중요합니다. 필수성 판단은
//! serde가 아니라 검증 엔진의 책임이며, 누락된 필드는 에러가 아니라
//! "부재"라는 검증 대상 상태가 되어야 하기 때문입니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "name": "김수한",
//!   "age": 23,
//!   "gender": true,
//!   "birthDay": "1999-10-30T15:00:00Z",
//!   "identityNumber": "123456199910310017",
//!   "email": "12345@168.com",
//!   "friendDTOs": [{"name": "박영희", "hairNumber": "1001"}],
//!   "money": "42.50",
//!   "justStrings": ["tag1", "tag2"]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::friend_request::FriendRequest;

/// 사용자 생성 요청
///
/// 검증이 시작된 뒤에는 변경되지 않으며, 요청/응답 사이클 하나를
/// 넘어서 살아남지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    /// 이름 (2~4자)
    pub name: Option<String>,

    /// 나이 (그룹에 따라 18~35세 또는 7~17세)
    pub age: Option<i32>,

    /// 성별 (홀수 패리티 = true)
    pub gender: Option<bool>,

    /// 생일 (과거 시각이어야 함)
    #[serde(rename = "birthDay")]
    pub birth_day: Option<DateTime<Utc>>,

    /// 신분증 번호 (생년월일과 성별 패리티 숫자 내장)
    #[serde(rename = "identityNumber")]
    pub identity_number: Option<String>,

    /// 이메일 주소
    pub email: Option<String>,

    /// 친구 목록 (비어 있을 수 없음, 원소별 재귀 검증)
    #[serde(rename = "friendDTOs")]
    pub friends: Option<Vec<FriendRequest>>,

    /// 금액 (십진수 문자열, 선택 입력)
    pub money: Option<String>,

    /// 태그 목록 (원소별 공백 불가, 선택 입력)
    #[serde(rename = "justStrings")]
    pub tags: Option<Vec<String>>,
}

/// 테스트용 요청 빌더
///
/// 모든 제약과 교차 필드 규칙을 만족하는 기본 요청에서 출발해
/// 필요한 필드만 바꿔가며 테스트 케이스를 구성합니다.
/// 기본 생일(1999-10-31)과 나이(23)는 고정 평가 시점 2022년 기준으로
/// 나이-생년 일관성 규칙을 만족합니다.
#[cfg(test)]
pub struct UserRequestBuilder {
    request: UserRequest,
}

#[cfg(test)]
impl UserRequestBuilder {
    pub fn with_default() -> Self {
        use chrono::{Local, TimeZone};

        let birth_day = Local
            .with_ymd_and_hms(1999, 10, 31, 0, 0, 0)
            .unwrap()
            .with_timezone(&Utc);

        Self {
            request: UserRequest {
                name: Some("김수한".to_string()),
                age: Some(23),
                gender: Some(true),
                birth_day: Some(birth_day),
                identity_number: Some("123456199910310017".to_string()),
                email: Some("12345@168.com".to_string()),
                friends: Some(vec![FriendRequest {
                    name: Some("박영희".to_string()),
                    hair_number: Some("1001".to_string()),
                }]),
                money: None,
                tags: None,
            },
        }
    }

    pub fn build(self) -> UserRequest {
        self.request
    }

    pub fn with_name(mut self, name: Option<&str>) -> Self {
        self.request.name = name.map(str::to_string);
        self
    }

    pub fn with_age(mut self, age: Option<i32>) -> Self {
        self.request.age = age;
        self
    }

    pub fn with_gender(mut self, gender: Option<bool>) -> Self {
        self.request.gender = gender;
        self
    }

    pub fn with_birth_day(mut self, birth_day: Option<DateTime<Utc>>) -> Self {
        self.request.birth_day = birth_day;
        self
    }

    /// 로컬 시간대 자정 기준으로 생일을 설정합니다.
    pub fn with_birth_day_ymd(mut self, year: i32, month: u32, day: u32) -> Self {
        use chrono::{Local, TimeZone};

        self.request.birth_day = Some(
            Local
                .with_ymd_and_hms(year, month, day, 0, 0, 0)
                .unwrap()
                .with_timezone(&Utc),
        );
        self
    }

    pub fn with_identity_number(mut self, identity_number: Option<&str>) -> Self {
        self.request.identity_number = identity_number.map(str::to_string);
        self
    }

    pub fn with_email(mut self, email: Option<&str>) -> Self {
        self.request.email = email.map(str::to_string);
        self
    }

    pub fn with_friends(mut self, friends: Option<Vec<FriendRequest>>) -> Self {
        self.request.friends = friends;
        self
    }

    pub fn with_money(mut self, money: Option<&str>) -> Self {
        self.request.money = money.map(str::to_string);
        self
    }

    pub fn with_tags(mut self, tags: Option<Vec<&str>>) -> Self {
        self.request.tags = tags.map(|items| items.into_iter().map(str::to_string).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_wire_shape() {
        let json = r#"{
            "name": "김수한",
            "age": 23,
            "gender": true,
            "birthDay": "1999-10-30T15:00:00Z",
            "identityNumber": "123456199910310017",
            "email": "12345@168.com",
            "friendDTOs": [{"name": "박영희", "hairNumber": "1001"}],
            "money": "42.50",
            "justStrings": ["tag1"]
        }"#;

        let request: UserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name.as_deref(), Some("김수한"));
        assert_eq!(request.age, Some(23));
        assert_eq!(
            request.friends.as_ref().unwrap()[0].hair_number.as_deref(),
            Some("1001")
        );
        assert_eq!(request.tags.as_ref().unwrap()[0], "tag1");
    }

    #[test]
    fn test_missing_fields_deserialize_as_absent() {
        // 필드 누락은 역직렬화 에러가 아니라 부재 상태
        let request: UserRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.age.is_none());
        assert!(request.friends.is_none());
        assert!(request.money.is_none());
    }
}
