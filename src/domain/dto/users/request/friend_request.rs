//! 친구 요청 DTO

use serde::{Deserialize, Serialize};

/// 사용자 생성 요청에 중첩되는 친구 엔티티
///
/// 원소별로 재귀 검증되며, 위반은 `friends[i].name` 형태의 경로로
/// 해당 원소 위치에 귀속됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendRequest {
    /// 친구 이름 (공백 불가)
    pub name: Option<String>,

    /// 헤어 번호 (공백 불가)
    #[serde(rename = "hairNumber")]
    pub hair_number: Option<String>,
}
