//! 데이터 전송 객체(DTO) 모듈
//!
//! 클라이언트와 서버 간의 데이터 교환 계약을 정의합니다.

pub mod users;

pub use users::*;
