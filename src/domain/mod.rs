// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 도메인 모델 계층
// ==========================================
// 역할: 도메인 엔티티, 값 타입, 리포트 타입 정의
// 규칙: 데이터 접근 로직 금지, 평가(엔진) 로직 금지
// ==========================================

pub mod course;
pub mod major;
pub mod requirement;
pub mod student;
pub mod types;

// 핵심 타입 재노출
pub use course::Course;
pub use major::Major;
pub use requirement::{Requirement, SubField};
pub use student::Student;
pub use types::{RequirementCategory, COLLEGE_ART, COLLEGE_ENGINEERING};
