// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 평가 엔진 계층
// ==========================================
// 역할: 카테고리별 졸업요건 판정 규칙 구현. SQL 조립 금지
// 규칙: 카탈로그 조회는 CatalogReader 트레이트를 통해서만 수행,
//       판정 결과는 항상 Requirement로 내보낸다
// ==========================================

pub mod basic_elective;
pub mod classifier;
pub mod dragonball;
pub mod error;
pub mod major_basic_english;
pub mod major_course;
pub mod msc;
pub mod orchestrator;
pub mod required_major;
pub mod specialized_elective;
pub mod total_credit;

#[cfg(test)]
pub mod test_support;

// 핵심 타입 재노출
pub use basic_elective::BasicElectiveEvaluator;
pub use classifier::CourseClassifier;
pub use dragonball::DragonballEvaluator;
pub use error::{EngineError, EngineResult};
pub use major_basic_english::MajorBasicEnglishEvaluator;
pub use major_course::MajorCourseEvaluator;
pub use msc::MscEvaluator;
pub use orchestrator::RequirementEngine;
pub use required_major::RequiredMajorEvaluator;
pub use specialized_elective::SpecializedElectiveEvaluator;
pub use total_credit::TotalCreditEvaluator;
