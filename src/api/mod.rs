// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - API 계층
// ==========================================
// 역할: 진단 업무 API 제공. 요청 검증과 리포트 봉투 작성 담당
// ==========================================

pub mod error;
pub mod graduation_api;
pub mod validator;

// 핵심 타입 재노출
pub use error::{ApiError, ApiResult};
pub use graduation_api::{CourseInput, EvaluationReport, EvaluationRequest, GraduationApi};
pub use validator::validate_evaluation_request;
