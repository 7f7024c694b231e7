// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 핵심 라이브러리
// ==========================================
// 기술 스택: Rust + SQLite
// 시스템 정의: 학사 카탈로그 기반 졸업요건 판정 엔진
// ==========================================

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 엔티티/타입
pub mod domain;

// 저장소 계층 - 데이터 접근
pub mod repository;

// 엔진 계층 - 판정 규칙
pub mod engine;

// 적재 계층 - 외부 데이터
pub mod importer;

// 설정 계층 - 분류 규칙 테이블
pub mod config;

// 데이터베이스 기반 설비 (연결 초기화/PRAGMA 통일)
pub mod db;

// 로그 시스템
pub mod logging;

// API 계층 - 업무 인터페이스
pub mod api;

// ==========================================
// 핵심 타입 재노출
// ==========================================

// 도메인 타입
pub use domain::course::Course;
pub use domain::major::Major;
pub use domain::requirement::{Requirement, SubField};
pub use domain::student::Student;
pub use domain::types::RequirementCategory;

// 엔진
pub use engine::{CourseClassifier, EngineError, RequirementEngine};

// 저장소
pub use repository::{CatalogReader, SqliteCatalog};

// 설정
pub use config::{RuleTableManager, RuleTables};

// API
pub use api::{EvaluationReport, EvaluationRequest, GraduationApi};

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 명칭
pub const APP_NAME: &str = "홍익대학교 졸업요건 진단 시스템";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
