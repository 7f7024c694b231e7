// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 카탈로그 적재 계층
// ==========================================
// 역할: CSV 원천 파일을 카탈로그 DB로 적재
// ==========================================

pub mod catalog_importer;
pub mod error;

// 핵심 타입 재노출
pub use catalog_importer::{
    CatalogImporter, ImportIssue, ImportReport, MAJORS_FILE, MAJOR_COURSES_FILE,
    MAJOR_HIERARCHY_FILE,
};
pub use error::{ImportError, ImportResult};
