// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 데이터 저장소 계층
// ==========================================
// 역할: 데이터 접근 인터페이스 제공, 데이터베이스 세부사항 은폐
// 규칙: Repository는 업무 로직을 포함하지 않음
// 규칙: 모든 쿼리는 파라미터 바인딩 사용, SQL 주입 방지
// ==========================================

pub mod catalog;
pub mod error;
pub mod major_course_repo;
pub mod major_hierarchy_repo;
pub mod major_repo;

// 핵심 저장소 재내보내기
pub use catalog::{CatalogReader, SqliteCatalog};
pub use error::{RepositoryError, RepositoryResult};
pub use major_course_repo::{MajorCourseRepository, NewMajorCourse};
pub use major_hierarchy_repo::MajorHierarchyRepository;
pub use major_repo::MajorRepository;
