use crate::db::open_sqlite_connection;
use crate::domain::course::Course;
use crate::domain::major::Major;
use crate::repository::error::RepositoryResult;
use crate::repository::major_course_repo::MajorCourseRepository;
use crate::repository::major_hierarchy_repo::MajorHierarchyRepository;
use crate::repository::major_repo::MajorRepository;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

// ==========================================
// CatalogReader - 학사 카탈로그 조회 인터페이스
// ==========================================
/// 평가 엔진이 필요로 하는 카탈로그 조회 창구
/// 역할: 학과 식별 + 학과별 과목 풀 제공
/// 규칙: 과목 풀은 계층 승계를 반영한 유효 풀이어야 함
pub trait CatalogReader {
    /// 학과 id로 학과 조회
    fn resolve_major(&self, major_id: i64) -> RepositoryResult<Option<Major>>;

    /// 학과 코드로 학과 조회
    fn find_major_by_code(&self, code: &str) -> RepositoryResult<Option<Major>>;

    /// 학과의 유효 전공 과목 풀 (계층 승계 포함)
    fn major_courses(&self, major: &Major) -> RepositoryResult<Vec<Course>>;

    /// 학과의 전공필수 지정 과목 (승계 없이 직접 지정분만)
    fn required_major_courses(&self, major: &Major) -> RepositoryResult<Vec<Course>>;

    /// master 학과 코드 기준 유효 전공 과목 풀
    fn major_courses_by_master_code(&self, master_code: &str) -> RepositoryResult<Vec<Course>>;
}

// ==========================================
// SqliteCatalog - SQLite 기반 카탈로그
// ==========================================
/// SQLite 카탈로그 저장소 묶음
/// 규칙: 세 저장소가 하나의 연결을 공유함
#[derive(Clone)]
pub struct SqliteCatalog {
    pub major_repo: Arc<MajorRepository>,
    pub major_course_repo: Arc<MajorCourseRepository>,
    pub hierarchy_repo: Arc<MajorHierarchyRepository>,
}

impl SqliteCatalog {
    /// DB 경로로 카탈로그 생성 (연결 1개 공유)
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self::from_connection(Arc::new(Mutex::new(conn))))
    }

    /// 기존 연결로 카탈로그 생성
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            major_repo: Arc::new(MajorRepository::from_connection(Arc::clone(&conn))),
            major_course_repo: Arc::new(MajorCourseRepository::from_connection(Arc::clone(&conn))),
            hierarchy_repo: Arc::new(MajorHierarchyRepository::from_connection(conn)),
        }
    }
}

impl CatalogReader for SqliteCatalog {
    fn resolve_major(&self, major_id: i64) -> RepositoryResult<Option<Major>> {
        self.major_repo.find_major_by_id(major_id)
    }

    fn find_major_by_code(&self, code: &str) -> RepositoryResult<Option<Major>> {
        self.major_repo.find_major_by_code(code)
    }

    fn major_courses(&self, major: &Major) -> RepositoryResult<Vec<Course>> {
        self.hierarchy_repo
            .find_all_major_courses_by_master_id(major.id)
    }

    fn required_major_courses(&self, major: &Major) -> RepositoryResult<Vec<Course>> {
        self.major_course_repo
            .find_required_courses_by_major(major.id)
    }

    fn major_courses_by_master_code(&self, master_code: &str) -> RepositoryResult<Vec<Course>> {
        self.hierarchy_repo
            .find_all_major_courses_by_master_code(master_code)
    }
}
