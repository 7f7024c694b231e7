// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 엔진 테스트 지원
// ==========================================
// 역할: 카탈로그 조회를 메모리 맵으로 대체하는 테스트 전용 목(mock)
// ==========================================

use crate::domain::course::Course;
use crate::domain::major::Major;
use crate::repository::catalog::CatalogReader;
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::collections::HashMap;

/// 메모리 기반 카탈로그 목
///
/// with_* 빌더로 고정 데이터를 심고, 미등록 키 조회는 빈 결과를 준다.
/// with_failing_lookups를 켜면 모든 조회가 저장소 오류를 돌려준다.
#[derive(Default)]
pub struct MockCatalog {
    majors: HashMap<i64, Major>,
    courses_by_major_id: HashMap<i64, Vec<Course>>,
    required_by_major_id: HashMap<i64, Vec<Course>>,
    courses_by_master_code: HashMap<String, Vec<Course>>,
    fail_lookups: bool,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_major(mut self, major: Major) -> Self {
        self.majors.insert(major.id, major);
        self
    }

    pub fn with_major_courses(mut self, major_id: i64, courses: Vec<Course>) -> Self {
        self.courses_by_major_id.insert(major_id, courses);
        self
    }

    pub fn with_required_courses(mut self, major_id: i64, courses: Vec<Course>) -> Self {
        self.required_by_major_id.insert(major_id, courses);
        self
    }

    pub fn with_master_pool(mut self, master_code: &str, courses: Vec<Course>) -> Self {
        self.courses_by_master_code
            .insert(master_code.to_string(), courses);
        self
    }

    pub fn with_failing_lookups(mut self) -> Self {
        self.fail_lookups = true;
        self
    }

    fn guard(&self) -> RepositoryResult<()> {
        if self.fail_lookups {
            return Err(RepositoryError::DatabaseQueryError(
                "mock failure".to_string(),
            ));
        }
        Ok(())
    }
}

impl CatalogReader for MockCatalog {
    fn resolve_major(&self, major_id: i64) -> RepositoryResult<Option<Major>> {
        self.guard()?;
        Ok(self.majors.get(&major_id).cloned())
    }

    fn find_major_by_code(&self, code: &str) -> RepositoryResult<Option<Major>> {
        self.guard()?;
        Ok(self.majors.values().find(|m| m.code == code).cloned())
    }

    fn major_courses(&self, major: &Major) -> RepositoryResult<Vec<Course>> {
        self.guard()?;
        Ok(self
            .courses_by_major_id
            .get(&major.id)
            .cloned()
            .unwrap_or_default())
    }

    fn required_major_courses(&self, major: &Major) -> RepositoryResult<Vec<Course>> {
        self.guard()?;
        Ok(self
            .required_by_major_id
            .get(&major.id)
            .cloned()
            .unwrap_or_default())
    }

    fn major_courses_by_master_code(&self, master_code: &str) -> RepositoryResult<Vec<Course>> {
        self.guard()?;
        Ok(self
            .courses_by_master_code
            .get(master_code)
            .cloned()
            .unwrap_or_default())
    }
}
