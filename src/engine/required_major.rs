// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 전공필수 평가기
// ==========================================
// 역할: 학과 전공필수 목록과 수강 목록을 대조하여 이수 학점 집계
// 규칙: 충족 판정은 학과별 지정 규칙이 확정될 때까지 항상 미충족
// ==========================================

use crate::domain::requirement::{Requirement, SubField};
use crate::domain::student::Student;
use crate::domain::types::RequirementCategory;
use crate::engine::error::{EngineError, EngineResult};
use crate::repository::catalog::CatalogReader;
use std::sync::Arc;

const BRIEFING: &str = "각 학과마다 지정된 전공필수 과목을 확인하세요!";

// ==========================================
// RequiredMajorEvaluator - 전공필수 평가기
// ==========================================
pub struct RequiredMajorEvaluator<C: CatalogReader> {
    catalog: Arc<C>,
}

impl<C: CatalogReader> RequiredMajorEvaluator<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub fn evaluate(&self, student: &Student) -> EngineResult<Requirement> {
        let major = &student.major;
        let mut bucket = SubField::with_hint(
            "전공필수",
            format!("/courses?type=required&keyword={}", major.id),
        );

        let required_pool = self
            .catalog
            .required_major_courses(major)
            .map_err(|e| EngineError::catalog_lookup("전공필수 과목 조회", e))?;
        for course in &student.taken_courses {
            if required_pool.contains(course) {
                bucket.take_course(course);
            }
        }

        let total_credit = bucket.total_credit;
        let satisfied = check_required_major_satisfaction(student);
        bucket.satisfied = satisfied;

        Ok(Requirement::new(
            RequirementCategory::RequiredMajor,
            total_credit,
            BRIEFING,
            satisfied,
            vec![bucket],
        ))
    }
}

// TODO: 학과별 전공필수 전량 이수 판정 규칙 확정 후 구현
fn check_required_major_satisfaction(_student: &Student) -> bool {
    false
}
