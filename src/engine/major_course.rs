// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 전공 학점 평가기
// ==========================================
// 역할: 학과 전공 과목 풀과 수강 목록을 대조하여 전공 학점 집계
// 규칙: CS는 항상 master 코드 "CS"의 계층 풀을 쓰고,
//       20학번 이상이면 개편 제외 과목을 풀에서 뺀 뒤 대조한다
// ==========================================

use crate::domain::course::Course;
use crate::domain::major::Major;
use crate::domain::requirement::{Requirement, SubField};
use crate::domain::student::Student;
use crate::domain::types::{RequirementCategory, COLLEGE_ART, COLLEGE_ENGINEERING, MAJOR_CODE_CS};
use crate::engine::classifier::CourseClassifier;
use crate::engine::error::{EngineError, EngineResult};
use crate::repository::catalog::CatalogReader;
use std::sync::Arc;

/// 전공 학점 하한
const MIN_MAJOR_CREDIT: u32 = 50;

const BRIEFING_ART: &str =
    "전공필수 모두 포함하여 전공 48학점 이상 이수\n(전공 48학점 내에는 전공기초과목이 포함되지 않음.)";
const BRIEFING_ENGINEERING: &str = "전공(전공필수 모두 포함) 50학점 이상 이수";

// ==========================================
// MajorCourseEvaluator - 전공 학점 평가기
// ==========================================
pub struct MajorCourseEvaluator<C: CatalogReader> {
    catalog: Arc<C>,
    classifier: CourseClassifier,
}

impl<C: CatalogReader> MajorCourseEvaluator<C> {
    pub fn new(catalog: Arc<C>, classifier: CourseClassifier) -> Self {
        Self { catalog, classifier }
    }

    pub fn evaluate(&self, student: &Student) -> EngineResult<Requirement> {
        let major = &student.major;
        let mut bucket = SubField::with_hint(
            "전공",
            format!("/courses?type=major&keyword={}", major.id),
        );

        let pool = self.resolve_major_course_pool(major, student.enter_year)?;
        for course in &student.taken_courses {
            if pool.contains(course) {
                bucket.take_course(course);
            }
        }

        let total_credit = bucket.total_credit;
        let satisfied = total_credit >= MIN_MAJOR_CREDIT;
        bucket.satisfied = satisfied;

        Ok(Requirement::new(
            RequirementCategory::MajorCourse,
            total_credit,
            major_briefing(&major.college),
            satisfied,
            vec![bucket],
        ))
    }

    /// 전공 과목 풀 해석 (계층 승계 반영)
    fn resolve_major_course_pool(
        &self,
        major: &Major,
        enter_year: i32,
    ) -> EngineResult<Vec<Course>> {
        if major.code == MAJOR_CODE_CS {
            let mut pool = self
                .catalog
                .major_courses_by_master_code(MAJOR_CODE_CS)
                .map_err(|e| EngineError::catalog_lookup("CS 전공 과목 풀 조회", e))?;
            if enter_year >= 20 {
                let removed = &self.classifier.rules().cs_revision_removed_numbers;
                pool.retain(|course| !removed.contains(&course.number));
            }
            return Ok(pool);
        }

        self.catalog
            .major_courses(major)
            .map_err(|e| EngineError::catalog_lookup("전공 과목 풀 조회", e))
    }
}

/// 단과대학별 안내 문구. 공과/미술 외 대학은 문구 없음
fn major_briefing(college: &str) -> &'static str {
    match college {
        COLLEGE_ART => BRIEFING_ART,
        COLLEGE_ENGINEERING => BRIEFING_ENGINEERING,
        _ => "",
    }
}
