// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 기초교양 평가기
// ==========================================
// 역할: 글쓰기 + 영어 두 영역의 이수 학점 집계와 충족 판정
// 규칙: 글쓰기 판정이 영어보다 먼저. 한 과목은 최대 한 영역에만 적립
// ==========================================

use crate::domain::requirement::{Requirement, SubField};
use crate::domain::student::Student;
use crate::domain::types::RequirementCategory;
use crate::engine::classifier::CourseClassifier;

const BRIEFING: &str = "기초교양(6학점)";
const WRITING_HINT: &str = "/courses?type=grad&keyword=writing";
const ENGLISH_HINT: &str = "/courses?type=grad&keyword=english";

// ==========================================
// BasicElectiveEvaluator - 기초교양 평가기
// ==========================================
pub struct BasicElectiveEvaluator {
    classifier: CourseClassifier,
}

impl BasicElectiveEvaluator {
    pub fn new(classifier: CourseClassifier) -> Self {
        Self { classifier }
    }

    /// 글쓰기/영어 버킷을 만들고 수강 과목을 각 영역으로 배분한다.
    /// 카테고리 충족은 두 버킷 모두 학점 > 1일 때
    pub fn evaluate(&self, student: &Student) -> Requirement {
        let mut writing = SubField::with_hint("글쓰기", WRITING_HINT);
        let mut english = SubField::with_hint("영어", ENGLISH_HINT);

        for course in &student.taken_courses {
            if self.classifier.is_writing_course(course) {
                writing.take_course(course);
            } else if self.classifier.is_english_course(course) {
                english.take_course(course);
            }
        }

        writing.mark_satisfied_by_min_credit();
        english.mark_satisfied_by_min_credit();

        let satisfied = writing.satisfied && english.satisfied;
        let sub_fields = vec![writing, english];
        let total_credit = Requirement::sum_sub_field_credits(&sub_fields);

        Requirement::new(
            RequirementCategory::BasicElective,
            total_credit,
            BRIEFING,
            satisfied,
            sub_fields,
        )
    }
}
