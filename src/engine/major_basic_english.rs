// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 전공기초영어 평가기
// ==========================================
// 역할: 전공기초영어(Ⅰ/Ⅱ) 이수 여부 판정
// 입력: 학생 스냅샷
// 출력: 리포트 1행. 이수 시 과목 1건만 수록, 미이수 시 버킷 없음
// ==========================================

use crate::domain::requirement::{Requirement, SubField};
use crate::domain::student::Student;
use crate::domain::types::RequirementCategory;
use crate::engine::classifier::CourseClassifier;

const BRIEFING: &str = "전공기초영어(Ⅰ/Ⅱ) 중 한 과목을 반드시 이수하여야 함.";

// ==========================================
// MajorBasicEnglishEvaluator - 전공기초영어 평가기
// ==========================================
pub struct MajorBasicEnglishEvaluator {
    classifier: CourseClassifier,
}

impl MajorBasicEnglishEvaluator {
    pub fn new(classifier: CourseClassifier) -> Self {
        Self { classifier }
    }

    /// 수강 목록을 한 번 훑고 첫 일치 과목에서 즉시 확정한다.
    /// 두 과목 중 하나만 있으면 충분하므로 중복 이수는 첫 건만 수록됨
    pub fn evaluate(&self, student: &Student) -> Requirement {
        for course in &student.taken_courses {
            if self.classifier.is_major_basic_english(course) {
                let mut bucket = SubField::new("전공기초영어");
                bucket.take_course(course);
                bucket.satisfied = true;

                return Requirement::new(
                    RequirementCategory::MajorBasicEnglish,
                    course.credit,
                    BRIEFING,
                    true,
                    vec![bucket],
                );
            }
        }

        // 미이수: 학점 0, 버킷 없음
        Requirement::new(RequirementCategory::MajorBasicEnglish, 0, BRIEFING, false, vec![])
    }
}
