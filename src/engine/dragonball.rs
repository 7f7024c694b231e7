// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 드래곤볼(배분이수) 평가기
// ==========================================
// 역할: 7개 고정 영역 버킷으로 배분이수 과목 집계, 충족 판정
// 규칙: 영역 태그가 버킷 명칭과 완전 일치해야 적립. 불일치 태그는 조용히 버림
// 규칙: 판정 집계에서 "예술"/"외국어" 포함 버킷은 제외하고 센다
// ==========================================

use crate::domain::requirement::{Requirement, SubField};
use crate::domain::student::Student;
use crate::domain::types::RequirementCategory;
use crate::engine::classifier::CourseClassifier;

const BRIEFING: &str = "‘예술과 디자인’, ‘제2외국어와 한문’ 영역을 반드시 포함하여 7개 영역 중 6개 영역을 선택하여 각 영역별 1과목 이상 이수하여야 함.";

// ==========================================
// DragonballEvaluator - 배분이수 평가기
// ==========================================
pub struct DragonballEvaluator {
    classifier: CourseClassifier,
}

impl DragonballEvaluator {
    pub fn new(classifier: CourseClassifier) -> Self {
        Self { classifier }
    }

    pub fn evaluate(&self, student: &Student) -> Requirement {
        let mut buckets = self.build_buckets();

        for course in &student.taken_courses {
            if !self.classifier.is_dragonball_course(course) {
                continue;
            }
            // 태그 없는 과목은 위에서 걸러졌음
            let tag = course.subject_area.as_deref().unwrap_or_default();
            match buckets.iter_mut().find(|bucket| bucket.label == tag) {
                Some(bucket) => bucket.take_course(course),
                None => {
                    // 7개 영역 명칭과 맞지 않는 태그는 이 카테고리에서 제외
                    tracing::debug!(course_number = %course.number, subject_area = tag, "드래곤볼 영역 불일치, 과목 제외");
                }
            }
        }

        for bucket in buckets.iter_mut() {
            bucket.mark_satisfied_by_min_credit();
        }

        let count = self.count_non_exempt_buckets(&buckets);
        let total_credit = Requirement::sum_sub_field_credits(&buckets);

        let rules = self.classifier.rules();
        let satisfied = self.bucket_credit(&buckets, &rules.dragonball_art_area) > 1
            && self.bucket_credit(&buckets, &rules.dragonball_second_language_area) > 1
            && count >= 4;

        Requirement::new(
            RequirementCategory::Dragonball,
            total_credit,
            BRIEFING,
            satisfied,
            buckets,
        )
    }

    /// 규칙표 순서대로 7개 영역 버킷 생성
    fn build_buckets(&self) -> Vec<SubField> {
        self.classifier
            .rules()
            .dragonball_areas
            .iter()
            .map(SubField::new)
            .collect()
    }

    /// 필수 포함 2개 영역을 제외한 버킷 중 학점 > 1인 버킷 수
    ///
    /// 제외 판정은 버킷 명칭의 "예술"/"외국어" 포함 여부로 한다
    fn count_non_exempt_buckets(&self, buckets: &[SubField]) -> usize {
        buckets
            .iter()
            .filter(|bucket| !bucket.label.contains("예술") && !bucket.label.contains("외국어"))
            .filter(|bucket| bucket.total_credit > 1)
            .count()
    }

    fn bucket_credit(&self, buckets: &[SubField], label: &str) -> u32 {
        buckets
            .iter()
            .find(|bucket| bucket.label == label)
            .map(|bucket| bucket.total_credit)
            .unwrap_or(0)
    }
}

// ==========================================
// 단위 테스트
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rule_tables::RuleTables;
    use crate::domain::course::Course;
    use crate::domain::major::Major;
    use std::sync::Arc;

    fn evaluator() -> DragonballEvaluator {
        DragonballEvaluator::new(CourseClassifier::new(Arc::new(RuleTables::default())))
    }

    fn student_with(courses: Vec<Course>) -> Student {
        Student::new(20, Major::new(1, "CS", "공과대학"), false, courses)
    }

    #[test]
    fn test_buckets_follow_rule_table_order() {
        let requirement = evaluator().evaluate(&student_with(vec![]));

        let labels: Vec<&str> = requirement.sub_fields.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "역사와문화",
                "언어와철학",
                "사회와경제",
                "법과생활",
                "공학의이해",
                "제2외국어와한문",
                "예술과디자인"
            ]
        );
    }

    #[test]
    fn test_mandatory_area_alone_does_not_satisfy() {
        // 예술과디자인만 2학점: 버킷 자체는 충족이지만 카테고리는 미충족
        let student = student_with(vec![Course::with_area("010101", 2, "예술과디자인")]);
        let requirement = evaluator().evaluate(&student);

        let art = requirement
            .sub_fields
            .iter()
            .find(|s| s.label == "예술과디자인")
            .unwrap();
        assert!(art.satisfied);
        assert!(!requirement.satisfied);
        assert_eq!(requirement.total_credit, 2);
    }

    #[test]
    fn test_two_mandatory_plus_four_general_areas_satisfy() {
        let student = student_with(vec![
            Course::with_area("010101", 2, "예술과디자인"),
            Course::with_area("010201", 2, "제2외국어와한문"),
            Course::with_area("010301", 2, "역사와문화"),
            Course::with_area("010401", 2, "언어와철학"),
            Course::with_area("010501", 2, "사회와경제"),
            Course::with_area("010601", 2, "법과생활"),
        ]);

        let requirement = evaluator().evaluate(&student);

        assert!(requirement.satisfied);
        assert_eq!(requirement.total_credit, 12);
    }

    #[test]
    fn test_three_general_areas_are_not_enough() {
        // 필수 2개 영역이 충족돼도 일반 영역이 3개면 미충족 (4개 필요)
        let student = student_with(vec![
            Course::with_area("010101", 2, "예술과디자인"),
            Course::with_area("010201", 2, "제2외국어와한문"),
            Course::with_area("010301", 2, "역사와문화"),
            Course::with_area("010401", 2, "언어와철학"),
            Course::with_area("010501", 2, "사회와경제"),
        ]);

        let requirement = evaluator().evaluate(&student);
        assert!(!requirement.satisfied);
    }

    #[test]
    fn test_unmatched_tag_is_silently_dropped() {
        // 배제 휴리스틱은 통과하지만 7개 영역 명칭과 다른 태그
        let student = student_with(vec![Course::with_area("010901", 3, "미지의영역")]);
        let requirement = evaluator().evaluate(&student);

        assert_eq!(requirement.total_credit, 0);
        assert!(requirement
            .sub_fields
            .iter()
            .all(|bucket| bucket.matched_courses.is_empty()));
    }

    #[test]
    fn test_one_credit_bucket_does_not_count() {
        // 역사와문화 1학점은 "> 1" 기준 미달이라 집계에 포함되지 않음
        let student = student_with(vec![
            Course::with_area("010101", 2, "예술과디자인"),
            Course::with_area("010201", 2, "제2외국어와한문"),
            Course::with_area("010301", 1, "역사와문화"),
            Course::with_area("010401", 2, "언어와철학"),
            Course::with_area("010501", 2, "사회와경제"),
            Course::with_area("010601", 2, "법과생활"),
        ]);

        let requirement = evaluator().evaluate(&student);
        assert!(!requirement.satisfied);
    }
}
