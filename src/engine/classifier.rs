// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 과목 분류기
// ==========================================
// 역할: 과목 1건이 어느 고정 분류에 속하는지 판정하는 술어 집합
// 입력: Course (과목 번호 + 영역 태그)
// 규칙: 상태 없음. 규칙표 스냅샷만 읽음
// ==========================================

use crate::config::rule_tables::RuleTables;
use crate::domain::course::Course;
use std::sync::Arc;

// ==========================================
// CourseClassifier - 과목 분류기
// ==========================================
#[derive(Clone)]
pub struct CourseClassifier {
    rules: Arc<RuleTables>,
}

impl CourseClassifier {
    /// 규칙표 스냅샷으로 분류기 생성
    pub fn new(rules: Arc<RuleTables>) -> Self {
        Self { rules }
    }

    /// 분류기가 참조 중인 규칙표
    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    // ==========================================
    // 과목 번호 기반 술어 (학점 무시, 번호 완전 일치)
    // ==========================================

    /// 글쓰기 영역 과목 여부
    pub fn is_writing_course(&self, course: &Course) -> bool {
        self.rules
            .writing_course_numbers
            .iter()
            .any(|number| number == &course.number)
    }

    /// 영어 영역 과목 여부
    pub fn is_english_course(&self, course: &Course) -> bool {
        course.number == self.rules.english_course_number
    }

    /// 특성화교양 과목 여부
    pub fn is_specialized_elective(&self, course: &Course) -> bool {
        self.rules
            .specialized_elective_numbers
            .iter()
            .any(|number| number == &course.number)
    }

    /// 전공기초영어 과목 여부
    pub fn is_major_basic_english(&self, course: &Course) -> bool {
        self.rules
            .major_basic_english_numbers
            .iter()
            .any(|number| number == &course.number)
    }

    // ==========================================
    // 영역 태그 기반 술어
    // ==========================================

    /// 드래곤볼 영역 태그 여부 (배제 휴리스틱)
    ///
    /// 태그가 4글자 이상이고 "MSC"도 "교양"도 포함하지 않으면
    /// 배분이수 영역 태그로 간주한다. 글자 수 기준은 문자 단위
    pub fn is_dragonball_area(&self, subject_area: &str) -> bool {
        !(subject_area.chars().count() <= 3
            || subject_area.contains("MSC")
            || subject_area.contains("교양"))
    }

    /// 드래곤볼 영역 과목 여부 (태그 없는 과목은 항상 아님)
    pub fn is_dragonball_course(&self, course: &Course) -> bool {
        match course.subject_area.as_deref() {
            Some(tag) => self.is_dragonball_area(tag),
            None => false,
        }
    }

    /// MSC 과목 여부 (태그에 "MSC" 포함, 태그 없으면 아님)
    pub fn is_abeek_course(&self, course: &Course) -> bool {
        course
            .subject_area
            .as_deref()
            .map(|tag| tag.contains("MSC"))
            .unwrap_or(false)
    }
}
