// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - MSC 판정 정책표
// ==========================================
// 역할: (인증 여부, 학과 코드, 학번대) 조합을 정책 레코드 한 건으로 사상
// 규칙: 분기마다 학점 하한 + 필수이수과목 규칙 + 안내 문구가 한 묶음
// ==========================================

use crate::domain::course::Course;
use crate::domain::types::{MAJOR_CODE_CS, MAJOR_CODE_EE, MAJOR_CODE_IE};

// ==========================================
// 필수이수과목 대상 과목 (학수번호, 학점)
// ==========================================

/// 강의+실험 짝. 두 과목이 모두 수강 목록에 있어야 1세트 인정
#[derive(Debug, Clone, Copy)]
pub struct LectureLabSet {
    pub lecture: (&'static str, u32),
    pub lab: (&'static str, u32),
}

impl LectureLabSet {
    pub fn is_taken(&self, taken_courses: &[Course]) -> bool {
        has_taken(taken_courses, self.lecture) && has_taken(taken_courses, self.lab)
    }
}

pub const PHYSICS_1: LectureLabSet = LectureLabSet {
    lecture: ("012101", 3),
    lab: ("012103", 1),
};
pub const PHYSICS_2: LectureLabSet = LectureLabSet {
    lecture: ("012104", 3),
    lab: ("012106", 1),
};
pub const CHEMISTRY_1: LectureLabSet = LectureLabSet {
    lecture: ("012107", 3),
    lab: ("012109", 1),
};
pub const CHEMISTRY_2: LectureLabSet = LectureLabSet {
    lecture: ("012110", 3),
    lab: ("012113", 1),
};

/// 소프트웨어 선택 과목 (단일 과목, 실험 없음)
pub const INFORMATION_SYSTEMS: (&str, u32) = ("012304", 3);
pub const OBJECT_ORIENTED_PROGRAMMING: (&str, u32) = ("012305", 3);
pub const C_PROGRAMMING: (&str, u32) = ("101810", 3);
pub const WEB_PROGRAMMING: (&str, u32) = ("012306", 3);

/// (학수번호, 학점) 완전 일치로 이수 여부 판정
pub fn has_taken(taken_courses: &[Course], course: (&str, u32)) -> bool {
    taken_courses.contains(&Course::new(course.0, course.1))
}

// ==========================================
// 필수이수과목 규칙
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredCourseRule {
    /// 전자전기: 물리(2)+화학(1) 필수, 택일 항은 물리(2)/화학(2)
    EePairs,
    /// 물리(1)/물리(2)/화학(1)/화학(2) 4세트 중 2세트 이상
    AnyTwoScienceSets,
    /// 컴퓨터공학 20학번 이상: 정보시스템개론/객체지향/C-프로그래밍 중 2과목
    CsSoftwareElectives,
    /// 산업공학 20학번 이상: 정보시스템개론/웹프로그래밍/C-프로그래밍 중 2과목
    IeSoftwareElectives,
    /// 물리(1)+화학(1) 필수, 물리(2)/화학(2) 택일
    StandardScienceSets,
}

// ==========================================
// MscPolicy - 분기별 정책 레코드
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct MscPolicy {
    /// MSC수학 최소 학점
    pub min_math: u32,
    /// MSC과학 최소 학점
    pub min_science: u32,
    /// MSC전산 최소 학점. None이면 전산 하한 없음
    pub min_computer: Option<u32>,
    /// 세 영역 합계 최소 학점. None이면 합계 하한 없음
    pub min_total: Option<u32>,
    /// 필수이수과목 규칙
    pub required_rule: RequiredCourseRule,
    /// 학사요람 안내 문구. 문구가 정의되지 않은 분기는 빈 문자열
    pub briefing: &'static str,
}

// ===== 분기별 안내 문구 (학사요람 원문 그대로) =====

const BRIEFING_ABEEK_EE: &str = "분야별 최소이수학점(과학 8학점, 수학 9학점, 전산 6학점)을 포함하여 30학점 이상 이수하여야 함.\nMSC 과학분야 중\n대학물리(2), 대학물리실험(2), 대학화학(1), 대학화학실험(1)을 반드시 이수하여야 하고,\n{대학물리(1),대학물리실험(1)} 와｛대학화학(2), 대학화학실험(2)｝둘 중 택일하여 이수하여야 함.\n";

const BRIEFING_ABEEK_GENERAL: &str = "분야별 최소이수학점(과학 8학점, 수학 9학점, 전산 6학점)을 포함하여 30학점 이상 이수하여야 함.\nMSC 과학분야 중\n{대학물리(1), 대학물리실험(1)}, {대학화학(1), 대학화학실험(1)}, {대학물리(2), 대학물리실험(2),}, {대학화학(2), 대학화학실험(2)}\n4Set 중 2Set를 선택하여 이수하여야 함.\n";

const BRIEFING_EE: &str = "24학점 이상 이수하여야 함.\nMSC 과학분야 중\n대학물리(2), 대학물리실험(2), 대학화학(1), 대학화학실험(1)을 반드시 이수하여야 하고,\n{대학물리(1),대학물리실험(1)} 와 {대학화학(2), 대학화학실험(2)} 둘 중 택일하여 이수하여야 함.\n";

const BRIEFING_CS_FROM_20: &str = "MSC 과학분야 내 상기의 대학화학, 대학물리에 대한 별도 이수 요건 없이 MSC 수학분야 및 과학분야 내 과목 이수학점 합이 18학점 이상 되면 인정함.\n<정보시스템개론, 객체지향프로그래밍, C-프로그래밍> 중 6학점을 이수해야 함.\n";

const BRIEFING_IE_FROM_20: &str = "MSC 과학분야 내 상기의 대학화학, 대학물리에 대한 별도 이수 요건 없이 MSC 수학분야 및 과학분야 내 과목 이수학점 합이 18학점 이상 되면 인정함.\n<정보시스템개론, 웹프로그래밍, C-프로그래밍> 중 6학점을 이수해야 함.\n";

const BRIEFING_CS_BEFORE_20: &str = "18학점 이상 이수하여야함\nMSC 과학분야 중\n대학물리(1), 대학물리실험(1), 대학화학(1), 대학화학실험(1)을 반드시 이수하여야 하고,\n{대학물리(2), 대학물리실험(2)} 와 {대학화학(2), 대학화학실험(2)} 둘 중 택일하여 이수하여야 함.\n";

const BRIEFING_GENERAL_BEFORE_20: &str = "24학점 이상 이수하여야 함.\nMSC 과학분야 중\n대학물리(1), 대학물리실험(1), 대학화학(1), 대학화학실험(1)을 반드시 이수하여야 하고,\n{대학물리(2), 대학물리실험(2)} 와 {대학화학(2), 대학화학실험(2)} 둘 중 택일하여 이수하여야 함.\n";

/// 학생 속성 조합으로 정책 레코드 선택
///
/// 분기 순서(인증 → 전자전기 → 학번대 → 학과)가 판정 결과를 정의한다.
/// 20학번 이상 + 비인증 + CS/IE 외 학과 분기는 요람에 문구가 없어 빈 문자열
pub fn lookup(is_abeek_certified: bool, major_code: &str, enter_year: i32) -> MscPolicy {
    if is_abeek_certified {
        if major_code == MAJOR_CODE_EE {
            return MscPolicy {
                min_math: 9,
                min_science: 8,
                min_computer: Some(6),
                min_total: Some(30),
                required_rule: RequiredCourseRule::EePairs,
                briefing: BRIEFING_ABEEK_EE,
            };
        }
        return MscPolicy {
            min_math: 9,
            min_science: 8,
            min_computer: Some(6),
            min_total: Some(30),
            required_rule: RequiredCourseRule::AnyTwoScienceSets,
            briefing: BRIEFING_ABEEK_GENERAL,
        };
    }

    if major_code == MAJOR_CODE_EE {
        return MscPolicy {
            min_math: 9,
            min_science: 9,
            min_computer: Some(6),
            min_total: None,
            required_rule: RequiredCourseRule::EePairs,
            briefing: BRIEFING_EE,
        };
    }

    if enter_year >= 20 {
        if major_code == MAJOR_CODE_CS {
            return MscPolicy {
                min_math: 9,
                min_science: 9,
                min_computer: None,
                min_total: None,
                required_rule: RequiredCourseRule::CsSoftwareElectives,
                briefing: BRIEFING_CS_FROM_20,
            };
        }
        if major_code == MAJOR_CODE_IE {
            return MscPolicy {
                min_math: 9,
                min_science: 9,
                min_computer: Some(6),
                min_total: None,
                required_rule: RequiredCourseRule::IeSoftwareElectives,
                briefing: BRIEFING_IE_FROM_20,
            };
        }
        return MscPolicy {
            min_math: 9,
            min_science: 9,
            min_computer: Some(6),
            min_total: None,
            required_rule: RequiredCourseRule::StandardScienceSets,
            briefing: "",
        };
    }

    if major_code == MAJOR_CODE_CS {
        return MscPolicy {
            min_math: 9,
            min_science: 9,
            min_computer: None,
            min_total: None,
            required_rule: RequiredCourseRule::StandardScienceSets,
            briefing: BRIEFING_CS_BEFORE_20,
        };
    }

    MscPolicy {
        min_math: 9,
        min_science: 9,
        min_computer: Some(6),
        min_total: None,
        required_rule: RequiredCourseRule::StandardScienceSets,
        briefing: BRIEFING_GENERAL_BEFORE_20,
    }
}
