// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 학생 평가 스냅샷
// ==========================================
// 역할: 평가 호출 한 번의 입력 전체. 평가 중 변경되지 않는다
// ==========================================

use crate::domain::course::Course;
use crate::domain::major::Major;
use serde::{Deserialize, Serialize};

/// 학생 평가 스냅샷
///
/// 엔진 입력은 이 스냅샷과 카탈로그 조회 결과가 전부이며,
/// 평가 간 공유 상태는 없다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// 입학년도 2자리 (예: 21 = 2021학번). 교육과정 개정 분기 기준
    pub enter_year: i32,
    /// 소속 전공 (카탈로그에서 해소 완료된 참조)
    pub major: Major,
    /// 공학교육인증(ABEEK) 트랙 여부
    pub is_abeek_certified: bool,
    /// 이수 과목 전체. 중복 수강은 각각 별도 학점으로 집계
    pub taken_courses: Vec<Course>,
}

impl Student {
    pub fn new(
        enter_year: i32,
        major: Major,
        is_abeek_certified: bool,
        taken_courses: Vec<Course>,
    ) -> Self {
        Self {
            enter_year,
            major,
            is_abeek_certified,
            taken_courses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_snapshot_shape() {
        let student = Student::new(
            21,
            Major::new(1, "CS", "공과대학"),
            false,
            vec![Course::new("001009", 2)],
        );
        assert_eq!(student.enter_year, 21);
        assert_eq!(student.major.code, "CS");
        assert_eq!(student.taken_courses.len(), 1);
    }
}
