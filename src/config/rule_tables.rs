// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 판정 규칙표
// ==========================================
// 역할: 요건 판정에 쓰이는 과목 번호·영역 명칭 규칙의 메모리 상주 사본
// 규칙: 엔진은 규칙표를 읽기만 함. 변경은 config_kv 덮어쓰기로만 이루어짐
// ==========================================

use serde::{Deserialize, Serialize};

// ===== 컴파일 시점 기본값 =====
// config_kv에 해당 키가 없을 때 사용하는 학사요람 2022-1 기준 값

/// 글쓰기 영역 과목 번호 (분반별로 번호가 다름)
pub const DEFAULT_WRITING_COURSE_NUMBERS: &str =
    "001011,001012,001013,001014,001015,001020,001021,001022";

/// 영어 영역 과목 번호
pub const DEFAULT_ENGLISH_COURSE_NUMBER: &str = "001009";

/// 특성화교양 과목 번호 (디자인씽킹, 창업과 실용법률)
pub const DEFAULT_SPECIALIZED_ELECTIVE_NUMBERS: &str = "008751,008752";

/// 전공기초영어 과목 번호 (Ⅰ/Ⅱ)
pub const DEFAULT_MAJOR_BASIC_ENGLISH_NUMBERS: &str = "007114,007115";

/// 드래곤볼 7개 영역 (리포트 세부 항목 표기 순서)
pub const DEFAULT_DRAGONBALL_AREAS: &str =
    "역사와문화,언어와철학,사회와경제,법과생활,공학의이해,제2외국어와한문,예술과디자인";

/// 드래곤볼 필수 포함 영역
pub const DEFAULT_DRAGONBALL_ART_AREA: &str = "예술과디자인";
pub const DEFAULT_DRAGONBALL_SECOND_LANGUAGE_AREA: &str = "제2외국어와한문";

/// MSC 세부 영역 명칭 (수강 과목의 subject_area 표기와 일치해야 함)
pub const DEFAULT_MSC_MATH_AREA: &str = "MSC수학";
pub const DEFAULT_MSC_SCIENCE_AREA: &str = "MSC과학";
pub const DEFAULT_MSC_COMPUTER_AREA: &str = "MSC전산";

/// 컴퓨터공학 20학번 개편으로 전공 풀에서 제외되는 과목 번호
pub const DEFAULT_CS_REVISION_REMOVED_NUMBERS: &str = "004174,101810,012305";

/// 규칙표 판본 표기
pub const DEFAULT_RULE_SET_VERSION: &str = "2022-1";

// ==========================================
// RuleTables - 판정 규칙표
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTables {
    /// 글쓰기 영역 과목 번호
    pub writing_course_numbers: Vec<String>,
    /// 영어 영역 과목 번호
    pub english_course_number: String,
    /// 특성화교양 과목 번호
    pub specialized_elective_numbers: Vec<String>,
    /// 전공기초영어 과목 번호
    pub major_basic_english_numbers: Vec<String>,

    // ===== 드래곤볼 =====
    /// 7개 영역 명칭, 리포트 표기 순서대로
    pub dragonball_areas: Vec<String>,
    /// 필수 포함 영역 1: 예술과디자인
    pub dragonball_art_area: String,
    /// 필수 포함 영역 2: 제2외국어와한문
    pub dragonball_second_language_area: String,

    // ===== MSC =====
    pub msc_math_area: String,
    pub msc_science_area: String,
    pub msc_computer_area: String,

    // ===== 전공 =====
    /// 컴퓨터공학 20학번 이상 전공 풀 제외 과목
    pub cs_revision_removed_numbers: Vec<String>,

    /// 규칙표 판본
    pub version: String,
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            writing_course_numbers: split_list(DEFAULT_WRITING_COURSE_NUMBERS),
            english_course_number: DEFAULT_ENGLISH_COURSE_NUMBER.to_string(),
            specialized_elective_numbers: split_list(DEFAULT_SPECIALIZED_ELECTIVE_NUMBERS),
            major_basic_english_numbers: split_list(DEFAULT_MAJOR_BASIC_ENGLISH_NUMBERS),
            dragonball_areas: split_list(DEFAULT_DRAGONBALL_AREAS),
            dragonball_art_area: DEFAULT_DRAGONBALL_ART_AREA.to_string(),
            dragonball_second_language_area: DEFAULT_DRAGONBALL_SECOND_LANGUAGE_AREA.to_string(),
            msc_math_area: DEFAULT_MSC_MATH_AREA.to_string(),
            msc_science_area: DEFAULT_MSC_SCIENCE_AREA.to_string(),
            msc_computer_area: DEFAULT_MSC_COMPUTER_AREA.to_string(),
            cs_revision_removed_numbers: split_list(DEFAULT_CS_REVISION_REMOVED_NUMBERS),
            version: DEFAULT_RULE_SET_VERSION.to_string(),
        }
    }
}

/// 쉼표 구분 목록 문자열 파싱 (공백 제거, 빈 항목 제외)
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
