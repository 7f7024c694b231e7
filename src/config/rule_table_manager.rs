// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 규칙표 관리자
// ==========================================
// 역할: 규칙표 로딩, 조회, 덮어쓰기 관리
// 저장: config_kv 테이블 (key-value + scope)
// ==========================================

use crate::config::rule_tables::{split_list, RuleTables};
use crate::config::rule_tables::{
    DEFAULT_CS_REVISION_REMOVED_NUMBERS, DEFAULT_DRAGONBALL_AREAS, DEFAULT_DRAGONBALL_ART_AREA,
    DEFAULT_DRAGONBALL_SECOND_LANGUAGE_AREA, DEFAULT_ENGLISH_COURSE_NUMBER,
    DEFAULT_MAJOR_BASIC_ENGLISH_NUMBERS, DEFAULT_MSC_COMPUTER_AREA, DEFAULT_MSC_MATH_AREA,
    DEFAULT_MSC_SCIENCE_AREA, DEFAULT_RULE_SET_VERSION, DEFAULT_SPECIALIZED_ELECTIVE_NUMBERS,
    DEFAULT_WRITING_COURSE_NUMBERS,
};
use crate::db::open_sqlite_connection;
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// RuleTableManager - 규칙표 관리자
// ==========================================
pub struct RuleTableManager {
    conn: Arc<Mutex<Connection>>,
}

impl RuleTableManager {
    /// 새 RuleTableManager 인스턴스 생성
    ///
    /// # 인자
    /// - db_path: 데이터베이스 파일 경로
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 기존 연결로 RuleTableManager 생성
    ///
    /// 연결 동작을 일치시키기 위해 전달받은 연결에 통일 PRAGMA를 다시 적용함 (멱등)
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("잠금 획득 실패: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// config_kv 테이블에서 설정값 읽기 (scope_id='global')
    ///
    /// # 반환
    /// - Some(String): 설정값
    /// - None: 설정 없음
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("잠금 획득 실패: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// global scope 설정값 읽기 (공개 메서드, 다른 모듈에서 재사용)
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        self.get_config_value(key)
    }

    /// config_kv 테이블에서 설정값 읽기, 기본값 포함
    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self.get_config_value(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// 설정값 덮어쓰기 (UPSERT)
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("잠금 획득 실패: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }

    /// 규칙표 기본값을 config_kv에 채움 (이미 있는 키는 건드리지 않음)
    ///
    /// # 반환
    /// - Ok(usize): 새로 채워진 키 개수
    pub fn seed_defaults(&self) -> Result<usize, Box<dyn Error>> {
        let defaults: [(&str, &str); 12] = [
            (rule_keys::WRITING_COURSE_NUMBERS, DEFAULT_WRITING_COURSE_NUMBERS),
            (rule_keys::ENGLISH_COURSE_NUMBER, DEFAULT_ENGLISH_COURSE_NUMBER),
            (
                rule_keys::SPECIALIZED_ELECTIVE_NUMBERS,
                DEFAULT_SPECIALIZED_ELECTIVE_NUMBERS,
            ),
            (
                rule_keys::MAJOR_BASIC_ENGLISH_NUMBERS,
                DEFAULT_MAJOR_BASIC_ENGLISH_NUMBERS,
            ),
            (rule_keys::DRAGONBALL_AREAS, DEFAULT_DRAGONBALL_AREAS),
            (rule_keys::DRAGONBALL_ART_AREA, DEFAULT_DRAGONBALL_ART_AREA),
            (
                rule_keys::DRAGONBALL_SECOND_LANGUAGE_AREA,
                DEFAULT_DRAGONBALL_SECOND_LANGUAGE_AREA,
            ),
            (rule_keys::MSC_MATH_AREA, DEFAULT_MSC_MATH_AREA),
            (rule_keys::MSC_SCIENCE_AREA, DEFAULT_MSC_SCIENCE_AREA),
            (rule_keys::MSC_COMPUTER_AREA, DEFAULT_MSC_COMPUTER_AREA),
            (
                rule_keys::CS_REVISION_REMOVED_NUMBERS,
                DEFAULT_CS_REVISION_REMOVED_NUMBERS,
            ),
            (rule_keys::RULE_SET_VERSION, DEFAULT_RULE_SET_VERSION),
        ];

        let conn = self.conn.lock().map_err(|e| format!("잠금 획득 실패: {}", e))?;

        let mut count = 0;
        for (key, value) in defaults.iter() {
            let affected = conn.execute(
                "INSERT OR IGNORE INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)",
                params![key, value],
            )?;
            count += affected;
        }

        Ok(count)
    }

    /// 규칙표 전체 로딩
    ///
    /// config_kv 값이 있으면 그 값을, 없으면 컴파일 시점 기본값을 사용한다.
    /// 목록 키가 비어 있게 파싱되면 기본값으로 되돌린다.
    pub fn load(&self) -> Result<RuleTables, Box<dyn Error>> {
        let writing_course_numbers = self.get_list_or_default(
            rule_keys::WRITING_COURSE_NUMBERS,
            DEFAULT_WRITING_COURSE_NUMBERS,
        )?;
        let english_course_number = self.get_string_or_default(
            rule_keys::ENGLISH_COURSE_NUMBER,
            DEFAULT_ENGLISH_COURSE_NUMBER,
        )?;
        let specialized_elective_numbers = self.get_list_or_default(
            rule_keys::SPECIALIZED_ELECTIVE_NUMBERS,
            DEFAULT_SPECIALIZED_ELECTIVE_NUMBERS,
        )?;
        let major_basic_english_numbers = self.get_list_or_default(
            rule_keys::MAJOR_BASIC_ENGLISH_NUMBERS,
            DEFAULT_MAJOR_BASIC_ENGLISH_NUMBERS,
        )?;
        let dragonball_areas =
            self.get_list_or_default(rule_keys::DRAGONBALL_AREAS, DEFAULT_DRAGONBALL_AREAS)?;
        let dragonball_art_area = self.get_string_or_default(
            rule_keys::DRAGONBALL_ART_AREA,
            DEFAULT_DRAGONBALL_ART_AREA,
        )?;
        let dragonball_second_language_area = self.get_string_or_default(
            rule_keys::DRAGONBALL_SECOND_LANGUAGE_AREA,
            DEFAULT_DRAGONBALL_SECOND_LANGUAGE_AREA,
        )?;
        let msc_math_area =
            self.get_string_or_default(rule_keys::MSC_MATH_AREA, DEFAULT_MSC_MATH_AREA)?;
        let msc_science_area =
            self.get_string_or_default(rule_keys::MSC_SCIENCE_AREA, DEFAULT_MSC_SCIENCE_AREA)?;
        let msc_computer_area =
            self.get_string_or_default(rule_keys::MSC_COMPUTER_AREA, DEFAULT_MSC_COMPUTER_AREA)?;
        let cs_revision_removed_numbers = self.get_list_or_default(
            rule_keys::CS_REVISION_REMOVED_NUMBERS,
            DEFAULT_CS_REVISION_REMOVED_NUMBERS,
        )?;
        let version =
            self.get_string_or_default(rule_keys::RULE_SET_VERSION, DEFAULT_RULE_SET_VERSION)?;

        Ok(RuleTables {
            writing_course_numbers,
            english_course_number,
            specialized_elective_numbers,
            major_basic_english_numbers,
            dragonball_areas,
            dragonball_art_area,
            dragonball_second_language_area,
            msc_math_area,
            msc_science_area,
            msc_computer_area,
            cs_revision_removed_numbers,
            version,
        })
    }

    /// 쉼표 구분 목록 키 읽기. 빈 목록이면 기본값으로 되돌림
    fn get_list_or_default(&self, key: &str, default: &str) -> Result<Vec<String>, Box<dyn Error>> {
        let raw = self.get_config_or_default(key, default)?;
        let items = split_list(&raw);

        if items.is_empty() {
            tracing::warn!(
                config_key = key,
                raw_value = %raw,
                "규칙표 목록 설정이 비어 있어 기본값을 사용합니다"
            );
            Ok(split_list(default))
        } else {
            Ok(items)
        }
    }

    /// 단일 문자열 키 읽기. 공백뿐이면 기본값으로 되돌림
    fn get_string_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        let raw = self.get_config_or_default(key, default)?;
        let value = raw.trim();

        if value.is_empty() {
            tracing::warn!(
                config_key = key,
                "규칙표 설정이 비어 있어 기본값을 사용합니다"
            );
            Ok(default.to_string())
        } else {
            Ok(value.to_string())
        }
    }
}

// ==========================================
// 규칙표 키 상수
// ==========================================
pub mod rule_keys {
    // 기초교양
    pub const WRITING_COURSE_NUMBERS: &str = "writing_course_numbers";
    pub const ENGLISH_COURSE_NUMBER: &str = "english_course_number";

    // 특성화교양
    pub const SPECIALIZED_ELECTIVE_NUMBERS: &str = "specialized_elective_numbers";

    // 전공기초영어
    pub const MAJOR_BASIC_ENGLISH_NUMBERS: &str = "major_basic_english_numbers";

    // 드래곤볼
    pub const DRAGONBALL_AREAS: &str = "dragonball_areas";
    pub const DRAGONBALL_ART_AREA: &str = "dragonball_art_area";
    pub const DRAGONBALL_SECOND_LANGUAGE_AREA: &str = "dragonball_second_language_area";

    // MSC
    pub const MSC_MATH_AREA: &str = "msc_math_area";
    pub const MSC_SCIENCE_AREA: &str = "msc_science_area";
    pub const MSC_COMPUTER_AREA: &str = "msc_computer_area";

    // 전공
    pub const CS_REVISION_REMOVED_NUMBERS: &str = "cs_revision_removed_numbers";

    // 판본
    pub const RULE_SET_VERSION: &str = "rule_set_version";
}
