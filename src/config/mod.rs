// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - 설정 계층
// ==========================================
// 역할: 판정 규칙표 관리 (과목 번호·영역 명칭의 학사요람 판본별 값)
// 저장: config_kv 테이블
// ==========================================

pub mod rule_table_manager;
pub mod rule_tables;

// 핵심 규칙표 재내보내기
pub use rule_table_manager::{rule_keys, RuleTableManager};
pub use rule_tables::RuleTables;
