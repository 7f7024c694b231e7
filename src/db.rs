// ==========================================
// 홍익대학교 졸업요건 진단 시스템 - SQLite 연결 초기화
// ==========================================
// 목표:
// - 모든 Connection::open 경로의 PRAGMA 동작 통일 (외래키가 켜진 연결과
//   꺼진 연결이 섞이는 상황 방지)
// - busy_timeout 통일로 동시 접근 시 산발적 busy 오류 감소
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// 기본 busy_timeout (밀리초)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 현재 코드가 기대하는 schema_version (scripts/catalog_db/schema.sql과 정렬)
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// 카탈로그 스키마 SQL (바이너리에 포함)
pub const CATALOG_SCHEMA_SQL: &str = include_str!("../scripts/catalog_db/schema.sql");

/// SQLite 연결에 공통 PRAGMA를 적용한다
///
/// foreign_keys와 busy_timeout은 연결 단위 설정이라 연결마다 다시 켜야 한다.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// SQLite 연결을 열고 공통 설정을 적용한다
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 카탈로그 스키마를 생성한다 (존재하면 건너뜀)
pub fn init_catalog_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CATALOG_SCHEMA_SQL)
}

/// schema_version을 읽는다 (테이블이 없으면 None)
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> = conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}

/// 기본 카탈로그 DB 경로를 얻는다
///
/// 우선순위:
/// 1. 환경변수 HONGIK_GRAD_AUDIT_DB_PATH
/// 2. 사용자 데이터 디렉터리/hongik-grad-audit/catalog.db
/// 3. ./catalog.db
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("HONGIK_GRAD_AUDIT_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./catalog.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("hongik-grad-audit");
        std::fs::create_dir_all(&dir).ok();
        path = dir.join("catalog.db");
    }

    path.to_string_lossy().to_string()
}
