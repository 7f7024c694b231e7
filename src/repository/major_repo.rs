use crate::db::open_sqlite_connection;
use crate::domain::major::Major;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// MajorRepository - 전공(학과) 저장소
// ==========================================
/// 전공 저장소
/// 역할: major 테이블 CRUD
/// 규칙: 비즈니스 로직 금지, 데이터 접근만 담당
pub struct MajorRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MajorRepository {
    /// 새 MajorRepository 인스턴스 생성
    ///
    /// # 파라미터
    /// - db_path: 데이터베이스 파일 경로
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 기존 연결로 저장소 인스턴스 생성
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 데이터베이스 연결 획득
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 전공을 upsert하고 id를 반환한다
    ///
    /// code 충돌 시 college/name을 갱신한다 (id는 유지).
    pub fn upsert_major(
        &self,
        code: &str,
        college: &str,
        name: Option<&str>,
    ) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO major (code, college, name)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(code) DO UPDATE SET
                college = excluded.college,
                name = excluded.name,
                updated_at = datetime('now')
            "#,
            params![code, college, name],
        )?;

        let id: i64 = conn.query_row(
            "SELECT id FROM major WHERE code = ?1",
            params![code],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// id로 전공 조회
    pub fn find_major_by_id(&self, major_id: i64) -> RepositoryResult<Option<Major>> {
        let conn = self.get_conn()?;
        let major = conn
            .query_row(
                "SELECT id, code, college FROM major WHERE id = ?1",
                params![major_id],
                Self::map_major_row,
            )
            .optional()?;
        Ok(major)
    }

    /// 학과 코드로 전공 조회
    pub fn find_major_by_code(&self, code: &str) -> RepositoryResult<Option<Major>> {
        let conn = self.get_conn()?;
        let major = conn
            .query_row(
                "SELECT id, code, college FROM major WHERE code = ?1",
                params![code],
                Self::map_major_row,
            )
            .optional()?;
        Ok(major)
    }

    /// 전공 전체 목록 (코드 순)
    pub fn list_majors(&self) -> RepositoryResult<Vec<Major>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT id, code, college FROM major ORDER BY code")?;
        let rows = stmt.query_map([], Self::map_major_row)?;

        let mut majors = Vec::new();
        for row in rows {
            majors.push(row?);
        }
        Ok(majors)
    }

    fn map_major_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Major> {
        Ok(Major {
            id: row.get(0)?,
            code: row.get(1)?,
            college: row.get(2)?,
        })
    }
}
