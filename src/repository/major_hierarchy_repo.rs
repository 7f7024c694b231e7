use crate::db::open_sqlite_connection;
use crate::domain::course::Course;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// MajorHierarchyRepository - 학과 계층 저장소
// ==========================================
/// 학과 계층 저장소
/// 역할: major_hierarchy 테이블 관리 + 계층 승계 과목 풀 조회
/// 규칙: master 학과의 유효 과목 풀 = 자기 과목 ∪ slave 학과 과목,
///       (number, credit) 기준 DISTINCT
pub struct MajorHierarchyRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MajorHierarchyRepository {
    /// 새 MajorHierarchyRepository 인스턴스 생성
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

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 계층 관계 추가 (이미 있으면 무시)
    pub fn add_hierarchy(&self, master_id: i64, slave_id: i64) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT OR IGNORE INTO major_hierarchy (master_id, slave_id) VALUES (?1, ?2)",
            params![master_id, slave_id],
        )?;
        Ok(())
    }

    /// master 학과에 과목을 승계시키는 slave 학과 id 목록
    pub fn find_slave_ids(&self, master_id: i64) -> RepositoryResult<Vec<i64>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT slave_id FROM major_hierarchy WHERE master_id = ?1 ORDER BY slave_id",
        )?;
        let rows = stmt.query_map(params![master_id], |row| row.get::<_, i64>(0))?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }
        Ok(ids)
    }

    /// master 학과 id 기준 유효 과목 풀 조회
    pub fn find_all_major_courses_by_master_id(
        &self,
        master_id: i64,
    ) -> RepositoryResult<Vec<Course>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT DISTINCT number, credit FROM major_course
            WHERE major_id = ?1
               OR major_id IN (SELECT slave_id FROM major_hierarchy WHERE master_id = ?1)
            ORDER BY number, credit
            "#,
        )?;
        Self::collect_course_rows(&mut stmt, params![master_id])
    }

    /// master 학과 코드 기준 유효 과목 풀 조회
    ///
    /// 코드가 존재하지 않으면 빈 목록을 반환한다.
    pub fn find_all_major_courses_by_master_code(
        &self,
        master_code: &str,
    ) -> RepositoryResult<Vec<Course>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT DISTINCT mc.number, mc.credit FROM major_course mc
            WHERE mc.major_id IN (
                SELECT id FROM major WHERE code = ?1
                UNION
                SELECT h.slave_id FROM major_hierarchy h
                JOIN major m ON m.id = h.master_id
                WHERE m.code = ?1
            )
            ORDER BY mc.number, mc.credit
            "#,
        )?;
        Self::collect_course_rows(&mut stmt, params![master_code])
    }

    fn collect_course_rows(
        stmt: &mut rusqlite::Statement<'_>,
        params: impl rusqlite::Params,
    ) -> RepositoryResult<Vec<Course>> {
        let rows = stmt.query_map(params, |row| {
            Ok(Course {
                number: row.get(0)?,
                credit: row.get(1)?,
                subject_area: None,
            })
        })?;

        let mut courses = Vec::new();
        for row in rows {
            courses.push(row?);
        }
        Ok(courses)
    }
}
