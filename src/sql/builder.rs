//! Builds the parameterized INSERT, SELECT, UPDATE, DELETE statements for one cinema table.
//! Columns are fixed (`id, nama, lokasi, rating`); only the table name varies.

/// Quote identifier for PostgreSQL (safe: only from settings).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Columns selected for a full row. Casts let `serial`/`bigserial` ids decode as i64 and
/// `real`/`double precision` ratings decode as the same f32 that was bound on write.
const ROW_COLUMNS: &str = "id::BIGINT AS id, nama, lokasi, rating::REAL AS rating";

/// Prepared statement text, built once at startup.
#[derive(Clone, Debug)]
pub struct CinemaQueries {
    pub insert: String,
    pub select_all: String,
    pub select_by_id: String,
    pub exists_by_id: String,
    pub update: String,
    pub delete_by_id: String,
}

impl CinemaQueries {
    pub fn for_table(table: &str) -> Self {
        let t = quoted(table);
        CinemaQueries {
            insert: format!("INSERT INTO {} (nama, lokasi, rating) VALUES ($1, $2, $3) RETURNING id::BIGINT", t),
            select_all: format!("SELECT {} FROM {} ORDER BY id", ROW_COLUMNS, t),
            select_by_id: format!("SELECT {} FROM {} WHERE id = $1", ROW_COLUMNS, t),
            exists_by_id: format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", t),
            update: format!("UPDATE {} SET nama = $1, lokasi = $2, rating = $3 WHERE id = $4", t),
            delete_by_id: format!("DELETE FROM {} WHERE id = $1", t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_target_quoted_table() {
        let q = CinemaQueries::for_table("bioskop");
        assert_eq!(
            q.insert,
            r#"INSERT INTO "bioskop" (nama, lokasi, rating) VALUES ($1, $2, $3) RETURNING id::BIGINT"#
        );
        assert_eq!(
            q.select_all,
            r#"SELECT id::BIGINT AS id, nama, lokasi, rating::REAL AS rating FROM "bioskop" ORDER BY id"#
        );
        assert!(q.select_by_id.ends_with(r#"FROM "bioskop" WHERE id = $1"#));
        assert_eq!(q.exists_by_id, r#"SELECT EXISTS(SELECT 1 FROM "bioskop" WHERE id = $1)"#);
        assert_eq!(q.update, r#"UPDATE "bioskop" SET nama = $1, lokasi = $2, rating = $3 WHERE id = $4"#);
        assert_eq!(q.delete_by_id, r#"DELETE FROM "bioskop" WHERE id = $1"#);
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        assert_eq!(quoted(r#"a"b"#), r#""a""b""#);
    }
}
