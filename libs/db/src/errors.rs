//! Shared database error helpers (constraint violation categorization).

use sea_orm::{DbErr, RuntimeErr, SqlErr};

/// Integrity constraint a failed statement tripped over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique(String),
    ForeignKey(String),
}

/// Returns true if the given code represents a unique constraint violation
/// across popular backends (Postgres 23505, SQLite 2067/1555, MySQL 1062).
pub fn is_unique_violation_code(code: &str) -> bool {
    matches!(code, "23505" | "2067" | "1555" | "1062")
}

/// Returns true if the given code represents a foreign key violation
/// (Postgres 23503, SQLite 787, MySQL 1451/1452).
pub fn is_foreign_key_violation_code(code: &str) -> bool {
    matches!(code, "23503" | "787" | "1451" | "1452")
}

pub fn is_sqlx_unique_violation(db: &dyn sqlx::error::DatabaseError) -> bool {
    db.code()
        .map(|c| is_unique_violation_code(c.as_ref()))
        .unwrap_or(false)
}

pub fn is_sqlx_foreign_key_violation(db: &dyn sqlx::error::DatabaseError) -> bool {
    db.code()
        .map(|c| is_foreign_key_violation_code(c.as_ref()))
        .unwrap_or(false)
}

/// Classify a SeaORM error as a constraint violation, if it is one.
///
/// SeaORM's own classification is tried first; raw driver codes are the fallback
/// for messages it does not recognize.
pub fn constraint_violation(err: &DbErr) -> Option<ConstraintViolation> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            return Some(ConstraintViolation::Unique(msg))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return Some(ConstraintViolation::ForeignKey(msg))
        }
        _ => {}
    }

    let runtime = match err {
        DbErr::Exec(e) | DbErr::Query(e) | DbErr::Conn(e) => e,
        _ => return None,
    };
    let RuntimeErr::SqlxError(sqlx::Error::Database(db)) = runtime else {
        return None;
    };

    if is_sqlx_unique_violation(db.as_ref()) {
        Some(ConstraintViolation::Unique(db.message().to_string()))
    } else if is_sqlx_foreign_key_violation(db.as_ref()) {
        Some(ConstraintViolation::ForeignKey(db.message().to_string()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_codes() {
        for code in ["23505", "2067", "1555", "1062"] {
            assert!(is_unique_violation_code(code), "{code}");
        }
        assert!(!is_unique_violation_code("23503"));
    }

    #[test]
    fn foreign_key_codes() {
        for code in ["23503", "787", "1451", "1452"] {
            assert!(is_foreign_key_violation_code(code), "{code}");
        }
        assert!(!is_foreign_key_violation_code("2067"));
    }

    #[test]
    fn non_sql_errors_are_not_violations() {
        assert_eq!(
            constraint_violation(&DbErr::RecordNotFound("x".into())),
            None
        );
        assert_eq!(constraint_violation(&DbErr::Custom("boom".into())), None);
    }
}
