use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            // A referenced article or parent reply disappeared between the
            // caller's existence check and the write.
            ErrorKind::ForeignKeyViolation => {
                DomainError::Validation("referenced record does not exist".into())
            }
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                DomainError::Validation(db_err.message().to_string())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// `%keyword%` with LIKE wildcards in the keyword escaped by `\`.
pub(super) fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

pub(super) fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
