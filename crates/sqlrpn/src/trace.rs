//! `tracing` events for built statements.
//!
//! Every successful build emits one `DEBUG` event under target `sqlrpn.sql`
//! with the statement kind, the SQL text and the bind count. Bind values are
//! never logged.

use crate::config::BuilderConfig;
use tracing::Level;

/// Log target for all events emitted by this crate.
pub const TARGET: &str = "sqlrpn.sql";

/// The kind of statement fragment a builder produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Where,
    Insert,
    Update,
    Select,
    Order,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Where => "where",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Select => "select",
            StatementKind::Order => "order",
        }
    }
}

pub(crate) fn emit_built(config: &BuilderConfig, kind: StatementKind, sql: &str, binds: usize) {
    if !tracing::enabled!(target: TARGET, Level::DEBUG) {
        return;
    }
    let shown = match config.max_logged_sql {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    };
    tracing::debug!(
        target: TARGET,
        kind = kind.as_str(),
        binds,
        sql = %shown,
        "built statement"
    );
}

fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

/// Collects formatted `DEBUG` events emitted while a closure runs.
#[cfg(test)]
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    let buffer = Buffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let logged = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (result, logged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_event_fields() {
        let config = BuilderConfig::new().with_max_logged_sql(5);
        let ((), logged) = capture(|| emit_built(&config, StatementKind::Where, "where (a = ?)", 1));
        assert!(logged.contains("sqlrpn.sql"), "{logged}");
        assert!(logged.contains("kind=\"where\""), "{logged}");
        assert!(logged.contains("binds=1"), "{logged}");
        assert!(logged.contains("sql=where..."), "{logged}");
    }

    #[test]
    fn truncate_keeps_short_sql() {
        assert_eq!(truncate_sql_bytes("select *", 100), "select *");
    }

    #[test]
    fn truncate_respects_char_boundary() {
        // "é" is two bytes; cutting at 2 would split it.
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
        assert_eq!(truncate_sql_bytes("where (a = ?)", 5), "where");
    }
}
