//! Injected collaborators of the analysis engine.
//!
//! These traits are the seams to the world outside the core: file
//! existence, database connectivity and query decomposition are all
//! external concerns. Connectivity checks may block on I/O; callers own
//! any timeout policy, and nothing in the in-memory graph work ever
//! waits on them.

use std::path::Path;

use smol_str::SmolStr;

use crate::ast::Database;

/// File existence predicate used by the import analyzer.
pub trait FileChecker: Sync {
    fn exists(&self, path: &Path) -> bool;
}

/// Checks existence against the real filesystem.
pub struct FsFileChecker;

impl FileChecker for FsFileChecker {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Treats every import target as existing. For specifications assembled
/// in memory, where there is no filesystem to consult.
pub struct AssumeExisting;

impl FileChecker for AssumeExisting {
    fn exists(&self, _path: &Path) -> bool {
        true
    }
}

/// Database connectivity checker used by the connectivity analyzer.
pub trait ConnectionChecker: Sync {
    /// Attempt a connection; `Err` carries the failure description.
    fn check(&self, database: &Database) -> Result<(), String>;
}

/// Accepts every database without connecting. For analysis passes that
/// run offline.
pub struct NoopConnectionChecker;

impl ConnectionChecker for NoopConnectionChecker {
    fn check(&self, _database: &Database) -> Result<(), String> {
        Ok(())
    }
}

/// Decomposes a query value into the symbols it references.
pub trait QueryParser: Sync {
    /// Bare names: candidate constants, tables or databases.
    fn parse_names(&self, query: &str) -> Vec<SmolStr>;
    /// Variable references: candidate UI elements.
    fn parse_variables(&self, query: &str) -> Vec<SmolStr>;
}

/// Default query decomposition: names are bracketed (`[Users]`),
/// variables are braced (`{Username}`).
pub struct BracketQueryParser;

impl BracketQueryParser {
    fn between(query: &str, open: char, close: char) -> Vec<SmolStr> {
        let mut names = Vec::new();
        let mut rest = query;
        while let Some(start) = rest.find(open) {
            rest = &rest[start + open.len_utf8()..];
            let Some(end) = rest.find(close) else { break };
            let inner = rest[..end].trim();
            if !inner.is_empty() {
                names.push(SmolStr::new(inner));
            }
            rest = &rest[end + close.len_utf8()..];
        }
        names
    }
}

impl QueryParser for BracketQueryParser {
    fn parse_names(&self, query: &str) -> Vec<SmolStr> {
        Self::between(query, '[', ']')
    }

    fn parse_variables(&self, query: &str) -> Vec<SmolStr> {
        Self::between(query, '{', '}')
    }
}
