//! Credential resolution for the catalog API.
//!
//! Discogs personal access tokens are read once at startup and injected
//! into the client; nothing below `main` touches the process environment.
//! The environment variable takes precedence over the token file.

use std::fs;
use std::path::Path;

const TOKEN_ENV: &str = "DISCOGS_TOKEN";
const TOKEN_FILE: &str = ".discogs_token";

#[derive(Clone, Debug)]
pub struct Credentials {
    pub token: Option<String>,
    pub user_agent: String,
}

impl Credentials {
    /// Resolve credentials from `DISCOGS_TOKEN` or, failing that, a
    /// `.discogs_token` file in the working directory. A missing token is
    /// not an error: unauthenticated searches work, just heavily
    /// rate-limited.
    pub fn resolve() -> Self {
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .or_else(|| read_token_file(Path::new(TOKEN_FILE)));

        match &token {
            Some(_) => tracing::info!("Discogs token loaded"),
            None => tracing::warn!(
                "no Discogs token found (set {} or create {})",
                TOKEN_ENV,
                TOKEN_FILE
            ),
        }

        Self {
            token,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("digger/{}", env!("CARGO_PKG_VERSION"))
}

fn read_token_file(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let token = content.trim().to_string();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn token_file_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "  abc123  ").unwrap();

        assert_eq!(read_token_file(&path).as_deref(), Some("abc123"));
    }

    #[test]
    fn blank_token_file_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "   \n").unwrap();

        assert_eq!(read_token_file(&path), None);
        assert_eq!(read_token_file(&dir.path().join("absent")), None);
    }

    #[test]
    fn user_agent_identifies_the_client() {
        assert!(default_user_agent().starts_with("digger/"));
    }
}
