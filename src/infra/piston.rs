//! Remote code execution via the Piston API.
//!
//! Submissions are never executed locally. Source is shipped to the
//! public Piston endpoint and the captured stdout/stderr come back for
//! judging.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{PISTON_API_URL, PISTON_LANGUAGES};
use crate::errors::{AppError, AppResult};

/// Outcome of running a piece of code against one stdin.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

impl RunOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Executes user-submitted code in a sandbox.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait CodeRunner: Send + Sync {
    /// Run source code in the given language with the given stdin.
    async fn run(&self, language: &str, source_code: &str, stdin: &str) -> AppResult<RunOutcome>;
}

/// Resolve a portal language name to Piston's (language, version) pair.
pub fn piston_language(language: &str) -> Option<(&'static str, &'static str)> {
    PISTON_LANGUAGES
        .iter()
        .find(|(name, _, _)| *name == language)
        .map(|(_, piston_name, version)| (*piston_name, *version))
}

#[derive(Debug, Serialize)]
struct ExecuteRequest<'a> {
    language: &'a str,
    version: &'a str,
    files: Vec<ExecuteFile<'a>>,
    stdin: &'a str,
}

#[derive(Debug, Serialize)]
struct ExecuteFile<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ExecuteResponse {
    run: ExecuteRun,
}

#[derive(Debug, Deserialize)]
struct ExecuteRun {
    stdout: String,
    stderr: String,
    code: Option<i32>,
}

/// [`CodeRunner`] backed by the public Piston endpoint.
pub struct PistonClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PistonClient {
    pub fn new() -> Self {
        Self::with_endpoint(PISTON_API_URL.to_string())
    }

    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl Default for PistonClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeRunner for PistonClient {
    async fn run(&self, language: &str, source_code: &str, stdin: &str) -> AppResult<RunOutcome> {
        let (piston_name, version) = piston_language(language)
            .ok_or_else(|| AppError::validation(format!("Unsupported language: {}", language)))?;

        let request = ExecuteRequest {
            language: piston_name,
            version,
            files: vec![ExecuteFile {
                content: source_code,
            }],
            stdin,
        };

        tracing::debug!(language = piston_name, version, "Dispatching code to Piston");

        let response: ExecuteResponse = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(RunOutcome {
            stdout: response.run.stdout,
            stderr: response.run.stderr,
            exit_code: response.run.code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages_resolve() {
        assert_eq!(piston_language("python"), Some(("python", "3.10.0")));
        assert_eq!(piston_language("cpp"), Some(("c++", "10.2.0")));
    }

    #[test]
    fn test_unknown_language_is_none() {
        assert_eq!(piston_language("cobol"), None);
    }

    #[test]
    fn test_outcome_success_requires_zero_exit() {
        let ok = RunOutcome {
            stdout: "42\n".into(),
            stderr: String::new(),
            exit_code: Some(0),
        };
        assert!(ok.succeeded());

        let crashed = RunOutcome {
            stdout: String::new(),
            stderr: "segfault".into(),
            exit_code: Some(139),
        };
        assert!(!crashed.succeeded());

        let killed = RunOutcome {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
        };
        assert!(!killed.succeeded());
    }
}
