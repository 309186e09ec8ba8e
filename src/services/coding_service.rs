//! Coding service - practice questions, ad-hoc runs and judged
//! submissions.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};
use crate::infra::entities::{question, submission, test_case};
use crate::infra::piston::{piston_language, CodeRunner, RunOutcome};
use crate::infra::UnitOfWork;

/// A question together with its visible example cases.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionDetail {
    #[serde(flatten)]
    pub question: question::Model,
    pub examples: Vec<test_case::Model>,
}

/// Submission verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    Error,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Accepted => "Accepted",
            Verdict::WrongAnswer => "WrongAnswer",
            Verdict::Error => "Error",
        };
        write!(f, "{}", s)
    }
}

/// Result of judging one submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct JudgeResult {
    pub verdict: Verdict,
    pub cases_passed: usize,
    pub cases_total: usize,
}

/// Coding-platform operations.
#[async_trait]
pub trait CodingService: Send + Sync {
    /// List all questions
    async fn list_questions(&self) -> AppResult<Vec<question::Model>>;

    /// Get a question with its example cases
    async fn get_question(&self, id: i32) -> AppResult<QuestionDetail>;

    /// Run code against arbitrary stdin without judging
    async fn run_code(&self, language: &str, source: &str, stdin: &str) -> AppResult<RunOutcome>;

    /// Judge a submission against every test case (hidden included) and
    /// record it with its verdict
    async fn submit(
        &self,
        user_id: i32,
        question_id: i32,
        language: String,
        source: String,
    ) -> AppResult<(submission::Model, JudgeResult)>;

    /// List the caller's submissions, newest first
    async fn my_submissions(&self, user_id: i32) -> AppResult<Vec<submission::Model>>;
}

/// Compare a run outcome against the expected output. Trailing
/// whitespace on each line and trailing newlines are ignored, as most
/// judges do.
pub fn judge_case(outcome: &RunOutcome, expected: &str) -> Verdict {
    if !outcome.succeeded() {
        return Verdict::Error;
    }

    if normalize_output(&outcome.stdout) == normalize_output(expected) {
        Verdict::Accepted
    } else {
        Verdict::WrongAnswer
    }
}

fn normalize_output(s: &str) -> String {
    s.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Fold per-case verdicts into an overall result. Any Error wins over
/// WrongAnswer; Accepted requires every case to pass.
pub fn overall_verdict(case_verdicts: &[Verdict]) -> JudgeResult {
    let cases_total = case_verdicts.len();
    let cases_passed = case_verdicts
        .iter()
        .filter(|v| **v == Verdict::Accepted)
        .count();

    let verdict = if case_verdicts.contains(&Verdict::Error) {
        Verdict::Error
    } else if cases_passed == cases_total {
        Verdict::Accepted
    } else {
        Verdict::WrongAnswer
    };

    JudgeResult {
        verdict,
        cases_passed,
        cases_total,
    }
}

/// Concrete implementation of CodingService using Unit of Work.
pub struct CodingManager<U: UnitOfWork> {
    uow: Arc<U>,
    runner: Arc<dyn CodeRunner>,
}

impl<U: UnitOfWork> CodingManager<U> {
    pub fn new(uow: Arc<U>, runner: Arc<dyn CodeRunner>) -> Self {
        Self { uow, runner }
    }
}

#[async_trait]
impl<U: UnitOfWork> CodingService for CodingManager<U> {
    async fn list_questions(&self) -> AppResult<Vec<question::Model>> {
        self.uow.coding().list_questions().await
    }

    async fn get_question(&self, id: i32) -> AppResult<QuestionDetail> {
        let question = self
            .uow
            .coding()
            .find_question(id)
            .await?
            .ok_or(AppError::NotFound)?;
        let examples = self.uow.coding().visible_cases(id).await?;

        Ok(QuestionDetail { question, examples })
    }

    async fn run_code(&self, language: &str, source: &str, stdin: &str) -> AppResult<RunOutcome> {
        if piston_language(language).is_none() {
            return Err(AppError::validation(format!(
                "Unsupported language: {}",
                language
            )));
        }

        self.runner.run(language, source, stdin).await
    }

    async fn submit(
        &self,
        user_id: i32,
        question_id: i32,
        language: String,
        source: String,
    ) -> AppResult<(submission::Model, JudgeResult)> {
        self.uow
            .coding()
            .find_question(question_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let cases = self.uow.coding().all_cases(question_id).await?;
        if cases.is_empty() {
            return Err(AppError::validation("Question has no test cases"));
        }

        let mut case_verdicts = Vec::with_capacity(cases.len());
        for case in &cases {
            let outcome = self.runner.run(&language, &source, &case.input).await?;
            case_verdicts.push(judge_case(&outcome, &case.expected_output));
        }

        let result = overall_verdict(&case_verdicts);
        tracing::info!(
            user_id,
            question_id,
            verdict = %result.verdict,
            passed = result.cases_passed,
            total = result.cases_total,
            "Submission judged"
        );

        let recorded = self
            .uow
            .coding()
            .record_submission(
                user_id,
                question_id,
                language,
                source,
                result.verdict.to_string(),
            )
            .await?;

        Ok((recorded, result))
    }

    async fn my_submissions(&self, user_id: i32) -> AppResult<Vec<submission::Model>> {
        self.uow.coding().submissions_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockCodeRunner, MockCodingRepository};
    use crate::services::test_support::StubUow;
    use chrono::Utc;

    fn run_ok(stdout: &str) -> RunOutcome {
        RunOutcome {
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_code: Some(0),
        }
    }

    #[test]
    fn test_judge_ignores_trailing_whitespace() {
        assert_eq!(judge_case(&run_ok("42\n"), "42"), Verdict::Accepted);
        assert_eq!(judge_case(&run_ok("1 2 \n3\n"), "1 2\n3"), Verdict::Accepted);
    }

    #[test]
    fn test_judge_flags_wrong_output() {
        assert_eq!(judge_case(&run_ok("41\n"), "42"), Verdict::WrongAnswer);
    }

    #[test]
    fn test_judge_flags_runtime_failure() {
        let crashed = RunOutcome {
            stdout: String::new(),
            stderr: "Traceback".to_string(),
            exit_code: Some(1),
        };
        assert_eq!(judge_case(&crashed, "42"), Verdict::Error);
    }

    #[test]
    fn test_overall_verdict_requires_all_passing() {
        let result = overall_verdict(&[Verdict::Accepted, Verdict::Accepted]);
        assert_eq!(result.verdict, Verdict::Accepted);
        assert_eq!(result.cases_passed, 2);

        let result = overall_verdict(&[Verdict::Accepted, Verdict::WrongAnswer]);
        assert_eq!(result.verdict, Verdict::WrongAnswer);
        assert_eq!(result.cases_passed, 1);
    }

    #[test]
    fn test_overall_verdict_error_dominates() {
        let result = overall_verdict(&[Verdict::Accepted, Verdict::Error, Verdict::WrongAnswer]);
        assert_eq!(result.verdict, Verdict::Error);
    }

    fn sample_question(id: i32) -> question::Model {
        question::Model {
            id,
            title: "Sum Two Numbers".to_string(),
            description: "Read two integers and print their sum.".to_string(),
            difficulty: "Easy".to_string(),
            created_at: Utc::now(),
        }
    }

    fn case(id: i32, input: &str, expected: &str, hidden: bool) -> test_case::Model {
        test_case::Model {
            id,
            question_id: 1,
            input: input.to_string(),
            expected_output: expected.to_string(),
            is_hidden: hidden,
        }
    }

    #[tokio::test]
    async fn test_submit_judges_hidden_cases_too() {
        let mut coding = MockCodingRepository::new();
        coding
            .expect_find_question()
            .returning(|id| Ok(Some(sample_question(id))));
        coding.expect_all_cases().returning(|_| {
            Ok(vec![
                case(1, "1 2", "3", false),
                case(2, "10 20", "30", true),
            ])
        });
        coding
            .expect_record_submission()
            .withf(|_, _, _, _, verdict| verdict == "Accepted")
            .times(1)
            .returning(|user_id, question_id, language, source_code, verdict| {
                Ok(submission::Model {
                    id: 1,
                    user_id,
                    question_id,
                    language,
                    source_code,
                    verdict,
                    submitted_at: Utc::now(),
                })
            });

        let mut runner = MockCodeRunner::new();
        runner.expect_run().times(2).returning(|_, _, stdin| {
            // A correct solution: add the two stdin numbers
            let sum: i32 = stdin.split_whitespace().map(|n| n.parse::<i32>().unwrap()).sum();
            Ok(run_ok(&format!("{}\n", sum)))
        });

        let uow = Arc::new(StubUow::new().with_coding(coding));
        let service = CodingManager::new(uow, Arc::new(runner));

        let (recorded, result) = service
            .submit(7, 1, "python".to_string(), "print(sum(map(int, input().split())))".to_string())
            .await
            .unwrap();

        assert_eq!(recorded.verdict, "Accepted");
        assert_eq!(result.cases_total, 2);
        assert_eq!(result.cases_passed, 2);
    }

    #[tokio::test]
    async fn test_run_code_rejects_unknown_language() {
        let uow = Arc::new(StubUow::new());
        let service = CodingManager::new(uow, Arc::new(MockCodeRunner::new()));

        let result = service.run_code("brainfuck", "+++", "").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
