use thiserror::Error;

use crate::completion::{AnalysisError, CompletionProvider};

/// Master prompt guiding the analysis. The Markdown section headers it
/// demands are a versioned contract with the front end, which renders the
/// response verbatim; do not reword them.
pub const PROMPT_TEMPLATE: &str = r#"
You are an expert ATS (Applicant Tracking System) and a highly experienced senior career coach.
Your goal is to provide a detailed, constructive analysis of a resume against a job description.

Analyze the following resume and job description. Provide your analysis in the structured Markdown format specified below.

**Resume Text:**
{resume_text}

**Job Description:**
{job_description}

---

**Required Output Format (Strictly follow this Markdown structure):**

## Match Score: [Provide a percentage]%

## Analysis:
[Provide a 2-3 sentence expert summary of the candidate's fit for the role, highlighting key strengths and weaknesses.]

## Matched Keywords & Strengths:
- [List the key skills and experiences from the resume that align perfectly with the job description.]
- [Another matched keyword or strength.]
- [...]

## Missing Keywords & Gaps:
- [List the crucial keywords and qualifications from the job description that are missing or not emphasized in the resume.]
- [Another missing keyword or gap.]
- [...]

## Actionable Suggestions:
1. **[Suggestion 1]:** [Provide a specific, actionable recommendation. For example: "Incorporate the keyword 'Agile Methodologies' into your project descriptions to better align with the job's requirements."]
2. **[Suggestion 2]:** [Another specific recommendation.]
3. **[Suggestion 3]:** [...]
"#;

const RESUME_PLACEHOLDER: &str = "{resume_text}";
const JOB_PLACEHOLDER: &str = "{job_description}";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No resume file was uploaded")]
    MissingResume,

    #[error("The uploaded resume contains no text")]
    EmptyResume,

    #[error("Please paste a job description before analyzing")]
    MissingJobDescription,
}

/// The two inputs of one analysis. Construction enforces that both are
/// non-empty, so a request that reaches the pipeline is always submittable.
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: String,
}

impl AnalysisRequest {
    pub fn new(resume_text: String, job_description: String) -> Result<Self, ValidationError> {
        if resume_text.trim().is_empty() {
            return Err(ValidationError::EmptyResume);
        }
        if job_description.trim().is_empty() {
            return Err(ValidationError::MissingJobDescription);
        }
        Ok(Self {
            resume_text,
            job_description,
        })
    }
}

/// Substitutes the request fields into the prompt template. Plain string
/// replacement, no escaping of the interpolated text.
pub fn render_prompt(request: &AnalysisRequest) -> String {
    PROMPT_TEMPLATE
        .replace(RESUME_PLACEHOLDER, &request.resume_text)
        .replace(JOB_PLACEHOLDER, &request.job_description)
}

/// Renders the prompt and submits it to the provider in a single turn,
/// returning the raw text response unmodified. No retries, no validation of
/// the response's section structure.
pub struct AnalysisPipeline {
    provider: Box<dyn CompletionProvider + Send + Sync>,
}

impl AnalysisPipeline {
    pub fn new(provider: impl CompletionProvider + Send + Sync + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<String, AnalysisError> {
        let prompt = render_prompt(request);
        self.provider.complete(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    const REPORT: &str = "## Match Score: 75%\n\n## Analysis:\nSolid backend fit.";

    struct StubProvider {
        seen_prompt: Arc<Mutex<Option<String>>>,
    }

    impl StubProvider {
        fn new() -> (Self, Arc<Mutex<Option<String>>>) {
            let seen = Arc::new(Mutex::new(None));
            (
                Self {
                    seen_prompt: Arc::clone(&seen),
                },
                seen,
            )
        }
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        async fn complete(&self, prompt: &str) -> Result<String, AnalysisError> {
            *self.seen_prompt.lock().unwrap() = Some(prompt.to_string());
            Ok(REPORT.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CompletionProvider for FailingProvider {
        async fn complete(&self, _prompt: &str) -> Result<String, AnalysisError> {
            Err(AnalysisError::Network("connection timed out".to_string()))
        }
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest::new(
            "Python, Go, 5 years backend".to_string(),
            "Looking for a backend engineer skilled in Go and Kubernetes".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn rendering_is_pure_and_idempotent() {
        let req = request();
        assert_eq!(render_prompt(&req), render_prompt(&req));
    }

    #[test]
    fn rendering_substitutes_both_placeholders() {
        let prompt = render_prompt(&request());

        assert!(prompt.contains("Python, Go, 5 years backend"));
        assert!(prompt.contains("Looking for a backend engineer skilled in Go and Kubernetes"));
        assert!(!prompt.contains(RESUME_PLACEHOLDER));
        assert!(!prompt.contains(JOB_PLACEHOLDER));
    }

    #[test]
    fn template_keeps_the_required_section_headers() {
        for header in [
            "## Match Score:",
            "## Analysis:",
            "## Matched Keywords & Strengths:",
            "## Missing Keywords & Gaps:",
            "## Actionable Suggestions:",
        ] {
            assert!(PROMPT_TEMPLATE.contains(header), "missing header {}", header);
        }
    }

    #[test]
    fn empty_resume_is_rejected() {
        let result = AnalysisRequest::new("  \n".to_string(), "a job".to_string());
        assert_eq!(result.err(), Some(ValidationError::EmptyResume));
    }

    #[test]
    fn empty_job_description_is_rejected() {
        let result = AnalysisRequest::new("a resume".to_string(), String::new());
        assert_eq!(result.err(), Some(ValidationError::MissingJobDescription));
    }

    #[tokio::test]
    async fn pipeline_sends_rendered_prompt_and_returns_response_verbatim() {
        let (provider, seen) = StubProvider::new();
        let pipeline = AnalysisPipeline::new(provider);

        let report = pipeline.analyze(&request()).await.unwrap();

        assert_eq!(report, REPORT);
        let prompt = seen.lock().unwrap().clone().expect("provider never invoked");
        assert!(prompt.contains("Python, Go, 5 years backend"));
        assert!(prompt.contains("Looking for a backend engineer skilled in Go and Kubernetes"));
        assert_eq!(prompt, render_prompt(&request()));
    }

    #[tokio::test]
    async fn pipeline_surfaces_provider_failure_detail() {
        let pipeline = AnalysisPipeline::new(FailingProvider);

        let err = pipeline.analyze(&request()).await.unwrap_err();

        assert!(err.to_string().contains("connection timed out"));
    }
}
