/// A generated word problem.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Problem {
    /// The question shown first.
    pub prompt: String,
    /// The answer revealed afterwards.
    pub answer: String,
    /// Instructions for working the problem on the E6B.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps:  Vec<String>,
}

impl Problem {
    #[must_use]
    pub fn new(prompt: String, answer: String, steps: Vec<String>) -> Self {
        Self { prompt, answer, steps }
    }

    /// Whether every part of the problem has text.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.prompt.is_empty()
            && !self.answer.is_empty()
            && !self.steps.is_empty()
            && self.steps.iter().all(|step| !step.is_empty())
    }
}
