use super::Category;

/// Remediation guidance per vulnerability category.
///
/// Total over `Category`: adding a variant without a template is a
/// compile error, so remediation lookups never fall back to a generic
/// string.
pub fn remediation(category: Category) -> &'static str {
    match category {
        Category::CredentialExposure => {
            "Move the key into an environment variable or a secrets manager and \
             load it at runtime (e.g. os.environ / process.env). Rotate any key \
             that has been committed."
        }
        Category::PromptInjection => {
            "Never interpolate raw user input into a prompt. Sanitize and \
             length-limit the input, or pass it as structured data separate \
             from the instruction text."
        }
        Category::UnsanitizedInput => {
            "Validate and sanitize user-supplied text before it reaches the \
             model: strip known injection phrases, enforce a length limit, and \
             reject unexpected control characters."
        }
        Category::HardcodedPrompt => {
            "Externalize system prompts into configuration or versioned prompt \
             files so they can be reviewed and updated without code changes."
        }
        Category::UnvalidatedOutput => {
            "Treat model output as untrusted input: validate structure and \
             content before using it, and never feed it directly into \
             interpreters, shells, or SQL."
        }
        Category::InsecureRetrievalQuery => {
            "Sanitize user input before it is used in a retrieval or vector \
             query, and constrain queries to an allowlisted scope."
        }
        Category::PiiLeakage => {
            "Do not log personally identifiable information. Redact or hash \
             sensitive fields before they reach any log sink."
        }
        Category::InsecureDynamicExecution => {
            "Avoid eval/exec-style primitives on data influenced by users or \
             models. Dispatch through an explicit allowlist of named \
             operations instead."
        }
        Category::TokenExposure => {
            "Keep credentials out of responses, error messages, and debug \
             payloads. Return opaque error identifiers and log details \
             server-side with redaction."
        }
        Category::MissingRateLimiting => {
            "Wrap model API calls in a rate limiter or token budget so a \
             single caller cannot exhaust quota or run up cost."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_guidance() {
        let all = [
            Category::CredentialExposure,
            Category::PromptInjection,
            Category::UnsanitizedInput,
            Category::HardcodedPrompt,
            Category::UnvalidatedOutput,
            Category::InsecureRetrievalQuery,
            Category::PiiLeakage,
            Category::InsecureDynamicExecution,
            Category::TokenExposure,
            Category::MissingRateLimiting,
        ];
        for c in all {
            assert!(!remediation(c).is_empty());
        }
    }
}
