//! The built-in detection rule set.
//!
//! Every rule here matches on lexical shape: string prefixes, naming
//! fragments like "user" or "input", calls to known-dangerous
//! primitives. The scanner trades a nonzero false-positive and
//! false-negative rate for having no language parsers at all. Do not
//! add semantic analysis here.
//!
//! Rule codes are a stable public contract. External documentation and
//! remediation tooling key off them; renaming a code is a breaking
//! change.

use super::RuleSpec;
use crate::lang::Language;
use crate::rules::{Category, Severity};

const ALL: &[Language] = &[
    Language::Python,
    Language::JavaScript,
    Language::TypeScript,
    Language::JavaScriptReact,
    Language::TypeScriptReact,
];

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec {
        code: "BST001",
        name: "OpenAI API Key Exposure",
        category: Category::CredentialExposure,
        severity: Severity::Error,
        message: "Hardcoded OpenAI API key detected",
        patterns: &[
            r#"["']sk-proj-[A-Za-z0-9_-]{16,}["']"#,
            r#"["']sk-[A-Za-z0-9]{32,}["']"#,
        ],
        languages: ALL,
        framework: Some("openai"),
    },
    RuleSpec {
        code: "BST002",
        name: "Anthropic API Key Exposure",
        category: Category::CredentialExposure,
        severity: Severity::Error,
        message: "Hardcoded Anthropic API key detected",
        patterns: &[r#"["']sk-ant-[A-Za-z0-9_-]{16,}["']"#],
        languages: ALL,
        framework: Some("anthropic"),
    },
    RuleSpec {
        code: "BST003",
        name: "Azure OpenAI Key Exposure",
        category: Category::CredentialExposure,
        severity: Severity::Error,
        message: "Hardcoded Azure OpenAI key detected",
        patterns: &[r#"(?i)azure\w*["']?\s*[:=]\s*["'][A-Za-z0-9]{32}["']"#],
        languages: ALL,
        framework: Some("azure"),
    },
    RuleSpec {
        code: "BST010",
        name: "Prompt Injection",
        category: Category::PromptInjection,
        severity: Severity::Error,
        message: "User input interpolated directly into a prompt",
        patterns: &[
            // f-string interpolation of a user-ish identifier
            r#"(?i)f["'][^"'\n]*\{[^}\n]*(?:user|input|request|query|message)[^}\n]*\}"#,
            // template literal interpolation of a user-ish identifier
            r#"(?i)`[^`\n]*\$\{[^}\n]*(?:user|input|request|query|message)[^}\n]*\}"#,
            // string literal concatenated with a user-ish identifier
            r#"(?i)["'][^"'\n]*["']\s*\+\s*\w*(?:user|input|message)\w*"#,
        ],
        languages: ALL,
        framework: None,
    },
    RuleSpec {
        code: "BST011",
        name: "Unsanitized Model Input",
        category: Category::UnsanitizedInput,
        severity: Severity::Warning,
        message: "User input passed to the model without sanitization",
        patterns: &[
            r#"(?i)\.format\(\s*\w*(?:user|input|message|query)\w*"#,
            r#"(?i)["']content["']\s*:\s*\w*(?:user|input|message)\w*"#,
            r#"input\(\s*["']"#,
        ],
        languages: ALL,
        framework: None,
    },
    RuleSpec {
        code: "BST020",
        name: "Hardcoded System Prompt",
        category: Category::HardcodedPrompt,
        severity: Severity::Warning,
        message: "Hardcoded system prompt; externalize prompt content",
        patterns: &[
            r#"(?i)system_?(?:prompt|instruction|message)\w*\s*[:=]\s*f?["'`]"#,
            r#"["']role["']\s*:\s*["']system["']"#,
        ],
        languages: ALL,
        framework: None,
    },
    RuleSpec {
        code: "BST030",
        name: "Unvalidated Model Output",
        category: Category::UnvalidatedOutput,
        severity: Severity::Warning,
        message: "Model output used without validation",
        patterns: &[
            r#"\.choices\[\s*0\s*\]\.(?:message\.content|text)"#,
            r#"(?i)\b(?:llm|model)\.predict\("#,
        ],
        languages: ALL,
        framework: None,
    },
    RuleSpec {
        code: "BST040",
        name: "Insecure Retrieval Query",
        category: Category::InsecureRetrievalQuery,
        severity: Severity::Warning,
        message: "Unsanitized input used in a retrieval or vector query",
        patterns: &[
            r#"(?i)similarity_search\(\s*\w*(?:user|input|query)\w*"#,
            r#"(?i)query_texts\s*=\s*\[?\s*\w*(?:user|input|query)\w*"#,
            r#"(?i)Embedding\.create\(\s*input\s*=\s*\w*(?:user|input|query)\w*"#,
        ],
        languages: ALL,
        framework: None,
    },
    RuleSpec {
        code: "BST050",
        name: "PII Leakage",
        category: Category::PiiLeakage,
        severity: Severity::Error,
        message: "Personally identifiable information written to a log sink",
        patterns: &[
            r#"(?i)(?:print|console\.(?:log|info|warn|error)|logger\.\w+|logging\.\w+|log\.\w+)\s*\([^)\n]*(?:ssn|social_security|credit_?card|passport|password|date_of_birth|email)"#,
        ],
        languages: ALL,
        framework: None,
    },
    RuleSpec {
        code: "BST060",
        name: "Insecure Dynamic Execution",
        category: Category::InsecureDynamicExecution,
        severity: Severity::Error,
        message: "Dynamic execution primitive reachable from model or user data",
        patterns: &[
            r#"\beval\s*\("#,
            r#"\bexec\s*\("#,
            r#"os\.system\s*\("#,
            r#"subprocess\.(?:run|call|Popen|check_output)\s*\("#,
            r#"new\s+Function\s*\("#,
            r#"globals\(\)\s*\["#,
        ],
        languages: ALL,
        framework: None,
    },
    RuleSpec {
        code: "BST070",
        name: "Credential Exposure in Output",
        category: Category::TokenExposure,
        severity: Severity::Error,
        message: "Credential or token exposed in a response or error message",
        patterns: &[
            r#"(?i)f["'][^"'\n]*\{[^}\n]*(?:api_?key|token|secret)[^}\n]*\}"#,
            r#"(?i)`[^`\n]*\$\{[^}\n]*(?:api_?key|token|secret)[^}\n]*\}"#,
            r#"(?i)["'](?:token|secret|api_?key)["']\s*:\s*\w"#,
        ],
        languages: ALL,
        framework: None,
    },
    RuleSpec {
        code: "BST080",
        name: "Missing Rate Limiting",
        category: Category::MissingRateLimiting,
        severity: Severity::Warning,
        message: "Model API call inside a loop with no rate limiting",
        patterns: &[
            r#"(?i)\b(?:for|while)\b[^#\n]*(?:ChatCompletion\.create|chat\.completions\.create|messages\.create|completions\.create)"#,
            r#"(?i)\.map\s*\(\s*[^)\n]*(?:ChatCompletion\.create|chat\.completions\.create|messages\.create)"#,
        ],
        languages: ALL,
        framework: None,
    },
];
