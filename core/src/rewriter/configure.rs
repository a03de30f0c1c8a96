//! Rewrites the generated `configure_<name>.go`, where handlers are assigned
//! through the operations package qualifier:
//!
//! ```text
//! api.V2OnboardingHandler = operations.V2OnboardingHandlerFunc(func(params operations.V2OnboardingParams) middleware.Responder {
//! api.V2OnboardingHandler = onboarding.OnboardingHandlerFunc(func(params onboarding.OnboardingParams) middleware.Responder {
//! ```

use super::{rewrite_source, rewrite_stream, LineRewriter};
use crate::config::Replacement;
use std::io::{Read, Write};

struct AssignmentPattern {
    operation: String,
    marker: String,
    qualified_from: String,
    qualified_to: String,
}

/// Line strategy for the configure file.
pub struct ConfigureRewriter {
    patterns: Vec<AssignmentPattern>,
}

impl ConfigureRewriter {
    /// Precomputes the match patterns for `rules` under the `api_package` qualifier.
    pub fn new(rules: &[Replacement], api_package: &str) -> Self {
        let patterns = rules
            .iter()
            .map(|rule| {
                let op = &rule.from_operation_id;
                AssignmentPattern {
                    operation: op.clone(),
                    marker: format!("api.{op}Handler = {api_package}.{op}HandlerFunc"),
                    qualified_from: format!("{api_package}.{op}"),
                    qualified_to: format!(
                        "{}.{}",
                        rule.to_package_alias, rule.to_operation_id
                    ),
                }
            })
            .collect();

        Self { patterns }
    }
}

impl LineRewriter for ConfigureRewriter {
    fn rewrite_line(&self, line: &str) -> String {
        let mut current = line.to_string();

        for p in &self.patterns {
            if current.contains(&p.marker) {
                log::debug!("{}: rewrote handler assignment", p.operation);
                current = current.replace(&p.qualified_from, &p.qualified_to);
            }
        }

        current
    }
}

/// Rewrites configure-file text.
pub fn rewrite_configure(source: &str, rules: &[Replacement], api_package: &str) -> String {
    rewrite_source(source, rules, &ConfigureRewriter::new(rules, api_package))
}

/// Rewrites configure-file text from `reader` into `writer`.
pub fn rewrite_configure_stream<R: Read, W: Write>(
    reader: R,
    writer: W,
    rules: &[Replacement],
    api_package: &str,
) -> std::io::Result<()> {
    rewrite_stream(
        reader,
        writer,
        rules,
        &ConfigureRewriter::new(rules, api_package),
    )
}
