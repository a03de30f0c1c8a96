//! Rewrites the generated `<name>_api.go` so the selected operations are served
//! by handlers from external packages.
//!
//! Three shapes are recognised per rule (`op` = from id, `alias.To` = target):
//!
//! | generated                                                        | rewritten                                                                          |
//! |------------------------------------------------------------------|------------------------------------------------------------------------------------|
//! | `opHandler opHandler`                                            | `opHandler alias.ToHandler`                                                        |
//! | `opHandler: opHandlerFunc(func(params opParams) middleware.Responder {` | `opHandler: alias.ToHandlerFunc(func(params alias.ToParams) middleware.Responder {` |
//! | `... = Newop(o.context, o.opHandler)`                            | `... = alias.NewTo(o.context, o.opHandler)`                                        |

use super::{rewrite_source, rewrite_stream, LineRewriter};
use crate::config::Replacement;
use std::io::{Read, Write};

struct ApiPatterns {
    operation: String,
    field_from: String,
    field_to: String,
    func_from: String,
    func_to: String,
    route_from: String,
    route_to: String,
}

impl ApiPatterns {
    fn new(rule: &Replacement) -> Self {
        let op = &rule.from_operation_id;
        let to = &rule.to_operation_id;
        let alias = &rule.to_package_alias;

        Self {
            operation: op.clone(),
            field_from: format!("{op}Handler {op}Handler"),
            field_to: format!("\t{op}Handler {alias}.{to}Handler"),
            func_from: format!(
                "{op}Handler: {op}HandlerFunc(func(params {op}Params) middleware.Responder {{"
            ),
            func_to: format!(
                "\t\t{op}Handler: {alias}.{to}HandlerFunc(func(params {alias}.{to}Params) middleware.Responder {{"
            ),
            route_from: format!("New{op}(o.context, o.{op}Handler)"),
            route_to: format!("{alias}.New{to}(o.context, o.{op}Handler)"),
        }
    }
}

/// Line strategy for the api file.
pub struct ApiRewriter {
    patterns: Vec<ApiPatterns>,
}

impl ApiRewriter {
    /// Precomputes the match patterns for `rules`.
    pub fn new(rules: &[Replacement]) -> Self {
        Self {
            patterns: rules.iter().map(ApiPatterns::new).collect(),
        }
    }
}

impl LineRewriter for ApiRewriter {
    /// Every rule is tried in order against the working copy of the line, so a
    /// later rule sees (and may overwrite) an earlier rule's output.
    fn rewrite_line(&self, line: &str) -> String {
        let mut current = line.to_string();

        for p in &self.patterns {
            if current.trim() == p.field_from {
                log::debug!("{}: rewrote handler field", p.operation);
                current = p.field_to.clone();
            }

            if current.trim() == p.func_from {
                log::debug!("{}: rewrote handler func default", p.operation);
                current = p.func_to.clone();
            }

            if current.contains(&p.route_from) {
                log::debug!("{}: rewrote route registration", p.operation);
                current = current.replace(&p.route_from, &p.route_to);
            }
        }

        current
    }
}

/// Rewrites api-file text.
pub fn rewrite_api(source: &str, rules: &[Replacement]) -> String {
    rewrite_source(source, rules, &ApiRewriter::new(rules))
}

/// Rewrites api-file text from `reader` into `writer`.
pub fn rewrite_api_stream<R: Read, W: Write>(
    reader: R,
    writer: W,
    rules: &[Replacement],
) -> std::io::Result<()> {
    rewrite_stream(reader, writer, rules, &ApiRewriter::new(rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewriter::test_support::{onboarding_rule, rule};
    use pretty_assertions::assert_eq;

    fn line(input: &str, rules: &[Replacement]) -> String {
        ApiRewriter::new(rules).rewrite_line(input)
    }

    #[test]
    fn test_handler_field() {
        assert_eq!(
            line("\tV2OnboardingHandler V2OnboardingHandler", &[onboarding_rule()]),
            "\tV2OnboardingHandler onboarding.OnboardingHandler"
        );
    }

    #[test]
    fn test_handler_field_reindents() {
        assert_eq!(
            line("        V2OnboardingHandler V2OnboardingHandler  ", &[onboarding_rule()]),
            "\tV2OnboardingHandler onboarding.OnboardingHandler"
        );
    }

    #[test]
    fn test_handler_field_with_comment_is_not_exact() {
        let input = "\tV2OnboardingHandler V2OnboardingHandler // docs";
        assert_eq!(line(input, &[onboarding_rule()]), input);
    }

    #[test]
    fn test_handler_func_default() {
        assert_eq!(
            line(
                "\t\tV2OnboardingHandler: V2OnboardingHandlerFunc(func(params V2OnboardingParams) middleware.Responder {",
                &[onboarding_rule()]
            ),
            "\t\tV2OnboardingHandler: onboarding.OnboardingHandlerFunc(func(params onboarding.OnboardingParams) middleware.Responder {"
        );
    }

    #[test]
    fn test_route_registration_preserves_surroundings() {
        assert_eq!(
            line(
                "o.handlers[\"POST\"][\"/api/v2/onboarding\"] = NewV2Onboarding(o.context, o.V2OnboardingHandler)",
                &[onboarding_rule()]
            ),
            "o.handlers[\"POST\"][\"/api/v2/onboarding\"] = onboarding.NewOnboarding(o.context, o.V2OnboardingHandler)"
        );
    }

    #[test]
    fn test_route_registration_keeps_indentation() {
        assert_eq!(
            line(
                "\t\to.handlers[\"GET\"][\"/x\"] = NewV2Onboarding(o.context, o.V2OnboardingHandler)",
                &[onboarding_rule()]
            ),
            "\t\to.handlers[\"GET\"][\"/x\"] = onboarding.NewOnboarding(o.context, o.V2OnboardingHandler)"
        );
    }

    #[test]
    fn test_unrelated_line_is_identical() {
        let input = "\t// ServeError is called when an error is received\r";
        assert_eq!(line(input, &[onboarding_rule()]), input);
    }

    #[test]
    fn test_other_operation_is_untouched() {
        let input = "\tGetUserHandler GetUserHandler";
        assert_eq!(line(input, &[onboarding_rule()]), input);
    }

    #[test]
    fn test_prefix_operation_does_not_match_exact_patterns() {
        // "Onboarding" is a suffix of "V2Onboarding"; exact-line patterns must not fire.
        let rules = [rule("Onboarding", "Other", "other", "app/other")];
        let input = "\tV2OnboardingHandler V2OnboardingHandler";
        assert_eq!(line(input, &rules), input);
    }

    #[test]
    fn test_later_rule_sees_earlier_output() {
        let rules = [
            rule("V2Onboarding", "Staging", "staging", "app/staging"),
            rule("V2Onboarding", "Onboarding", "onboarding", "app/onboarding"),
        ];
        // The first rule rewrites the field; the second no longer matches it.
        assert_eq!(
            line("V2OnboardingHandler V2OnboardingHandler", &rules),
            "\tV2OnboardingHandler staging.StagingHandler"
        );
    }

    #[test]
    fn test_full_file() {
        let source = r#"package operations

import (
	"net/http"

	"github.com/go-openapi/runtime/middleware"
)

func NewShopAPI(spec *loads.Document) *ShopAPI {
	return &ShopAPI{
		V2OnboardingHandler: V2OnboardingHandlerFunc(func(params V2OnboardingParams) middleware.Responder {
			return middleware.NotImplemented("operation V2Onboarding has not yet been implemented")
		}),
	}
}

type ShopAPI struct {
	// V2OnboardingHandler sets the operation handler for the v2 onboarding operation
	V2OnboardingHandler V2OnboardingHandler
}

func (o *ShopAPI) initHandlerCache() {
	o.handlers["POST"]["/api/v2/onboarding"] = NewV2Onboarding(o.context, o.V2OnboardingHandler)
}
"#;

        let expected = r#"package operations

import (
	onboarding "app/onboarding"
	"net/http"

	"github.com/go-openapi/runtime/middleware"
)

func NewShopAPI(spec *loads.Document) *ShopAPI {
	return &ShopAPI{
		V2OnboardingHandler: onboarding.OnboardingHandlerFunc(func(params onboarding.OnboardingParams) middleware.Responder {
			return middleware.NotImplemented("operation V2Onboarding has not yet been implemented")
		}),
	}
}

type ShopAPI struct {
	// V2OnboardingHandler sets the operation handler for the v2 onboarding operation
	V2OnboardingHandler onboarding.OnboardingHandler
}

func (o *ShopAPI) initHandlerCache() {
	o.handlers["POST"]["/api/v2/onboarding"] = onboarding.NewOnboarding(o.context, o.V2OnboardingHandler)
}
"#;

        let rules = [onboarding_rule()];
        let out = rewrite_api(source, &rules);
        assert_eq!(out, expected);
        assert_eq!(out.lines().count(), source.lines().count() + rules.len());
    }

    #[test]
    fn test_second_pass_only_adds_imports() {
        let rules = [onboarding_rule()];
        let source = "type ShopAPI struct {\n\tV2OnboardingHandler V2OnboardingHandler\n}\n\
                      o.handlers[\"POST\"][\"/\"] = NewV2Onboarding(o.context, o.V2OnboardingHandler)\n";

        let once = rewrite_api(source, &rules);
        let twice = rewrite_api(&once, &rules);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_stream() {
        let mut out = Vec::new();
        rewrite_api_stream(
            "\tV2OnboardingHandler V2OnboardingHandler".as_bytes(),
            &mut out,
            &[onboarding_rule()],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\tV2OnboardingHandler onboarding.OnboardingHandler\n"
        );
    }
}
