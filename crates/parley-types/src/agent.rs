//! Agent persona types for Parley.
//!
//! An `Agent` rewrites outgoing messages through a prompt template with
//! named `{placeholder}` fields. `{{` and `}}` produce literal braces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A named persona with a prompt template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: Uuid,
    time_created: DateTime<Utc>,
    pub name: String,
    pub prompt_template: String,
}

/// One parsed piece of a prompt template.
#[derive(Debug, PartialEq, Eq)]
enum Segment<'t> {
    Literal(&'t str),
    Brace(char),
    Placeholder(&'t str),
}

impl Agent {
    pub fn new(name: impl Into<String>, prompt_template: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            time_created: Utc::now(),
            name: name.into(),
            prompt_template: prompt_template.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn time_created(&self) -> DateTime<Utc> {
        self.time_created
    }

    /// Render the template, substituting each `{key}` with its value.
    ///
    /// Values for keys the template does not mention are ignored. A key the
    /// template mentions but `values` lacks is an error.
    pub fn generate_prompt(&self, values: &[(&str, &str)]) -> Result<String, ValidationError> {
        let segments = parse_template(&self.prompt_template)?;
        let mut rendered = String::with_capacity(self.prompt_template.len());

        for segment in segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Brace(c) => rendered.push(c),
                Segment::Placeholder(key) => {
                    let value = values
                        .iter()
                        .find(|(k, _)| *k == key)
                        .map(|(_, v)| *v)
                        .ok_or_else(|| ValidationError::MissingPlaceholder(key.to_string()))?;
                    rendered.push_str(value);
                }
            }
        }

        Ok(rendered)
    }

    /// Placeholder names referenced by the template, in order of first use.
    pub fn placeholders(&self) -> Result<Vec<String>, ValidationError> {
        let mut names: Vec<String> = Vec::new();
        for segment in parse_template(&self.prompt_template)? {
            if let Segment::Placeholder(key) = segment {
                if !names.iter().any(|n| n == key) {
                    names.push(key.to_string());
                }
            }
        }
        Ok(names)
    }
}

fn parse_template(template: &str) -> Result<Vec<Segment<'_>>, ValidationError> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        if pos > 0 {
            segments.push(Segment::Literal(&rest[..pos]));
        }
        let brace = rest.as_bytes()[pos] as char;
        let after = &rest[pos + 1..];

        // Doubled braces are escapes.
        if after.starts_with(brace) {
            segments.push(Segment::Brace(brace));
            rest = &after[1..];
            continue;
        }

        if brace == '}' {
            return Err(ValidationError::MalformedTemplate(
                "single '}' encountered".to_string(),
            ));
        }

        let end = after.find(['{', '}']).ok_or_else(|| {
            ValidationError::MalformedTemplate("unclosed '{' in template".to_string())
        })?;
        if after.as_bytes()[end] == b'{' {
            return Err(ValidationError::MalformedTemplate(
                "unexpected '{' in field name".to_string(),
            ));
        }

        let key = &after[..end];
        if key.is_empty() {
            return Err(ValidationError::MalformedTemplate(
                "placeholders must be named".to_string(),
            ));
        }
        segments.push(Segment::Placeholder(key));
        rest = &after[end + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_prompt_substitutes_placeholder() {
        let agent = Agent::new("greeter", "Hello {name}");
        assert_eq!(agent.generate_prompt(&[("name", "Bot")]).unwrap(), "Hello Bot");
    }

    #[test]
    fn test_generate_prompt_missing_value() {
        let agent = Agent::new("greeter", "Hello {name}");
        let err = agent.generate_prompt(&[]).unwrap_err();
        assert_eq!(err, ValidationError::MissingPlaceholder("name".to_string()));
    }

    #[test]
    fn test_generate_prompt_ignores_extra_values() {
        let agent = Agent::new("plain", "No fields here");
        let rendered = agent.generate_prompt(&[("content", "ignored")]).unwrap();
        assert_eq!(rendered, "No fields here");
    }

    #[test]
    fn test_generate_prompt_repeated_and_multiple_fields() {
        let agent = Agent::new(
            "relay",
            "{self_name} to {target_name}: {content} (from {self_name})",
        );
        let rendered = agent
            .generate_prompt(&[
                ("content", "status?"),
                ("self_name", "Scout"),
                ("target_name", "Base"),
            ])
            .unwrap();
        assert_eq!(rendered, "Scout to Base: status? (from Scout)");
    }

    #[test]
    fn test_generate_prompt_escaped_braces() {
        let agent = Agent::new("json", "{{\"text\": \"{content}\"}}");
        let rendered = agent.generate_prompt(&[("content", "hi")]).unwrap();
        assert_eq!(rendered, "{\"text\": \"hi\"}");
    }

    #[test]
    fn test_generate_prompt_value_braces_are_not_reparsed() {
        let agent = Agent::new("echo", "{content}");
        let rendered = agent.generate_prompt(&[("content", "{name}")]).unwrap();
        assert_eq!(rendered, "{name}");
    }

    #[test]
    fn test_malformed_templates() {
        for template in ["Hello {name", "Hello }", "Hello {}", "a {b{c}}"] {
            let agent = Agent::new("broken", template);
            assert!(
                matches!(
                    agent.generate_prompt(&[("name", "x")]),
                    Err(ValidationError::MalformedTemplate(_))
                ),
                "expected malformed error for {template:?}"
            );
        }
    }

    #[test]
    fn test_placeholders_in_first_use_order() {
        let agent = Agent::new("relay", "{b} {a} {b} {{c}}");
        assert_eq!(agent.placeholders().unwrap(), vec!["b", "a"]);
    }

    #[test]
    fn test_agent_serialize() {
        let agent = Agent::new("Luna", "As {self_name}: {content}");
        let json = serde_json::to_value(&agent).unwrap();
        assert_eq!(json["name"], "Luna");
        assert_eq!(json["prompt_template"], "As {self_name}: {content}");
        assert!(json.get("id").is_some());
    }
}
