use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::AssistantError;
use crate::rules;

/// A set of trigger substrings mapped to one fixed reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keywords: Vec<String>,
    pub response: String,
}

impl KeywordRule {
    /// `normalized` must already be lowercase.
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// Externally supplied rule table and tips.
///
/// ```json
/// {
///   "rules": [{ "keywords": ["sleep"], "response": "..." }],
///   "tips": ["Drink water."],
///   "fallback": "optional"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    pub rules: Vec<KeywordRule>,
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// Read a [`ResponderConfig`] from a JSON file.
pub fn load_responder_config(path: &Path) -> Result<ResponderConfig, AssistantError> {
    let contents = std::fs::read_to_string(path).map_err(|source| AssistantError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ResponderConfig = serde_json::from_str(&contents)?;
    Ok(config)
}

/// Maps free text to a reply: a random tip for the literal `tip`, otherwise
/// the first matching keyword rule, otherwise a fixed fallback.
///
/// Holds no per-call state. The tip list is never empty.
#[derive(Debug, Clone)]
pub struct TopicResponder {
    rules: Vec<KeywordRule>,
    tips: Vec<String>,
    fallback: String,
}

impl Default for TopicResponder {
    fn default() -> Self {
        Self {
            rules: rules::RULES
                .iter()
                .map(|(keywords, response)| KeywordRule {
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                    response: response.to_string(),
                })
                .collect(),
            tips: rules::TIPS.iter().map(|t| t.to_string()).collect(),
            fallback: rules::FALLBACK.to_string(),
        }
    }
}

impl TopicResponder {
    /// Build a responder from external configuration. Keywords are
    /// lowercased so matching stays case-insensitive.
    pub fn from_config(config: ResponderConfig) -> Result<Self, AssistantError> {
        if config.tips.is_empty() {
            return Err(AssistantError::EmptyTipList);
        }

        let mut table = Vec::with_capacity(config.rules.len());
        for (index, rule) in config.rules.into_iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(AssistantError::RuleWithoutKeywords { index });
            }
            if rule.keywords.iter().any(|k| k.is_empty()) {
                return Err(AssistantError::EmptyKeyword { index });
            }
            table.push(KeywordRule {
                keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
                response: rule.response,
            });
        }

        tracing::debug!(rules = table.len(), tips = config.tips.len(), "responder configured");

        Ok(Self {
            rules: table,
            tips: config.tips,
            fallback: config.fallback.unwrap_or_else(|| rules::FALLBACK.to_string()),
        })
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Reply to `text` using the thread-local RNG for tip selection.
    pub fn classify(&self, text: &str) -> &str {
        self.classify_with_rng(text, &mut rand::rng())
    }

    pub fn classify_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> &str {
        let normalized = text.to_lowercase();

        if normalized == rules::TIP_TOKEN {
            return self.random_tip(rng);
        }

        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.response.as_str())
            .unwrap_or(self.fallback.as_str())
    }

    /// A uniformly chosen tip.
    pub fn random_tip<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.tips
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(self.fallback.as_str())
    }
}
