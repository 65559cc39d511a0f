//! Weighted fields and keyword matching / 加权字段与关键词匹配

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::script::variants;
use crate::config::WeightConfig;
use crate::models::ToolRecord;

/// Searchable field of a tool record / 可搜索字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Tags,
    InstructionWhat,
    Description,
    InstructionWhy,
    InstructionHow,
}

impl Field {
    /// Table order, also the evidence order / 字段顺序
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Tags,
        Field::InstructionWhat,
        Field::Description,
        Field::InstructionWhy,
        Field::InstructionHow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Tags => "Tags",
            Field::InstructionWhat => "Instructions (what)",
            Field::Description => "Description",
            Field::InstructionWhy => "Instructions (why)",
            Field::InstructionHow => "Instructions (how)",
        }
    }

    /// Text of this field matched by `pattern`, if any. For tags this is the first
    /// matching tag.
    pub fn find_match<'a>(self, record: &'a ToolRecord, pattern: &KeywordPattern) -> Option<&'a str> {
        let scalar = match self {
            Field::Name => record.name.as_str(),
            Field::Description => record.description.as_str(),
            Field::InstructionWhat => record.instruction_what(),
            Field::InstructionWhy => record.instruction_why(),
            Field::InstructionHow => record.instruction_how(),
            Field::Tags => {
                return record
                    .tags
                    .iter()
                    .map(String::as_str)
                    .find(|tag| pattern.is_match(tag));
            }
        };
        pattern.is_match(scalar).then_some(scalar)
    }

    pub fn matches(self, record: &ToolRecord, pattern: &KeywordPattern) -> bool {
        self.find_match(record, pattern).is_some()
    }
}

/// One row of the weight table / 权重表条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWeight {
    pub field: Field,
    pub weight: u32,
    pub label: &'static str,
}

/// Read-only weight table / 只读字段权重表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWeights {
    entries: Vec<FieldWeight>,
}

impl FieldWeights {
    pub fn from_config(config: &WeightConfig) -> Self {
        let entries = Field::ALL
            .iter()
            .map(|&field| FieldWeight {
                field,
                weight: match field {
                    Field::Name => config.name,
                    Field::Tags => config.tags,
                    Field::InstructionWhat => config.instruction_what,
                    Field::Description => config.description,
                    Field::InstructionWhy => config.instruction_why,
                    Field::InstructionHow => config.instruction_how,
                },
                label: field.label(),
            })
            .collect();
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldWeight> {
        self.entries.iter()
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self::from_config(&WeightConfig::default())
    }
}

/// Case-insensitive literal pattern for one keyword / 关键词匹配模式
///
/// The keyword is escaped, so user input never becomes pattern syntax. Han characters
/// that are left unconverted (台, 里, 面, …) match any of their traditional forms.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    keyword: String,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Regex(Regex),
    // Oversized keywords that exceed the regex size limit
    Lowercase(String),
}

impl KeywordPattern {
    pub fn new(keyword: &str) -> Self {
        let matcher = match RegexBuilder::new(&pattern_source(keyword))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Matcher::Regex(re),
            Err(e) => {
                tracing::debug!("Keyword pattern fallback for {:?}: {}", keyword, e);
                Matcher::Lowercase(keyword.to_lowercase())
            }
        };
        Self {
            keyword: keyword.to_string(),
            matcher,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn is_match(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match &self.matcher {
            Matcher::Regex(re) => re.is_match(text),
            Matcher::Lowercase(needle) => text.to_lowercase().contains(needle.as_str()),
        }
    }
}

fn pattern_source(keyword: &str) -> String {
    let mut source = String::with_capacity(keyword.len() * 2);
    let mut buf = [0u8; 4];
    for c in keyword.chars() {
        match variants(c) {
            Some(forms) => {
                source.push('[');
                source.extend(forms.iter());
                source.push(']');
            }
            None => source.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    source
}
