use serde::{Deserialize, Serialize};

/// Tag carried by every prompt tool / 提示词工具的默认标签
pub const AI_TAG: &str = "AI";

/// Tool usage instructions / 工具使用说明
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instructions {
    #[serde(default)]
    pub what: String,
    #[serde(default)]
    pub why: String,
    #[serde(default)]
    pub how: String,
}

/// Catalog tool record / 工具目录条目
///
/// `id` is unique across the catalog. Missing instructions behave as empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Instructions>,
    /// Custom component; prompt tools have none / 自定义组件
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "default_active", alias = "isActive")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl ToolRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            instructions: None,
            component_id: None,
            category: None,
            active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instructions(
        mut self,
        what: impl Into<String>,
        why: impl Into<String>,
        how: impl Into<String>,
    ) -> Self {
        self.instructions = Some(Instructions {
            what: what.into(),
            why: why.into(),
            how: how.into(),
        });
        self
    }

    pub fn with_component(mut self, component_id: impl Into<String>) -> Self {
        self.component_id = Some(component_id.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn instruction_what(&self) -> &str {
        self.instructions.as_ref().map(|i| i.what.as_str()).unwrap_or("")
    }

    pub fn instruction_why(&self) -> &str {
        self.instructions.as_ref().map(|i| i.why.as_str()).unwrap_or("")
    }

    pub fn instruction_how(&self) -> &str {
        self.instructions.as_ref().map(|i| i.how.as_str()).unwrap_or("")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Prompt tools are rendered by the generic template / 通用提示词模板渲染的工具
    pub fn is_prompt_tool(&self) -> bool {
        self.component_id.as_deref().map_or(true, str::is_empty)
    }

    /// Add the implicit `AI` tag to prompt tools / 为提示词工具补上 AI 标签
    pub fn with_implicit_tags(mut self) -> Self {
        if self.is_prompt_tool() && !self.has_tag(AI_TAG) {
            self.tags.push(AI_TAG.to_string());
        }
        self
    }
}

/// Partial update of a tool; absent fields keep their value / 工具部分更新
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub instructions: Option<Instructions>,
    pub component_id: Option<String>,
    pub category: Option<String>,
}

impl ToolUpdate {
    pub fn apply(self, record: &mut ToolRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(tags) = self.tags {
            record.tags = tags;
        }
        if let Some(instructions) = self.instructions {
            record.instructions = Some(instructions);
        }
        // empty string clears the component, turning the tool into a prompt tool
        if let Some(component_id) = self.component_id {
            record.component_id = Some(component_id).filter(|c| !c.is_empty());
        }
        if let Some(category) = self.category {
            record.category = Some(category).filter(|c| !c.is_empty());
        }
    }
}
