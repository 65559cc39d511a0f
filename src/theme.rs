//! Tag statistics and tag color themes / 标签统计与标签主题
//!
//! Themes are assigned by cycling a fixed palette list; the all-tags entry always
//! takes the first palette.

use serde::Serialize;
use std::collections::HashMap;

use crate::catalog::ALL_TAG;
use crate::models::{ToolRecord, AI_TAG};

/// Tag with its usage count / 标签计数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagStatistic {
    pub tag: String,
    pub count: usize,
}

/// Tag statistics over a record set / 标签统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagStats {
    /// Every tag, most used first / 所有标签
    pub all_tags: Vec<TagStatistic>,
    /// All-tags entry, then tags used more than once with single-use tags folded into AI
    /// / 全部 + 合并后的标签（单次出现的标签并入 AI）
    pub merged_tags: Vec<TagStatistic>,
}

/// Count tags (implicit AI tag included), most used first, ties by name.
///
/// `merged_tags` folds single-use tags into the AI count and places AI before the first
/// tag it outnumbers or ties.
pub fn tag_statistics(records: &[ToolRecord]) -> TagStats {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut prompt_tools = 0;
    for record in records {
        for tag in &record.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
        if record.is_prompt_tool() && !record.has_tag(AI_TAG) {
            prompt_tools += 1;
        }
    }
    if prompt_tools > 0 {
        *counts.entry(AI_TAG).or_default() += prompt_tools;
    }

    let mut all_tags: Vec<TagStatistic> = counts
        .into_iter()
        .map(|(tag, count)| TagStatistic {
            tag: tag.to_string(),
            count,
        })
        .collect();
    all_tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));

    let single_use = all_tags.iter().filter(|s| s.count == 1).count();
    let shared_ai = all_tags
        .iter()
        .find(|s| s.tag == AI_TAG && s.count > 1)
        .map_or(0, |s| s.count);
    let ai_count = shared_ai + single_use;

    let mut folded: Vec<TagStatistic> = all_tags
        .iter()
        .filter(|s| s.count > 1 && s.tag != AI_TAG)
        .cloned()
        .collect();
    if ai_count > 0 {
        let at = folded
            .iter()
            .position(|s| s.count <= ai_count)
            .unwrap_or(folded.len());
        folded.insert(
            at,
            TagStatistic {
                tag: AI_TAG.to_string(),
                count: ai_count,
            },
        );
    }

    let mut merged_tags = Vec::with_capacity(folded.len() + 1);
    merged_tags.push(TagStatistic {
        tag: ALL_TAG.to_string(),
        count: records.len(),
    });
    merged_tags.extend(folded);

    TagStats { all_tags, merged_tags }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

/// Color palette (CSS utility classes) / 调色板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
    pub hover: &'static str,
    pub shadow: &'static str,
    pub gradient: Gradient,
}

const fn palette(classes: [&'static str; 7], from: &'static str, to: &'static str) -> Palette {
    Palette {
        primary: classes[0],
        secondary: classes[1],
        accent: classes[2],
        text: classes[3],
        icon: classes[4],
        hover: classes[5],
        shadow: classes[6],
        gradient: Gradient { from, to },
    }
}

pub const PALETTES: [Palette; 7] = [
    palette(
        ["bg-pink-500 bg-opacity-85", "bg-pink-50", "bg-rose-100", "text-pink-500 bg-opacity-85",
         "text-pink-500 bg-opacity-85", "hover:bg-pink-50", "shadow-pink-500/10"],
        "from-pink-500 bg-opacity-85", "to-rose-500",
    ),
    palette(
        ["bg-rose-400 bg-opacity-85", "bg-rose-50", "bg-rose-50", "text-rose-400 bg-opacity-85",
         "text-rose-400 bg-opacity-85", "hover:bg-rose-50", "shadow-rose-400/20"],
        "from-rose-400 bg-opacity-85", "to-rose-300",
    ),
    palette(
        ["bg-amber-500 bg-opacity-75", "bg-amber-50", "bg-yellow-100", "text-amber-500 bg-opacity-85",
         "text-amber-500 bg-opacity-85", "hover:bg-amber-50", "shadow-amber-500/10"],
        "from-amber-500 bg-opacity-85", "to-yellow-500",
    ),
    palette(
        ["bg-emerald-500 bg-opacity-85", "bg-emerald-50", "bg-green-100", "text-emerald-500 bg-opacity-85",
         "text-emerald-500 bg-opacity-85", "hover:bg-emerald-50", "shadow-emerald-500/10"],
        "from-emerald-500 bg-opacity-85", "to-green-500",
    ),
    palette(
        ["bg-sky-400 bg-opacity-85", "bg-sky-50", "bg-sky-100", "text-sky-600 bg-opacity-85",
         "text-sky-600 bg-opacity-85", "hover:bg-sky-50", "shadow-sky-400/20"],
        "from-sky-400 bg-opacity-85", "to-sky-500",
    ),
    palette(
        ["bg-indigo-500 bg-opacity-85", "bg-indigo-50", "bg-indigo-100", "text-indigo-600 bg-opacity-85",
         "text-indigo-600 bg-opacity-85", "hover:bg-indigo-50", "shadow-indigo-300/20"],
        "from-indigo-300 bg-opacity-85", "to-indigo-400",
    ),
    palette(
        ["bg-purple-500 bg-opacity-90", "bg-purple-50", "bg-fuchsia-100", "text-purple-500 bg-opacity-90",
         "text-purple-500 bg-opacity-90", "hover:bg-purple-50", "shadow-purple-500/10"],
        "from-purple-500 bg-opacity-90", "to-fuchsia-500",
    ),
];

/// Tag theme / 标签主题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagTheme {
    pub tag: String,
    #[serde(flatten)]
    pub palette: Palette,
}

/// Palette assignment for tags / 标签主题分配
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    palettes: Vec<Palette>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(PALETTES.to_vec())
    }
}

impl ThemeRegistry {
    /// Falls back to the built-in palettes when given none.
    pub fn new(palettes: Vec<Palette>) -> Self {
        let palettes = if palettes.is_empty() { PALETTES.to_vec() } else { palettes };
        Self { palettes }
    }

    fn palette_at(&self, index: usize) -> Palette {
        self.palettes[index % self.palettes.len()]
    }

    /// Cycle palettes over `tags` in input order / 按顺序循环分配
    pub fn assign(&self, tags: &[String]) -> Vec<TagTheme> {
        tags.iter()
            .enumerate()
            .map(|(i, tag)| TagTheme {
                tag: tag.clone(),
                palette: self.palette_at(i),
            })
            .collect()
    }

    /// All-tags entry, then every tag in statistics order / 完整主题
    pub fn full(&self, records: &[ToolRecord]) -> Vec<TagTheme> {
        let stats = tag_statistics(records);
        let tags: Vec<String> = std::iter::once(ALL_TAG.to_string())
            .chain(stats.all_tags.into_iter().map(|s| s.tag))
            .collect();
        self.assign(&tags)
    }

    /// Merged tags only, single-use tags folded into AI / 精选主题
    pub fn curated(&self, records: &[ToolRecord]) -> Vec<TagTheme> {
        let stats = tag_statistics(records);
        let tags: Vec<String> = stats.merged_tags.into_iter().map(|s| s.tag).collect();
        self.assign(&tags)
    }

    /// Both theme sets / 两套主题
    pub fn themes(&self, records: &[ToolRecord]) -> TagThemes {
        TagThemes {
            merged: self.curated(records),
            full: self.full(records),
        }
    }
}

/// Curated and full themes / 标签主题集合
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagThemes {
    pub merged: Vec<TagTheme>,
    pub full: Vec<TagTheme>,
}
