//! 语料文件加载（TOML）
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::corpus;
use crate::options::CompactOptions;
use crate::types::AffixPair;

/// 顶层语料文件结构（字段均可省略，缺省回退内置语料）
#[derive(Debug, Clone, Default, Deserialize)]
struct CorpusFile {
    #[serde(default)]
    max_length: Option<usize>,
    #[serde(default)]
    max_group_size: Option<usize>,
    #[serde(default)]
    large_body: Option<Vec<String>>,
    #[serde(default)]
    no_user_agent: Option<Vec<String>>,
    #[serde(default)]
    affixes: Option<Vec<AffixPair>>,
}

/// 归一化后的语料（文件值优先，内置缺省兜底）
#[derive(Debug, Clone)]
pub struct Corpus {
    pub options: CompactOptions,
    pub large_body: Vec<String>,
    pub no_user_agent: Vec<String>,
    pub affixes: Vec<AffixPair>,
}

impl Default for Corpus {
    fn default() -> Self {
        normalize(CorpusFile::default())
    }
}

/// 从 TOML 语料文件加载并与内置缺省合并
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let txt = std::fs::read_to_string(path)
        .with_context(|| format!("read corpus file: {}", path.display()))?;
    parse_corpus(&txt).with_context(|| format!("parse corpus file: {}", path.display()))
}

pub(crate) fn parse_corpus(txt: &str) -> Result<Corpus> {
    let parsed: CorpusFile = toml::from_str(txt)?;
    Ok(normalize(parsed))
}

fn normalize(file: CorpusFile) -> Corpus {
    let defaults = CompactOptions::default();
    Corpus {
        options: CompactOptions {
            max_length: file.max_length.unwrap_or(defaults.max_length),
            max_group_size: file.max_group_size.unwrap_or(defaults.max_group_size),
        },
        large_body: file.large_body.unwrap_or_else(|| {
            corpus::LARGE_BODY_PATHS.iter().map(|s| s.to_string()).collect()
        }),
        no_user_agent: file.no_user_agent.unwrap_or_else(|| {
            corpus::NO_USER_AGENT_PATHS.iter().map(|s| s.to_string()).collect()
        }),
        affixes: file.affixes.unwrap_or_else(corpus::compactible_affixes),
    }
}
