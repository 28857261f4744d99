//! 公共类型与计划输出（对外暴露）
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// 可压缩的前后缀对：模式须同时以 prefix 开头、以 suffix 结尾才可归入该桶
///
/// prefix/suffix 必须是字面量安全的正则片段；包裹形式 `prefix(a|b)suffix`
/// 与 `prefix a suffix|prefix b suffix` 的语义等价依赖这一点。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AffixPair {
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl AffixPair {
    pub fn new(prefix: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }
}

/// 单条旁路规则的分组计划（对应计划 JSON 的一个元素）
///
/// 置备层按 1:1 关系为每个内层数组创建一个模式集资源，
/// 再把同一规则的全部模式集以 OR 组合成放行条件。
#[derive(Debug, Clone, Serialize)]
pub struct RulePlan {
    pub rule: String,
    pub groups: Vec<Vec<String>>,
}

/// 将分组计划以 JSON 数组写入 `out`
pub fn write_plan(out: &mut dyn Write, plans: &[RulePlan]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, plans)?;
    out.write_all(b"\n")?;
    Ok(())
}
