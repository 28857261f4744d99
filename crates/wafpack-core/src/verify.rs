//! 离线校验：语料健康检查与分组结果复核
//!
//! 把置备阶段才会暴露的拒收问题提前到本地：长度、锚定、可编译性，
//! 以及"压缩后仍覆盖原模式"的等价性抽查。
use anyhow::{Context, Result};
use regex::Regex;

use crate::options::CompactOptions;

/// 负例探针：任何输出正则都不应命中
const NEGATIVE_PROBES: &[&str] = &["fish", "/a/b/c/d/"];

/// 为锚定的 URI 模式构造一个必然命中的示例串
///
/// 用固定样本替换语料中出现的捕获组与转义形态；只覆盖内置语料
/// 用到的元字符，不是通用的正则反向生成器。
pub fn matching_example(pattern: &str) -> String {
    pattern
        .replace("([-a-zA-Z0-9_]+)", "team-one_two3")
        .replace(
            "([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})",
            "08628b8f-bbee-4237-badd-a991e988b7fe",
        )
        .replace("([0-9]+)", "42")
        .replace("([^/]+)", "XYZ")
        .replace("\\.", ".")
        .replace("\\-", "-")
        .replace('^', "")
        .replace('$', "")
}

/// 复核分组结果，返回违反项描述（空表示通过）
///
/// 检查四类不变式：输入模式已锚定；输出正则长度与组内条数不超限；
/// 每条输入模式的示例串至少被一条输出正则命中；负例探针无一命中。
/// 输出正则本身编译失败按错误返回而非违反项。
pub fn verify_groupings(
    patterns: &[&str],
    groups: &[Vec<String>],
    options: &CompactOptions,
) -> Result<Vec<String>> {
    let mut violations = Vec::new();

    let mut compiled: Vec<Regex> = Vec::new();
    for group in groups {
        if group.len() > options.max_group_size {
            violations.push(format!(
                "分组包含 {} 条，超过上限 {}",
                group.len(),
                options.max_group_size
            ));
        }
        for regex in group {
            if regex.len() > options.max_length {
                violations.push(format!(
                    "压缩正则超长（{} > {}）：{}",
                    regex.len(),
                    options.max_length,
                    regex
                ));
            }
            let compiled_regex = Regex::new(regex)
                .with_context(|| format!("compile compacted regex: {}", regex))?;
            compiled.push(compiled_regex);
        }
    }

    for &pattern in patterns {
        if !(pattern.starts_with('^') && pattern.ends_with('$')) {
            violations.push(format!("模式未锚定（应以 ^ 开头、$ 结尾）：{}", pattern));
        }
        let example = matching_example(pattern);
        if !compiled.iter().any(|regex| regex.is_match(&example)) {
            violations.push(format!("示例 {} （来自 {}）未被任何压缩正则覆盖", example, pattern));
        }
    }

    for &probe in NEGATIVE_PROBES {
        if compiled.iter().any(|regex| regex.is_match(probe)) {
            violations.push(format!("负例探针被误命中：{}", probe));
        }
    }

    Ok(violations)
}
