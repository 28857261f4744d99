//! 分组驱动：校验输入 → 压缩 → 切分为模式集分组
use regex::Regex;

use crate::compact::compact_patterns;
use crate::error::CompactError;
use crate::options::CompactOptions;
use crate::types::AffixPair;

/// 把模式压缩后切分为模式集分组
///
/// - 每条输入模式必须自身不超过 `max_length` 且可编译为正则，否则报错返回；
/// - 输出中每条压缩正则不超过 `max_length`，每组不超过 `max_group_size` 条；
/// - 分组数 = ceil(压缩正则条数 / max_group_size)；
/// - 空输入得到空分组，上层视为"该规则未启用"而非错误。
///
/// 前置条件：`affixes` 的 prefix/suffix 须为字面量安全的正则片段。
pub fn create_groupings(
    patterns: &[&str],
    affixes: &[AffixPair],
    options: &CompactOptions,
) -> Result<Vec<Vec<String>>, CompactError> {
    for &pattern in patterns {
        if pattern.len() > options.max_length {
            return Err(CompactError::PatternTooLong {
                pattern: pattern.to_string(),
                len: pattern.len(),
                max_length: options.max_length,
            });
        }
        Regex::new(pattern).map_err(|source| CompactError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
    }

    let regexes = compact_patterns(patterns, affixes, options.max_length);
    // 条数上限按 1 兜底，避免零值切分
    let group_size = options.max_group_size.max(1);
    Ok(regexes.chunks(group_size).map(|chunk| chunk.to_vec()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{self, LARGE_BODY_PATHS, NO_USER_AGENT_PATHS};

    fn all_patterns() -> Vec<&'static str> {
        LARGE_BODY_PATHS
            .iter()
            .chain(NO_USER_AGENT_PATHS)
            .copied()
            .collect()
    }

    #[test]
    fn corpus_output_respects_length_limit() {
        let options = CompactOptions::default();
        let groups =
            create_groupings(&all_patterns(), &corpus::compactible_affixes(), &options).unwrap();
        for group in &groups {
            for regex in group {
                assert!(regex.len() <= options.max_length, "{}", regex);
            }
        }
    }

    #[test]
    fn corpus_output_respects_group_size() {
        let options = CompactOptions::default();
        let groups =
            create_groupings(&all_patterns(), &corpus::compactible_affixes(), &options).unwrap();
        assert!(groups.len() <= 10, "分组过多：{}", groups.len());
        for group in &groups {
            assert!(group.len() <= options.max_group_size, "组内过多：{}", group.len());
        }
    }

    #[test]
    fn combined_corpus_fits_single_group() {
        // 生产语料 20 条压缩后仅 6 条正则，应落在一个分组内
        let groups = create_groupings(
            &all_patterns(),
            &corpus::compactible_affixes(),
            &CompactOptions::default(),
        )
        .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 6);
    }

    #[test]
    fn no_user_agent_corpus_fits_single_group() {
        // 7 条模式压缩为 2 条正则，2 ≤ 10 ⇒ 恰好一个分组
        let groups = create_groupings(
            NO_USER_AGENT_PATHS,
            &corpus::compactible_affixes(),
            &CompactOptions::default(),
        )
        .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn chunks_compacted_regexes_into_groups() {
        // 12 条互不可合并的长模式应切成 10 + 2 两组
        let patterns: Vec<String> = (0..12)
            .map(|i| format!("^/{}{:02}$", "p".repeat(148), i))
            .collect();
        let patterns: Vec<&str> = patterns.iter().map(String::as_str).collect();
        let groups = create_groupings(
            &patterns,
            &corpus::compactible_affixes(),
            &CompactOptions::default(),
        )
        .unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 10);
        assert_eq!(groups[1].len(), 2);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = create_groupings(
            &[],
            &corpus::compactible_affixes(),
            &CompactOptions::default(),
        )
        .unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn rejects_oversized_pattern() {
        let long = format!("^/{}$", "x".repeat(300));
        let err = create_groupings(
            &[long.as_str()],
            &corpus::compactible_affixes(),
            &CompactOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CompactError::PatternTooLong { len: 303, max_length: 200, .. }
        ));
    }

    #[test]
    fn rejects_invalid_regex() {
        let err = create_groupings(&[r"^/([unclosed$"], &[], &CompactOptions::default())
            .unwrap_err();
        assert!(matches!(err, CompactError::InvalidPattern { .. }));
    }

    #[test]
    fn groupings_are_deterministic() {
        let patterns = all_patterns();
        let affixes = corpus::compactible_affixes();
        let options = CompactOptions::default();
        let first = create_groupings(&patterns, &affixes, &options).unwrap();
        let second = create_groupings(&patterns, &affixes, &options).unwrap();
        assert_eq!(first, second);
    }
}
