//! 压缩选项与统计信息（模块）

/// 压缩与分组的尺寸约束
/// - `max_length`：单条压缩正则的最大长度（对应模式集条目的序列化上限）。
/// - `max_group_size`：每个分组最多容纳的压缩正则条数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactOptions {
    pub max_length: usize,
    pub max_group_size: usize,
}

impl Default for CompactOptions {
    fn default() -> Self {
        Self {
            max_length: 200,
            max_group_size: 10,
        }
    }
}

/// 分组统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct GroupingStats {
    pub patterns_in: usize,
    pub regexes_out: usize,
    pub groups_out: usize,
}

impl GroupingStats {
    /// 从分组结果汇总统计
    pub fn collect(patterns_in: usize, groups: &[Vec<String>]) -> Self {
        Self {
            patterns_in,
            regexes_out: groups.iter().map(|group| group.len()).sum(),
            groups_out: groups.len(),
        }
    }
}
