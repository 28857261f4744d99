//! 错误类型定义
use thiserror::Error;

/// 公共入口的输入校验错误
///
/// 这些问题若不在本地拦截，要到置备阶段才会被策略引擎拒收，
/// 距离出错代码很远且难以定位。
#[derive(Error, Debug)]
pub enum CompactError {
    /// 单条模式自身超过长度上限，任何压缩都无法使其装入模式集条目
    #[error("模式超长（{len} > {max_length}），无法装入模式集：{pattern}")]
    PatternTooLong {
        pattern: String,
        len: usize,
        max_length: usize,
    },

    /// 模式不是合法正则
    #[error("模式不是合法正则：{pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
