//! WAF 正则模式集压缩与分组核心库
//!
//! 设计要点：
//! - 纯函数式核心：压缩与分组不依赖外部状态，相同输入得到逐字节一致的输出。
//! - 先按公共前后缀分桶压缩，再做全局贪心合并；近似最少分组，不保证最优装箱。
//! - 公共入口显式校验单条模式的长度与可编译性，避免把必然被策略引擎
//!   拒收的条目悄悄写进分组计划。
//! - 输出的分组序列由置备层 1:1 映射为模式集资源，本库不做任何云端调用。

mod compact;
mod corpus;
mod error;
mod grouping;
mod options;
mod rules;
mod types;
mod verify;

// 对外暴露的公共 API
pub use compact::{compact_patterns, compact_simply};
pub use corpus::{compactible_affixes, LARGE_BODY_PATHS, NO_USER_AGENT_PATHS};
pub use error::CompactError;
pub use grouping::create_groupings;
pub use options::{CompactOptions, GroupingStats};
pub use rules::{load_corpus, Corpus};
pub use types::{write_plan, AffixPair, RulePlan};
pub use verify::{matching_example, verify_groupings};
