//! 压缩算法：顺序拼接压缩 + 前后缀分桶压缩
//!
//! 两级策略：
//! - `compact_simply`：按输入顺序用 `|` 贪心拼接，装不下则另起一条（首次适应）。
//! - `compact_patterns`：先按公共前后缀分桶，桶内压缩后包回前后缀，
//!   再把全部中间结果按长度排序，做一轮最短配最长的贪心合并。
//!
//! 两级都是贪心近似，不保证最优装箱；对几十条静态模式足够。
use crate::types::AffixPair;

/// 按序贪心拼接模式，每条输出不超过 `max_length`
///
/// 单条长度超过 `max_length` 的模式无法安全拆分（需要正则语法知识），
/// 会原样作为独立输出；公共入口 `create_groupings` 的前置校验会拒绝这类输入。
pub fn compact_simply(patterns: &[&str], max_length: usize) -> Vec<String> {
    let mut compacted: Vec<String> = Vec::new();
    let mut buffer = String::new();
    // 空模式是合法的空分支（来自前后缀剥离），不能用 buffer 是否为空串判断缓冲状态
    let mut active = false;
    for &pattern in patterns {
        let fits = if active {
            buffer.len() + pattern.len() + 1 <= max_length
        } else {
            pattern.len() <= max_length
        };
        if fits {
            if active {
                buffer.push('|');
            }
            buffer.push_str(pattern);
        } else {
            if active {
                compacted.push(std::mem::take(&mut buffer));
            }
            buffer.push_str(pattern);
        }
        active = true;
    }
    if active {
        compacted.push(buffer);
    }
    compacted
}

/// 前后缀分桶压缩：输出与输入的 `|` 并集语义等价
///
/// 1. 每条模式按声明顺序取首个命中的 (prefix, suffix) 归桶，无命中者单列；
/// 2. 桶内对剥去前后缀的 body 做 `compact_simply`（长度预算扣除前后缀与包裹括号），
///    结果包回 `prefix(body)suffix`；无命中桶按全预算压缩；
/// 3. 全部中间结果按长度稳定升序，反复用最短项并入最长项，放不下时最长项定稿。
///
/// 语义保持依赖 `prefix(a|b)suffix` 与 `prefix a suffix|prefix b suffix` 等价，
/// 即前后缀必须是字面量安全的正则片段。
pub fn compact_patterns(patterns: &[&str], affixes: &[AffixPair], max_length: usize) -> Vec<String> {
    // 分桶（保持桶首次出现的顺序与桶内输入顺序）
    let mut by_affix: Vec<(usize, Vec<&str>)> = Vec::new();
    let mut non_matching: Vec<&str> = Vec::new();

    for &pattern in patterns {
        let claimed = affixes.iter().enumerate().find(|(_, affix)| {
            pattern.starts_with(&affix.prefix)
                && pattern.ends_with(&affix.suffix)
                && pattern.len() >= affix.prefix.len() + affix.suffix.len()
        });
        match claimed {
            Some((idx, affix)) => {
                let body = &pattern[affix.prefix.len()..pattern.len() - affix.suffix.len()];
                match by_affix.iter_mut().find(|(i, _)| *i == idx) {
                    Some((_, bodies)) => bodies.push(body),
                    None => by_affix.push((idx, vec![body])),
                }
            }
            None => non_matching.push(pattern),
        }
    }

    // 桶内压缩并包回前后缀
    let mut intermediate: Vec<String> = Vec::new();
    for (idx, bodies) in &by_affix {
        let affix = &affixes[*idx];
        let effective_max = max_length.saturating_sub(affix.prefix.len() + affix.suffix.len() + 2);
        for body in compact_simply(bodies, effective_max) {
            intermediate.push(format!("{}({}){}", affix.prefix, body, affix.suffix));
        }
    }
    intermediate.extend(compact_simply(&non_matching, max_length));

    // 全局合并：最短项尽量并入最长项，合并结果仍是当前最长项
    intermediate.sort_by_key(|regex| regex.len());
    let mut compacted: Vec<String> = Vec::new();
    while let Some(longest) = intermediate.pop() {
        if intermediate.is_empty() || intermediate[0].len() + longest.len() + 1 > max_length {
            compacted.push(longest);
        } else {
            let shortest = intermediate.remove(0);
            intermediate.push(format!("{}|{}", shortest, longest));
        }
    }
    compacted
}
