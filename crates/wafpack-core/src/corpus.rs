//! 内置 URI 模式语料（两类旁路规则的路径白名单）
use crate::types::AffixPair;

/// 允许超大 POST 请求体的端点路径
/// 仅豁免请求体大小检查，其余防护不受影响
pub const LARGE_BODY_PATHS: &[&str] = &[
    r"^/a/([-a-zA-Z0-9_]+)/assistants/new/$",
    r"^/a/([-a-zA-Z0-9_]+)/documents/collections/([0-9]+)/add_files$",
    r"^/a/([-a-zA-Z0-9_]+)/evaluations/dataset/new/$",
    r"^/a/([-a-zA-Z0-9_]+)/evaluations/evaluator/new/$",
    r"^/a/([-a-zA-Z0-9_]+)/evaluations/parse_csv_columns/$",
    r"^/a/([-a-zA-Z0-9_]+)/experiments/e/([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})/v/([0-9]+)/session/([^/]+)/embed/message/$",
    r"^/a/([-a-zA-Z0-9_]+)/experiments/e/([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})/v/([0-9]+)/session/([^/]+)/message/$",
    r"^/a/([-a-zA-Z0-9_]+)/experiments/source_material/([0-9]+)/$",
    r"^/a/([-a-zA-Z0-9_]+)/experiments/source_material/new/$",
    r"^/a/([-a-zA-Z0-9_]+)/pipelines/data/([0-9]+)/$",
    r"^/channels/commcare_connect/incoming_message$",
    r"^/slack/events$",
    r"^/users/profile/upload\-image/$",
];

/// 允许缺失 User-Agent 头的端点路径
/// 仅豁免 User-Agent 检查，其余防护不受影响
pub const NO_USER_AGENT_PATHS: &[&str] = &[
    r"^/$",
    r"^/a/([-a-zA-Z0-9_]+)/chatbots/([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})/s/([^/]+)/chat/$",
    r"^/a/([-a-zA-Z0-9_]+)/chatbots/([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})/start/$",
    r"^/channels/sureadhere/([^/]+)/incoming_message$",
    r"^/channels/telegram/([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})$",
    r"^/robots\.txt$",
    r"^/sitemap\.xml$",
];

/// 前后缀候选表（按声明顺序取首个命中）
/// 与语料的 URL 结构对应：租户前缀最特殊，裸 "^/" 兜底
pub fn compactible_affixes() -> Vec<AffixPair> {
    vec![
        AffixPair::new(r"^/a/([-a-zA-Z0-9_]+)/", "$"),
        AffixPair::new(r"^/channels/", "$"),
        AffixPair::new(r"^/", "$"),
    ]
}
