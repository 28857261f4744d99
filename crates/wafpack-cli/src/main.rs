use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info};
use wafpack_core::{
    create_groupings, load_corpus, verify_groupings, write_plan, Corpus, GroupingStats, RulePlan,
};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "wafpack", version, about = "WAF 正则模式集压缩与分组")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 计算分组计划并写出 JSON（供置备层消费）
    Plan {
        /// 语料文件路径（TOML）；缺省使用内置语料
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// 输出文件（JSON 数组）
        #[arg(long, default_value = "./waf_plan.json")]
        output: PathBuf,

        /// 单条压缩正则的长度上限（覆盖语料文件与缺省值）
        #[arg(long)]
        max_length: Option<usize>,

        /// 每个分组的条数上限
        #[arg(long)]
        max_group_size: Option<usize>,
    },

    /// 校验语料与分组不变式，发现问题以非零码退出
    Check {
        /// 语料文件路径（TOML）；缺省使用内置语料
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// 单条压缩正则的长度上限
        #[arg(long)]
        max_length: Option<usize>,

        /// 每个分组的条数上限
        #[arg(long)]
        max_group_size: Option<usize>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { corpus, output, max_length, max_group_size } => {
            let corpus = load(corpus, max_length, max_group_size)?;

            let mut plans = Vec::new();
            for (rule, patterns) in rules_of(&corpus) {
                let patterns: Vec<&str> = patterns.iter().map(String::as_str).collect();
                let groups = create_groupings(&patterns, &corpus.affixes, &corpus.options)
                    .with_context(|| format!("create groupings for rule {}", rule))?;
                let stats = GroupingStats::collect(patterns.len(), &groups);
                info!(
                    rule,
                    patterns_in = stats.patterns_in,
                    regexes_out = stats.regexes_out,
                    groups_out = stats.groups_out,
                    "rule compacted"
                );
                plans.push(RulePlan { rule: rule.to_string(), groups });
            }

            let mut out = BufWriter::new(File::create(&output).context("create output file")?);
            write_plan(&mut out, &plans).context("write plan json")?;
            out.flush().ok();
            info!(?output, "plan written");
        }

        Commands::Check { corpus, max_length, max_group_size } => {
            let corpus = load(corpus, max_length, max_group_size)?;

            let mut failed = false;
            for (rule, patterns) in rules_of(&corpus) {
                let patterns: Vec<&str> = patterns.iter().map(String::as_str).collect();
                let groups = match create_groupings(&patterns, &corpus.affixes, &corpus.options) {
                    Ok(groups) => groups,
                    Err(err) => {
                        error!(rule, %err, "corpus rejected");
                        failed = true;
                        continue;
                    }
                };
                let violations = verify_groupings(&patterns, &groups, &corpus.options)
                    .with_context(|| format!("verify rule {}", rule))?;
                for violation in &violations {
                    error!(rule, violation = %violation, "invariant violated");
                }
                if violations.is_empty() {
                    info!(rule, groups_out = groups.len(), "rule ok");
                } else {
                    failed = true;
                }
            }

            if failed {
                bail!("corpus check failed");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 加载语料（文件可选）并应用命令行覆盖
fn load(
    path: Option<PathBuf>,
    max_length: Option<usize>,
    max_group_size: Option<usize>,
) -> Result<Corpus> {
    let mut corpus = match path {
        Some(path) => load_corpus(&path).context("load corpus file")?,
        None => Corpus::default(),
    };
    if let Some(value) = max_length {
        corpus.options.max_length = value;
    }
    if let Some(value) = max_group_size {
        corpus.options.max_group_size = value;
    }
    Ok(corpus)
}

/// 语料中的两类旁路规则，固定顺序输出
fn rules_of(corpus: &Corpus) -> Vec<(&'static str, &[String])> {
    vec![
        ("large_body", corpus.large_body.as_slice()),
        ("no_user_agent", corpus.no_user_agent.as_slice()),
    ]
}
