//! # bean-lister
//!
//! 以配置类启动应用上下文，扫描两个包命名空间，并把容器中注册的
//! 每个 bean 名称逐行写到标准输出。
//!
//! 日志写到标准错误，默认级别为 `warn`，可通过 `RUST_LOG` 调整。

mod beans;
mod beans1;
mod printer;

use component_macros::Configuration;
use di_abstractions::ApplicationContext;
use di_impl::AnnotationApplicationContext;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// 应用配置类
#[derive(Debug, Default, Configuration)]
#[component_scan("self::beans")]
#[component_scan("self::beans1")]
pub struct AppConfig;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut context = AnnotationApplicationContext::from_configuration::<AppConfig>()?;
    let names = context.bean_definition_names();
    debug!("容器中共有 {} 个 bean", names.len());

    let stdout = std::io::stdout();
    printer::print_bean_names(&names, &mut stdout.lock())?;

    context.close()?;
    Ok(())
}

/// 未设置 `RUST_LOG` 时的日志级别
const DEFAULT_LOG_LEVEL: &str = "warn";

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_LOG_LEVEL)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
