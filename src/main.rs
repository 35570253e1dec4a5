use std::sync::Arc;

use formulator::audit::{AuditSink, LibSqlAuditSink, TracingAuditSink};
use formulator::bot::BotRuntime;
use formulator::channels::{CliChannel, TelegramChannel};
use formulator::config::{BotConfig, ChannelMode};
use formulator::engine::DialogueEngine;
use formulator::router::Router;
use formulator::session::InMemorySessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let BotConfig {
        channel_mode,
        telegram_token,
        allowed_users,
        audit_db_path,
        log_dir,
    } = BotConfig::from_env()?;

    // Keep the non-blocking writer guard alive for the process lifetime.
    let _log_guard = init_tracing(log_dir.as_deref());

    eprintln!("📋 Formulator v{}", env!("CARGO_PKG_VERSION"));

    let audit: Arc<dyn AuditSink> = match &audit_db_path {
        Some(path) => {
            eprintln!("   Audit store: {}", path.display());
            Arc::new(LibSqlAuditSink::new_local(path).await?)
        }
        None => {
            eprintln!("   Audit store: disabled (log only)");
            Arc::new(TracingAuditSink)
        }
    };

    let engine = DialogueEngine::new(Arc::new(InMemorySessionStore::new()));
    let router = Arc::new(Router::new(engine));
    let mut runtime = BotRuntime::new(router, audit);

    let mut active_channels = Vec::new();
    if channel_mode != ChannelMode::Telegram {
        runtime.add_channel(Arc::new(CliChannel::new()));
        active_channels.push("cli");
    }
    if channel_mode != ChannelMode::Cli {
        if let Some(token) = telegram_token {
            eprintln!(
                "   Telegram: enabled (allowed: {})",
                if allowed_users.iter().any(|u| u == "*") {
                    "everyone".to_string()
                } else if allowed_users.is_empty() {
                    "none (deny all)".to_string()
                } else {
                    allowed_users.join(", ")
                }
            );
            runtime.add_channel(Arc::new(TelegramChannel::new(token, allowed_users)));
            active_channels.push("telegram");
        }
    }
    eprintln!("   Channels: {}\n", active_channels.join(", "));

    runtime.run().await?;
    Ok(())
}

/// Console logging, plus a daily-rotated file log when a directory is set.
fn init_tracing(
    log_dir: Option<&std::path::Path>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "bot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
            None
        }
    }
}
