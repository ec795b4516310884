use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "news_insight=debug,info"
    } else {
        "news_insight=info,warn"
    }
}

/// 初始化日誌。`RUST_LOG` 優先於 `--verbose`；`json` 切換成結構化輸出。
pub fn init_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    let compact = (!json).then(|| fmt::layer().with_target(verbose).compact());
    let structured = json.then(|| {
        fmt::layer()
            .with_target(verbose)
            .json()
            .with_current_span(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(structured)
        .init();
}
