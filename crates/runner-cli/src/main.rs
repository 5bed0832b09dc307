use runner_core::observability::init_tracing;
use runner_core::report_to_stdout;
use tracing::{debug, warn};

/// mcp runner: prints one JSON status line and always exits 0.
fn main() {
    init_tracing();

    // フラグは受け付けない。余分な引数は無視する
    let extra: Vec<String> = std::env::args().skip(1).collect();
    if !extra.is_empty() {
        debug!(?extra, "ignoring command-line arguments");
    }

    if let Err(e) = report_to_stdout() {
        warn!(error = %e, "status record was not delivered");
    }
}
