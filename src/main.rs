fn main() {
    // Logs go to stderr and only when asked for, so stdout stays exact.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = depmap::cli::parse();
    let code = depmap::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
