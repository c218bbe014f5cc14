use mazepath::{app::App, config::Config};

fn main() -> std::io::Result<()> {
    let config = Config::from_env();
    let _guard = config.init_logging();

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = App::default().run(&mut stdout);
    App::restore_terminal(&mut stdout)?;
    if let Err(e) = &result {
        tracing::error!("[app] Exited with error: {}", e);
    }
    result
}
