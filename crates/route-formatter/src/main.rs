// The binary uses the library, not duplicate modules
use route_formatter::{RouteFormatterApp, Settings, setup_logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    setup_logging();
    let settings = Settings::from_cli();

    let result = RouteFormatterApp::new(settings).and_then(|mut app| {
        let stdout = std::io::stdout();
        app.run(&mut stdout.lock())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
