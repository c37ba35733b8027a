// ---------------------------------------------------------------------
// name: reset_today_logs
// type: Command line application.
// desc: Deletes every attendance log checked in today so the demo
//       environment starts the day with all employees neutral.
// ---------------------------------------------------------------------

use attendance_cleanup::{HttpTransport, Settings, TimeWindow};
use log::warn;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let transport = HttpTransport::new();
    let window = TimeWindow::today();
    let report = Settings::from_env()
        .and_then(|settings| attendance_cleanup::reset_today_logs(&transport, &settings, &window))?;

    if report.failed() > 0 {
        warn!(
            "{} of {} deletion(s) for {} failed",
            report.failed(),
            report.targeted(),
            report.window.date()
        );
    }
    Ok(())
}
