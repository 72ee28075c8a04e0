use std::io::Write;

use workout::PACKAGES;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum Format {
    /// Human readable summary line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Output format for training summaries
    #[arg(short, long, value_enum, default_value_t = Format::Text, required = false)]
    pub format: Format,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // `WORKOUT_LOG` takes priority over `RUST_LOG`, logs go to stderr to keep stdout for summaries
    let log_env = std::env::var("WORKOUT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let Args { format } = <Args as clap::Parser>::parse();

    let io = std::io::stdout();
    let mut io = io.lock();

    for ((code, _), result) in PACKAGES.into_iter().zip(workout::run(PACKAGES)) {
        let info = match result {
            Ok(info) => info,
            Err(e) => {
                tracing::error!(code, "Failed to process package. Reason: {e}");
                continue;
            }
        };

        match format {
            Format::Text => writeln!(io, "{info}")?,
            Format::Json => writeln!(io, "{}", serde_json::to_string(&info)?)?,
        }
    }

    io.flush()?;

    Ok(())
}
