use clap::Parser;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io;
use std::path::PathBuf;
use termfolio::config::{self, Config, ConfigError};
use termfolio::logging::{default_log_path, init_logging};
use termfolio::portfolio::Portfolio;
use termfolio::sound::{build_sink, SoundBoard};
use termfolio::tui::{run_terminal, TerminalSettings};

/// A portfolio you browse like a terminal
#[derive(Debug, Parser)]
#[command(name = "termfolio", version, about)]
struct Args {
    /// Config file (default: ~/.config/termfolio.json or $TERMFOLIO_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Portfolio dataset JSON, overrides the config
    #[arg(long)]
    portfolio: Option<PathBuf>,

    /// Skip the loading screen
    #[arg(long)]
    no_splash: bool,

    /// Start with sound off
    #[arg(long)]
    mute: bool,

    /// Milliseconds per typewriter character
    #[arg(long, value_name = "MS")]
    typing_speed: Option<u64>,

    /// Simulated processing delay in milliseconds
    #[arg(long, value_name = "MS")]
    delay: Option<u64>,

    /// Log file (default: <cache dir>/termfolio/termfolio.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(ref path) = self.portfolio {
            config.portfolio_path = Some(path.clone());
        }
        if self.no_splash {
            config.show_splash = false;
        }
        if self.mute {
            config.sound_enabled = false;
        }
        if let Some(ms) = self.typing_speed {
            config.typing_speed_ms = ms;
        }
        if let Some(ms) = self.delay {
            config.command_delay_ms = ms;
        }
    }
}

fn print_colored_message(message: &str, color: Color) {
    let _ = execute!(
        io::stdout(),
        SetForegroundColor(color),
        Print(message),
        ResetColor
    );
}

fn load_config(args: &Args) -> Config {
    match config::load_config(args.config.as_deref()) {
        Ok(cfg) => {
            tracing::info!("config loaded");
            cfg
        }
        Err(ConfigError::NotFound(path)) => {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            Config::default()
        }
        Err(e) => {
            tracing::warn!("config ignored: {e}");
            print_colored_message(
                &format!("Warning: {}\nUsing default settings.\n", e),
                Color::DarkYellow,
            );
            Config::default()
        }
    }
}

fn load_portfolio(config: &Config) -> Portfolio {
    match config.load_portfolio() {
        Ok(portfolio) => portfolio,
        Err(e) => {
            tracing::warn!("portfolio ignored: {e}");
            print_colored_message(
                &format!("Warning: {}\nShowing the sample portfolio.\n", e),
                Color::DarkYellow,
            );
            Portfolio::default()
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_logging(&log_path) {
        print_colored_message(&format!("Warning: {}\n", e), Color::DarkYellow);
    }

    let mut config = load_config(&args);
    args.apply(&mut config);

    let portfolio = load_portfolio(&config);
    tracing::info!(
        name = %portfolio.profile.name,
        sound = config.sound_enabled,
        backend = ?config.sound_backend,
        "starting terminal"
    );

    let sound = SoundBoard::new(build_sink(config.sound_backend), config.sound_enabled);
    let settings = TerminalSettings::from_config(&config);

    if let Err(e) = run_terminal(portfolio, sound, settings, config.show_splash).await {
        tracing::error!("terminal error: {e}");
        print_colored_message(&format!("Error: {}\n", e), Color::Red);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "termfolio",
            "--no-splash",
            "--mute",
            "--typing-speed",
            "5",
            "--delay",
            "0",
            "--portfolio",
            "me.json",
        ]);
        let mut config = Config::default();
        args.apply(&mut config);

        assert!(!config.show_splash);
        assert!(!config.sound_enabled);
        assert_eq!(config.typing_speed_ms, 5);
        assert_eq!(config.command_delay_ms, 0);
        assert_eq!(config.portfolio_path, Some(PathBuf::from("me.json")));
    }

    #[test]
    fn no_flags_keep_config() {
        let args = Args::parse_from(["termfolio"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert!(config.show_splash);
        assert_eq!(config.command_delay_ms, 500);
    }
}
