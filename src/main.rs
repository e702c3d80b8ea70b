mod app;
mod clipboard;
mod color;
mod config;
mod export;
mod input;
mod overlay;
mod palette;
mod timer;
mod tui;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "huebox", version, about = "Random color palettes in the terminal")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the color generator for a reproducible palette.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print a palette to stdout (headless).
    Generate {
        /// Number of colors (defaults to palette.cards from config).
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Print the export JSON instead of plain lines.
        #[arg(long)]
        json: bool,
    },
    /// Generate a palette and write it as JSON (headless).
    Export {
        /// Output file (defaults to export.dir/export.file_name from config).
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref()).context("load config")?;
    if cli.seed.is_some() {
        cfg.palette.seed = cli.seed;
    }

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            // The alternate screen owns stdout; logs go to a file.
            init_logging(Some(&cfg.paths.data_dir.join("huebox.log")))?;
            tracing::info!(cards = cfg.palette.cards, "starting tui");
            let mut app = app::App::new(cfg.clone())?;
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate { count, json } => {
            init_logging(None)?;
            let count = count.unwrap_or(cfg.palette.cards);
            if count == 0 {
                bail!("count must be at least 1");
            }
            let colors = color::random_palette(&mut app::palette_rng(cfg.palette.seed), count);
            if json {
                println!("{}", export::ExportedPalette::new(&colors).to_json()?);
            } else {
                print_palette(&colors);
            }
        }
        Command::Export { out } => {
            init_logging(None)?;
            let (dir, file_name) = match out {
                Some(path) => split_out_path(&path)?,
                None => (cfg.export.dir.clone(), cfg.export.file_name.clone()),
            };
            let colors =
                color::random_palette(&mut app::palette_rng(cfg.palette.seed), cfg.palette.cards);
            let path = export::write_json(&colors, &dir, &file_name)?;
            print_palette(&colors);
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create dir {}", parent.display()))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn split_out_path(path: &Path) -> anyhow::Result<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid output path {}", path.display()))?
        .to_string();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name))
}

fn print_palette(colors: &[color::Rgb]) {
    for (i, c) in colors.iter().enumerate() {
        println!("{:02}. {}  {}", i + 1, c.to_hex_css_string(), c.to_css_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_out_path() {
        let (dir, name) = split_out_path(Path::new("out/my.json")).unwrap();
        assert_eq!(dir, PathBuf::from("out"));
        assert_eq!(name, "my.json");

        let (dir, name) = split_out_path(Path::new("colors.json")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "colors.json");

        assert!(split_out_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["huebox", "--seed", "3", "generate", "-n", "4", "--json"]).unwrap();
        assert_eq!(cli.seed, Some(3));
        assert!(matches!(
            cli.command,
            Some(Command::Generate { count: Some(4), json: true })
        ));
    }
}
