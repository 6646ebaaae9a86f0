use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use logo_effect::{BackgroundConfig, BlackenConfig, LogoEffect};
use std::path::PathBuf;

const GENERATED_LOGO: &str = "attached_assets/generated_images/double-cherries-logo.png";
const SOURCE_LOGO: &str = "attached_assets/double-cherries-logo.png";

#[derive(Parser, Debug)]
#[command(version, about = "Touch up the cherry logo image")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn the dark stem and border pixels solid black
    BlackenBorders {
        #[arg(short, long, default_value = GENERATED_LOGO)]
        input: PathBuf,

        #[command(flatten)]
        blacken: BlackenArgs,

        /// Output path, defaults to overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Make the warm gradient background transparent
    RemoveBackground {
        #[arg(short, long, default_value = SOURCE_LOGO)]
        input: PathBuf,

        /// Output path, defaults to overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove the background, then blacken the borders
    All {
        #[arg(short, long, default_value = SOURCE_LOGO)]
        input: PathBuf,

        #[command(flatten)]
        blacken: BlackenArgs,

        /// Output path, defaults to overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct BlackenArgs {
    /// Pixels with a mean brightness below this become black
    #[arg(short, long, default_value_t = 100)]
    threshold: u8,
}

impl BlackenArgs {
    fn effect(&self) -> LogoEffect {
        LogoEffect::BlackenBorders(BlackenConfig::new().with_threshold(self.threshold))
    }
}

impl Command {
    fn into_job(self) -> (PathBuf, PathBuf, Vec<LogoEffect>) {
        let (input, output, effects) = match self {
            Command::BlackenBorders {
                input,
                blacken,
                output,
            } => (input, output, vec![blacken.effect()]),
            Command::RemoveBackground { input, output } => (
                input,
                output,
                vec![LogoEffect::RemoveBackground(BackgroundConfig::new())],
            ),
            Command::All {
                input,
                blacken,
                output,
            } => (
                input,
                output,
                vec![
                    LogoEffect::RemoveBackground(BackgroundConfig::new()),
                    blacken.effect(),
                ],
            ),
        };

        let output = output.unwrap_or_else(|| input.clone());
        (input, output, effects)
    }
}

fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();
    let (input, output, effects) = cli.command.into_job();

    let reports = logo_effect::process_file(&input, &output, &effects).with_context(|| {
        format!(
            "failed to process {} -> {}",
            input.display(),
            output.display()
        )
    })?;

    for (effect, report) in effects.iter().zip(reports) {
        log::info!(
            "{} changed {} of {} pixels, saved to {}",
            effect.name(),
            report.changed,
            report.total,
            output.display()
        );
    }

    Ok(())
}
