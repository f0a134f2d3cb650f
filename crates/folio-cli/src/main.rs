mod logger;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_stamp::{
    AppearanceUpdate, ConfigUpdate, FolioConfig, NumberingUpdate, PositionUpdate, generate_labels,
};
use logger::CliLogger;
use std::path::{Path, PathBuf};

/// Log entries kept in memory for the end-of-run summary
const LOG_HISTORY: usize = 500;

#[derive(Parser)]
#[command(name = "folio", about = "Stamp folio numbers onto PDF pages", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stamp every page of a PDF
    Stamp {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// JSON configuration file; flags below override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed for reproducible random jitter
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        position: PositionArgs,

        #[command(flatten)]
        appearance: AppearanceArgs,

        #[command(flatten)]
        numbering: NumberingArgs,
    },

    /// Print the label each page would receive
    Labels {
        /// Number of pages in the document
        #[arg(long)]
        pages: usize,

        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        numbering: NumberingArgs,
    },

    /// Write the default configuration to a file
    InitConfig {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct PositionArgs {
    /// Vertical corner the stamp is anchored to
    #[arg(long, value_enum)]
    vertical: Option<VerticalArg>,

    /// Horizontal corner the stamp is anchored to
    #[arg(long, value_enum)]
    horizontal: Option<HorizontalArg>,

    /// Horizontal offset in cm
    #[arg(long, allow_hyphen_values = true)]
    offset_x: Option<f64>,

    /// Vertical offset in cm
    #[arg(long, allow_hyphen_values = true)]
    offset_y: Option<f64>,

    /// Rotation in degrees
    #[arg(long, allow_hyphen_values = true)]
    rotation: Option<f64>,

    /// Horizontal jitter range in cm
    #[arg(long)]
    random_x: Option<f64>,

    /// Vertical jitter range in cm
    #[arg(long)]
    random_y: Option<f64>,

    /// Rotation jitter range in degrees
    #[arg(long)]
    random_rotation: Option<f64>,
}

#[derive(Args)]
struct AppearanceArgs {
    /// Text color as hex RGB, e.g. #1a2b3c
    #[arg(long)]
    color: Option<String>,

    /// 0 (invisible) to 100 (opaque)
    #[arg(long)]
    transparency: Option<f64>,

    /// Font size in points
    #[arg(long)]
    font_size: Option<f64>,
}

#[derive(Args)]
struct NumberingArgs {
    /// First folio number
    #[arg(long)]
    start: Option<i64>,

    /// Which end of the document gets the start number
    #[arg(long, value_enum)]
    direction: Option<DirectionArg>,

    /// How the number is written
    #[arg(long, value_enum)]
    numbering: Option<NumberingArg>,

    /// Minimum digits for numerals
    #[arg(long)]
    padding: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum VerticalArg {
    Top,
    Bottom,
}

#[derive(Clone, Copy, ValueEnum)]
enum HorizontalArg {
    Left,
    Right,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    First,
    Last,
}

#[derive(Clone, Copy, ValueEnum)]
enum NumberingArg {
    Numbers,
    Letters,
    Mixed,
}

impl From<VerticalArg> for folio_stamp::CornerVertical {
    fn from(arg: VerticalArg) -> Self {
        match arg {
            VerticalArg::Top => Self::Top,
            VerticalArg::Bottom => Self::Bottom,
        }
    }
}

impl From<HorizontalArg> for folio_stamp::CornerHorizontal {
    fn from(arg: HorizontalArg) -> Self {
        match arg {
            HorizontalArg::Left => Self::Left,
            HorizontalArg::Right => Self::Right,
        }
    }
}

impl From<DirectionArg> for folio_stamp::Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::First => Self::First,
            DirectionArg::Last => Self::Last,
        }
    }
}

impl From<NumberingArg> for folio_stamp::NumberingType {
    fn from(arg: NumberingArg) -> Self {
        match arg {
            NumberingArg::Numbers => Self::Numbers,
            NumberingArg::Letters => Self::Letters,
            NumberingArg::Mixed => Self::Mixed,
        }
    }
}

impl PositionArgs {
    fn update(&self) -> ConfigUpdate {
        ConfigUpdate::Position(PositionUpdate {
            corner_vertical: self.vertical.map(Into::into),
            corner_horizontal: self.horizontal.map(Into::into),
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            rotation: self.rotation,
            randomness_x: self.random_x,
            randomness_y: self.random_y,
            randomness_rotation: self.random_rotation,
        })
    }
}

impl AppearanceArgs {
    fn update(&self) -> ConfigUpdate {
        ConfigUpdate::Appearance(AppearanceUpdate {
            color: self.color.clone(),
            transparency: self.transparency,
            font_size: self.font_size,
        })
    }
}

impl NumberingArgs {
    fn update(&self) -> ConfigUpdate {
        ConfigUpdate::Numbering(NumberingUpdate {
            start_number: self.start,
            direction: self.direction.map(Into::into),
            numbering_type: self.numbering.map(Into::into),
            zero_padding: self.padding,
        })
    }
}

async fn base_config(path: Option<&Path>) -> Result<FolioConfig> {
    match path {
        Some(path) => FolioConfig::load(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(FolioConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logger = CliLogger::new(LOG_HISTORY, CliLogger::level_for_verbosity(cli.verbose));
    logger.clone().init()?;

    match cli.command {
        Commands::Stamp {
            input,
            output,
            config,
            seed,
            position,
            appearance,
            numbering,
        } => {
            let mut options = base_config(config.as_deref()).await?;
            for update in [position.update(), appearance.update(), numbering.update()] {
                options.apply(update);
            }
            options.validate()?;

            let written = folio_stamp::stamp_file(&input, &output, &options, seed)
                .await
                .with_context(|| format!("Failed to stamp {}", input.display()))?;
            println!("Stamped {} → {} ({} bytes)", input.display(), output.display(), written);

            let problems = logger.problem_count();
            if problems > 0 {
                println!("Completed with {} warning(s)", problems);
            }
        }

        Commands::Labels {
            pages,
            config,
            numbering,
        } => {
            let mut options = base_config(config.as_deref()).await?;
            options.apply(numbering.update());
            let n = &options.numbering;

            let labels = generate_labels(
                n.start_number,
                pages,
                n.numbering_type,
                n.zero_padding,
                n.direction,
            );
            for (index, label) in labels.iter().enumerate() {
                println!("{:>5}  {}", index + 1, label);
            }
        }

        Commands::InitConfig { output } => {
            FolioConfig::default()
                .save(&output)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Wrote default configuration → {}", output.display());
        }
    }

    Ok(())
}
