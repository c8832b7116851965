mod app;
mod logging;
mod renderer;
mod settings;

use std::{io, path::PathBuf, time::Duration};

use clap::Parser;

use app::{AppError, RunOptions};
use settings::Settings;

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "mazer")]
struct Args {
    #[clap(short, long, help = "Number of columns, overrides settings")]
    cols: Option<usize>,
    #[clap(short, long, help = "Number of rows, overrides settings")]
    rows: Option<usize>,
    #[clap(short, long, help = "Seed for a reproducible maze")]
    seed: Option<u64>,
    #[clap(short, long, action, help = "Animate generation and solving")]
    animate: bool,
    #[clap(long, action, conflicts_with = "animate", help = "Only print the solved maze")]
    still: bool,
    #[clap(long, help = "Pause between animation steps in milliseconds")]
    delay: Option<u64>,
    #[clap(long, action, help = "Verify that the generated maze is perfect")]
    check: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeatable")]
    verbose: u8,
    #[clap(long, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Show config in debug format and quit")]
    debug_config: bool,
}

impl Args {
    fn log_level(&self, settings: &Settings) -> log::LevelFilter {
        match self.verbose {
            0 => settings.get_log_level().into(),
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn run_options(&self, settings: &Settings) -> RunOptions {
        let animate = if self.animate {
            true
        } else if self.still {
            false
        } else {
            settings.get_animate()
        };

        RunOptions {
            cols: self.cols.unwrap_or_else(|| settings.get_cols()),
            rows: self.rows.unwrap_or_else(|| settings.get_rows()),
            seed: self.seed.or_else(|| settings.get_seed()),
            animate,
            frame_delay: self
                .delay
                .map(Duration::from_millis)
                .unwrap_or_else(|| settings.get_frame_delay()),
            colors: settings.get_colors(),
            check: self.check,
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    let settings = Settings::load(&settings_path)?;

    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    init_logging(args.log_level(&settings))?;
    better_panic::install();

    let opts = args.run_options(&settings);
    log::debug!("running with {:?}", opts);

    app::run(&opts, &mut io::stdout().lock())?;

    Ok(())
}

/// Installs the stderr logger, it can only be done once per process.
fn init_logging(level: log::LevelFilter) -> Result<(), AppError> {
    logging::init(level).map_err(|e| AppError::Logger(e.to_string()))
}
