use std::path::PathBuf;

use clap::ArgAction;
use headergen::{Generator, Language};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The directory containing the message-headers CSV exports
    #[arg(short, long, default_value_os_t = headergen::default_references())]
    references: PathBuf,

    /// The directory the package directory is written into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// A TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The language of the generated modules, overriding the configuration
    #[arg(short, long, value_enum)]
    language: Option<Language>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);
        self.generate()
    }

    #[instrument(skip(self))]
    fn generate(self) -> anyhow::Result<()> {
        let mut generator = Generator::new(self.references, self.output);
        if let Some(path) = &self.config {
            generator = generator.with_config_file(path)?;
        }
        if let Some(language) = self.language {
            let config = generator.config().clone().with_language(language);
            generator = generator.with_config(config);
        }

        let report = generator.run()?;

        for module in &report.modules {
            println!(
                "Generated {} ({} definitions)",
                module.path.display(),
                module.definitions
            );
        }
        println!("Generated {}", report.package.display());

        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
