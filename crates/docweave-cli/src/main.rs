//! docweave CLI - documentation weaving driver
//!
//! Commands:
//! - `docweave weave` - Weave schema documentation into a generated source file
//! - `docweave check` - Validate the schema model without writing any output

use clap::{Args, Parser, Subcommand};

mod weave;

#[derive(Parser)]
#[command(name = "docweave")]
#[command(author, version, about = "Weave schema documentation into generated sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConfigArgs {
    /// Fully qualified nullability annotation type (empty disables the feature)
    #[arg(long, default_value = "")]
    nullable_type: String,

    /// Annotation token inserted before nullable field types (e.g. @Nullable)
    #[arg(long, default_value = "")]
    nullable_annotation: String,

    /// Target Java version (array-typed fields are annotated from 8 on)
    #[arg(long, default_value_t = 7)]
    java_version: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Weave documentation into a generated source file
    Weave {
        /// Path to the schema model JSON
        #[arg(short, long)]
        schema: String,

        /// Path to the generated source file
        #[arg(short = 'i', long)]
        source: String,

        /// Output path (default: rewrite the source file in place)
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Validate schema types and signature uniqueness without weaving
    Check {
        /// Path to the schema model JSON
        #[arg(short, long)]
        schema: String,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

impl ConfigArgs {
    fn into_config(self) -> docweave_core::WeaveConfig {
        docweave_core::WeaveConfig::new(
            self.nullable_type,
            self.nullable_annotation,
            self.java_version,
        )
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Weave {
            schema,
            source,
            output,
            config,
        } => {
            weave::run(&schema, &source, output.as_deref(), config.into_config())?;
        }
        Commands::Check { schema, config } => {
            weave::check(&schema, config.into_config())?;
        }
    }

    Ok(())
}
