//! CLI entry point for tagshelf

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tagshelf::commands::related::RelatedOptions;

#[derive(Parser)]
#[command(name = "tagshelf")]
#[command(version)]
#[command(about = "Tag-derived collections and related-content shortcodes for static sites", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Page manifest to read instead of the configured one
    #[arg(short, long, global = true)]
    pages: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every derived collection
    Collections {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the related-content list for a collection
    Related {
        /// Collection name, e.g. eleventy:data
        #[arg(short = 'n', long)]
        collection: String,

        /// Heading above the list
        #[arg(short, long)]
        title: Option<String>,

        /// URL to leave out of the list
        #[arg(short, long)]
        filter_url: Option<String>,

        /// CSS class of the wrapping section
        #[arg(long)]
        cls: Option<String>,
    },

    /// Render a template from the input directory
    #[command(alias = "r")]
    Render {
        /// Template path, relative to the input directory
        template: String,

        /// URL of the page to render the template for
        #[arg(short, long)]
        url: Option<String>,

        /// Write to the output directory instead of printing
        #[arg(short, long)]
        write: bool,
    },

    /// List site information
    List {
        /// Type of content to list (page, tag, collection)
        #[arg(default_value = "page")]
        r#type: String,
    },

    /// Remove the output directory
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "tagshelf=debug,info"
    } else {
        "tagshelf=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let pages = cli.pages.as_deref();

    match cli.command {
        Commands::Collections { json } => {
            let site = tagshelf::Site::new(&base_dir)?;
            tagshelf::commands::collections::run(&site, pages, json)?;
        }

        Commands::Related {
            collection,
            title,
            filter_url,
            cls,
        } => {
            let site = tagshelf::Site::new(&base_dir)?;
            let options = RelatedOptions {
                manifest: pages,
                collection: &collection,
                title: title.as_deref(),
                filter_url: filter_url.as_deref(),
                cls: cls.as_deref(),
            };
            tagshelf::commands::related::run(&site, &options)?;
        }

        Commands::Render {
            template,
            url,
            write,
        } => {
            let site = tagshelf::Site::new(&base_dir)?;
            tracing::info!("Rendering {}", template);
            if let Some(path) =
                tagshelf::commands::render::run(&site, pages, &template, url.as_deref(), write)?
            {
                println!("Rendered to {:?}", path);
            }
        }

        Commands::List { r#type } => {
            let site = tagshelf::Site::new(&base_dir)?;
            tagshelf::commands::list::run(&site, pages, &r#type)?;
        }

        Commands::Clean => {
            let site = tagshelf::Site::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("tagshelf version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
