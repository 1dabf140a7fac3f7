//! CLI entry point for blogcms-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogcms_rs::commands::import::ImportOptions;
use blogcms_rs::BlogCms;

#[derive(Parser)]
#[command(name = "blogcms-rs")]
#[command(version)]
#[command(about = "Render structured blog content into SEO-annotated HTML pages", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a blog post from a JSON document
    Create {
        /// Path to the JSON document
        file: PathBuf,
    },

    /// Create a blog post from a converted HTML document
    Import {
        /// Path to the HTML document
        file: PathBuf,

        /// Post title (defaults to the document's first heading)
        #[arg(short, long)]
        title: Option<String>,

        /// Post category
        #[arg(short = 'g', long)]
        category: String,

        /// Author name
        #[arg(short, long)]
        author: Option<String>,

        /// Publication date
        #[arg(long)]
        date: Option<String>,

        /// Embedded video URL
        #[arg(long)]
        video_url: Option<String>,
    },

    /// Print the rendered page for a JSON document without saving it
    #[command(alias = "r")]
    Render {
        /// Path to the JSON document
        file: PathBuf,
    },

    /// List published posts
    List {
        /// Number of posts to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Start the HTTP server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogcms_rs=debug,info"
    } else {
        "blogcms_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let cms = BlogCms::new(&base_dir)?;

    match cli.command {
        Commands::Create { file } => {
            blogcms_rs::commands::create::run(&cms, &file)?;
        }

        Commands::Import {
            file,
            title,
            category,
            author,
            date,
            video_url,
        } => {
            let options = ImportOptions {
                title,
                category,
                author,
                date,
                video_url,
            };
            blogcms_rs::commands::import::run(&cms, &file, options)?;
        }

        Commands::Render { file } => {
            blogcms_rs::commands::render::run(&cms, &file)?;
        }

        Commands::List { limit } => {
            blogcms_rs::commands::list::run(&cms, limit)?;
        }

        Commands::Server { port, ip } => {
            let ip = ip.unwrap_or_else(|| cms.config.server.ip.clone());
            let port = port.unwrap_or(cms.config.server.port);
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blogcms_rs::server::start(&cms, &ip, port).await?;
        }
    }

    Ok(())
}
