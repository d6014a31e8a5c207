use std::error::Error;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::analysis::{AnalysisPipeline, AnalysisRequest};
use crate::config::Config;
use crate::providers::document::{DocumentExtractor, UploadedDocument};
use crate::providers::gemini::GeminiProvider;

mod analysis;
mod api;
mod completion;
mod config;
mod providers;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Gemini API key; falls back to the GOOGLE_API_KEY environment variable
    #[arg(short, long)]
    api_key: Option<String>,

    /// Analyze this resume file (.txt or .pdf) once and exit instead of serving
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Path to a text file holding the job description (one-shot mode)
    #[arg(long)]
    job_description: Option<PathBuf>,

    #[arg(long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Load environment variables
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Credential resolution is the one fatal startup step; nothing is
    // served without it.
    let config = match args.api_key.clone() {
        Some(key) => Config::new(key)?,
        None => Config::from_env()?,
    };

    match (&args.resume, &args.job_description) {
        (Some(resume), Some(job_description)) => {
            run_one_shot(resume, job_description, config).await
        }
        (None, None) => run_api_server(args.port, config).await,
        _ => Err("One-shot mode needs both --resume and --job-description".into()),
    }
}

async fn run_one_shot(
    resume_path: &Path,
    job_path: &Path,
    config: Config,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let file_name = resume_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();
    let bytes = std::fs::read(resume_path)
        .map_err(|e| format!("Failed to read {}: {}", resume_path.display(), e))?;
    let document = UploadedDocument::new(file_name, bytes);

    println!(
        "📄 Analyzing resume: {}",
        resume_path.display().to_string().bright_yellow()
    );

    let resume_text = DocumentExtractor::new().extract(&document)?;
    let job_description = std::fs::read_to_string(job_path)
        .map_err(|e| format!("Failed to read {}: {}", job_path.display(), e))?;

    let request = AnalysisRequest::new(resume_text, job_description)?;
    let pipeline = AnalysisPipeline::new(GeminiProvider::new(config.google_api_key));
    let report = pipeline.analyze(&request).await?;

    println!("\n📊 Analysis Results:");
    println!("{}", report.bright_green());
    Ok(())
}

async fn run_api_server(port: u16, config: Config) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr: SocketAddr = format!("0.0.0.0:{}", port)
        .parse()
        .expect("Failed to parse address");

    let provider = GeminiProvider::new(config.google_api_key);
    let app = api::create_api(provider);

    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    info!("Ready to accept connections");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
