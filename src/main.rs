use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use ragnav_core::{Error, KnowledgeQuery, KnowledgeStore, PipelineConfig, Result, SynthesizedAnswer};
use ragnav_openai::AzureOpenAIClient;
use ragnav_pipeline::{DocumentIngestor, KnowledgePipeline};
use ragnav_qdrant::{QdrantConfig, QdrantKnowledgeStore};

#[derive(Parser)]
#[command(name = "ragnav")]
#[command(about = "RAG navigator for vector-searchable knowledge bases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the knowledge-base collection if it does not exist
    Init,

    /// List collections on the vector store
    Collections,

    /// Chunk, embed, and index a UTF-8 text document
    Ingest {
        /// Path to a plain-text or markdown file
        file: PathBuf,

        /// Document title; chunk titles derive from it
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "1234")]
        tenant: String,

        #[arg(long, default_value = "5678")]
        user: String,

        #[arg(long, default_value = "Document")]
        category: String,
    },

    /// Answer a natural-language question against the knowledge base
    Search {
        /// The question to answer
        prompt: String,

        #[arg(long, default_value = "1234")]
        tenant: String,

        #[arg(long, default_value = "5678")]
        user: String,

        #[arg(long, default_value = "Document")]
        category: String,

        /// Similarity threshold in [0, 1]; defaults to the configured value
        #[arg(long)]
        threshold: Option<f32>,

        /// Maximum number of items to retrieve
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ragnav=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = PipelineConfig::from_env()?;
    let store = Arc::new(QdrantKnowledgeStore::new(QdrantConfig::from_env(
        config.embedding_dimensions,
    )?)?);

    match cli.command {
        Commands::Init => {
            store.ensure_collection().await?;
            println!("{} Collection ready", "✅".green());
        }

        Commands::Collections => {
            for name in store.list_collections().await? {
                println!("{}", name);
            }
        }

        Commands::Ingest {
            file,
            title,
            tenant,
            user,
            category,
        } => {
            let text = std::fs::read_to_string(&file).map_err(|e| {
                Error::InvalidInput(format!("cannot read {}: {}", file.display(), e))
            })?;

            let provider = Arc::new(AzureOpenAIClient::from_env()?);
            store.ensure_collection().await?;

            let ingestor = DocumentIngestor::new(provider, store.clone());
            let chunks = ingestor
                .ingest_text(&tenant, &user, &category, &title, &text)
                .await?;

            println!(
                "{} Indexed {} chunks from {}",
                "✅".green(),
                chunks,
                file.display()
            );
        }

        Commands::Search {
            prompt,
            tenant,
            user,
            category,
            threshold,
            limit,
        } => {
            if let Some(limit) = limit {
                config.max_results = limit;
            }

            // The pipeline takes no internal default; the CLI resolves the
            // threshold before building the query.
            let similarity_threshold = threshold.unwrap_or(config.default_similarity_threshold);

            let provider = Arc::new(AzureOpenAIClient::from_env()?);
            let pipeline = KnowledgePipeline::new(provider.clone(), provider, store, config);

            let query = KnowledgeQuery {
                tenant_id: tenant,
                user_id: user,
                category_id: Some(category),
                prompt_text: prompt,
                similarity_threshold,
            };

            let cancel = async {
                let _ = tokio::signal::ctrl_c().await;
            };

            let answer = pipeline.answer_with_cancel(&query, cancel).await?;
            print_answer(&answer);
        }
    }

    Ok(())
}

fn print_answer(answer: &SynthesizedAnswer) {
    match &answer.title {
        Some(title) => {
            println!("{} {}", "Title:".bold(), title.cyan());
            println!();
            println!("{}", answer.text);
        }
        None => {
            println!("{}", "No matching knowledge base items found.".yellow());
        }
    }
}
