//! flexudy-cli: 从命令行生成测验题与摘要
//!
//! Usage:
//!   flexudy-cli cloze   --text "..." [--blank "___"]   Fill-in-the-blank questions
//!   flexudy-cli wh      --url https://...              Question/answer pairs
//!   flexudy-cli summary --file notes.pdf --async       Summary, queued and polled
//!
//! Logging is controlled with `RUST_LOG` (default `flexudy_gateway=info`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use flexudy_gateway::types::DEFAULT_BLANK_SYMBOL;
use flexudy_gateway::{
    AsyncJobRequest, ContentFile, ContentRequest, ContentType, Environment, GatewayClient,
    JobHandle,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "flexudy-cli",
    version,
    about = "Generate quizzes and summaries with the Flexudy gateway."
)]
struct Cli {
    /// License key. Falls back to the OS keyring, then FLEXUDY_LICENSE_KEY.
    #[arg(long, global = true)]
    license_key: Option<String>,

    /// Use the sandbox gateway instead of production.
    #[arg(long, global = true)]
    sandbox: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill-in-the-blank questions.
    Cloze {
        #[command(flatten)]
        content: ContentArgs,
        #[command(flatten)]
        job: JobArgs,
        /// Placeholder rendered in place of the answer.
        #[arg(long, default_value = DEFAULT_BLANK_SYMBOL)]
        blank: String,
    },
    /// Question/answer pairs.
    Wh {
        #[command(flatten)]
        content: ContentArgs,
        #[command(flatten)]
        job: JobArgs,
    },
    /// Summary as a list of facts.
    Summary {
        #[command(flatten)]
        content: ContentArgs,
        #[command(flatten)]
        job: JobArgs,
    },
}

#[derive(Args, Debug)]
struct ContentArgs {
    /// Raw text to learn from.
    #[arg(long)]
    text: Option<String>,

    /// Web page or document URL. Repeatable.
    #[arg(long = "url")]
    urls: Vec<String>,

    /// Local file to upload. Repeatable.
    #[arg(long = "file")]
    files: Vec<PathBuf>,

    /// DOCUMENT, IMAGE or BOOK.
    #[arg(long, default_value = "DOCUMENT")]
    content_type: String,
}

#[derive(Args, Debug)]
struct JobArgs {
    /// Queue the work and poll for the result.
    #[arg(long = "async")]
    queued: bool,

    /// Seconds between polls.
    #[arg(long, default_value_t = flexudy_gateway::types::DEFAULT_POLL_INTERVAL_SECS)]
    poll_secs: u64,

    /// Give up (and cancel polling) after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// URL the gateway calls when the job completes.
    #[arg(long)]
    webhook: Option<String>,
}

impl ContentArgs {
    fn to_request(&self) -> Result<ContentRequest> {
        let content_type: ContentType = self
            .content_type
            .parse()
            .with_context(|| format!("invalid --content-type {}", self.content_type))?;

        let mut request = ContentRequest::new()
            .with_urls(self.urls.iter().cloned())
            .with_content_type(content_type);
        if let Some(text) = &self.text {
            request = request.with_text(text.clone());
        }
        for path in &self.files {
            request = request.with_file(ContentFile::from_path(path.clone()));
        }
        Ok(request)
    }
}

impl JobArgs {
    fn to_job(&self, content: ContentRequest) -> AsyncJobRequest {
        let mut job = AsyncJobRequest::new(content).with_poll_interval_secs(self.poll_secs);
        if let Some(webhook) = &self.webhook {
            job = job.with_webhook_url(webhook.clone());
        }
        job
    }

    async fn wait<T>(&self, mut handle: JobHandle<T>) -> Result<T>
    where
        T: Clone + Send + 'static,
    {
        tracing::info!(job_id = %handle.job_id(), "waiting for job");
        let outcome = match self.timeout_secs {
            Some(secs) => handle.wait_timeout(Duration::from_secs(secs)).await,
            None => handle.wait().await,
        };
        Ok(outcome?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flexudy_gateway=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = GatewayClient::builder();
    if cli.sandbox {
        builder = builder.environment(Environment::Sandbox);
    }
    if let Some(key) = &cli.license_key {
        builder = builder.license_key(key.clone());
    }
    let client = builder.build().context("failed to configure gateway client")?;

    match &cli.command {
        Command::Cloze {
            content,
            job,
            blank,
        } => {
            let request = content.to_request()?;
            let questions = if job.queued {
                let handle = client.submit_cloze_quiz_job(&job.to_job(request)).await?;
                job.wait(handle).await?
            } else {
                client.generate_cloze_quiz(&request).await?
            };
            for (i, q) in questions.iter().enumerate() {
                println!("{}. {}", i + 1, q.question_with(blank));
                println!("   answer: {}", q.answer());
            }
        }
        Command::Wh { content, job } => {
            let request = content.to_request()?;
            let questions = if job.queued {
                let handle = client.submit_wh_quiz_job(&job.to_job(request)).await?;
                job.wait(handle).await?
            } else {
                client.generate_wh_quiz(&request).await?
            };
            for (i, q) in questions.iter().enumerate() {
                println!("{}. {}", i + 1, q.question());
                println!("   answer: {}", q.answer());
            }
        }
        Command::Summary { content, job } => {
            let request = content.to_request()?;
            let summary = if job.queued {
                let handle = client.submit_summary_job(&job.to_job(request)).await?;
                job.wait(handle).await?
            } else {
                client.generate_summary(&request).await?
            };
            for fact in summary.facts() {
                println!("- {}", fact);
            }
        }
    }

    Ok(())
}
