use anyhow::{Result, bail};
use bookshelf_core::{
    application::{
        ApplicationError,
        queries::{
            books::{GetBookBySlugQuery, ListBooksQuery},
            reviews::MostReviewedQuery,
        },
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::{
        book::{BookReadRepository, BookWriteRepository, slug},
        review::{ReportPeriod, ReviewReportRepository},
    },
    infrastructure::{
        database,
        repositories::{
            PostgresBookReadRepository, PostgresBookWriteRepository,
            PostgresReviewReportRepository,
        },
        time::SystemClock,
    },
};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookshelf_core", version, about = "Book catalog maintenance and reports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report the day (or month) that received the most reviews
    MostReviewed {
        #[arg(short = 'm', long)]
        by_month: bool,
    },
    /// Show a book's average rating in whole stars
    AverageRating { slug: String },
    /// List books, optionally filtered by title, author or condition
    List {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        condition: Option<String>,
        /// Order by title: `asc` or `desc`
        #[arg(long)]
        order: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 30)]
        per_page: u32,
    },
    /// Print the base slug a title normalizes to
    Slugify {
        #[arg(required = true)]
        title: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let Cli { command } = Cli::parse();

    // Needs no database.
    if let Command::Slugify { title } = &command {
        println!("{}", slug::normalize(&title.join(" ")));
        return Ok(());
    }

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;

    let book_write_repo: Arc<dyn BookWriteRepository> =
        Arc::new(PostgresBookWriteRepository::new(pool.clone()));
    let book_read_repo: Arc<dyn BookReadRepository> =
        Arc::new(PostgresBookReadRepository::new(pool.clone()));
    let review_repo: Arc<dyn ReviewReportRepository> =
        Arc::new(PostgresReviewReportRepository::new(pool.clone()));

    let services = ApplicationServices::new(
        book_write_repo,
        book_read_repo,
        review_repo,
        Arc::new(SystemClock),
        config.slug_max_attempts(),
    );

    match command {
        Command::MostReviewed { by_month } => {
            let period = if by_month {
                ReportPeriod::Month
            } else {
                ReportPeriod::Day
            };
            let report = services
                .review_reports
                .most_reviewed(MostReviewedQuery { period })
                .await?;
            let Some(report) = report else {
                bail!("no reviews found");
            };
            tracing::debug!(report = %serde_json::to_string(&report)?, "report computed");
            println!(
                "The {} with the most reviews ({}) was {}",
                period.as_str(),
                report.review_count,
                report.label()
            );
        }
        Command::AverageRating { slug } => {
            let book = match services
                .book_queries
                .get_book_by_slug(GetBookBySlugQuery { slug: slug.clone() })
                .await
            {
                Ok(book) => book,
                Err(ApplicationError::NotFound(_)) => bail!("no book with slug `{slug}`"),
                Err(err) => return Err(err.into()),
            };
            match book.rating {
                Some(rating) => println!("{}: {rating}/5", book.title),
                None => println!("{}: not rated yet", book.title),
            }
        }
        Command::List {
            title,
            author,
            condition,
            order,
            page,
            per_page,
        } => {
            let page = services
                .book_queries
                .list_books(ListBooksQuery {
                    title,
                    author,
                    condition,
                    order,
                    page,
                    per_page,
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Command::Slugify { .. } => {}
    }

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
