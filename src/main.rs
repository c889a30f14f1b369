use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newshub::api::ApiClient;
use newshub::config::Config;
use newshub::fetch::{fetch_all, FetchLimits};
use newshub::hub::Dashboard;
use newshub::model::{Article, CategoryFilter};
use newshub::normalize::format_article_content;
use newshub::sources::default_groups;

#[derive(Parser, Debug)]
#[command(name = "newshub", about = "Tech news aggregation dashboard")]
struct Cli {
    /// Category to show: all, llm, automation, architecture, hacker_news,
    /// experienced_devs
    #[arg(short, long, default_value = "all")]
    category: CategoryFilter,

    /// Free-text search over titles and excerpts
    #[arg(short, long, default_value = "")]
    search: String,

    /// Backend aggregator base URL (overrides the config file)
    #[arg(long, env = "NEWSHUB_API_URL")]
    api_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full content of one article instead of the listing
    #[arg(long, value_name = "ID")]
    read: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newshub=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let base_url = cli
        .api_url
        .unwrap_or_else(|| config.api_base_url.clone());

    let client = ApiClient::new(base_url);
    let groups = default_groups(&config.hn_story_type);

    let mut dashboard = Dashboard::new(&groups);
    dashboard.set_category(cli.category);
    dashboard.set_search(&cli.search);

    info!("Fetching {} feed groups", groups.len());
    let outcomes = fetch_all(
        &client,
        &groups,
        FetchLimits {
            rss: config.rss_limit,
            hacker_news: config.hn_limit,
        },
    )
    .await;
    dashboard.apply(outcomes);

    // Failed groups are reported but never hide the others' articles
    for (category, message) in dashboard.errors() {
        eprintln!("[{}] fetch failed: {}", category, message);
    }

    if let Some(id) = &cli.read {
        if !dashboard.open_reader(id) {
            anyhow::bail!("no article with id '{}'", id);
        }
        if let Some(article) = dashboard.reader_article() {
            print_article(article);
        }
        return Ok(());
    }

    let visible = dashboard.visible();
    if visible.is_empty() {
        println!("No news found matching your criteria");
        return Ok(());
    }

    for article in visible {
        println!(
            "[{}] {} ({}, {})",
            article.category.info().label,
            article.title,
            article.source,
            article.date
        );
        println!("    {}", article.excerpt);
        println!("    id: {}", article.id);
    }

    Ok(())
}

fn print_article(article: &Article) {
    println!("{}", article.title);
    match &article.by {
        Some(by) => println!("{} | {} | by {}", article.source, article.date, by),
        None => println!("{} | {}", article.source, article.date),
    }
    println!();
    println!("{}", format_article_content(&article.full_content));
    if let Some(url) = &article.url {
        println!();
        println!("Link: {}", url);
    }
}
