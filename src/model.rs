use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of content categories the dashboard knows about.
///
/// Articles always carry one of these; the feed group an item was fetched
/// through decides which. There is no "unknown" category on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Llm,
    Automation,
    Architecture,
    HackerNews,
    ExperiencedDevs,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Llm,
        Category::Automation,
        Category::Architecture,
        Category::HackerNews,
        Category::ExperiencedDevs,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Llm => "llm",
            Category::Automation => "automation",
            Category::Architecture => "architecture",
            Category::HackerNews => "hacker_news",
            Category::ExperiencedDevs => "experienced_devs",
        }
    }

    /// Static display metadata. Total over the enum, so a lookup can
    /// never miss.
    pub fn info(&self) -> &'static CategoryInfo {
        match self {
            Category::Llm => &CategoryInfo {
                id: "llm",
                label: "LLM Models",
                icon: "sparkles",
                color: "blue",
            },
            Category::Automation => &CategoryInfo {
                id: "automation",
                label: "Automation Tools",
                icon: "zap",
                color: "green",
            },
            Category::Architecture => &CategoryInfo {
                id: "architecture",
                label: "Architecture",
                icon: "building",
                color: "orange",
            },
            Category::HackerNews => &CategoryInfo {
                id: "hacker_news",
                label: "Hacker News",
                icon: "flame",
                color: "amber",
            },
            Category::ExperiencedDevs => &CategoryInfo {
                id: "experienced_devs",
                label: "Experienced Devs",
                icon: "users",
                color: "teal",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.id() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

#[derive(Debug, Clone)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Category selection for filtering. `All` is a filter value only and
/// never appears on an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// A normalized article. Every source is mapped into this shape before
/// filtering or display; instances are immutable once constructed and
/// discarded on the next fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: Category,
    /// Relative time string, derived at normalization.
    pub date: String,
    pub source: String,
    pub excerpt: String,
    pub full_content: String,
    pub url: Option<String>,
    pub by: Option<String>,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            date: String::new(),
            source: String::new(),
            excerpt: String::new(),
            full_content: String::new(),
            url: None,
            by: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.full_content = content.into();
        self
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    pub fn with_by(mut self, by: Option<String>) -> Self {
        self.by = by;
        self
    }
}

/// Built-in items shown ahead of any fetched group, so the dashboard is
/// never empty on first paint.
pub fn seed_articles() -> Vec<Article> {
    let seed = |id: &str, title: &str, category, date: &str, source: &str, excerpt: &str| {
        Article::new(id, title, category)
            .with_date(date)
            .with_source(source)
            .with_excerpt(excerpt)
            .with_content(excerpt)
    };

    vec![
        seed(
            "seed-1",
            "GPT-5 Rumors: OpenAI Hints at Major Breakthrough",
            Category::Llm,
            "2 hours ago",
            "TechCrunch",
            "Industry insiders suggest the next generation of language models could arrive sooner than expected with significant improvements in reasoning capabilities.",
        ),
        seed(
            "seed-2",
            "Zapier Unveils Advanced Canvas for No-Code Automation",
            Category::Automation,
            "5 hours ago",
            "VentureBeat",
            "The popular automation platform introduces a visual builder that allows users to create complex workflows without writing a single line of code.",
        ),
        seed(
            "seed-3",
            "Microservices vs Monoliths: The Pendulum Swings Back",
            Category::Architecture,
            "1 day ago",
            "InfoQ",
            "Leading tech companies are reconsidering their architecture choices as maintenance costs and complexity of microservices become apparent.",
        ),
        seed(
            "seed-4",
            "Anthropic Releases Claude 4: Enhanced Multi-Modal Capabilities",
            Category::Llm,
            "3 hours ago",
            "The Verge",
            "The latest iteration promises better understanding of images, charts, and documents with improved context handling up to 200K tokens.",
        ),
        seed(
            "seed-5",
            "Make.com Acquires Automation Startup for $150M",
            Category::Automation,
            "8 hours ago",
            "Business Insider",
            "The acquisition signals continued consolidation in the automation tools market as demand for workflow optimization grows.",
        ),
        seed(
            "seed-6",
            "Event-Driven Architecture Gains Momentum in Enterprise",
            Category::Architecture,
            "12 hours ago",
            "DZone",
            "More organizations are adopting event-driven patterns to build responsive, scalable systems that can handle real-time data streams.",
        ),
        seed(
            "seed-7",
            "Google Gemini 2.0 Shows Impressive Coding Abilities",
            Category::Llm,
            "6 hours ago",
            "Ars Technica",
            "Benchmarks reveal that the latest Gemini model outperforms competitors in programming tasks and technical documentation generation.",
        ),
        seed(
            "seed-8",
            "AI-Powered Automation Tools See 300% Growth",
            Category::Automation,
            "1 day ago",
            "Forbes",
            "Market research shows explosive growth in AI-enhanced automation platforms as businesses seek to optimize operations and reduce costs.",
        ),
        seed(
            "seed-9",
            "Serverless Architectures Hit Mainstream Adoption",
            Category::Architecture,
            "18 hours ago",
            "AWS Blog",
            "Major enterprises report significant cost savings and improved scalability after migrating critical workloads to serverless platforms.",
        ),
    ]
}
