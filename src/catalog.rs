use chrono::NaiveDate;
use gray_matter::{engine::YAML, Matter};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive, sync::LazyLock};
use thiserror::Error;

/// Posts shown per catalog page.
pub const PAGE_SIZE: usize = 6;
/// Maximum number of page buttons rendered at once.
pub const WINDOW_SIZE: usize = 5;

pub static CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::seeded().expect("Should be able to parse embedded posts"));

#[derive(Embed)]
#[folder = "posts"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Embedded post {0} is not valid UTF-8")]
    Encoding(String),
    #[error("Couldn't parse front matter of {0}")]
    FrontMatter(String),
    #[error("Duplicate post id {0}")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Frontend,
    Backend,
    #[serde(rename = "AI/ML")]
    AiMl,
    Database,
    DevOps,
    #[serde(rename = "Full Stack")]
    FullStack,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Frontend,
        Category::Backend,
        Category::AiMl,
        Category::Database,
        Category::DevOps,
        Category::FullStack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::AiMl => "AI/ML",
            Self::Database => "Database",
            Self::DevOps => "DevOps",
            Self::FullStack => "Full Stack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selector state: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selector entries in display order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(Self::All).chain(Category::ALL.into_iter().map(Self::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(c) => c.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == value)
            .map(Self::Only)
            .unwrap_or(Self::All)
    }
}

#[derive(Deserialize, Debug)]
struct FrontMatter {
    id: String,
    title: String,
    excerpt: String,
    author: String,
    published: NaiveDate,
    category: Category,
    tags: Vec<String>,
    read_time: u32,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    views: u64,
    #[serde(default)]
    comments: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub published: NaiveDate,
    pub category: Category,
    pub tags: Vec<String>,
    pub read_time: u32,
    pub featured: bool,
    pub views: u64,
    pub comments: u64,
}

impl Post {
    /// Case-insensitive substring match against title, excerpt and tags.
    /// An empty query matches every post.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.excerpt.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

fn parse_post(name: &str, data: &[u8]) -> Result<Post, CatalogError> {
    let content =
        std::str::from_utf8(data).map_err(|_| CatalogError::Encoding(name.to_string()))?;
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| CatalogError::FrontMatter(name.to_string()))?
        .data;
    Ok(Post {
        id: fm.id,
        title: fm.title,
        excerpt: fm.excerpt,
        author: fm.author,
        published: fm.published,
        category: fm.category,
        tags: fm.tags,
        read_time: fm.read_time,
        featured: fm.featured,
        views: fm.views,
        comments: fm.comments,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facet {
    pub filter: CategoryFilter,
    pub count: usize,
}

/// The fixed post collection. Order is set at construction and never changes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    posts: Vec<Post>,
}

impl Catalog {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Builds the catalog from the posts embedded at compile time.
    pub fn seeded() -> Result<Self, CatalogError> {
        let mut posts = Vec::new();
        for name in Assets::iter() {
            let file = Assets::get(&name)
                .ok_or_else(|| CatalogError::FrontMatter(name.to_string()))?;
            let post = parse_post(&name, &file.data)?;
            if posts.iter().any(|p: &Post| p.id == post.id) {
                return Err(CatalogError::DuplicateId(post.id));
            }
            posts.push(post);
        }
        sort_newest_first(&mut posts);
        Ok(Self::new(posts))
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn filter(&self, category: CategoryFilter, query: &str) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| category.matches(p.category) && p.matches_search(query))
            .collect()
    }

    /// Posts per category label. Ignores the search text.
    pub fn facet_count(&self, category: CategoryFilter) -> usize {
        self.posts
            .iter()
            .filter(|p| category.matches(p.category))
            .count()
    }

    pub fn facets(&self) -> Vec<Facet> {
        CategoryFilter::options()
            .map(|filter| Facet {
                filter,
                count: self.facet_count(filter),
            })
            .collect()
    }

    pub fn view(&self, query: &CatalogQuery) -> CatalogView<'_> {
        let filtered = self.filter(query.category, &query.search);
        let filtered_count = filtered.len();
        let total_pages = total_pages(filtered_count, PAGE_SIZE);
        let current_page = query.page.clamp(1, total_pages);
        CatalogView {
            items: page_slice(&filtered, current_page, PAGE_SIZE).to_vec(),
            filtered_count,
            total_pages,
            current_page,
        }
    }
}

/// One rendered page of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    pub items: Vec<&'a Post>,
    pub filtered_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl CatalogView<'_> {
    /// No post matched the filters.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn window(&self) -> RangeInclusive<usize> {
        page_window(self.current_page, self.total_pages)
    }
}

/// Never less than one, so an empty result still has a page to sit on.
/// Newest first. Same-day posts fall back to their id, numerically when both ids are numbers.
fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.published.cmp(&a.published).then_with(|| {
            match (a.id.parse::<u64>(), b.id.parse::<u64>()) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                _ => a.id.cmp(&b.id),
            }
        })
    });
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size).max(1)
}

pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

pub fn page_window(current: usize, total: usize) -> RangeInclusive<usize> {
    if total <= WINDOW_SIZE {
        1..=total.max(1)
    } else if current <= 3 {
        1..=WINDOW_SIZE
    } else if current >= total - 2 {
        total - 4..=total
    } else {
        current - 2..=current + 2
    }
}

/// User-controlled listing state. Changing either filter resets the page cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    category: CategoryFilter,
    search: String,
    page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            page: 1,
        }
    }
}

impl CatalogQuery {
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    pub fn previous(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn next(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }
}
