use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::components::A;

use crate::catalog::{CatalogQuery, CatalogView, Post, CATALOG};

#[component]
pub fn BlogPage() -> impl IntoView {
    let query = RwSignal::new(CatalogQuery::default());
    let page = Memo::new(move |_| query.with(|q| CATALOG.view(q)));

    view! {
        <Title text="Blog" />
        <div class="text-center mb-8">
            <h1 class="font-bold text-3xl lg:text-4xl mb-4 section-content">
                "Tech Insights & Tutorials"
                <a
                    href="/rss.xml"
                    target="_blank"
                    class="relative top-1 ml-4 text-brightYellow hover:text-yellow transition-colors duration-200"
                    aria-label="RSS Feed"
                >
                    <i class="extra-rss" />
                </a>
            </h1>
            <div class="max-w-2xl mx-auto text-lg font-medium text-muted section-content">
                "Sharing knowledge, experiences, and insights from my journey in software development, architecture, and emerging technologies."
            </div>
        </div>
        <div class="w-full max-w-5xl mx-auto">
            <div class="mb-6 flex flex-col gap-4">
                <label for="blog_search" class="sr-only">
                    "Search articles"
                </label>
                <input
                    id="blog_search"
                    type="text"
                    class="w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan bg-background text-foreground placeholder-muted transition-all duration-200"
                    placeholder="🔍 Search articles, topics, or technologies..."
                    prop:value=move || query.with(|q| q.search().to_string())
                    on:input=move |ev| query.update(|q| q.set_search(event_target_value(&ev)))
                />
                <CategoryBar query />
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || {
                    let listing = page.get();
                    if listing.is_empty() {
                        Either::Left(
                            view! {
                                <div class="col-span-full text-center py-12">
                                    <h3 class="text-cyan text-xl mb-4">"No articles found"</h3>
                                    <p class="text-muted">
                                        "Try adjusting your search or filter criteria"
                                    </p>
                                </div>
                            },
                        )
                    } else {
                        Either::Right(
                            listing
                                .items
                                .into_iter()
                                .map(|post| view! { <PostCard post /> })
                                .collect_view(),
                        )
                    }
                }}
            </div>
            <Pagination query page />
            <div class="mt-12 text-center bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
                <h3 class="text-xl font-bold mb-4">"Want to Collaborate or Discuss Tech?"</h3>
                <p class="mb-6">
                    "I'm always open to interesting discussions, collaboration opportunities, or sharing knowledge about software development, architecture, and emerging technologies."
                </p>
                <A
                    href="/contact"
                    attr:class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                >
                    "💬 Get In Touch"
                </A>
            </div>
        </div>
    }
}

#[component]
fn CategoryBar(query: RwSignal<CatalogQuery>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {CATALOG
                .facets()
                .into_iter()
                .map(|facet| {
                    let active = move || query.with(|q| q.category() == facet.filter);
                    view! {
                        <button
                            class=move || {
                                if active() {
                                    "px-4 py-2 rounded-full border border-cyan bg-cyan/20 text-cyan"
                                } else {
                                    "px-4 py-2 rounded-full border border-muted/30 hover:bg-brightBlack/20"
                                }
                            }
                            on:click=move |_| query.update(|q| q.set_category(facet.filter))
                        >
                            {facet.filter.label()}
                            <span class="ml-2 px-2 rounded-full bg-brightBlack text-xs">
                                {facet.count}
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn PostCard(post: &'static Post) -> impl IntoView {
    view! {
        <article
            id=format!("post-{}", post.id)
            class="flex flex-col bg-brightBlack/20 rounded-md border border-muted/30 p-4 hover:bg-brightBlack/30 transition-colors duration-200"
        >
            <div class="flex items-center justify-between mb-3">
                <span class="text-xs uppercase text-purple font-medium tracking-wide">
                    {post.category.label()}
                </span>
                {post
                    .featured
                    .then(|| {
                        view! {
                            <span class="text-xs rounded px-2 py-1 bg-yellow/20 text-yellow">
                                "Featured"
                            </span>
                        }
                    })}
            </div>
            <h4 class="text-lg font-bold leading-tight mb-2 text-blue">{post.title.clone()}</h4>
            <p class="text-sm text-muted flex-grow mb-4">{post.excerpt.clone()}</p>
            <div class="flex flex-wrap gap-1 mb-4">
                {post
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="bg-green/20 text-green px-2 py-1 rounded text-xs">
                                {tag.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-wrap items-center justify-between gap-2 text-xs text-muted">
                <span>"👤 " {post.author.clone()}</span>
                <span>"📅 " {post.published.format("%b %e, %Y").to_string()}</span>
                <span>{format!("{} min read", post.read_time)}</span>
                <span>{format!("👁 {} · 💬 {}", post.views, post.comments)}</span>
            </div>
        </article>
    }
}

#[component]
fn Pagination(query: RwSignal<CatalogQuery>, page: Memo<CatalogView<'static>>) -> impl IntoView {
    let button_class = |active: bool| {
        if active {
            "px-3 py-1 rounded-md border border-cyan bg-cyan/20 text-cyan"
        } else {
            "px-3 py-1 rounded-md border border-muted/30 hover:bg-brightBlack/20 disabled:opacity-40 disabled:cursor-not-allowed"
        }
    };
    move || {
        let listing = page.get();
        listing.shows_pagination().then(|| {
            let total = listing.total_pages;
            let current = listing.current_page;
            view! {
                <nav class="flex justify-center items-center gap-2 mt-8" aria-label="Pagination">
                    <button
                        class=button_class(false)
                        disabled=!listing.has_previous()
                        on:click=move |_| query.update(|q| q.previous())
                    >
                        "Previous"
                    </button>
                    {listing
                        .window()
                        .map(|n| {
                            view! {
                                <button
                                    class=button_class(n == current)
                                    on:click=move |_| query.update(|q| q.go_to(n, total))
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class=button_class(false)
                        disabled=!listing.has_next()
                        on:click=move |_| query.update(|q| q.next(total))
                    >
                        "Next"
                    </button>
                </nav>
            }
        })
    }
}
