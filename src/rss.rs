use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::catalog::Post;

pub const SITE_URL: &str = "https://petermuturi.dev";

pub fn post_link(post: &Post) -> String {
    format!("{SITE_URL}/blog#post-{}", post.id)
}

pub fn build_channel(posts: &[Post]) -> Channel {
    let items = posts
        .iter()
        .map(|p| {
            let link = post_link(p);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            let pub_date = p
                .published
                .and_hms_opt(0, 0, 0)
                .map(|d| d.and_utc().to_rfc2822());
            let categories = p
                .tags
                .iter()
                .map(|t| CategoryBuilder::default().name(t.as_str()).build())
                .collect::<Vec<_>>();
            ItemBuilder::default()
                .title(p.title.clone())
                .description(p.excerpt.clone())
                .author(p.author.clone())
                .pub_date(pub_date)
                .categories(categories)
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{SITE_URL}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title("Tech Insights & Tutorials")
        .description("Sharing knowledge, experiences, and insights from my journey in software development, architecture, and emerging technologies.")
        .link(format!("{SITE_URL}/blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}
