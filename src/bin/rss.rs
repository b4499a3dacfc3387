use portfolio_site::{catalog::CATALOG, rss::build_channel};
use std::fs::{self, File};

fn main() {
    let channel = build_channel(CATALOG.posts());

    fs::create_dir_all("public").expect("Should be able to create public directory");
    let file = File::create("public/rss.xml").expect("Should be able to create RSS feed file");
    channel
        .pretty_write_to(file, b' ', 2)
        .expect("Should be able to write RSS feed");
}
