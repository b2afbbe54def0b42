use std::{env, fs::File, process::ExitCode};

use portfolio_site::{
    blog::list_posts,
    content::content,
    rss::{build_channel, feed_origin},
};

const OUTPUT: &str = "public/rss.xml";

fn main() -> ExitCode {
    // content and blog loading report through `log`; fmt's default init
    // bridges those records as well
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let profile = &content().profile;
    let site_url = env::var("SITE_URL").ok();
    let (site_url, owner) = match feed_origin(site_url.as_deref(), profile) {
        Ok(origin) => origin,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let posts = match list_posts("") {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("couldn't load blog posts: {e}");
            return ExitCode::FAILURE;
        }
    };
    let count = posts.len();
    let channel = build_channel(site_url, owner, posts);

    let written = File::create(OUTPUT)
        .map_err(|e| e.to_string())
        .and_then(|file| {
            channel
                .pretty_write_to(file, b' ', 2)
                .map(|_| ())
                .map_err(|e| e.to_string())
        });
    match written {
        Ok(()) => {
            log::info!("wrote {count} posts to {OUTPUT}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("couldn't write {OUTPUT}: {e}");
            ExitCode::FAILURE
        }
    }
}
