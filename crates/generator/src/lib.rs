//! Static site generation: resolved content in, HTML pages out.

pub mod markdown;
pub mod pages;
pub mod site;
pub mod views;

use anyhow::Result;
use foundlio_content::VerticalResolver;
use foundlio_core::BusinessRecord;
use pages::PageChrome;
use serde_json::Value;
use std::path::Path;

pub use site::SiteContent;

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

/// Render a full site: landing page, one page per blog post, and the
/// shared stylesheet. The same function backs `build` and `preview` so
/// what you see locally is exactly what ships.
pub fn generate_site(
    dir: &Path,
    business: &BusinessRecord,
    resolver: &VerticalResolver,
    is_preview: bool,
) -> Result<GeneratedSite> {
    let content = SiteContent::resolve(dir, resolver)?;
    let selected = resolver.store().selected();

    let chrome = PageChrome {
        business,
        title: seo_string(resolver, &business.seo.title_template),
        description: seo_string(resolver, &business.seo.description_template),
        is_preview,
        selected,
    };

    let mut pages = vec![(
        "index.html".to_string(),
        pages::render_index(&chrome, &content),
    )];

    let posts: Vec<views::Post> = views::view_list(content.posts.clone());
    for post in &posts {
        if post.slug.is_empty() {
            continue;
        }
        let post_chrome = PageChrome {
            business,
            title: format!("{} | {}", post.title, business.name),
            description: post.excerpt.clone(),
            is_preview,
            selected,
        };
        pages.push((
            format!("posts/{}.html", post.slug),
            pages::render_post(&post_chrome, post),
        ));
    }

    Ok(GeneratedSite {
        pages,
        assets: vec![(
            "styles.css".to_string(),
            pages::STYLESHEET.as_bytes().to_vec(),
        )],
    })
}

/// SEO templates are ordinary tokenized content
fn seo_string(resolver: &VerticalResolver, template: &str) -> String {
    match resolver.process(&Value::String(template.to_string())) {
        Value::String(s) => s,
        _ => template.to_string(),
    }
}
