use crate::markdown;
use crate::site::SiteContent;
use crate::views::{self, Areas, Faq, Headlines, PageContent, Post, Service, Testimonial, Work};
use foundlio_content::Vertical;
use foundlio_core::BusinessRecord;

/// HTML-escape a string to prevent XSS from authored content
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Shared stylesheet, emitted once as an asset
pub const STYLESHEET: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    line-height: 1.6;
    color: #2b2b2b;
    background: #fafaf7;
}
.container { max-width: 960px; margin: 0 auto; padding: 0 1.5rem; }
header.site {
    background: #14343b;
    color: #fff;
    padding: 1rem 0;
}
header.site .container { display: flex; justify-content: space-between; align-items: center; }
header.site .phone a { color: #ffd166; font-weight: bold; text-decoration: none; }
.hero { background: #1d4e5a; color: #fff; padding: 4rem 0; }
.hero h1 { font-size: 2.4rem; margin-bottom: 1rem; }
.hero p { max-width: 640px; margin-bottom: 1.5rem; }
.cta, .cta-secondary {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    border-radius: 4px;
    font-weight: bold;
    text-decoration: none;
    margin-right: 0.75rem;
}
.cta { background: #ffd166; color: #14343b; }
.cta-secondary { border: 2px solid #ffd166; color: #ffd166; }
section { padding: 3rem 0; }
section h2 { font-size: 1.6rem; margin-bottom: 1.5rem; color: #14343b; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.25rem; }
.card {
    background: #fff;
    border: 1px solid #e8e6df;
    border-radius: 6px;
    padding: 1.25rem;
}
.card h3 { margin-bottom: 0.5rem; }
.quote { font-style: italic; }
.attribution { margin-top: 0.75rem; color: #6b6b6b; font-size: 0.9rem; }
.stars { color: #e0a100; letter-spacing: 2px; }
.faq-q { font-weight: bold; margin-top: 1rem; }
.areas ul { list-style: none; display: flex; flex-wrap: wrap; gap: 0.5rem 1.25rem; margin-top: 1rem; }
.post-excerpt { color: #555; }
.post-date { color: #999; font-size: 0.85rem; }
article.post { background: #fff; padding: 2rem; border-radius: 6px; border: 1px solid #e8e6df; }
article.post h1 { margin-bottom: 0.5rem; }
article.post .body { margin-top: 1.5rem; }
article.post .body p { margin-bottom: 1rem; }
footer.site {
    background: #14343b;
    color: #cfd8d9;
    padding: 2rem 0;
    font-size: 0.9rem;
}
.preview-badge {
    position: fixed;
    bottom: 1rem;
    left: 1rem;
    background: #ff6b35;
    color: #fff;
    padding: 0.5rem 1rem;
    border-radius: 4px;
    font-weight: bold;
    z-index: 50;
}
.design-panel {
    position: fixed;
    bottom: 1rem;
    right: 1rem;
    background: #fff;
    border: 1px solid #ccc;
    border-radius: 6px;
    padding: 0.75rem 1rem;
    box-shadow: 0 4px 12px rgba(0,0,0,0.15);
    z-index: 50;
    font-size: 0.9rem;
}
.design-panel select { margin-left: 0.5rem; }
"#;

/// Everything a page shell needs besides its own body
pub struct PageChrome<'a> {
    pub business: &'a BusinessRecord,
    pub title: String,
    pub description: String,
    pub is_preview: bool,
    pub selected: Vertical,
}

/// Render the landing page from resolved content.
///
/// Sections with no content (category missing from both deployed data
/// and the active bundle) are skipped entirely.
pub fn render_index(chrome: &PageChrome<'_>, content: &SiteContent) -> String {
    let headlines: Headlines = views::view(content.headlines.clone()).unwrap_or_default();
    let services: Vec<Service> = views::view_list(content.services.clone());
    let faqs: Vec<Faq> = views::view_list(content.faqs.clone());
    let testimonials: Vec<Testimonial> = views::view_list(content.testimonials.clone());
    let works: Vec<Work> = views::view_list(content.works.clone());
    let posts: Vec<Post> = views::view_list(content.posts.clone());
    let areas: Option<Areas> = views::view(content.areas.clone());
    let page: Option<PageContent> = views::view(content.content.clone());

    let mut body = String::new();
    body.push_str(&hero_html(&headlines));
    if let Some(page) = &page {
        body.push_str(&about_html(page));
    }
    body.push_str(&services_html(&headlines, &services));
    if let Some(page) = &page {
        body.push_str(&why_us_html(page));
    }
    body.push_str(&testimonials_html(&headlines, &testimonials));
    body.push_str(&works_html(&headlines, &works));
    body.push_str(&faqs_html(&headlines, &faqs));
    if let Some(areas) = &areas {
        body.push_str(&areas_html(&headlines, areas));
    }
    body.push_str(&posts_html(&headlines, &posts));
    if let Some(page) = &page {
        body.push_str(&emergency_html(page));
    }

    page_shell(chrome, &body)
}

/// Render one blog post page
pub fn render_post(chrome: &PageChrome<'_>, post: &Post) -> String {
    let body = format!(
        r#"<section><div class="container"><article class="post">
<h1>{}</h1>
<div class="post-date">{}</div>
<div class="body">{}</div>
<p><a href="/">&larr; Back to {}</a></p>
</article></div></section>"#,
        html_escape(&post.title),
        html_escape(&post.date),
        markdown::render(&post.body),
        html_escape(&chrome.business.name),
    );
    page_shell(chrome, &body)
}

fn hero_html(headlines: &Headlines) -> String {
    let hero = &headlines.hero;
    if hero.title.is_empty() {
        return String::new();
    }
    let secondary = if hero.secondary_cta.is_empty() {
        String::new()
    } else {
        format!(
            r##"<a class="cta-secondary" href="#contact">{}</a>"##,
            html_escape(&hero.secondary_cta)
        )
    };
    format!(
        r##"<div class="hero"><div class="container">
<h1>{}</h1>
<p>{}</p>
<a class="cta" href="#contact">{}</a>{}
</div></div>"##,
        html_escape(&hero.title),
        html_escape(&hero.subtitle),
        html_escape(&hero.cta),
        secondary
    )
}

fn about_html(page: &PageContent) -> String {
    if page.about.title.is_empty() && page.about.body.is_empty() {
        return String::new();
    }
    format!(
        r#"<section class="about"><div class="container"><h2>{}</h2><p>{}</p></div></section>"#,
        html_escape(&page.about.title),
        html_escape(&page.about.body)
    )
}

fn services_html(headlines: &Headlines, services: &[Service]) -> String {
    if services.is_empty() {
        return String::new();
    }
    let cards: String = services
        .iter()
        .map(|s| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#,
                html_escape(&s.name),
                html_escape(&s.description)
            )
        })
        .collect();
    format!(
        r#"<section class="services"><div class="container"><h2>{}</h2><div class="grid">{}</div></div></section>"#,
        html_escape(&headlines.sections.services),
        cards
    )
}

fn why_us_html(page: &PageContent) -> String {
    if page.why_us.is_empty() {
        return String::new();
    }
    let cards: String = page
        .why_us
        .iter()
        .map(|block| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#,
                html_escape(&block.title),
                html_escape(&block.body)
            )
        })
        .collect();
    format!(
        r#"<section class="why-us"><div class="container"><div class="grid">{}</div></div></section>"#,
        cards
    )
}

fn testimonials_html(headlines: &Headlines, testimonials: &[Testimonial]) -> String {
    if testimonials.is_empty() {
        return String::new();
    }
    let cards: String = testimonials
        .iter()
        .map(|t| {
            let stars = "★".repeat(t.rating.min(5) as usize);
            format!(
                r#"<div class="card"><div class="stars">{}</div><p class="quote">"{}"</p><div class="attribution">— {}, {}</div></div>"#,
                stars,
                html_escape(&t.quote),
                html_escape(&t.author),
                html_escape(&t.city)
            )
        })
        .collect();
    format!(
        r#"<section class="testimonials"><div class="container"><h2>{}</h2><div class="grid">{}</div></div></section>"#,
        html_escape(&headlines.sections.testimonials),
        cards
    )
}

fn works_html(headlines: &Headlines, works: &[Work]) -> String {
    if works.is_empty() {
        return String::new();
    }
    let cards: String = works
        .iter()
        .map(|w| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p><div class="attribution">{}</div></div>"#,
                html_escape(&w.title),
                html_escape(&w.description),
                html_escape(&w.location)
            )
        })
        .collect();
    format!(
        r#"<section class="works"><div class="container"><h2>{}</h2><div class="grid">{}</div></div></section>"#,
        html_escape(&headlines.sections.works),
        cards
    )
}

fn faqs_html(headlines: &Headlines, faqs: &[Faq]) -> String {
    if faqs.is_empty() {
        return String::new();
    }
    let items: String = faqs
        .iter()
        .map(|f| {
            format!(
                r#"<div class="faq-q">{}</div><p>{}</p>"#,
                html_escape(&f.question),
                html_escape(&f.answer)
            )
        })
        .collect();
    format!(
        r#"<section class="faqs"><div class="container"><h2>{}</h2>{}</div></section>"#,
        html_escape(&headlines.sections.faqs),
        items
    )
}

fn areas_html(headlines: &Headlines, areas: &Areas) -> String {
    if areas.intro.is_empty() && areas.cities.is_empty() {
        return String::new();
    }
    let cities: String = areas
        .cities
        .iter()
        .map(|c| format!("<li>{}</li>", html_escape(c)))
        .collect();
    format!(
        r#"<section class="areas"><div class="container"><h2>{}</h2><p>{}</p><ul>{}</ul></div></section>"#,
        html_escape(&headlines.sections.areas),
        html_escape(&areas.intro),
        cities
    )
}

fn posts_html(headlines: &Headlines, posts: &[Post]) -> String {
    if posts.is_empty() {
        return String::new();
    }
    let cards: String = posts
        .iter()
        .map(|p| {
            format!(
                r#"<div class="card"><h3><a href="/posts/{}.html">{}</a></h3><p class="post-excerpt">{}</p><div class="post-date">{}</div></div>"#,
                html_escape(&p.slug),
                html_escape(&p.title),
                html_escape(&p.excerpt),
                html_escape(&p.date)
            )
        })
        .collect();
    format!(
        r#"<section class="posts"><div class="container"><h2>{}</h2><div class="grid">{}</div></div></section>"#,
        html_escape(&headlines.sections.posts),
        cards
    )
}

fn emergency_html(page: &PageContent) -> String {
    if page.emergency.title.is_empty() {
        return String::new();
    }
    format!(
        r#"<section class="emergency" id="contact"><div class="container"><h2>{}</h2><p>{}</p></div></section>"#,
        html_escape(&page.emergency.title),
        html_escape(&page.emergency.body)
    )
}

fn page_shell(chrome: &PageChrome<'_>, body: &str) -> String {
    let business = chrome.business;

    let preview_badge = if chrome.is_preview {
        r#"<div class="preview-badge">PREVIEW MODE &middot; Live Reload Active</div>"#
    } else {
        ""
    };

    let design_panel = if chrome.is_preview {
        design_panel_html(chrome.selected)
    } else {
        String::new()
    };

    let reload_script = if chrome.is_preview {
        r#"<script>
        // Hot reload via Server-Sent Events
        const eventSource = new EventSource('/_reload');
        eventSource.onmessage = () => location.reload();
        eventSource.onerror = () => eventSource.close();
    </script>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <meta name="description" content="{}">
    <link rel="stylesheet" href="/styles.css">
</head>
<body>
    {}
    <header class="site"><div class="container">
        <div class="brand"><strong>{}</strong></div>
        <div class="hours">{}</div>
        <div class="phone"><a href="tel:{}">{}</a></div>
    </div></header>
    {}
    <footer class="site"><div class="container">
        <p>{} &middot; {} &middot; {}</p>
        <p>{}</p>
    </div></footer>
    {}
    {}
</body>
</html>"#,
        html_escape(&chrome.title),
        html_escape(&chrome.description),
        preview_badge,
        html_escape(&business.name),
        html_escape(&business.hours.display),
        html_escape(&business.phone.dial),
        html_escape(&business.phone.display),
        body,
        html_escape(&business.name),
        html_escape(&business.location_label()),
        html_escape(&business.phone.display),
        html_escape(&business.licenses.join(" · ")),
        design_panel,
        reload_script,
    )
}

fn design_panel_html(selected: Vertical) -> String {
    let options: String = Vertical::ALL
        .iter()
        .map(|v| {
            let is_selected = if *v == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                v.slug(),
                is_selected,
                v.label()
            )
        })
        .collect();

    format!(
        r#"<div class="design-panel">
        <label>Preview vertical<select id="vertical-select">{}</select></label>
        <script>
        document.getElementById('vertical-select').addEventListener('change', (e) => {{
            fetch('/design/vertical/' + e.target.value, {{ method: 'POST' }});
        }});
        </script>
    </div>"#,
        options
    )
}
