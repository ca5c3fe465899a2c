use pulldown_cmark::{Options, Parser, html};

/// Render a markdown post body to HTML
pub fn render(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
