#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("could not format Markdown: {0}")]
    Format(#[from] std::io::Error),
    #[error("Markdown task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

fn options() -> comrak::Options {
    let mut options = comrak::Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options
}

/// Renders post content to HTML. Raw HTML in the source is not passed through.
pub async fn render(content: String) -> Result<String, RenderError> {
    tokio::task::spawn_blocking(move || render_blocking(&content)).await?
}

pub fn render_blocking(content: &str) -> Result<String, RenderError> {
    let options = options();
    let arena = comrak::Arena::new();
    let root = comrak::parse_document(&arena, content, &options);

    process_nodes(root);

    let mut html = Vec::new();
    comrak::format_html(root, &options, &mut html)?;
    Ok(String::from_utf8_lossy(&html).into_owned())
}

fn process_nodes<'a>(node: &'a comrak::nodes::AstNode<'a>) {
    process_node(node);
    for child in node.children() {
        process_nodes(child);
    }
}

fn process_node<'a>(node: &'a comrak::nodes::AstNode<'a>) {
    if let comrak::nodes::NodeValue::Link(link) = &mut node.data.borrow_mut().value {
        process_link(link);
    }
}

// `post:12` links to another post on this blog
fn process_link(link: &mut comrak::nodes::NodeLink) {
    let Some(post_id) = link.url.strip_prefix("post:") else {
        return;
    };
    if let Some(post_id) = crate::blog::parse_post_id(post_id) {
        link.url = crate::blog::post_path(post_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_common_markdown() {
        let html = render_blocking("# 見出し\n\n**太字** と ~~取り消し~~").unwrap();

        assert!(html.contains("<h1>見出し</h1>"), "{html}");
        assert!(html.contains("<strong>太字</strong>"), "{html}");
        assert!(html.contains("<del>取り消し</del>"), "{html}");
    }

    #[test]
    fn raw_html_is_not_passed_through() {
        let html = render_blocking("hello <script>alert(1)</script>").unwrap();

        assert!(!html.contains("<script>"), "{html}");
    }

    #[test]
    fn post_links_point_at_detail_pages() {
        let html = render_blocking("[前の投稿](post:12) と [外部](https://example.com)").unwrap();

        assert!(html.contains(r#"<a href="/posts/12">前の投稿</a>"#), "{html}");
        assert!(html.contains(r#"<a href="https://example.com">外部</a>"#), "{html}");
    }

    #[test]
    fn malformed_post_links_are_left_alone() {
        let html = render_blocking("[x](post:abc)").unwrap();

        assert!(html.contains(r#"href="post:abc""#), "{html}");
    }

    #[tokio::test]
    async fn renders_off_the_runtime() {
        let html = render("plain text".to_owned()).await.unwrap();

        assert_eq!(html.trim(), "<p>plain text</p>");
    }
}
