//! Home page: keyword search, popular tags, and article cards.

use dioxus::prelude::*;

use crate::news::Article;
use crate::ui::components::Layout;

/// Quick searches shown under the form.
const POPULAR_TAGS: &[&str] = &["Technology", "Business", "Science", "Health", "Sports"];

/// Client-side JavaScript for the home page: wires every Summarize button
/// to the /summarize-ajax endpoint.
const HOME_SCRIPT: &str = r#"
async function summarize(btn) {
    const out = btn.closest('article').querySelector('.summary');
    btn.setAttribute('aria-busy', 'true');
    btn.disabled = true;
    try {
        const res = await fetch('/summarize-ajax', {
            method: 'POST',
            headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
            body: new URLSearchParams({ url: btn.dataset.url })
        });
        const data = await res.json();
        out.textContent = data.summary || data.error || 'No summary available.';
    } catch (e) {
        out.textContent = 'Summary failed: ' + e.message;
    } finally {
        btn.removeAttribute('aria-busy');
        btn.disabled = false;
    }
}
document.querySelectorAll('button[data-url]').forEach(btn => {
    btn.addEventListener('click', () => summarize(btn));
});
"#;

#[component]
pub fn HomePage(
    keyword: String,
    flash: Option<String>,
    current_date: String,
    articles: Vec<Article>,
) -> Element {
    rsx! {
        Layout {
            title: "News".to_string(),
            scripts: Some(HOME_SCRIPT.to_string()),

            hgroup {
                h1 { "NewsBrief" }
                p { "{current_date}" }
            }

            if let Some(message) = flash {
                article { class: "flash", "{message}" }
            }

            form { method: "post", action: "/", role: "search",
                input {
                    r#type: "search",
                    name: "keyword",
                    placeholder: "Search news by keyword...",
                    value: "{keyword}",
                }
                input { r#type: "submit", value: "Search" }
            }

            p { class: "tags",
                strong { "Popular: " }
                for tag in POPULAR_TAGS {
                    a { href: "/?q={tag}", "{tag}" }
                }
            }

            if !articles.is_empty() {
                h2 { "Results for \"{keyword}\"" }
                section { class: "article-grid",
                    for item in articles.iter() {
                        ArticleCard { item: item.clone() }
                    }
                }
            } else if !keyword.is_empty() {
                p { "No articles found for \"{keyword}\"." }
            }
        }
    }
}

#[component]
fn ArticleCard(item: Article) -> Element {
    let published = item
        .published_at
        .map(|at| at.format("%b %d, %Y").to_string());

    rsx! {
        article {
            if let Some(image) = &item.url_to_image {
                img { src: "{image}", alt: "" }
            }
            h3 {
                a {
                    href: "{item.url}",
                    target: "_blank",
                    rel: "noopener",
                    "{item.title}"
                }
            }
            p {
                small {
                    "{item.source.name}"
                    if let Some(date) = published {
                        " | {date}"
                    }
                }
            }
            if let Some(description) = &item.description {
                p { "{description}" }
            }
            p { class: "summary" }
            footer {
                button {
                    class: "secondary",
                    "data-url": "{item.url}",
                    "Summarize"
                }
            }
        }
    }
}
