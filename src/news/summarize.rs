//! On-demand article summarization.
//!
//! Fetches an article page, scrapes paragraph text out of the HTML, and
//! produces a short extractive summary: sentences are scored by the
//! frequency of the content words they contain and the best few are emitted
//! in document order. Deterministic, no model downloads, good enough for a
//! preview next to the article link.

use regex::Regex;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::NewsClient;

/// Cap on scraped input; articles longer than this are summarized from
/// their lead.
const MAX_INPUT_CHARS: usize = 4096;
/// Character budget for the emitted summary.
const MAX_SUMMARY_CHARS: usize = 700;
/// At most this many sentences in a summary.
const MAX_SUMMARY_SENTENCES: usize = 4;

/// Common words ignored when scoring sentences.
const STOPWORDS: &[&str] = &[
    "about", "after", "also", "been", "before", "being", "between", "both", "could", "from",
    "have", "however", "into", "more", "most", "other", "over", "said", "says", "some", "such",
    "than", "that", "their", "there", "these", "they", "this", "through", "under", "were",
    "what", "when", "where", "which", "while", "will", "with", "would", "your",
];

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("invalid article url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to fetch article: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("article returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("no article content extracted")]
    NoContent,
}

impl NewsClient {
    /// Fetch an article and summarize its paragraph text.
    pub async fn summarize_article(&self, raw_url: &str) -> Result<String, SummarizeError> {
        let url = Url::parse(raw_url)?;
        let response = self.http().get(url).send().await?;
        if !response.status().is_success() {
            return Err(SummarizeError::Status(response.status()));
        }
        let html = response.text().await?;

        let text = extract_article_text(&html);
        if text.is_empty() {
            return Err(SummarizeError::NoContent);
        }

        debug!(url = raw_url, chars = text.len(), "summarizing article text");
        Ok(summarize_text(&text))
    }
}

/// Pull readable text out of `<p>` elements, dropping scripts, styles, and
/// inline markup.
fn extract_article_text(html: &str) -> String {
    let script_re = Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
    let style_re = Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
    let paragraph_re = Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p>").unwrap();
    let tag_re = Regex::new(r"(?s)<[^>]*>").unwrap();
    let ws_re = Regex::new(r"\s+").unwrap();

    let html = script_re.replace_all(html, " ");
    let html = style_re.replace_all(&html, " ");

    let mut paragraphs = Vec::new();
    for cap in paragraph_re.captures_iter(&html) {
        let inner = tag_re.replace_all(&cap[1], " ");
        let text = ws_re.replace_all(decode_entities(&inner).trim(), " ").to_string();
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }

    let mut joined = paragraphs.join(" ");
    if joined.len() > MAX_INPUT_CHARS {
        // Truncate on a char boundary
        let mut cut = MAX_INPUT_CHARS;
        while !joined.is_char_boundary(cut) {
            cut -= 1;
        }
        joined.truncate(cut);
    }
    joined
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Frequency-scored extractive summary in document order.
fn summarize_text(text: &str) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return text.trim().to_string();
    }

    let total_len: usize = sentences.iter().map(|s| s.len()).sum();
    if sentences.len() <= MAX_SUMMARY_SENTENCES && total_len <= MAX_SUMMARY_CHARS {
        return sentences.join(" ");
    }

    // Score each sentence by the average frequency of its content words
    let mut frequencies = std::collections::HashMap::new();
    for sentence in &sentences {
        for word in content_words(sentence) {
            *frequencies.entry(word).or_insert(0usize) += 1;
        }
    }

    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let words: Vec<String> = content_words(sentence).collect();
            let score = if words.is_empty() {
                0.0
            } else {
                let sum: usize = words.iter().map(|w| frequencies[w]).sum();
                sum as f64 / words.len() as f64
            };
            (index, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    // Take the best sentences within budget, then restore document order
    let mut picked: Vec<usize> = Vec::new();
    let mut used = 0;
    for (index, _) in scored {
        let len = sentences[index].len();
        if !picked.is_empty() && (picked.len() >= MAX_SUMMARY_SENTENCES || used + len > MAX_SUMMARY_CHARS) {
            continue;
        }
        picked.push(index);
        used += len + 1;
        if picked.len() >= MAX_SUMMARY_SENTENCES {
            break;
        }
    }
    picked.sort_unstable();

    picked
        .into_iter()
        .map(|index| sentences[index].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_sentences(text: &str) -> Vec<String> {
    let sentence_re = Regex::new(r#"[^.!?]+[.!?]+["')\]]*|[^.!?]+$"#).unwrap();
    sentence_re
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn content_words(sentence: &str) -> impl Iterator<Item = String> + '_ {
    sentence
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 3)
        .map(|w| w.to_lowercase())
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
}
