use anyhow::{Context, Result};
use folio_core::{Article, articles, get_article_by_id, get_related_articles};

/// Print every bundled article
pub fn list(json: bool) -> Result<()> {
    let all: Vec<&Article> = articles().iter().collect();
    println!("{}", render_list(&all, json)?);
    Ok(())
}

/// Print one article; unknown ids are an error
pub fn show(id: &str, json: bool) -> Result<()> {
    let article =
        get_article_by_id(id).with_context(|| format!("Article not found: '{}'", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(article)?);
    } else {
        println!("{}", render_detail(article));
    }
    Ok(())
}

/// Print up to `count` articles other than `id`
pub fn related(id: &str, count: usize, json: bool) -> Result<()> {
    let related = get_related_articles(id, count);
    if related.is_empty() && !json {
        println!("No related articles");
        return Ok(());
    }
    println!("{}", render_list(&related, json)?);
    Ok(())
}

fn render_list(articles: &[&Article], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(articles)?);
    }

    Ok(articles
        .iter()
        .map(|article| render_row(article))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn render_row(article: &Article) -> String {
    format!("{:>3}  {}  {}", article.id, article.date, article.title)
}

fn render_detail(article: &Article) -> String {
    format!(
        "{}\n{}\n\n{}\n\n{}",
        article.title, article.date, article.excerpt, article.content
    )
}
