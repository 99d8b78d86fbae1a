//! Built-in article catalogue.
//!
//! The catalogue is a compile-time constant: there is no write path, so it
//! can be shared freely across threads without synchronisation.

use crate::types::Article;

/// Default number of entries returned by [`get_related_articles`]
pub const DEFAULT_RELATED_COUNT: usize = 2;

static ARTICLES: [Article; 4] = [
    Article {
        id: 1,
        title: "Getting Started with Server-Side Rendering",
        date: "2025-01-15",
        excerpt: "The core ideas behind server-side rendering and how to get a first project running...",
        content: "# Getting Started with Server-Side Rendering\n\n\
This article walks through the core concepts of server-side rendering and how to use them.\n\n\
## What is SSR?\n\n\
Server-side rendering produces the HTML for a page on the server and sends the finished markup to the client.\n\n\
## Advantages\n\n\
- Fast first paint\n\
- Good search engine visibility\n\
- A consistent development experience\n\
- Less work for the client device\n\n\
## Quick start\n\n\
1. Install the framework\n\
2. Create the first page\n\
3. Configure routes\n\
4. Add data fetching",
    },
    Article {
        id: 2,
        title: "Data Fetching in Depth",
        date: "2025-01-20",
        excerpt: "A closer look at the data fetching primitives, from async data hooks to typed fetch helpers...",
        content: "# Data Fetching in Depth\n\n\
There are several ways to load data; this article covers each of them.\n\n\
## Async data hooks\n\n\
The async data hook is the most common primitive and keeps server and client data consistent.\n\n\
## Fetch helpers\n\n\
The fetch helper wraps the async data hook with a smaller API.\n\n\
## Prefetching\n\n\
Data can be prefetched before navigation to make transitions feel instant.",
    },
    Article {
        id: 3,
        title: "Performance Tuning Best Practices",
        date: "2025-01-25",
        excerpt: "Practical performance work for rendered sites: code splitting, image optimisation and more...",
        content: "# Performance Tuning Best Practices\n\n\
Performance is a central part of modern web development; these are the techniques that matter most.\n\n\
## Code splitting\n\n\
Bundles are split automatically so the initial download stays small.\n\n\
## Image optimisation\n\n\
Responsive images and lazy loading keep pages light.\n\n\
## Caching\n\n\
A sensible caching policy cuts down on server round trips.",
    },
    Article {
        id: 4,
        title: "Working with the Component Ecosystem",
        date: "2025-01-30",
        excerpt: "How the framework builds on its component model, composition functions and state stores...",
        content: "# Working with the Component Ecosystem\n\n\
The framework is built on top of a modern component library and uses its newest features.\n\n\
## Composition functions\n\n\
Composition functions make component logic easier to maintain.\n\n\
## State stores\n\n\
A dedicated store library provides modern state management.\n\n\
## Components\n\n\
Reusable UI is built from small single-purpose components.",
    },
];

/// All bundled articles in publication order
pub fn articles() -> &'static [Article] {
    &ARTICLES
}

/// Anything that can identify an article: integers, or strings holding one.
pub trait ArticleKey {
    /// The numeric article id, or `None` if this key is not a number.
    fn article_id(&self) -> Option<i64>;
}

macro_rules! impl_article_key_for_int {
    ($($ty:ty),*) => {
        $(
            impl ArticleKey for $ty {
                fn article_id(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_article_key_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl ArticleKey for str {
    fn article_id(&self) -> Option<i64> {
        parse_leading_int(self)
    }
}

impl ArticleKey for String {
    fn article_id(&self) -> Option<i64> {
        parse_leading_int(self)
    }
}

impl<T: ArticleKey + ?Sized> ArticleKey for &T {
    fn article_id(&self) -> Option<i64> {
        (**self).article_id()
    }
}

/// Lenient integer parsing for ids taken from URLs and user input.
///
/// Leading whitespace and a sign are allowed, then the longest run of
/// decimal digits is used and anything after it ignored (`"12abc"` is 12).
/// Returns `None` when there are no digits at all.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Look up an article by id
pub fn get_article_by_id(id: impl ArticleKey) -> Option<&'static Article> {
    let id = id.article_id()?;
    ARTICLES.iter().find(|article| article.id == id)
}

/// Up to `count` articles other than `id`, in catalogue order.
///
/// An id that is not a number excludes nothing.
pub fn get_related_articles(id: impl ArticleKey, count: usize) -> Vec<&'static Article> {
    let exclude = id.article_id();
    ARTICLES
        .iter()
        .filter(|article| Some(article.id) != exclude)
        .take(count)
        .collect()
}
