//! Read-only query primitives over a parsed HTML tree.

use crate::constants::REGEXPS;
use crate::error::{MetadataError, Result};
use crate::utils;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| MetadataError::InvalidSelector(format!("{css}: {e:?}")))
}

/// Borrowed view of a document exposing only the queries metadata
/// resolution needs. Nothing here mutates the tree.
#[derive(Clone, Copy)]
pub(crate) struct Document<'a> {
    html: &'a Html,
}

impl<'a> Document<'a> {
    pub(crate) fn new(html: &'a Html) -> Self {
        Self { html }
    }

    /// All elements with the given tag name, in document order.
    pub(crate) fn elements_by_tag(&self, tag: &str) -> Result<Vec<ElementRef<'a>>> {
        let selector = selector(tag)?;
        Ok(self.html.select(&selector).collect())
    }

    /// First element whose `id` attribute equals `id`.
    pub(crate) fn element_by_id(&self, id: &str) -> Option<ElementRef<'a>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().id() == Some(id))
    }

    /// Text of the first `<title>` element, whitespace-normalized.
    pub(crate) fn title(&self) -> Result<Option<String>> {
        let selector = selector("title")?;
        Ok(self
            .html
            .select(&selector)
            .next()
            .map(|title| utils::normalize_whitespace(&title.text().collect::<String>())))
    }

    /// Whether any `h1`/`h2` holds a single text node whose text, with
    /// whitespace normalized, is `target`. Text split across inline children
    /// does not match.
    pub(crate) fn has_heading_with_text(&self, target: &str) -> Result<bool> {
        let selector = selector("h1, h2")?;
        Ok(self.html.select(&selector).any(|heading| {
            heading.descendants().any(|node| {
                matches!(node.value(), Node::Text(text) if utils::normalize_whitespace(text) == target)
            })
        }))
    }

    /// Encoding declared by `<meta charset>` or an `http-equiv` Content-Type.
    pub(crate) fn declared_charset(&self) -> Option<String> {
        let metas = self.elements_by_tag("meta").ok()?;

        let from_charset = metas.iter().find_map(|meta| {
            meta.value()
                .attr("charset")
                .map(str::trim)
                .filter(|charset| !charset.is_empty())
        });
        if let Some(charset) = from_charset {
            return Some(charset.to_string());
        }

        metas
            .iter()
            .filter(|meta| {
                meta.value()
                    .attr("http-equiv")
                    .map(|equiv| equiv.trim().eq_ignore_ascii_case("content-type"))
                    .unwrap_or(false)
            })
            .filter_map(|meta| meta.value().attr("content"))
            .find_map(|content| {
                REGEXPS
                    .content_type_charset
                    .captures(content)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string())
            })
    }
}

/// Attribute value, treating an absent attribute as the empty string.
pub(crate) fn attr<'e>(element: &ElementRef<'e>, name: &str) -> &'e str {
    element.value().attr(name).unwrap_or("")
}
