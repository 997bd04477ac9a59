// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::domain::models::website::NOT_FOUND;

/// 段落回退描述的最大字符数
pub const MAX_PARAGRAPH_CHARS: usize = 255;

static TITLE: Lazy<Selector> = Lazy::new(|| selector("title"));
static OG_SITE_NAME: Lazy<Selector> = Lazy::new(|| selector(r#"meta[property="og:site_name"]"#));
static META_DESCRIPTION: Lazy<Selector> = Lazy::new(|| selector(r#"meta[name="description"]"#));
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| selector("p"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

/// 从页面提取出的品牌信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    /// 品牌名称，提取失败时为 `Not found`
    pub brand_name: String,
    /// 描述，提取失败时为 `Not found`
    pub description: String,
}

/// 提取服务
///
/// 负责从 HTML 内容中按固定回退顺序提取品牌名称和描述
pub struct ExtractionService;

impl ExtractionService {
    /// 提取品牌名称和描述
    ///
    /// 解析是尽力而为的，畸形或非 HTML 内容只会得到占位值。
    ///
    /// - 品牌名称：`<title>` 文本 → `og:site_name` → `Not found`
    /// - 描述：`meta[name=description]` → 第一个 `<p>` 的前 255 个字符 → `Not found`
    pub fn extract(html_content: &str) -> PageSummary {
        let document = Html::parse_document(html_content);

        let brand_name = title_text(&document)
            .or_else(|| meta_content(&document, &OG_SITE_NAME))
            .unwrap_or_else(|| NOT_FOUND.to_string());

        let description = meta_content(&document, &META_DESCRIPTION)
            .or_else(|| first_paragraph(&document))
            .unwrap_or_else(|| NOT_FOUND.to_string());

        PageSummary {
            brand_name,
            description,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// 所有 `<title>` 元素的文本拼接
fn title_text(document: &Html) -> Option<String> {
    let text: String = document
        .select(&TITLE)
        .flat_map(|element| element.text())
        .collect();
    non_empty(&text)
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .and_then(non_empty)
}

fn first_paragraph(document: &Html) -> Option<String> {
    let text: String = document.select(&PARAGRAPH).next()?.text().collect();
    let truncated: String = text.trim().chars().take(MAX_PARAGRAPH_CHARS).collect();
    non_empty(&truncated)
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
