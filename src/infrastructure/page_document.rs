//! 页面文档 - 基础设施层
//!
//! 持有解析后的 HTML，只暴露"按选择器查询"和"正则提炼"的能力

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// 解析后的只读 HTML 页面
///
/// 职责：
/// - 持有 `scraper::Html`
/// - 暴露选择器查询能力（文本、属性、正则）
/// - 不认识合同 / 文档分类
///
/// `scraper::Html` 不是 `Send`，文档只应在一次同步抽取调用内存在。
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// 解析完整的 HTML 文档
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// 第一个匹配的元素，用作后续查询的作用域
    pub fn scope(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }
}

/// 选择器查询能力
///
/// 文本查询只取元素的直接子文本节点（不含后代元素内的文本），
/// 去掉首尾空白，空白节点跳过。
pub trait NodeQuery {
    /// 所有匹配的元素（文档顺序）
    fn matching<'a>(&'a self, selector: &'a Selector) -> Box<dyn Iterator<Item = ElementRef<'a>> + 'a>;

    /// 所有匹配元素的直接文本节点
    fn texts(&self, selector: &Selector) -> Vec<String> {
        self.matching(selector).flat_map(own_texts).collect()
    }

    /// 第一个非空的直接文本节点
    fn first_text(&self, selector: &Selector) -> Option<String> {
        self.matching(selector).flat_map(own_texts).next()
    }

    /// 第一个带有该属性的匹配元素的属性值
    fn first_attr(&self, selector: &Selector, name: &str) -> Option<String> {
        self.matching(selector)
            .find_map(|el| el.value().attr(name))
            .map(str::to_string)
    }

    /// 在文本节点上按文档顺序做正则匹配，返回第一个匹配的第 1 个捕获组（去首尾空白）
    ///
    /// 没有捕获组的正则返回整个匹配。
    fn re_first(&self, selector: &Selector, re: &Regex) -> Option<String> {
        self.matching(selector)
            .flat_map(own_texts)
            .find_map(|text| {
                re.captures(&text).map(|caps| {
                    caps.get(1)
                        .or_else(|| caps.get(0))
                        .map(|m| m.as_str().trim().to_string())
                        .unwrap_or_default()
                })
            })
    }

    /// 所有匹配锚点的 (可见文本, href)，缺少任一项的锚点跳过
    fn links(&self, selector: &Selector) -> Vec<(String, String)> {
        self.matching(selector)
            .filter_map(|el| {
                let name = own_texts(el).next()?;
                let href = el.value().attr("href")?.trim();
                if href.is_empty() {
                    return None;
                }
                Some((name, href.to_string()))
            })
            .collect()
    }
}

impl NodeQuery for PageDocument {
    fn matching<'a>(&'a self, selector: &'a Selector) -> Box<dyn Iterator<Item = ElementRef<'a>> + 'a> {
        Box::new(self.html.select(selector))
    }
}

impl NodeQuery for ElementRef<'_> {
    fn matching<'a>(&'a self, selector: &'a Selector) -> Box<dyn Iterator<Item = ElementRef<'a>> + 'a> {
        let element: ElementRef<'a> = *self;
        Box::new(element.select(selector))
    }
}

/// 元素的直接子文本节点（已去首尾空白，跳过空白节点）
pub fn own_texts(element: ElementRef<'_>) -> impl Iterator<Item = String> + '_ {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
