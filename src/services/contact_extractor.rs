//! 联系人抽取 - 业务能力层
//!
//! 联系人信息位于标记字段之后紧邻的 `article` 中：
//! `strong` 为姓名，行内标签项为电话，行内标签项中的链接文本为邮箱。

use crate::error::{ExtractError, FieldResult};
use crate::infrastructure::{NodeQuery, PageDocument};
use crate::models::Contact;
use crate::services::selectors;
use scraper::Selector;

/// 联系人抽取器
pub struct ContactExtractor {
    supplier_scope: Selector,
    buyer_scope: Selector,
    name: Selector,
    phone: Selector,
    email: Selector,
}

impl ContactExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            supplier_scope: selectors::compile(selectors::SUPPLIER_CONTACT_SCOPE)?,
            buyer_scope: selectors::compile(selectors::BUYER_CONTACT_SCOPE)?,
            name: selectors::compile(selectors::CONTACT_NAME)?,
            phone: selectors::compile(selectors::CONTACT_PHONE)?,
            email: selectors::compile(selectors::CONTACT_EMAIL)?,
        })
    }

    /// 供应商联系人
    pub fn supplier_contacts(&self, doc: &PageDocument) -> FieldResult<Vec<Contact>> {
        Ok(Some(vec![self.contact_in(doc, &self.supplier_scope)]))
    }

    /// 采购方（Sourcewell）联系人
    pub fn buyer_contacts(&self, doc: &PageDocument) -> FieldResult<Vec<Contact>> {
        Ok(Some(vec![self.contact_in(doc, &self.buyer_scope)]))
    }

    /// 作用域不存在时返回空联系人，而不是空列表
    fn contact_in(&self, doc: &PageDocument, scope: &Selector) -> Contact {
        match doc.scope(scope) {
            Some(article) => Contact {
                name: article.first_text(&self.name),
                phone: article.first_text(&self.phone),
                email: article.first_text(&self.email),
            },
            None => Contact::default(),
        }
    }
}
