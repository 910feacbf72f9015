use serde::{Deserialize, Serialize};

/// 页面上的一个可下载文档链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub name: String,
    pub url: String,
}

impl FileReference {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// 联系人信息，三个子字段各自可选
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// 数据源固定的合同元数据（来自站点配置，不从页面抽取）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMetadata {
    pub buyer_lead_agency: String,
    pub cooperative_language: bool,
    pub buyer_lead_agency_state: String,
    pub cooperative_affiliation: String,
    pub contract_type: String,
    pub service_area_national: bool,
}

impl Default for ContractMetadata {
    fn default() -> Self {
        Self {
            buyer_lead_agency: "Sourcewell".to_string(),
            cooperative_language: true,
            buyer_lead_agency_state: "MN".to_string(),
            cooperative_affiliation: "Sourcewell".to_string(),
            contract_type: "COMPETITIVELY_BID_CONTRACT".to_string(),
            service_area_national: true,
        }
    }
}

/// 单个合同详情页的输出记录
///
/// 字段只有在对应抽取器得到非空结果时才会被序列化，缺失字段直接省略而不是写 null。
/// 字段声明顺序即 JSON 输出顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    #[serde(flatten)]
    pub metadata: ContractMetadata,
    pub source_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppliers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_files: Option<Vec<FileReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amendments_files: Option<Vec<FileReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_solicitation_files: Option<Vec<FileReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_tabulation_files: Option<Vec<FileReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_docs_files: Option<Vec<FileReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_files: Option<Vec<FileReference>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_contacts: Option<Vec<Contact>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_contacts: Option<Vec<Contact>>,
}

impl ContractRecord {
    /// 创建只包含固定元数据和来源 URL 的空记录
    pub fn new(metadata: ContractMetadata, source_url: impl Into<String>) -> Self {
        Self {
            metadata,
            source_url: source_url.into(),
            suppliers: None,
            title: None,
            contract_number: None,
            expiration: None,
            summary: None,
            effective: None,
            contract_files: None,
            amendments_files: None,
            bid_solicitation_files: None,
            bid_tabulation_files: None,
            other_docs_files: None,
            pricing_files: None,
            supplier_contacts: None,
            buyer_contacts: None,
        }
    }
}

/// 空字符串视为缺失
pub fn non_empty_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 空列表视为缺失
pub fn non_empty_list<T>(items: Option<Vec<T>>) -> Option<Vec<T>> {
    items.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let record = ContractRecord::new(
            ContractMetadata::default(),
            "https://www.sourcewell-mn.gov/cooperative-purchasing/020817-acr",
        );
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 7);
        assert_eq!(obj["buyer_lead_agency"], "Sourcewell");
        assert_eq!(obj["buyer_lead_agency_state"], "MN");
        assert_eq!(obj["contract_type"], "COMPETITIVELY_BID_CONTRACT");
        assert_eq!(obj["service_area_national"], true);
        assert!(!obj.contains_key("title"));
        assert!(!obj.contains_key("pricing_files"));
    }

    #[test]
    fn test_empty_contact_serializes_as_empty_object() {
        let mut record = ContractRecord::new(ContractMetadata::default(), "u");
        record.buyer_contacts = Some(vec![Contact::default()]);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""buyer_contacts":[{}]"#));
    }

    #[test]
    fn test_field_order_follows_declaration() {
        let mut record = ContractRecord::new(ContractMetadata::default(), "u");
        record.title = Some("Roofing".to_string());
        record.suppliers = Some("ACME".to_string());

        let json = serde_json::to_string(&record).unwrap();
        let source = json.find("source_url").unwrap();
        let suppliers = json.find("suppliers").unwrap();
        let title = json.find("title").unwrap();
        assert!(source < suppliers && suppliers < title);
    }

    #[test]
    fn test_non_empty_helpers() {
        assert_eq!(non_empty_text(Some(String::new())), None);
        assert_eq!(non_empty_text(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty_list::<u8>(Some(vec![])), None);
        assert_eq!(non_empty_list(Some(vec![1])), Some(vec![1]));
    }
}
