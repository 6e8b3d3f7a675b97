//! Request and response types for the stack catalog.

use serde::{Deserialize, Serialize};

/// Which layer of a project a stack targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StackType {
    #[default]
    Frontend,
    Backend,
    Fullstack,
}

impl StackType {
    pub fn label(self) -> &'static str {
        match self {
            StackType::Frontend => "Frontend",
            StackType::Backend => "Backend",
            StackType::Fullstack => "Fullstack",
        }
    }

    /// Numeric discriminant the list endpoint expects in query strings.
    fn query_value(self) -> u8 {
        match self {
            StackType::Frontend => 0,
            StackType::Backend => 1,
            StackType::Fullstack => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortBy {
    Popularity,
    Rating,
    PostedDate,
}

impl SortBy {
    fn query_value(self) -> u8 {
        match self {
            SortBy::Popularity => 0,
            SortBy::Rating => 1,
            SortBy::PostedDate => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortingOrder {
    Ascending,
    Descending,
}

impl SortingOrder {
    fn query_value(self) -> u8 {
        match self {
            SortingOrder::Ascending => 0,
            SortingOrder::Descending => 1,
        }
    }
}

/// One package inside a stack listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub package_name: String,
    pub package_link: String,
    #[serde(default)]
    pub is_verified: bool,
}

/// A stack listing as the catalog endpoints report it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub stack_type: StackType,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(rename = "stackInfo", default)]
    pub packages: Vec<PackageInfo>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStackRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub stack_type: StackType,
    #[serde(rename = "stackInfo")]
    pub packages: Vec<PackageInfo>,
}

/// Filters and paging for the stack list endpoint. Unset fields are left to
/// backend defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct StackQuery {
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortingOrder>,
    pub stack_type: Option<StackType>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl StackQuery {
    /// Renders the query string the list endpoint expects, empty when no
    /// filter is set.
    pub fn to_query_string(self) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(sort_by) = self.sort_by {
            params.push(format!("StackSortBy={}", sort_by.query_value()));
        }
        if let Some(sort_order) = self.sort_order {
            params.push(format!("SortingOrder={}", sort_order.query_value()));
        }
        if let Some(stack_type) = self.stack_type {
            params.push(format!("StackType={}", stack_type.query_value()));
        }
        if let Some(page_number) = self.page_number {
            params.push(format!("PageNumber={page_number}"));
        }
        if let Some(page_size) = self.page_size {
            params.push(format!("PageSize={page_size}"));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// The list endpoint nests items under `data` while paging counters sit next
/// to the envelope flag.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<StackItems>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub has_previous_page: bool,
    #[serde(default)]
    pub has_next_page: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct StackItems {
    #[serde(default)]
    pub items: Vec<StackSummary>,
}

/// One page of stack listings, flattened for the UI.
#[derive(Clone, Debug, Default)]
pub struct StackPage {
    pub items: Vec<StackSummary>,
    pub total_count: u64,
    pub page_number: u32,
    pub total_pages: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_is_empty_without_filters() {
        assert_eq!(StackQuery::default().to_query_string(), "");
    }

    #[test]
    fn query_string_renders_numeric_discriminants() {
        let query = StackQuery {
            sort_by: Some(SortBy::Rating),
            sort_order: Some(SortingOrder::Descending),
            stack_type: Some(StackType::Backend),
            page_number: Some(2),
            page_size: Some(25),
        };

        assert_eq!(
            query.to_query_string(),
            "?StackSortBy=1&SortingOrder=1&StackType=1&PageNumber=2&PageSize=25"
        );
    }

    #[test]
    fn stack_summary_reads_wire_shape() {
        let json = r#"{
            "id": "s1",
            "name": "mern",
            "description": "Full JS stack",
            "type": "FULLSTACK",
            "downloads": 1500,
            "stackInfo": [
                {"packageName": "react", "packageLink": "https://npmjs.com/react", "isVerified": true}
            ]
        }"#;
        let stack: StackSummary = serde_json::from_str(json).expect("Failed to deserialize");

        assert_eq!(stack.stack_type, StackType::Fullstack);
        assert_eq!(stack.downloads, 1500);
        assert_eq!(stack.packages.len(), 1);
        assert!(stack.packages[0].is_verified);
        assert_eq!(stack.author, None);
    }

    #[test]
    fn list_response_reads_paging_next_to_envelope() {
        let json = r#"{
            "success": true,
            "data": {"items": []},
            "totalCount": 42,
            "pageNumber": 3,
            "pageSize": 20,
            "totalPages": 3,
            "hasPreviousPage": true,
            "hasNextPage": false
        }"#;
        let response: StackListResponse = serde_json::from_str(json).expect("Failed to deserialize");

        assert!(response.success);
        assert_eq!(response.total_count, 42);
        assert_eq!(response.page_number, 3);
        assert!(response.has_previous_page);
        assert!(!response.has_next_page);
    }
}
