//! Resource table
//!
//! One entry per remote endpoint. The generic fetch engine in
//! [`ApiClient`](super::ApiClient) turns an entry plus its path parameters
//! into a request; accessors are thin wrappers over an entry.

use crate::template::PathParams;

/// Template variable holding the client ID
pub const CLIENT_ID_VAR: &str = "client_id";
/// Template variable holding the connector ID
pub const CONNECTOR_ID_VAR: &str = "connector_id";
/// Template variable holding a resource identifier
pub const ID_VAR: &str = "id";
/// Template variable holding free text (spaces become underscores)
pub const TEXT_VAR: &str = "text";

/// Kind of value a resource path takes after the client and connector IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// The path takes no client-supplied value
    None,
    /// An identifier substituted as given
    Id,
    /// Free text such as an address or a name
    Text,
}

/// A remote endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Stable name, used in logs and fallback errors
    pub name: &'static str,
    /// Path below `/api/v1`
    pub template: &'static str,
    /// What the caller supplies besides client and connector IDs
    pub argument: Argument,
    /// Heading used by the printers
    pub title: &'static str,
    /// Fields the printers always show, in order, with an `N/A` fallback
    pub display_fields: &'static [&'static str],
}

impl Resource {
    /// Whether the path is scoped to a client and connector
    pub fn is_scoped(&self) -> bool {
        self.template.contains(CLIENT_ID_VAR)
    }

    /// Path parameters for a scoped resource
    pub fn params(&self, client_id: &str, connector_id: &str, value: &str) -> PathParams {
        let params = PathParams::new()
            .with(CLIENT_ID_VAR, client_id)
            .with(CONNECTOR_ID_VAR, connector_id);

        match self.argument {
            Argument::None => params,
            Argument::Id => params.with(ID_VAR, value),
            Argument::Text => params.with_text(TEXT_VAR, value),
        }
    }

    /// Look a resource up by name
    pub fn by_name(name: &str) -> Option<&'static Resource> {
        ALL.iter().find(|resource| resource.name == name)
    }
}

pub const CLIENT_INFO: Resource = Resource {
    name: "client-info",
    template: "/clients/me",
    argument: Argument::None,
    title: "Client Information",
    display_fields: &["client_name", "client_id"],
};

pub const ENDPOINT_CATALOG: Resource = Resource {
    name: "endpoint-catalog",
    template: "/helpers/api-endpoints",
    argument: Argument::None,
    title: "Available API Endpoints",
    display_fields: &[
        "api_version",
        "http_verb_name",
        "endpoint_name",
        "endpoint_description",
        "developer_documentation_link",
    ],
};

const FILE_FIELDS: &[&str] = &[
    "file_id",
    "file_number",
    "property_address",
    "file_status",
    "open_date",
    "close_date",
];

pub const FILE_BY_ADDRESS: Resource = Resource {
    name: "file-by-address",
    template: "/files/{{ client_id }}/{{ connector_id }}/address/{{ text }}",
    argument: Argument::Text,
    title: "Files Matching Address",
    display_fields: FILE_FIELDS,
};

pub const FILE_BY_ID: Resource = Resource {
    name: "file-by-id",
    template: "/files/{{ client_id }}/{{ connector_id }}/{{ id }}",
    argument: Argument::Id,
    title: "File Information",
    display_fields: FILE_FIELDS,
};

pub const FILE_BY_LENDER_NUMBER: Resource = Resource {
    name: "file-by-lender-number",
    template: "/files/{{ client_id }}/{{ connector_id }}/lender/{{ id }}",
    argument: Argument::Id,
    title: "Files Matching Lender Loan Number",
    display_fields: FILE_FIELDS,
};

pub const FILE_PARTNERS: Resource = Resource {
    name: "file-partners",
    template: "/files/{{ client_id }}/{{ connector_id }}/{{ id }}/partners",
    argument: Argument::Id,
    title: "File Partners",
    display_fields: &["partner_type", "partner_name", "contact_name", "phone", "email"],
};

pub const BUYER_INFO: Resource = Resource {
    name: "buyer-info",
    template: "/buyers/{{ client_id }}/{{ connector_id }}/{{ id }}",
    argument: Argument::Id,
    title: "Buyer Information",
    display_fields: &["buyer_id", "first_name", "last_name", "email", "phone"],
};

pub const DISBURSEMENT_INFO: Resource = Resource {
    name: "disbursement-info",
    template: "/disbursements/{{ client_id }}/{{ connector_id }}/{{ id }}",
    argument: Argument::Id,
    title: "Disbursements",
    display_fields: &["payee_name", "amount", "check_number", "disbursement_date"],
};

pub const PROPERTY_INFO: Resource = Resource {
    name: "property-info",
    template: "/properties/{{ client_id }}/{{ connector_id }}/{{ id }}",
    argument: Argument::Id,
    title: "Property Information",
    display_fields: &["property_id", "address", "city", "state", "zip", "county"],
};

pub const RECORDING_INFO: Resource = Resource {
    name: "recording-info",
    template: "/recordings/{{ client_id }}/{{ connector_id }}/{{ id }}",
    argument: Argument::Id,
    title: "Recording Information",
    display_fields: &[
        "document_type",
        "recording_date",
        "book",
        "page",
        "instrument_number",
    ],
};

pub const SELLER_INFO: Resource = Resource {
    name: "seller-info",
    template: "/sellers/{{ client_id }}/{{ connector_id }}/{{ id }}",
    argument: Argument::Id,
    title: "Seller Information",
    display_fields: &["seller_id", "first_name", "last_name", "email", "phone"],
};

pub const SETTLEMENT_FEES: Resource = Resource {
    name: "settlement-fees",
    template: "/settlements/{{ client_id }}/{{ connector_id }}/{{ id }}/fees",
    argument: Argument::Id,
    title: "Settlement Fees",
    display_fields: &["fee_description", "buyer_amount", "seller_amount"],
};

pub const SETTLEMENT_INFO: Resource = Resource {
    name: "settlement-info",
    template: "/settlements/{{ client_id }}/{{ connector_id }}/{{ id }}",
    argument: Argument::Id,
    title: "Settlement Information",
    display_fields: &["settlement_date", "settlement_agent", "sales_price", "loan_amount"],
};

pub const POLICY_INFO: Resource = Resource {
    name: "policy-info",
    template: "/policies/{{ client_id }}/{{ connector_id }}/{{ id }}",
    argument: Argument::Id,
    title: "Policies Issued",
    display_fields: &["policy_number", "policy_type", "policy_amount", "issue_date"],
};

pub const REFERRAL_AGENT_LOOKUP: Resource = Resource {
    name: "referral-agent-lookup",
    template: "/custom/{{ client_id }}/{{ connector_id }}/referral-agents/name/{{ text }}",
    argument: Argument::Text,
    title: "Matching Referral Agents",
    display_fields: &["referral_agent_id", "name", "company", "email", "phone"],
};

pub const REFERRAL_AGENT_SALES_VOLUME: Resource = Resource {
    name: "referral-agent-sales-volume",
    template: "/custom/{{ client_id }}/{{ connector_id }}/referral-agents/{{ id }}/sales-volume",
    argument: Argument::Id,
    title: "Referral Agent Sales Volume",
    display_fields: &[
        "referral_agent_id",
        "total_files",
        "total_sales_volume",
        "average_sales_price",
    ],
};

/// Every known resource
pub const ALL: &[Resource] = &[
    CLIENT_INFO,
    ENDPOINT_CATALOG,
    FILE_BY_ADDRESS,
    FILE_BY_ID,
    FILE_BY_LENDER_NUMBER,
    FILE_PARTNERS,
    BUYER_INFO,
    DISBURSEMENT_INFO,
    PROPERTY_INFO,
    RECORDING_INFO,
    SELLER_INFO,
    SETTLEMENT_FEES,
    SETTLEMENT_INFO,
    POLICY_INFO,
    REFERRAL_AGENT_LOOKUP,
    REFERRAL_AGENT_SALES_VOLUME,
];
