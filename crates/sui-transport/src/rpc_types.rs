//! Wire types of the Sui JSON-RPC methods the client calls.
//!
//! Only the fields the client reads are modelled; everything else in the
//! node's response is ignored on decode.

use std::collections::BTreeMap;

use flowx_types::NormalizedType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which parts of an object the node should include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDataOptions {
    #[serde(default)]
    pub show_type: bool,
    #[serde(default)]
    pub show_owner: bool,
    #[serde(default)]
    pub show_previous_transaction: bool,
    #[serde(default)]
    pub show_display: bool,
    #[serde(default)]
    pub show_content: bool,
    #[serde(default)]
    pub show_bcs: bool,
    #[serde(default)]
    pub show_storage_rebate: bool,
}

impl ObjectDataOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self) -> Self {
        self.show_type = true;
        self
    }

    pub fn with_owner(mut self) -> Self {
        self.show_owner = true;
        self
    }

    pub fn with_content(mut self) -> Self {
        self.show_content = true;
        self
    }

    pub fn with_display(mut self) -> Self {
        self.show_display = true;
        self
    }
}

/// Filter for `suix_getOwnedObjects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectDataFilter {
    StructType(String),
    Package(String),
    MoveModule { package: String, module: String },
    AddressOwner(String),
    ObjectId(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectResponseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ObjectDataFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ObjectDataOptions>,
}

impl ObjectResponseQuery {
    pub fn new(filter: Option<ObjectDataFilter>, options: ObjectDataOptions) -> Self {
        Self {
            filter,
            options: Some(options),
        }
    }
}

/// Parsed Move content of an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dataType", rename_all = "camelCase")]
pub enum ObjectContent {
    #[serde(rename_all = "camelCase")]
    MoveObject {
        #[serde(rename = "type")]
        type_: String,
        #[serde(default)]
        has_public_transfer: bool,
        fields: Value,
    },
    Package {
        #[serde(default)]
        disassembled: Value,
    },
}

impl ObjectContent {
    /// Struct fields of a Move object, `None` for packages.
    pub fn fields(&self) -> Option<&Value> {
        match self {
            ObjectContent::MoveObject { fields, .. } => Some(fields),
            ObjectContent::Package { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiObjectData {
    pub object_id: String,
    pub version: String,
    pub digest: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ObjectContent>,
}

/// One entry of an object query: the object, or why it could not be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiObjectResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SuiObjectData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl SuiObjectResponse {
    pub fn from_data(data: SuiObjectData) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }
}

/// A page of a cursor-paginated query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

pub type ObjectsPage = Page<SuiObjectResponse>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub coin_type: String,
    #[serde(default)]
    pub coin_object_count: u64,
    pub total_balance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFunction {
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub is_entry: bool,
    #[serde(default)]
    pub type_parameters: Vec<Value>,
    pub parameters: Vec<NormalizedType>,
    #[serde(rename = "return", default)]
    pub return_: Vec<NormalizedType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedModule {
    pub address: String,
    pub name: String,
    #[serde(default)]
    pub file_format_version: u32,
    #[serde(default)]
    pub exposed_functions: BTreeMap<String, NormalizedFunction>,
}
