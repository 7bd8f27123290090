use chrono::{DateTime, Utc};
use leptos::{IntoView, View};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "FORBIDDEN")
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "DECODE_ERROR")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}

/// Why a record from the API was rejected at the fetch boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("record is missing `{0}`")]
    MissingField(&'static str),
    #[error("record has a negative price ({0})")]
    NegativePrice(f64),
}

impl From<RecordError> for ApiError {
    fn from(error: RecordError) -> Self {
        ApiError::decode(error.to_string())
    }
}

/// Accepts `12000`, `12000.5` or `"12000"`; anything else becomes `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Strings pass through; any other JSON type becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Accepts `2020` or `"2020"`; anything else becomes `None`.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    })
}

/// Identifier as sent by the API: a string, or a number rendered as text.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Wire shape of a catalog record. Each field is decoded on its own so that
/// a badly typed optional field never rejects the whole record.
#[derive(Debug, Default, Deserialize)]
struct RawCar {
    #[serde(rename = "_id", default, deserialize_with = "lenient_id")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    img: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_year")]
    model_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_year")]
    year: Option<i32>,
}

impl From<RawCar> for Car {
    /// `_id` wins over `id`, `image` over `img`, `model_year` over `year`.
    fn from(raw: RawCar) -> Self {
        Car {
            id: raw.mongo_id.or(raw.id).unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            price: raw.price,
            image: raw.image.or(raw.img),
            description: raw.description,
            brand: raw.brand,
            model_year: raw.model_year.or(raw.year),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    pub id: String,
    pub name: String,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub model_year: Option<i32>,
}

impl Car {
    pub fn from_value(raw: Value) -> Result<Self, RecordError> {
        let raw: RawCar =
            serde_json::from_value(raw).map_err(|e| RecordError::Malformed(e.to_string()))?;
        Car::from(raw).validate()
    }

    fn validate(self) -> Result<Self, RecordError> {
        if self.id.trim().is_empty() {
            return Err(RecordError::MissingField("id"));
        }
        if self.name.trim().is_empty() {
            return Err(RecordError::MissingField("name"));
        }
        if let Some(price) = self.price {
            if price < 0.0 {
                return Err(RecordError::NegativePrice(price));
            }
        }
        Ok(self)
    }

    pub fn display_price(&self) -> String {
        self.price
            .map(|p| format!("${:.0}", p))
            .unwrap_or_else(|| "Price on request".to_string())
    }
}

/// How many catalog items to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogLimit {
    #[default]
    All,
    First(u32),
}

impl CatalogLimit {
    pub fn path_segment(&self) -> String {
        match self {
            CatalogLimit::All => "all".to_string(),
            CatalogLimit::First(n) => n.to_string(),
        }
    }
}

impl From<Option<u32>> for CatalogLimit {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(0) | None => CatalogLimit::All,
            Some(n) => CatalogLimit::First(n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub email: String,
    #[serde(default, alias = "displayName")]
    pub display_name: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

impl UserResponse {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }

    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.email
        } else {
            &self.display_name
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Shipped,
    Cancelled,
    #[serde(other)]
    Other,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "carId")]
    pub car_id: Option<String>,
    #[serde(default, alias = "carName")]
    pub car_name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    pub email: String,
    pub status: OrderStatus,
    #[serde(default, alias = "orderedAt")]
    pub ordered_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatus {
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCar {
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakeAdminRequest {
    pub email: String,
}

/// Acknowledgement body returned by mutating endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "modifiedCount", alias = "insertedId")]
    pub affected: Option<Value>,
}
