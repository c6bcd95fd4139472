//! API request and response types
//!
//! Field names follow the public JSON contract of the API.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// API error response
///
/// 400-class failures carry `erro`; 401/403/404 carry `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erro: Option<String>,
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Authentication
// ============================================================================

/// Login request
///
/// Both fields are optional so that a partial body is a failed login
/// rather than a malformed request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// ============================================================================
// Categories
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "nome_categoria não pode ser vazio"))]
    pub nome_categoria: String,
}

/// Category response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id_categoria: i64,
    pub nome_categoria: String,
}

// ============================================================================
// Providers
// ============================================================================

/// Create provider request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProviderRequest {
    #[validate(length(min = 1, message = "nome_prestador não pode ser vazio"))]
    pub nome_prestador: String,
    #[serde(deserialize_with = "int_or_numeric_string")]
    #[validate(range(min = 0, message = "tempo_experiencia não pode ser negativo"))]
    pub tempo_experiencia: i64,
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub id_categoria: i64,
}

/// Partial provider update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProviderRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "nome_prestador não pode ser vazio"))]
    pub nome_prestador: Option<String>,
    #[serde(default, deserialize_with = "optional_int_or_numeric_string")]
    #[validate(range(min = 0, message = "tempo_experiencia não pode ser negativo"))]
    pub tempo_experiencia: Option<i64>,
    #[serde(default, deserialize_with = "optional_int_or_numeric_string")]
    pub id_categoria: Option<i64>,
}

/// Provider response with its services and category nested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub codigo_prestador: i64,
    pub nome_prestador: String,
    pub tempo_experiencia: i64,
    pub id_categoria: i64,
    pub servicos: Vec<ServiceResponse>,
    /// `None` when the category reference does not resolve
    pub categoria: Option<CategoryResponse>,
}

// ============================================================================
// Services
// ============================================================================

/// Create service request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, message = "nome_servico não pode ser vazio"))]
    pub nome_servico: String,
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub codigo_prestador: i64,
}

/// Service response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id_servico: i64,
    pub nome_servico: String,
    /// Derived price, never the stored base value
    #[serde(with = "rust_decimal::serde::float")]
    pub vlr_servico: Decimal,
    pub codigo_prestador: i64,
}

// ============================================================================
// Numeric coercion
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i64<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            IntOrString::Int(v) => Ok(v),
            IntOrString::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid literal for integer: '{}'", s))),
        }
    }
}

/// Accept `6` as well as `"6"`
fn int_or_numeric_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?.into_i64()
}

fn optional_int_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(IntOrString::into_i64)
        .transpose()
}
