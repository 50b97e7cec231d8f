use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identification fields for the currently logged-in person or lead.
///
/// On top of the typed fields, `custom_attributes` carries arbitrary
/// caller-defined key/value pairs; they are flattened into the same mapping
/// when serialized.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAttributes {
    /// Email address of the current user. Users only, not leads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Stable user id of the current user. Users only, not leads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Unix timestamp (seconds) when the user signed up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Name of the current user or lead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Phone number of the current user or lead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Reserved attribute; the widget overwrites it with the time of the
    /// last request and ignores values set here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_request_at: Option<String>,

    /// Email unsubscribe status of the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed_from_emails: Option<bool>,

    /// Forces the messenger locale instead of the browser language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_override: Option<String>,

    // UTM parameters are tracked automatically by the widget and cannot be
    // overridden; they are carried for completeness of the documented surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,

    /// Avatar image associated with the current record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<AvatarAttributes>,

    /// Identity-verification digest. Users only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_hash: Option<String>,

    /// The user's current company.
    ///
    /// `company_id` is the minimum the widget requires to attach a company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyAttributes>,

    /// All companies the user is associated with.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub companies: Vec<CompanyAttributes>,

    /// Caller-defined extra attributes, serialized inline with the typed
    /// fields. Keys are attribute names; values may be any JSON value.
    #[serde(flatten)]
    pub custom_attributes: Map<String, Value>,
}

/// An organization record attached to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAttributes {
    /// Identifier of the company. Required for the widget to accept the record.
    pub company_id: String,

    /// Name of the company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Time the company was created in the integrating system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Name of the plan the company is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,

    /// Revenue the company generates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_spend: Option<f64>,

    /// Reserved attribute; reported by the widget, never updated from here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u64>,

    /// Number of employees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Company website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Industry the company operates in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl CompanyAttributes {
    /// Creates a company record with the required identifier and nothing else.
    #[must_use]
    pub fn new(company_id: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            name: None,
            created_at: None,
            plan: None,
            monthly_spend: None,
            user_count: None,
            size: None,
            website: None,
            industry: None,
        }
    }
}

/// An avatar image record. The `type` discriminator is always `"avatar"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarAttributes {
    #[serde(rename = "type")]
    pub kind: String,

    /// Image URL; must be served over https.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl AvatarAttributes {
    /// Creates an avatar record pointing at `image_url`.
    #[must_use]
    pub fn new(image_url: impl Into<String>) -> Self {
        Self { kind: "avatar".to_owned(), image_url: Some(image_url.into()) }
    }
}

impl Default for AvatarAttributes {
    fn default() -> Self {
        Self { kind: "avatar".to_owned(), image_url: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn none_fields_are_omitted_from_serialization() {
        let user = UserAttributes { name: Some("Ann".to_owned()), ..Default::default() };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({ "name": "Ann" }));
    }

    #[test]
    fn custom_attributes_flatten_inline() {
        let mut user = UserAttributes { email: Some("ann@example.com".to_owned()), ..Default::default() };
        user.custom_attributes.insert("plan_tier".to_owned(), json!("gold"));
        user.custom_attributes.insert("logins".to_owned(), json!(42));

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({ "email": "ann@example.com", "plan_tier": "gold", "logins": 42 })
        );
    }

    #[test]
    fn unknown_keys_deserialize_into_the_custom_bag() {
        let user: UserAttributes =
            serde_json::from_value(json!({ "name": "Ann", "favorite_color": "teal" })).unwrap();
        assert_eq!(user.name.as_deref(), Some("Ann"));
        assert_eq!(user.custom_attributes.get("favorite_color"), Some(&json!("teal")));
    }

    #[test]
    fn avatar_serializes_with_fixed_discriminator() {
        let avatar = AvatarAttributes::new("https://example.com/a.png");
        let value = serde_json::to_value(&avatar).unwrap();
        assert_eq!(value, json!({ "type": "avatar", "image_url": "https://example.com/a.png" }));
    }

    #[test]
    fn company_requires_only_its_identifier() {
        let company = CompanyAttributes::new("42");
        let value = serde_json::to_value(&company).unwrap();
        assert_eq!(value, json!({ "company_id": "42" }));
    }
}
