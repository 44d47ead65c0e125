// SPDX-License-Identifier: MPL-2.0
//! Wire types shared with the remote inventory/auth API.
//!
//! Field names follow the server's JSON exactly (notably `_id` for
//! identifiers). These types are deliberately dumb: all invariants about
//! pricing and stock are enforced server-side.

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// The authenticated user, as returned by login, register, and the
/// session probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Some deployments echo a token alongside the session cookie. The
    /// cookie is the ambient credential; the token is accepted and unused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Credentials submitted to the login endpoint. Transient: held only for
/// the duration of the request.
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Credentials submitted to the registration endpoint. `role` defaults
/// server-side when omitted.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// A catalog entry. The client only ever holds a point-in-time snapshot;
/// the remote inventory is the single source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl Sweet {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Low-stock flag shown on catalog cards (in stock but nearly gone).
    pub fn low_stock(&self) -> bool {
        self.quantity > 0 && self.quantity <= 5
    }
}

/// Body for creating or fully replacing a sweet. Produced exclusively by
/// [`crate::catalog::validate`], so the fields are already trimmed and
/// numeric by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweetPayload {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_deserializes_from_server_shape() {
        let body = r#"{"_id":"u1","name":"Asha","email":"a@b.com","role":"admin"}"#;
        let identity: Identity = serde_json::from_str(body).unwrap();
        assert_eq!(identity.id, "u1");
        assert_eq!(identity.role, Role::Admin);
        assert!(identity.is_admin());
        assert!(identity.token.is_none());
    }

    #[test]
    fn identity_accepts_optional_token() {
        let body = r#"{"_id":"u1","name":"Asha","email":"a@b.com","role":"user","token":"t"}"#;
        let identity: Identity = serde_json::from_str(body).unwrap();
        assert_eq!(identity.token.as_deref(), Some("t"));
        assert!(!identity.is_admin());
    }

    #[test]
    fn sweet_deserializes_from_server_shape() {
        let body = r#"{"_id":"s1","name":"Ladoo","category":"Sweet","price":10.5,"quantity":5}"#;
        let sweet: Sweet = serde_json::from_str(body).unwrap();
        assert_eq!(sweet.id, "s1");
        assert_eq!(sweet.quantity, 5);
        assert!(sweet.in_stock());
        assert!(sweet.low_stock());
    }

    #[test]
    fn sweet_with_ample_stock_is_not_low() {
        let body = r#"{"_id":"s1","name":"Ladoo","category":"Sweet","price":10.0,"quantity":6}"#;
        let sweet: Sweet = serde_json::from_str(body).unwrap();
        assert!(!sweet.low_stock());
    }

    #[test]
    fn out_of_stock_sweet_is_not_low_stock() {
        let body = r#"{"_id":"s1","name":"Ladoo","category":"Sweet","price":10.0,"quantity":0}"#;
        let sweet: Sweet = serde_json::from_str(body).unwrap();
        assert!(!sweet.in_stock());
        assert!(!sweet.low_stock());
    }

    #[test]
    fn register_credentials_omit_absent_role() {
        let creds = RegisterCredentials {
            name: "Asha".into(),
            email: "a@b.com".into(),
            password: "pw".into(),
            role: None,
        };
        let json = serde_json::to_string(&creds).unwrap();
        assert!(!json.contains("role"));
    }

    #[test]
    fn register_credentials_serialize_explicit_role() {
        let creds = RegisterCredentials {
            name: "Asha".into(),
            email: "a@b.com".into(),
            password: "pw".into(),
            role: Some(Role::Admin),
        };
        let json = serde_json::to_string(&creds).unwrap();
        assert!(json.contains(r#""role":"admin""#));
    }

    #[test]
    fn payload_serializes_all_four_fields() {
        let payload = SweetPayload {
            name: "Ladoo".into(),
            category: "Sweet".into(),
            price: 10.0,
            quantity: 5,
        };
        let json = serde_json::to_string(&payload).unwrap();
        for field in ["name", "category", "price", "quantity"] {
            assert!(json.contains(field), "missing field {field}");
        }
    }
}
