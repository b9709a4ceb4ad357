//! The field-level invocation payload sent by the GraphQL gateway and its
//! decoding into a typed [`Operation`].

use std::collections::HashMap;

use hub_core::{
    serde_json::{self, Value},
    uuid::Uuid,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    error::ResolverError,
    objects::{CreateCustomerInput, UpdateCustomerInput},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    #[serde(default)]
    pub arguments: Value,
    #[serde(default)]
    pub source: Value,
    #[serde(default)]
    pub identity: Option<Identity>,
    pub info: Info,
}

/// Caller identity, already verified upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub sub: Option<String>,
    pub username: Option<String>,
    pub claims: Option<HashMap<String, Value>>,
    #[serde(default)]
    pub source_ip: Vec<String>,
}

/// Metadata about the field being resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub field_name: String,
    pub parent_type_name: String,
    #[serde(default)]
    pub variables: HashMap<String, Value>,
    #[serde(default)]
    pub selection_set_list: Vec<String>,
    #[serde(default, rename = "selectionSetGraphQL")]
    pub selection_set_graphql: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::IntoStaticStr)]
pub enum ParentType {
    Query,
    Mutation,
}

/// A fully decoded customer operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Customer { customer_id: Uuid },
    CreateCustomer(CreateCustomerInput),
    UpdateCustomer(UpdateCustomerInput),
    DeleteCustomer { id: Uuid },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomerByIdArguments {
    customer_id: Uuid,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCustomerArguments {
    create_customer_input: CreateCustomerInput,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCustomerArguments {
    update_customer_input: UpdateCustomerInput,
}

#[derive(Deserialize)]
struct DeleteCustomerArguments {
    id: Uuid,
}

fn arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, ResolverError> {
    serde_json::from_value(arguments).map_err(Into::into)
}

impl Operation {
    /// Routes on parent type, then field name, then decodes the arguments
    /// for that field.
    ///
    /// # Errors
    /// Fails on an unknown parent type or field name, or when the arguments
    /// do not match the field's input shape.
    pub fn decode(info: &Info, args: Value) -> Result<Self, ResolverError> {
        let parent = info
            .parent_type_name
            .parse::<ParentType>()
            .map_err(|_| ResolverError::UnknownType(info.parent_type_name.clone()))?;

        match (parent, info.field_name.as_str()) {
            (ParentType::Query, "customer" | "customerById") => {
                let CustomerByIdArguments { customer_id } = arguments(args)?;

                Ok(Self::Customer { customer_id })
            },
            (ParentType::Mutation, "createCustomer") => {
                let CreateCustomerArguments {
                    create_customer_input,
                } = arguments(args)?;

                Ok(Self::CreateCustomer(create_customer_input))
            },
            (ParentType::Mutation, "updateCustomer") => {
                let UpdateCustomerArguments {
                    update_customer_input,
                } = arguments(args)?;

                Ok(Self::UpdateCustomer(update_customer_input))
            },
            (ParentType::Mutation, "deleteCustomer") => {
                let DeleteCustomerArguments { id } = arguments(args)?;

                Ok(Self::DeleteCustomer { id })
            },
            (parent, field) => Err(ResolverError::UnknownField {
                parent: parent.into(),
                field: field.to_owned(),
            }),
        }
    }

    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Customer { .. } => "customer",
            Self::CreateCustomer(_) => "createCustomer",
            Self::UpdateCustomer(_) => "updateCustomer",
            Self::DeleteCustomer { .. } => "deleteCustomer",
        }
    }
}

impl TryFrom<Invocation> for Operation {
    type Error = ResolverError;

    fn try_from(invocation: Invocation) -> Result<Self, Self::Error> {
        let Invocation {
            arguments, info, ..
        } = invocation;

        Self::decode(&info, arguments)
    }
}

#[cfg(test)]
mod tests {
    use hub_core::serde_json::json;
    use rstest::rstest;

    use super::*;

    fn info(parent: &str, field: &str) -> Info {
        Info {
            field_name: field.into(),
            parent_type_name: parent.into(),
            ..Info::default()
        }
    }

    #[test]
    fn deserializes_gateway_payload() {
        let invocation: Invocation = serde_json::from_value(json!({
            "arguments": { "customerId": "00000000-0000-0000-0000-000000000007" },
            "source": null,
            "identity": {
                "sub": "user-sub",
                "username": "ana",
                "claims": { "email_verified": true },
                "sourceIp": ["10.0.0.1"]
            },
            "info": {
                "fieldName": "customer",
                "parentTypeName": "Query",
                "variables": {},
                "selectionSetList": ["id", "fName"],
                "selectionSetGraphQL": "{ id fName }"
            }
        }))
        .unwrap();

        assert_eq!(invocation.info.selection_set_graphql.as_deref(), Some("{ id fName }"));
        assert_eq!(invocation.identity.unwrap().source_ip, vec!["10.0.0.1"]);
        assert_eq!(
            Operation::try_from(Invocation {
                arguments: json!({ "customerId": "00000000-0000-0000-0000-000000000007" }),
                info: info("Query", "customer"),
                ..Invocation::default()
            })
            .unwrap(),
            Operation::Customer {
                customer_id: Uuid::from_u128(7)
            }
        );
    }

    #[rstest]
    #[case("customer")]
    #[case("customerById")]
    fn query_fields_fetch_by_id(#[case] field: &str) {
        let op = Operation::decode(
            &info("Query", field),
            json!({ "customerId": "00000000-0000-0000-0000-000000000007" }),
        )
        .unwrap();

        assert_eq!(op, Operation::Customer {
            customer_id: Uuid::from_u128(7)
        });
    }

    #[test]
    fn create_reads_create_input() {
        let op = Operation::decode(
            &info("Mutation", "createCustomer"),
            json!({ "createCustomerInput": {
                "fName": "Ana",
                "lName": "Lee",
                "email": "ana@example.com",
                "phoneNo": "0123456789",
                "postalZipCode": "47301"
            }}),
        )
        .unwrap();

        assert_eq!(
            op,
            Operation::CreateCustomer(CreateCustomerInput {
                f_name: "Ana".into(),
                l_name: "Lee".into(),
                email: "ana@example.com".into(),
                phone_no: Some("0123456789".into()),
                postal_zip_code: Some("47301".into()),
            })
        );
    }

    #[test]
    fn update_reads_update_input_with_target_id() {
        let op = Operation::decode(
            &info("Mutation", "updateCustomer"),
            json!({ "updateCustomerInput": {
                "id": "00000000-0000-0000-0000-000000000007",
                "email": "ana@lee.dev"
            }}),
        )
        .unwrap();

        assert_eq!(
            op,
            Operation::UpdateCustomer(UpdateCustomerInput {
                id: Uuid::from_u128(7),
                f_name: None,
                l_name: None,
                email: Some("ana@lee.dev".into()),
                phone_no: None,
                postal_zip_code: None,
            })
        );
    }

    #[test]
    fn delete_reads_id() {
        let op = Operation::decode(
            &info("Mutation", "deleteCustomer"),
            json!({ "id": "00000000-0000-0000-0000-000000000007" }),
        )
        .unwrap();

        assert_eq!(op, Operation::DeleteCustomer {
            id: Uuid::from_u128(7)
        });
        assert_eq!(op.field_name(), "deleteCustomer");
    }

    #[rstest]
    #[case("Subscription")]
    #[case("query")]
    #[case("")]
    fn unknown_parent_type_is_quoted(#[case] parent: &str) {
        let err = Operation::decode(&info(parent, "customer"), json!({})).unwrap_err();

        assert!(matches!(err, ResolverError::UnknownType(ref t) if t == parent));
        assert!(err.to_string().contains(&format!("type {parent} is unknown")));
    }

    #[rstest]
    #[case("Query", "customers")]
    #[case("Query", "createCustomer")]
    #[case("Mutation", "customer")]
    #[case("Mutation", "renameCustomer")]
    fn unknown_field_is_quoted(#[case] parent: &str, #[case] field: &str) {
        let err = Operation::decode(&info(parent, field), json!({})).unwrap_err();

        assert!(matches!(
            err,
            ResolverError::UnknownField { parent: p, field: ref f } if p == parent && f == field
        ));
        assert!(err.to_string().contains(field));
    }

    #[rstest]
    #[case("Query", "customer", json!({ "customerId": "not-a-uuid" }))]
    #[case("Mutation", "createCustomer", json!({ "createCustomerInput": { "fName": "Ana" } }))]
    #[case("Mutation", "updateCustomer", json!({ "updateCustomerInput": { "fName": "Ana" } }))]
    #[case("Mutation", "deleteCustomer", Value::Null)]
    fn malformed_arguments_surface_unchanged(
        #[case] parent: &str,
        #[case] field: &str,
        #[case] args: Value,
    ) {
        let err = Operation::decode(&info(parent, field), args).unwrap_err();

        assert!(matches!(err, ResolverError::MalformedInput(_)));
    }
}
