//! Account resource implementation.
//!
//! The account is the API key holder. It is the entry point for creating
//! users and browsing the plans offered to them.
//!
//! # Example
//!
//! ```rust,ignore
//! use weebly_cloud::rest::resources::Account;
//!
//! let account = Account::new();
//! let user = account.create_user(&client, "owner@example.com", Params::new()).await?;
//! let plans = account.list_plans(&client).await?;
//! ```

use serde_json::{Map, Value};

use crate::clients::{CloudClient, CloudError, Params};
use crate::rest::{CloudResource, Mutable, ResourceList, ResourceState};

use super::common::{required_id, unwrap_object, with_param};
use super::{Plan, User};

/// The account that owns the API keys.
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    state: ResourceState,
}

impl Account {
    /// URL of the account resource.
    pub const PATH: &'static str = "account";

    /// Creates an account handle that is fetched on first property access.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ResourceState::new(Self::PATH),
        }
    }

    /// Fetches the account.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the body has no `account` object.
    pub async fn fetch(client: &CloudClient) -> Result<Self, CloudError> {
        let mut account = Self::new();
        account.get(client).await?;
        Ok(account)
    }

    /// Creates a user with the given email and extra fields.
    ///
    /// The returned user is hydrated from the response without another request.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request, or
    /// [`CloudError::UnexpectedResponse`] if the body has no `user` object.
    pub async fn create_user(&self, client: &CloudClient, email: &str, data: Params) -> Result<User, CloudError> {
        let data = with_param(data, "email", email);
        let response = client.post_with("user", data).await?;

        let user = response.body.get("user").unwrap_or(&Value::Null);
        let user_id = required_id(user, "user_id", User::NAME)?;
        let properties = unwrap_object(response.body, "user", User::NAME)?;
        Ok(User::from_json(user_id, properties))
    }

    /// Lists the plans available to the account.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request or the conversion.
    pub async fn list_plans(&self, client: &CloudClient) -> Result<ResourceList<Plan>, CloudError> {
        let response = client.get("plan").await?;
        ResourceList::new(client, response, Vec::new(), Plan::array_from_json)
    }

    /// Returns a lazily fetched plan.
    #[must_use]
    pub fn plan(&self, plan_id: impl Into<String>) -> Plan {
        Plan::new(plan_id)
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudResource for Account {
    const NAME: &'static str = "Account";

    fn state(&self) -> &ResourceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ResourceState {
        &mut self.state
    }

    fn properties_from_json(&self, body: Value) -> Result<Map<String, Value>, CloudError> {
        unwrap_object(body, "account", Self::NAME)
    }
}

impl Mutable for Account {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_url() {
        let account = Account::default();
        assert_eq!(account.url(), "account");
        assert_eq!(account.plan("4").url(), "plan/4");
    }

    #[test]
    fn test_properties_unwrapped_from_account_key() {
        let account = Account::new();
        let props = account
            .properties_from_json(json!({"account": {"brand_name": "Acme"}}))
            .unwrap();
        assert_eq!(props.get("brand_name"), Some(&json!("Acme")));
    }
}
