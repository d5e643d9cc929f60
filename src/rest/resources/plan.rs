//! Plan resource implementation.
//!
//! Plans are the billing tiers a site can be placed on. They are read-only.
//! The API returns plans as an object keyed by plan id:
//!
//! ```text
//! {"plans": {"4": {"plan_id": "4", "name": "Pro", ...}}}
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use weebly_cloud::rest::CloudResource;
//! use weebly_cloud::rest::resources::Plan;
//!
//! let mut plan = Plan::new("4");
//! let name = plan.property(&client, "name").await?;
//! ```

use serde_json::{Map, Value};

use crate::clients::{CloudClient, CloudError};
use crate::rest::{build_path, CloudResource, ResourceState};

/// A Weebly Cloud plan.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    plan_id: String,
    state: ResourceState,
}

impl Plan {
    /// URL template for a plan.
    pub const PATH: &'static str = "plan/{plan_id}";

    /// Creates a plan handle that is fetched on first property access.
    #[must_use]
    pub fn new(plan_id: impl Into<String>) -> Self {
        let plan_id = plan_id.into();
        Self {
            state: ResourceState::new(Self::resource_url(&plan_id)),
            plan_id,
        }
    }

    /// Fetches a plan.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the request or if the plan is missing
    /// from the response.
    pub async fn fetch(client: &CloudClient, plan_id: impl Into<String>) -> Result<Self, CloudError> {
        let mut plan = Self::new(plan_id);
        plan.get(client).await?;
        Ok(plan)
    }

    /// Creates a plan from properties already known to the caller.
    #[must_use]
    pub fn from_json(plan_id: impl Into<String>, properties: Map<String, Value>) -> Self {
        let plan_id = plan_id.into();
        Self {
            state: ResourceState::from_json(Self::resource_url(&plan_id), properties),
            plan_id,
        }
    }

    fn resource_url(plan_id: &str) -> String {
        build_path(Self::PATH, &[("plan_id", plan_id)])
    }

    /// Returns the plan id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.plan_id
    }

    /// Converts a `{"plans": {id: {...}}}` body into plans.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::UnexpectedResponse`] if the body has another shape.
    pub fn array_from_json(_ids: &[String], json: &Value) -> Result<Vec<Self>, CloudError> {
        plans_object(json)?
            .iter()
            .map(|(id, value)| match value {
                Value::Object(map) => Ok(Self::from_json(id.clone(), map.clone())),
                other => Err(CloudError::unexpected(format!(
                    "expected Plan object, got {other}"
                ))),
            })
            .collect()
    }
}

fn plans_object(json: &Value) -> Result<&Map<String, Value>, CloudError> {
    json.get("plans")
        .and_then(Value::as_object)
        .ok_or_else(|| CloudError::unexpected("response has no 'plans' object"))
}

impl CloudResource for Plan {
    const NAME: &'static str = "Plan";

    fn state(&self) -> &ResourceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ResourceState {
        &mut self.state
    }

    /// Picks this plan out of the `plans` object, falling back to the only entry.
    fn properties_from_json(&self, body: Value) -> Result<Map<String, Value>, CloudError> {
        let plans = plans_object(&body)?;

        let entry = plans.get(&self.plan_id).or_else(|| {
            if plans.len() == 1 {
                plans.values().next()
            } else {
                None
            }
        });

        match entry {
            Some(Value::Object(map)) => Ok(map.clone()),
            _ => Err(CloudError::unexpected(format!(
                "plan '{}' not found in response",
                self.plan_id
            ))),
        }
    }
}
