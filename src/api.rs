//! The HTTP client for the external budget API.
//!
//! The backend owns all domain data; this app only ever holds transient
//! copies. For each resource collection the client exposes a list call
//! (`GET /api/<resource>` returning `{"items": [...]}`) and a create call
//! (`POST /api/<resource>` with a JSON body, answering with the stored
//! record). There are no retries and no caching; failures map onto [Error]
//! and are surfaced to the caller.

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Error,
    budget::{Budget, NewBudget},
    expense::{Expense, NewExpense},
    goal::{Goal, NewGoal},
};

/// The resource collections exposed by the budget API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// The expenses collection.
    Expenses,
    /// The budgets collection.
    Budgets,
    /// The savings goals collection.
    Goals,
}

impl Resource {
    /// The request path of the collection on the backend.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Expenses => "/api/expenses",
            Resource::Budgets => "/api/budgets",
            Resource::Goals => "/api/goals",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Expenses => "expenses",
            Resource::Budgets => "budgets",
            Resource::Goals => "goals",
        };

        write!(f, "{name}")
    }
}

/// The JSON envelope the backend wraps collections in.
#[derive(Debug, serde::Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct ListResponse<T> {
    /// A missing `items` field counts as an empty collection.
    #[serde(default)]
    items: Vec<T>,
}

/// A client for the budget API.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`, e.g. `http://localhost:8000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// The base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all expenses.
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, Error> {
        self.list(Resource::Expenses).await
    }

    /// Fetch all budgets.
    pub async fn list_budgets(&self) -> Result<Vec<Budget>, Error> {
        self.list(Resource::Budgets).await
    }

    /// Fetch all savings goals.
    pub async fn list_goals(&self) -> Result<Vec<Goal>, Error> {
        self.list(Resource::Goals).await
    }

    /// Create `expense` on the backend and return the stored record.
    pub async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, Error> {
        self.create(Resource::Expenses, expense).await
    }

    /// Create `budget` on the backend and return the stored record.
    pub async fn create_budget(&self, budget: &NewBudget) -> Result<Budget, Error> {
        self.create(Resource::Budgets, budget).await
    }

    /// Create `goal` on the backend and return the stored record.
    pub async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, Error> {
        self.create(Resource::Goals, goal).await
    }

    async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, Error> {
        let response = self
            .http
            .get(self.url(resource))
            .send()
            .await
            .map_err(|error| Error::ApiUnreachable {
                resource,
                details: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ApiStatus {
                resource,
                status: status.as_u16(),
            });
        }

        let body: ListResponse<T> =
            response
                .json()
                .await
                .map_err(|error| Error::MalformedResponse {
                    resource,
                    details: error.to_string(),
                })?;

        Ok(body.items)
    }

    async fn create<B, T>(&self, resource: Resource, record: &B) -> Result<T, Error>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(resource))
            .json(record)
            .send()
            .await
            .map_err(|error| Error::ApiUnreachable {
                resource,
                details: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ApiStatus {
                resource,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|error| Error::MalformedResponse {
                resource,
                details: error.to_string(),
            })
    }

    fn url(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }
}
