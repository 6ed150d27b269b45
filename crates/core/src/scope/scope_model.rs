//! Scope domain models and their query-string form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Dimension over which burndown figures are computed.
///
/// Exactly one scope is active at a time; a fund scope and a ledger scope can
/// never be combined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Scope {
    All,
    Fund(String),
    Ledger(String),
}

impl Scope {
    pub fn scope_type(&self) -> ScopeType {
        match self {
            Scope::All => ScopeType::AllFunds,
            Scope::Fund(_) => ScopeType::SingleFund,
            Scope::Ledger(_) => ScopeType::SingleLedger,
        }
    }

    /// The fund code or ledger name this scope filters on.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Scope::All => None,
            Scope::Fund(code) => Some(code.as_str()),
            Scope::Ledger(name) => Some(name.as_str()),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => write!(f, "all funds"),
            Scope::Fund(code) => write!(f, "fund {}", code),
            Scope::Ledger(name) => write!(f, "ledger {}", name),
        }
    }
}

/// Value of the `type` parameter of the burndown endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeType {
    AllFunds,
    SingleFund,
    SingleLedger,
}

impl ScopeType {
    pub const ALL: [ScopeType; 3] = [
        ScopeType::AllFunds,
        ScopeType::SingleFund,
        ScopeType::SingleLedger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeType::AllFunds => "all-funds",
            ScopeType::SingleFund => "single-fund",
            ScopeType::SingleLedger => "single-ledger",
        }
    }
}

impl FromStr for ScopeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ScopeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidScopeParameter(format!("unrecognized burndown type '{}'", s))
            })
    }
}

/// Query parameters of `GET burndown-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurndownQuery {
    #[serde(rename = "type")]
    pub scope_type: Option<String>,
    pub ledger: Option<String>,
    pub fund_code: Option<String>,
}

impl BurndownQuery {
    /// Resolves the parameters into a scope.
    ///
    /// Unknown types and missing fund codes or ledger names are rejected;
    /// there is no fallback to the all-funds view.
    pub fn to_scope(&self) -> Result<Scope> {
        let raw_type = self
            .scope_type
            .as_deref()
            .ok_or_else(|| Error::InvalidScopeParameter("missing burndown type".to_string()))?;

        match raw_type.parse::<ScopeType>()? {
            ScopeType::AllFunds => Ok(Scope::All),
            ScopeType::SingleFund => non_empty(self.fund_code.as_deref())
                .map(|code| Scope::Fund(code.to_string()))
                .ok_or_else(|| {
                    Error::InvalidScopeParameter("single-fund requires fundCode".to_string())
                }),
            ScopeType::SingleLedger => non_empty(self.ledger.as_deref())
                .map(|name| Scope::Ledger(name.to_string()))
                .ok_or_else(|| {
                    Error::InvalidScopeParameter("single-ledger requires ledger".to_string())
                }),
        }
    }
}

impl From<&Scope> for BurndownQuery {
    fn from(scope: &Scope) -> Self {
        let mut query = BurndownQuery {
            scope_type: Some(scope.scope_type().as_str().to_string()),
            ..Default::default()
        };
        match scope {
            Scope::All => {}
            Scope::Fund(code) => query.fund_code = Some(code.clone()),
            Scope::Ledger(name) => query.ledger = Some(name.clone()),
        }
        query
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
