use serde::{self, Deserialize, Serialize};
use strum::Display;

pub const POLICY_LANGUAGE_VERSION: &str = "2012-10-17";
pub const ASSUME_ROLE_ACTION: &str = "sts:AssumeRole";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Statement")]
    pub statement: Vec<Statement>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Principal", skip_serializing_if = "Option::is_none", default)]
    pub principal: Option<Principal>,
    #[serde(rename = "Action")]
    pub action: Vec<String>,
    #[serde(rename = "Resource", skip_serializing_if = "Option::is_none", default)]
    pub resource: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    #[serde(rename = "AWS")]
    Aws(String),
    Service(String),
}

impl PolicyDocument {
    /// Trust policy letting `principal` assume the role it is attached to.
    pub fn assume_role(principal: Principal) -> Self {
        Self {
            version: POLICY_LANGUAGE_VERSION.to_owned(),
            statement: vec![Statement {
                effect: Effect::Allow,
                principal: Some(principal),
                action: vec![ASSUME_ROLE_ACTION.to_owned()],
                resource: None,
            }],
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }

    pub fn allows_assume_role_by(&self, principal: &Principal) -> bool {
        self.statement.iter().any(|statement| {
            statement.effect == Effect::Allow
                && statement.principal.as_ref() == Some(principal)
                && statement.action.iter().any(|a| a == ASSUME_ROLE_ACTION)
        })
    }
}
