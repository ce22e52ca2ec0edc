use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";

// request body for the embedContent endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmbedContentBody {
    pub model: String,
    pub content: Content,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl EmbedContentBody {
    // the endpoint embeds one content per call, so parts always has one entry
    pub fn new(model: &Model, text: &str) -> Self {
        EmbedContentBody {
            model: model.resource_name(),
            content: Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            },
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("Invalid model name: {0}")]
    InvalidName(String),
}

// bare model name, e.g. text-embedding-004
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Model {
    name: String,
}

impl Model {
    // the models/{name} form used in the url path and the payload
    pub fn resource_name(&self) -> String {
        format!("models/{}", self.name)
    }
}

impl FromStr for Model {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.contains('/') {
            return Err(ModelError::InvalidName(s.to_string()));
        }
        Ok(Model {
            name: s.to_string(),
        })
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name)
    }
}

// a completed HTTP exchange, whatever the status code. The body is the
// unparsed response text; the caller interprets both.
#[derive(Clone, Debug)]
pub struct Exchange {
    pub status_code: u16,
    pub body: String,
}
