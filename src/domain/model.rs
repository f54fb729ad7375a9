use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub cost: i64,
    #[serde(default)]
    pub image: Vec<u8>,
}

// User and Alien share a field shape but stay distinct types; fetch
// components are parameterized over the record type rather than
// duplicated per kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: Option<String>,
    pub character: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alien {
    pub name: Option<String>,
    pub character: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}

// Opaque credential value; stored and retrieved as JSON by credential
// backends, never inspected by the components that carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub value: String,
}
