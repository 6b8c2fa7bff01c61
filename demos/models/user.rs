//! Example input for `tagwrangler-gen generate demos/models`.

use tagwrangler_macros::Tagged;

#[derive(Debug, Default, Tagged)]
pub struct User {
    #[tag = r#"bind:"header,required""#]
    pub name: String,
    #[tag = r#"bind:"query""#]
    pub email: String,
    #[tag = r#"validate:"min=18,max=120""#]
    pub age: u32,
    #[tag = r#"bind:"path,required" validate:"min=1""#]
    pub id: u64,
}

#[derive(Debug, Default, Tagged)]
pub struct ListUsers {
    #[tag = r#"bind:"query" validate:"min=1,max=100" json:"limit""#]
    pub limit: u32,
    #[tag = r#"bind:"query""#]
    pub cursor: String,
    pub internal_note: String,
}
