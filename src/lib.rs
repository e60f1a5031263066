//! pdl-rs: ergonomic People Data Labs client.
//!
//! Wraps the People Data Labs REST API behind typed endpoint handles:
//! person enrichment, identification, retrieval, bulk enrichment, company
//! and school/location cleaning, person/company search, and autocomplete.
//!
//! A [`PdlClient`] holds the API key and base URL; endpoint handles are
//! cheap clones created from it on demand.
//!
//! # Example
//!
//! ```no_run
//! use pdl_rs::{Params, PdlClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), pdl_rs::PdlError> {
//! let client = PdlClient::builder().api_key("your-api-key").build()?;
//!
//! let person = client
//!     .person()
//!     .enrich(Params::new().set("phone", "4155688415"))
//!     .await?;
//! println!("{person}");
//! # Ok(())
//! # }
//! ```

pub mod autocomplete;
pub mod company;
pub mod core;
pub mod location;
pub mod person;
pub mod school;
pub mod search;

pub use autocomplete::Autocomplete;
pub use company::Company;
pub use crate::core::{Params, PdlClient, PdlClientBuilder, PdlError};
pub use location::Location;
pub use person::Person;
pub use school::School;
pub use search::Search;
