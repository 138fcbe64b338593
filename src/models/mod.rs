pub mod loaders;
pub mod request;
pub mod response;

pub use loaders::{load_toml_to_request, parse_request_toml};
pub use request::{
    FetchRequest, ReferrerPolicy, RequestCache, RequestCredentials, RequestMode, RequestRedirect,
};
pub use response::{FetchResponse, ResponseType};
