mod backend;
pub use backend::SearchBackend;

mod elasticsearch;
pub use elasticsearch::ElasticsearchBackend;

mod error;
pub use error::{BoxError, SearchError};

mod types;
pub use types::{SearchHit, SearchRequest};
