mod comment;
pub use comment::CommentList;

mod fields;
pub use fields::{FieldAction, Fields};

mod local;
pub use local::{LocalThread, ThreadNotice};

mod order;
pub use order::{date_comparator, num_comparator, SortKeyExt};

mod source;
pub use source::{fetch_initial, CommentSource, LoadTicket};

mod store;
pub use store::{CommentStore, StoreCommand};

mod thread;
pub use thread::{Rendered, ThreadEvent, ThreadState};

pub mod api {
    pub use commentary_api::*;
}

pub mod prelude {
    pub use crate::SortKeyExt;
}
