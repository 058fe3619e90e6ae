mod app;
pub use app::{App, AppMsg};

mod comment_item;
pub use comment_item::CommentItem;

mod comment_thread;
pub use comment_thread::CommentThreadView;

mod legacy_thread;
pub use legacy_thread::LegacyCommentThread;

mod settings_bar;
pub use settings_bar::SettingsBar;

mod sort_selector;
pub use sort_selector::SortSelector;
