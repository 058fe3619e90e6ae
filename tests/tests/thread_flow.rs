use chrono::{TimeZone, Utc};
use commentary_client::{
    api::{ArticleId, CommentId, CommentRecord, Error, NewComment, SortKey},
    fetch_initial, CommentStore, FieldAction, Fields, LoadTicket, LocalThread,
    Rendered, StoreCommand, ThreadEvent, ThreadNotice, ThreadState,
};
use commentary_mock_server::MockSource;

const ARTICLE: ArticleId = ArticleId(12);

fn init_logs() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }
}

fn record(id: u64, date_ms: i64, likes: u64) -> CommentRecord {
    CommentRecord {
        id: CommentId(id),
        article_id: ARTICLE,
        author: format!("author {id}"),
        text: format!("comment number {id}"),
        date: Utc.timestamp_millis_opt(date_ms).unwrap(),
        current_likes: likes,
    }
}

fn seeded_source() -> MockSource {
    MockSource::new().with_comments(
        ARTICLE,
        vec![record(1, 300, 2), record(2, 100, 5), record(3, 200, 1)],
    )
}

fn typed(name: &str, comment: &str) -> Fields {
    Fields::default()
        .reduce(FieldAction::SetName(String::from(name)))
        .reduce(FieldAction::SetComment(String::from(comment)))
}

fn new_comment(author: &str, text: &str) -> NewComment {
    NewComment {
        author: String::from(author),
        text: String::from(text),
        date: Utc::now(),
    }
}

fn ready_items(r: Rendered) -> Vec<CommentRecord> {
    match r {
        Rendered::Ready(items) => items,
        Rendered::Loading => panic!("thread is still loading"),
    }
}

/// Runs the initial load of a store-backed thread the way the view does
async fn load(
    source: &MockSource,
    state: ThreadState,
    store: &mut CommentStore,
    ticket: &LoadTicket,
) -> ThreadState {
    let article = state.article();
    match fetch_initial(source, article, ticket).await {
        Ok(Some(comments)) => {
            store.apply(StoreCommand::LoadInitial { article, comments });
            state.handle(ThreadEvent::Loaded(article))
        }
        Ok(None) => state,
        Err(err) => panic!("loading comments failed: {err:#}"),
    }
}

/// Mounts a store-backed thread and lets its initial load resolve
async fn mounted(source: &MockSource) -> (ThreadState, CommentStore) {
    let mut store = CommentStore::new();
    let state = load(source, ThreadState::mount(ARTICLE), &mut store, &LoadTicket::new()).await;
    (state, store)
}

async fn mounted_local(source: &MockSource) -> LocalThread {
    let mut t = LocalThread::mount(ARTICLE);
    let comments = fetch_initial(source, ARTICLE, &t.ticket())
        .await
        .unwrap()
        .expect("fetch was disowned");
    assert!(t.loaded(ARTICLE, comments));
    t
}

#[tokio::test]
async fn initial_load_renders_every_comment() {
    init_logs();
    let source = seeded_source();
    let mut store = CommentStore::new();
    let state = ThreadState::mount(ARTICLE);
    assert_eq!(state.render(store.comments(ARTICLE), SortKey::Date), Rendered::Loading);

    let state = load(&source, state, &mut store, &LoadTicket::new()).await;
    assert_eq!(ready_items(state.render(store.comments(ARTICLE), SortKey::Date)).len(), 3);
    assert_eq!(source.test_fetches(), vec![ARTICLE]);
}

#[tokio::test]
async fn loading_while_fetch_outstanding() {
    init_logs();
    let source = seeded_source();
    let release = source.gate(ARTICLE);
    let mut store = CommentStore::new();
    let state = ThreadState::mount(ARTICLE);
    let ticket = LoadTicket::new();

    let fetch = fetch_initial(&source, ARTICLE, &ticket);
    futures::pin_mut!(fetch);
    assert!(futures::poll!(&mut fetch).is_pending());
    assert_eq!(source.test_num_pending(), 1);
    assert_eq!(state.render(store.comments(ARTICLE), SortKey::Date), Rendered::Loading);
    assert_eq!(
        state.submission(&typed("Alice", "Hello"), Utc::now()),
        Err(Error::StillLoading(ARTICLE)),
    );

    release.send(()).unwrap();
    let comments = fetch.await.unwrap().unwrap();
    store.apply(StoreCommand::LoadInitial {
        article: ARTICLE,
        comments,
    });
    let state = state.handle(ThreadEvent::Loaded(ARTICLE));
    assert_eq!(ready_items(state.render(store.comments(ARTICLE), SortKey::Date)).len(), 3);
}

#[tokio::test]
async fn failed_load_stays_loading() {
    init_logs();
    let mut source = seeded_source();
    source.fail(ARTICLE);
    let store = CommentStore::new();
    let state = ThreadState::mount(ARTICLE);

    let err = fetch_initial(&source, ARTICLE, &LoadTicket::new())
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("fetching comments for article"));
    assert!(state.is_loading());
    assert!(store.comments(ARTICLE).is_empty());
}

#[tokio::test]
async fn switching_sort_key_keeps_store_order() {
    init_logs();
    let (state, store) = mounted(&seeded_source()).await;

    let by_date = ready_items(state.render(store.comments(ARTICLE), SortKey::Date));
    let dates = by_date.iter().map(|c| c.date.timestamp_millis()).collect::<Vec<_>>();
    assert_eq!(dates, vec![100, 200, 300]);

    let by_likes = ready_items(state.render(store.comments(ARTICLE), SortKey::Likes));
    let likes = by_likes.iter().map(|c| c.current_likes).collect::<Vec<_>>();
    assert_eq!(likes, vec![1, 2, 5]);

    let stored = store.comments(ARTICLE).iter().map(|c| c.id.0).collect::<Vec<_>>();
    assert_eq!(stored, vec![1, 2, 3]);
}

#[tokio::test]
async fn submit_form_adds_one_comment() {
    init_logs();
    let (state, mut store) = mounted(&seeded_source()).await;

    let fields = typed("Alice", "Hello");
    store.apply(state.submission(&fields, Utc::now()).unwrap());
    let fields = fields.reduce(FieldAction::Clear);
    assert_eq!(fields, Fields::default());

    let comments = store.comments(ARTICLE);
    assert_eq!(comments.len(), 4);
    let added = &comments[3];
    assert_eq!(added.author, "Alice");
    assert_eq!(added.text, "Hello");
    assert_eq!(added.current_likes, 0);
    assert_eq!(added.article_id, ARTICLE);
    assert!(comments[..3].iter().all(|c| c.id != added.id));
    assert_eq!(ready_items(state.render(comments, SortKey::Date)).len(), 4);
}

#[tokio::test]
async fn empty_fields_never_reach_the_store() {
    init_logs();
    let (state, store) = mounted(&seeded_source()).await;

    let only_name = Fields::default().reduce(FieldAction::SetName(String::from("Alice")));
    assert_eq!(state.submission(&only_name, Utc::now()), Err(Error::EmptyText));
    let only_comment = Fields::default().reduce(FieldAction::SetComment(String::from("Hello")));
    assert_eq!(state.submission(&only_comment, Utc::now()), Err(Error::EmptyAuthor));

    assert_eq!(store.comments(ARTICLE).len(), 3);
}

#[tokio::test]
async fn delete_removes_exactly_one() {
    init_logs();
    let (_, mut store) = mounted(&seeded_source()).await;
    let before = store.comments(ARTICLE).to_vec();

    store.apply(StoreCommand::Delete {
        article: ARTICLE,
        id: CommentId(2),
    });
    assert_eq!(store.comments(ARTICLE), &[before[0].clone(), before[2].clone()]);
}

#[tokio::test]
async fn remounted_article_keeps_comments_added_after_reload() {
    init_logs();
    let other = ArticleId(13);
    let source = seeded_source().with_comments(other, vec![]);
    let release_first = source.gate(ARTICLE);
    let mut store = CommentStore::new();

    // Article 12 shown, its fetch is slow
    let state = ThreadState::mount(ARTICLE);
    let first = LoadTicket::new();
    let first_fetch = fetch_initial(&source, ARTICLE, &first);
    futures::pin_mut!(first_fetch);
    assert!(futures::poll!(&mut first_fetch).is_pending());

    // Switching away and back disowns it
    first.cancel();
    let state = state.handle(ThreadEvent::Mount(other));
    let second = LoadTicket::new();
    let state = load(&source, state, &mut store, &second).await;
    second.cancel();
    let state = state.handle(ThreadEvent::Mount(ARTICLE));
    let state = load(&source, state, &mut store, &LoadTicket::new()).await;
    assert!(!state.is_loading());

    store.apply(state.submission(&typed("Alice", "Hello"), Utc::now()).unwrap());
    assert_eq!(store.comments(ARTICLE).len(), 4);

    release_first.send(()).unwrap();
    assert!(first_fetch.await.unwrap().is_none());
    let comments = store.comments(ARTICLE);
    assert_eq!(comments.len(), 4);
    assert_eq!(comments[3].author, "Alice");
    assert_eq!(source.test_fetches(), vec![ARTICLE, other, ARTICLE]);
}

#[tokio::test]
async fn article_change_triggers_a_new_load() {
    init_logs();
    let other = ArticleId(13);
    let source = seeded_source().with_comments(other, vec![]);
    let (state, mut store) = mounted(&source).await;
    assert!(!state.is_loading());

    let state = state.handle(ThreadEvent::Mount(other));
    assert!(state.is_loading());
    let state = load(&source, state, &mut store, &LoadTicket::new()).await;
    assert_eq!(ready_items(state.render(store.comments(other), SortKey::Date)), vec![]);

    assert_eq!(source.test_fetches(), vec![ARTICLE, other]);
    assert_eq!(store.comments(ARTICLE).len(), 3);
}

#[tokio::test]
async fn legacy_submit_and_delete_notify_the_parent() {
    init_logs();
    let mut thread = mounted_local(&seeded_source()).await;

    assert_eq!(
        thread.submit(new_comment("Alice", "Hello")),
        Ok(ThreadNotice::CommentAdded),
    );
    assert_eq!(thread.submit(new_comment("", "Hello")), Err(Error::EmptyAuthor));
    assert_eq!(thread.delete(CommentId(2)), ThreadNotice::CommentDeleted);

    let ids = ready_items(thread.render(SortKey::Date))
        .iter()
        .map(|c| c.id.0)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 1, 4]);
}

#[tokio::test]
async fn legacy_submit_ignored_while_loading() {
    init_logs();
    let source = seeded_source();
    let release = source.gate(ARTICLE);
    let mut thread = LocalThread::mount(ARTICLE);
    let ticket = thread.ticket();

    let fetch = fetch_initial(&source, ARTICLE, &ticket);
    futures::pin_mut!(fetch);
    assert!(futures::poll!(&mut fetch).is_pending());
    assert_eq!(
        thread.submit(new_comment("Alice", "Hello")),
        Err(Error::StillLoading(ARTICLE)),
    );

    release.send(()).unwrap();
    let comments = fetch.await.unwrap().unwrap();
    assert!(thread.loaded(ARTICLE, comments));
    assert_eq!(ready_items(thread.render(SortKey::Date)).len(), 3);
}

#[tokio::test]
async fn legacy_like_and_local_ids() {
    init_logs();
    let mut thread = mounted_local(&seeded_source()).await;

    thread.like(CommentId(1)).unwrap();
    let likes = ready_items(thread.render(SortKey::Likes))
        .iter()
        .map(|c| (c.id.0, c.current_likes))
        .collect::<Vec<_>>();
    assert_eq!(likes, vec![(3, 1), (1, 3), (2, 5)]);

    thread.submit(new_comment("Alice", "Hello")).unwrap();
    let added = ready_items(thread.render(SortKey::Likes)).remove(0);
    assert_eq!(added.id, CommentId(4));
    assert_eq!(added.current_likes, 0);
}

#[tokio::test]
async fn legacy_drops_stale_and_repeated_loads() {
    init_logs();
    let other = ArticleId(13);
    let source = seeded_source().with_comments(other, vec![record(8, 0, 0)]);
    let release = source.gate(ARTICLE);
    let mut thread = LocalThread::mount(ARTICLE);
    let first = thread.ticket();

    let stale = fetch_initial(&source, ARTICLE, &first);
    futures::pin_mut!(stale);
    assert!(futures::poll!(&mut stale).is_pending());

    thread.remount(other);
    let comments = fetch_initial(&source, other, &thread.ticket())
        .await
        .unwrap()
        .unwrap();
    assert!(thread.loaded(other, comments.clone()));
    thread.submit(new_comment("Alice", "Hello")).unwrap();

    release.send(()).unwrap();
    assert!(stale.await.unwrap().is_none());
    assert!(!thread.loaded(ARTICLE, vec![record(1, 300, 2)]));
    assert!(!thread.loaded(other, comments));
    let ids = ready_items(thread.render(SortKey::Date))
        .iter()
        .map(|c| c.id.0)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![8, 9]);
}
