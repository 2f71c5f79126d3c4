//! Browsing: cached bucket → namespace → table navigation

use std::sync::Arc;

use s3t_core::domain::{DomainError, ErrorKind, NavigationLevel};
use s3t_core::ports::{ITablesService, SelectionError};
use s3t_core::usecases::{BrowseTablesUseCase, NavigationError, NavigationOutcome};

use crate::common::{
    arn, back, bucket_arn, exit, pick, table_arn, FakeTablesService, Op, ScriptedSelector,
};

fn browser(
    fake: &Arc<FakeTablesService>,
    selector: ScriptedSelector,
) -> BrowseTablesUseCase<ScriptedSelector> {
    let service: Arc<dyn ITablesService> = fake.clone();
    BrowseTablesUseCase::new(service, selector)
}

fn sample() -> Arc<FakeTablesService> {
    FakeTablesService::new()
        .with_bucket("analytics")
        .with_bucket("raw")
        .with_namespace("analytics", "sales")
        .with_namespace("analytics", "marketing")
        .with_table("analytics", "sales", "orders")
        .with_table("analytics", "sales", "refunds")
        .with_namespace("raw", "landing")
        .into_arc()
}

#[tokio::test]
async fn test_back_back_reuses_cached_listings() {
    let fake = sample();
    let selector = ScriptedSelector::new([pick("analytics"), pick("sales"), back(), back(), exit()]);
    let mut browse = browser(&fake, selector);

    let outcome = browse.run(NavigationLevel::TableBucket).await.unwrap();

    assert_eq!(outcome, NavigationOutcome::Exited);
    assert_eq!(fake.listing_calls(), 3);
    assert_eq!(fake.count(Op::ListTableBuckets), 1);
    assert_eq!(fake.count(Op::ListNamespaces), 1);
    assert_eq!(fake.count(Op::ListTables), 1);

    let prompts = &browse.selector().prompts;
    let labels: Vec<_> = prompts.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Select Table Bucket",
            "Select Namespace",
            "Select Table",
            "Select Namespace",
            "Select Table Bucket",
        ]
    );
    assert_eq!(prompts[3].items, prompts[1].items);
    assert_eq!(prompts[4].items, prompts[0].items);
    assert_eq!(browse.state().level(), NavigationLevel::TableBucket);
}

#[tokio::test]
async fn test_selecting_table_returns_cached_record() {
    let fake = sample();
    let selector = ScriptedSelector::new([pick("analytics"), pick("sales"), pick("refunds")]);
    let mut browse = browser(&fake, selector);

    let outcome = browse.run(NavigationLevel::TableBucket).await.unwrap();

    let NavigationOutcome::TableSelected(table) = outcome else {
        panic!("expected a table, got {outcome:?}");
    };
    assert_eq!(table.name, "refunds");
    assert_eq!(table.namespace, "sales");
    assert_eq!(table.arn.as_str(), table_arn("analytics", "sales", "refunds"));
    assert_eq!(browse.selected_table(), Some(&table));
    assert_eq!(fake.count(Op::GetTableDetails), 0);
    assert_eq!(fake.listing_calls(), 3);
}

#[tokio::test]
async fn test_prompts_offer_back_below_bucket_level_only() {
    let fake = sample();
    let selector = ScriptedSelector::new([pick("analytics"), pick("sales"), exit()]);
    let mut browse = browser(&fake, selector);

    browse.run(NavigationLevel::TableBucket).await.unwrap();

    let show_back: Vec<_> = browse
        .selector()
        .prompts
        .iter()
        .map(|p| p.show_back)
        .collect();
    assert_eq!(show_back, vec![false, true, true]);
    assert_eq!(
        browse.selector().prompts[0].items,
        vec!["analytics".to_string(), "raw".to_string()]
    );
}

#[tokio::test]
async fn test_no_buckets_exits_with_notice() {
    let fake = FakeTablesService::new().into_arc();
    let mut browse = browser(&fake, ScriptedSelector::empty());

    let outcome = browse.run(NavigationLevel::TableBucket).await.unwrap();

    assert_eq!(outcome, NavigationOutcome::Exited);
    assert_eq!(browse.selector().notices, vec!["No table buckets found"]);
    assert!(browse.selector().prompts.is_empty());
}

#[tokio::test]
async fn test_empty_namespace_level_goes_back_to_buckets() {
    let fake = FakeTablesService::new()
        .with_bucket("empty")
        .with_bucket("full")
        .into_arc();
    let selector = ScriptedSelector::new([pick("empty"), exit()]);
    let mut browse = browser(&fake, selector);

    let outcome = browse.run(NavigationLevel::TableBucket).await.unwrap();

    assert_eq!(outcome, NavigationOutcome::Exited);
    assert_eq!(
        browse.selector().notices,
        vec!["No namespaces found in table bucket 'empty'"]
    );
    assert_eq!(browse.selector().prompts.len(), 2);
    assert_eq!(fake.count(Op::ListTableBuckets), 1);
    assert_eq!(fake.count(Op::ListNamespaces), 1);
}

#[tokio::test]
async fn test_empty_table_level_goes_back_to_namespaces() {
    let fake = sample();
    let selector = ScriptedSelector::new([pick("analytics"), pick("marketing"), exit()]);
    let mut browse = browser(&fake, selector);

    let outcome = browse.run(NavigationLevel::TableBucket).await.unwrap();

    assert_eq!(outcome, NavigationOutcome::Exited);
    assert_eq!(
        browse.selector().notices,
        vec!["No tables found in namespace 'marketing'"]
    );
    let last = browse.selector().prompts.last().unwrap();
    assert_eq!(last.label, "Select Namespace");
    assert_eq!(fake.count(Op::ListNamespaces), 1);
}

#[tokio::test]
async fn test_choosing_another_bucket_refetches_namespaces() {
    let fake = sample();
    let selector = ScriptedSelector::new([
        pick("analytics"),
        back(),
        pick("raw"),
        back(),
        pick("analytics"),
        exit(),
    ]);
    let mut browse = browser(&fake, selector);

    browse.run(NavigationLevel::TableBucket).await.unwrap();

    assert_eq!(fake.count(Op::ListTableBuckets), 1);
    assert_eq!(fake.count(Op::ListNamespaces), 3);

    let prompts = &browse.selector().prompts;
    assert_eq!(prompts[1].items, vec!["sales", "marketing"]);
    assert_eq!(prompts[3].items, vec!["landing"]);
    assert_eq!(prompts[5].items, vec!["sales", "marketing"]);
    assert_eq!(browse.state().selected_bucket(), Some("analytics"));
}

#[tokio::test]
async fn test_choosing_another_namespace_refetches_tables() {
    let fake = FakeTablesService::new()
        .with_bucket("analytics")
        .with_namespace("analytics", "sales")
        .with_namespace("analytics", "marketing")
        .with_table("analytics", "sales", "orders")
        .with_table("analytics", "marketing", "campaigns")
        .into_arc();
    let selector = ScriptedSelector::new([
        pick("analytics"),
        pick("sales"),
        back(),
        pick("marketing"),
        back(),
        pick("sales"),
        exit(),
    ]);
    let mut browse = browser(&fake, selector);

    browse.run(NavigationLevel::TableBucket).await.unwrap();

    assert_eq!(fake.count(Op::ListNamespaces), 1);
    assert_eq!(fake.count(Op::ListTables), 3);
}

#[tokio::test]
async fn test_exit_at_any_level_ends_session() {
    for depth in 0..3 {
        let fake = sample();
        let mut script = vec![pick("analytics"), pick("sales")];
        script.truncate(depth);
        script.push(exit());
        let mut browse = browser(&fake, ScriptedSelector::new(script));

        let outcome = browse.run(NavigationLevel::TableBucket).await.unwrap();

        assert_eq!(outcome, NavigationOutcome::Exited, "depth {depth}");
        assert_eq!(browse.selector().remaining(), 0);
        assert_eq!(browse.selected_table(), None);
    }
}

#[tokio::test]
async fn test_back_at_bucket_level_exits() {
    let fake = sample();
    let mut browse = browser(&fake, ScriptedSelector::new([back()]));

    let outcome = browse.run(NavigationLevel::TableBucket).await.unwrap();
    assert_eq!(outcome, NavigationOutcome::Exited);
}

#[tokio::test]
async fn test_seeded_start_at_namespace_level() {
    let fake = sample();
    let selector = ScriptedSelector::new([back(), exit()]);
    let mut browse = browser(&fake, selector);
    browse.seed("analytics", arn(&bucket_arn("analytics")), None);

    browse.run(NavigationLevel::Namespace).await.unwrap();

    let prompts = &browse.selector().prompts;
    assert_eq!(prompts[0].label, "Select Namespace");
    // Back from a seeded namespace level lands on the bucket list, fetched now
    assert_eq!(prompts[1].label, "Select Table Bucket");
    assert_eq!(
        fake.ops(),
        vec![Op::ListNamespaces, Op::ListTableBuckets]
    );
}

#[tokio::test]
async fn test_seeded_start_at_table_level() {
    let fake = sample();
    let selector = ScriptedSelector::new([pick("orders")]);
    let mut browse = browser(&fake, selector);
    browse.seed("analytics", arn(&bucket_arn("analytics")), Some("sales"));

    let outcome = browse.run(NavigationLevel::Table).await.unwrap();

    assert!(matches!(outcome, NavigationOutcome::TableSelected(ref t) if t.name == "orders"));
    assert_eq!(fake.ops(), vec![Op::ListTables]);
}

#[tokio::test]
async fn test_start_below_buckets_without_context_fails() {
    let fake = sample();

    let mut browse = browser(&fake, ScriptedSelector::empty());
    let err = browse.run(NavigationLevel::Namespace).await.unwrap_err();
    assert!(matches!(
        err,
        NavigationError::Domain(DomainError::MissingContext { ref missing, .. }) if missing == "table bucket"
    ));

    let mut browse = browser(&fake, ScriptedSelector::empty());
    browse.seed("analytics", arn(&bucket_arn("analytics")), None);
    let err = browse.run(NavigationLevel::Table).await.unwrap_err();
    assert!(matches!(
        err,
        NavigationError::Domain(DomainError::MissingContext { ref missing, .. }) if missing == "namespace"
    ));

    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_listing_error_ends_session() {
    let fake = sample();
    fake.fail(Op::ListNamespaces, ErrorKind::Forbidden);
    let selector = ScriptedSelector::new([pick("analytics"), exit()]);
    let mut browse = browser(&fake, selector);

    let err = browse.run(NavigationLevel::TableBucket).await.unwrap_err();

    let NavigationError::Remote(remote) = err else {
        panic!("expected a remote error");
    };
    assert_eq!(remote.kind, ErrorKind::Forbidden);
    assert_eq!(browse.selector().remaining(), 1);
}

#[tokio::test]
async fn test_unknown_pick_is_rejected_at_every_level() {
    let scripts = [
        vec![pick("nope")],
        vec![pick("analytics"), pick("nope")],
        vec![pick("analytics"), pick("sales"), pick("nope")],
    ];

    for script in scripts {
        let fake = sample();
        let mut browse = browser(&fake, ScriptedSelector::new(script.clone()));

        let err = browse.run(NavigationLevel::TableBucket).await.unwrap_err();
        assert!(
            matches!(err, NavigationError::Selection(SelectionError::UnknownItem(ref name)) if name == "nope"),
            "{script:?}: {err:?}"
        );
    }
}

#[tokio::test]
async fn test_paged_bucket_listing_is_shown_whole_and_in_order() {
    let mut fake = FakeTablesService::with_page_size(2);
    let names = ["b1", "b2", "b3", "b4", "b5"];
    for name in names {
        fake = fake.with_bucket(name);
    }
    let fake = fake.into_arc();
    let mut browse = browser(&fake, ScriptedSelector::new([exit()]));

    browse.run(NavigationLevel::TableBucket).await.unwrap();

    assert_eq!(browse.selector().prompts[0].items, names);
    assert_eq!(fake.count(Op::ListTableBuckets), 3);
}
