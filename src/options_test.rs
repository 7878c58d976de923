#[cfg(test)]
mod tests {
    use crate::keys::SearchLabel;
    use crate::{ListOptions, ListOptionsBuilder};
    use kube::api::ListParams;

    const CLUSTERS: &str = "search.clusterpedia.io/clusters";
    const NAMESPACES: &str = "search.clusterpedia.io/namespaces";
    const NAMES: &str = "search.clusterpedia.io/names";
    const FUZZY: &str = "internalstorage.clusterpedia.io/fuzzy-name";
    const ORDER_BY: &str = "search.clusterpedia.io/orderby";
    const REMAINING: &str = "search.clusterpedia.io/with-remaining-count";

    fn selector(options: &ListOptions) -> &str {
        options.label_selector.as_deref().unwrap()
    }

    #[test]
    fn test_empty_builder_renders_unfiltered_options() {
        let options = ListOptionsBuilder::new().options();

        assert_eq!(options, ListOptions::default());
        assert!(options.label_selector.is_none());
        assert!(options.field_selector.is_none());
        assert!(options.limit.is_none());
        assert!(options.offset.is_none());
        assert!(options.query_pairs().is_empty());
    }

    #[test]
    fn test_single_value_renders_equality() {
        let options = ListOptionsBuilder::new().namespaces(["default"]).options();
        assert_eq!(selector(&options), format!("{}=default", NAMESPACES));
    }

    #[test]
    fn test_repeated_calls_append_in_call_order() {
        let options = ListOptionsBuilder::new()
            .namespaces(["kube-system"])
            .namespaces(["default"])
            .options();

        assert_eq!(
            selector(&options),
            format!("{} in (kube-system,default)", NAMESPACES)
        );
    }

    #[test]
    fn test_one_term_per_category() {
        let options = ListOptionsBuilder::new()
            .names(["nginx1"])
            .clusters(["k3s-1", "k3s-2"])
            .fuzzy_names(["ngin"])
            .clusters(["k3s-3"])
            .namespaces(["default"])
            .options();

        assert_eq!(
            selector(&options),
            format!(
                "{} in (k3s-1,k3s-2,k3s-3),{}=default,{}=nginx1,{}=ngin",
                CLUSTERS, NAMESPACES, NAMES, FUZZY
            )
        );
        assert_eq!(selector(&options).matches(CLUSTERS).count(), 1);
    }

    #[test]
    fn test_unused_categories_are_omitted() {
        let options = ListOptionsBuilder::new().fuzzy_names(["ngin"]).options();
        let rendered = selector(&options);

        assert_eq!(rendered, format!("{}=ngin", FUZZY));
        for label in SearchLabel::ALL {
            if label != SearchLabel::FuzzyName {
                assert!(!rendered.contains(label.key()), "{} rendered", label.key());
            }
        }
    }

    #[test]
    fn test_empty_input_is_a_noop() {
        let options = ListOptionsBuilder::new()
            .clusters(Vec::<String>::new())
            .namespaces(Vec::<&str>::new())
            .options();

        assert!(options.label_selector.is_none());
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let options = ListOptionsBuilder::new()
            .clusters(["k3s", "k3s"])
            .options();

        assert_eq!(selector(&options), format!("{} in (k3s,k3s)", CLUSTERS));
    }

    #[test]
    fn test_order_by_priority_follows_call_order() {
        let options = ListOptionsBuilder::new()
            .order_by("created_at", true)
            .order_by("namespace", false)
            .options();

        assert_eq!(
            selector(&options),
            format!("{} in (-created_at,namespace)", ORDER_BY)
        );
    }

    #[test]
    fn test_single_ascending_order_by() {
        let options = ListOptionsBuilder::new().order_by("name", false).options();
        assert_eq!(selector(&options), format!("{}=name", ORDER_BY));
    }

    #[test]
    fn test_remaining_count_is_idempotent() {
        let once = ListOptionsBuilder::new().remaining_count().options();
        let thrice = ListOptionsBuilder::new()
            .remaining_count()
            .remaining_count()
            .remaining_count()
            .options();

        assert_eq!(selector(&once), format!("{}=true", REMAINING));
        assert_eq!(once, thrice);
        assert_eq!(selector(&thrice).matches(REMAINING).count(), 1);
    }

    #[test]
    fn test_remaining_count_not_called() {
        let options = ListOptionsBuilder::new().limit(10).options();
        assert!(options.label_selector.is_none());
    }

    #[test]
    fn test_field_selector_single_value() {
        let options = ListOptionsBuilder::new()
            .field_selector("status.phase", ["Running"])
            .options();

        assert_eq!(options.field_selector.as_deref(), Some("status.phase=Running"));
        assert!(options.label_selector.is_none());
    }

    #[test]
    fn test_field_selector_union() {
        let options = ListOptionsBuilder::new()
            .field_selector("status.phase", ["Running"])
            .field_selector("status.phase", ["Pending", "Running"])
            .options();

        assert_eq!(
            options.field_selector.as_deref(),
            Some("status.phase in (Running,Pending)")
        );
    }

    #[test]
    fn test_field_selectors_sorted_by_field() {
        let options = ListOptionsBuilder::new()
            .field_selector("status.phase", ["Running"])
            .field_selector("spec.nodeName", ["node-1"])
            .options();

        assert_eq!(
            options.field_selector.as_deref(),
            Some("spec.nodeName=node-1,status.phase=Running")
        );
    }

    #[test]
    fn test_field_selector_without_values_is_omitted() {
        let options = ListOptionsBuilder::new()
            .field_selector("status.phase", Vec::<String>::new())
            .options();

        assert!(options.field_selector.is_none());
    }

    #[test]
    fn test_limit_and_offset_pass_through() {
        let options = ListOptionsBuilder::new().limit(5).offset(10).options();

        assert_eq!(options.limit, Some(5));
        assert_eq!(options.offset, Some(10));
        assert_eq!(
            options.query_pairs(),
            vec![("limit", "5".to_string()), ("continue", "10".to_string())]
        );
    }

    #[test]
    fn test_negative_pagination_is_not_validated() {
        let options = ListOptionsBuilder::new().limit(-1).offset(-5).options();

        assert_eq!(options.limit, Some(-1));
        assert_eq!(
            options.query_pairs(),
            vec![("limit", "-1".to_string()), ("continue", "-5".to_string())]
        );
    }

    #[test]
    fn test_owner_and_time_filters() {
        let options = ListOptionsBuilder::new()
            .owner_name("nginx")
            .owner_seniority(1)
            .since("2022-03-24")
            .before("2022-03-25")
            .options();

        assert_eq!(
            selector(&options),
            "search.clusterpedia.io/owner-name=nginx,\
             search.clusterpedia.io/owner-seniority=1,\
             search.clusterpedia.io/since=2022-03-24,\
             search.clusterpedia.io/before=2022-03-25"
        );
    }

    #[test]
    fn test_caller_label_selector_is_kept() {
        let options = ListOptionsBuilder::new()
            .label_selector("app=nginx,tier notin (backend)")
            .clusters(["k3s-1"])
            .options();

        assert_eq!(
            selector(&options),
            format!("app=nginx,tier notin (backend),{}=k3s-1", CLUSTERS)
        );
    }

    #[test]
    fn test_caller_reserved_term_is_merged() {
        let options = ListOptionsBuilder::new()
            .label_selector(format!("app=nginx,{}=default", NAMESPACES))
            .namespaces(["kube-system"])
            .options();

        assert_eq!(
            selector(&options),
            format!("app=nginx,{} in (default,kube-system)", NAMESPACES)
        );
    }

    #[test]
    fn test_caller_remaining_count_renders_once() {
        let options = ListOptionsBuilder::new()
            .label_selector(format!("app=nginx,{}=true", REMAINING))
            .remaining_count()
            .options();

        assert_eq!(selector(&options), format!("app=nginx,{}=true", REMAINING));
        assert_eq!(selector(&options).matches(REMAINING).count(), 1);
    }

    #[test]
    fn test_single_valued_keys_replace_caller_terms() {
        let caller = "search.clusterpedia.io/owner-uid=a,\
                      search.clusterpedia.io/owner-name=old,\
                      search.clusterpedia.io/owner-seniority=0,\
                      search.clusterpedia.io/since=2022-01-01,\
                      search.clusterpedia.io/before=2022-02-01";
        let options = ListOptionsBuilder::new()
            .label_selector(caller)
            .owner_uid("b")
            .owner_name("nginx")
            .owner_seniority(1)
            .since("2022-03-24")
            .before("2022-03-25")
            .options();

        assert_eq!(
            selector(&options),
            "search.clusterpedia.io/owner-uid=b,\
             search.clusterpedia.io/owner-name=nginx,\
             search.clusterpedia.io/owner-seniority=1,\
             search.clusterpedia.io/since=2022-03-24,\
             search.clusterpedia.io/before=2022-03-25"
        );
        assert!(!selector(&options).contains(" in ("));
    }

    #[test]
    fn test_single_valued_keys() {
        let single: Vec<SearchLabel> = SearchLabel::ALL
            .into_iter()
            .filter(|label| label.is_single_valued())
            .collect();

        assert_eq!(
            single,
            vec![
                SearchLabel::OwnerUid,
                SearchLabel::OwnerName,
                SearchLabel::OwnerSeniority,
                SearchLabel::Since,
                SearchLabel::Before,
                SearchLabel::WithRemainingCount,
            ]
        );
    }

    #[test]
    fn test_caller_selector_alone() {
        let options = ListOptionsBuilder::new()
            .label_selector("app=nginx")
            .options();

        assert_eq!(selector(&options), "app=nginx");
    }

    #[test]
    fn test_blank_caller_selector_is_dropped() {
        let options = ListOptionsBuilder::new().label_selector("  ").options();
        assert!(options.label_selector.is_none());
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let build = || {
            ListOptionsBuilder::new()
                .clusters(["a", "b"])
                .field_selector("status.phase", ["Running"])
                .field_selector("metadata.name", ["x"])
                .order_by("name", true)
                .options()
        };

        assert_eq!(build(), build());
    }

    #[test]
    fn test_builders_do_not_share_state() {
        let base = ListOptionsBuilder::new().namespaces(["default"]);
        let branch = base.clone().clusters(["k3s-1"]);

        let rendered = base.options();
        let branched = branch.namespaces(["kube-system"]).options();

        assert_eq!(selector(&rendered), format!("{}=default", NAMESPACES));
        assert_eq!(
            selector(&branched),
            format!("{}=k3s-1,{} in (default,kube-system)", CLUSTERS, NAMESPACES)
        );

        let fresh = ListOptionsBuilder::new().options();
        assert!(fresh.label_selector.is_none());
    }

    #[test]
    fn test_query_pairs_order() {
        let options = ListOptionsBuilder::new()
            .timeout(10)
            .offset(0)
            .limit(5)
            .field_selector("status.phase", ["Running"])
            .clusters(["k3s2"])
            .options();

        let names: Vec<&str> = options.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec!["labelSelector", "fieldSelector", "limit", "continue", "timeoutSeconds"]
        );
    }

    #[test]
    fn test_into_list_params() {
        let options = ListOptionsBuilder::new()
            .clusters(["k3s-1"])
            .field_selector("status.phase", ["Running"])
            .limit(5)
            .offset(10)
            .timeout(30)
            .options();

        let params = ListParams::try_from(&options).unwrap();

        assert_eq!(params.label_selector, options.label_selector);
        assert_eq!(params.field_selector.as_deref(), Some("status.phase=Running"));
        assert_eq!(params.limit, Some(5));
        assert_eq!(params.continue_token.as_deref(), Some("10"));
        assert_eq!(params.timeout, Some(30));
    }

    #[test]
    fn test_into_list_params_rejects_negative_limit() {
        let options = ListOptionsBuilder::new().limit(-1).options();

        let err = ListParams::try_from(options).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidRequest(_)));
    }
}
