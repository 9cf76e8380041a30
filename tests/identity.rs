use std::collections::BTreeSet;

use readlog::{catalog::Catalog, work::work_id};

#[test]
fn ids_are_distinct_across_the_catalog() {
    let catalog = Catalog::builtin();
    let ids: BTreeSet<String> = catalog.works().iter().map(|w| w.id()).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn id_depends_only_on_author_and_title() {
    let catalog = Catalog::builtin();
    for work in catalog.works() {
        assert_eq!(work.id(), work_id(&work.author, &work.title));
        // Re-encoding the same pair always yields the same string.
        assert_eq!(work.id(), work.id());
    }
}

#[test]
fn id_percent_encodes_everything_outside_the_unreserved_set() {
    assert_eq!(
        work_id("Karel Čapek", "R.U.R."),
        "Karel%20%C4%8Capek%7CR.U.R."
    );
    assert_eq!(work_id("a_b-c.d~e", "x"), "a_b-c.d~e%7Cx");
}

#[test]
fn default_list_resolves_fully() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.default_ids().len(), 20);
    assert_eq!(catalog.default_list().len(), 20);
    for id in catalog.default_ids() {
        assert!(catalog.get(id).is_some(), "unresolvable default id: {id}");
    }
}
