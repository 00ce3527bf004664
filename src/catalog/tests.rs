use super::*;

#[test]
fn builtin_order_is_canonical() {
    let catalog = Catalog::builtin();
    let ids: Vec<&str> = catalog.all().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["javascript", "python", "rust", "go", "java", "docker"]
    );
}

#[test]
fn by_id_returns_the_same_entry() {
    let catalog = Catalog::builtin();
    for entry in catalog.all() {
        let found = catalog.by_id(&entry.id).expect("entry should be found");
        assert_eq!(found, entry);
    }
}

#[test]
fn by_id_unknown_is_none() {
    let catalog = Catalog::builtin();
    assert!(catalog.by_id("cobol").is_none());
    assert!(catalog.by_id("").is_none());
}

#[test]
fn featured_takes_a_prefix_in_order() {
    let catalog = Catalog::builtin();
    let featured = catalog.featured(6);
    assert_eq!(featured.len(), 6);
    assert_eq!(featured, catalog.all());

    let top_two = catalog.featured(2);
    assert_eq!(top_two[0].id, "javascript");
    assert_eq!(top_two[1].id, "python");

    // Asking for more than exists clamps instead of panicking.
    assert_eq!(catalog.featured(100).len(), catalog.len());
}

#[test]
fn install_command_covers_every_os() {
    let catalog = Catalog::builtin();
    for entry in catalog.all() {
        for os in Os::ALL {
            assert!(
                !entry.install_command.for_os(os).is_empty(),
                "{} has no {} install command",
                entry.id,
                os
            );
        }
    }
}

#[test]
fn category_index_is_a_partition() {
    let catalog = Catalog::builtin();
    let index = CategoryIndex::build(&catalog);

    let labels: Vec<&str> = index.labels().collect();
    assert_eq!(labels, vec!["Runtime", "Language", "Tool"]);

    // Every entry appears exactly once, and the union equals the catalog.
    let mut seen: Vec<&str> = Vec::new();
    for section in index.sections() {
        for entry in &section.entries {
            assert_eq!(entry.category, section.label);
            assert!(!seen.contains(&entry.id.as_str()), "{} grouped twice", entry.id);
            seen.push(&entry.id);
        }
    }
    assert_eq!(seen.len(), catalog.len());

    // Within a section, entries keep catalog order.
    let languages: Vec<&str> = index.sections()[1]
        .entries
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(languages, vec!["python", "rust", "go", "java"]);
}

#[test]
fn category_index_is_deterministic() {
    let catalog = Catalog::builtin();
    let first = CategoryIndex::build(&catalog).entry_ids();
    let second = CategoryIndex::build(&catalog).entry_ids();
    assert_eq!(first, second);
}

#[test]
fn os_round_trips_through_strings() {
    for os in Os::ALL {
        assert_eq!(os.as_str().parse::<Os>().unwrap(), os);
    }
    assert_eq!("macOS".parse::<Os>().unwrap(), Os::Mac);
    assert!("beos".parse::<Os>().is_err());
}

#[test]
fn os_cycling_wraps() {
    assert_eq!(Os::Linux.next(), Os::Windows);
    assert_eq!(Os::Windows.prev(), Os::Linux);
    for os in Os::ALL {
        assert_eq!(os.next().prev(), os);
    }
}

#[test]
fn entry_serializes_camel_case() {
    let catalog = Catalog::builtin();
    let value = serde_json::to_value(catalog.by_id("rust").unwrap()).unwrap();
    assert_eq!(value["id"], "rust");
    assert!(value["installCommand"]["windows"].is_string());
    assert!(value["verifyCommand"].is_string());
    assert!(value["officialDocs"].is_string());
}

#[test]
fn empty_optional_sections_are_omitted() {
    let mut entry = Catalog::builtin().by_id("go").unwrap().clone();
    entry.additional_steps.clear();
    entry.prerequisites.clear();
    let value = serde_json::to_value(&entry).unwrap();
    assert!(value.get("additionalSteps").is_none());
    assert!(value.get("prerequisites").is_none());

    // Absent and empty mean the same thing on the way back in.
    let parsed: Entry = serde_json::from_value(value).unwrap();
    assert!(parsed.additional_steps.is_empty());
    assert!(parsed.prerequisites.is_empty());
}
