use std::cell::RefCell;
use std::rc::Rc;

use recordtable::filter::{filter_rows, row_text};
use recordtable::prelude::*;
use recordtable::sort::sort_rows;

fn people() -> Vec<Row> {
    vec![
        Row::new(1, ["Bob", "Builder"]),
        Row::new(2, ["Amy", "Pond"]),
        Row::new(3, ["Rory", "Williams"]),
        Row::new(4, ["amy", "Santiago"]),
    ]
}

fn numbered(count: i64) -> Vec<Row> {
    (1..=count)
        .map(|n| Row::new(n, [format!("row {n}")]))
        .collect()
}

fn ids(rows: &[&Row]) -> Vec<RowId> {
    rows.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_filter_empty_search_is_identity() {
    let rows = people();
    let filtered = filter_rows(&rows, "");
    assert_eq!(filtered.len(), rows.len());
    for (kept, original) in filtered.iter().zip(&rows) {
        assert_eq!(kept.id, original.id);
    }
}

#[test]
fn test_filter_matches_exactly_the_rows_containing_the_search() {
    let rows = people();
    for search in ["amy", "AMY", "o", "iams", "zzz", "Bob Build"] {
        let filtered = ids(&filter_rows(&rows, search));
        for row in &rows {
            let expected = row_text(row).to_lowercase().contains(&search.to_lowercase());
            assert_eq!(
                filtered.contains(&row.id),
                expected,
                "row {} with search {search:?}",
                row.id
            );
        }
    }
}

#[test]
fn test_at_most_one_column_is_sorted() {
    let columns = vec![
        Column::new("first", "First").sortable(),
        Column::new("last", "Last").sortable(),
    ];
    let mut table = Table::with_rows(columns, people(), TableOptions::new()).unwrap();

    for click in ["first", "last", "last", "first", "first", "last"] {
        table.on_header_click(click);
        let view = table.view();
        let sorted = view
            .header
            .as_ref()
            .unwrap()
            .columns
            .iter()
            .filter(|c| c.sort.is_some())
            .count();
        assert_eq!(sorted, 1);
        assert_eq!(table.sort().unwrap().column, click);
    }
}

#[test]
fn test_sorting_sorted_rows_keeps_order() {
    let columns = vec![Column::new("first", "First").sortable()];
    let rows = vec![
        Row::new(1, ["amy"]),
        Row::new(2, ["Amy"]),
        Row::new(3, ["AMY"]),
        Row::new(4, ["bob"]),
    ];
    let mut refs: Vec<&Row> = rows.iter().collect();
    sort_rows(&mut refs, &columns, Some(&SortState::ascending("first")));
    assert_eq!(
        ids(&refs),
        vec![RowId::Int(1), RowId::Int(2), RowId::Int(3), RowId::Int(4)]
    );
}

#[test]
fn test_replacing_data_drops_exactly_the_missing_selected_row() {
    let columns = vec![Column::new("first", "First")];
    let options = TableOptions::new().checkboxes().multi_select();
    let mut table = Table::with_rows(columns, people(), options).unwrap();
    for id in [1, 2, 3] {
        table.on_checkbox_click(&RowId::Int(id));
    }

    let remaining: Vec<Row> = people()
        .into_iter()
        .filter(|r| r.id != RowId::Int(2))
        .collect();
    table.set_data(remaining).unwrap();

    assert_eq!(table.selected(), &[RowId::Int(1), RowId::Int(3)]);
}

#[test]
fn test_single_select_keeps_only_latest() {
    let columns = vec![Column::new("first", "First")];
    let options = TableOptions::new().checkboxes();
    let mut table = Table::with_rows(columns, people(), options).unwrap();

    table.on_row_click(&RowId::Int(1));
    table.on_row_click(&RowId::Int(2));

    assert_eq!(table.selected(), &[RowId::Int(2)]);
}

#[test]
fn test_page_clamps_when_data_shrinks() {
    let columns = vec![Column::new("label", "Label")];
    let options = TableOptions::new().paginated(10);
    let mut table = Table::with_rows(columns, numbered(25), options).unwrap();
    table.on_page_target(PageTarget::Page(3));
    assert_eq!(table.pagination().page(), 3);

    table.set_data(numbered(12)).unwrap();

    let page = table.pagination().page();
    assert!((1..=2).contains(&page));
    assert_eq!(page, 1);
    assert_eq!(table.page_rows().len(), 10);
}

#[test]
fn test_last_page_clamp_policy() {
    let columns = vec![Column::new("label", "Label")];
    let options = TableOptions::new()
        .paginated(10)
        .clamp_policy(ClampPolicy::LastPage);
    let mut table = Table::with_rows(columns, numbered(25), options).unwrap();
    table.on_page_target(PageTarget::Last);

    table.set_data(numbered(12)).unwrap();

    assert_eq!(table.pagination().page(), 2);
    assert_eq!(table.page_rows().len(), 2);
}

#[test]
fn test_external_pagination_is_never_mutated_locally() {
    let requested = Rc::new(RefCell::new(Vec::new()));
    let sink = requested.clone();
    let columns = vec![Column::new("label", "Label")];
    let mut table = Table::with_rows(columns, numbered(10), TableOptions::new().paginated(10))
        .unwrap()
        .with_external_pagination(PageDescriptor {
            page: 2,
            total_items: 25,
            page_size: 10,
            loaded_page_size: 10,
            total_pages: 3,
            items_per_page_options: vec![10, 20],
        })
        .with_callbacks(Callbacks::new().on_page_changed(move |page| sink.borrow_mut().push(page)));

    table.set_data(numbered(3)).unwrap();
    assert_eq!(table.pagination().page(), 2);
    assert_eq!(table.pagination().page_size(), 10);

    assert!(table.on_page_target(PageTarget::Next).is_handled());
    assert_eq!(*requested.borrow(), vec![3]);
    assert_eq!(table.pagination().page(), 2);

    assert!(table.on_page_size_select(20).is_handled());
    assert_eq!(table.pagination().page_size(), 10);
}

#[test]
fn test_header_click_scenario() {
    let columns = vec![Column::new("name", "Name").sortable()];
    let rows = vec![Row::new(1, ["Bob"]), Row::new(2, ["Amy"])];
    let mut table = Table::with_rows(columns, rows, TableOptions::new()).unwrap();

    let names = |table: &Table| -> Vec<String> {
        table
            .page_rows()
            .iter()
            .map(|r| r.columns[0].visible_text())
            .collect()
    };

    table.on_header_click("name");
    assert_eq!(names(&table), vec!["Amy", "Bob"]);
    assert_eq!(table.sort(), Some(&SortState::ascending("name")));

    table.on_header_click("name");
    assert_eq!(names(&table), vec!["Bob", "Amy"]);
    assert_eq!(table.sort(), Some(&SortState::descending("name")));
}

#[test]
fn test_checkbox_and_select_all_scenario() {
    let calls: Rc<RefCell<Vec<Vec<RowId>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let columns = vec![Column::new("name", "Name")];
    let rows = vec![Row::new(1, ["Bob"]), Row::new(2, ["Amy"])];
    let mut table = Table::with_rows(columns, rows, TableOptions::new().checkboxes().multi_select())
        .unwrap()
        .with_callbacks(
            Callbacks::new().on_checked_rows_changed(move |ids| sink.borrow_mut().push(ids.to_vec())),
        );

    table.on_checkbox_click(&RowId::Int(1));
    table.on_checkbox_click(&RowId::Int(2));
    {
        let calls = calls.borrow();
        let last = calls.last().unwrap();
        assert_eq!(last.len(), 2);
        assert!(last.contains(&RowId::Int(1)));
        assert!(last.contains(&RowId::Int(2)));
    }
    assert!(table.all_checked());

    assert!(table.on_all_checkbox_click().is_handled());
    assert_eq!(calls.borrow().len(), 3);
    assert!(calls.borrow().last().unwrap().is_empty());
}

#[test]
fn test_external_summary_scenario() {
    let columns = vec![Column::new("label", "Label")];
    let table = Table::with_rows(columns, numbered(10), TableOptions::new().paginated(10))
        .unwrap()
        .with_external_pagination(PageDescriptor {
            page: 2,
            total_items: 25,
            page_size: 10,
            loaded_page_size: 10,
            total_pages: 3,
            items_per_page_options: vec![10, 25, 50],
        });

    let footer = table.view().footer.unwrap();
    assert_eq!(footer.summary.to_string(), "Showing 11 to 20 items of 25");
}
