use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;

use recordtable::json::{columns_from_json, options_from_json, rows_from_json};
use recordtable::prelude::*;
use recordtable::text::render_table;
use simplelog::{Config, LevelFilter, WriteLogger};

const COLUMNS: &str = r#"[
    { "id": "name", "content": "Account", "sortable": true, "flex": 2 },
    { "id": "owner", "content": "Owner", "sortable": true, "flex": 1 },
    { "id": "balance", "content": "Balance", "sortable": true,
      "sortType": "numeric", "align": "right", "width": 10 },
    { "id": "opened", "content": "Opened", "sortable": true,
      "sortType": "date", "width": 12 },
    { "id": "status", "content": "Status", "width": 8 }
]"#;

const OPTIONS: &str = r#"{
    "canSearch": true,
    "hasCheckboxes": true,
    "hasAllCheckBox": true,
    "multiSelect": true,
    "hasPagination": true,
    "hasDetails": true,
    "pageSize": 5,
    "itemsPerPageOptions": [5, 10]
}"#;

const ROWS: &str = r#"[
    { "id": 1, "columns": ["Contoso", "Ada", 1520.5, "2021-03-04", { "label": "active" }],
      "detailColumns": ["Primary contact: ada@contoso.example"] },
    { "id": 2, "columns": ["Fabrikam", "Grace", 980, "Jan 15, 2024", { "label": "active" }] },
    { "id": 3, "columns": ["Northwind", "Alan", 12000, "2019-12-24 18:00", { "label": "on hold" }],
      "detailColumns": ["Renewal due", "Two open tickets"] },
    { "id": 4, "columns": ["Tailspin", "Ada", 45, "2022-07-01", { "label": "closed" }] },
    { "id": 5, "columns": ["Wingtip", "Linus", 310, "2023-05-19", { "label": "active" }] },
    { "id": 6, "columns": ["Adventure Works", "Grace", 7600, "2020-11-30", { "label": "active" }] },
    { "id": 7, "columns": ["Litware", "Barbara", 0, "2024-02-02", { "label": "new" }] }
]"#;

fn show(title: &str, table: &Table) {
    println!("== {title}");
    println!("{}", render_table(&table.view(), 72));
    println!();
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("accounts.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let checked = Rc::new(RefCell::new(Vec::new()));
    let sink = checked.clone();
    let callbacks = Callbacks::new()
        .on_checked_rows_changed(move |ids| *sink.borrow_mut() = ids.to_vec())
        .on_page_changed(|page| log::info!("page changed to {page}"));

    let picker = NewRowPicker::new(vec![
        PickOption::new(8, "Proseware"),
        PickOption::new(9, "Woodgrove"),
    ])
    .on_submit(|picked| {
        for option in picked {
            log::info!("add row {} ({})", option.id, option.label);
        }
    });

    let mut table = Table::with_rows(
        columns_from_json(COLUMNS)?,
        rows_from_json(ROWS)?,
        options_from_json(OPTIONS)?,
    )?
    .with_callbacks(callbacks)
    .with_new_row_picker(picker);
    show("initial", &table);

    table.on_header_click("balance");
    table.on_header_click("balance");
    show("by balance, descending", &table);

    table.on_checkbox_click(&RowId::Int(3));
    table.on_row_click(&RowId::Int(1));
    show("two rows checked, Contoso expanded", &table);

    table.on_page_target(PageTarget::Next);
    show("second page", &table);

    table.on_search_input("grace");
    show("search for grace", &table);

    if let Some(picker) = table.new_row_picker_mut() {
        picker.toggle(&RowId::Int(9));
        picker.submit();
    }

    let selected: Vec<String> = checked.borrow().iter().map(|id| id.to_string()).collect();
    println!("checked rows: {}", selected.join(", "));
    Ok(())
}
