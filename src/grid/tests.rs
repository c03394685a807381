//! Scenario tests for the grid, driven through its public operations and key
//! messages the way an application would drive it.

use super::*;
use crate::error::ActionError;
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn press(grid: &mut Model<Value>, c: char) {
    grid.update(key(KeyCode::Char(c)));
}

fn plain(grid: &Model<Value>) -> String {
    lipgloss::strip_ansi(&grid.view())
}

fn names(rows: &[&Value]) -> Vec<String> {
    rows.iter()
        .map(|r| r["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn three_people() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "Jane Smith", "email": "jane@example.com", "balance": 40}),
        json!({"id": 2, "name": "Bob Johnson", "email": "bob@example.com", "balance": 250}),
        json!({"id": 3, "name": "John Doe", "email": "john@example.com", "balance": 9}),
    ]
}

fn numbered(n: usize) -> Vec<Value> {
    (1..=n)
        .map(|i| json!({"id": i, "name": format!("Customer {:02}", i), "balance": (i * 7) % 11}))
        .collect()
}

fn people_grid(rows: Vec<Value>) -> Model<Value> {
    Model::new(vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email"),
        Column::new("balance", "Balance").sortable().with_align(Align::Right),
    ])
    .with_rows(rows)
}

#[test]
fn test_search_keeps_only_matching_rows() {
    let mut grid = people_grid(three_people());
    grid.set_search_term("John");
    assert_eq!(names(&grid.visible_rows()), vec!["Bob Johnson", "John Doe"]);

    let view = plain(&grid);
    assert!(view.contains("John Doe"));
    assert!(view.contains("Bob Johnson"));
    assert!(!view.contains("Jane Smith"));

    grid.clear_search();
    assert_eq!(grid.visible_len(), 3);
}

#[test]
fn test_search_typed_through_the_search_box() {
    let mut grid = people_grid(three_people());
    press(&mut grid, '/');
    assert!(grid.is_searching());
    for c in "JOHN".chars() {
        press(&mut grid, c);
    }
    assert_eq!(grid.visible_len(), 2);

    // While searching, letters are text, not commands.
    press(&mut grid, 'd');
    assert_eq!(grid.search_term(), "JOHNd");
    grid.update(key(KeyCode::Backspace));

    grid.update(key(KeyCode::Enter));
    assert!(!grid.is_searching());
    assert_eq!(grid.search_term(), "JOHN");

    grid.update(key(KeyCode::Esc));
    assert_eq!(grid.search_term(), "");
    assert_eq!(grid.visible_len(), 3);
}

#[test]
fn test_escape_while_searching_discards_term() {
    let mut grid = people_grid(three_people());
    press(&mut grid, '/');
    press(&mut grid, 'q');
    assert_eq!(grid.visible_len(), 0);
    grid.update(key(KeyCode::Esc));
    assert!(!grid.is_searching());
    assert_eq!(grid.visible_len(), 3);
}

#[test]
fn test_search_resets_to_first_page() {
    let mut grid = people_grid(numbered(25));
    grid.last_page();
    grid.set_search_term("customer");
    assert_eq!(grid.current_page(), 1);
}

#[test]
fn test_unfilterable_columns_are_not_searched() {
    let rows = vec![json!({"id": 1, "name": "Acme", "notes": "priority"})];
    let columns = vec![
        Column::new("name", "Name"),
        Column::new("notes", "Notes").filterable(false),
    ];
    let mut grid = Model::new(columns.clone()).with_rows(rows.clone());
    grid.set_search_term("priority");
    assert_eq!(grid.visible_len(), 0);

    let mut unscoped = Model::new(columns)
        .with_rows(rows)
        .with_config(GridConfig {
            filterable: false,
            ..GridConfig::default()
        });
    unscoped.set_search_term("priority");
    assert_eq!(unscoped.visible_len(), 1);
}

#[test]
fn test_fuzzy_search_mode() {
    let mut grid = people_grid(three_people()).with_search_mode(SearchMode::Fuzzy);
    grid.set_search_term("bjhnsn");
    assert_eq!(names(&grid.visible_rows()), vec!["Bob Johnson"]);
}

#[test]
fn test_header_sort_puts_bob_first() {
    let mut grid = people_grid(three_people());
    assert!(grid.toggle_sort("name"));
    assert_eq!(names(&grid.page_rows())[0], "Bob Johnson");

    let view = plain(&grid);
    let bob = view.find("Bob Johnson").unwrap();
    let jane = view.find("Jane Smith").unwrap();
    assert!(bob < jane);
    assert!(view.contains("Name ▲"));
}

#[test]
fn test_sort_cycle_on_numeric_column() {
    let mut grid = people_grid(numbered(12)).with_page_size(50);
    let original = names(&grid.visible_rows());
    let balance = |g: &Model<Value>| -> Vec<f64> {
        g.visible_rows()
            .iter()
            .map(|r| r["balance"].as_f64().unwrap())
            .collect()
    };

    grid.toggle_sort("balance");
    let asc = balance(&grid);
    assert!(asc.windows(2).all(|w| w[0] <= w[1]));

    grid.toggle_sort("balance");
    let desc = balance(&grid);
    assert!(desc.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(grid.sort_config(), Some(&SortConfig::desc("balance")));

    grid.toggle_sort("balance");
    assert_eq!(grid.sort_config(), None);
    assert_eq!(names(&grid.visible_rows()), original);
}

#[test]
fn test_sort_by_keyboard_uses_column_cursor() {
    let mut grid = people_grid(three_people());
    grid.update(key(KeyCode::Tab));
    grid.update(key(KeyCode::Tab));
    assert_eq!(grid.column_cursor(), 2);
    press(&mut grid, 's');
    assert_eq!(grid.sort_config(), Some(&SortConfig::asc("balance")));
    assert_eq!(names(&grid.page_rows())[0], "John Doe");
}

#[test]
fn test_unsortable_column_ignores_toggle() {
    let mut grid = people_grid(three_people());
    assert!(!grid.toggle_sort("email"));
    assert!(!grid.toggle_sort("no_such_column"));
    assert_eq!(grid.sort_config(), None);
}

#[test]
fn test_pagination_text_and_slices() {
    let mut grid = people_grid(numbered(25));
    assert_eq!(grid.page_label(), "Page 1 of 3");
    assert_eq!(grid.summary(), "Showing 1 to 10 of 25 results");
    assert_eq!(names(&grid.page_rows())[0], "Customer 01");
    assert_eq!(grid.page_rows().len(), 10);

    grid.go_to_page(3);
    assert_eq!(grid.page_rows().len(), 5);
    assert_eq!(names(&grid.page_rows())[0], "Customer 21");
    let view = plain(&grid);
    assert!(view.contains("Showing 21 to 25 of 25 results"));
    assert!(view.contains("Page 3 of 3"));
}

#[test]
fn test_page_counts_add_up() {
    for (total, size) in [(25, 10), (30, 10), (7, 3), (1, 5)] {
        let mut grid = people_grid(numbered(total)).with_page_size(size);
        let mut seen = 0;
        for page in 1..=grid.total_pages() {
            grid.go_to_page(page);
            let count = grid.page_rows().len();
            assert!(count <= size);
            seen += count;
            if page == grid.total_pages() {
                let expected = if total % size == 0 { size } else { total % size };
                assert_eq!(count, expected);
            }
        }
        assert_eq!(seen, total);
    }
}

#[test]
fn test_page_keys() {
    let mut grid = people_grid(numbered(25));
    grid.update(key(KeyCode::Right));
    assert_eq!(grid.current_page(), 2);
    press(&mut grid, 'G');
    assert_eq!(grid.current_page(), 3);
    press(&mut grid, 'l');
    assert_eq!(grid.current_page(), 3);
    press(&mut grid, 'h');
    assert_eq!(grid.current_page(), 2);
    press(&mut grid, 'g');
    assert_eq!(grid.current_page(), 1);
}

#[test]
fn test_go_to_page_clamps() {
    let mut grid = people_grid(numbered(25));
    grid.go_to_page(99);
    assert_eq!(grid.current_page(), 3);
    grid.go_to_page(0);
    assert_eq!(grid.current_page(), 1);
}

#[test]
fn test_empty_data_renders_only_the_empty_message() {
    let grid = people_grid(Vec::new());
    let view = plain(&grid);
    let lines: Vec<&str> = view.lines().collect();
    let header = lines.iter().position(|l| l.contains("Name")).unwrap();
    assert_eq!(lines[header + 1].trim(), "No data available");
    assert!(!view.contains("Showing"));
    assert!(grid.page_rows().is_empty());
}

#[test]
fn test_custom_empty_message_when_search_matches_nothing() {
    let mut grid = people_grid(three_people()).with_empty_message("No customers found");
    grid.set_search_term("zzz");
    assert!(plain(&grid).contains("No customers found"));
}

#[test]
fn test_select_all_is_scoped_to_the_page() {
    let mut grid = people_grid(numbered(25));
    grid.toggle_select_all();
    assert_eq!(grid.selection().len(), 10);
    assert!(grid.all_selected());

    grid.next_page();
    assert!(!grid.all_selected());
    assert!(grid.page_indices().iter().all(|&i| !grid.is_selected(i)));
    let view = plain(&grid);
    assert!(view.contains("  [ ] Name"));

    grid.prev_page();
    grid.toggle_select_all();
    assert!(grid.selection().is_empty());
}

#[test]
fn test_select_all_filtered_scope() {
    let mut grid = people_grid(numbered(25)).with_select_all_scope(SelectAllScope::Filtered);
    grid.set_search_term("customer 1");
    grid.toggle_select_all();
    assert_eq!(grid.selection().len(), 10);
    grid.clear_search();
    assert_eq!(grid.selection().len(), 10);
}

#[test]
fn test_selection_follows_rows_across_sorting() {
    let mut grid = people_grid(three_people());
    grid.toggle_row(0);
    assert!(grid.selection().contains(&RowId::from("1")));
    grid.toggle_sort("name");
    let jane = grid
        .page_indices()
        .iter()
        .position(|&i| grid.rows()[i]["name"] == "Jane Smith")
        .unwrap();
    assert!(grid.is_selected(grid.page_indices()[jane]));
}

#[test]
fn test_delete_label_tracks_selection_size() {
    let mut grid = people_grid(numbered(25))
        .with_handlers(Handlers::new().on_bulk_delete(|_| Ok(())));
    assert!(!plain(&grid).contains("Delete ("));

    press(&mut grid, ' ');
    assert!(plain(&grid).contains("Delete (1)"));
    grid.update(key(KeyCode::Down));
    press(&mut grid, ' ');
    assert!(plain(&grid).contains("Delete (2)"));
    grid.next_page();
    grid.toggle_select_all();
    assert!(plain(&grid).contains(&format!("Delete ({})", grid.selection().len())));
    assert_eq!(grid.selection().len(), 12);
}

#[test]
fn test_delete_label_needs_a_handler() {
    let mut grid = people_grid(three_people());
    grid.toggle_row(0);
    let view = plain(&grid);
    assert!(view.contains("1 selected"));
    assert!(!view.contains("Delete (1)"));
}

#[test]
fn test_edit_receives_the_original_row() {
    let calls: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let clicks = Arc::new(Mutex::new(0));
    let seen = Arc::clone(&calls);
    let clicked = Arc::clone(&clicks);

    let mut grid = people_grid(three_people()).with_handlers(
        Handlers::new()
            .on_edit(move |row: &Value| {
                seen.lock().unwrap().push(row as *const Value as usize);
                Ok(())
            })
            .on_row_click(move |_| {
                *clicked.lock().unwrap() += 1;
                Ok(())
            }),
    );

    press(&mut grid, 'e');

    let first = grid.page_indices()[0];
    let expected = &grid.rows()[first] as *const Value as usize;
    assert_eq!(*calls.lock().unwrap(), vec![expected]);
    assert_eq!(*clicks.lock().unwrap(), 0);
}

#[test]
fn test_row_actions_target_the_cursor_row() {
    let viewed = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&viewed);
    let mut grid = people_grid(three_people()).with_handlers(Handlers::new().on_view(
        move |row: &Value| {
            log.lock().unwrap().push(row["name"].as_str().unwrap().to_string());
            Ok(())
        },
    ));
    grid.toggle_sort("name");
    grid.update(key(KeyCode::Down));
    press(&mut grid, 'v');
    grid.update(key(KeyCode::Enter));
    assert_eq!(*viewed.lock().unwrap(), vec!["Jane Smith"]);
}

#[test]
fn test_missing_handler_means_no_action() {
    let mut grid = people_grid(three_people());
    assert!(grid.delete_row(0).is_none());
    assert!(grid.bulk_delete().is_none());
    let view = plain(&grid);
    assert!(!view.contains("Actions"));
}

#[test]
fn test_action_labels_render_per_row() {
    let grid = people_grid(three_people()).with_handlers(
        Handlers::new()
            .on_view(|_| Ok(()))
            .on_delete(|_| Ok(()))
            .with_action(RowAction::new("Archive", &["z"], |_| Ok(()))),
    );
    let view = plain(&grid);
    assert!(view.contains("Actions"));
    assert_eq!(view.matches("View · Delete · Archive").count(), 3);
}

#[test]
fn test_failed_handler_reports_status_and_keeps_state() {
    let mut grid = people_grid(three_people()).with_handlers(
        Handlers::new().on_delete(|_| Err(ActionError::Conflict("customer has open invoices".into()))),
    );
    grid.toggle_row(0);
    let result = grid.delete_row(0);
    assert!(matches!(result, Some(Err(ActionError::Conflict(_)))));
    assert_eq!(
        grid.status(),
        Some(&Status::Error(
            "Delete failed: conflict: customer has open invoices".into()
        ))
    );
    assert!(plain(&grid).contains("Delete failed: conflict: customer has open invoices"));
    assert_eq!(grid.selection().len(), 1);
    assert_eq!(grid.visible_len(), 3);

    // The next key press clears the line.
    grid.update(key(KeyCode::Down));
    assert!(grid.status().is_none());
}

#[test]
fn test_bulk_delete_gets_selected_rows_in_sort_order() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    let mut grid = people_grid(three_people()).with_handlers(Handlers::new().on_bulk_delete(
        move |rows: &[&Value]| {
            let mut out = sink.lock().unwrap();
            out.extend(rows.iter().map(|r| r["name"].as_str().unwrap().to_string()));
            Ok(())
        },
    ));
    grid.toggle_row(0);
    grid.toggle_row(2);
    grid.toggle_sort("name");
    grid.set_search_term("jane");

    press(&mut grid, 'D');
    assert_eq!(*received.lock().unwrap(), vec!["Jane Smith", "John Doe"]);
    assert!(grid.selection().is_empty());
}

#[test]
fn test_failed_bulk_delete_keeps_selection() {
    let mut grid = people_grid(three_people())
        .with_handlers(Handlers::new().on_bulk_delete(|_| Err(ActionError::failed("offline"))));
    grid.toggle_select_all();
    assert!(matches!(grid.bulk_delete(), Some(Err(_))));
    assert_eq!(grid.selection().len(), 3);
    assert!(plain(&grid).contains("Bulk delete failed: offline"));
}

#[test]
fn test_export_uses_selection_or_current_page() {
    let counts = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&counts);
    let mut grid = people_grid(numbered(25)).with_handlers(Handlers::new().on_export(
        move |rows: &[&Value]| {
            sink.lock().unwrap().push(rows.len());
            Ok(())
        },
    ));

    press(&mut grid, 'x');
    grid.toggle_row(0);
    grid.toggle_row(1);
    press(&mut grid, 'x');
    assert_eq!(*counts.lock().unwrap(), vec![10, 2]);
    assert_eq!(grid.selection().len(), 2);
    assert!(plain(&grid).contains("Exported 2 rows"));
}

#[test]
fn test_export_disabled_by_config() {
    let mut grid = people_grid(three_people())
        .with_exportable(false)
        .with_handlers(Handlers::new().on_export(|_| Ok(())));
    assert!(grid.export().is_none());
    assert!(!plain(&grid).contains("Export"));
}

#[test]
fn test_custom_action_key() {
    let archived = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&archived);
    let mut grid = people_grid(three_people()).with_handlers(Handlers::new().with_action(
        RowAction::new("Archive", &["z"], move |row: &Value| {
            sink.lock().unwrap().push(row["id"].as_u64().unwrap());
            Ok(())
        }),
    ));
    grid.update(key(KeyCode::Down));
    press(&mut grid, 'z');
    assert_eq!(*archived.lock().unwrap(), vec![2]);
}

#[test]
fn test_custom_action_wins_over_page_keys() {
    let archived = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&archived);
    let mut grid = people_grid(numbered(25)).with_handlers(Handlers::new().with_action(
        RowAction::new("Lock", &["l"], move |row: &Value| {
            sink.lock().unwrap().push(row["id"].as_u64().unwrap());
            Ok(())
        }),
    ));
    press(&mut grid, 'l');
    assert_eq!(*archived.lock().unwrap(), vec![1]);
    assert_eq!(grid.current_page(), 1);

    // Other page keys still page.
    grid.update(key(KeyCode::Right));
    assert_eq!(grid.current_page(), 2);
}

#[test]
fn test_loading_shows_skeleton_and_blocks_actions() {
    let mut grid = people_grid(three_people())
        .with_page_size(3)
        .with_handlers(Handlers::new().on_edit(|_| Ok(())));
    assert!(grid.set_loading(true).is_some());

    let view = plain(&grid);
    assert!(view.contains("Loading..."));
    assert_eq!(view.lines().filter(|l| l.contains('░')).count(), 3);
    assert!(!view.contains("Jane Smith"));
    assert!(grid.edit_row(0).is_none());

    press(&mut grid, '/');
    assert!(!grid.is_searching());

    assert!(grid.set_loading(false).is_none());
    assert!(plain(&grid).contains("Jane Smith"));
}

#[test]
fn test_skeleton_rows_are_capped() {
    let mut grid = people_grid(numbered(25));
    let _ = grid.set_loading(true);
    let view = plain(&grid);
    assert_eq!(view.lines().filter(|l| l.contains('░')).count(), 5);
}

#[test]
fn test_spinner_ticks_only_while_loading() {
    let mut grid = people_grid(three_people());
    let tick = grid.spinner.tick_msg();
    assert!(grid.update(Box::new(tick)).is_none());

    let _ = grid.set_loading(true);
    let tick = grid.spinner.tick_msg();
    assert!(grid.update(Box::new(tick)).is_some());
    assert_eq!(grid.spinner.frame(), 1);
}

#[test]
fn test_error_replaces_table() {
    let mut grid = people_grid(three_people()).with_title("Customers");
    grid.set_error(Some("Failed to load customers".into()));
    let view = plain(&grid);
    assert!(view.contains("Customers"));
    assert!(view.contains("Failed to load customers"));
    assert!(!view.contains("Jane Smith"));
    assert!(!view.contains("Showing"));

    grid.set_error(None);
    assert!(plain(&grid).contains("Jane Smith"));
}

#[test]
fn test_empty_error_message_keeps_table() {
    let grid = people_grid(three_people()).with_error("");
    assert_eq!(grid.error(), None);
    assert!(plain(&grid).contains("Jane Smith"));
}

#[test]
fn test_set_rows_keeps_view_state() {
    let mut grid = people_grid(numbered(25));
    grid.toggle_sort("name");
    grid.toggle_row(0);
    grid.last_page();

    grid.set_rows(numbered(12));
    assert_eq!(grid.current_page(), 2);
    assert_eq!(grid.sort_config(), Some(&SortConfig::asc("name")));
    assert_eq!(grid.selection().len(), 1);

    grid.set_rows(numbered(12).into_iter().skip(1).collect());
    assert!(grid.selection().is_empty());
}

#[test]
fn test_reset_clears_view_state() {
    let mut grid = people_grid(numbered(25));
    grid.set_search_term("customer 2");
    grid.toggle_sort("balance");
    grid.toggle_select_all();

    press(&mut grid, 'r');
    assert_eq!(grid.search_term(), "");
    assert_eq!(grid.sort_config(), None);
    assert!(grid.selection().is_empty());
    assert_eq!(grid.current_page(), 1);
    assert_eq!(grid.visible_len(), 25);
}

#[test]
fn test_rows_without_ids_are_keyed_by_position() {
    let mut grid = Model::new(vec![Column::new("sku", "SKU")])
        .with_rows(vec![json!({"sku": "A-1"}), json!({"sku": "B-2"})]);
    grid.toggle_row(1);
    assert!(grid.selection().contains(&RowId::Index(1)));
    assert!(!grid.selection().contains(&RowId::from("1")));
    assert_eq!(grid.row_id(0), RowId::Index(0));
}

#[test]
fn test_reported_id_does_not_select_idless_row_at_same_index() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    let mut grid = Model::new(vec![Column::new("name", "Name")])
        .with_rows(vec![json!({"id": 1, "name": "Acme"}), json!({"name": "Globex"})])
        .with_handlers(Handlers::new().on_bulk_delete(move |rows: &[&Value]| {
            let mut out = sink.lock().unwrap();
            out.extend(rows.iter().map(|r| r["name"].as_str().unwrap().to_string()));
            Ok(())
        }));

    grid.toggle_row(0);
    assert!(grid.is_selected(0));
    assert!(!grid.is_selected(1));
    assert_eq!(grid.selected_rows().len(), 1);

    press(&mut grid, 'D');
    assert_eq!(*received.lock().unwrap(), vec!["Acme"]);
}

#[test]
fn test_set_rows_drops_positional_selection() {
    let mut grid = Model::new(vec![Column::new("name", "Name")]).with_rows(vec![
        json!({"name": "A"}),
        json!({"name": "B"}),
        json!({"name": "C"}),
    ]);
    grid.toggle_row(1);
    assert_eq!(names(&grid.selected_rows()), vec!["B"]);

    grid.set_rows(vec![json!({"name": "A"}), json!({"name": "C"})]);
    assert!(grid.selection().is_empty());
    assert!(grid.selected_rows().is_empty());
    assert!(!plain(&grid).contains("1 selected"));
}

#[test]
fn test_selection_disabled() {
    let mut grid = people_grid(three_people()).with_selectable(false);
    assert!(!grid.toggle_row(0));
    grid.toggle_select_all();
    assert!(grid.selection().is_empty());
    assert!(!plain(&grid).contains("[ ]"));
}

#[test]
fn test_search_box_hidden_when_not_searchable() {
    let mut grid = people_grid(three_people()).with_searchable(false);
    assert!(!plain(&grid).contains("Search"));
    press(&mut grid, '/');
    assert!(!grid.is_searching());
}

#[test]
fn test_nested_keys_and_renderers() {
    let grid = Model::new(vec![
        Column::new("name", "Company"),
        Column::new("contactInfo.email", "Email"),
        Column::new("active", "Status")
            .with_render(|v, _| if *v == CellValue::Bool(true) { "Active".into() } else { "Inactive".into() }),
    ])
    .with_rows(vec![
        json!({"id": "c1", "name": "Acme", "contactInfo": {"email": "ops@acme.test"}, "active": true}),
        json!({"id": "c2", "name": "Initech", "active": false}),
    ]);
    let view = plain(&grid);
    assert!(view.contains("ops@acme.test"));
    assert!(view.contains("Active"));
    assert!(view.contains("Inactive"));
}

#[test]
fn test_render_is_deterministic() {
    let build = || {
        let mut grid = people_grid(numbered(25)).with_title("Customers");
        grid.toggle_sort("balance");
        grid
    };
    assert_eq!(build().view(), build().view());
    let grid = build();
    assert_eq!(grid.view(), grid.view());
}

#[test]
fn test_config_from_toml_drives_the_grid() {
    let config = GridConfig::from_toml_str(
        r#"
        title = "Vendors"
        page_size = 5
        show_help = false
        "#,
    )
    .unwrap();
    let grid = people_grid(numbered(12)).with_config(config);
    assert_eq!(grid.total_pages(), 3);
    let view = plain(&grid);
    assert!(view.contains("Vendors"));
    assert!(!view.contains("↑/k"));
}

#[test]
fn test_help_toggles_full_view() {
    let mut grid = people_grid(three_people());
    assert!(plain(&grid).contains("↑/k up"));
    assert!(!plain(&grid).contains("first page"));
    press(&mut grid, '?');
    assert!(plain(&grid).contains("first page"));
    press(&mut grid, '?');
    assert!(!plain(&grid).contains("first page"));
}

#[test]
fn test_blurred_grid_ignores_keys() {
    let mut grid = people_grid(numbered(25));
    grid.blur();
    grid.update(key(KeyCode::Right));
    assert_eq!(grid.current_page(), 1);
    let _ = grid.focus();
    grid.update(key(KeyCode::Right));
    assert_eq!(grid.current_page(), 2);
}
