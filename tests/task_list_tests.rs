//! Task list mutation and query tests
mod common;

use chrono::NaiveDate;
use common::{FailingStore, MemoryStore, RecordingSink, rendered, todo};
use taskbook::formatting::{
    ERROR_TASK_NO_MATCH_MESSAGE, ERROR_WRITE_TO_FILE_MESSAGE, LIST_TASK_MESSAGE,
    TASK_MATCH_FOUND_MESSAGE,
};
use taskbook::{Task, TaskError, TaskList};

fn three_tasks() -> TaskList {
    TaskList::from_tasks(vec![todo("first"), todo("second"), todo("third")])
}

#[test]
fn test_add_to_empty_list_then_list() {
    let mut list = TaskList::new();
    let mut ui = RecordingSink::new();
    let mut store = MemoryStore::new();

    list.add(todo("read book"), &mut ui, &mut store);

    assert_eq!(list.len(), 1);
    assert_eq!(
        ui.lines,
        vec![
            "Got it. I've added this task:",
            "  [T][ ] read book",
            "Now you have 1 task in the list.",
        ]
    );
    assert_eq!(store.writes, vec![vec!["[T][ ] read book".to_string()]]);

    ui.clear();
    list.list_all(&mut ui);
    assert_eq!(ui.lines, vec![LIST_TASK_MESSAGE, "1.[T][ ] read book"]);
    assert!(ui.errors.is_empty());
}

#[test]
fn test_add_appends_exactly_one_task_at_the_end() {
    let mut list = three_tasks();
    let mut ui = RecordingSink::new();
    let mut store = MemoryStore::new();

    let task = Task::deadline("return book", "2026-10-20 1800").unwrap();
    let expected = task.to_string();
    list.add(task, &mut ui, &mut store);

    assert_eq!(list.len(), 4);
    assert_eq!(list.tasks().last().unwrap().to_string(), expected);
    assert_eq!(store.last_write().unwrap().len(), 4);
}

#[test]
fn test_list_all_on_empty_list_prints_only_header() {
    let list = TaskList::new();
    let mut ui = RecordingSink::new();

    list.list_all(&mut ui);

    assert_eq!(ui.lines, vec![LIST_TASK_MESSAGE]);
}

#[test]
fn test_delete_renumbers_remaining_tasks() {
    let mut list = three_tasks();
    let mut ui = RecordingSink::new();
    let mut store = MemoryStore::new();

    list.delete(2, &mut ui, &mut store);

    assert_eq!(list.len(), 2);
    assert_eq!(
        ui.lines,
        vec![
            "Noted. I've removed this task:",
            "  [T][ ] second",
            "Now you have 2 tasks in the list.",
        ]
    );
    assert_eq!(
        store.writes,
        vec![vec!["[T][ ] first".to_string(), "[T][ ] third".to_string()]]
    );

    ui.clear();
    list.list_all(&mut ui);
    assert_eq!(
        ui.lines,
        vec![LIST_TASK_MESSAGE, "1.[T][ ] first", "2.[T][ ] third"]
    );
}

#[test]
fn test_out_of_range_numbers_change_nothing() {
    for number in [0, -1, 4, 100] {
        let mut list = three_tasks();
        let before = rendered(list.tasks());
        let mut ui = RecordingSink::new();
        let mut store = MemoryStore::new();

        list.mark_done(number, &mut ui, &mut store);
        list.delete(number, &mut ui, &mut store);

        assert_eq!(rendered(list.tasks()), before);
        assert!(store.writes.is_empty(), "no persistence for {}", number);
        assert!(ui.lines.is_empty());
        let expected = TaskError::InvalidTaskNumber(number).to_string();
        assert_eq!(ui.errors, vec![expected.clone(), expected]);
    }
}

#[test]
fn test_mark_done_is_idempotent() {
    let mut list = three_tasks();
    let mut ui = RecordingSink::new();
    let mut store = MemoryStore::new();

    list.mark_done(1, &mut ui, &mut store);
    let once = rendered(list.tasks());
    list.mark_done(1, &mut ui, &mut store);

    assert_eq!(rendered(list.tasks()), once);
    assert_eq!(once[0], "[T][X] first");
    assert_eq!(
        &ui.lines[..2],
        &["Nice! I've marked this task as done:", "  [T][X] first"]
    );
    assert_eq!(store.writes.len(), 2);
    assert!(ui.errors.is_empty());
}

#[test]
fn test_failed_write_is_reported_but_not_rolled_back() {
    let mut list = TaskList::new();
    let mut ui = RecordingSink::new();
    let mut store = FailingStore::default();

    list.add(todo("read book"), &mut ui, &mut store);
    list.mark_done(1, &mut ui, &mut store);
    list.add(todo("write essay"), &mut ui, &mut store);
    list.delete(2, &mut ui, &mut store);

    assert_eq!(rendered(list.tasks()), vec!["[T][X] read book"]);
    assert_eq!(store.attempts, 4);
    assert_eq!(ui.errors, vec![ERROR_WRITE_TO_FILE_MESSAGE; 4]);
}

#[test]
fn test_find_by_keyword_is_case_insensitive() {
    let list = TaskList::from_tasks(vec![todo("Buy Milk"), todo("call John")]);
    let mut ui = RecordingSink::new();

    list.find_by_keyword("milk", &mut ui);
    assert_eq!(ui.lines, vec![TASK_MATCH_FOUND_MESSAGE, "1.[T][ ] Buy Milk"]);

    ui.clear();
    list.find_by_keyword("MILK", &mut ui);
    assert_eq!(ui.lines, vec![TASK_MATCH_FOUND_MESSAGE, "1.[T][ ] Buy Milk"]);
}

#[test]
fn test_find_by_keyword_preserves_order_and_renumbers() {
    let list = TaskList::from_tasks(vec![
        todo("Buy Milk"),
        todo("go jogging"),
        todo("feed cat"),
        todo("call John"),
    ]);
    let mut ui = RecordingSink::new();

    list.find_by_keyword("o", &mut ui);

    assert_eq!(
        ui.lines,
        vec![
            TASK_MATCH_FOUND_MESSAGE,
            "1.[T][ ] go jogging",
            "2.[T][ ] call John",
        ]
    );
}

#[test]
fn test_find_by_keyword_without_matches() {
    let list = three_tasks();
    let mut ui = RecordingSink::new();

    list.find_by_keyword("zebra", &mut ui);

    assert_eq!(ui.lines, vec![ERROR_TASK_NO_MATCH_MESSAGE]);
}

#[test]
fn test_raw_text_date_is_found_by_keyword_not_by_date() {
    let list = TaskList::from_tasks(vec![
        Task::deadline("essay", "next week").unwrap(),
        Task::deadline("report", "2026-10-20 0900").unwrap(),
    ]);

    let keyword_matches = list.matching_keyword("next");
    assert_eq!(keyword_matches.len(), 1);
    assert_eq!(keyword_matches[0].description(), "essay");

    // Parsed dates are not searched as text
    assert!(list.matching_keyword("oct").is_empty());

    for day in 1..=31 {
        let date = NaiveDate::from_ymd_opt(2026, 10, day).unwrap();
        let (deadlines, events) = list.on_date(date);
        assert!(deadlines.iter().all(|t| t.description() != "essay"));
        assert!(events.is_empty());
    }
}

#[test]
fn test_find_by_date_buckets_deadlines_and_events() {
    let list = TaskList::from_tasks(vec![
        Task::event("standup", "2026-10-20 0930").unwrap(),
        todo("2026-10-20"),
        Task::deadline("report", "2026-10-20 1800").unwrap(),
        Task::deadline("taxes", "2026-10-21 1800").unwrap(),
        Task::event("dinner", "20/10/2026 1930").unwrap(),
        Task::deadline("essay", "Oct 20").unwrap(),
    ]);
    let mut ui = RecordingSink::new();

    list.find_by_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(), &mut ui);

    assert_eq!(
        ui.lines,
        vec![
            "You have 1 deadline and 2 events on Oct 20 2026.",
            "Deadlines:",
            "1.[D][ ] report (by: Oct 20 2026 1800)",
            "Events:",
            "1.[E][ ] standup (at: Oct 20 2026 0930)",
            "2.[E][ ] dinner (at: Oct 20 2026 1930)",
        ]
    );
}

#[test]
fn test_find_by_date_skips_empty_buckets() {
    let list = TaskList::from_tasks(vec![Task::event("standup", "2026-10-20 0930").unwrap()]);
    let mut ui = RecordingSink::new();

    list.find_by_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(), &mut ui);
    assert_eq!(
        ui.lines,
        vec![
            "You have 0 deadlines and 1 event on Oct 20 2026.",
            "Events:",
            "1.[E][ ] standup (at: Oct 20 2026 0930)",
        ]
    );

    ui.clear();
    list.find_by_date(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(), &mut ui);
    assert_eq!(
        ui.lines,
        vec!["You have 0 deadlines and 0 events on Jan 01 2027."]
    );
}

#[test]
fn test_get_uses_one_based_numbers() {
    let list = three_tasks();
    assert_eq!(list.get(1).unwrap().description(), "first");
    assert_eq!(list.get(3).unwrap().description(), "third");
    assert_eq!(list.get(0).unwrap_err(), TaskError::InvalidTaskNumber(0));
}
