//! End-to-end selection scenarios covering every combination of database
//! and table include/exclude lists.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use dbselect_core::{TableId, TableSelector};

fn assert_allowed(selector: &TableSelector, database: &str, table: &str) {
    assert!(
        selector.test(&TableId::new(database, table)),
        "expected {database}.{table} to be allowed"
    );
}

fn assert_not_allowed(selector: &TableSelector, database: &str, table: &str) {
    assert!(
        !selector.test(&TableId::new(database, table)),
        "expected {database}.{table} to be rejected"
    );
}

const TABLES: &str = r"db1\.A,db1\.B,db2\.C";

#[test]
fn test_all_lists_with_blank_values() {
    let selector = TableSelector::builder()
        .include_databases("connector_test")
        .exclude_databases("")
        .include_tables("")
        .exclude_tables("")
        .build()
        .expect("selector should build");

    assert_allowed(&selector, "connector_test", "A");
    assert_allowed(&selector, "connector_test", "B");
    assert_not_allowed(&selector, "other_test", "A");
    assert_not_allowed(&selector, "other_test", "B");
}

#[test]
fn test_database_include_and_table_include() {
    let selector = TableSelector::builder()
        .include_databases("db1,db2")
        .include_tables(TABLES)
        .build()
        .expect("selector should build");

    assert_allowed(&selector, "db1", "A");
    assert_allowed(&selector, "db1", "B");
    assert_not_allowed(&selector, "db1", "D");
    assert_not_allowed(&selector, "db1", "E");
    assert_not_allowed(&selector, "db1", "F");

    assert_allowed(&selector, "db2", "C");
    assert_not_allowed(&selector, "db2", "G");
    assert_not_allowed(&selector, "db2", "H");

    assert_not_allowed(&selector, "db3", "A");
    assert_not_allowed(&selector, "db4", "A");
}

#[test]
fn test_database_include_and_table_exclude() {
    let selector = TableSelector::builder()
        .include_databases("db1,db2")
        .exclude_tables(TABLES)
        .build()
        .expect("selector should build");

    assert_not_allowed(&selector, "db1", "A");
    assert_not_allowed(&selector, "db1", "B");
    assert_allowed(&selector, "db1", "D");
    assert_allowed(&selector, "db1", "E");
    assert_allowed(&selector, "db1", "F");

    assert_not_allowed(&selector, "db2", "C");
    assert_allowed(&selector, "db2", "G");
    assert_allowed(&selector, "db2", "H");

    assert_not_allowed(&selector, "db3", "A");
    assert_not_allowed(&selector, "db4", "A");
}

#[test]
fn test_database_exclude_and_table_include() {
    let selector = TableSelector::builder()
        .exclude_databases("db3,db4")
        .include_tables(TABLES)
        .build()
        .expect("selector should build");

    assert_allowed(&selector, "db1", "A");
    assert_allowed(&selector, "db1", "B");
    assert_not_allowed(&selector, "db1", "D");
    assert_not_allowed(&selector, "db1", "E");
    assert_not_allowed(&selector, "db1", "F");

    assert_allowed(&selector, "db2", "C");
    assert_not_allowed(&selector, "db2", "G");
    assert_not_allowed(&selector, "db2", "H");

    assert_not_allowed(&selector, "db3", "A");
    assert_not_allowed(&selector, "db4", "A");
}

#[test]
fn test_database_exclude_and_table_exclude() {
    let selector = TableSelector::builder()
        .exclude_databases("db3,db4")
        .exclude_tables(TABLES)
        .build()
        .expect("selector should build");

    assert_not_allowed(&selector, "db1", "A");
    assert_not_allowed(&selector, "db1", "B");
    assert_allowed(&selector, "db1", "D");
    assert_allowed(&selector, "db1", "E");
    assert_allowed(&selector, "db1", "F");

    assert_not_allowed(&selector, "db2", "C");
    assert_allowed(&selector, "db2", "G");
    assert_allowed(&selector, "db2", "H");

    assert_not_allowed(&selector, "db3", "A");
    assert_not_allowed(&selector, "db4", "A");
}

#[test]
fn test_table_include_only() {
    let selector = TableSelector::builder()
        .include_tables(TABLES)
        .build()
        .expect("selector should build");

    assert_allowed(&selector, "db1", "A");
    assert_allowed(&selector, "db1", "B");
    assert_not_allowed(&selector, "db1", "D");
    assert_not_allowed(&selector, "db1", "E");
    assert_not_allowed(&selector, "db1", "F");

    assert_allowed(&selector, "db2", "C");
    assert_not_allowed(&selector, "db2", "G");
    assert_not_allowed(&selector, "db2", "H");

    assert_not_allowed(&selector, "db3", "A");
    assert_not_allowed(&selector, "db4", "A");
}

#[test]
fn test_table_exclude_only() {
    let selector = TableSelector::builder()
        .exclude_tables(TABLES)
        .build()
        .expect("selector should build");

    assert_not_allowed(&selector, "db1", "A");
    assert_not_allowed(&selector, "db1", "B");
    assert_allowed(&selector, "db1", "D");
    assert_allowed(&selector, "db1", "E");
    assert_allowed(&selector, "db1", "F");

    assert_not_allowed(&selector, "db2", "C");
    assert_allowed(&selector, "db2", "G");
    assert_allowed(&selector, "db2", "H");

    assert_allowed(&selector, "db3", "A");
    assert_allowed(&selector, "db4", "A");
}

#[test]
fn test_database_include_only() {
    let selector = TableSelector::builder()
        .include_databases("db1,db2")
        .build()
        .expect("selector should build");

    assert_allowed(&selector, "db1", "A");
    assert_allowed(&selector, "db2", "A");
    assert_not_allowed(&selector, "db3", "A");
    assert_not_allowed(&selector, "db4", "A");
}

#[test]
fn test_database_exclude_only() {
    let selector = TableSelector::builder()
        .exclude_databases("db1,db2")
        .build()
        .expect("selector should build");

    assert_not_allowed(&selector, "db1", "A");
    assert_not_allowed(&selector, "db2", "A");
    assert_allowed(&selector, "db3", "A");
    assert_allowed(&selector, "db4", "A");
}

#[test]
fn test_regex_wildcards_across_axes() {
    let selector = TableSelector::builder()
        .include_databases("inventory_.*")
        .exclude_tables(r".*\.tmp_.*,.*\.audit")
        .build()
        .expect("selector should build");

    assert_allowed(&selector, "inventory_eu", "orders");
    assert_not_allowed(&selector, "inventory_eu", "tmp_orders");
    assert_not_allowed(&selector, "inventory_us", "audit");
    assert_allowed(&selector, "inventory_us", "audit_log");
    assert_not_allowed(&selector, "inventory", "orders");
}
