//! Integration Tests Module
//!
//! Full inspection flows: source collection, account loading, schema
//! queries and the CLI report.
