//! List command implementation.

use promptlib_core::config::types::ResolvedConfig;
use promptlib_core::query::PromptQuery;

use super::open_library;
use super::output::{print_page_json, print_page_table};
use crate::ListArgs;

pub fn run(cfg: &ResolvedConfig, args: ListArgs) {
    let library = open_library(cfg, "list");

    let query = PromptQuery {
        search: args.search,
        category: args.category,
        page: args.page,
        page_size: args.page_size.unwrap_or(cfg.page_size),
    };

    let page = library.query(&query);

    if args.json {
        print_page_json(&page);
    } else {
        print_page_table(&page);
    }
}
